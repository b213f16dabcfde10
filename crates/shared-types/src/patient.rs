use serde::{Deserialize, Serialize};

/// A patient in the clinic directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// ISO date of birth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
}

impl Patient {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// One entry in a patient's clinical history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryEntry {
    pub id: i64,
    /// ISO date of the visit.
    pub date: String,
    pub dentist_name: String,
    pub procedure: String,
    #[serde(default)]
    pub notes: String,
}

/// Full clinical record for one patient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientRecord {
    pub patient: Patient,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub entries: Vec<HistoryEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patient_full_name_trims() {
        let p = Patient {
            id: 1,
            first_name: "Luisa".into(),
            last_name: "".into(),
            email: "l@c.test".into(),
            phone: None,
            birth_date: None,
        };
        assert_eq!(p.full_name(), "Luisa");
    }

    #[test]
    fn record_defaults_empty_collections() {
        let json = r#"{"patient": {"id": 2, "first_name": "A", "last_name": "B",
                       "email": "a@b.c"}}"#;
        let record: PatientRecord = serde_json::from_str(json).unwrap();
        assert!(record.allergies.is_empty());
        assert!(record.entries.is_empty());
    }
}
