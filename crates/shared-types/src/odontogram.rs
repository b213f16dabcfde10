use serde::{Deserialize, Serialize};

/// Clinical condition of a single tooth, as drawn on the odontogram.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ToothCondition {
    #[default]
    Healthy,
    Caries,
    Filled,
    Crown,
    RootCanal,
    Extracted,
}

impl ToothCondition {
    /// Parse a backend condition string. Unknown values default to Healthy.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "caries" => ToothCondition::Caries,
            "filled" => ToothCondition::Filled,
            "crown" => ToothCondition::Crown,
            "root_canal" => ToothCondition::RootCanal,
            "extracted" => ToothCondition::Extracted,
            _ => ToothCondition::Healthy,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ToothCondition::Healthy => "healthy",
            ToothCondition::Caries => "caries",
            ToothCondition::Filled => "filled",
            ToothCondition::Crown => "crown",
            ToothCondition::RootCanal => "root_canal",
            ToothCondition::Extracted => "extracted",
        }
    }

    /// CSS class controlling the tooth fill color. Pure lookup; the chart
    /// carries no drawing logic of its own.
    pub fn css_class(&self) -> &'static str {
        match self {
            ToothCondition::Healthy => "tooth-healthy",
            ToothCondition::Caries => "tooth-caries",
            ToothCondition::Filled => "tooth-filled",
            ToothCondition::Crown => "tooth-crown",
            ToothCondition::RootCanal => "tooth-root-canal",
            ToothCondition::Extracted => "tooth-extracted",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ToothCondition::Healthy => "Sano",
            ToothCondition::Caries => "Caries",
            ToothCondition::Filled => "Obturado",
            ToothCondition::Crown => "Corona",
            ToothCondition::RootCanal => "Endodoncia",
            ToothCondition::Extracted => "Extraído",
        }
    }

    /// The condition the editor cycles to on click.
    pub fn next(&self) -> Self {
        match self {
            ToothCondition::Healthy => ToothCondition::Caries,
            ToothCondition::Caries => ToothCondition::Filled,
            ToothCondition::Filled => ToothCondition::Crown,
            ToothCondition::Crown => ToothCondition::RootCanal,
            ToothCondition::RootCanal => ToothCondition::Extracted,
            ToothCondition::Extracted => ToothCondition::Healthy,
        }
    }
}

/// All conditions, in editor cycle order.
pub const ALL_CONDITIONS: &[ToothCondition] = &[
    ToothCondition::Healthy,
    ToothCondition::Caries,
    ToothCondition::Filled,
    ToothCondition::Crown,
    ToothCondition::RootCanal,
    ToothCondition::Extracted,
];

/// State of one tooth, keyed by its FDI number (11–48).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToothRecord {
    pub number: u8,
    pub condition: String,
    #[serde(default)]
    pub notes: String,
}

impl ToothRecord {
    pub fn condition(&self) -> ToothCondition {
        ToothCondition::from_str_or_default(&self.condition)
    }
}

/// A patient's odontogram: the set of teeth with a recorded condition.
/// Teeth absent from `teeth` are implicitly healthy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Odontogram {
    pub patient_id: i64,
    #[serde(default)]
    pub teeth: Vec<ToothRecord>,
}

impl Odontogram {
    pub fn condition_of(&self, number: u8) -> ToothCondition {
        self.teeth
            .iter()
            .find(|t| t.number == number)
            .map(|t| t.condition())
            .unwrap_or_default()
    }

    /// Record a condition for a tooth, replacing any previous entry.
    /// Setting Healthy removes the entry (healthy is the implicit default).
    pub fn set_condition(&mut self, number: u8, condition: ToothCondition) {
        self.teeth.retain(|t| t.number != number);
        if condition != ToothCondition::Healthy {
            self.teeth.push(ToothRecord {
                number,
                condition: condition.as_str().to_string(),
                notes: String::new(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condition_roundtrip() {
        for cond in ALL_CONDITIONS {
            assert_eq!(ToothCondition::from_str_or_default(cond.as_str()), *cond);
        }
    }

    #[test]
    fn condition_unknown_falls_to_healthy() {
        assert_eq!(
            ToothCondition::from_str_or_default("weird"),
            ToothCondition::Healthy
        );
    }

    #[test]
    fn cycle_visits_every_condition() {
        let mut cond = ToothCondition::Healthy;
        let mut seen = vec![cond];
        for _ in 0..5 {
            cond = cond.next();
            seen.push(cond);
        }
        assert_eq!(seen.len(), ALL_CONDITIONS.len());
        assert_eq!(cond.next(), ToothCondition::Healthy);
    }

    #[test]
    fn odontogram_condition_lookup_defaults_healthy() {
        let odo = Odontogram {
            patient_id: 1,
            teeth: vec![ToothRecord {
                number: 16,
                condition: "caries".into(),
                notes: String::new(),
            }],
        };
        assert_eq!(odo.condition_of(16), ToothCondition::Caries);
        assert_eq!(odo.condition_of(21), ToothCondition::Healthy);
    }

    #[test]
    fn set_condition_replaces_and_prunes_healthy() {
        let mut odo = Odontogram {
            patient_id: 1,
            teeth: vec![],
        };
        odo.set_condition(11, ToothCondition::Crown);
        assert_eq!(odo.condition_of(11), ToothCondition::Crown);
        assert_eq!(odo.teeth.len(), 1);

        odo.set_condition(11, ToothCondition::Filled);
        assert_eq!(odo.condition_of(11), ToothCondition::Filled);
        assert_eq!(odo.teeth.len(), 1);

        odo.set_condition(11, ToothCondition::Healthy);
        assert!(odo.teeth.is_empty());
    }
}
