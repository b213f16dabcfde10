use serde::{Deserialize, Serialize};

/// Lifecycle state of an appointment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum AppointmentStatus {
    #[default]
    Scheduled,
    Confirmed,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    /// Parse a backend status string. Unknown values default to Scheduled.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "confirmed" => AppointmentStatus::Confirmed,
            "completed" => AppointmentStatus::Completed,
            "cancelled" => AppointmentStatus::Cancelled,
            _ => AppointmentStatus::Scheduled,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
        }
    }
}

/// A booked appointment.
///
/// `date` is an ISO date ("2026-08-06"); `slot` is the half-open starting
/// hour of the visit in "HH:MM" form, aligned to the clinic's slot grid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    pub id: i64,
    pub patient_id: i64,
    pub patient_name: String,
    pub dentist_id: i64,
    pub dentist_name: String,
    pub date: String,
    pub slot: String,
    pub status: String,
    #[serde(default)]
    pub reason: String,
}

impl Appointment {
    pub fn status(&self) -> AppointmentStatus {
        AppointmentStatus::from_str_or_default(&self.status)
    }
}

/// Request body for booking an appointment. A missing `patient_id` books
/// for the signed-in patient (the desk always supplies one).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewAppointment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<i64>,
    pub dentist_id: i64,
    pub date: String,
    pub slot: String,
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_from_str_or_default_known_values() {
        assert_eq!(
            AppointmentStatus::from_str_or_default("confirmed"),
            AppointmentStatus::Confirmed
        );
        assert_eq!(
            AppointmentStatus::from_str_or_default("CANCELLED"),
            AppointmentStatus::Cancelled
        );
        assert_eq!(
            AppointmentStatus::from_str_or_default("completed"),
            AppointmentStatus::Completed
        );
    }

    #[test]
    fn status_unknown_falls_to_scheduled() {
        assert_eq!(
            AppointmentStatus::from_str_or_default("whatever"),
            AppointmentStatus::Scheduled
        );
        assert_eq!(
            AppointmentStatus::from_str_or_default(""),
            AppointmentStatus::Scheduled
        );
    }

    #[test]
    fn appointment_deserializes_from_api_json() {
        let json = r#"{
            "id": 3, "patient_id": 11, "patient_name": "Juan Perez",
            "dentist_id": 4, "dentist_name": "Maria Lopez",
            "date": "2026-08-10", "slot": "09:00", "status": "confirmed"
        }"#;
        let appt: Appointment = serde_json::from_str(json).unwrap();
        assert_eq!(appt.status(), AppointmentStatus::Confirmed);
        assert_eq!(appt.reason, "");
        assert_eq!(appt.slot, "09:00");
    }
}
