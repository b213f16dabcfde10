use serde::{Deserialize, Serialize};

/// Clinic user role controlling which screens a session can reach.
///
/// - `Patient`: sees their own appointments, history and invoices.
/// - `Receptionist`: runs the appointment desk and patient directory.
/// - `Dentist`: clinical agenda, records and the odontogram editor.
/// - `Admin`: staff management, clinic-wide stats and reports.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Role {
    #[default]
    Patient,
    Receptionist,
    Dentist,
    Admin,
}

impl Role {
    /// Parse a backend role code. Unknown values default to Patient.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "ADMIN" => Role::Admin,
            "DENTIST" => Role::Dentist,
            "RECEPTIONIST" => Role::Receptionist,
            _ => Role::Patient,
        }
    }

    /// Uppercase wire code as the backend emits it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Patient => "PATIENT",
            Role::Receptionist => "RECEPTIONIST",
            Role::Dentist => "DENTIST",
            Role::Admin => "ADMIN",
        }
    }
}

/// All roles, in display order.
pub const ALL_ROLES: &[Role] = &[Role::Patient, Role::Receptionist, Role::Dentist, Role::Admin];

/// Authenticated user info (safe to hold client-side).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Raw backend role code; parse with [`Role::from_str_or_default`].
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl AuthUser {
    /// "First Last" for display and initials derivation.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Login request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct LoginRequest {
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 8, message = "Password must be at least 8 characters"))
    )]
    pub password: String,
}

/// Successful login payload: the session user plus the bearer token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub user: AuthUser,
    pub token: String,
}

/// A clinic staff member, as managed from the admin staff screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StaffMember {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub active: bool,
}

/// Request body for registering a staff member.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct NewStaffMember {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "First name is required"))
    )]
    pub first_name: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Last name is required"))
    )]
    pub last_name: String,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub email: String,
    pub role: String,
}

/// Aggregated clinic statistics for the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClinicStats {
    pub appointments_today: i64,
    pub pending_confirmations: i64,
    pub patients_total: i64,
    pub revenue_month_cents: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_from_str_or_default_known_codes() {
        assert_eq!(Role::from_str_or_default("ADMIN"), Role::Admin);
        assert_eq!(Role::from_str_or_default("admin"), Role::Admin);
        assert_eq!(Role::from_str_or_default("DENTIST"), Role::Dentist);
        assert_eq!(Role::from_str_or_default("RECEPTIONIST"), Role::Receptionist);
        assert_eq!(Role::from_str_or_default("PATIENT"), Role::Patient);
    }

    #[test]
    fn role_unknown_degrades_to_patient() {
        assert_eq!(Role::from_str_or_default(""), Role::Patient);
        assert_eq!(Role::from_str_or_default("SUPERUSER"), Role::Patient);
        assert_eq!(Role::from_str_or_default("doctor"), Role::Patient);
    }

    #[test]
    fn role_as_str_roundtrip() {
        for role in ALL_ROLES {
            assert_eq!(Role::from_str_or_default(role.as_str()), *role);
        }
    }

    #[test]
    fn auth_user_deserializes_from_api_json() {
        let json = r#"{"id": 7, "email": "ana@clinic.test", "first_name": "Ana",
                       "last_name": "Gomez", "role": "RECEPTIONIST"}"#;
        let user: AuthUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.full_name(), "Ana Gomez");
        assert_eq!(Role::from_str_or_default(&user.role), Role::Receptionist);
        assert_eq!(user.phone, None);
    }

    #[test]
    fn login_response_roundtrip() {
        let resp = LoginResponse {
            user: AuthUser {
                id: 1,
                email: "x@y.z".into(),
                first_name: "X".into(),
                last_name: "Y".into(),
                role: "PATIENT".into(),
                phone: None,
            },
            token: "abc123".into(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        let parsed: LoginResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(resp, parsed);
    }
}
