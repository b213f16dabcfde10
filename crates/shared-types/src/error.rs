use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Categorization of application errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    NotFound,
    BadRequest,
    ValidationError,
    Conflict,
    Unauthorized,
    Forbidden,
    Network,
    InternalError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::Conflict => write!(f, "Conflict"),
            AppErrorKind::Unauthorized => write!(f, "Unauthorized"),
            AppErrorKind::Forbidden => write!(f, "Forbidden"),
            AppErrorKind::Network => write!(f, "Network"),
            AppErrorKind::InternalError => write!(f, "InternalError"),
        }
    }
}

/// Structured application error shared by every service wrapper.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::NotFound,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::BadRequest,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Conflict,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Unauthorized,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Forbidden,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Network,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::InternalError,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    /// The error kind implied by an HTTP status code.
    pub fn kind_for_status(status: u16) -> AppErrorKind {
        match status {
            400 => AppErrorKind::BadRequest,
            401 => AppErrorKind::Unauthorized,
            403 => AppErrorKind::Forbidden,
            404 => AppErrorKind::NotFound,
            409 => AppErrorKind::Conflict,
            422 => AppErrorKind::ValidationError,
            _ => AppErrorKind::InternalError,
        }
    }

    /// Parse a structured error from a REST response body.
    ///
    /// The backend emits `{"kind": ..., "message": ..., "field_errors": ...}`
    /// for handled failures. Anything else (HTML error pages, empty bodies)
    /// falls back to a status-derived error with a generic message.
    pub fn from_response_body(status: u16, body: &str) -> Self {
        if let Ok(err) = serde_json::from_str::<Self>(body) {
            return err;
        }
        Self {
            kind: Self::kind_for_status(status),
            message: friendly_status_message(status).to_string(),
            field_errors: HashMap::new(),
        }
    }
}

fn friendly_status_message(status: u16) -> &'static str {
    match status {
        401 => "Your session has expired. Please sign in again.",
        403 => "You do not have access to this resource.",
        404 => "The requested resource was not found.",
        409 => "The request conflicts with the current state.",
        422 => "Some fields are invalid.",
        _ => "Something went wrong. Please try again.",
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(feature = "validation")]
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors = HashMap::new();
        for (field, errs) in errors.field_errors() {
            if let Some(first) = errs.first() {
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                field_errors.insert(field.to_string(), msg);
            }
        }
        AppError::validation("Validation failed", field_errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_response_body_parses_structured_json() {
        let body = r#"{"kind":"Unauthorized","message":"Invalid credentials"}"#;
        let err = AppError::from_response_body(401, body);
        assert_eq!(err.kind, AppErrorKind::Unauthorized);
        assert_eq!(err.message, "Invalid credentials");
    }

    #[test]
    fn from_response_body_falls_back_on_garbage() {
        let err = AppError::from_response_body(404, "<html>nope</html>");
        assert_eq!(err.kind, AppErrorKind::NotFound);
        assert_eq!(err.message, "The requested resource was not found.");
    }

    #[test]
    fn from_response_body_preserves_field_errors() {
        let body =
            r#"{"kind":"ValidationError","message":"Validation failed","field_errors":{"email":"invalid format"}}"#;
        let err = AppError::from_response_body(422, body);
        assert_eq!(err.field_errors.get("email").unwrap(), "invalid format");
    }

    #[test]
    fn kind_for_status_mapping() {
        assert_eq!(AppError::kind_for_status(400), AppErrorKind::BadRequest);
        assert_eq!(AppError::kind_for_status(401), AppErrorKind::Unauthorized);
        assert_eq!(AppError::kind_for_status(403), AppErrorKind::Forbidden);
        assert_eq!(AppError::kind_for_status(404), AppErrorKind::NotFound);
        assert_eq!(AppError::kind_for_status(409), AppErrorKind::Conflict);
        assert_eq!(AppError::kind_for_status(422), AppErrorKind::ValidationError);
        assert_eq!(AppError::kind_for_status(500), AppErrorKind::InternalError);
        assert_eq!(AppError::kind_for_status(502), AppErrorKind::InternalError);
    }

    #[test]
    fn display_impl_formats_correctly() {
        let err = AppError::unauthorized("bad credentials");
        assert_eq!(format!("{}", err), "Unauthorized: bad credentials");
    }

    #[test]
    fn error_roundtrip_through_json() {
        let mut fields = HashMap::new();
        fields.insert("name".to_string(), "too short".to_string());
        let err = AppError::validation("Validation failed", fields);
        let json = serde_json::to_string(&err).unwrap();
        let parsed: AppError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, parsed);
    }
}
