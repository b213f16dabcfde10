use serde_json::json;
use shared_types::{AppError, NewStaffMember, StaffMember};

use super::http;

pub async fn list() -> Result<Vec<StaffMember>, AppError> {
    http::get("/staff").await
}

/// Dentists only, for appointment booking forms.
pub async fn dentists() -> Result<Vec<StaffMember>, AppError> {
    http::get("/staff?role=DENTIST").await
}

pub async fn create(member: &NewStaffMember) -> Result<StaffMember, AppError> {
    http::post("/staff", member).await
}

pub async fn set_active(id: i64, active: bool) -> Result<StaffMember, AppError> {
    http::put(&format!("/staff/{id}/active"), &json!({ "active": active })).await
}
