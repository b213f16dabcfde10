use serde_json::json;
use shared_types::{AppError, Appointment, NewAppointment};

use super::http;

/// Appointments of the signed-in patient.
pub async fn list_mine() -> Result<Vec<Appointment>, AppError> {
    http::get("/appointments/mine").await
}

/// Clinic-wide appointments for one ISO date.
pub async fn list_for_date(date: &str) -> Result<Vec<Appointment>, AppError> {
    http::get(&format!("/appointments?date={}", urlencoding::encode(date))).await
}

/// Clinic-wide appointments for the week starting at `week_start` (Monday).
pub async fn list_week(week_start: &str) -> Result<Vec<Appointment>, AppError> {
    http::get(&format!(
        "/appointments?week_start={}",
        urlencoding::encode(week_start)
    ))
    .await
}

/// Today's agenda for the signed-in dentist.
pub async fn my_agenda(date: &str) -> Result<Vec<Appointment>, AppError> {
    http::get(&format!(
        "/appointments/agenda?date={}",
        urlencoding::encode(date)
    ))
    .await
}

pub async fn create(appointment: &NewAppointment) -> Result<Appointment, AppError> {
    http::post("/appointments", appointment).await
}

pub async fn confirm(id: i64) -> Result<Appointment, AppError> {
    http::put(&format!("/appointments/{id}/confirm"), &json!({})).await
}

pub async fn cancel(id: i64) -> Result<Appointment, AppError> {
    http::put(&format!("/appointments/{id}/cancel"), &json!({})).await
}

/// Mark a visit as attended.
pub async fn complete(id: i64) -> Result<Appointment, AppError> {
    http::put(&format!("/appointments/{id}/complete"), &json!({})).await
}
