use serde_json::json;
use shared_types::{AppError, Invoice};

use super::http;

/// Invoices of the signed-in patient.
pub async fn list_mine() -> Result<Vec<Invoice>, AppError> {
    http::get("/invoices/mine").await
}

/// All invoices, optionally filtered by status.
pub async fn list(status: Option<&str>) -> Result<Vec<Invoice>, AppError> {
    match status {
        Some(status) => {
            http::get(&format!("/invoices?status={}", urlencoding::encode(status))).await
        }
        None => http::get("/invoices").await,
    }
}

/// Register a payment at the front desk.
pub async fn register_payment(id: i64) -> Result<Invoice, AppError> {
    http::put(&format!("/invoices/{id}/pay"), &json!({})).await
}
