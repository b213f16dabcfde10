use shared_types::{AppError, ClinicStats, MonthlyReport};

use super::http;

/// Clinic-wide stats for the admin dashboard.
pub async fn clinic_stats() -> Result<ClinicStats, AppError> {
    http::get("/dashboard/stats").await
}

/// Aggregated report for one calendar month ("2026-08").
pub async fn monthly_report(month: &str) -> Result<MonthlyReport, AppError> {
    http::get(&format!(
        "/dashboard/reports?month={}",
        urlencoding::encode(month)
    ))
    .await
}
