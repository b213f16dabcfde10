use shared_types::{AppError, Odontogram, Patient, PatientRecord};

use super::http;

/// Search the patient directory. An empty query lists the first page.
pub async fn search(query: &str) -> Result<Vec<Patient>, AppError> {
    http::get(&format!("/patients?q={}", urlencoding::encode(query))).await
}

/// Full clinical record for one patient.
pub async fn record(patient_id: i64) -> Result<PatientRecord, AppError> {
    http::get(&format!("/patients/{patient_id}/record")).await
}

/// Record of the signed-in patient.
pub async fn my_record() -> Result<PatientRecord, AppError> {
    http::get("/patients/me/record").await
}

/// Odontogram of the signed-in patient.
pub async fn my_odontogram() -> Result<Odontogram, AppError> {
    http::get("/patients/me/odontogram").await
}

pub async fn odontogram(patient_id: i64) -> Result<Odontogram, AppError> {
    http::get(&format!("/patients/{patient_id}/odontogram")).await
}

pub async fn save_odontogram(odontogram: &Odontogram) -> Result<Odontogram, AppError> {
    http::put(
        &format!("/patients/{}/odontogram", odontogram.patient_id),
        odontogram,
    )
    .await
}
