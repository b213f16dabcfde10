//! Typed wrappers around the clinic REST API. Every function returns a
//! `Result<Dto, AppError>` future; screens own their fetch lifecycles.

pub mod appointments;
pub mod auth;
pub mod billing;
pub mod dashboard;
pub mod http;
pub mod patients;
pub mod staff;
