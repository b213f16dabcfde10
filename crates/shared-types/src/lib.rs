pub mod error;
pub mod models;

// Clinic domain modules
pub mod appointment;
pub mod billing;
pub mod odontogram;
pub mod patient;

pub use error::*;
pub use models::*;

pub use appointment::*;
pub use billing::*;
pub use odontogram::*;
pub use patient::*;
