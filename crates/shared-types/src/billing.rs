use serde::{Deserialize, Serialize};

/// Payment state of an invoice.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum InvoiceStatus {
    #[default]
    Pending,
    Paid,
    Overdue,
    Void,
}

impl InvoiceStatus {
    /// Parse a backend status string. Unknown values default to Pending.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "paid" => InvoiceStatus::Paid,
            "overdue" => InvoiceStatus::Overdue,
            "void" => InvoiceStatus::Void,
            _ => InvoiceStatus::Pending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Overdue => "overdue",
            InvoiceStatus::Void => "void",
        }
    }
}

/// A billed treatment. Amounts are integer cents; the UI formats them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Invoice {
    pub id: i64,
    pub patient_id: i64,
    pub patient_name: String,
    /// ISO issue date.
    pub date: String,
    pub concept: String,
    pub total_cents: i64,
    pub status: String,
}

impl Invoice {
    pub fn status(&self) -> InvoiceStatus {
        InvoiceStatus::from_str_or_default(&self.status)
    }
}

/// Aggregates for one calendar month, shown on the admin reports screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyReport {
    /// "YYYY-MM".
    pub month: String,
    pub invoices_count: i64,
    pub revenue_cents: i64,
    pub completed_appointments: i64,
    pub new_patients: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invoice_status_parsing() {
        assert_eq!(InvoiceStatus::from_str_or_default("paid"), InvoiceStatus::Paid);
        assert_eq!(
            InvoiceStatus::from_str_or_default("OVERDUE"),
            InvoiceStatus::Overdue
        );
        assert_eq!(
            InvoiceStatus::from_str_or_default("unknown"),
            InvoiceStatus::Pending
        );
    }

    #[test]
    fn invoice_roundtrip() {
        let inv = Invoice {
            id: 9,
            patient_id: 2,
            patient_name: "Juan Perez".into(),
            date: "2026-07-01".into(),
            concept: "Limpieza".into(),
            total_cents: 4_500,
            status: "pending".into(),
        };
        let json = serde_json::to_string(&inv).unwrap();
        let parsed: Invoice = serde_json::from_str(&json).unwrap();
        assert_eq!(inv, parsed);
        assert_eq!(parsed.status(), InvoiceStatus::Pending);
    }
}
