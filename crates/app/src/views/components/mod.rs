pub mod calendario;
pub mod odontograma;

use dioxus::prelude::*;
use shared_types::{AppointmentStatus, InvoiceStatus};
use shared_ui::BadgeVariant;

/// Badge styling for an appointment status.
pub fn appointment_badge(status: AppointmentStatus) -> (BadgeVariant, &'static str) {
    match status {
        AppointmentStatus::Scheduled => (BadgeVariant::Secondary, "Agendada"),
        AppointmentStatus::Confirmed => (BadgeVariant::Primary, "Confirmada"),
        AppointmentStatus::Completed => (BadgeVariant::Success, "Atendida"),
        AppointmentStatus::Cancelled => (BadgeVariant::Destructive, "Cancelada"),
    }
}

/// Badge styling for an invoice status.
pub fn invoice_badge(status: InvoiceStatus) -> (BadgeVariant, &'static str) {
    match status {
        InvoiceStatus::Pending => (BadgeVariant::Secondary, "Pendiente"),
        InvoiceStatus::Paid => (BadgeVariant::Success, "Pagada"),
        InvoiceStatus::Overdue => (BadgeVariant::Destructive, "Vencida"),
        InvoiceStatus::Void => (BadgeVariant::Outline, "Anulada"),
    }
}

/// Session trail shown under every screen title: where the hash says the
/// user is, and who is signed in.
#[component]
pub fn ScreenMeta(role: String, view: String, user_name: String) -> Element {
    rsx! {
        div { class: "screen-meta",
            span { class: "screen-meta-path", "{role} / {view}" }
            span { class: "screen-meta-user", "{user_name}" }
        }
    }
}
