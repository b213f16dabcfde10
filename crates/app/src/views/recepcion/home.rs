use chrono::Local;
use dioxus::prelude::*;
use shared_types::AppointmentStatus;
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, CardHeader, CardTitle, PageHeader, PageTitle, Skeleton,
};

use crate::services::appointments;
use crate::views::components::{appointment_badge, ScreenMeta};

/// Front-desk landing screen: today's appointments and what still needs a
/// confirmation call.
#[component]
pub fn ReceptionHome(role: String, user_name: String, view: String) -> Element {
    let today = use_hook(|| Local::now().date_naive().format("%Y-%m-%d").to_string());

    let today_for_fetch = today.clone();
    let agenda = use_resource(move || {
        let date = today_for_fetch.clone();
        async move { appointments::list_for_date(&date).await }
    });

    let content = match &*agenda.read() {
        Some(Ok(items)) => {
            let total = items.len();
            let unconfirmed = items
                .iter()
                .filter(|a| a.status() == AppointmentStatus::Scheduled)
                .count();
            rsx! {
                div { class: "stats-grid",
                    StatCard { label: "Citas hoy", value: total as i64, variant: BadgeVariant::Primary }
                    StatCard { label: "Por confirmar", value: unconfirmed as i64, variant: BadgeVariant::Destructive }
                }
                Card {
                    CardHeader {
                        CardTitle { "Agenda de hoy" }
                    }
                    CardContent {
                        if items.is_empty() {
                            p { class: "empty-state", "Sin citas para hoy." }
                        } else {
                            div { class: "appointment-list",
                                for appointment in items.iter() {
                                    {
                                        let (variant, label) = appointment_badge(appointment.status());
                                        rsx! {
                                            div { key: "{appointment.id}", class: "appointment-row",
                                                div { class: "appointment-row-main",
                                                    span { class: "appointment-row-date", "{appointment.slot}" }
                                                    span { class: "appointment-row-who",
                                                        "{appointment.patient_name} · Dr. {appointment.dentist_name}"
                                                    }
                                                }
                                                Badge { variant: variant, "{label}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
        Some(Err(err)) => rsx! {
            Card {
                CardContent {
                    p { class: "load-error", "{err.message}" }
                }
            }
        },
        None => rsx! {
            div { class: "stats-grid",
                for _ in 0..2 {
                    Card {
                        CardContent {
                            Skeleton { style: "height: 2.5rem; width: 100%;" }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        PageHeader {
            PageTitle { "Recepción" }
        }
        ScreenMeta { role, view, user_name }

        {content}
    }
}

/// A single stat card.
#[component]
fn StatCard(label: String, value: i64, variant: BadgeVariant) -> Element {
    rsx! {
        Card {
            CardContent {
                div { class: "stat-card",
                    span { class: "stat-card-value", "{value}" }
                    Badge { variant: variant, "{label}" }
                }
            }
        }
    }
}
