use chrono::Local;
use dioxus::prelude::*;
use shared_ui::{
    Badge, Card, CardContent, CardDescription, CardHeader, CardTitle, PageHeader, PageTitle,
    Skeleton,
};

use crate::services::appointments;
use crate::views::components::{appointment_badge, ScreenMeta};

/// Dentist landing screen: today's own agenda.
#[component]
pub fn DentistHome(role: String, user_name: String, view: String) -> Element {
    let today = use_hook(|| Local::now().date_naive().format("%Y-%m-%d").to_string());

    let today_for_fetch = today.clone();
    let agenda = use_resource(move || {
        let date = today_for_fetch.clone();
        async move { appointments::my_agenda(&date).await }
    });

    let content = match &*agenda.read() {
        Some(Ok(items)) => {
            let count = items.len();
            rsx! {
                Card {
                    CardHeader {
                        CardTitle { "Agenda de hoy" }
                        CardDescription { "{count} pacientes" }
                    }
                    CardContent {
                        if items.is_empty() {
                            p { class: "empty-state", "Hoy no tienes pacientes agendados." }
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
                                                        "{appointment.patient_name} — {appointment.reason}"
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
            Card {
                CardContent {
                    for _ in 0..4 {
                        Skeleton { style: "height: 2.5rem; width: 100%; margin-bottom: 0.5rem;" }
                    }
                }
            }
        },
    };

    rsx! {
        PageHeader {
            PageTitle { "Dr. {user_name}" }
        }
        ScreenMeta { role, view, user_name: user_name.clone() }

        {content}
    }
}
