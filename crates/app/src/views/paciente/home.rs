use dioxus::prelude::*;
use shared_types::AppointmentStatus;
use shared_ui::{
    Badge, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    PageHeader, PageTitle, Skeleton,
};

use crate::format_helpers::format_date_human;
use crate::routing::hash::set_hash;
use crate::services::appointments;
use crate::views::components::{appointment_badge, ScreenMeta};

/// Patient landing screen: upcoming visits at a glance.
#[component]
pub fn PatientHome(role: String, user_name: String, view: String) -> Element {
    let upcoming = use_resource(move || async move { appointments::list_mine().await });

    let content = match &*upcoming.read() {
        Some(Ok(appointments)) => {
            let pending: Vec<_> = appointments
                .iter()
                .filter(|a| {
                    !matches!(
                        a.status(),
                        AppointmentStatus::Cancelled | AppointmentStatus::Completed
                    )
                })
                .cloned()
                .collect();
            let count = pending.len();
            rsx! {
                Card {
                    CardHeader {
                        CardTitle { "Próximas citas" }
                        CardDescription { "{count} por venir" }
                    }
                    CardContent {
                        if pending.is_empty() {
                            div { class: "empty-state",
                                p { "No tienes citas agendadas." }
                                Button {
                                    variant: ButtonVariant::Primary,
                                    onclick: move |_| set_hash("#paciente/citas"),
                                    "Agendar una cita"
                                }
                            }
                        } else {
                            div { class: "appointment-list",
                                for appointment in pending.iter() {
                                    {
                                        let (variant, label) = appointment_badge(appointment.status());
                                        let date = format_date_human(&appointment.date);
                                        rsx! {
                                            div { key: "{appointment.id}", class: "appointment-row",
                                                div { class: "appointment-row-main",
                                                    span { class: "appointment-row-date", "{date} · {appointment.slot}" }
                                                    span { class: "appointment-row-who", "Dr. {appointment.dentist_name}" }
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
                    for _ in 0..3 {
                        Skeleton { style: "height: 2.5rem; width: 100%; margin-bottom: 0.5rem;" }
                    }
                }
            }
        },
    };

    rsx! {
        PageHeader {
            PageTitle { "Hola, {user_name}" }
        }
        ScreenMeta { role, view, user_name: user_name.clone() }
        {content}
    }
}
