use chrono::Local;
use dioxus::prelude::*;
use shared_types::AppointmentStatus;
use shared_ui::{
    Badge, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, Input, PageHeader,
    PageTitle, Skeleton,
};

use crate::services::appointments;
use crate::views::components::{appointment_badge, ScreenMeta};

/// Dentist agenda for an arbitrary day, with completion marking.
#[component]
pub fn DentistAgenda(role: String, user_name: String, view: String) -> Element {
    let mut date = use_signal(|| Local::now().date_naive().format("%Y-%m-%d").to_string());

    let mut agenda = use_resource(move || {
        let date = date.read().clone();
        async move { appointments::my_agenda(&date).await }
    });

    let content = match &*agenda.read() {
        Some(Ok(items)) => rsx! {
            Card {
                CardHeader {
                    CardTitle { "Pacientes del día" }
                }
                CardContent {
                    if items.is_empty() {
                        p { class: "empty-state", "Sin pacientes para esta fecha." }
                    } else {
                        div { class: "appointment-list",
                            for appointment in items.iter() {
                                {
                                    let (variant, label) = appointment_badge(appointment.status());
                                    let id = appointment.id;
                                    let completable = appointment.status() == AppointmentStatus::Confirmed;
                                    rsx! {
                                        div { key: "{id}", class: "appointment-row",
                                            div { class: "appointment-row-main",
                                                span { class: "appointment-row-date", "{appointment.slot}" }
                                                span { class: "appointment-row-who",
                                                    "{appointment.patient_name} — {appointment.reason}"
                                                }
                                            }
                                            Badge { variant: variant, "{label}" }
                                            if completable {
                                                Button {
                                                    variant: ButtonVariant::Secondary,
                                                    onclick: move |_| {
                                                        spawn(async move {
                                                            if appointments::complete(id).await.is_ok() {
                                                                agenda.restart();
                                                            }
                                                        });
                                                    },
                                                    "Marcar atendida"
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
        },
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
                    Skeleton { style: "height: 8rem; width: 100%;" }
                }
            }
        },
    };

    rsx! {
        PageHeader {
            PageTitle { "Mi agenda" }
        }
        ScreenMeta { role, view, user_name }

        Card {
            CardContent {
                div { class: "filter-bar",
                    label { class: "filter-label", "Fecha" }
                    Input {
                        input_type: "date",
                        value: date(),
                        on_input: move |e: FormEvent| date.set(e.value()),
                    }
                }
            }
        }

        {content}
    }
}
