use chrono::Local;
use dioxus::prelude::*;
use shared_ui::{
    Badge, Card, CardContent, CardHeader, CardTitle, DataTable, DataTableBody, DataTableCell,
    DataTableColumn, DataTableHeader, DataTableRow, Input, PageHeader, PageTitle, Skeleton,
};

use crate::services::appointments;
use crate::views::components::{appointment_badge, ScreenMeta};

/// Read-only clinic-wide appointment oversight for one day.
#[component]
pub fn AdminAppointments(role: String, user_name: String, view: String) -> Element {
    let mut date = use_signal(|| Local::now().date_naive().format("%Y-%m-%d").to_string());

    let day = use_resource(move || {
        let date = date.read().clone();
        async move { appointments::list_for_date(&date).await }
    });

    let table = match &*day.read() {
        Some(Ok(items)) => rsx! {
            Card {
                CardHeader {
                    CardTitle { "Citas del día" }
                }
                CardContent {
                    if items.is_empty() {
                        p { class: "empty-state", "Sin citas para esta fecha." }
                    } else {
                        DataTable {
                            DataTableHeader {
                                DataTableColumn { "Hora" }
                                DataTableColumn { "Paciente" }
                                DataTableColumn { "Dentista" }
                                DataTableColumn { "Motivo" }
                                DataTableColumn { "Estado" }
                            }
                            DataTableBody {
                                for appointment in items.iter() {
                                    {
                                        let (variant, label) = appointment_badge(appointment.status());
                                        rsx! {
                                            DataTableRow { key: "{appointment.id}",
                                                DataTableCell { "{appointment.slot}" }
                                                DataTableCell { "{appointment.patient_name}" }
                                                DataTableCell { "{appointment.dentist_name}" }
                                                DataTableCell { "{appointment.reason}" }
                                                DataTableCell {
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
            PageTitle { "Citas" }
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

        {table}
    }
}
