use dioxus::prelude::*;
use shared_ui::{
    Card, CardContent, CardHeader, CardTitle, DataTable, DataTableBody, DataTableCell,
    DataTableColumn, DataTableHeader, DataTableRow, Input, PageHeader, PageTitle, Skeleton,
};

use crate::format_helpers::format_date_human;
use crate::services::patients;
use crate::views::components::ScreenMeta;

/// Patient directory with live search.
#[component]
pub fn ReceptionPatients(role: String, user_name: String, view: String) -> Element {
    let mut query = use_signal(String::new);

    let results = use_resource(move || {
        let q = query.read().clone();
        async move { patients::search(&q).await }
    });

    let table = match &*results.read() {
        Some(Ok(items)) => rsx! {
            Card {
                CardHeader {
                    CardTitle { "Pacientes" }
                }
                CardContent {
                    if items.is_empty() {
                        p { class: "empty-state", "Ningún paciente coincide con la búsqueda." }
                    } else {
                        DataTable {
                            DataTableHeader {
                                DataTableColumn { "Nº" }
                                DataTableColumn { "Nombre" }
                                DataTableColumn { "Correo" }
                                DataTableColumn { "Teléfono" }
                                DataTableColumn { "Nacimiento" }
                            }
                            DataTableBody {
                                for patient in items.iter() {
                                    {
                                        let name = patient.full_name();
                                        let phone = patient.phone.clone().unwrap_or_default();
                                        let birth = patient
                                            .birth_date
                                            .as_deref()
                                            .map(format_date_human)
                                            .unwrap_or_default();
                                        rsx! {
                                            DataTableRow { key: "{patient.id}",
                                                DataTableCell { "{patient.id}" }
                                                DataTableCell { "{name}" }
                                                DataTableCell { "{patient.email}" }
                                                DataTableCell { "{phone}" }
                                                DataTableCell { "{birth}" }
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
            PageTitle { "Pacientes" }
        }
        ScreenMeta { role, view, user_name }

        Card {
            CardContent {
                Input {
                    placeholder: "Buscar por nombre o correo...",
                    value: query(),
                    on_input: move |e: FormEvent| query.set(e.value()),
                }
            }
        }

        {table}
    }
}
