use dioxus::prelude::*;
use shared_ui::{
    Card, CardContent, CardHeader, CardTitle, DataTable, DataTableBody, DataTableCell,
    DataTableColumn, DataTableHeader, DataTableRow, Input, PageHeader, PageTitle, Skeleton,
};

use crate::services::patients;
use crate::views::components::ScreenMeta;

/// Administrative view of the patient registry.
#[component]
pub fn AdminPatients(role: String, user_name: String, view: String) -> Element {
    let mut query = use_signal(String::new);

    let results = use_resource(move || {
        let q = query.read().clone();
        async move { patients::search(&q).await }
    });

    let table = match &*results.read() {
        Some(Ok(items)) => {
            let count = items.len();
            rsx! {
                Card {
                    CardHeader {
                        CardTitle { "Registro de pacientes ({count})" }
                    }
                    CardContent {
                        if items.is_empty() {
                            p { class: "empty-state", "Sin resultados." }
                        } else {
                            DataTable {
                                DataTableHeader {
                                    DataTableColumn { "Nº" }
                                    DataTableColumn { "Nombre" }
                                    DataTableColumn { "Correo" }
                                }
                                DataTableBody {
                                    for patient in items.iter() {
                                        {
                                            let name = patient.full_name();
                                            rsx! {
                                                DataTableRow { key: "{patient.id}",
                                                    DataTableCell { "{patient.id}" }
                                                    DataTableCell { "{name}" }
                                                    DataTableCell { "{patient.email}" }
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
                    placeholder: "Buscar en el registro...",
                    value: query(),
                    on_input: move |e: FormEvent| query.set(e.value()),
                }
            }
        }

        {table}
    }
}
