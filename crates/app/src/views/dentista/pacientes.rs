use dioxus::prelude::*;
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader,
    CardTitle, DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableHeader,
    DataTableRow, Input, PageHeader, PageTitle, Skeleton,
};

use crate::format_helpers::format_date_human;
use crate::services::patients;
use crate::views::components::ScreenMeta;

/// Clinical patient lookup: search, then open one record in place.
#[component]
pub fn DentistPatients(role: String, user_name: String, view: String) -> Element {
    let mut query = use_signal(String::new);
    let mut selected = use_signal(|| None::<i64>);

    let results = use_resource(move || {
        let q = query.read().clone();
        async move { patients::search(&q).await }
    });

    let record = use_resource(move || {
        let id = *selected.read();
        async move {
            match id {
                Some(id) => patients::record(id).await.map(Some),
                None => Ok(None),
            }
        }
    });

    let search_results = match &*results.read() {
        Some(Ok(items)) => rsx! {
            Card {
                CardHeader {
                    CardTitle { "Pacientes" }
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
                                        let id = patient.id;
                                        rsx! {
                                            DataTableRow {
                                                key: "{id}",
                                                onclick: move |_| selected.set(Some(id)),
                                                DataTableCell { "{id}" }
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

    let record_detail = match &*record.read() {
        Some(Ok(Some(record))) => {
            let name = record.patient.full_name();
            rsx! {
                Card {
                    CardHeader {
                        CardTitle { "Ficha de {name}" }
                        CardDescription { "{record.patient.email}" }
                    }
                    CardContent {
                        if !record.allergies.is_empty() {
                            div { class: "allergy-list",
                                for allergy in record.allergies.iter() {
                                    Badge { key: "{allergy}", variant: BadgeVariant::Destructive, "{allergy}" }
                                }
                            }
                        }
                        if record.entries.is_empty() {
                            p { class: "empty-state", "Sin visitas registradas." }
                        } else {
                            DataTable {
                                DataTableHeader {
                                    DataTableColumn { "Fecha" }
                                    DataTableColumn { "Procedimiento" }
                                    DataTableColumn { "Notas" }
                                }
                                DataTableBody {
                                    for entry in record.entries.iter() {
                                        {
                                            let date = format_date_human(&entry.date);
                                            rsx! {
                                                DataTableRow { key: "{entry.id}",
                                                    DataTableCell { "{date}" }
                                                    DataTableCell { "{entry.procedure}" }
                                                    DataTableCell { "{entry.notes}" }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                        div { class: "record-actions",
                            Button {
                                variant: ButtonVariant::Ghost,
                                onclick: move |_| selected.set(None),
                                "Cerrar ficha"
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
        _ => rsx! {},
    };

    rsx! {
        PageHeader {
            PageTitle { "Pacientes" }
        }
        ScreenMeta { role, view, user_name }

        Card {
            CardContent {
                Input {
                    placeholder: "Buscar paciente...",
                    value: query(),
                    on_input: move |e: FormEvent| query.set(e.value()),
                }
            }
        }

        {search_results}
        {record_detail}
    }
}
