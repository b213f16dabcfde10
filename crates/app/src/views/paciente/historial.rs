use dioxus::prelude::*;
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, DataTable,
    DataTableBody, DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, PageHeader,
    PageTitle, Skeleton,
};

use crate::format_helpers::format_date_human;
use crate::services::patients;
use crate::views::components::odontograma::{condition_counts, OdontogramChart};
use crate::views::components::ScreenMeta;

/// Patient clinical history: visits, allergies and a read-only odontogram.
#[component]
pub fn PatientHistory(role: String, user_name: String, view: String) -> Element {
    let record = use_resource(move || async move { patients::my_record().await });
    let odontogram = use_resource(move || async move { patients::my_odontogram().await });

    let record_section = match &*record.read() {
        Some(Ok(record)) => rsx! {
            if !record.allergies.is_empty() {
                Card {
                    CardHeader {
                        CardTitle { "Alergias" }
                    }
                    CardContent {
                        div { class: "allergy-list",
                            for allergy in record.allergies.iter() {
                                Badge { key: "{allergy}", variant: BadgeVariant::Destructive, "{allergy}" }
                            }
                        }
                    }
                }
            }
            Card {
                CardHeader {
                    CardTitle { "Visitas" }
                }
                CardContent {
                    if record.entries.is_empty() {
                        p { class: "empty-state", "Aún no hay visitas registradas." }
                    } else {
                        DataTable {
                            DataTableHeader {
                                DataTableColumn { "Fecha" }
                                DataTableColumn { "Dentista" }
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
                                                DataTableCell { "{entry.dentist_name}" }
                                                DataTableCell { "{entry.procedure}" }
                                                DataTableCell { "{entry.notes}" }
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

    let odontogram_section = match &*odontogram.read() {
        Some(Ok(odontogram)) => {
            let counts = condition_counts(odontogram);
            rsx! {
                Card {
                    CardHeader {
                        CardTitle { "Odontograma" }
                        CardDescription { "Estado registrado por tu dentista" }
                    }
                    CardContent {
                        OdontogramChart { odontogram: odontogram.clone(), read_only: true }
                        if !counts.is_empty() {
                            div { class: "odontogram-summary",
                                for (condition , count) in counts.iter() {
                                    {
                                        let label = condition.label();
                                        rsx! {
                                            span { key: "{label}", class: "odontogram-summary-item",
                                                "{label}: {count}"
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
        Some(Err(_)) => rsx! {},
        None => rsx! {
            Card {
                CardContent {
                    Skeleton { style: "height: 6rem; width: 100%;" }
                }
            }
        },
    };

    rsx! {
        PageHeader {
            PageTitle { "Historial clínico" }
        }
        ScreenMeta { role, view, user_name }

        {record_section}
        {odontogram_section}
    }
}
