use dioxus::prelude::*;
use shared_ui::{
    Badge, Card, CardContent, CardHeader, CardTitle, DataTable, DataTableBody, DataTableCell,
    DataTableColumn, DataTableHeader, DataTableRow, PageHeader, PageTitle, Skeleton,
};

use crate::format_helpers::{format_date_human, format_money_cents};
use crate::services::billing;
use crate::views::components::{invoice_badge, ScreenMeta};

/// The patient's own invoices.
#[component]
pub fn PatientBilling(role: String, user_name: String, view: String) -> Element {
    let invoices = use_resource(move || async move { billing::list_mine().await });

    let content = match &*invoices.read() {
        Some(Ok(items)) => rsx! {
            Card {
                CardHeader {
                    CardTitle { "Mis pagos" }
                }
                CardContent {
                    if items.is_empty() {
                        p { class: "empty-state", "No hay facturas a tu nombre." }
                    } else {
                        DataTable {
                            DataTableHeader {
                                DataTableColumn { "Fecha" }
                                DataTableColumn { "Concepto" }
                                DataTableColumn { "Total" }
                                DataTableColumn { "Estado" }
                            }
                            DataTableBody {
                                for invoice in items.iter() {
                                    {
                                        let (variant, label) = invoice_badge(invoice.status());
                                        let date = format_date_human(&invoice.date);
                                        let total = format_money_cents(invoice.total_cents);
                                        rsx! {
                                            DataTableRow { key: "{invoice.id}",
                                                DataTableCell { "{date}" }
                                                DataTableCell { "{invoice.concept}" }
                                                DataTableCell { "{total}" }
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
            PageTitle { "Pagos" }
        }
        ScreenMeta { role, view, user_name }

        {content}
    }
}
