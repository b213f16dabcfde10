use dioxus::prelude::*;
use shared_types::InvoiceStatus;
use shared_ui::{
    Badge, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, DataTable,
    DataTableBody, DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, PageHeader,
    PageTitle, Skeleton,
};

use crate::format_helpers::{format_date_human, format_money_cents};
use crate::services::billing;
use crate::views::components::{invoice_badge, ScreenMeta};

/// Billing desk: clinic invoices with a status filter and payment capture.
#[component]
pub fn ReceptionBilling(role: String, user_name: String, view: String) -> Element {
    let mut status_filter = use_signal(String::new);

    let mut invoices = use_resource(move || {
        let status = status_filter.read().clone();
        async move {
            let filter = if status.is_empty() {
                None
            } else {
                Some(status)
            };
            billing::list(filter.as_deref()).await
        }
    });

    let table = match &*invoices.read() {
        Some(Ok(items)) => rsx! {
            Card {
                CardHeader {
                    CardTitle { "Facturas" }
                }
                CardContent {
                    if items.is_empty() {
                        p { class: "empty-state", "Sin facturas para este filtro." }
                    } else {
                        DataTable {
                            DataTableHeader {
                                DataTableColumn { "Fecha" }
                                DataTableColumn { "Paciente" }
                                DataTableColumn { "Concepto" }
                                DataTableColumn { "Total" }
                                DataTableColumn { "Estado" }
                                DataTableColumn { "" }
                            }
                            DataTableBody {
                                for invoice in items.iter() {
                                    {
                                        let (variant, label) = invoice_badge(invoice.status());
                                        let date = format_date_human(&invoice.date);
                                        let total = format_money_cents(invoice.total_cents);
                                        let id = invoice.id;
                                        let payable = matches!(
                                            invoice.status(),
                                            InvoiceStatus::Pending | InvoiceStatus::Overdue
                                        );
                                        rsx! {
                                            DataTableRow { key: "{id}",
                                                DataTableCell { "{date}" }
                                                DataTableCell { "{invoice.patient_name}" }
                                                DataTableCell { "{invoice.concept}" }
                                                DataTableCell { "{total}" }
                                                DataTableCell {
                                                    Badge { variant: variant, "{label}" }
                                                }
                                                DataTableCell {
                                                    if payable {
                                                        Button {
                                                            variant: ButtonVariant::Secondary,
                                                            onclick: move |_| {
                                                                spawn(async move {
                                                                    if billing::register_payment(id).await.is_ok() {
                                                                        invoices.restart();
                                                                    }
                                                                });
                                                            },
                                                            "Registrar pago"
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

        Card {
            CardContent {
                div { class: "filter-bar",
                    label { class: "filter-label", "Estado" }
                    select {
                        class: "input",
                        value: "{status_filter}",
                        onchange: move |e: Event<FormData>| status_filter.set(e.value()),
                        option { value: "", "Todas" }
                        option { value: "pending", "Pendientes" }
                        option { value: "paid", "Pagadas" }
                        option { value: "overdue", "Vencidas" }
                    }
                }
            }
        }

        {table}
    }
}
