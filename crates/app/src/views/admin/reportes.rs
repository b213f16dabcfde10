use chrono::{Datelike, Local};
use dioxus::prelude::*;
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, CardHeader, CardTitle, Input, PageHeader, PageTitle,
    Skeleton,
};

use crate::format_helpers::format_money_cents;
use crate::services::dashboard;
use crate::views::components::ScreenMeta;

/// Monthly activity report.
#[component]
pub fn AdminReports(role: String, user_name: String, view: String) -> Element {
    let mut month = use_signal(|| {
        let now = Local::now().date_naive();
        format!("{:04}-{:02}", now.year(), now.month())
    });

    let report = use_resource(move || {
        let month = month.read().clone();
        async move { dashboard::monthly_report(&month).await }
    });

    let content = match &*report.read() {
        Some(Ok(report)) => {
            let revenue = format_money_cents(report.revenue_cents);
            rsx! {
                div { class: "stats-grid",
                    Card {
                        CardContent {
                            div { class: "stat-card",
                                span { class: "stat-card-value", "{report.completed_appointments}" }
                                Badge { variant: BadgeVariant::Primary, "Citas atendidas" }
                            }
                        }
                    }
                    Card {
                        CardContent {
                            div { class: "stat-card",
                                span { class: "stat-card-value", "{report.invoices_count}" }
                                Badge { variant: BadgeVariant::Secondary, "Facturas" }
                            }
                        }
                    }
                    Card {
                        CardContent {
                            div { class: "stat-card",
                                span { class: "stat-card-value", "{revenue}" }
                                Badge { variant: BadgeVariant::Success, "Ingresos" }
                            }
                        }
                    }
                    Card {
                        CardContent {
                            div { class: "stat-card",
                                span { class: "stat-card-value", "{report.new_patients}" }
                                Badge { variant: BadgeVariant::Outline, "Pacientes nuevos" }
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
            div { class: "stats-grid",
                for _ in 0..4 {
                    Card {
                        CardContent {
                            Skeleton { style: "height: 2.5rem; width: 100%;" }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        PageHeader {
            PageTitle { "Reportes" }
        }
        ScreenMeta { role, view, user_name }

        Card {
            CardHeader {
                CardTitle { "Mes" }
            }
            CardContent {
                Input {
                    input_type: "month",
                    value: month(),
                    on_input: move |e: FormEvent| month.set(e.value()),
                }
            }
        }

        {content}
    }
}
