use dioxus::prelude::*;
use shared_ui::{Badge, BadgeVariant, Card, CardContent, PageHeader, PageTitle, Skeleton};

use crate::format_helpers::format_money_cents;
use crate::services::dashboard;
use crate::views::components::ScreenMeta;

/// Admin landing screen: clinic-wide counters.
#[component]
pub fn AdminHome(role: String, user_name: String, view: String) -> Element {
    let stats = use_resource(move || async move { dashboard::clinic_stats().await });

    let content = match &*stats.read() {
        Some(Ok(stats)) => {
            let revenue = format_money_cents(stats.revenue_month_cents);
            rsx! {
                div { class: "stats-grid",
                    StatCard { label: "Citas hoy", value: "{stats.appointments_today}", variant: BadgeVariant::Primary }
                    StatCard { label: "Por confirmar", value: "{stats.pending_confirmations}", variant: BadgeVariant::Destructive }
                    StatCard { label: "Pacientes", value: "{stats.patients_total}", variant: BadgeVariant::Secondary }
                    StatCard { label: "Ingresos del mes", value: revenue, variant: BadgeVariant::Success }
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
            PageTitle { "Panel de administración" }
        }
        ScreenMeta { role, view, user_name }

        {content}
    }
}

/// A single stat card.
#[component]
fn StatCard(label: String, value: String, variant: BadgeVariant) -> Element {
    rsx! {
        Card {
            CardContent {
                div { class: "stat-card",
                    span { class: "stat-card-value", "{value}" }
                    Badge { variant: variant, "{label}" }
                }
            }
        }
    }
}
