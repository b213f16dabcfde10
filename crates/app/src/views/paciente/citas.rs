use dioxus::prelude::*;
use shared_types::{AppointmentStatus, NewAppointment};
use shared_ui::{
    Badge, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableHeader, DataTableRow,
    Input, Label, PageHeader, PageTitle, Skeleton, Textarea,
};

use crate::format_helpers::format_date_human;
use crate::services::{appointments, staff};
use crate::views::components::calendario::DAY_SLOTS;
use crate::views::components::{appointment_badge, ScreenMeta};

/// Patient appointments: book a visit, review and cancel existing ones.
#[component]
pub fn PatientAppointments(role: String, user_name: String, view: String) -> Element {
    let mut mine = use_resource(move || async move { appointments::list_mine().await });
    let dentists = use_resource(move || async move { staff::dentists().await });

    let mut date = use_signal(String::new);
    let mut slot = use_signal(|| DAY_SLOTS[0].to_string());
    let mut dentist_id = use_signal(|| None::<i64>);
    let mut reason = use_signal(String::new);
    let mut form_error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let handle_book = move |evt: FormEvent| async move {
        evt.prevent_default();
        form_error.set(None);

        let Some(dentist) = *dentist_id.read() else {
            form_error.set(Some("Elige un dentista.".to_string()));
            return;
        };
        if date.read().is_empty() {
            form_error.set(Some("Elige una fecha.".to_string()));
            return;
        }

        saving.set(true);
        let request = NewAppointment {
            patient_id: None,
            dentist_id: dentist,
            date: date(),
            slot: slot(),
            reason: reason(),
        };
        match appointments::create(&request).await {
            Ok(_) => {
                reason.set(String::new());
                mine.restart();
            }
            Err(err) => form_error.set(Some(err.message)),
        }
        saving.set(false);
    };

    let list = match &*mine.read() {
        Some(Ok(items)) => rsx! {
            Card {
                CardHeader {
                    CardTitle { "Mis citas" }
                }
                CardContent {
                    if items.is_empty() {
                        p { class: "empty-state", "Sin citas todavía." }
                    } else {
                        DataTable {
                            DataTableHeader {
                                DataTableColumn { "Fecha" }
                                DataTableColumn { "Hora" }
                                DataTableColumn { "Dentista" }
                                DataTableColumn { "Estado" }
                                DataTableColumn { "" }
                            }
                            DataTableBody {
                                for appointment in items.iter() {
                                    {
                                        let (variant, label) = appointment_badge(appointment.status());
                                        let date_text = format_date_human(&appointment.date);
                                        let id = appointment.id;
                                        let cancellable = matches!(
                                            appointment.status(),
                                            AppointmentStatus::Scheduled | AppointmentStatus::Confirmed
                                        );
                                        rsx! {
                                            DataTableRow { key: "{id}",
                                                DataTableCell { "{date_text}" }
                                                DataTableCell { "{appointment.slot}" }
                                                DataTableCell { "{appointment.dentist_name}" }
                                                DataTableCell {
                                                    Badge { variant: variant, "{label}" }
                                                }
                                                DataTableCell {
                                                    if cancellable {
                                                        Button {
                                                            variant: ButtonVariant::Ghost,
                                                            onclick: move |_| {
                                                                spawn(async move {
                                                                    if appointments::cancel(id).await.is_ok() {
                                                                        mine.restart();
                                                                    }
                                                                });
                                                            },
                                                            "Cancelar"
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

    let dentist_options = match &*dentists.read() {
        Some(Ok(list)) => list.clone(),
        _ => Vec::new(),
    };

    rsx! {
        PageHeader {
            PageTitle { "Citas" }
        }
        ScreenMeta { role, view, user_name }

        Card {
            CardHeader {
                CardTitle { "Agendar cita" }
                CardDescription { "Elige dentista, fecha y hora" }
            }
            CardContent {
                if let Some(err) = form_error() {
                    div { class: "form-error", "{err}" }
                }
                form { class: "booking-form", onsubmit: handle_book,
                    div { class: "booking-form-field",
                        Label { html_for: "dentist", "Dentista" }
                        select {
                            id: "dentist",
                            class: "input",
                            onchange: move |e: Event<FormData>| {
                                dentist_id.set(e.value().parse::<i64>().ok());
                            },
                            option { value: "", "Selecciona..." }
                            for dentist in dentist_options.iter() {
                                option { key: "{dentist.id}", value: "{dentist.id}",
                                    "{dentist.first_name} {dentist.last_name}"
                                }
                            }
                        }
                    }
                    div { class: "booking-form-field",
                        Label { html_for: "date", "Fecha" }
                        Input {
                            input_type: "date",
                            id: "date",
                            value: date(),
                            on_input: move |e: FormEvent| date.set(e.value()),
                        }
                    }
                    div { class: "booking-form-field",
                        Label { html_for: "slot", "Hora" }
                        select {
                            id: "slot",
                            class: "input",
                            value: "{slot}",
                            onchange: move |e: Event<FormData>| slot.set(e.value()),
                            for option_slot in DAY_SLOTS.iter() {
                                option { key: "{option_slot}", value: "{option_slot}", "{option_slot}" }
                            }
                        }
                    }
                    div { class: "booking-form-field booking-form-reason",
                        Label { html_for: "reason", "Motivo" }
                        Textarea {
                            id: "reason",
                            placeholder: "Limpieza, dolor, control...",
                            value: reason(),
                            on_input: move |e: FormEvent| reason.set(e.value()),
                        }
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        disabled: saving(),
                        if saving() { "Agendando..." } else { "Agendar" }
                    }
                }
            }
        }

        {list}
    }
}
