use chrono::{Duration, Local, NaiveDate};
use dioxus::prelude::*;
use shared_types::{AppointmentStatus, NewAppointment};
use shared_ui::{
    Badge, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    DialogContent, DialogDescription, DialogRoot, DialogTitle, Input, Label, PageHeader,
    PageActions, PageTitle, Skeleton,
};

use crate::services::{appointments, staff};
use crate::views::components::calendario::{monday_of, WeekCalendar, DAY_SLOTS};
use crate::views::components::{appointment_badge, ScreenMeta};

/// Appointment desk: the weekly slot grid plus per-appointment actions, and
/// a dialog for booking on behalf of a patient.
#[component]
pub fn ReceptionAppointments(role: String, user_name: String, view: String) -> Element {
    let mut week_start = use_signal(|| {
        monday_of(Local::now().date_naive())
            .format("%Y-%m-%d")
            .to_string()
    });

    let mut week = use_resource(move || {
        let start = week_start.read().clone();
        async move { appointments::list_week(&start).await }
    });
    let dentists = use_resource(move || async move { staff::dentists().await });

    let mut show_booking = use_signal(|| false);
    let mut patient_id = use_signal(String::new);
    let mut dentist_id = use_signal(|| None::<i64>);
    let mut date = use_signal(String::new);
    let mut slot = use_signal(|| DAY_SLOTS[0].to_string());
    let mut reason = use_signal(String::new);
    let mut form_error = use_signal(|| Option::<String>::None);

    let shift_week = move |days: i64| {
        let current = week_start.read().clone();
        if let Ok(parsed) = NaiveDate::parse_from_str(&current, "%Y-%m-%d") {
            week_start.set((parsed + Duration::days(days)).format("%Y-%m-%d").to_string());
        }
    };

    let handle_book = move |evt: FormEvent| async move {
        evt.prevent_default();
        form_error.set(None);

        let patient = match patient_id.read().parse::<i64>() {
            Ok(id) => id,
            Err(_) => {
                form_error.set(Some("Número de paciente inválido.".to_string()));
                return;
            }
        };
        let Some(dentist) = *dentist_id.read() else {
            form_error.set(Some("Elige un dentista.".to_string()));
            return;
        };
        if date.read().is_empty() {
            form_error.set(Some("Elige una fecha.".to_string()));
            return;
        }

        let request = NewAppointment {
            patient_id: Some(patient),
            dentist_id: dentist,
            date: date(),
            slot: slot(),
            reason: reason(),
        };
        match appointments::create(&request).await {
            Ok(_) => {
                show_booking.set(false);
                patient_id.set(String::new());
                reason.set(String::new());
                week.restart();
            }
            Err(err) => form_error.set(Some(err.message)),
        }
    };

    let week_label = week_start.read().clone();

    let grid = match &*week.read() {
        Some(Ok(items)) => rsx! {
            Card {
                CardHeader {
                    CardTitle { "Semana del {week_label}" }
                    CardDescription { "Las celdas dobles marcan conflictos de horario" }
                }
                CardContent {
                    WeekCalendar {
                        appointments: items.clone(),
                        week_start: week_label.clone(),
                    }
                }
            }
            Card {
                CardHeader {
                    CardTitle { "Citas de la semana" }
                }
                CardContent {
                    if items.is_empty() {
                        p { class: "empty-state", "Sin citas esta semana." }
                    } else {
                        div { class: "appointment-list",
                            for appointment in items.iter() {
                                {
                                    let (variant, label) = appointment_badge(appointment.status());
                                    let id = appointment.id;
                                    let actionable = appointment.status() == AppointmentStatus::Scheduled;
                                    let cancellable = matches!(
                                        appointment.status(),
                                        AppointmentStatus::Scheduled | AppointmentStatus::Confirmed
                                    );
                                    rsx! {
                                        div { key: "{id}", class: "appointment-row",
                                            div { class: "appointment-row-main",
                                                span { class: "appointment-row-date",
                                                    "{appointment.date} · {appointment.slot}"
                                                }
                                                span { class: "appointment-row-who",
                                                    "{appointment.patient_name} · Dr. {appointment.dentist_name}"
                                                }
                                            }
                                            Badge { variant: variant, "{label}" }
                                            if actionable {
                                                Button {
                                                    variant: ButtonVariant::Secondary,
                                                    onclick: move |_| {
                                                        spawn(async move {
                                                            if appointments::confirm(id).await.is_ok() {
                                                                week.restart();
                                                            }
                                                        });
                                                    },
                                                    "Confirmar"
                                                }
                                            }
                                            if cancellable {
                                                Button {
                                                    variant: ButtonVariant::Ghost,
                                                    onclick: move |_| {
                                                        spawn(async move {
                                                            if appointments::cancel(id).await.is_ok() {
                                                                week.restart();
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
                    Skeleton { style: "height: 12rem; width: 100%;" }
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
            PageActions {
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| shift_week(-7),
                    "← Semana anterior"
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| shift_week(7),
                    "Semana siguiente →"
                }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| show_booking.set(true),
                    "Nueva cita"
                }
            }
        }
        ScreenMeta { role, view, user_name }

        {grid}

        DialogRoot {
            open: show_booking(),
            on_open_change: move |open: bool| show_booking.set(open),
            DialogContent {
                DialogTitle { "Nueva cita" }
                DialogDescription { "Agenda una visita a nombre de un paciente" }

                if let Some(err) = form_error() {
                    div { class: "form-error", "{err}" }
                }

                form { class: "booking-form booking-form-dialog", onsubmit: handle_book,
                    div { class: "booking-form-field",
                        Label { html_for: "patient_id", "Nº de paciente" }
                        Input {
                            id: "patient_id",
                            placeholder: "Ej. 1024",
                            value: patient_id(),
                            on_input: move |e: FormEvent| patient_id.set(e.value()),
                        }
                    }
                    div { class: "booking-form-field",
                        Label { html_for: "desk_dentist", "Dentista" }
                        select {
                            id: "desk_dentist",
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
                        Label { html_for: "desk_date", "Fecha" }
                        Input {
                            input_type: "date",
                            id: "desk_date",
                            value: date(),
                            on_input: move |e: FormEvent| date.set(e.value()),
                        }
                    }
                    div { class: "booking-form-field",
                        Label { html_for: "desk_slot", "Hora" }
                        select {
                            id: "desk_slot",
                            class: "input",
                            value: "{slot}",
                            onchange: move |e: Event<FormData>| slot.set(e.value()),
                            for option_slot in DAY_SLOTS.iter() {
                                option { key: "{option_slot}", value: "{option_slot}", "{option_slot}" }
                            }
                        }
                    }
                    div { class: "booking-form-field",
                        Label { html_for: "desk_reason", "Motivo" }
                        Input {
                            id: "desk_reason",
                            placeholder: "Limpieza, control...",
                            value: reason(),
                            on_input: move |e: FormEvent| reason.set(e.value()),
                        }
                    }
                    div { class: "booking-form-actions",
                        Button { variant: ButtonVariant::Primary, "Agendar" }
                    }
                }
                div { class: "booking-form-actions",
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| show_booking.set(false),
                        "Cerrar"
                    }
                }
            }
        }
    }
}
