use dioxus::prelude::*;
use shared_types::{AppError, NewStaffMember, Role, ALL_ROLES};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle,
    DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableHeader, DataTableRow,
    DialogContent, DialogDescription, DialogRoot, DialogTitle, Input, Label, PageActions,
    PageHeader, PageTitle, Skeleton,
};
use std::collections::HashMap;
use validator::Validate;

use crate::routing::role::{segment_for_code, segment_label};
use crate::services::staff;
use crate::views::components::ScreenMeta;

/// Staff management: roster, activation toggles and a registration dialog.
#[component]
pub fn AdminStaff(role: String, user_name: String, view: String) -> Element {
    let mut roster = use_resource(move || async move { staff::list().await });

    let mut show_create = use_signal(|| false);
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut new_role = use_signal(|| Role::Receptionist.as_str().to_string());
    let mut form_error = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);

    let handle_create = move |evt: FormEvent| async move {
        evt.prevent_default();
        form_error.set(None);
        field_errors.set(HashMap::new());

        let request = NewStaffMember {
            first_name: first_name(),
            last_name: last_name(),
            email: email(),
            role: new_role(),
        };
        if let Err(errors) = request.validate() {
            field_errors.set(AppError::from(errors).field_errors);
            return;
        }

        match staff::create(&request).await {
            Ok(_) => {
                show_create.set(false);
                first_name.set(String::new());
                last_name.set(String::new());
                email.set(String::new());
                roster.restart();
            }
            Err(err) => {
                if err.field_errors.is_empty() {
                    form_error.set(Some(err.message));
                } else {
                    field_errors.set(err.field_errors);
                }
            }
        }
    };

    let table = match &*roster.read() {
        Some(Ok(members)) => rsx! {
            Card {
                CardHeader {
                    CardTitle { "Personal" }
                }
                CardContent {
                    if members.is_empty() {
                        p { class: "empty-state", "Todavía no hay personal registrado." }
                    } else {
                        DataTable {
                            DataTableHeader {
                                DataTableColumn { "Nombre" }
                                DataTableColumn { "Correo" }
                                DataTableColumn { "Rol" }
                                DataTableColumn { "Estado" }
                                DataTableColumn { "" }
                            }
                            DataTableBody {
                                for member in members.iter() {
                                    {
                                        let id = member.id;
                                        let active = member.active;
                                        let role_label = segment_label(segment_for_code(&member.role));
                                        let toggle_label = if active { "Desactivar" } else { "Activar" };
                                        rsx! {
                                            DataTableRow { key: "{id}",
                                                DataTableCell { "{member.first_name} {member.last_name}" }
                                                DataTableCell { "{member.email}" }
                                                DataTableCell { "{role_label}" }
                                                DataTableCell {
                                                    if active {
                                                        Badge { variant: BadgeVariant::Success, "Activo" }
                                                    } else {
                                                        Badge { variant: BadgeVariant::Outline, "Inactivo" }
                                                    }
                                                }
                                                DataTableCell {
                                                    Button {
                                                        variant: ButtonVariant::Ghost,
                                                        onclick: move |_| {
                                                            spawn(async move {
                                                                if staff::set_active(id, !active).await.is_ok() {
                                                                    roster.restart();
                                                                }
                                                            });
                                                        },
                                                        "{toggle_label}"
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
            PageTitle { "Personal" }
            PageActions {
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| show_create.set(true),
                    "Registrar"
                }
            }
        }
        ScreenMeta { role, view, user_name }

        {table}

        DialogRoot {
            open: show_create(),
            on_open_change: move |open: bool| show_create.set(open),
            DialogContent {
                DialogTitle { "Registrar personal" }
                DialogDescription { "El nuevo miembro recibirá sus credenciales por correo" }

                if let Some(err) = form_error() {
                    div { class: "form-error", "{err}" }
                }

                form { class: "booking-form booking-form-dialog", onsubmit: handle_create,
                    div { class: "booking-form-field",
                        Label { html_for: "staff_first_name", "Nombre" }
                        Input {
                            id: "staff_first_name",
                            value: first_name(),
                            on_input: move |e: FormEvent| first_name.set(e.value()),
                        }
                        if let Some(err) = field_errors().get("first_name") {
                            div { class: "auth-field-error", "{err}" }
                        }
                    }
                    div { class: "booking-form-field",
                        Label { html_for: "staff_last_name", "Apellido" }
                        Input {
                            id: "staff_last_name",
                            value: last_name(),
                            on_input: move |e: FormEvent| last_name.set(e.value()),
                        }
                        if let Some(err) = field_errors().get("last_name") {
                            div { class: "auth-field-error", "{err}" }
                        }
                    }
                    div { class: "booking-form-field",
                        Label { html_for: "staff_email", "Correo" }
                        Input {
                            input_type: "email",
                            id: "staff_email",
                            value: email(),
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                        if let Some(err) = field_errors().get("email") {
                            div { class: "auth-field-error", "{err}" }
                        }
                    }
                    div { class: "booking-form-field",
                        Label { html_for: "staff_role", "Rol" }
                        select {
                            id: "staff_role",
                            class: "input",
                            value: "{new_role}",
                            onchange: move |e: Event<FormData>| new_role.set(e.value()),
                            // Patients register through the clinic, not here.
                            for candidate in ALL_ROLES.iter().filter(|r| **r != Role::Patient) {
                                {
                                    let code = candidate.as_str();
                                    let label = segment_label(segment_for_code(code));
                                    rsx! {
                                        option { key: "{code}", value: "{code}", "{label}" }
                                    }
                                }
                            }
                        }
                    }
                    div { class: "booking-form-actions",
                        Button { variant: ButtonVariant::Primary, "Registrar" }
                    }
                }
                div { class: "booking-form-actions",
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| show_create.set(false),
                        "Cerrar"
                    }
                }
            }
        }
    }
}
