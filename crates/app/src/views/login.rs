use dioxus::prelude::*;
use shared_types::{AppError, LoginRequest};
use shared_ui::{
    Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Input, Label,
};
use std::collections::HashMap;
use validator::Validate;

use crate::routing::hash::{hash_for, set_hash};
use crate::routing::role::segment_for_code;
use crate::services::auth;
use crate::session::{use_session, SessionOutcome};

/// Login page with email/password.
///
/// Rendered whenever the session is unauthenticated, no matter what the hash
/// says; the gate owns that decision. On success the session flips to
/// authenticated and the hash is pointed at the signed-in role's home.
#[component]
pub fn LoginScreen() -> Element {
    let mut session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);
        error_msg.set(None);
        field_errors.set(HashMap::new());

        let request = LoginRequest {
            email: email(),
            password: password(),
        };

        // Client-side validation first; the backend still has the last word.
        if let Err(errors) = request.validate() {
            let app_error = AppError::from(errors);
            field_errors.set(app_error.field_errors);
            loading.set(false);
            return;
        }

        let ticket = session.begin_request();
        match auth::login(&request).await {
            Ok(response) => {
                let segment = segment_for_code(&response.user.role);
                if session.apply(ticket, SessionOutcome::SignedIn(response.user)) {
                    set_hash(&hash_for(segment, None));
                }
            }
            Err(err) => {
                session.apply(ticket, SessionOutcome::SignedOut);
                if err.field_errors.is_empty() {
                    error_msg.set(Some(err.message));
                } else {
                    field_errors.set(err.field_errors);
                }
            }
        }
        loading.set(false);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card {
                class: "auth-card",

                CardHeader {
                    CardTitle { "Dentalia" }
                    CardDescription { "Ingresa con tu cuenta de la clínica" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }

                    form { onsubmit: handle_login,
                        div { class: "auth-field",
                            Label { html_for: "email", "Correo" }
                            Input {
                                input_type: "email",
                                id: "email",
                                placeholder: "tu@clinica.com",
                                value: email(),
                                on_input: move |e: FormEvent| email.set(e.value()),
                            }
                            if let Some(err) = field_errors().get("email") {
                                div { class: "auth-field-error", "{err}" }
                            }
                        }
                        div { class: "auth-field",
                            Label { html_for: "password", "Contraseña" }
                            Input {
                                input_type: "password",
                                id: "password",
                                placeholder: "Tu contraseña",
                                value: password(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                            if let Some(err) = field_errors().get("password") {
                                div { class: "auth-field-error", "{err}" }
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "auth-submit button",
                            disabled: loading(),
                            if loading() { "Ingresando..." } else { "Ingresar" }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-link",
                        "¿Olvidaste tu contraseña? Contacta a recepción."
                    }
                }
            }
        }
    }
}
