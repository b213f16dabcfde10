use dioxus::prelude::*;
use shared_ui::theme::{ThemeState, ALL_FAMILIES};
use shared_ui::{
    Avatar, AvatarFallback, Card, CardContent, CardDescription, CardHeader, CardTitle, PageHeader,
    PageTitle,
};

use crate::routing::role::{initials, segment_label};
use crate::session::{use_session, SessionPhase};
use crate::views::components::ScreenMeta;

/// Profile screen, reachable from every role: session details and
/// appearance preferences.
#[component]
pub fn ProfileScreen(role: String, user_name: String, view: String) -> Element {
    let session = use_session();
    let mut theme_state = use_context::<ThemeState>();

    let user = match session.phase() {
        SessionPhase::Authenticated(user) => user,
        // The gate never routes here signed out; render nothing if it happens.
        _ => return rsx! {},
    };

    let avatar_initials = initials(&user_name);
    let role_label = segment_label(&role);
    let email = user.email.clone();
    let phone = user.phone.clone().unwrap_or_else(|| "—".to_string());

    rsx! {
        PageHeader {
            PageTitle { "Perfil" }
        }
        ScreenMeta { role: role.clone(), view, user_name: user_name.clone() }

        Card {
            CardHeader {
                Avatar {
                    AvatarFallback { "{avatar_initials}" }
                }
                CardTitle { "{user_name}" }
                CardDescription { "{role_label}" }
            }
            CardContent {
                div { class: "profile-grid",
                    span { class: "profile-label", "Correo" }
                    span { "{email}" }
                    span { class: "profile-label", "Teléfono" }
                    span { "{phone}" }
                }
            }
        }

        Card {
            CardHeader {
                CardTitle { "Apariencia" }
                CardDescription { "El tema se guarda en este navegador" }
            }
            CardContent {
                div { class: "filter-bar",
                    label { class: "filter-label", "Tema" }
                    select {
                        class: "input",
                        value: "{theme_state.family}",
                        onchange: move |e: Event<FormData>| {
                            theme_state.family.set(e.value());
                            theme_state.apply();
                        },
                        for family in ALL_FAMILIES.iter() {
                            {
                                let key = family.as_str();
                                let name = family.display_name();
                                rsx! {
                                    option { key: "{key}", value: "{key}", "{name}" }
                                }
                            }
                        }
                    }
                    label { class: "filter-label", "Modo oscuro" }
                    input {
                        r#type: "checkbox",
                        checked: (theme_state.is_dark)(),
                        onchange: move |evt: FormEvent| {
                            theme_state.is_dark.set(evt.checked());
                            theme_state.apply();
                        },
                    }
                }
            }
        }
    }
}
