use dioxus::prelude::*;

use crate::routing::hash::{hash_for, set_hash};
use crate::routing::resolver::NotFoundContext;
use crate::routing::role::role_segment;

/// Diagnostic screen for hashes the resolver could not place.
///
/// Shows the offending hash, the session role and the route keys that were
/// reachable. This is an internal tool, so leaking the key list is an
/// accepted trade for fast debugging. Recoverable by any navigation.
#[component]
pub fn NotFoundScreen(context: NotFoundContext) -> Element {
    let segment = role_segment(context.role);
    let role_code = context.role.as_str();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "Pantalla no encontrada" }
                p { class: "not-found-message",
                    "La ruta "
                    code { "{context.hash}" }
                    " no existe para el rol "
                    code { "{role_code}" }
                    "."
                }
                button {
                    class: "not-found-link",
                    onclick: move |_| set_hash(&hash_for(segment, None)),
                    "Volver al inicio"
                }
                details { class: "not-found-details",
                    summary { "Rutas disponibles" }
                    ul {
                        for key in context.known_routes.iter() {
                            li { key: "{key}", code { "{key}" } }
                        }
                    }
                }
            }
        }
    }
}
