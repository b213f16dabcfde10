use dioxus::prelude::*;
use shared_ui::LoadingScreen;

mod format_helpers;
mod layout;
mod routing;
mod services;
mod session;
mod views;

use session::{use_session, SessionOutcome, SessionPhase, SessionState};

const THEME_BASE: Asset = asset!("/assets/theme-base.css");
const THEME_CLINICAL: Asset = asset!("/assets/themes/clinical.css");
const THEME_MINT: Asset = asset!("/assets/themes/mint.css");
const THEME_GRAPHITE: Asset = asset!("/assets/themes/graphite.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(SessionState::new);

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        document::Link { rel: "stylesheet", href: THEME_CLINICAL }
        document::Link { rel: "stylesheet", href: THEME_MINT }
        document::Link { rel: "stylesheet", href: THEME_GRAPHITE }
        shared_ui::theme::ThemeSeed {}
        SessionGate {}
    }
}

/// Top-level gate: loading screen while the session bootstraps, login screen
/// for unauthenticated sessions, the full shell otherwise. This is the only
/// component that decides between those three worlds; the hash is consulted
/// only after bootstrapping resolves.
#[component]
fn SessionGate() -> Element {
    let mut session = use_session();
    let hash = routing::hash::use_hash();

    // One bootstrap attempt per mount. Its ticket goes stale if a login is
    // issued meanwhile, so a slow profile response cannot clobber it.
    use_future(move || async move {
        let ticket = session.begin_request();
        let _ = services::auth::restore_token().await;
        let outcome = if services::auth::is_authenticated() {
            match services::auth::fetch_profile().await {
                Ok(user) => SessionOutcome::SignedIn(user),
                Err(err) => {
                    tracing::warn!(%err, "session bootstrap failed, discarding credential");
                    services::auth::logout();
                    SessionOutcome::SignedOut
                }
            }
        } else {
            SessionOutcome::SignedOut
        };
        session.apply(ticket, outcome);
    });

    match session.phase() {
        SessionPhase::Bootstrapping => rsx! {
            LoadingScreen { message: "Cargando tu sesión..." }
        },
        SessionPhase::Unauthenticated => {
            if hash() != routing::LOGIN_HASH {
                routing::hash::set_hash(routing::LOGIN_HASH);
            }
            rsx! {
                views::login::LoginScreen {}
            }
        }
        SessionPhase::Authenticated(user) => rsx! {
            layout::AppShell { user: user }
        },
    }
}
