use dioxus::prelude::*;

/// Loading placeholder with an animated pulse.
#[component]
pub fn Skeleton(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let base = vec![Attribute::new("class", "skeleton", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./skeleton.css") }
        div {
            ..merged,
        }
    }
}

/// Full-screen blocking loader shown while the session bootstraps.
#[component]
pub fn LoadingScreen(#[props(default = "Loading...".to_string())] message: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./skeleton.css") }
        div { class: "loading-screen",
            div { class: "loading-spinner" }
            p { class: "loading-message", "{message}" }
        }
    }
}
