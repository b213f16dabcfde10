use dioxus::prelude::*;
use dioxus_primitives::navbar as prim;

#[component]
pub fn Navbar(mut props: prim::NavbarProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "dent-navbar", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./navbar.css") }
        prim::Navbar { ..props }
    }
}
