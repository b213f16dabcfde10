//! SSR smoke tests: render components to HTML strings and check the markup.

use dioxus::prelude::*;
use pretty_assertions::assert_eq;
use shared_ui::{CardDescription, CardTitle, DataTableBody, DataTableCell, DataTableRow, PageTitle};

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn card_title_renders_heading() {
    fn app() -> Element {
        rsx! {
            CardTitle { "Citas de hoy" }
        }
    }
    assert_eq!(render(app), r#"<h3 class="card-title">Citas de hoy</h3>"#);
}

#[test]
fn card_description_renders_paragraph() {
    fn app() -> Element {
        rsx! {
            CardDescription { "3 pendientes" }
        }
    }
    assert_eq!(
        render(app),
        r#"<p class="card-description">3 pendientes</p>"#
    );
}

#[test]
fn page_title_renders_h1() {
    fn app() -> Element {
        rsx! {
            PageTitle { "Pacientes" }
        }
    }
    assert_eq!(render(app), r#"<h1 class="page-title">Pacientes</h1>"#);
}

#[test]
fn table_row_without_handler_is_not_clickable() {
    fn app() -> Element {
        rsx! {
            DataTableBody {
                DataTableRow {
                    DataTableCell { "09:00" }
                }
            }
        }
    }
    let html = render(app);
    assert!(html.contains(r#"class="data-table-row""#), "html: {html}");
    assert!(!html.contains("clickable"), "html: {html}");
}
