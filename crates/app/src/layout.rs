use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCalendar, LdLayoutDashboard, LdUserCheck, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::{AuthUser, Role};
use shared_ui::{
    Avatar, AvatarFallback, Button, ButtonVariant, Navbar, Separator, Sidebar, SidebarContent,
    SidebarFooter, SidebarGroup, SidebarGroupLabel, SidebarHeader, SidebarInset, SidebarMenu,
    SidebarMenuButton, SidebarMenuItem, SidebarProvider, SidebarSeparator, SidebarTrigger,
};

use crate::routing::hash::{hash_for, set_hash, split_hash, use_hash};
use crate::routing::role::{initials, role_segment, role_segments, segment_label};
use crate::routing::table::role_nav;
use crate::routing::LOGIN_HASH;
use crate::session::use_session;
use crate::views::ScreenOutlet;

/// Sidebar label for a subview key.
fn nav_label(subview: &str) -> &'static str {
    match subview {
        "dashboard" => "Inicio",
        "citas" => "Citas",
        "pacientes" => "Pacientes",
        "historial" => "Historial",
        "pagos" => "Pagos",
        "staff" => "Personal",
        "odontograma" => "Odontograma",
        "reportes" => "Reportes",
        _ => "",
    }
}

fn nav_icon(subview: &str) -> Element {
    match subview {
        "dashboard" => rsx! {
            Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
        },
        "citas" => rsx! {
            Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 }
        },
        "pacientes" => rsx! {
            Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 }
        },
        "staff" => rsx! {
            Icon::<LdUserCheck> { icon: LdUserCheck, width: 18, height: 18 }
        },
        _ => rsx! {},
    }
}

/// Main application layout: sidebar + top navbar + content outlet.
///
/// The shell derives the active role section and sidebar item from its own
/// hash subscription, a second and looser consumer of the same channel the
/// screen outlet reads. It never consults the resolver.
#[component]
pub fn AppShell(user: AuthUser) -> Element {
    let mut session = use_session();
    let hash = use_hash();

    let role = Role::from_str_or_default(&user.role);
    let segment = role_segment(role);

    let current = hash();
    let (active_segment, active_subview) = split_hash(&current);
    let own_section = active_segment
        .map(|seg| role_segments(role).contains(&seg))
        .unwrap_or(true);
    let active_item = if own_section {
        active_subview.unwrap_or("dashboard").to_string()
    } else {
        String::new()
    };

    let page_title = match active_segment {
        Some("perfil") => "Perfil".to_string(),
        Some(_) if !own_section => segment_label(active_subview.unwrap_or("")),
        _ => {
            let label = nav_label(&active_item);
            if label.is_empty() {
                segment_label(&active_item)
            } else {
                label.to_string()
            }
        }
    };

    let user_name = user.full_name();
    let avatar_initials = initials(&user_name);
    let section_title = segment_label(segment);

    let mut theme_state = use_context_provider(|| shared_ui::theme::ThemeState {
        family: Signal::new("clinical".to_string()),
        is_dark: Signal::new(false),
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider { default_open: true,
            Sidebar {
                SidebarHeader {
                    div { class: "sidebar-brand",
                        span { class: "sidebar-brand-name", "Dentalia" }
                        span { class: "sidebar-brand-role", "{section_title}" }
                    }
                }

                SidebarSeparator {}

                SidebarContent {
                    SidebarGroup {
                        SidebarGroupLabel { "{section_title}" }
                        SidebarMenu {
                            for (subview , _) in role_nav(role).iter() {
                                {
                                    let subview = *subview;
                                    let label = nav_label(subview);
                                    rsx! {
                                        SidebarMenuItem { key: "{subview}",
                                            SidebarMenuButton {
                                                active: active_item == subview,
                                                onclick: move |_| {
                                                    let target = if subview == "dashboard" {
                                                        hash_for(segment, None)
                                                    } else {
                                                        hash_for(segment, Some(subview))
                                                    };
                                                    set_hash(&target);
                                                },
                                                {nav_icon(subview)}
                                                "{label}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    SidebarSeparator {}

                    SidebarGroup {
                        SidebarGroupLabel { "Cuenta" }
                        SidebarMenu {
                            SidebarMenuItem {
                                SidebarMenuButton {
                                    active: active_segment == Some("perfil"),
                                    onclick: move |_| set_hash("#perfil"),
                                    "Perfil"
                                }
                            }
                        }
                    }
                }

                SidebarFooter {
                    div { class: "sidebar-footer-row",
                        span { class: "sidebar-footer-label", "Modo oscuro" }
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

            SidebarInset {
                Navbar {
                    div { class: "navbar-bar",
                        SidebarTrigger {
                            span { class: "navbar-trigger-icon", "\u{2630}" }
                        }

                        Separator { horizontal: false }

                        span { class: "navbar-title", "{page_title}" }

                        div { class: "navbar-spacer" }

                        Avatar {
                            AvatarFallback { "{avatar_initials}" }
                        }
                        span { class: "navbar-user-name", "{user_name}" }
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| {
                                crate::services::auth::logout();
                                session.sign_out();
                                set_hash(LOGIN_HASH);
                            },
                            "Salir"
                        }
                    }
                }

                div { class: "page-content",
                    ScreenOutlet { role: role, user_name: user_name.clone() }
                }
            }
        }
    }
}
