pub mod admin;
pub mod components;
pub mod dentista;
pub mod login;
pub mod not_found;
pub mod paciente;
pub mod perfil;
pub mod recepcion;

use dioxus::prelude::*;
use shared_types::Role;

use crate::routing::hash::use_hash;
use crate::routing::resolver::{resolve, View};
use crate::routing::role::role_segment;
use crate::routing::table::Screen;

/// The resolver's consumer: re-resolves on every hash change and renders the
/// selected screen. Screens receive the role segment, the user's name and
/// the derived subview, and navigate onward only by writing the hash.
#[component]
pub fn ScreenOutlet(role: Role, user_name: String) -> Element {
    let hash = use_hash();

    let current = hash();
    let resolved = resolve(&current, role);
    let segment = role_segment(role).to_string();

    match resolved.view {
        View::NotFound(context) => rsx! {
            not_found::NotFoundScreen { context: context }
        },
        View::Screen(screen) => {
            render_screen(screen, segment, user_name, resolved.subview)
        }
    }
}

fn render_screen(screen: Screen, role: String, user_name: String, view: String) -> Element {
    match screen {
        Screen::PatientHome => rsx! {
            paciente::home::PatientHome { role, user_name, view }
        },
        Screen::PatientAppointments => rsx! {
            paciente::citas::PatientAppointments { role, user_name, view }
        },
        Screen::PatientHistory => rsx! {
            paciente::historial::PatientHistory { role, user_name, view }
        },
        Screen::PatientBilling => rsx! {
            paciente::pagos::PatientBilling { role, user_name, view }
        },
        Screen::ReceptionHome => rsx! {
            recepcion::home::ReceptionHome { role, user_name, view }
        },
        Screen::ReceptionAppointments => rsx! {
            recepcion::citas::ReceptionAppointments { role, user_name, view }
        },
        Screen::ReceptionPatients => rsx! {
            recepcion::pacientes::ReceptionPatients { role, user_name, view }
        },
        Screen::ReceptionBilling => rsx! {
            recepcion::pagos::ReceptionBilling { role, user_name, view }
        },
        Screen::DentistHome => rsx! {
            dentista::home::DentistHome { role, user_name, view }
        },
        Screen::DentistAgenda => rsx! {
            dentista::agenda::DentistAgenda { role, user_name, view }
        },
        Screen::DentistPatients => rsx! {
            dentista::pacientes::DentistPatients { role, user_name, view }
        },
        Screen::DentistOdontogram => rsx! {
            dentista::odontograma::DentistOdontogram { role, user_name, view }
        },
        Screen::AdminHome => rsx! {
            admin::home::AdminHome { role, user_name, view }
        },
        Screen::AdminStaff => rsx! {
            admin::staff::AdminStaff { role, user_name, view }
        },
        Screen::AdminAppointments => rsx! {
            admin::citas::AdminAppointments { role, user_name, view }
        },
        Screen::AdminPatients => rsx! {
            admin::pacientes::AdminPatients { role, user_name, view }
        },
        Screen::AdminReports => rsx! {
            admin::reportes::AdminReports { role, user_name, view }
        },
        Screen::Profile => rsx! {
            perfil::ProfileScreen { role, user_name, view }
        },
    }
}
