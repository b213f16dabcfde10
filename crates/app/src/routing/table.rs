use std::collections::HashMap;
use std::sync::OnceLock;

use shared_types::Role;

use super::role::role_segments;

/// Every screen the application can render. The resolver picks exactly one
/// per hash-change tick; rendering happens in `views`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    // Patient
    PatientHome,
    PatientAppointments,
    PatientHistory,
    PatientBilling,
    // Receptionist
    ReceptionHome,
    ReceptionAppointments,
    ReceptionPatients,
    ReceptionBilling,
    // Dentist
    DentistHome,
    DentistAgenda,
    DentistPatients,
    DentistOdontogram,
    // Admin
    AdminHome,
    AdminStaff,
    AdminAppointments,
    AdminPatients,
    AdminReports,
    // Every role
    Profile,
}

/// The screens one role owns: `(subview, screen)` pairs, home first.
struct RoleScreens {
    role: Role,
    screens: &'static [(&'static str, Screen)],
}

const ROLE_SCREENS: &[RoleScreens] = &[
    RoleScreens {
        role: Role::Patient,
        screens: &[
            ("dashboard", Screen::PatientHome),
            ("citas", Screen::PatientAppointments),
            ("historial", Screen::PatientHistory),
            ("pagos", Screen::PatientBilling),
        ],
    },
    RoleScreens {
        role: Role::Receptionist,
        screens: &[
            ("dashboard", Screen::ReceptionHome),
            ("citas", Screen::ReceptionAppointments),
            ("pacientes", Screen::ReceptionPatients),
            ("pagos", Screen::ReceptionBilling),
        ],
    },
    RoleScreens {
        role: Role::Dentist,
        screens: &[
            ("dashboard", Screen::DentistHome),
            ("citas", Screen::DentistAgenda),
            ("pacientes", Screen::DentistPatients),
            ("odontograma", Screen::DentistOdontogram),
        ],
    },
    RoleScreens {
        role: Role::Admin,
        screens: &[
            ("dashboard", Screen::AdminHome),
            ("staff", Screen::AdminStaff),
            ("citas", Screen::AdminAppointments),
            ("pacientes", Screen::AdminPatients),
            ("reportes", Screen::AdminReports),
        ],
    },
];

/// Sidebar / navigation entries for a role: `(subview, label)` in display
/// order. The layout derives its items from this, not from the resolver.
pub fn role_nav(role: Role) -> &'static [(&'static str, Screen)] {
    ROLE_SCREENS
        .iter()
        .find(|rs| rs.role == role)
        .map(|rs| rs.screens)
        .unwrap_or(&[])
}

fn build_table() -> HashMap<String, Screen> {
    let mut table = HashMap::new();

    for slice in ROLE_SCREENS {
        // Every alias segment a role owns gets the full key set. Each screen
        // is reachable under a slash-path and a hash-path key (two historical
        // URL conventions); the home screen also owns the bare segment keys.
        for segment in role_segments(slice.role) {
            for (idx, (subview, screen)) in slice.screens.iter().enumerate() {
                table.insert(format!("/{segment}/{subview}"), *screen);
                table.insert(format!("#{segment}/{subview}"), *screen);
                if idx == 0 {
                    table.insert(format!("/{segment}"), *screen);
                    table.insert(format!("#{segment}"), *screen);
                }
            }
        }
    }

    // The profile screen is a top-level segment reachable by every role.
    table.insert("/perfil".to_string(), Screen::Profile);
    table.insert("#perfil".to_string(), Screen::Profile);

    table
}

/// The flat route table, built once and immutable thereafter.
pub fn route_table() -> &'static HashMap<String, Screen> {
    static TABLE: OnceLock<HashMap<String, Screen>> = OnceLock::new();
    TABLE.get_or_init(build_table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_keys_exist_for_every_role() {
        let table = route_table();
        for (segment, home) in [
            ("paciente", Screen::PatientHome),
            ("recepcionista", Screen::ReceptionHome),
            ("dentista", Screen::DentistHome),
            ("doctor", Screen::DentistHome),
            ("admin", Screen::AdminHome),
        ] {
            assert_eq!(table.get(&format!("#{segment}")), Some(&home));
            assert_eq!(table.get(&format!("/{segment}")), Some(&home));
        }
    }

    #[test]
    fn slash_and_hash_forms_resolve_identically() {
        let table = route_table();
        for (key, screen) in table {
            let twin = if let Some(rest) = key.strip_prefix('#') {
                format!("/{rest}")
            } else if let Some(rest) = key.strip_prefix('/') {
                format!("#{rest}")
            } else {
                panic!("unexpected key shape: {key}");
            };
            assert_eq!(table.get(&twin), Some(screen), "missing twin of {key}");
        }
    }

    #[test]
    fn dentista_and_doctor_slices_are_identical() {
        let table = route_table();
        for (key, screen) in table {
            if let Some(rest) = key.strip_prefix("#dentista") {
                let alias = format!("#doctor{rest}");
                assert_eq!(table.get(&alias), Some(screen), "missing alias {alias}");
            }
        }
    }

    #[test]
    fn profile_is_top_level() {
        let table = route_table();
        assert_eq!(table.get("#perfil"), Some(&Screen::Profile));
        assert_eq!(table.get("/perfil"), Some(&Screen::Profile));
    }

    #[test]
    fn admin_staff_key_exists() {
        assert_eq!(route_table().get("#admin/staff"), Some(&Screen::AdminStaff));
    }

    #[test]
    fn role_nav_home_first() {
        for role in shared_types::ALL_ROLES {
            let nav = role_nav(*role);
            assert!(!nav.is_empty());
            assert_eq!(nav[0].0, "dashboard");
        }
    }
}
