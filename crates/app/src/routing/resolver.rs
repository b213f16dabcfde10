use shared_types::Role;

use super::role::{role_segment, role_segments};
use super::table::{route_table, Screen};

/// Diagnostic payload for an unresolvable hash. Rendered by the not-found
/// screen; never an error.
#[derive(Debug, Clone, PartialEq)]
pub struct NotFoundContext {
    pub hash: String,
    pub role: Role,
    /// The route keys that were reachable for this role, sorted.
    pub known_routes: Vec<String>,
}

/// What the resolver picked for the current tick.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Screen(Screen),
    NotFound(NotFoundContext),
}

/// Output of one resolution: the view plus the derived subview identifier.
///
/// `subview` is derived from the raw hash independently of which lookup step
/// produced the view, so after a fall-up-to-home it can name a subview the
/// rendered screen does not implement. Callers treat it as the navigation
/// label, not as the screen identity.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedView {
    pub view: View,
    pub subview: String,
}

/// True if `key` belongs to the routes reachable for `role`.
///
/// Substring containment, not path-segment comparison: profile and
/// appointment keys (`perfil`, `citas`) are reachable from every role's
/// namespace by design. The concrete segment set contains no cross-role
/// substrings, so no other keys leak between roles.
fn is_role_route(key: &str, role: Role) -> bool {
    if key.contains("/perfil") || key.contains("#perfil") {
        return true;
    }
    if key.contains("/citas") || key.contains("#citas") {
        return true;
    }
    role_segments(role)
        .iter()
        .any(|seg| key.contains(&format!("/{seg}")) || key.contains(&format!("#{seg}")))
}

/// Try the hash-form then the slash-form key for a bare segment.
/// The hash form wins when both exist.
fn lookup_segment<'a>(
    role_routes: &[(&'a str, Screen)],
    segment: &str,
) -> Option<Screen> {
    let hash_key = format!("#{segment}");
    let slash_key = format!("/{segment}");
    for key in [hash_key, slash_key] {
        if let Some((_, screen)) = role_routes.iter().find(|(k, _)| *k == key) {
            return Some(*screen);
        }
    }
    None
}

/// Select the screen for `current_hash` under `role`.
///
/// Pure function, recomputed on every hash-change tick; the only terminal
/// outcome is the diagnostic not-found view, which any later navigation
/// leaves again.
pub fn resolve(current_hash: &str, role: Role) -> ResolvedView {
    let table = route_table();
    let role_routes: Vec<(&str, Screen)> = table
        .iter()
        .filter(|(key, _)| is_role_route(key, role))
        .map(|(key, screen)| (key.as_str(), *screen))
        .collect();

    let home_state = current_hash.is_empty() || current_hash == "#";

    let screen = if !home_state {
        // Exact match wins.
        role_routes
            .iter()
            .find(|(key, _)| *key == current_hash)
            .map(|(_, screen)| *screen)
            .or_else(|| {
                // Unrecognized tail: fall up to the hash's own first segment,
                // dropping whatever subview the user typed.
                let head = current_hash.split('/').next().unwrap_or("");
                let segment = head.strip_prefix('#').unwrap_or(head);
                lookup_segment(&role_routes, segment)
            })
    } else {
        lookup_segment(&role_routes, role_segment(role))
    };

    // Derived independently of the lookup outcome: second path segment when
    // present, the literal "dashboard" otherwise.
    let subview = current_hash
        .split('/')
        .nth(1)
        .filter(|s| !s.is_empty())
        .unwrap_or("dashboard")
        .to_string();

    let view = match screen {
        Some(screen) => View::Screen(screen),
        None => {
            let mut known_routes: Vec<String> =
                role_routes.iter().map(|(key, _)| key.to_string()).collect();
            known_routes.sort();
            View::NotFound(NotFoundContext {
                hash: current_hash.to_string(),
                role,
                known_routes,
            })
        }
    };

    ResolvedView { view, subview }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::ALL_ROLES;

    fn screen_of(resolved: &ResolvedView) -> Screen {
        match &resolved.view {
            View::Screen(screen) => *screen,
            View::NotFound(ctx) => panic!("unexpected not-found for {:?}", ctx.hash),
        }
    }

    #[test]
    fn role_home_hash_resolves_to_home_screen() {
        let cases = [
            (Role::Patient, "#paciente", Screen::PatientHome),
            (Role::Receptionist, "#recepcionista", Screen::ReceptionHome),
            (Role::Dentist, "#dentista", Screen::DentistHome),
            (Role::Admin, "#admin", Screen::AdminHome),
        ];
        for (role, hash, home) in cases {
            assert_eq!(screen_of(&resolve(hash, role)), home);
        }
    }

    #[test]
    fn empty_and_bare_hash_equal_role_home() {
        for role in ALL_ROLES {
            let home = resolve(&format!("#{}", role_segment(*role)), *role);
            assert_eq!(resolve("", *role), home);
            assert_eq!(resolve("#", *role), home);
        }
    }

    #[test]
    fn home_state_subview_is_dashboard() {
        let resolved = resolve("", Role::Admin);
        assert_eq!(resolved.subview, "dashboard");
        let resolved = resolve("#", Role::Patient);
        assert_eq!(resolved.subview, "dashboard");
    }

    #[test]
    fn doctor_alias_matches_dentista() {
        let via_alias = resolve("#doctor", Role::Dentist);
        let canonical = resolve("#dentista", Role::Dentist);
        assert_eq!(screen_of(&via_alias), screen_of(&canonical));

        let alias_sub = resolve("#doctor/pacientes", Role::Dentist);
        let canon_sub = resolve("#dentista/pacientes", Role::Dentist);
        assert_eq!(screen_of(&alias_sub), screen_of(&canon_sub));
        assert_eq!(screen_of(&alias_sub), Screen::DentistPatients);
    }

    #[test]
    fn exact_match_wins() {
        let resolved = resolve("#admin/staff", Role::Admin);
        assert_eq!(screen_of(&resolved), Screen::AdminStaff);
        assert_eq!(resolved.subview, "staff");
    }

    #[test]
    fn reception_citas_scenario() {
        let resolved = resolve("#recepcionista/citas", Role::Receptionist);
        assert_eq!(screen_of(&resolved), Screen::ReceptionAppointments);
        assert_eq!(resolved.subview, "citas");
    }

    #[test]
    fn unknown_subview_falls_up_to_role_home() {
        let resolved = resolve("#admin/zzz_unknown", Role::Admin);
        assert_eq!(screen_of(&resolved), Screen::AdminHome);
        // The derived subview keeps what the user typed; it legitimately
        // disagrees with the screen actually shown.
        assert_eq!(resolved.subview, "zzz_unknown");
    }

    #[test]
    fn fallback_law_holds_for_arbitrary_subviews() {
        let home = screen_of(&resolve("#admin", Role::Admin));
        for unknown in ["x", "configuracion", "staff2", "a/b"] {
            let resolved = resolve(&format!("#admin/{unknown}"), Role::Admin);
            assert_eq!(screen_of(&resolved), home, "subview {unknown}");
        }
    }

    #[test]
    fn extra_segments_keep_second_as_subview() {
        let resolved = resolve("#admin/unknown/extra", Role::Admin);
        assert_eq!(screen_of(&resolved), Screen::AdminHome);
        assert_eq!(resolved.subview, "unknown");
    }

    #[test]
    fn slash_form_keys_reachable_via_exact_match() {
        let resolved = resolve("/paciente/citas", Role::Patient);
        assert_eq!(screen_of(&resolved), Screen::PatientAppointments);
    }

    #[test]
    fn perfil_reachable_from_every_role() {
        for role in ALL_ROLES {
            assert_eq!(screen_of(&resolve("#perfil", *role)), Screen::Profile);
        }
    }

    #[test]
    fn citas_keys_reachable_across_roles() {
        // The substring filter deliberately pulls appointment keys into every
        // role's reachable set.
        let resolved = resolve("#recepcionista/citas", Role::Patient);
        assert_eq!(screen_of(&resolved), Screen::ReceptionAppointments);
    }

    #[test]
    fn foreign_role_home_is_not_reachable() {
        let resolved = resolve("#admin", Role::Patient);
        match resolved.view {
            View::NotFound(ctx) => {
                assert_eq!(ctx.hash, "#admin");
                assert_eq!(ctx.role, Role::Patient);
                assert!(ctx.known_routes.contains(&"#paciente".to_string()));
                assert!(!ctx.known_routes.contains(&"#admin".to_string()));
            }
            View::Screen(screen) => panic!("unexpectedly resolved to {screen:?}"),
        }
    }

    #[test]
    fn not_found_is_reenterable() {
        let lost = resolve("#nowhere", Role::Patient);
        assert!(matches!(lost.view, View::NotFound(_)));
        // Any later hash change resolves normally again.
        let found = resolve("#paciente", Role::Patient);
        assert_eq!(screen_of(&found), Screen::PatientHome);
    }

    #[test]
    fn not_found_diagnostics_are_sorted() {
        if let View::NotFound(ctx) = resolve("#nope", Role::Dentist).view {
            let mut sorted = ctx.known_routes.clone();
            sorted.sort();
            assert_eq!(ctx.known_routes, sorted);
            assert!(!ctx.known_routes.is_empty());
        } else {
            panic!("expected not-found");
        }
    }
}
