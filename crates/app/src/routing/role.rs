use shared_types::Role;

/// Canonical URL segment for a role. Total: every role maps somewhere.
pub fn role_segment(role: Role) -> &'static str {
    match role {
        Role::Admin => "admin",
        Role::Dentist => "dentista",
        Role::Receptionist => "recepcionista",
        Role::Patient => "paciente",
    }
}

/// Every URL segment a role owns. The dentist keeps the legacy `doctor`
/// alias alive; both segments must resolve to the same screens.
pub fn role_segments(role: Role) -> &'static [&'static str] {
    match role {
        Role::Admin => &["admin"],
        Role::Dentist => &["dentista", "doctor"],
        Role::Receptionist => &["recepcionista"],
        Role::Patient => &["paciente"],
    }
}

/// Segment for a raw backend role code. Unmapped codes land on the patient
/// segment, a defined case rather than an error.
pub fn segment_for_code(code: &str) -> &'static str {
    role_segment(Role::from_str_or_default(code))
}

/// Display label for a URL segment. Unknown segments degrade gracefully to
/// the segment with its first character upper-cased.
pub fn segment_label(segment: &str) -> String {
    match segment {
        "admin" => "Administración".to_string(),
        "dentista" | "doctor" => "Dentista".to_string(),
        "recepcionista" => "Recepción".to_string(),
        "paciente" => "Paciente".to_string(),
        "perfil" => "Perfil".to_string(),
        "login" => "Acceso".to_string(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().to_string() + chars.as_str(),
            }
        }
    }
}

/// 1–2 uppercase initials for an avatar: first letter of the first token,
/// plus the first letter of the last token when there is more than one.
/// Blank input yields the fallback "U".
pub fn initials(full_name: &str) -> String {
    let mut tokens = full_name.split_whitespace();
    let first = match tokens.next().and_then(|t| t.chars().next()) {
        Some(c) => c,
        None => return "U".to_string(),
    };
    let last = tokens.last().and_then(|t| t.chars().next());

    let mut out: String = first.to_uppercase().collect();
    if let Some(c) = last {
        out.extend(c.to_uppercase());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::ALL_ROLES;

    #[test]
    fn role_segment_is_total() {
        for role in ALL_ROLES {
            assert!(!role_segment(*role).is_empty());
        }
    }

    #[test]
    fn segment_for_code_never_empty_for_any_input() {
        for code in ["ADMIN", "DENTIST", "RECEPTIONIST", "PATIENT", "", "zzz", "doctor", "ñ"] {
            assert!(!segment_for_code(code).is_empty());
        }
        assert_eq!(segment_for_code("SUPERUSER"), "paciente");
        assert_eq!(segment_for_code("DENTIST"), "dentista");
    }

    #[test]
    fn dentist_owns_legacy_alias() {
        assert_eq!(
            role_segments(shared_types::Role::Dentist),
            &["dentista", "doctor"]
        );
    }

    #[test]
    fn segment_label_known_segments() {
        assert_eq!(segment_label("paciente"), "Paciente");
        assert_eq!(segment_label("recepcionista"), "Recepción");
        assert_eq!(segment_label("doctor"), "Dentista");
    }

    #[test]
    fn segment_label_unknown_capitalizes() {
        assert_eq!(segment_label("citas"), "Citas");
        assert_eq!(segment_label("staff"), "Staff");
        assert_eq!(segment_label(""), "");
    }

    #[test]
    fn initials_fallback_for_blank() {
        assert_eq!(initials(""), "U");
        assert_eq!(initials("   "), "U");
    }

    #[test]
    fn initials_single_token() {
        assert_eq!(initials("Juan"), "J");
        assert_eq!(initials("ana"), "A");
    }

    #[test]
    fn initials_first_and_last_token() {
        assert_eq!(initials("Juan Perez"), "JP");
        assert_eq!(initials("Maria del Carmen Lopez"), "ML");
    }
}
