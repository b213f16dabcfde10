use dioxus::prelude::*;

/// Theme families available in the application.
///
/// Each family provides a dark variant, a light variant, or both.
/// Families with only one mode resolve to that mode regardless of `is_dark`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ThemeFamily {
    #[default]
    Clinical,
    Mint,
    /// Dark-only theme for evening front-desk shifts.
    Graphite,
}

/// All available theme families in display order.
pub const ALL_FAMILIES: &[ThemeFamily] =
    &[ThemeFamily::Clinical, ThemeFamily::Mint, ThemeFamily::Graphite];

impl ThemeFamily {
    /// Internal key used for storage and Select values.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeFamily::Clinical => "clinical",
            ThemeFamily::Mint => "mint",
            ThemeFamily::Graphite => "graphite",
        }
    }

    /// Human-readable name for display in UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            ThemeFamily::Clinical => "Clinical",
            ThemeFamily::Mint => "Mint",
            ThemeFamily::Graphite => "Graphite",
        }
    }

    /// Parse a family key string, falling back to Clinical.
    pub fn from_key(s: &str) -> Self {
        match s {
            "mint" => ThemeFamily::Mint,
            "graphite" => ThemeFamily::Graphite,
            _ => ThemeFamily::Clinical,
        }
    }

    /// Whether this family supports light mode.
    pub fn has_light(&self) -> bool {
        !matches!(self, ThemeFamily::Graphite)
    }

    /// Resolve to the CSS `data-theme` attribute value.
    ///
    /// Single-mode families ignore `is_dark` and always return their mode.
    pub fn resolve(&self, is_dark: bool) -> &'static str {
        match (self, is_dark) {
            (ThemeFamily::Clinical, true) => "clinical-dark",
            (ThemeFamily::Clinical, false) => "clinical",
            (ThemeFamily::Mint, true) => "mint-dark",
            (ThemeFamily::Mint, false) => "mint",
            // Graphite is dark-only
            (ThemeFamily::Graphite, _) => "graphite",
        }
    }
}

/// Shared theme state provided as context.
///
/// Both the sidebar (dark/light toggle) and the profile screen (family
/// picker) read and write these signals. Changes call [`set_theme`] to apply.
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub family: Signal<String>,
    pub is_dark: Signal<bool>,
}

impl ThemeState {
    /// Apply the current family + mode to the document.
    pub fn apply(&self) {
        let family = ThemeFamily::from_key(&self.family.read());
        let theme = family.resolve(*self.is_dark.read());
        set_theme(theme);
    }
}

/// Seed the theme on application startup.
///
/// Reads the persisted theme from a cookie and applies it to the document
/// root. Call this once in your top-level App component.
#[component]
pub fn ThemeSeed() -> Element {
    use_effect(|| {
        // Read theme cookie and apply data-theme attribute to <html>
        document::eval(
            r#"
            (function() {
                var match = document.cookie.match(/(?:^|;\s*)theme=([^;]*)/);
                var theme = match ? match[1] : 'clinical';
                document.documentElement.setAttribute('data-theme', theme);
            })();
            "#,
        );
    });

    rsx! {}
}

/// Set the active theme, persisting to a cookie and updating the document.
pub fn set_theme(theme: &str) {
    document::eval(&format!(
        r#"
        (function() {{
            document.cookie = 'theme={theme};path=/;max-age=2592000;SameSite=Lax';
            document.documentElement.setAttribute('data-theme', '{theme}');
        }})();
        "#,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_family_default_is_clinical() {
        assert_eq!(ThemeFamily::default(), ThemeFamily::Clinical);
    }

    #[test]
    fn theme_family_as_str_roundtrip() {
        for family in ALL_FAMILIES {
            assert_eq!(ThemeFamily::from_key(family.as_str()), *family);
        }
    }

    #[test]
    fn theme_family_from_key_unknown_falls_back() {
        assert_eq!(ThemeFamily::from_key("unknown"), ThemeFamily::Clinical);
        assert_eq!(ThemeFamily::from_key(""), ThemeFamily::Clinical);
    }

    #[test]
    fn theme_family_resolve_dual_mode() {
        assert_eq!(ThemeFamily::Clinical.resolve(true), "clinical-dark");
        assert_eq!(ThemeFamily::Clinical.resolve(false), "clinical");
        assert_eq!(ThemeFamily::Mint.resolve(true), "mint-dark");
        assert_eq!(ThemeFamily::Mint.resolve(false), "mint");
    }

    #[test]
    fn theme_family_resolve_single_mode() {
        // Graphite is dark-only and always resolves to "graphite"
        assert_eq!(ThemeFamily::Graphite.resolve(true), "graphite");
        assert_eq!(ThemeFamily::Graphite.resolve(false), "graphite");
    }

    #[test]
    fn theme_family_mode_support() {
        assert!(ThemeFamily::Clinical.has_light());
        assert!(ThemeFamily::Mint.has_light());
        assert!(!ThemeFamily::Graphite.has_light());
    }
}
