use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;

/// Subscribe this component to the browser's location-hash channel.
///
/// The returned signal seeds with the current hash and updates on every
/// `hashchange`. Each caller owns an id-keyed JS listener, so independent
/// consumers (session gate, layout shell, screen outlet) never share a
/// cursor; unmounting removes exactly this component's listener. Setting the
/// hash to its current value fires nothing (platform behavior), no local
/// de-duplication.
pub fn use_hash() -> Signal<String> {
    let mut hash = use_signal(String::new);
    let id = use_hook(next_subscription_id);

    use_future(move || async move {
        let mut channel = document::eval(&format!(
            r#"
            window.__hashSubs = window.__hashSubs || {{}};
            var handler = function() {{ dioxus.send(window.location.hash); }};
            window.__hashSubs[{id}] = handler;
            window.addEventListener('hashchange', handler);
            dioxus.send(window.location.hash);
            "#,
        ));
        while let Ok(value) = channel.recv::<String>().await {
            hash.set(value);
        }
    });

    use_drop(move || {
        document::eval(&format!(
            r#"
            var handler = window.__hashSubs && window.__hashSubs[{id}];
            if (handler) {{
                window.removeEventListener('hashchange', handler);
                delete window.__hashSubs[{id}];
            }}
            "#,
        ));
    });

    hash
}

fn next_subscription_id() -> u64 {
    static NEXT_ID: AtomicU64 = AtomicU64::new(0);
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Write the location hash. Screens navigate onward exclusively through
/// this, never by calling into the resolver.
pub fn set_hash(hash: &str) {
    document::eval(&format!(
        r#"window.location.hash = {};"#,
        serde_json::to_string(hash).unwrap_or_else(|_| "\"\"".to_string())
    ));
}

/// Build the hash key for a segment and optional subview.
pub fn hash_for(segment: &str, subview: Option<&str>) -> String {
    match subview {
        Some(sub) => format!("#{segment}/{sub}"),
        None => format!("#{segment}"),
    }
}

/// Loose split of a raw hash into `(segment, subview)`, used by the layout
/// shell to highlight the active item without consulting the resolver.
pub fn split_hash(hash: &str) -> (Option<&str>, Option<&str>) {
    let mut parts = hash.split('/');
    let head = parts
        .next()
        .map(|h| h.strip_prefix('#').unwrap_or(h))
        .filter(|h| !h.is_empty());
    let subview = parts.next().filter(|s| !s.is_empty());
    (head, subview)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_for_builds_both_forms() {
        assert_eq!(hash_for("admin", None), "#admin");
        assert_eq!(hash_for("admin", Some("staff")), "#admin/staff");
    }

    #[test]
    fn split_hash_segments() {
        assert_eq!(split_hash("#admin/staff"), (Some("admin"), Some("staff")));
        assert_eq!(split_hash("#paciente"), (Some("paciente"), None));
        assert_eq!(split_hash("#"), (None, None));
        assert_eq!(split_hash(""), (None, None));
        assert_eq!(
            split_hash("#admin/a/b"),
            (Some("admin"), Some("a")),
        );
    }
}
