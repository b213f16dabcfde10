/// Shared formatting utilities for the UI layer.
///
/// All functions accept ISO-8601 date strings (e.g. "2026-08-06") and
/// produce human-readable output without external crate dependencies.

const MONTH_NAMES: [&str; 12] = [
    "Ene", "Feb", "Mar", "Abr", "May", "Jun",
    "Jul", "Ago", "Sep", "Oct", "Nov", "Dic",
];

/// Parse month number (1-12) from a two-digit string.
fn parse_month(s: &str) -> Option<usize> {
    s.parse::<usize>().ok().filter(|m| (1..=12).contains(m))
}

/// Format an ISO date string as "6 Ago 2026" (date-only, human-readable).
///
/// Falls back to the first 10 characters if parsing fails.
pub fn format_date_human(date_str: &str) -> String {
    if date_str.len() < 10 {
        return date_str.to_string();
    }
    let year = &date_str[..4];
    let month = &date_str[5..7];
    let day = &date_str[8..10];

    if let Some(m) = parse_month(month) {
        let day_num: u32 = day.parse().unwrap_or(0);
        format!("{} {} {}", day_num, MONTH_NAMES[m - 1], year)
    } else {
        date_str[..10].to_string()
    }
}

/// Format integer cents as a currency amount ("4500" cents → "$45.00").
pub fn format_money_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.abs();
    format!("{}${}.{:02}", sign, abs / 100, abs % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_formats_and_falls_back() {
        assert_eq!(format_date_human("2026-08-06"), "6 Ago 2026");
        assert_eq!(format_date_human("2026-13-06"), "2026-13-06");
        assert_eq!(format_date_human("bad"), "bad");
    }

    #[test]
    fn money_formats_cents() {
        assert_eq!(format_money_cents(4500), "$45.00");
        assert_eq!(format_money_cents(5), "$0.05");
        assert_eq!(format_money_cents(-1250), "-$12.50");
    }
}
