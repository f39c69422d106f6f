use chrono::{DateTime, NaiveDate, NaiveDateTime};

fn format_with_commas(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `1234.5` with symbol `₹` becomes `₹1,234.50`.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{}{}{}.{:02}",
        sign,
        symbol,
        format_with_commas(cents / 100),
        cents % 100
    )
}

/// Renders the server's `created_at` as a calendar date. Whatever can't be
/// parsed is shown as-is.
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.date_naive().format("%d %b %Y").to_string();
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return dt.date().format("%d %b %Y").to_string();
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%d %b %Y").to_string();
    }
    raw.to_string()
}

/// `2024-03` becomes `Mar 2024`.
pub fn format_month(key: &str) -> String {
    NaiveDate::parse_from_str(&format!("{key}-01"), "%Y-%m-%d")
        .map(|date| date.format("%b %Y").to_string())
        .unwrap_or_else(|_| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0, "₹"), "₹0.00");
        assert_eq!(format_currency(999.0, "₹"), "₹999.00");
        assert_eq!(format_currency(1234.5, "₹"), "₹1,234.50");
        assert_eq!(format_currency(1234567.891, "$"), "$1,234,567.89");
        assert_eq!(format_currency(-42.1, "€"), "-€42.10");
        assert_eq!(format_currency(f64::NAN, "₹"), "₹0.00");
    }

    #[test]
    fn test_format_date_variants() {
        assert_eq!(format_date("2024-03-02T10:15:00+05:30"), "02 Mar 2024");
        assert_eq!(format_date("2024-03-02T10:15:00.123456"), "02 Mar 2024");
        assert_eq!(format_date("2024-03-02 10:15:00"), "02 Mar 2024");
        assert_eq!(format_date("2024-03-02"), "02 Mar 2024");
        assert_eq!(format_date("yesterday"), "yesterday");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn test_format_month() {
        assert_eq!(format_month("2024-03"), "Mar 2024");
        assert_eq!(format_month("bad"), "bad");
    }
}
