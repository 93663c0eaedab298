//! Display formatting helpers: rupee amounts, dates, avatar initials.

use api::models::parse_iso_date;

/// Format an amount in rupees with Indian digit grouping:
/// `1234567.5` → `"₹12,34,567.50"`, `18000` → `"₹18,000"`.
pub fn format_inr(amount: f64) -> String {
    let negative = amount < 0.0;
    let amount = amount.abs();
    let rupees = amount.trunc() as u64;
    let paise = ((amount.fract() * 100.0).round() as u64).min(99);

    let digits = rupees.to_string();
    let mut grouped = String::new();
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        grouped.push(ch);
        let remaining = len - i - 1;
        // Indian grouping: last group of three, then pairs.
        if remaining > 0 && (remaining == 3 || (remaining > 3 && (remaining - 3) % 2 == 0)) {
            grouped.push(',');
        }
    }

    let sign = if negative { "-" } else { "" };
    if paise == 0 {
        format!("{sign}\u{20B9}{grouped}")
    } else {
        format!("{sign}\u{20B9}{grouped}.{paise:02}")
    }
}

/// Render an ISO date string as `20 Jan 2024`, or `"N/A"` when absent
/// or unparseable.
pub fn format_date(value: Option<&str>) -> String {
    match value.and_then(parse_iso_date) {
        Some(date) => date.format("%d %b %Y").to_string(),
        None => "N/A".to_string(),
    }
}

/// Up to two uppercase initials for the avatar circle.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|w| w.chars().next())
        .take(2)
        .flat_map(|c| c.to_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inr_indian_grouping() {
        assert_eq!(format_inr(0.0), "\u{20B9}0");
        assert_eq!(format_inr(500.0), "\u{20B9}500");
        assert_eq!(format_inr(18000.0), "\u{20B9}18,000");
        assert_eq!(format_inr(123456.0), "\u{20B9}1,23,456");
        assert_eq!(format_inr(12345678.0), "\u{20B9}1,23,45,678");
    }

    #[test]
    fn test_inr_paise_and_sign() {
        assert_eq!(format_inr(1234567.5), "\u{20B9}12,34,567.50");
        assert_eq!(format_inr(-500.0), "-\u{20B9}500");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(Some("2024-01-20")), "20 Jan 2024");
        assert_eq!(format_date(Some("2024-01-20T00:00:00.000Z")), "20 Jan 2024");
        assert_eq!(format_date(Some("soon")), "N/A");
        assert_eq!(format_date(None), "N/A");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Jane Smith"), "JS");
        assert_eq!(initials("Rahul"), "R");
        assert_eq!(initials("Mike Ross Johnson"), "MR");
        assert_eq!(initials(""), "");
    }
}
