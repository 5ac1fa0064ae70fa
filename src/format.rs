//! Number formatting for comparison cards.

/// Compact dollar amount: `$1.2B`, `$3.4M`, `$56K`, or a comma-grouped
/// amount below one thousand.
///
/// Compact amounts round halves up, so `2_500.0` is `$3K`.
///
/// ```
/// use twinsearch::format_currency;
///
/// assert_eq!(format_currency(2_340_000_000.0), "$2.3B");
/// assert_eq!(format_currency(15_600_000.0), "$15.6M");
/// assert_eq!(format_currency(48_200.0), "$48K");
/// assert_eq!(format_currency(950.0), "$950");
/// ```
pub fn format_currency(value: f64) -> String {
    if value >= 1_000_000_000.0 {
        format!("${:.1}B", round_tenths(value / 1_000_000_000.0))
    } else if value >= 1_000_000.0 {
        format!("${:.1}M", round_tenths(value / 1_000_000.0))
    } else if value >= 1_000.0 {
        format!("${:.0}K", (value / 1_000.0).round())
    } else {
        format!("${}", group_decimal(value))
    }
}

/// Round to one decimal place, halves away from zero.
fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Comma-grouped integer: `1,234,567`.
///
/// ```
/// use twinsearch::format_number;
///
/// assert_eq!(format_number(1_234_567), "1,234,567");
/// assert_eq!(format_number(12), "12");
/// ```
pub fn format_number(value: u64) -> String {
    group_digits(&value.to_string())
}

/// Insert a comma every three digits from the right of an ASCII digit string.
fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Comma-grouped decimal with at most three fraction digits and no trailing
/// zeros.
fn group_decimal(value: f64) -> String {
    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::new();
    if value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        out.push('-');
    }
    out.push_str(&group_digits(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}
