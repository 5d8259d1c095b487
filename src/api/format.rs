use chrono::NaiveDate;

/// Comma-grouped billions, whole numbers unless the fraction is visible.
///
/// `234_000_000_000.0` prints as `234`; fractional billions keep two
/// decimals.
#[must_use]
pub fn format_billions(value: f64) -> String {
    let billions = value / 1e9;
    let rounded = billions.round();
    if (billions - rounded).abs() < 0.005 {
        group_thousands(rounded as i64)
    } else {
        let whole = billions.trunc() as i64;
        let cents = ((billions.fract().abs() * 100.0).round() as i64).min(99);
        format!("{}.{:02}", group_thousands(whole), cents)
    }
}

/// Calendar-year tick label.
pub(super) fn format_year(year: i32) -> String {
    match NaiveDate::from_ymd_opt(year, 1, 1) {
        Some(date) => date.format("%Y").to_string(),
        None => year.to_string(),
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    let leading = digits.len() % 3;
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && index % 3 == leading % 3 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
