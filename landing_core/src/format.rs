//! Display helpers for teaser cards.

/// Whole US dollars with thousands separators, e.g. `$12,345`.
///
/// Cents are rounded half away from zero.
pub fn usd_from_cents(cents: i64) -> String {
    let negative = cents < 0;
    let dollars = (cents.unsigned_abs() + 50) / 100;
    let digits = dollars.to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative && dollars > 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// `"42% funded"`
pub fn percent_funded(percent: f64) -> String {
    let shown = if percent.is_finite() { percent } else { 0.0 };
    format!("{shown:.0}% funded")
}
