//! Formatting helpers for presenting totals.

/// Group thousands with `.` (`12345` → `"12.345"`), as shown on the KPI cards.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

pub fn format_hour(hour: i64) -> String {
    format!("{hour}h")
}
