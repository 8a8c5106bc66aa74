//! Hour label normalization.
//!
//! Source sheets label hours inconsistently (`"7h"`, `"7"`, `" 7H "`). The
//! parser is permissive: it only strips the unit and converts, it does not
//! check that the result is a valid hour of day. Grouping downstream decides
//! what to do with odd values.

/// Parse a free-form hour label into an integer hour.
///
/// Returns `None` when the label is empty or its remainder is not an integer.
pub fn parse(label: &str) -> Option<i64> {
    let trimmed = label.trim();
    let without_unit = trimmed
        .strip_suffix('h')
        .or_else(|| trimmed.strip_suffix('H'))
        .unwrap_or(trimmed);
    without_unit.trim().parse::<i64>().ok()
}
