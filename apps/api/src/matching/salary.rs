//! Expected-salary parsing for free-text directory values.

use std::sync::LazyLock;

use regex::Regex;

/// Plausible monthly salary bounds in local currency. Anything outside is
/// treated as a misparse (phone numbers, years, annual figures).
pub const MIN_PLAUSIBLE_SALARY: u32 = 15_000;
pub const MAX_PLAUSIBLE_SALARY: u32 = 200_000;

static NUMBER_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d[\d,]*").expect("valid salary regex"));

/// Parses a declared salary such as `"₱25,000 - ₱35,000"` or `"30000"`.
///
/// Ranges resolve to the rounded midpoint of their first two numbers.
/// Returns 0 when nothing parses or the result is implausible. Commas are
/// always thousands separators.
pub fn parse_salary(raw: Option<&str>) -> u32 {
    let Some(raw) = raw.filter(|s| !s.trim().is_empty()) else {
        return 0;
    };

    // A run too long for u64 is out of range, not skipped.
    let Some(numbers) = NUMBER_RUN
        .find_iter(raw)
        .take(2)
        .map(|m| m.as_str().replace(',', "").parse::<u64>().ok())
        .collect::<Option<Vec<u64>>>()
    else {
        return 0;
    };

    let estimate = match numbers.as_slice() {
        [low, high] => ((*low as f64 + *high as f64) / 2.0).round() as u64,
        [single] => *single,
        _ => return 0,
    };

    if (u64::from(MIN_PLAUSIBLE_SALARY)..=u64::from(MAX_PLAUSIBLE_SALARY)).contains(&estimate) {
        estimate as u32
    } else {
        0
    }
}
