//! Numeric conversion helpers centralizing safe numeric casts.

use num_traits::cast::cast;

/// Floor a f64 and clamp it into the `u64` range, returning 0 for non-finite
/// or negative values.
#[must_use]
pub fn floor_f64_to_balance(value: f64) -> u64 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    let max = cast::<u64, f64>(u64::MAX).unwrap_or(f64::MAX);
    let clamped = value.min(max).floor();
    cast::<f64, u64>(clamped).unwrap_or(u64::MAX)
}

/// Parse a persisted balance string the way a lenient numeric coercion would:
/// surrounding whitespace is ignored, fractional values are floored, and
/// anything non-numeric, non-finite or negative becomes 0.
#[must_use]
pub fn parse_balance(raw: &str) -> u64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0;
    }
    if let Ok(whole) = trimmed.parse::<u64>() {
        return whole;
    }
    trimmed.parse::<f64>().map_or(0, floor_f64_to_balance)
}

/// Apply a signed delta to a balance, saturating at both ends.
#[must_use]
pub fn apply_delta(balance: u64, delta: i64) -> u64 {
    if delta >= 0 {
        balance.saturating_add(delta.unsigned_abs())
    } else {
        balance.saturating_sub(delta.unsigned_abs())
    }
}

/// Convert a cents amount into a float for display formatting.
#[must_use]
pub fn cents_to_f64(value: u64) -> f64 {
    cast::<u64, f64>(value).unwrap_or(0.0) / 100.0
}

/// Plain euro rendering used in log lines and confirmation summaries.
#[must_use]
pub fn format_euros(cents: u64) -> String {
    format!("€{}.{:02}", cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_handles_non_finite_and_negative() {
        assert_eq!(floor_f64_to_balance(f64::NAN), 0);
        assert_eq!(floor_f64_to_balance(f64::INFINITY), 0);
        assert_eq!(floor_f64_to_balance(-3.7), 0);
        assert_eq!(floor_f64_to_balance(12.9), 12);
        assert_eq!(floor_f64_to_balance(f64::MAX), u64::MAX);
    }

    #[test]
    fn parse_balance_coerces_malformed_input() {
        assert_eq!(parse_balance("42"), 42);
        assert_eq!(parse_balance(" 17 "), 17);
        assert_eq!(parse_balance("12.75"), 12);
        assert_eq!(parse_balance("-5"), 0);
        assert_eq!(parse_balance("abc"), 0);
        assert_eq!(parse_balance(""), 0);
        assert_eq!(parse_balance("NaN"), 0);
    }

    #[test]
    fn delta_saturates() {
        assert_eq!(apply_delta(10, -25), 0);
        assert_eq!(apply_delta(10, 5), 15);
        assert_eq!(apply_delta(u64::MAX, 1), u64::MAX);
        assert_eq!(apply_delta(0, i64::MIN), 0);
    }

    #[test]
    fn cents_render_as_units() {
        assert!((cents_to_f64(12_345) - 123.45).abs() < f64::EPSILON);
        assert_eq!(format_euros(8_000), "€80.00");
        assert_eq!(format_euros(505), "€5.05");
    }
}
