//! Process-wide constants shared by every generator.

/// Shortest string the `string` generator will ever produce.
pub const STRING_MIN_LEN: i64 = 1;

/// Longest string the `string` generator will ever produce.
pub const STRING_MAX_LEN: i64 = 100;

/// Largest integer exactly representable in an IEEE 754 double (2^53 - 1).
///
/// Used as the default upper bound of `integer`, since the draw is computed
/// in floating point.
pub const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;

/// Smallest integer exactly representable in an IEEE 754 double.
pub const MIN_SAFE_INTEGER: i64 = -MAX_SAFE_INTEGER;

/// Default pattern for `date`.
pub const DATE_DEFAULT_FORMAT: &str = "YYYY-MM-DD";

/// Default pattern for `time`.
pub const TIME_DEFAULT_FORMAT: &str = "HH:mm:ss";

/// Default pattern for `datetime`.
pub const DATETIME_DEFAULT_FORMAT: &str = "YYYY-MM-DD HH:mm:ss";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_bounds_are_ordered() {
        assert!(STRING_MIN_LEN >= 1);
        assert!(STRING_MIN_LEN <= STRING_MAX_LEN);
    }

    #[test]
    fn test_safe_integer_roundtrips_through_f64() {
        assert_eq!(MAX_SAFE_INTEGER as f64 as i64, MAX_SAFE_INTEGER);
        assert_eq!(MIN_SAFE_INTEGER as f64 as i64, MIN_SAFE_INTEGER);
    }
}
