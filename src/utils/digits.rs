use log::debug;

use crate::utils::constants::MIN_QUOTIENT;

/// Closed range of integers written with exactly `digits` digits.
///
/// Zero and one digit both resolve to `1..=9`; zero is never drawn as an
/// operand. Digit counts too large for `i64` saturate instead of
/// overflowing.
pub fn digit_range(digits: u32) -> (i64, i64) {
    if digits <= 1 {
        return (1, 9);
    }

    let min = 10_i64.saturating_pow(digits - 1);
    let max = 10_i64.saturating_pow(digits).saturating_sub(1);
    debug!("digit_range({}) = ({}, {})", digits, min, max);
    (min, max)
}

/// Range of quotients `m >= 2` for which `divisor * m` lands inside
/// `[dividend_min, dividend_max]`, or `None` when no such multiple exists.
pub fn quotient_range(divisor: i64, dividend_min: i64, dividend_max: i64) -> Option<(i64, i64)> {
    if divisor <= 0 || dividend_max < dividend_min {
        return None;
    }

    // ceil(dividend_min / divisor) for positive operands
    let min_mul = dividend_min.max(0).saturating_add(divisor - 1) / divisor;
    let max_mul = dividend_max / divisor;
    let low = min_mul.max(MIN_QUOTIENT);

    (max_mul >= low).then_some((low, max_mul))
}
