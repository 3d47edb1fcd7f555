use crate::utils::constants::{MAX_COUNT, MAX_DIGITS};
use crate::utils::{
    UtilsError, clamp_count, clamp_digit_count, digit_range, parse_answer, validate_count,
    validate_digit_count,
};

#[test]
fn test_digit_range_small() {
    assert_eq!(digit_range(1), (1, 9));
    assert_eq!(digit_range(2), (10, 99));
    assert_eq!(digit_range(3), (100, 999));
}

#[test]
fn test_digit_range_zero_clamps_to_single_digit() {
    assert_eq!(digit_range(0), (1, 9));
}

#[test]
fn test_digit_range_largest_supported() {
    assert_eq!(digit_range(MAX_DIGITS), (10_000_000, 99_999_999));
}

#[test]
fn test_digit_range_saturates() {
    let (min, max) = digit_range(40);
    assert_eq!(min, i64::MAX);
    assert_eq!(max, i64::MAX - 1);
}

#[test]
fn test_clamping() {
    assert_eq!(clamp_digit_count(0), 1);
    assert_eq!(clamp_digit_count(5), 5);
    assert_eq!(clamp_digit_count(12), MAX_DIGITS);
    assert_eq!(clamp_count(0), 1);
    assert_eq!(clamp_count(25), 25);
    assert_eq!(clamp_count(5000), MAX_COUNT);
}

#[test]
fn test_validate_digit_count() {
    assert!(validate_digit_count(1).is_ok());
    assert!(validate_digit_count(8).is_ok());
    assert_eq!(
        validate_digit_count(9),
        Err(UtilsError::DigitCountOutOfRange(9))
    );
    assert!(validate_digit_count(0).is_err());
}

#[test]
fn test_validate_count() {
    assert!(validate_count(1).is_ok());
    assert!(validate_count(1000).is_ok());
    assert_eq!(validate_count(0), Err(UtilsError::CountOutOfRange(0)));
    assert!(validate_count(1001).is_err());
}

#[test]
fn test_parse_answer() {
    assert_eq!(parse_answer("42"), Some(42));
    assert_eq!(parse_answer("  -7 \n"), Some(-7));
    assert_eq!(parse_answer("4 2"), None);
    assert_eq!(parse_answer("forty"), None);
    assert_eq!(parse_answer(""), None);
}

#[test]
fn test_parse_answer_truncates_before_trimming() {
    // the limit counts leading spaces, so only "1" survives
    let raw = format!("{}123", " ".repeat(15));
    assert_eq!(parse_answer(&raw), Some(1));
    let raw = format!("55{}x", " ".repeat(14));
    assert_eq!(parse_answer(&raw), Some(55));
    assert_eq!(parse_answer("55\r\n"), Some(55));
}

#[test]
fn test_parse_answer_truncates_long_input() {
    assert_eq!(parse_answer("12345678901234567890"), Some(1_234_567_890_123_456));
}

#[test]
fn test_quotient_range_within_digits() {
    // two-digit dividends divisible by 7: 14..=98
    assert_eq!(crate::utils::quotient_range(7, 10, 99), Some((2, 14)));
    // 5 into three-digit dividends
    assert_eq!(crate::utils::quotient_range(5, 100, 999), Some((20, 199)));
}

#[test]
fn test_quotient_range_floors_quotient_at_two() {
    // 9 fits once into 1..=9 but a quotient of 1 is not allowed
    assert_eq!(crate::utils::quotient_range(9, 1, 9), None);
    assert_eq!(crate::utils::quotient_range(4, 1, 9), Some((2, 2)));
}

#[test]
fn test_quotient_range_divisor_too_large() {
    assert_eq!(crate::utils::quotient_range(100, 1, 9), None);
    assert_eq!(crate::utils::quotient_range(0, 1, 9), None);
}
