use log::{debug, warn};

use crate::utils::constants::{MAX_ANSWER_LEN, MAX_COUNT, MAX_DIGITS, MIN_COUNT, MIN_DIGITS};
use crate::utils::errors::UtilsError;

pub fn clamp_digit_count(digits: u32) -> u32 {
    digits.clamp(MIN_DIGITS, MAX_DIGITS)
}

pub fn clamp_count(count: usize) -> usize {
    count.clamp(MIN_COUNT, MAX_COUNT)
}

/// # Errors
///
/// Returns an error if the digit count lies outside the supported range.
pub fn validate_digit_count(digits: u32) -> Result<(), UtilsError> {
    if !(MIN_DIGITS..=MAX_DIGITS).contains(&digits) {
        warn!("Digit count out of range: {}", digits);
        return Err(UtilsError::DigitCountOutOfRange(digits));
    }
    Ok(())
}

/// # Errors
///
/// Returns an error if the session length lies outside the supported range.
pub fn validate_count(count: usize) -> Result<(), UtilsError> {
    if !(MIN_COUNT..=MAX_COUNT).contains(&count) {
        warn!("Problem count out of range: {}", count);
        return Err(UtilsError::CountOutOfRange(count));
    }
    Ok(())
}

/// Parse a learner's answer. Text past the input length limit is dropped
/// before surrounding whitespace is trimmed, and anything that is not an
/// integer yields `None`, which callers treat as a wrong answer rather than
/// an error.
pub fn parse_answer(raw: &str) -> Option<i64> {
    let line = raw.trim_end_matches(['\n', '\r']);
    let truncated: String = line.chars().take(MAX_ANSWER_LEN).collect();
    let parsed = truncated.trim().parse::<i64>().ok();
    debug!("Parsed answer '{}' as {:?}", raw, parsed);
    parsed
}
