use thiserror::Error;

use crate::utils::constants::{MAX_COUNT, MAX_DIGITS, MIN_COUNT, MIN_DIGITS};

/// Errors that can occur in utility functions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UtilsError {
    #[error("Digit count must be between {min} and {max}, got {0}", min = MIN_DIGITS, max = MAX_DIGITS)]
    DigitCountOutOfRange(u32),
    #[error("Problem count must be between {min} and {max}, got {0}", min = MIN_COUNT, max = MAX_COUNT)]
    CountOutOfRange(usize),
}
