use log::{debug, warn};

use crate::generator::constants::{
    DEFAULT_A_RANGE, DEFAULT_B_RANGE, DEFAULT_DIVIDEND_RANGE, DEFAULT_DIVISOR_RANGE,
};
use crate::generator::errors::ConfigError;
use crate::generator::types::ProblemConfig;
use crate::operation::Operation;
use crate::utils::constants::{MAX_FIXED_OPERAND, MIN_DIVISOR};
use crate::utils::{
    clamp_count, clamp_digit_count, digit_range, validate_count, validate_digit_count,
};

impl ProblemConfig {
    pub fn new(operation: Operation, a_digits: u32, b_digits: u32, count: usize) -> Self {
        Self {
            a_digits: Some(a_digits),
            b_digits: Some(b_digits),
            a_fixed: None,
            b_fixed: None,
            operation,
            count,
        }
    }

    /// Pin the first operand. Its digit count no longer applies.
    #[must_use]
    pub fn with_fixed_a(mut self, value: i64) -> Self {
        self.a_fixed = Some(value);
        self.a_digits = None;
        self
    }

    /// Pin the second operand. Its digit count no longer applies.
    #[must_use]
    pub fn with_fixed_b(mut self, value: i64) -> Self {
        self.b_fixed = Some(value);
        self.b_digits = None;
        self
    }

    /// Clamp digit counts into 1..=8 and the session length into 1..=1000,
    /// the way raw form input is normalised before validation.
    #[must_use]
    pub fn clamped(mut self) -> Self {
        self.a_digits = self.a_digits.map(clamp_digit_count);
        self.b_digits = self.b_digits.map(clamp_digit_count);
        self.count = clamp_count(self.count);
        self
    }

    /// # Errors
    ///
    /// Returns `ConfigError::OutOfRange` when a digit count or the session
    /// length is out of range, and `ConfigError::InvalidConfiguration` when
    /// a fixed operand is negative or too large, a dividend is pinned for division, or the second operand has
    /// more digits than the first for subtraction or division.
    pub fn validate(&self) -> Result<(), ConfigError> {
        debug!("Validating configuration: {:?}", self);

        for digits in [self.a_digits, self.b_digits].into_iter().flatten() {
            validate_digit_count(digits)?;
        }
        validate_count(self.count)?;

        for fixed in [self.a_fixed, self.b_fixed].into_iter().flatten() {
            if !(0..=MAX_FIXED_OPERAND).contains(&fixed) {
                warn!("Fixed operand out of range: {}", fixed);
                return Err(ConfigError::InvalidConfiguration(format!(
                    "fixed operand must be between 0 and {MAX_FIXED_OPERAND}, got {fixed}"
                )));
            }
        }

        if self.operation == Operation::Div && self.a_fixed.is_some() {
            return Err(ConfigError::InvalidConfiguration(
                "a fixed dividend is not supported for division".to_string(),
            ));
        }

        if self.operation.needs_feasibility_check()
            && let (Some(a_digits), Some(b_digits)) = (self.a_digits, self.b_digits)
            && b_digits > a_digits
        {
            warn!(
                "Rejecting {} with b_digits={} > a_digits={}",
                self.operation, b_digits, a_digits
            );
            return Err(ConfigError::InvalidConfiguration(
                "for subtraction and division, b's digits cannot be greater than a's".to_string(),
            ));
        }

        Ok(())
    }

    /// Inclusive bounds the first operand is drawn from
    pub fn a_bounds(&self) -> (i64, i64) {
        match (self.a_fixed, self.a_digits) {
            (Some(value), _) => (value, value),
            (None, Some(digits)) => digit_range(digits),
            (None, None) => DEFAULT_A_RANGE,
        }
    }

    /// Inclusive bounds the second operand is drawn from
    pub fn b_bounds(&self) -> (i64, i64) {
        match (self.b_fixed, self.b_digits) {
            (Some(value), _) => (value, value),
            (None, Some(digits)) => digit_range(digits),
            (None, None) => DEFAULT_B_RANGE,
        }
    }

    /// Dividend and divisor bounds for free division. The divisor never
    /// goes below two.
    pub fn division_bounds(&self) -> ((i64, i64), (i64, i64)) {
        let dividend = self.a_digits.map_or(DEFAULT_DIVIDEND_RANGE, digit_range);
        let (b_min, b_max) = self.b_digits.map_or(DEFAULT_DIVISOR_RANGE, digit_range);
        (dividend, (b_min.max(MIN_DIVISOR), b_max))
    }
}
