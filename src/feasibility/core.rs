use log::{debug, info, warn};
use rand::Rng;
use rayon::prelude::*;

use crate::feasibility::constants::{DIVISOR_SAMPLE_SIZE, EXHAUSTIVE_SCAN_LIMIT};
use crate::generator::{ConfigError, ProblemConfig};
use crate::operation::Operation;
use crate::utils::constants::MIN_DIVISOR;
use crate::utils::{digit_range, quotient_range};

/// Decides whether a configuration can produce at least one valid problem
pub struct FeasibilityChecker {
    exhaustive_limit: i64,
    sample_size: usize,
}

impl FeasibilityChecker {
    pub fn new() -> Self {
        Self {
            exhaustive_limit: EXHAUSTIVE_SCAN_LIMIT,
            sample_size: DIVISOR_SAMPLE_SIZE,
        }
    }

    pub fn with_limits(exhaustive_limit: i64, sample_size: usize) -> Self {
        Self {
            exhaustive_limit,
            sample_size,
        }
    }

    /// Feasibility by digit counts. Addition and multiplication always
    /// succeed.
    pub fn check_feasible<R: Rng + ?Sized>(
        &self,
        operation: Operation,
        a_digits: u32,
        b_digits: u32,
        rng: &mut R,
    ) -> bool {
        match operation {
            Operation::Add | Operation::Mul => true,
            Operation::Sub => self.is_subtraction_feasible(a_digits, b_digits),
            Operation::Div => self.is_division_feasible(a_digits, b_digits, rng),
        }
    }

    pub fn is_subtraction_feasible(&self, a_digits: u32, b_digits: u32) -> bool {
        self.subtraction_feasible_in(digit_range(a_digits), digit_range(b_digits))
    }

    /// Some minuend exceeds some subtrahend. Unless a zero subtrahend is
    /// allowed, the minuend must also reach two so that a positive
    /// subtrahend exists below it.
    pub fn subtraction_feasible_in(&self, (_, a_max): (i64, i64), (b_min, _): (i64, i64)) -> bool {
        a_max > b_min && (b_min < 1 || a_max >= 2)
    }

    pub fn is_division_feasible<R: Rng + ?Sized>(
        &self,
        a_digits: u32,
        b_digits: u32,
        rng: &mut R,
    ) -> bool {
        let (b_min, b_max) = digit_range(b_digits);
        self.division_feasible_in(digit_range(a_digits), (b_min.max(MIN_DIVISOR), b_max), rng)
    }

    /// Whether some divisor in `divisors` has a multiple of at least twice
    /// itself inside `dividends`.
    ///
    /// Divisor ranges larger than the exhaustive limit are probed at their
    /// lower end and then sampled, so a `false` there is approximate.
    pub fn division_feasible_in<R: Rng + ?Sized>(
        &self,
        (a_min, a_max): (i64, i64),
        (b_min, b_max): (i64, i64),
        rng: &mut R,
    ) -> bool {
        let b_min = b_min.max(MIN_DIVISOR);
        if b_min > b_max {
            return false;
        }

        let admits = |b: i64| quotient_range(b, a_min, a_max).is_some();
        let candidates = b_max - b_min + 1;

        let feasible = if candidates <= self.exhaustive_limit {
            debug!("Scanning all {} divisors in {}..={}", candidates, b_min, b_max);
            (b_min..=b_max).into_par_iter().any(admits)
        } else {
            debug!(
                "Sampling {} of {} divisors in {}..={}",
                self.sample_size, candidates, b_min, b_max
            );
            admits(b_min) || (0..self.sample_size).any(|_| admits(rng.random_range(b_min..=b_max)))
        };

        debug!(
            "Division with dividends {}..={} and divisors {}..={} feasible: {}",
            a_min, a_max, b_min, b_max, feasible
        );
        feasible
    }

    /// Validate a configuration and confirm it can produce problems.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidConfiguration` if validation fails and
    /// `ConfigError::InfeasibleConfiguration` if no valid operand pair exists.
    pub fn check_config<R: Rng + ?Sized>(
        &self,
        config: &ProblemConfig,
        rng: &mut R,
    ) -> Result<(), ConfigError> {
        config.validate()?;

        let feasible = match config.operation {
            Operation::Add | Operation::Mul => true,
            Operation::Sub => self.subtraction_feasible_in(config.a_bounds(), config.b_bounds()),
            // a pinned divisor always divides its own multiples
            Operation::Div if config.b_fixed.is_some() => true,
            Operation::Div => {
                let (dividends, divisors) = config.division_bounds();
                self.division_feasible_in(dividends, divisors, rng)
            }
        };

        if !feasible {
            let reason = match config.operation {
                Operation::Div => "these digit ranges can't produce valid division problems",
                _ => "impossible to guarantee b < a with these digits",
            };
            warn!("Rejecting configuration {:?}: {}", config, reason);
            return Err(ConfigError::InfeasibleConfiguration {
                operation: config.operation,
                reason: reason.to_string(),
            });
        }

        info!("Configuration accepted for {}", config.operation);
        Ok(())
    }
}

impl Default for FeasibilityChecker {
    fn default() -> Self {
        Self::new()
    }
}
