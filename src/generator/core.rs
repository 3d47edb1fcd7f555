use log::{debug, warn};
use rand::Rng;

use crate::generator::constants::{
    FALLBACK_DIVISION, FALLBACK_SUBTRACTION, FIXED_DIVISOR_MULTIPLIERS, MAX_GENERATION_ATTEMPTS,
};
use crate::generator::errors::GenerationError;
use crate::generator::types::{OperandPair, Problem, ProblemConfig};
use crate::operation::{Operation, OperationError};
use crate::utils::constants::MIN_DIVISOR;
use crate::utils::{digit_range, quotient_range};

/// Draw uniformly from an inclusive range; a degenerate range yields its
/// lower bound.
fn draw<R: Rng + ?Sized>(rng: &mut R, (low, high): (i64, i64)) -> i64 {
    if high <= low {
        low
    } else {
        rng.random_range(low..=high)
    }
}

fn fallback_problem(operation: Operation) -> Problem {
    let (a, b) = match operation {
        Operation::Sub => FALLBACK_SUBTRACTION,
        Operation::Div => FALLBACK_DIVISION,
        Operation::Add | Operation::Mul => (1, 1),
    };
    let result = match operation {
        Operation::Add => a + b,
        Operation::Sub => a - b,
        Operation::Mul => a * b,
        Operation::Div => a / b,
    };
    Problem::from_parts(operation, a, b, result)
}

/// Synthesises one problem at a time from a configuration.
///
/// The generator is stateless between calls: the configuration, the
/// previous operand pair and the random source are all supplied by the
/// caller.
pub struct ProblemGenerator {
    max_attempts: usize,
}

impl ProblemGenerator {
    pub fn new() -> Self {
        Self {
            max_attempts: MAX_GENERATION_ATTEMPTS,
        }
    }

    pub fn with_max_attempts(max_attempts: usize) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
        }
    }

    /// Generate a problem whose operand pair differs from `previous`.
    ///
    /// When the configuration leaves no other pair (for instance both
    /// operands are fixed), the repeat is accepted once the attempt budget
    /// runs out.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        config: &ProblemConfig,
        previous: Option<OperandPair>,
        rng: &mut R,
    ) -> Problem {
        let mut candidate = self.generate_one(config, rng);
        let Some(previous) = previous else {
            return candidate;
        };

        let mut attempts = 1;
        while candidate.pair() == previous && attempts < self.max_attempts {
            candidate = self.generate_one(config, rng);
            attempts += 1;
        }

        if candidate.pair() == previous {
            warn!(
                "Repeating {} {} {}: {}",
                previous.a,
                config.operation,
                previous.b,
                GenerationError::Exhausted { attempts }
            );
        } else {
            debug!("Found a fresh pair after {} attempt(s)", attempts);
        }
        candidate
    }

    /// Generate a single problem without regard to repetition, falling back
    /// to a trivial valid problem if synthesis fails.
    pub fn generate_one<R: Rng + ?Sized>(&self, config: &ProblemConfig, rng: &mut R) -> Problem {
        match self.synthesize(config, rng) {
            Ok(problem) => {
                debug!("Generated {} = {}", problem, problem.result);
                problem
            }
            Err(err) => {
                warn!("{}; using fallback problem", err);
                fallback_problem(config.operation)
            }
        }
    }

    fn synthesize<R: Rng + ?Sized>(
        &self,
        config: &ProblemConfig,
        rng: &mut R,
    ) -> Result<Problem, GenerationError> {
        match config.operation {
            Operation::Add | Operation::Mul => {
                let a = draw(rng, config.a_bounds());
                let b = draw(rng, config.b_bounds());
                Problem::new(config.operation, a, b).map_err(GenerationError::from)
            }
            Operation::Sub => self.subtraction(config, rng),
            Operation::Div => match config.b_fixed {
                Some(divisor) => self.fixed_divisor(divisor, rng),
                None => self.free_division(config, rng),
            },
        }
    }

    fn subtraction<R: Rng + ?Sized>(
        &self,
        config: &ProblemConfig,
        rng: &mut R,
    ) -> Result<Problem, GenerationError> {
        let (a_min, a_max) = config.a_bounds();
        let mut a = draw(rng, (a_min, a_max));
        let mut b = draw(rng, config.b_bounds());

        if b >= a {
            if config.b_fixed.is_some() {
                // the subtrahend is pinned, so lift the minuend above it
                let low = a_min.max(b.saturating_add(1));
                if config.a_fixed.is_none() && low <= a_max {
                    a = rng.random_range(low..=a_max);
                }
            } else {
                // a minuend of 1 leaves no positive subtrahend below it
                if a < 2 && config.a_fixed.is_none() && a_max >= 2 {
                    a = rng.random_range(a_min.max(2)..=a_max);
                }
                let cap = config
                    .b_digits
                    .map_or(a - 1, |digits| digit_range(digits).1.min(a - 1));
                if cap >= 1 {
                    b = rng.random_range(1..=cap);
                }
            }
        }

        if b >= a {
            return Err(GenerationError::NoValidOperands(Operation::Sub));
        }
        Ok(Problem::from_parts(Operation::Sub, a, b, a - b))
    }

    fn fixed_divisor<R: Rng + ?Sized>(
        &self,
        divisor: i64,
        rng: &mut R,
    ) -> Result<Problem, GenerationError> {
        let b = if divisor == 0 || divisor == 1 {
            debug!("Coercing fixed divisor {} to {}", divisor, MIN_DIVISOR);
            MIN_DIVISOR
        } else {
            divisor
        };
        let (low, high) = FIXED_DIVISOR_MULTIPLIERS;
        let multiplier = rng.random_range(low..=high);
        let a = b
            .checked_mul(multiplier)
            .ok_or(OperationError::Overflow(Operation::Div.symbol()))?;
        Ok(Problem::from_parts(Operation::Div, a, b, multiplier))
    }

    fn free_division<R: Rng + ?Sized>(
        &self,
        config: &ProblemConfig,
        rng: &mut R,
    ) -> Result<Problem, GenerationError> {
        let ((a_min, a_max), (b_min, b_max)) = config.division_bounds();
        if b_min > b_max {
            return Err(GenerationError::NoValidOperands(Operation::Div));
        }

        for attempt in 1..=self.max_attempts {
            let b = rng.random_range(b_min..=b_max);
            if let Some((low, high)) = quotient_range(b, a_min, a_max) {
                let multiplier = rng.random_range(low..=high);
                debug!(
                    "Divisor {} admits quotients {}..={} (attempt {})",
                    b, low, high, attempt
                );
                return Ok(Problem::from_parts(
                    Operation::Div,
                    b * multiplier,
                    b,
                    multiplier,
                ));
            }
        }

        Err(GenerationError::Exhausted {
            attempts: self.max_attempts,
        })
    }
}

impl Default for ProblemGenerator {
    fn default() -> Self {
        Self::new()
    }
}
