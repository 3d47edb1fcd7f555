//! Mathdrill - A library for generating arithmetic practice problems
//!
//! This library synthesises addition, subtraction, multiplication and division
//! problems constrained by operand digit counts and fixed operands, checks up
//! front whether a configuration can produce any valid problem at all, and
//! tracks progress through a fixed-length practice session.

pub mod drills;
pub mod feasibility;
pub mod generator;
pub mod operation;
pub mod session;
pub mod utils;

use rand::Rng;

// Re-export the main public API
pub use drills::Drill;
pub use feasibility::FeasibilityChecker;
pub use generator::{
    ConfigError, GenerationError, OperandPair, Problem, ProblemConfig, ProblemGenerator,
};
pub use operation::{Operation, OperationError};
pub use session::{AnswerOutcome, PracticeSession, SessionError, SessionState};
pub use utils::{UtilsError, digit_range};

/// Check whether an operation can produce any valid problem for the given
/// operand digit counts.
///
/// Only subtraction and division can fail; addition and multiplication are
/// always feasible. For very wide divisor ranges the division check samples
/// candidates, so it may rarely report `false` for a feasible range.
///
/// # Examples
///
/// ```
/// use mathdrill::{Operation, check_feasible};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// // a single-digit dividend cannot be split by a three-digit divisor
/// assert!(!check_feasible(Operation::Div, 1, 3, &mut rng));
/// assert!(check_feasible(Operation::Div, 3, 1, &mut rng));
/// ```
pub fn check_feasible<R: Rng + ?Sized>(
    operation: Operation,
    a_digits: u32,
    b_digits: u32,
    rng: &mut R,
) -> bool {
    FeasibilityChecker::new().check_feasible(operation, a_digits, b_digits, rng)
}

/// Generate one problem for `config`, avoiding the operand pair of the
/// previous problem where the configuration allows it.
///
/// This is a convenience function that uses a default generator.
///
/// # Examples
///
/// ```
/// use mathdrill::{Operation, ProblemConfig, generate};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let config = ProblemConfig::new(Operation::Add, 2, 2, 1);
/// let mut rng = StdRng::seed_from_u64(7);
/// let problem = generate(&config, None, &mut rng);
/// assert_eq!(problem.result, problem.operand_a + problem.operand_b);
/// ```
pub fn generate<R: Rng + ?Sized>(
    config: &ProblemConfig,
    previous: Option<OperandPair>,
    rng: &mut R,
) -> Problem {
    ProblemGenerator::new().generate(config, previous, rng)
}
