use std::fmt;

use crate::operation::{Operation, OperationError};

/// Parameters for one practice session.
///
/// A fixed operand takes precedence over its digit count. Digit counts of
/// `None` fall back to the generator's default ranges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemConfig {
    pub a_digits: Option<u32>,
    pub b_digits: Option<u32>,
    pub a_fixed: Option<i64>,
    pub b_fixed: Option<i64>,
    pub operation: Operation,
    pub count: usize,
}

/// The operands of the last completed problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperandPair {
    pub a: i64,
    pub b: i64,
}

impl OperandPair {
    pub fn new(a: i64, b: i64) -> Self {
        Self { a, b }
    }
}

impl From<(i64, i64)> for OperandPair {
    fn from((a, b): (i64, i64)) -> Self {
        Self::new(a, b)
    }
}

/// A single generated problem together with its answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub operand_a: i64,
    pub operand_b: i64,
    pub operation: Operation,
    pub result: i64,
}

impl Problem {
    /// Build a problem, computing its result with exact integer arithmetic.
    ///
    /// # Errors
    ///
    /// Returns an error if the operation cannot be applied to the operands
    /// (division by zero or overflow).
    pub fn new(
        operation: Operation,
        operand_a: i64,
        operand_b: i64,
    ) -> Result<Self, OperationError> {
        let result = operation.apply(operand_a, operand_b)?;
        Ok(Self {
            operand_a,
            operand_b,
            operation,
            result,
        })
    }

    pub(crate) fn from_parts(
        operation: Operation,
        operand_a: i64,
        operand_b: i64,
        result: i64,
    ) -> Self {
        Self {
            operand_a,
            operand_b,
            operation,
            result,
        }
    }

    pub fn pair(&self) -> OperandPair {
        OperandPair::new(self.operand_a, self.operand_b)
    }

    pub fn check_answer(&self, answer: i64) -> bool {
        self.result == answer
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {}", self.operand_a, self.operation, self.operand_b)
    }
}
