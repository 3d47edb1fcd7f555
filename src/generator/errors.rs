use thiserror::Error;

use crate::operation::{Operation, OperationError};
use crate::utils::UtilsError;

/// Reasons a configuration is rejected before any problem is generated
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Invalid configuration: {0}")]
    OutOfRange(#[from] UtilsError),
    #[error("Infeasible configuration for {operation}: {reason}")]
    InfeasibleConfiguration {
        operation: Operation,
        reason: String,
    },
}

/// Generation failures. The generator recovers from these itself by
/// substituting a fallback problem; they only ever reach the log.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Gave up after {attempts} attempts")]
    Exhausted { attempts: usize },
    #[error("No operands satisfy {0} for this configuration")]
    NoValidOperands(Operation),
    #[error("Arithmetic error: {0}")]
    Arithmetic(#[from] OperationError),
}
