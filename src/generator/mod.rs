pub mod constants;
mod config;
mod core;
mod errors;
mod types;

pub use core::ProblemGenerator;
pub use errors::{ConfigError, GenerationError};
pub use types::{OperandPair, Problem, ProblemConfig};
