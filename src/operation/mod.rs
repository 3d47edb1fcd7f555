//! Operation module split into submodules for clarity

mod ast;
mod display;
mod errors;
mod eval;

pub use ast::Operation;
pub use errors::OperationError;
