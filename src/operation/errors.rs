use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OperationError {
    #[error("Unknown operation symbol: '{0}'")]
    UnknownSymbol(String),
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Integer overflow while applying {0}")]
    Overflow(char),
}
