use thiserror::Error;

use crate::generator::ConfigError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Configuration rejected: {0}")]
    Config(#[from] ConfigError),
    #[error("No practice session is in progress")]
    NotInProgress,
}
