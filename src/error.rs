//! Crate-level error type

use thiserror::Error;

use crate::workspace::ValidationError;

/// Result type defaulting to the crate [`Error`]
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors surfaced by admission and configuration loading
#[derive(Error, Debug)]
pub enum Error {
    /// The run's workspaces were rejected
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The admission configuration could not be decoded
    #[error("invalid admission config: {0}")]
    Config(#[from] toml::de::Error),
}

impl Error {
    /// The validation failure, if this is one.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Config(_) => None,
        }
    }
}
