use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by CLI commands
#[derive(Error, Debug)]
pub enum Error {
    /// Identifier or identity error from the library
    #[error(transparent)]
    Mxid(#[from] mxid::Error),

    /// File system error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse or render error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Bad flag or environment value
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Input the command cannot work with
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
