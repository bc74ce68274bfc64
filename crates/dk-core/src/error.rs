//! Error taxonomy shared by every tool.
//!
//! Each variant corresponds to one kind of user-visible failure. Errors are
//! recovered at the action that produced them and turned into a notice; they
//! never abort the application.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ToolError {
    /// Input does not have the shape the tool expects (malformed Base64,
    /// invalid JSON, unknown timezone, non-image file).
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// Input had a valid shape but its content could not be decoded.
    #[error("decoding failed: {0}")]
    Decoding(String),

    #[error("encoding failed: {0}")]
    Encoding(String),

    #[error("empty input")]
    EmptyInput,

    #[error("duplicate content")]
    DuplicateContent,

    /// The system clipboard or a remote service failed.
    #[error("external service error: {0}")]
    ExternalService(String),

    /// Durable storage rejected a write.
    #[error("storage error: {0}")]
    Storage(String),
}

impl ToolError {
    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::InvalidFormat(msg.into())
    }

    pub fn external(err: impl std::fmt::Display) -> Self {
        Self::ExternalService(err.to_string())
    }

    pub fn storage(err: impl std::fmt::Display) -> Self {
        Self::Storage(err.to_string())
    }
}

pub type ToolResult<T> = Result<T, ToolError>;
