//! Error types and handling for the blog service
//!
//! Every failure crossing a component boundary carries its kind explicitly so
//! the HTTP adapter can pick a status code without inspecting message text.

use thiserror::Error;

/// Main result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the blog service
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed caller input: bad id, bad paging parameters, id mismatch on update
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Record failed required-field checks; carries every violated field
    #[error("Validation failed: missing or empty fields: {}", .fields.join(", "))]
    Validation {
        /// Names of the violated fields
        fields: Vec<String>,
    },

    /// Referenced record, or the backing document itself, does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage layer errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Storage-specific errors
#[derive(Error, Debug)]
pub enum StorageError {
    /// Backing document exists but cannot be parsed into the expected shape
    #[error("Data corruption detected: {0}")]
    Corruption(String),

    /// Disk I/O operation failed
    #[error("Disk I/O failed: {0}")]
    DiskIo(#[from] std::io::Error),
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a validation error over the given violated fields
    pub fn validation(fields: Vec<String>) -> Self {
        Self::Validation { fields }
    }

    /// Create a not found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound(resource.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Check if this is a client error (4xx equivalent)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidArgument(_) | Error::Validation { .. } | Error::NotFound(_)
        )
    }

    /// Check if this is a server error (5xx equivalent)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::Storage(_) | Error::Config(_))
    }
}
