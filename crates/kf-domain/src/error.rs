//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for keyed factories
///
/// Failures raised by caller-supplied factories or constructors are never
/// wrapped in this type; they surface to the caller unchanged.
#[derive(Error, Debug)]
pub enum Error {
    /// No resolvable matched the subject key and the chain ended in
    /// [`otherwise_unresolved`](crate::ResolutionBuilder::otherwise_unresolved)
    #[error("Type {key} not found")]
    Unresolved {
        /// Debug rendering of the subject key
        key: String,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Infrastructure operation error (logging setup)
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    /// Create an unresolved-key error
    pub fn unresolved<S: Into<String>>(key: S) -> Self {
        Self::Unresolved { key: key.into() }
    }
}
