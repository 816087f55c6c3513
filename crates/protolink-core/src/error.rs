//! Error types for message translation

use thiserror::Error;

/// Result type alias for translation operations
pub type TranslationResult<T> = Result<T, TranslationError>;

/// Error type for translation operations
///
/// Every variant is terminal for the invocation: there is no retry and no
/// partial output. The CLI writes its artifacts only after the whole
/// traversal has succeeded.
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Qualified type name could not be located by the resolver
    #[error("could not resolve message type {name}: {reason}")]
    TypeResolution { name: String, reason: String },

    /// Field-type string matches no recognized primitive, array, sequence,
    /// or resolvable message form
    #[error("unsupported built-in type: {0}")]
    UnsupportedType(String),

    /// Message graph references itself, directly or through intermediaries
    #[error("cyclic message definition involving {0}")]
    CyclicType(String),

    /// Type name is not of the `package/Name` form
    #[error("invalid type name {0:?}: expected package/Name")]
    InvalidTypeName(String),
}

impl TranslationError {
    /// Build a resolution failure for `name` with a human-readable reason
    pub fn resolution(name: impl Into<String>, reason: impl Into<String>) -> Self {
        TranslationError::TypeResolution {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
#[path = "error/error_tests.rs"]
mod error_tests;
