//! # Core Error Types
//!
//! All errors that can occur in the treasure engine.

use thiserror::Error;

/// Errors that can occur in the treasure engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CofferError {
    /// A dice formula string could not be parsed.
    ///
    /// This is a programmer error, never a user error. A malformed formula
    /// must fail fast instead of being silently treated as zero.
    #[error("malformed dice formula: {formula:?}")]
    InvalidFormula {
        /// The offending formula string, verbatim.
        formula: String,
    },

    /// Settings contained an out-of-range or unreadable value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for treasure-engine operations.
pub type CofferResult<T> = Result<T, CofferError>;
