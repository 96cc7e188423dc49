// src/core/errors.rs

use thiserror::Error;

/// Error type for numutil operations.
///
/// Every variant is raised at the point where a precondition is violated and
/// handed straight back to the caller. Not-found outcomes are `Option::None`,
/// not errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumUtilError {
    /// Argument outside the accepted range (negative exponent, non-positive
    /// modulus, negative factorial or sieve bound, ...).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Mathematically undefined request, e.g. `gcd(0, 0)`.
    #[error("Domain error: {0}")]
    DomainError(String),

    /// Reduction over a zero-length sequence.
    #[error("Input sequence is empty")]
    EmptyInput,

    /// The result does not fit in an `i64`.
    #[error("Overflow: result of {operation} does not fit in i64")]
    Overflow {
        /// Name of the operation that overflowed.
        operation: &'static str,
    },

    /// Console input token missing or not parseable.
    #[error("Malformed input: {0}")]
    MalformedInput(String),
}

impl NumUtilError {
    pub(crate) fn overflow(operation: &'static str) -> Self {
        NumUtilError::Overflow { operation }
    }
}
