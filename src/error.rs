//! Error types for Reed-Solomon encoding operations

use thiserror::Error;

/// Errors that can occur while computing Reed-Solomon correction bytes
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RsError {
    /// Division by the zero element of GF(256)
    #[error("division by zero in GF(256)")]
    DivisionByZero,

    /// Denominator passed to polynomial division has no nonzero coefficient
    #[error("remainder denominator is the zero polynomial")]
    ZeroDenominator,
}

/// Type alias for Result with RsError
pub type Result<T> = std::result::Result<T, RsError>;
