//! Error types for astronomical calculations.
//!
//! [`AstroError`] is shared by the core algebra, angle and geodesy routines.
//!
//! | Variant | Use Case |
//! |---------|----------|
//! | [`MathError`](AstroError::MathError) | Non-finite or out-of-range values |
//! | [`InvalidParameter`](AstroError::InvalidParameter) | Out-of-domain argument with a numeric status |
//!
//! # Status codes
//!
//! Every routine in this workspace documents a small integer status with the
//! classic meaning: `0` success, negative for a hard error, positive for a
//! warning. Hard errors surface as `Err` values, and [`AstroError::status_code`]
//! recovers the negative number so callers porting status-code logic keep
//! identical values. Warnings never become errors; they are carried on the
//! returned value.
//!
//! ```
//! use celestial_core::{AstroError, Ellipsoid};
//!
//! let err = Ellipsoid::from_id(99).unwrap_err();
//! assert_eq!(err.status_code(), -1);
//! ```

use thiserror::Error;

/// Classification of mathematical errors.
///
/// Used with [`AstroError::MathError`] to distinguish between different
/// numerical failure modes.
#[derive(Debug, Clone, PartialEq)]
pub enum MathErrorKind {
    /// Input is NaN or infinite.
    NotFinite,
    /// Value outside valid domain (e.g., latitude > 90°).
    OutOfRange,
}

/// Error type for core astronomical calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AstroError {
    /// Numerical computation failure.
    #[error("Math error in {operation} ({kind:?}): {message}")]
    MathError {
        operation: String,
        kind: MathErrorKind,
        message: String,
    },

    /// Argument outside the domain of a routine, tagged with its status code.
    #[error("Invalid parameter in {function}: status {status_code} - {message}")]
    InvalidParameter {
        function: String,
        status_code: i32,
        message: String,
    },
}

/// Convenience alias for `Result<T, AstroError>`.
pub type AstroResult<T> = Result<T, AstroError>;

impl AstroError {
    /// Creates a [`MathError`](Self::MathError) with the given kind.
    pub fn math_error(operation: &str, kind: MathErrorKind, reason: &str) -> Self {
        Self::MathError {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }

    /// Creates an [`InvalidParameter`](Self::InvalidParameter) error carrying a status code.
    pub fn invalid_parameter(function: &str, status_code: i32, message: &str) -> Self {
        Self::InvalidParameter {
            function: function.to_string(),
            status_code,
            message: message.to_string(),
        }
    }

    /// The negative status code the failing routine documents.
    ///
    /// [`InvalidParameter`](Self::InvalidParameter) carries its own code;
    /// [`MathError`](Self::MathError) is `-1`, "unacceptable input".
    pub fn status_code(&self) -> i32 {
        match self {
            Self::InvalidParameter { status_code, .. } => *status_code,
            Self::MathError { .. } => -1,
        }
    }
}
