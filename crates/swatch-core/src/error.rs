//! Error types for swatch operations.
//!
//! The conversion pipeline itself is total over numeric input and never fails.
//! Errors only arise at the boundary where user-supplied strings become numbers:
//!
//! - a field is not a number
//! - a number lies outside its channel's [`Domain`](crate::Domain)
//! - a hex string is not exactly three 2-digit hex groups
//!
//! All of these are cases of one kind, [`ValidationError`]. [`Error`] wraps it
//! for callers that also need a catch-all.
//!
//! # Usage
//!
//! ```rust
//! use swatch_core::{Channel, ValidationError};
//!
//! let err = ValidationError::out_of_range(Channel::Cyan, 150.0);
//! assert!(err.to_string().contains("150"));
//! ```

use thiserror::Error;

use crate::repr::Channel;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// A user-supplied value was rejected before any conversion ran.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Numeric value outside the channel's domain.
    #[error("{channel} value {value} is outside [{min}, {max}]")]
    OutOfRange {
        /// Channel that was checked
        channel: Channel,
        /// Rejected value, in display units
        value: f64,
        /// Lower bound (inclusive)
        min: f64,
        /// Upper bound (inclusive)
        max: f64,
    },

    /// Field text could not be parsed as a number.
    #[error("{channel} field {input:?} is not a number")]
    NotANumber {
        /// Channel the field belongs to
        channel: Channel,
        /// Raw field text
        input: String,
    },

    /// Hex string is not `#rrggbb`.
    #[error("malformed hex color {input:?}: {reason}")]
    MalformedHex {
        /// Raw input
        input: String,
        /// What was wrong with it
        reason: &'static str,
    },

    /// Wrong number of fields supplied for a representation.
    #[error("expected {expected} fields, got {got}")]
    WrongFieldCount {
        /// Fields the representation has
        expected: usize,
        /// Fields supplied
        got: usize,
    },

    /// Representation name or selector index not recognised.
    #[error("unknown representation {0:?}")]
    UnknownRepresentation(String),
}

impl ValidationError {
    /// Creates a [`ValidationError::OutOfRange`] from the channel's domain.
    #[inline]
    pub fn out_of_range(channel: Channel, value: f64) -> Self {
        let domain = channel.domain();
        Self::OutOfRange {
            channel,
            value,
            min: domain.min,
            max: domain.max,
        }
    }

    /// Creates a [`ValidationError::NotANumber`] error.
    #[inline]
    pub fn not_a_number(channel: Channel, input: impl Into<String>) -> Self {
        Self::NotANumber {
            channel,
            input: input.into(),
        }
    }

    /// Creates a [`ValidationError::MalformedHex`] error.
    #[inline]
    pub fn malformed_hex(input: impl Into<String>, reason: &'static str) -> Self {
        Self::MalformedHex {
            input: input.into(),
            reason,
        }
    }

    /// The channel involved, if the error concerns a single field.
    pub fn channel(&self) -> Option<Channel> {
        match self {
            Self::OutOfRange { channel, .. } | Self::NotANumber { channel, .. } => Some(*channel),
            _ => None,
        }
    }
}

/// Errors surfaced by swatch operations.
#[derive(Debug, Error)]
pub enum Error {
    /// User input failed validation; nothing was recomputed.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Generic error with custom message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Creates an [`Error::Other`] error.
    #[inline]
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Returns `true` if this is a validation error.
    #[inline]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Borrows the inner validation error, if any.
    #[inline]
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(e) => Some(e),
            Self::Other(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_uses_domain() {
        let err = ValidationError::out_of_range(Channel::Key, 150.0);
        match err {
            ValidationError::OutOfRange { min, max, .. } => {
                assert_eq!(min, 0.0);
                assert_eq!(max, 100.0);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(err.channel(), Some(Channel::Key));
    }

    #[test]
    fn test_messages() {
        let err = ValidationError::out_of_range(Channel::A, -200.0);
        let msg = err.to_string();
        assert!(msg.contains("-200"));
        assert!(msg.contains("-128"));
        assert!(msg.contains("127"));

        let err = ValidationError::not_a_number(Channel::Red, "abc");
        assert!(err.to_string().contains("\"abc\""));

        let err = ValidationError::malformed_hex("#12", "expected 6 hex digits");
        assert!(err.to_string().contains("6 hex digits"));
        assert_eq!(err.channel(), None);
    }

    #[test]
    fn test_error_conversion() {
        let err: Error = ValidationError::WrongFieldCount { expected: 4, got: 3 }.into();
        assert!(err.is_validation());
        assert!(err.as_validation().is_some());
        assert!(!Error::other("boom").is_validation());
    }
}
