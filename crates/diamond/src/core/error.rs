//! Core error types for diamond generation
//!
//! Every failure is an input-validation failure: generation itself cannot fail
//! once a token has been accepted. Each message is a specific complaint
//! followed by the fixed [`USAGE`] block, so callers can print it as-is.

use std::fmt;

use thiserror::Error;

/// Largest numeral accepted as input.
///
/// Output grows as `(2n+1)²`; at this bound a diamond is about 64 MiB of text.
pub const MAX_NUMERAL: u32 = 4095;

/// Usage block appended to every error message
pub const USAGE: &str = "
Usage: diamond (letter|number)
where letter is a valid uppercase or lowercase letter and number, a non-negative integer between 0 and 4095.";

/// Errors raised while validating diamond input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiamondError {
    #[error("Making a diamond without any input does not make sense!\n{}", USAGE)]
    NullInput,

    #[error("Making a diamond with an empty input does not make sense!\n{}", USAGE)]
    EmptyInput,

    #[error(
        "You can create a diamond only with a single letter or a non-negative integer, not {input:?}!\n{}",
        USAGE
    )]
    InvalidInput { input: String },
}

/// Classification of a [`DiamondError`], without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NullInput,
    EmptyInput,
    InvalidInput,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::NullInput => write!(f, "null-input"),
            ErrorKind::EmptyInput => write!(f, "empty-input"),
            ErrorKind::InvalidInput => write!(f, "invalid-input"),
        }
    }
}

impl DiamondError {
    /// Create a new invalid input error
    pub fn invalid_input(input: impl Into<String>) -> Self {
        Self::InvalidInput {
            input: input.into(),
        }
    }

    /// The kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            DiamondError::NullInput => ErrorKind::NullInput,
            DiamondError::EmptyInput => ErrorKind::EmptyInput,
            DiamondError::InvalidInput { .. } => ErrorKind::InvalidInput,
        }
    }
}
