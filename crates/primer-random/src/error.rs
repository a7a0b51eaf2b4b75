//! This module defines the error types used by the `primer-random` crate.

#![warn(missing_docs)]

/// Error type for generator configuration.
#[derive(Debug, PartialEq)]
pub enum RandomError {
    /// Error for an unusable upper bound.
    /// This variant is returned when the requested bound leaves nothing to
    /// sample.
    InvalidUpperBound(&'static str),
}

impl core::fmt::Display for RandomError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RandomError::InvalidUpperBound(msg) => write!(f, "Invalid upper bound: {}", msg),
        }
    }
}

impl core::error::Error for RandomError {}
