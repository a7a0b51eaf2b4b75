#![warn(missing_docs)]

//! Error types for the arithmetic helpers.
//!
//! This module defines the error type shared by every checked operation in
//! the crate.

use core::fmt;

/// Errors that can occur in arithmetic operations.
#[derive(Debug, Clone, PartialEq)]
pub enum MathError {
    /// Error for a result outside the representable range.
    /// This variant is returned when a checked operation would wrap.
    Overflow(&'static str),
    /// Error for division by zero.
    /// This variant is returned when a zero divisor is supplied.
    DivisionByZero(&'static str),
}

impl core::fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::Overflow(msg) => write!(f, "Arithmetic overflow: {}", msg),
            MathError::DivisionByZero(msg) => write!(f, "Division by zero: {}", msg),
        }
    }
}

impl core::error::Error for MathError {}
