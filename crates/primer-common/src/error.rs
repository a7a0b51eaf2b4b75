//! This module defines the error types used by the `primer-common` crate.

#![warn(missing_docs)]

/// Error type for conversions into the shared types.
///
/// This enum covers the ways a raw label or numeric code can fail to name
/// a palette entry.
#[derive(Debug, PartialEq)]
pub enum CommonError {
    /// Error for an unrecognized color label.
    /// This variant is returned when a string matches no palette entry.
    UnknownColorName(&'static str),
    /// Error for an unrecognized color code.
    /// This variant is returned when a numeric code matches no palette entry.
    UnknownColorCode(&'static str),
}

impl core::fmt::Display for CommonError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CommonError::UnknownColorName(msg) => write!(f, "Unknown color name: {}", msg),
            CommonError::UnknownColorCode(msg) => write!(f, "Unknown color code: {}", msg),
        }
    }
}

impl core::error::Error for CommonError {}
