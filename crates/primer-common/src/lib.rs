//! Shared types for the primer walkthrough.
//!
//! This crate holds the small value types the walkthrough binary and the
//! arithmetic examples pass around: a plane [`Point`], the three-value
//! [`Color`] palette, and the [`CommonError`] type their fallible
//! conversions report.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

pub mod color;
pub mod error;
pub mod point;

pub use color::Color;
pub use error::CommonError;
pub use point::Point;
