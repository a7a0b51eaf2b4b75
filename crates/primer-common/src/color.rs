//! The three-value color palette.

use crate::error::CommonError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A color in the walkthrough's palette.
///
/// The discriminants are stable and form the numeric encoding used by
/// [`Color::as_u8`] and [`Color::try_from`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    /// The first palette entry.
    Red = 0,
    /// The second palette entry.
    Green = 1,
    /// The third palette entry.
    Blue = 2,
}

impl Color {
    /// Every palette entry, in declaration order.
    pub const ALL: [Color; 3] = [Color::Red, Color::Green, Color::Blue];

    /// Returns the human-readable label for this color.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Blue => "Blue",
        }
    }

    /// Returns the numeric code for this color.
    #[must_use]
    pub const fn as_u8(&self) -> u8 {
        *self as u8
    }
}

impl core::fmt::Display for Color {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl TryFrom<u8> for Color {
    type Error = CommonError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Color::Red),
            1 => Ok(Color::Green),
            2 => Ok(Color::Blue),
            _ => Err(CommonError::UnknownColorCode("must be 0, 1, or 2")),
        }
    }
}

impl core::str::FromStr for Color {
    type Err = CommonError;

    /// Parses a color label, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        for color in Color::ALL {
            if s.eq_ignore_ascii_case(color.label()) {
                return Ok(color);
            }
        }
        Err(CommonError::UnknownColorName(
            "must be red, green, or blue",
        ))
    }
}
