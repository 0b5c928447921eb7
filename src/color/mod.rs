use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};
use thiserror::Error;

pub use generate::{perturb, random_color};
pub use options::build_options;

mod generate;
mod options;

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Failure modes when parsing a `#rrggbb` string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("color must start with '#'")]
    MissingHash,
    #[error("color must have 6 hex digits, found {0}")]
    BadLength(usize),
    #[error("invalid hex digit in {0:?}")]
    BadDigit(String),
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// The canonical `#rrggbb` form, lowercase.
    pub fn to_hex_string(&self) -> String {
        self.to_string()
    }

    pub fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub fn from_channels([r, g, b]: [u8; 3]) -> Self {
        Color { r, g, b }
    }

    /// Squared euclidean distance in RGB space.
    pub fn distance(&self, other: &Color) -> u32 {
        self.channels()
            .iter()
            .zip(other.channels().iter())
            .map(|(a, b)| {
                let d = *a as i32 - *b as i32;
                (d * d) as u32
            })
            .sum()
    }

    /// Largest per-channel difference.
    pub fn max_channel_delta(&self, other: &Color) -> u8 {
        self.channels()
            .iter()
            .zip(other.channels().iter())
            .map(|(a, b)| a.abs_diff(*b))
            .max()
            .unwrap_or_default()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').ok_or(ColorParseError::MissingHash)?;
        if digits.len() != 6 {
            return Err(ColorParseError::BadLength(digits.chars().count()));
        }
        // from_str_radix alone would let a leading '+' through
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::BadDigit(s.to_owned()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| ColorParseError::BadDigit(s.to_owned()))
        };
        Ok(Color {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
