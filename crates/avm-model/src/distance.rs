//! Distance tokens and the letter buckets derived from them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Marker prefix used by the source catalog for redshift-only distances.
pub const REDSHIFT_MARKER: &str = "-;";

/// Distance qualifier prefixed to a taxonomy number.
///
/// `None` means the record carries no distance and the number is reported
/// without a qualifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Letter {
    #[default]
    None,
    A,
    B,
    C,
    D,
    E,
}

impl Letter {
    /// The bare letter (`"B"`), or `""` for [`Letter::None`].
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
        }
    }

    /// The letter rendered with its trailing separator (`"B."`), or `""`.
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::None => "",
            Self::A => "A.",
            Self::B => "B.",
            Self::C => "C.",
            Self::D => "D.",
            Self::E => "E.",
        }
    }

    pub const fn all() -> &'static [Letter] {
        &[
            Self::None,
            Self::A,
            Self::B,
            Self::C,
            Self::D,
            Self::E,
        ]
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A distance token as supplied by the input batch.
///
/// Parsing is total: every string maps to exactly one variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DistanceValue {
    /// No distance given.
    Empty,
    /// The literal `D`.
    Marker,
    /// A redshift value written with the `-;` marker.
    Redshift(String),
    /// Non-negative integer written as ASCII digits.
    Digits(String),
    /// Anything else.
    Other(String),
}

impl DistanceValue {
    pub fn parse(raw: &str) -> Self {
        if raw == "D" {
            Self::Marker
        } else if raw.starts_with(REDSHIFT_MARKER) {
            Self::Redshift(raw.to_string())
        } else if raw.is_empty() {
            Self::Empty
        } else if raw.bytes().all(|b| b.is_ascii_digit()) {
            Self::Digits(raw.to_string())
        } else {
            Self::Other(raw.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Empty => "",
            Self::Marker => "D",
            Self::Redshift(raw) | Self::Digits(raw) | Self::Other(raw) => raw,
        }
    }

    /// Integer value of a digit token. `None` for other variants and for
    /// digit strings that overflow `u64`.
    pub fn integer(&self) -> Option<u64> {
        match self {
            Self::Digits(raw) => raw.parse().ok(),
            _ => None,
        }
    }
}

impl From<&str> for DistanceValue {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl fmt::Display for DistanceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
