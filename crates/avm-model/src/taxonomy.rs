//! Taxonomy value types.
//!
//! A [`CategoryLabel`] is the informal subject label used by the source
//! catalog (for example `Galaxy > Spiral`). It resolves to an AVM subject
//! category number ([`TaxonomyNumber`], `5.1.1`) and word
//! ([`TaxonomyWord`], `Galaxy.Spiral`).
//!
//! Labels are compared verbatim: case, punctuation and surrounding
//! whitespace are all significant.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Separator placed between the per-label entries of a combined number or
/// word string.
pub const ENTRY_SEPARATOR: &str = "; ";

/// Informal (pre-taxonomy) subject category label.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryLabel(String);

impl CategoryLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for CategoryLabel {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CategoryLabel {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Dotted AVM subject category number, optionally prefixed with a distance
/// letter (`B.5.1.1`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxonomyNumber(String);

impl TaxonomyNumber {
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the leading distance letter, if the number carries one.
    pub fn letter(&self) -> Option<char> {
        let mut chars = self.0.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), Some('.')) if letter.is_ascii_uppercase() => Some(letter),
            _ => None,
        }
    }

    /// The number without its distance letter prefix.
    ///
    /// Word tables are keyed by the unprefixed form.
    pub fn strip_letter(&self) -> &str {
        if self.letter().is_some() {
            &self.0[2..]
        } else {
            &self.0
        }
    }

    /// Prefix the number with a rendered distance letter (`"B."` or `""`).
    pub fn with_prefix(&self, prefix: &str) -> Self {
        Self(format!("{prefix}{}", self.strip_letter()))
    }
}

impl fmt::Display for TaxonomyNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for TaxonomyNumber {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TaxonomyNumber {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Dotted AVM subject category word (`Galaxy.Spiral`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxonomyWord(String);

impl TaxonomyWord {
    pub fn new(word: impl Into<String>) -> Self {
        Self(word.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaxonomyWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaxonomyWord {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_letter_removes_prefix() {
        assert_eq!(TaxonomyNumber::from("B.5.1.1").strip_letter(), "5.1.1");
        assert_eq!(TaxonomyNumber::from("5.1.1").strip_letter(), "5.1.1");
        assert_eq!(TaxonomyNumber::from("").strip_letter(), "");
    }

    #[test]
    fn letter_requires_separator() {
        assert_eq!(TaxonomyNumber::from("C.3.1.8").letter(), Some('C'));
        assert_eq!(TaxonomyNumber::from("3.1.8").letter(), None);
        assert_eq!(TaxonomyNumber::from("C3").letter(), None);
    }

    #[test]
    fn with_prefix_replaces_existing_letter() {
        let number = TaxonomyNumber::from("A.5.1.1");
        assert_eq!(number.with_prefix("D.").as_str(), "D.5.1.1");
        assert_eq!(number.with_prefix("").as_str(), "5.1.1");
    }
}
