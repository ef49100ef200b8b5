//! Category resolution.
//!
//! Each label of a record resolves independently to one number entry and
//! one word entry:
//!
//! - ordinary labels go through the number table, get the distance letter
//!   prefixed, and take their word from the word table (unprefixed key);
//! - `Galaxy > Interacting` expands to the fixed interacting/multiple pair;
//! - a sentinel (`Miscellaneous`, `unknown`) anywhere in the list blanks the
//!   whole record. The other labels are still looked up, so a bad label is
//!   reported even when the record would have been blanked.

use tracing::{debug, trace};

use avm_model::{
    DistanceValue, ENTRY_SEPARATOR, InputRecord, PreparedLabel, ReferenceTables, ResolvedRecord,
    Sentinel, TaxonomyNumber, TaxonomyWord,
};

use crate::classify::{classify, classify_distance};
use crate::error::{MissingEntry, ResolveError};
use crate::prepare::prepare_labels;

/// Unprefixed numbers of the interacting galaxy expansion.
pub const INTERACTING_NUMBERS: [&str; 2] = ["5.1.7", "5.5.2"];

/// Words of the interacting galaxy expansion, as one entry.
pub const INTERACTING_WORDS: &str = "Galaxy.Interacting, Galaxy.Multiple";

/// Accumulated entries for one record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    numbers: Vec<TaxonomyNumber>,
    words: Vec<TaxonomyWord>,
    sentinel: Option<Sentinel>,
}

impl Resolution {
    fn push(&mut self, number: TaxonomyNumber, word: TaxonomyWord) {
        self.numbers.push(number);
        self.words.push(word);
    }

    /// The sentinel that blanked this record, if any.
    pub fn sentinel(&self) -> Option<Sentinel> {
        self.sentinel
    }

    /// Number of entries in the combined strings.
    pub fn len(&self) -> usize {
        if self.sentinel.is_some() {
            0
        } else {
            self.numbers.len()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `"; "`-joined numbers; empty when blanked.
    pub fn number(&self) -> String {
        if self.sentinel.is_some() {
            return String::new();
        }
        join(self.numbers.iter().map(TaxonomyNumber::as_str))
    }

    /// `"; "`-joined words; empty when blanked.
    pub fn word(&self) -> String {
        if self.sentinel.is_some() {
            return String::new();
        }
        join(self.words.iter().map(TaxonomyWord::as_str))
    }
}

fn join<'a>(entries: impl Iterator<Item = &'a str>) -> String {
    entries.collect::<Vec<_>>().join(ENTRY_SEPARATOR)
}

/// Resolves labels against a borrowed pair of reference tables.
#[derive(Debug, Clone, Copy)]
pub struct CategoryResolver<'a> {
    tables: &'a ReferenceTables,
}

impl<'a> CategoryResolver<'a> {
    pub fn new(tables: &'a ReferenceTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &'a ReferenceTables {
        self.tables
    }

    /// Resolve the labels of one record.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::UnresolvableCategory`] for the first label
    /// missing from either table. No partial result is returned.
    pub fn resolve(
        &self,
        distance: &DistanceValue,
        labels: &[PreparedLabel],
    ) -> Result<Resolution, ResolveError> {
        let mut resolution = Resolution::default();
        for label in labels {
            match label {
                PreparedLabel::Sentinel(sentinel) => {
                    trace!(label = sentinel.as_str(), "sentinel label blanks record");
                    resolution.sentinel = Some(*sentinel);
                }
                PreparedLabel::Interacting => {
                    let prefix = classify(label.as_str(), distance).prefix();
                    let number = INTERACTING_NUMBERS
                        .iter()
                        .map(|number| format!("{prefix}{number}"))
                        .collect::<Vec<_>>()
                        .join(", ");
                    resolution.push(
                        TaxonomyNumber::new(number),
                        TaxonomyWord::new(INTERACTING_WORDS),
                    );
                }
                PreparedLabel::Lookup(category) => {
                    let unresolvable = |missing| ResolveError::UnresolvableCategory {
                        label: category.clone(),
                        missing,
                    };
                    let base = self
                        .tables
                        .numbers
                        .get(category.as_str())
                        .ok_or_else(|| unresolvable(MissingEntry::Number))?;
                    let number = base.with_prefix(classify(category.as_str(), distance).prefix());
                    let word = self
                        .tables
                        .words
                        .get(number.strip_letter())
                        .ok_or_else(|| {
                            unresolvable(MissingEntry::Word {
                                number: number.strip_letter().to_string(),
                            })
                        })?;
                    trace!(label = %category, number = %number, word = %word, "label resolved");
                    resolution.push(number, word.clone());
                }
            }
        }
        Ok(resolution)
    }

    /// Prepare and resolve one input record.
    pub fn resolve_record(&self, record: &InputRecord) -> Result<ResolvedRecord, ResolveError> {
        let distance = DistanceValue::parse(&record.distance);
        let labels = prepare_labels(&record.category_text);
        let resolution = self.resolve(&distance, &labels)?;
        debug!(
            release_id = %record.release_id,
            entries = resolution.len(),
            blanked = resolution.sentinel().is_some(),
            "record resolved"
        );
        Ok(ResolvedRecord {
            release_id: record.release_id.clone(),
            object_name: record.object_name.clone(),
            distance: record.distance.clone(),
            letter: classify_distance(&distance),
            number: resolution.number(),
            word: resolution.word(),
            category_text: record.category_text.clone(),
        })
    }
}
