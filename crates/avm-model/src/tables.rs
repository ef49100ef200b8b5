//! Reference tables used for category resolution.
//!
//! Both tables are built once per run and never mutated afterwards; the
//! resolver borrows them for the duration of the batch.

use std::collections::BTreeMap;

use crate::taxonomy::{CategoryLabel, TaxonomyNumber, TaxonomyWord};

/// Informal category label -> unprefixed taxonomy number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberTable {
    entries: BTreeMap<CategoryLabel, TaxonomyNumber>,
}

impl NumberTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a mapping. A repeated label replaces the earlier number.
    pub fn insert(&mut self, label: CategoryLabel, number: TaxonomyNumber) {
        self.entries.insert(label, number);
    }

    pub fn get(&self, label: &str) -> Option<&TaxonomyNumber> {
        self.entries.get(label)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.entries.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CategoryLabel, &TaxonomyNumber)> {
        self.entries.iter()
    }
}

impl FromIterator<(CategoryLabel, TaxonomyNumber)> for NumberTable {
    fn from_iter<I: IntoIterator<Item = (CategoryLabel, TaxonomyNumber)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Unprefixed taxonomy number -> taxonomy word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordTable {
    entries: BTreeMap<TaxonomyNumber, TaxonomyWord>,
}

impl WordTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, number: TaxonomyNumber, word: TaxonomyWord) {
        self.entries.insert(number, word);
    }

    /// Look up a word by unprefixed number.
    pub fn get(&self, number: &str) -> Option<&TaxonomyWord> {
        self.entries.get(number)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TaxonomyNumber, &TaxonomyWord)> {
        self.entries.iter()
    }
}

impl FromIterator<(TaxonomyNumber, TaxonomyWord)> for WordTable {
    fn from_iter<I: IntoIterator<Item = (TaxonomyNumber, TaxonomyWord)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// The pair of tables a run resolves against.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTables {
    pub numbers: NumberTable,
    pub words: WordTable,
}

impl ReferenceTables {
    pub fn new(numbers: NumberTable, words: WordTable) -> Self {
        Self { numbers, words }
    }

    /// Numbers referenced by the number table that have no word.
    ///
    /// A non-empty result means some labels will fail resolution.
    pub fn numbers_without_words(&self) -> Vec<&TaxonomyNumber> {
        let mut missing: Vec<&TaxonomyNumber> = self
            .numbers
            .iter()
            .map(|(_, number)| number)
            .filter(|number| self.words.get(number.strip_letter()).is_none())
            .collect();
        missing.sort();
        missing.dedup();
        missing
    }
}
