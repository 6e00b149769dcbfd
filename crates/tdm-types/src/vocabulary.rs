//! Corpus vocabulary: the sorted union of terms across documents.

use std::collections::{HashMap, HashSet};

/// Sorted, deduplicated list of terms.
///
/// Row `i` of a term-document matrix corresponds to `terms()[i]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    terms: Vec<String>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Build a vocabulary from any collection of terms.
    ///
    /// Duplicates are removed and the result is sorted lexicographically.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let unique: HashSet<String> = terms
            .into_iter()
            .map(|term| term.as_ref().to_string())
            .collect();
        Self::from_set(unique)
    }

    /// Build a vocabulary from an already deduplicated set.
    pub fn from_set(terms: HashSet<String>) -> Self {
        let mut terms: Vec<String> = terms.into_iter().collect();
        terms.sort_unstable();

        let index = terms
            .iter()
            .enumerate()
            .map(|(i, term)| (term.clone(), i))
            .collect();

        Self { terms, index }
    }

    /// Row index of `term`, if present.
    pub fn position(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.terms.iter()
    }
}

impl<'a> IntoIterator for &'a Vocabulary {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}
