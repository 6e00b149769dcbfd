//! Per-document term frequencies.

use std::collections::HashMap;

/// Mapping from term to occurrence count for a single document.
///
/// Backed by a `HashMap`; callers that need a stable order must go through
/// [`TermFrequencies::sorted`], which sorts explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermFrequencies {
    counts: HashMap<String, u64>,
}

impl TermFrequencies {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `term`.
    pub fn increment(&mut self, term: &str) {
        match self.counts.get_mut(term) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(term.to_string(), 1);
            }
        }
    }

    /// Record `frequency` for `term`, replacing any earlier value.
    ///
    /// Returns the value that was replaced, if any.
    pub fn insert(&mut self, term: impl Into<String>, frequency: u64) -> Option<u64> {
        self.counts.insert(term.into(), frequency)
    }

    pub fn get(&self, term: &str) -> Option<u64> {
        self.counts.get(term).copied()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.counts.contains_key(term)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(term, count)| (term.as_str(), *count))
    }

    /// Iterate terms in unspecified order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    /// Entries sorted lexicographically by term.
    pub fn sorted(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl FromIterator<(String, u64)> for TermFrequencies {
    /// Later pairs overwrite earlier pairs with the same term.
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_counts_occurrences() {
        let mut freqs = TermFrequencies::new();
        for token in ["a", "b", "a", "c", "b", "a"] {
            freqs.increment(token);
        }

        assert_eq!(freqs.get("a"), Some(3));
        assert_eq!(freqs.get("b"), Some(2));
        assert_eq!(freqs.get("c"), Some(1));
        assert_eq!(freqs.get("d"), None);
        assert_eq!(freqs.len(), 3);
    }

    #[test]
    fn test_insert_last_write_wins() {
        let mut freqs = TermFrequencies::new();
        assert_eq!(freqs.insert("apple", 2), None);
        assert_eq!(freqs.insert("apple", 7), Some(2));
        assert_eq!(freqs.get("apple"), Some(7));
        assert_eq!(freqs.len(), 1);
    }

    #[test]
    fn test_sorted_is_lexicographic() {
        let freqs: TermFrequencies = [("pear", 1), ("Apple", 4), ("apple", 2), ("banana", 3)]
            .into_iter()
            .map(|(t, c)| (t.to_string(), c))
            .collect();

        assert_eq!(
            freqs.sorted(),
            vec![("Apple", 4), ("apple", 2), ("banana", 3), ("pear", 1)]
        );
    }

    #[test]
    fn test_case_and_punctuation_are_distinct() {
        let mut freqs = TermFrequencies::new();
        freqs.increment("Word");
        freqs.increment("word");
        freqs.increment("word,");

        assert_eq!(freqs.len(), 3);
        assert!(freqs.contains("word,"));
    }

    #[test]
    fn test_empty() {
        let freqs = TermFrequencies::new();
        assert!(freqs.is_empty());
        assert!(freqs.sorted().is_empty());
    }
}
