//! Word index: exact-token lookup of entries by Hawaiian or English word.

use std::collections::HashMap;
use std::rc::Rc;

use itertools::Itertools;
use tracing::instrument;

use crate::domain::entry::Entry;

/// Unordered multi-map from whitespace token to the entries containing it.
///
/// Entries are held by shared handle, so the index and the tree point at the
/// same `Entry` values. Tokens are matched verbatim: no case folding, no
/// punctuation stripping.
#[derive(Debug, Default)]
pub struct WordIndex {
    words: HashMap<String, Vec<Rc<Entry>>>,
}

impl WordIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index every token of the phrase and the translation.
    ///
    /// Meant to be called once per entry; a token repeated inside one entry
    /// still maps to that entry only once.
    #[instrument(level = "trace", skip_all, fields(key = %entry.key()))]
    pub fn add_entry(&mut self, entry: Rc<Entry>) {
        let tokens = entry
            .key()
            .split_whitespace()
            .chain(entry.translation().split_whitespace())
            .unique();
        for token in tokens {
            self.words
                .entry(token.to_string())
                .or_default()
                .push(Rc::clone(&entry));
        }
    }

    /// Entries containing `word`, in the order they were indexed.
    pub fn lookup(&self, word: &str) -> &[Rc<Entry>] {
        self.words.get(word).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_repeated_token_when_indexed_then_entry_listed_once() {
        let mut index = WordIndex::new();
        let entry = Rc::new(Entry::new("Aloha kekahi i kekahi", "Love one another"));
        index.add_entry(Rc::clone(&entry));

        let hits = index.lookup("kekahi");
        assert_eq!(hits.len(), 1);
        assert!(Rc::ptr_eq(&hits[0], &entry));
        // Aloha kekahi i | Love one another
        assert_eq!(index.len(), 6);
    }

    #[test]
    fn given_unknown_word_when_lookup_then_empty() {
        let index = WordIndex::new();
        assert!(index.lookup("aloha").is_empty());
        assert!(!index.contains("aloha"));
        assert!(index.is_empty());
    }
}
