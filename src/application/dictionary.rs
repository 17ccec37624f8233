//! Dictionary facade: the balanced tree and the word index kept in step.

use std::rc::Rc;

use tracing::{debug, instrument};

use crate::domain::{AsKey, BalancedTree, DomainError, Entry, InOrderIterator, WordIndex};

/// Bilingual proverb dictionary.
///
/// Exact phrase queries go to the tree, word queries go to the index. Both
/// hold the same `Rc<Entry>` for every stored proverb.
#[derive(Debug, Default)]
pub struct Dictionary {
    tree: BalancedTree,
    words: WordIndex,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `entry`; returns `false` if its phrase is already present.
    ///
    /// A duplicate is dropped without touching the word index.
    #[instrument(level = "debug", skip_all, fields(key = %entry.key()))]
    pub fn insert(&mut self, entry: Entry) -> bool {
        let entry = Rc::new(entry);
        if !self.tree.insert(Rc::clone(&entry)) {
            debug!("phrase already stored, entry discarded");
            return false;
        }
        self.words.add_entry(entry);
        true
    }

    pub fn member<Q: AsKey + ?Sized>(&self, key: &Q) -> bool {
        self.tree.member(key)
    }

    pub fn search<Q: AsKey + ?Sized>(&self, key: &Q) -> Option<&Rc<Entry>> {
        self.tree.search(key)
    }

    pub fn first(&self) -> Result<&Rc<Entry>, DomainError> {
        self.tree.first()
    }

    pub fn last(&self) -> Result<&Rc<Entry>, DomainError> {
        self.tree.last()
    }

    pub fn predecessor<Q: AsKey + ?Sized>(&self, key: &Q) -> Option<&Rc<Entry>> {
        self.tree.predecessor(key)
    }

    pub fn successor<Q: AsKey + ?Sized>(&self, key: &Q) -> Option<&Rc<Entry>> {
        self.tree.successor(key)
    }

    /// Entries whose phrase or translation contains `word` as a whole token.
    pub fn lookup_word(&self, word: &str) -> &[Rc<Entry>] {
        self.words.lookup(word)
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Entries in phrase order.
    pub fn iter(&self) -> InOrderIterator<'_> {
        self.tree.iter()
    }

    pub fn tree(&self) -> &BalancedTree {
        &self.tree
    }

    pub fn words(&self) -> &WordIndex {
        &self.words
    }
}

impl Extend<Entry> for Dictionary {
    fn extend<I: IntoIterator<Item = Entry>>(&mut self, iter: I) {
        for entry in iter {
            self.insert(entry);
        }
    }
}

impl FromIterator<Entry> for Dictionary {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        let mut dictionary = Self::new();
        dictionary.extend(iter);
        dictionary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_inserted_entry_then_tree_and_index_share_it() {
        let mut dictionary = Dictionary::new();
        dictionary.insert(Entry::new("Pupukahi i holomua", "Unite in order to progress"));

        let by_key = dictionary.search("Pupukahi i holomua").unwrap();
        let by_word = &dictionary.lookup_word("holomua")[0];
        assert!(Rc::ptr_eq(by_key, by_word));
    }

    #[test]
    fn given_duplicate_phrase_then_index_not_touched() {
        let mut dictionary = Dictionary::new();
        assert!(dictionary.insert(Entry::new("Ola i ka wai", "Water is life")));
        assert!(!dictionary.insert(Entry::new("Ola i ka wai", "Life from water")));

        assert_eq!(dictionary.len(), 1);
        assert!(dictionary.lookup_word("from").is_empty());
        assert_eq!(dictionary.lookup_word("wai").len(), 1);
    }
}
