//! Dictionary entries: a Hawaiian phrase paired with its English translation

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// A single proverb.
///
/// Immutable once built. Equality, hashing and ordering look at the Hawaiian
/// phrase (`key`) only; the translation and explanations ride along.
#[derive(Debug, Clone)]
pub struct Entry {
    key: String,
    translation: String,
    key_explanation: String,
    translation_explanation: String,
}

impl Entry {
    pub fn new(key: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            translation: translation.into(),
            key_explanation: String::new(),
            translation_explanation: String::new(),
        }
    }

    /// Attach explanations while the entry is still being constructed.
    pub fn with_explanations(
        mut self,
        key_explanation: impl Into<String>,
        translation_explanation: impl Into<String>,
    ) -> Self {
        self.key_explanation = key_explanation.into();
        self.translation_explanation = translation_explanation.into();
        self
    }

    /// The Hawaiian phrase, sole ordering key.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn translation(&self) -> &str {
        &self.translation
    }

    pub fn key_explanation(&self) -> &str {
        &self.key_explanation
    }

    pub fn translation_explanation(&self) -> &str {
        &self.translation_explanation
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Entry {}

impl Hash for Entry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.translation)
    }
}

/// Anything that can stand in for an entry key in a tree query.
///
/// Lets neighbor queries take a raw phrase or a whole entry and extract the
/// key the same way in both cases.
pub trait AsKey {
    fn as_key(&self) -> &str;
}

impl AsKey for str {
    fn as_key(&self) -> &str {
        self
    }
}

impl AsKey for String {
    fn as_key(&self) -> &str {
        self.as_str()
    }
}

impl AsKey for Entry {
    fn as_key(&self) -> &str {
        self.key()
    }
}

impl AsKey for Rc<Entry> {
    fn as_key(&self) -> &str {
        self.key()
    }
}

impl<T: AsKey + ?Sized> AsKey for &T {
    fn as_key(&self) -> &str {
        (**self).as_key()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_entries_with_same_key_when_compared_then_equal() {
        let a = Entry::new("Aloha kekahi i kekahi", "Love one another");
        let b = Entry::new("Aloha kekahi i kekahi", "something else")
            .with_explanations("x", "y");
        assert_eq!(a, b);
        assert_eq!(a.cmp(&b), Ordering::Equal);
    }

    #[test]
    fn given_okina_in_key_when_ordering_then_uses_code_points() {
        // U+02BB sorts after every ASCII letter
        let plain = Entry::new("I ka olelo", "");
        let okina = Entry::new("I ka ʻōlelo", "");
        assert!(plain < okina);
    }

    #[test]
    fn given_entry_and_raw_key_when_as_key_then_same_key() {
        let entry = Rc::new(Entry::new("Pupukahi", "Unite"));
        assert_eq!(entry.as_key(), "Pupukahi".as_key());
        assert_eq!((&entry).as_key(), String::from("Pupukahi").as_key());
        assert_eq!(entry.to_string(), "Pupukahi: Unite");
    }
}
