//! # noeau
//!
//! In-memory bilingual dictionary of Hawaiian proverbs (ʻŌlelo Noʻeau).
//!
//! Entries are kept in a left-leaning red-black tree ordered by the Hawaiian
//! phrase, which gives logarithmic exact lookup, first/last and
//! predecessor/successor queries. A word index answers "which proverbs
//! contain this word" for both languages.
//!
//! ```
//! use noeau::application::Dictionary;
//! use noeau::domain::Entry;
//!
//! let mut dictionary = Dictionary::new();
//! dictionary.insert(Entry::new("Aloha kekahi i kekahi", "Love one another"));
//! dictionary.insert(Entry::new("I ka ʻōlelo no ke ola", "In language there is life"));
//!
//! assert_eq!(dictionary.first().unwrap().key(), "Aloha kekahi i kekahi");
//! assert_eq!(
//!     dictionary.successor("Aloha kekahi i kekahi").unwrap().translation(),
//!     "In language there is life"
//! );
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use application::Dictionary;
pub use domain::{BalancedTree, Entry};
