//! Domain layer: entries, the balanced tree and the word index
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entry;
pub mod error;
pub mod render;
pub mod tree;
pub mod word_index;

pub use entry::{AsKey, Entry};
pub use error::DomainError;
pub use render::TreeNodeConvert;
pub use tree::{BalancedTree, Color, InOrderIterator, Node};
pub use word_index::WordIndex;
