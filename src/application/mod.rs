//! Application layer: dictionary facade and proverb loading
//!
//! This layer composes the domain structures and owns file input.

pub mod dictionary;
pub mod error;
pub mod error_ext;
pub mod loader;

pub use dictionary::Dictionary;
pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use loader::{load_dictionary, parse_proverbs};
