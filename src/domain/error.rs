//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the dictionary's own rules.
///
/// Absence (a key not found, no neighbor) is never an error; it is `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("dictionary is empty")]
    EmptyTree,

    #[error("tree invariant violated: {message}")]
    InvariantViolation { message: String },
}
