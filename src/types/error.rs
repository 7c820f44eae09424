//! Error types for the contact index library.

use thiserror::Error;

use super::entry::Entry;

/// All errors that can occur in the contact index library.
#[derive(Error, Debug)]
pub enum ContactError {
    /// Entry has neither a first nor a last name.
    #[error("Entry does not have a first or last name")]
    InvalidEntry,

    /// A structurally identical entry is already stored.
    #[error("Entry already exists: {0}")]
    Duplicate(Entry),

    /// Removal target is not stored.
    #[error("Entry does not exist: {0}")]
    NotFound(Entry),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Roster file could not be parsed.
    #[error("Malformed roster: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for contact index operations.
pub type ContactResult<T> = Result<T, ContactError>;
