//! ContactIndex: in-memory contact directory.
//!
//! Stores contact entries (first name, last name, phone number) and keeps them
//! simultaneously ordered by first and last name, with case-insensitive prefix search
//! and set-style merge/difference between directories.

pub mod cli;
pub mod directory;
pub mod index;
pub mod types;

// Re-export commonly used types at the crate root
pub use directory::ContactIndex;
pub use index::NameIndex;
pub use types::{ContactError, ContactResult, Entry, EntryId, NameField};
