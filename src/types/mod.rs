//! All data types for the contact index library.

pub mod entry;
pub mod error;

pub use entry::{fold_case, Entry, NameField};
pub use error::{ContactError, ContactResult};

/// Stable identifier assigned to an entry when it is stored.
///
/// Strictly increasing within one index and never reused, so ascending id order is
/// insertion order.
pub type EntryId = u64;
