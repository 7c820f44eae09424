//! In-memory directory operations: the core data structure.

pub mod combine;
pub mod contact_index;

pub use contact_index::ContactIndex;
