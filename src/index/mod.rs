//! Secondary orderings over stored entries. Each index is independent and incrementally updateable.

pub mod name_index;

pub use name_index::NameIndex;
