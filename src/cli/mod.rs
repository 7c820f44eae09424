//! Command-line support for the `contacts` tool.

pub mod commands;
pub mod roster;

pub use roster::{load_roster, parse_roster, render_entries, RosterLoad};
