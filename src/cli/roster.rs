//! Roster files: JSON arrays of entries fed to the `contacts` tool.

use std::path::Path;

use crate::directory::ContactIndex;
use crate::types::{ContactResult, Entry};

/// Result of reading a roster: the built index plus the rows that were rejected.
#[derive(Debug)]
pub struct RosterLoad {
    /// Index holding every accepted row.
    pub index: ContactIndex,
    /// Rows rejected as degenerate or duplicate, with the reason.
    pub rejected: Vec<(Entry, String)>,
}

/// Parse roster JSON text.
pub fn parse_roster(json: &str) -> ContactResult<RosterLoad> {
    let rows: Vec<Entry> = serde_json::from_str(json)?;
    let mut index = ContactIndex::new();
    let mut rejected = Vec::new();

    for row in rows {
        let rendered = row.clone();
        if let Err(e) = index.add(row) {
            log::warn!("Skipping roster row {:?}: {}", rendered.to_string(), e);
            rejected.push((rendered, e.to_string()));
        }
    }

    Ok(RosterLoad { index, rejected })
}

/// Read and parse a roster file.
pub fn load_roster(path: &Path) -> ContactResult<RosterLoad> {
    let text = std::fs::read_to_string(path)?;
    let load = parse_roster(&text)?;
    log::debug!(
        "Loaded {} entries from {} ({} rejected)",
        load.index.len(),
        path.display(),
        load.rejected.len()
    );
    Ok(load)
}

/// Render entries as text lines or a JSON array.
pub fn render_entries(entries: &[&Entry], json: bool) -> ContactResult<String> {
    if json {
        return Ok(serde_json::to_string_pretty(entries)?);
    }
    Ok(entries
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n"))
}
