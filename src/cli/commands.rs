//! CLI command implementations.

use std::path::Path;

use crate::types::{ContactResult, NameField};

use super::roster::{load_roster, render_entries};

fn print_output(out: &str) {
    if !out.is_empty() {
        println!("{}", out);
    }
}

/// Rendered listing of a roster sorted by first or last name.
pub fn list_output(path: &Path, field: NameField, json: bool) -> ContactResult<String> {
    let load = load_roster(path)?;
    render_entries(&load.index.sorted_by(field), json)
}

/// Rendered prefix search results across first and last names.
pub fn find_output(path: &Path, query: &str, json: bool) -> ContactResult<String> {
    let load = load_roster(path)?;
    let results = load.index.find(query);
    if results.is_empty() && !json {
        return Ok(format!("No entries match {:?}", query));
    }
    render_entries(&results, json)
}

/// Rendered union of two rosters, `left` entries first.
pub fn merge_output(left: &Path, right: &Path, json: bool) -> ContactResult<String> {
    let a = load_roster(left)?;
    let b = load_roster(right)?;
    let merged = a.index.merge(&b.index);
    let entries: Vec<_> = merged.iter().collect();
    render_entries(&entries, json)
}

/// Rendered entries of `left` that are not in `right`.
pub fn diff_output(left: &Path, right: &Path, json: bool) -> ContactResult<String> {
    let a = load_roster(left)?;
    let b = load_roster(right)?;
    let diff = a.index.difference(&b.index);
    let entries: Vec<_> = diff.iter().collect();
    render_entries(&entries, json)
}

/// List a roster sorted by first or last name.
pub fn cmd_list(path: &Path, field: NameField, json: bool) -> ContactResult<()> {
    print_output(&list_output(path, field, json)?);
    Ok(())
}

/// Prefix search across first and last names.
pub fn cmd_find(path: &Path, query: &str, json: bool) -> ContactResult<()> {
    print_output(&find_output(path, query, json)?);
    Ok(())
}

/// Print the union of two rosters.
pub fn cmd_merge(left: &Path, right: &Path, json: bool) -> ContactResult<()> {
    print_output(&merge_output(left, right, json)?);
    Ok(())
}

/// Print the entries of `left` that are not in `right`.
pub fn cmd_diff(left: &Path, right: &Path, json: bool) -> ContactResult<()> {
    print_output(&diff_output(left, right, json)?);
    Ok(())
}

/// Rendered summary statistics about a roster.
pub fn stats_output(path: &Path, json: bool) -> ContactResult<String> {
    let load = load_roster(path)?;
    let index = &load.index;
    let without_phone = index.iter().filter(|e| e.phone_number.is_empty()).count();

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "entries": index.len(),
            "rejected": load.rejected.len(),
            "distinct_first_names": index.first_name_index().bucket_count(),
            "distinct_last_names": index.last_name_index().bucket_count(),
            "without_phone": without_phone,
        });
        return Ok(serde_json::to_string_pretty(&info)?);
    }

    let mut lines = vec![
        format!("File: {}", path.display()),
        format!("Entries: {}", index.len()),
        format!("Rejected rows: {}", load.rejected.len()),
        format!(
            "Distinct first names: {}",
            index.first_name_index().bucket_count()
        ),
        format!(
            "Distinct last names: {}",
            index.last_name_index().bucket_count()
        ),
        format!("Without phone number: {}", without_phone),
    ];
    for (entry, reason) in &load.rejected {
        lines.push(format!("  rejected {:?}: {}", entry.to_string(), reason));
    }
    Ok(lines.join("\n"))
}

/// Summary statistics about a roster.
pub fn cmd_stats(path: &Path, json: bool) -> ContactResult<()> {
    print_output(&stats_output(path, json)?);
    Ok(())
}
