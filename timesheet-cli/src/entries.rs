use std::path::Path;

use anyhow::{Context, Result};
use timesheet::{domain::TimeEntry, EntryIndex};

/// Read a JSON array of time entries, as returned by the entries endpoint.
pub fn read_entries(path: &Path) -> Result<Vec<TimeEntry>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read entries from {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse entries in {}", path.display()))
}

/// Index the entries file, or an empty index when no file is configured.
pub fn load_index(path: Option<&Path>) -> Result<EntryIndex> {
    let Some(path) = path else {
        tracing::info!("no entries file given, showing an empty period");
        return Ok(EntryIndex::new());
    };

    let entries = read_entries(path)?;
    tracing::debug!(count = entries.len(), path = %path.display(), "loaded entries");
    Ok(EntryIndex::group_by_date(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use timesheet::domain::DateKey;

    #[test]
    fn loads_and_groups_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entries.json");
        std::fs::write(
            &path,
            r#"[
                { "id": "1", "date": "2025-06-09", "hours": 8, "minutes": 0, "submitted": false },
                { "id": "2", "date": "2025-06-09", "hours": 0, "minutes": 30, "submitted": true }
            ]"#,
        )
        .unwrap();

        let index = load_index(Some(&path)).unwrap();
        let key: DateKey = "2025-06-09".parse().unwrap();
        assert_eq!(index.entries_for_key(&key).len(), 2);
    }

    #[test]
    fn rejects_malformed_date() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entries.json");
        std::fs::write(
            &path,
            r#"[{ "id": "1", "date": "2025-6-9", "hours": 8, "minutes": 0 }]"#,
        )
        .unwrap();

        assert!(read_entries(&path).is_err());
    }

    #[test]
    fn missing_path_is_empty_index() {
        assert!(load_index(None).unwrap().is_empty());
    }
}
