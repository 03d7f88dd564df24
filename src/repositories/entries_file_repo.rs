use std::path::Path;
use crate::error::PersistError;
use crate::models::entry_detail::EntryDetail;

/// Writes `entries` as an indented JSON array, replacing any existing file.
pub fn write_entries(
    path: &Path,
    entries: &[EntryDetail],
) -> Result<(), PersistError> {
    let json = serde_json::to_string_pretty(entries)?;
    std::fs::write(path, json).map_err(|e| PersistError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}
