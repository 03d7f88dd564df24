use std::path::Path;
use tracing::{info, warn};
use crate::models::entry_detail::EntryDetail;
use crate::repositories::entries_file_repo::write_entries;

/// Writes the entries file. A failed write is logged and otherwise ignored;
/// the return value only reports whether the file landed.
pub fn save_entries(
    path: &Path,
    entries: &[EntryDetail],
) -> bool {
    match write_entries(path, entries) {
        Ok(_) => {
            info!("Data has been saved to {}", path.display());
            true
        }
        Err(e) => {
            warn!("Something went wrong writing the entries file due to: {}", e);
            false
        }
    }
}
