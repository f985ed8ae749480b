use crate::models::MappedItem;
use log::{error, info};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Loads a persisted `MappedItem` list from `path`.
///
/// A missing file is created empty and reported as an empty list; any other
/// I/O or parse failure is logged and likewise reported as empty. Storage
/// problems never propagate to the caller.
pub fn load_mapped_items(path: &Path) -> Vec<MappedItem> {
    match fs::read_to_string(path) {
        Ok(raw) => {
            let raw = if raw.is_empty() { "[]" } else { &raw };

            match serde_json::from_str(raw) {
                Ok(items) => items,
                Err(e) => {
                    error!("Could not parse map file {:?}: {}", path, e);
                    Vec::new()
                }
            }
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("Map file {:?} does not exist; creating it", path);
            save_mapped_items(path, &[]);
            Vec::new()
        }
        Err(e) => {
            error!("Could not read map file {:?}: {}", path, e);
            Vec::new()
        }
    }
}

/// Persists the full `MappedItem` list to `path`, creating parent
/// directories as needed. The whole list is rewritten every time
/// (read-modify-write, not append). Failures are logged and swallowed.
///
/// Concurrent processes sharing one map file are not coordinated; callers
/// that need that must serialize access externally.
pub fn save_mapped_items(path: &Path, items: &[MappedItem]) {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            if let Err(e) = fs::create_dir_all(parent) {
                error!("Could not create map file directory {:?}: {}", parent, e);
                return;
            }
        }
    }

    let json = match serde_json::to_string(items) {
        Ok(json) => json,
        Err(e) => {
            error!("Could not serialize {} map record(s): {}", items.len(), e);
            return;
        }
    };

    if let Err(e) = fs::write(path, json) {
        error!("Could not write map file {:?}: {}", path, e);
    }
}
