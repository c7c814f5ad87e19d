use std::path::{Path, PathBuf};

use storyseed_core::models::record::{ContentRecord, to_pretty_json};

/// Write records as a pretty-printed JSON array.
///
/// The file is written next to its destination and renamed into place, so
/// an existing dataset is never left half-written.
pub fn write_records(path: &Path, records: &[ContentRecord]) -> eyre::Result<()> {
    let json = to_pretty_json(records)?;

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .map_err(|e| eyre::eyre!("failed to create {}: {e}", dir.display()))?;
    }

    let tmp_path = tmp_path(path);
    std::fs::write(&tmp_path, json.as_bytes())
        .map_err(|e| eyre::eyre!("failed to write {}: {e}", tmp_path.display()))?;
    if let Err(e) = std::fs::rename(&tmp_path, path) {
        if let Err(cleanup) = std::fs::remove_file(&tmp_path) {
            tracing::warn!(path = %tmp_path.display(), "failed to remove temp file: {cleanup}");
        }
        return Err(eyre::eyre!(
            "failed to move output into {}: {e}",
            path.display()
        ));
    }

    tracing::info!(path = %path.display(), records = records.len(), "dataset written");
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
