use std::fs;
use std::path::Path;

use walkdir::WalkDir;
use webstage_core::AssetFilter;
use webstage_fs::{Error, Result};

/// Delete every uncompressed web asset beneath `web_dir`, returning how many were removed
pub fn prune_uncompressed(web_dir: &Path, filter: &AssetFilter) -> Result<usize> {
    let mut removed = 0;
    for entry in WalkDir::new(web_dir) {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && filter.is_uncompressed_asset(path) {
            fs::remove_file(path).map_err(|e| Error::io(path, e))?;
            tracing::debug!(path = %path.display(), "removed uncompressed asset");
            removed += 1;
        }
    }
    Ok(removed)
}
