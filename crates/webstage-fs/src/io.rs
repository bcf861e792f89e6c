//! Recursive tree copy, removal and atomic writes

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::{Error, Result};

/// Recursively copy `src` into `dst`, returning the number of files copied.
///
/// Symlinks are followed and their targets copied as regular content. File
/// permissions and modification times are carried over, as are directory
/// permissions (applied once the directory is filled).
pub fn copy_tree(src: &Path, dst: &Path) -> Result<usize> {
    let mut copied = 0;
    let mut dirs: Vec<(PathBuf, PathBuf)> = Vec::new();

    for entry in WalkDir::new(src).follow_links(true) {
        let entry = entry?;
        let Ok(relative) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| Error::io(&target, e))?;
            dirs.push((entry.path().to_path_buf(), target));
        } else {
            copy_file(entry.path(), &target)?;
            copied += 1;
        }
    }

    // Deepest first so a read-only parent never blocks its children
    for (source, target) in dirs.into_iter().rev() {
        let permissions = fs::metadata(&source)
            .map_err(|e| Error::io(&source, e))?
            .permissions();
        fs::set_permissions(&target, permissions).map_err(|e| Error::io(&target, e))?;
    }

    tracing::debug!(src = %src.display(), dst = %dst.display(), copied, "copied tree");
    Ok(copied)
}

/// Delete a directory and everything beneath it
pub fn remove_tree(path: &Path) -> Result<()> {
    fs::remove_dir_all(path).map_err(|e| Error::io(path, e))?;
    tracing::debug!(path = %path.display(), "removed tree");
    Ok(())
}

/// Write data atomically using temp file + rename
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, data).map_err(|e| Error::io(&temp_path, e))?;
    fs::rename(&temp_path, path).map_err(|e| Error::io(path, e))?;
    Ok(())
}

fn copy_file(source: &Path, target: &Path) -> Result<()> {
    let metadata = fs::metadata(source).map_err(|e| Error::io(source, e))?;

    let mut reader = File::open(source).map_err(|e| Error::io(source, e))?;
    let mut writer = File::create(target).map_err(|e| Error::io(target, e))?;
    std::io::copy(&mut reader, &mut writer).map_err(|e| Error::io(target, e))?;

    let modified = metadata.modified().map_err(|e| Error::io(source, e))?;
    writer
        .set_modified(modified)
        .map_err(|e| Error::io(target, e))?;
    drop(writer);

    fs::set_permissions(target, metadata.permissions()).map_err(|e| Error::io(target, e))?;
    Ok(())
}
