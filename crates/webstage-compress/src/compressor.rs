//! Gzip every web asset in a directory next to its source

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;
use webstage_core::{AssetFilter, Config, GZIP_SUFFIX};
use webstage_fs::{Error, Result};

use crate::AssetReport;

/// Compresses the direct children of a directory
#[derive(Debug, Clone)]
pub struct Compressor {
    filter: AssetFilter,
    level: Compression,
}

impl Compressor {
    pub fn new(filter: AssetFilter, level: u32) -> Self {
        Self {
            filter,
            level: Compression::new(level.min(9)),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.filter(), config.compression_level())
    }

    /// Regular files directly inside `dir` that would be compressed, sorted by name
    pub fn candidates(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
            let entry = entry.map_err(|e| Error::io(dir, e))?;
            let path = entry.path();
            let name = entry.file_name();
            if self.filter.is_compressible(&name.to_string_lossy()) && path.is_file() {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    /// Compress each candidate in order, handing every report to `on_report` as soon as
    /// it is produced. The first failure aborts the run.
    pub fn run<F>(&self, dir: &Path, mut on_report: F) -> Result<Vec<AssetReport>>
    where
        F: FnMut(&AssetReport),
    {
        let mut reports = Vec::new();
        for path in self.candidates(dir)? {
            let report = compress_file(&path, self.level)?;
            on_report(&report);
            reports.push(report);
        }
        tracing::debug!(dir = %dir.display(), count = reports.len(), "compressed assets");
        Ok(reports)
    }
}

/// Compress every eligible asset in `dir` at the given gzip level
pub fn compress_dir(dir: &Path, filter: &AssetFilter, level: u32) -> Result<Vec<AssetReport>> {
    Compressor::new(filter.clone(), level).run(dir, |_| {})
}

/// Write `<path>.gz` next to `path`, replacing any previous one
pub fn compress_file(path: &Path, level: Compression) -> Result<AssetReport> {
    let data = fs::read(path).map_err(|e| Error::io(path, e))?;
    let gz_path = gz_sibling(path);

    let file = File::create(&gz_path).map_err(|e| Error::io(&gz_path, e))?;
    let mut encoder = GzEncoder::new(BufWriter::new(file), level);
    encoder
        .write_all(&data)
        .map_err(|e| Error::io(&gz_path, e))?;
    encoder
        .finish()
        .and_then(|mut writer| writer.flush())
        .map_err(|e| Error::io(&gz_path, e))?;

    let original_bytes = fs::metadata(path).map_err(|e| Error::io(path, e))?.len();
    let compressed_bytes = fs::metadata(&gz_path)
        .map_err(|e| Error::io(&gz_path, e))?
        .len();

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    tracing::debug!(%name, original_bytes, compressed_bytes, "gzipped asset");

    Ok(AssetReport {
        name,
        original_bytes,
        compressed_bytes,
    })
}

fn gz_sibling(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(GZIP_SUFFIX);
    PathBuf::from(name)
}
