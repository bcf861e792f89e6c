//! Configuration for asset compression and staging

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::AssetFilter;

/// Project configuration, read from `webstage.json` when present
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory compressed in place, relative to the project root
    pub web_dir: PathBuf,

    /// Canonical asset tree
    pub data_dir: PathBuf,

    /// Disposable mirror of `data_dir` handed to the upload step
    pub staging_dir: PathBuf,

    /// Web asset subtree inside the staging mirror
    pub web_subdir: PathBuf,

    /// File extensions treated as web assets
    pub extensions: Vec<String>,

    /// Gzip level (0-9)
    pub level: u32,

    /// Build targets that trigger the staging hook
    pub trigger_targets: Vec<String>,
}

impl Config {
    pub fn new() -> Self {
        Self {
            web_dir: PathBuf::from("data/web"),
            data_dir: PathBuf::from("data"),
            staging_dir: PathBuf::from("data_gz"),
            web_subdir: PathBuf::from("web"),
            extensions: vec![".js".to_string(), ".css".to_string(), ".html".to_string()],
            level: 9,
            trigger_targets: vec!["uploadfs".to_string(), "buildfs".to_string()],
        }
    }

    /// Load config from a JSON file, falling back to defaults when it is missing or unreadable
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::new();
        }

        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "cannot read config, using defaults");
                return Self::new();
            }
        };

        match serde_json::from_str::<Config>(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "invalid config, using defaults");
                Self::new()
            }
        }
    }

    pub fn filter(&self) -> AssetFilter {
        AssetFilter::new(&self.extensions)
    }

    /// Gzip level clamped to the range flate2 accepts
    pub fn compression_level(&self) -> u32 {
        self.level.min(9)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
