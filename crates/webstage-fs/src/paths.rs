//! Project root resolution

use std::path::{Path, PathBuf};

/// Environment variable the build tool substitutes with the project directory
pub const PROJECT_DIR_ENV: &str = "PROJECT_DIR";

/// Optional per-project configuration file
pub const CONFIG_FILE_NAME: &str = "webstage.json";

/// Resolves paths relative to the project being built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    root: PathBuf,
}

impl ProjectPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the project root: explicit path, then `$PROJECT_DIR`, then the current directory
    pub fn resolve(explicit: Option<&Path>) -> std::io::Result<Self> {
        if let Some(root) = explicit {
            return Ok(Self::new(root));
        }

        match std::env::var_os(PROJECT_DIR_ENV) {
            Some(dir) if !dir.is_empty() => Ok(Self::new(PathBuf::from(dir))),
            _ => Ok(Self::new(std::env::current_dir()?)),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of a project-relative location
    pub fn join(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }

    /// Get webstage.json path
    pub fn config_file(&self) -> PathBuf {
        self.root.join(CONFIG_FILE_NAME)
    }
}
