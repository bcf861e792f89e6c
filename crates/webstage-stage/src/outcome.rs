//! Result of a staging run and its build-log line

use std::path::{Path, PathBuf};

/// Prefix shared by every line the hook prints
pub const LOG_PREFIX: &str = "[prepare_data_gz]";

/// Which branch a staging run took
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// No trigger target requested; filesystem untouched
    Skipped { triggers: Vec<String> },
    /// Source data directory absent; filesystem untouched
    MissingData { data_dir: PathBuf },
    /// Staging tree rebuilt and pruned
    Staged { staging_dir: PathBuf, removed: usize },
    /// Staging tree rebuilt but it has no web subtree to prune
    MissingWeb { web_dir: PathBuf },
}

impl SyncOutcome {
    /// Status line for the build log
    pub fn message(&self) -> String {
        match self {
            Self::Skipped { triggers } => {
                format!("{LOG_PREFIX} omitido (solo actúa en {})", triggers.join("/"))
            }
            Self::MissingData { data_dir } => {
                format!(
                    "{LOG_PREFIX} {}/ no existe, nada que preparar",
                    display_name(data_dir)
                )
            }
            Self::Staged {
                staging_dir,
                removed,
            } => format!(
                "{LOG_PREFIX} {} listo. Eliminados {} assets web sin comprimir",
                display_name(staging_dir),
                removed
            ),
            Self::MissingWeb { web_dir } => format!(
                "{LOG_PREFIX} warning: no se encontró {} en staging",
                display_name(web_dir)
            ),
        }
    }

    /// Whether the run touched the filesystem
    pub fn did_stage(&self) -> bool {
        matches!(self, Self::Staged { .. } | Self::MissingWeb { .. })
    }
}

fn display_name(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
