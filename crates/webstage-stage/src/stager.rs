//! Mirror the data tree into the staging directory and strip uncompressed assets

use std::path::PathBuf;

use webstage_core::{Config, TargetSet};
use webstage_fs::{copy_tree, remove_tree, ProjectPaths, Result};

use crate::{prune_uncompressed, SyncOutcome};

/// Absolute locations the stager reads and writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagePaths {
    pub data: PathBuf,
    pub staging: PathBuf,
    pub staging_web: PathBuf,
}

/// Rebuilds the staging directory from scratch on every triggered run
#[derive(Debug, Clone)]
pub struct Stager {
    project: ProjectPaths,
    config: Config,
}

impl Stager {
    pub fn new(project: ProjectPaths, config: Config) -> Self {
        Self { project, config }
    }

    pub fn paths(&self) -> StagePaths {
        let staging = self.project.join(&self.config.staging_dir);
        StagePaths {
            data: self.project.join(&self.config.data_dir),
            staging_web: staging.join(&self.config.web_subdir),
            staging,
        }
    }

    /// Stage only when one of the configured trigger targets was requested
    pub fn run(&self, targets: &TargetSet) -> Result<SyncOutcome> {
        if !targets.should_act(&self.config.trigger_targets) {
            tracing::debug!(targets = ?targets, "no trigger target requested");
            return Ok(SyncOutcome::Skipped {
                triggers: self.config.trigger_targets.clone(),
            });
        }
        self.sync()
    }

    /// Replace the staging tree with a fresh copy of the data tree, then prune it
    pub fn sync(&self) -> Result<SyncOutcome> {
        let paths = self.paths();

        if !paths.data.exists() {
            return Ok(SyncOutcome::MissingData {
                data_dir: self.config.data_dir.clone(),
            });
        }

        if paths.staging.exists() {
            remove_tree(&paths.staging)?;
        }

        let copied = copy_tree(&paths.data, &paths.staging)?;
        tracing::info!(copied, staging = %paths.staging.display(), "staging tree rebuilt");

        if !paths.staging_web.exists() {
            return Ok(SyncOutcome::MissingWeb {
                web_dir: self.config.data_dir.join(&self.config.web_subdir),
            });
        }

        let removed = prune_uncompressed(&paths.staging_web, &self.config.filter())?;
        Ok(SyncOutcome::Staged {
            staging_dir: self.config.staging_dir.clone(),
            removed,
        })
    }
}
