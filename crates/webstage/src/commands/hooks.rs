use std::path::Path;

use webstage_core::{Config, TargetSet};
use webstage_fs::ProjectPaths;
use webstage_stage::Stager;

/// Build hook: mirror the data tree into staging when a filesystem target is requested.
///
/// Every branch prints exactly one status line so build logs show which path was taken.
pub fn hook_prepare_fs(targets: &[String], project_dir: Option<&Path>) -> anyhow::Result<()> {
    let targets = TargetSet::parse(&targets.join(","));
    let project = ProjectPaths::resolve(project_dir)?;
    let config = Config::load(&project.config_file());

    let outcome = Stager::new(project, config).run(&targets)?;
    println!("{}", outcome.message());
    Ok(())
}
