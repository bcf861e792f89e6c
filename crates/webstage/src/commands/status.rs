use std::path::Path;

use webstage_compress::Compressor;
use webstage_core::Config;
use webstage_fs::ProjectPaths;
use webstage_stage::Stager;

pub fn run(project_dir: Option<&Path>) -> anyhow::Result<()> {
    let project = ProjectPaths::resolve(project_dir)?;
    let config_present = project.config_file().exists();
    let config = Config::load(&project.config_file());

    println!("{}", build_status(&project, &config, config_present)?);
    Ok(())
}

fn build_status(
    project: &ProjectPaths,
    config: &Config,
    config_present: bool,
) -> anyhow::Result<serde_json::Value> {
    let web_dir = project.join(&config.web_dir);
    let pending = if web_dir.is_dir() {
        Compressor::from_config(config).candidates(&web_dir)?.len()
    } else {
        0
    };

    let paths = Stager::new(project.clone(), config.clone()).paths();

    Ok(serde_json::json!({
        "project": project.root().display().to_string(),
        "config_file": config_present,
        "web_dir": web_dir.display().to_string(),
        "compressible_assets": pending,
        "level": config.compression_level(),
        "data_exists": paths.data.is_dir(),
        "staging_exists": paths.staging.is_dir(),
        "trigger_targets": config.trigger_targets,
    }))
}
