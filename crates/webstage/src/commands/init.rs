use webstage_core::Config;
use webstage_fs::ProjectPaths;

pub fn run() -> anyhow::Result<()> {
    let project = ProjectPaths::new(std::env::current_dir()?);
    let config_path = project.config_file();

    if config_path.exists() {
        println!("{} already exists, leaving it untouched", config_path.display());
        return Ok(());
    }

    let json = serde_json::to_string_pretty(&Config::new())?;
    webstage_fs::atomic_write(&config_path, json.as_bytes())?;

    println!("✓ Wrote {}", config_path.display());
    Ok(())
}
