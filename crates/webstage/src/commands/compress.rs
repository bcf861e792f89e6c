use anyhow::Context;
use std::path::Path;

use webstage_compress::Compressor;
use webstage_core::Config;
use webstage_fs::ProjectPaths;

pub fn run(dir: Option<&Path>, level: Option<u32>) -> anyhow::Result<()> {
    let project = ProjectPaths::new(std::env::current_dir()?);
    let mut config = Config::load(&project.config_file());
    if let Some(level) = level {
        config.level = level;
    }

    let dir = match dir {
        Some(d) => d.to_path_buf(),
        None => project.join(&config.web_dir),
    };

    let reports = Compressor::from_config(&config)
        .run(&dir, |report| println!("{}", report))
        .with_context(|| format!("failed to compress assets in {}", dir.display()))?;

    let original: u64 = reports.iter().map(|r| r.original_bytes).sum();
    let compressed: u64 = reports.iter().map(|r| r.compressed_bytes).sum();
    tracing::info!(files = reports.len(), original, compressed, "compression finished");
    Ok(())
}
