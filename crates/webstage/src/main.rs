mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only the status lines build logs rely on
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compress { dir, level } => commands::compress::run(dir.as_deref(), level),
        Commands::HookPrepareFs {
            targets,
            project_dir,
        } => commands::hooks::hook_prepare_fs(&targets, project_dir.as_deref()),
        Commands::Init => commands::init::run(),
        Commands::Status { project_dir } => commands::status::run(project_dir.as_deref()),
        Commands::Version => commands::version::run(),
    }
}
