use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "webstage")]
#[command(version)]
#[command(about = "Prepare compressed web assets for a device filesystem image")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Gzip web assets in place, next to their sources
    Compress {
        /// Directory to compress (defaults to the configured web_dir)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Gzip level 0-9 (defaults to the configured level)
        #[arg(short, long)]
        level: Option<u32>,
    },

    /// Hook: rebuild the staging tree when a filesystem target is requested
    #[command(name = "hook:prepare-fs")]
    HookPrepareFs {
        /// Requested build target (repeatable)
        #[arg(short, long = "target", env = "WEBSTAGE_TARGETS", value_delimiter = ',')]
        targets: Vec<String>,

        /// Project root (defaults to $PROJECT_DIR, then the current directory)
        #[arg(long)]
        project_dir: Option<PathBuf>,
    },

    /// Write a default webstage.json in the current directory
    Init,

    /// Show configuration and asset status
    Status {
        /// Project root (defaults to $PROJECT_DIR, then the current directory)
        #[arg(long)]
        project_dir: Option<PathBuf>,
    },

    /// Print version information
    Version,
}
