//! Configuration and asset classification for webstage

mod config;
mod types;

pub use config::Config;
pub use types::{AssetFilter, TargetSet, GZIP_SUFFIX};
