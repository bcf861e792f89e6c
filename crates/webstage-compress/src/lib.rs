//! In-place gzip compression of web assets

mod compressor;
mod types;

pub use compressor::{compress_dir, compress_file, Compressor};
pub use types::AssetReport;
