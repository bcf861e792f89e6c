//! Filesystem primitives shared by the webstage crates

mod error;
mod io;
mod paths;

pub use error::{Error, Result};
pub use io::{atomic_write, copy_tree, remove_tree};
pub use paths::{ProjectPaths, CONFIG_FILE_NAME, PROJECT_DIR_ENV};
