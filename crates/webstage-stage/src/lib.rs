//! Build hook that prepares a staging copy of the data tree for upload

mod outcome;
mod prune;
mod stager;

pub use outcome::{SyncOutcome, LOG_PREFIX};
pub use prune::prune_uncompressed;
pub use stager::{StagePaths, Stager};
