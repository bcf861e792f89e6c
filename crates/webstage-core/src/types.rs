//! Asset and build target classification

use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::path::Path;

/// Suffix of compressed siblings
pub const GZIP_SUFFIX: &str = ".gz";

/// Decides which files count as uncompressed web assets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetFilter {
    extensions: Vec<String>,
}

impl AssetFilter {
    /// Build a filter; extensions may be given with or without the leading dot
    pub fn new<S: AsRef<str>>(extensions: &[S]) -> Self {
        let extensions = extensions
            .iter()
            .map(|e| e.as_ref().trim_start_matches('.'))
            .filter(|e| !e.is_empty())
            .map(|e| format!(".{}", e))
            .collect();
        Self { extensions }
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// True when a file name ends in a web extension and is not already gzipped.
    ///
    /// Matching is on the raw name suffix, so a bare `.js` name qualifies.
    pub fn is_compressible(&self, name: &str) -> bool {
        !name.ends_with(GZIP_SUFFIX) && self.extensions.iter().any(|ext| name.ends_with(ext))
    }

    /// True when the path's final extension is a web extension and the name is not gzipped.
    ///
    /// Dotfiles such as `.js` have no extension and never match.
    pub fn is_uncompressed_asset(&self, path: &Path) -> bool {
        let Some(name) = path.file_name() else {
            return false;
        };
        if name.as_encoded_bytes().ends_with(GZIP_SUFFIX.as_bytes()) {
            return false;
        }
        match path.extension() {
            Some(ext) => self
                .extensions
                .iter()
                .any(|known| ext == OsStr::new(&known[1..])),
            None => false,
        }
    }
}

impl Default for AssetFilter {
    fn default() -> Self {
        Self::new(&[".js", ".css", ".html"])
    }
}

/// Lower-cased set of build targets requested for the current invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetSet {
    names: BTreeSet<String>,
}

impl TargetSet {
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = names
            .into_iter()
            .map(|n| n.as_ref().trim().to_lowercase())
            .filter(|n| !n.is_empty())
            .collect();
        Self { names }
    }

    /// Parse a comma or whitespace separated list, e.g. `"buildfs, uploadfs"`
    pub fn parse(list: &str) -> Self {
        Self::from_names(list.split(|c: char| c == ',' || c.is_whitespace()))
    }

    pub fn contains(&self, target: &str) -> bool {
        self.names.contains(&target.to_lowercase())
    }

    /// Whether any of the trigger targets was requested
    pub fn should_act<S: AsRef<str>>(&self, triggers: &[S]) -> bool {
        triggers.iter().any(|t| self.contains(t.as_ref()))
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
