use std::fmt;

/// Size summary for one compressed asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetReport {
    pub name: String,
    pub original_bytes: u64,
    pub compressed_bytes: u64,
}

impl AssetReport {
    /// Original size in whole kilobytes, truncated
    pub fn original_kb(&self) -> u64 {
        self.original_bytes / 1024
    }

    /// Compressed size in whole kilobytes, truncated
    pub fn compressed_kb(&self) -> u64 {
        self.compressed_bytes / 1024
    }

    /// Compressed size as a percentage of the original, unrounded.
    /// `None` for an empty original.
    pub fn raw_ratio(&self) -> Option<f64> {
        if self.original_bytes == 0 {
            return None;
        }
        Some(self.compressed_bytes as f64 / self.original_bytes as f64 * 100.0)
    }

    /// The percentage as printed: one decimal, exact ties rounded to even
    pub fn ratio(&self) -> Option<f64> {
        self.raw_ratio()
            .and_then(|raw| format!("{:.1}", raw).parse().ok())
    }
}

impl fmt::Display for AssetReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}KB -> {}KB ",
            self.name,
            self.original_kb(),
            self.compressed_kb()
        )?;
        match self.raw_ratio() {
            Some(ratio) => write!(f, "({:.1}%)", ratio),
            None => write!(f, "(n/a)"),
        }
    }
}
