use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};

/// Statistics from a bundling run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BundleStats {
    pub files_written: usize,
    pub bytes_written: usize,
    pub files_skipped: usize,
    pub entries_ignored: usize,
    pub bundle_duration_ms: u64,
}

/// Recoverable problem encountered while walking; the entry was skipped
#[derive(Debug, Clone)]
pub struct Warning {
    pub path: PathBuf,
    pub message: String,
}

/// Result of a bundling run
#[derive(Debug)]
pub struct BundleResult {
    pub stats: BundleStats,
    pub warnings: Vec<Warning>,
}

/// Traversal settings
#[derive(Debug, Clone, Copy)]
pub struct BundleOptions {
    pub sort_entries: bool,
    pub follow_links: bool,
}

impl Default for BundleOptions {
    fn default() -> Self {
        Self {
            sort_entries: true,
            follow_links: false,
        }
    }
}

/// Resolved location of the output artifact
///
/// `dir` is canonical and is the base every candidate path is made relative to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    pub dir: PathBuf,
    pub file_name: String,
}

impl OutputTarget {
    /// Resolve an output path whose parent directory must already exist
    pub fn resolve<P: AsRef<Path>>(output_path: P) -> Result<Self> {
        let output_path = output_path.as_ref();

        let Some(file_name) = output_path.file_name() else {
            bail!("Output path has no file name: {}", output_path.display());
        };

        let parent = match output_path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let dir = parent
            .canonicalize()
            .with_context(|| format!("Output directory does not exist: {}", parent.display()))?;

        Ok(Self {
            dir,
            file_name: file_name.to_string_lossy().into_owned(),
        })
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }
}
