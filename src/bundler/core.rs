use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;
use walkdir::{DirEntry, WalkDir};

use super::types::{BundleOptions, BundleResult, BundleStats, OutputTarget, Warning};
use crate::filters::{IgnoreMatcher, IncludeSet};
use crate::shared::paths::{display_path, relative_to};

/// Separator line framing every record header (33 hyphens)
pub const SEPARATOR: &str = "---------------------------------";

/// Walks a tree and concatenates every eligible file into one output stream
///
/// Entries are visited depth-first in pre-order. Every candidate path is made
/// relative to the output file's directory before it is checked against the
/// ignore rules, and ignored directories are pruned without being read.
#[derive(Debug)]
pub struct TreeBundler<'a> {
    include: &'a IncludeSet,
    ignore: &'a IgnoreMatcher,
    target: &'a OutputTarget,
    options: BundleOptions,
}

impl<'a> TreeBundler<'a> {
    pub fn new(
        include: &'a IncludeSet,
        ignore: &'a IgnoreMatcher,
        target: &'a OutputTarget,
        options: BundleOptions,
    ) -> Self {
        Self {
            include,
            ignore,
            target,
            options,
        }
    }

    /// Bundle `root` into the output file.
    ///
    /// The output handle is opened (truncating) once here and closed when this
    /// call returns, whether the walk finished or failed.
    pub fn run(&self, root: &Path) -> Result<BundleResult> {
        let output_path = self.target.path();
        let file = File::create(&output_path)
            .with_context(|| format!("Failed to open output file: {}", output_path.display()))?;
        let mut sink = BufWriter::new(file);

        let result = self.bundle_into(root, &mut sink)?;

        sink.flush()
            .with_context(|| format!("Failed to flush output file: {}", output_path.display()))?;
        Ok(result)
    }

    /// Walk `root` and write one record per eligible file into `sink`
    pub fn bundle_into<W: Write>(&self, root: &Path, sink: &mut W) -> Result<BundleResult> {
        let start_time = Instant::now();
        let root = root
            .canonicalize()
            .with_context(|| format!("Root directory does not exist: {}", root.display()))?;

        let mut stats = BundleStats::default();
        let mut warnings = Vec::new();
        let mut entries_ignored = 0;

        let mut walker = WalkDir::new(&root)
            .min_depth(1)
            .follow_links(self.options.follow_links);
        if self.options.sort_entries {
            walker = walker.sort_by_file_name();
        }

        let entries = walker.into_iter().filter_entry(|entry| {
            let ignored = self.is_ignored(entry);
            if ignored {
                entries_ignored += 1;
            }
            !ignored
        });

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| root.clone());
                    tracing::warn!("Walk error at {}: {}", path.display(), e);
                    warnings.push(Warning {
                        path,
                        message: e.to_string(),
                    });
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let file_name = entry.file_name().to_string_lossy();
            if !self.include.matches(&file_name) {
                tracing::debug!("Skipping {} (extension not included)", entry.path().display());
                stats.files_skipped += 1;
                continue;
            }

            let content = match fs::read_to_string(entry.path()) {
                Ok(content) => content,
                Err(e) => {
                    tracing::warn!("Error processing file {}: {}", entry.path().display(), e);
                    warnings.push(Warning {
                        path: entry.path().to_path_buf(),
                        message: e.to_string(),
                    });
                    continue;
                }
            };

            let header = display_path(&relative_to(entry.path(), &self.target.dir));
            write_record(sink, &header, &content)
                .with_context(|| format!("Failed to write record for {}", header))?;

            tracing::debug!("Bundled {} ({} bytes)", header, content.len());
            stats.files_written += 1;
            stats.bytes_written += content.len();
        }

        stats.entries_ignored = entries_ignored;
        stats.bundle_duration_ms = start_time.elapsed().as_millis() as u64;

        Ok(BundleResult { stats, warnings })
    }

    fn is_ignored(&self, entry: &DirEntry) -> bool {
        if entry.path() == self.target.path() {
            tracing::debug!("Ignoring output file {}", entry.path().display());
            return true;
        }

        let relative = relative_to(entry.path(), &self.target.dir);
        let ignored = self.ignore.is_ignored(&relative, entry.file_type().is_dir());
        if ignored {
            tracing::debug!("Ignoring {}", display_path(&relative));
        }
        ignored
    }
}

/// Write one record: framed header, blank line, verbatim content, two newlines
pub fn write_record<W: Write>(
    sink: &mut W,
    header_path: &str,
    content: &str,
) -> std::io::Result<()> {
    write!(sink, "{SEPARATOR}\nFile: {header_path}\n{SEPARATOR}\n\n{content}\n\n")
}
