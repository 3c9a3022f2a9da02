//! Tree bundling pipeline
//!
//! Loads the allow-list and ignore rules once, records the output artifact in
//! the ignore file, then hands everything to [`TreeBundler`] which owns the
//! output stream for the whole walk.

pub mod core;
pub mod types;

pub use self::core::{SEPARATOR, TreeBundler, write_record};
pub use self::types::{BundleOptions, BundleResult, BundleStats, OutputTarget, Warning};

use anyhow::{Result, bail};
use std::path::Path;

use crate::config::BridgeConfig;
use crate::filters::{IgnoreMatcher, IncludeSet, TOOL_NAME, ensure_listed, literal_pattern};

/// Bundle `root` into `output` using the file names and traversal settings from `config`
pub fn bundle_directory(root: &Path, output: &Path, config: &BridgeConfig) -> Result<BundleResult> {
    if !root.is_dir() {
        bail!("Root directory does not exist or is not a directory: {}", root.display());
    }

    let include = IncludeSet::load(root.join(&config.include_file))?;
    let target = OutputTarget::resolve(output)?;

    let ignore_file = root.join(&config.ignore_file);
    let output_entry = literal_pattern(&target.file_name);
    if let Err(e) = ensure_listed(&ignore_file, &output_entry) {
        tracing::warn!("Could not record {} in ignore file: {:#}", target.file_name, e);
    }

    let implicit = vec![output_entry, literal_pattern(TOOL_NAME)];
    let matcher = IgnoreMatcher::build(&ignore_file, &target.dir, &implicit)?;

    let options = BundleOptions {
        sort_entries: config.sort_entries,
        follow_links: config.follow_links,
    };

    tracing::info!(
        "Bundling {} into {} ({} extensions, {} ignore patterns)",
        root.display(),
        target.path().display(),
        include.len(),
        matcher.patterns().len()
    );

    TreeBundler::new(&include, &matcher, &target, options).run(root)
}
