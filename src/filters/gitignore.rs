//! Gitignore-style exclusion rules
//!
//! Patterns come from the ignore file in file order, followed by implicit rules
//! that keep the tool from bundling its own artifact or itself. Matching uses
//! full gitignore semantics (anchoring, `**`, directory-only rules, negation,
//! last match wins) compiled by the `ignore` crate.

use anyhow::{Context, Result};
use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Name of the tool, always excluded from bundles
pub const TOOL_NAME: &str = env!("CARGO_PKG_NAME");

/// Compiled ignore rules evaluated against paths relative to a base directory
///
/// Implicit rules are kept apart from the ignore file's rules and only apply
/// to non-directory entries, so a source directory that shares the tool's name
/// is still walked. They are evaluated after the file's rules and cannot be
/// negated by them.
#[derive(Debug, Clone)]
pub struct IgnoreMatcher {
    gitignore: Gitignore,
    implicit: Gitignore,
    patterns: Vec<String>,
}

impl IgnoreMatcher {
    /// Build a matcher from `ignore_file` (may be absent) followed by the `implicit` rules.
    ///
    /// `base_dir` is the directory candidate paths are relative to, which is the
    /// output file's directory rather than the traversal root.
    pub fn build<P: AsRef<Path>>(
        ignore_file: P,
        base_dir: &Path,
        implicit: &[String],
    ) -> Result<Self> {
        let patterns = read_patterns(ignore_file.as_ref())?;
        Self::from_patterns(base_dir, patterns, implicit)
    }

    /// Compile ordered gitignore lines plus file-only implicit rules.
    /// Malformed lines are skipped with a warning.
    pub fn from_patterns<I>(base_dir: &Path, patterns: I, implicit: &[String]) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut compiled = Vec::new();
        let gitignore = compile(base_dir, patterns, &mut compiled)?;
        let implicit = compile(base_dir, implicit.iter().cloned(), &mut compiled)?;

        tracing::debug!(
            "Compiled {} ignore patterns ({} negations, {} implicit)",
            gitignore.num_ignores(),
            gitignore.num_whitelists(),
            implicit.num_ignores()
        );

        Ok(Self {
            gitignore,
            implicit,
            patterns: compiled,
        })
    }

    /// Check a path relative to the base directory; the last matching rule decides
    pub fn is_ignored(&self, relative_path: &Path, is_dir: bool) -> bool {
        if !is_dir && self.implicit.matched(relative_path, false).is_ignore() {
            return true;
        }
        self.gitignore.matched(relative_path, is_dir).is_ignore()
    }

    /// Patterns that compiled successfully, in evaluation order
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}

fn compile<I>(base_dir: &Path, patterns: I, compiled: &mut Vec<String>) -> Result<Gitignore>
where
    I: IntoIterator<Item = String>,
{
    let mut builder = GitignoreBuilder::new(base_dir);

    for pattern in patterns {
        match builder.add_line(None, &pattern) {
            Ok(_) => compiled.push(pattern),
            Err(e) => tracing::warn!("Skipping invalid ignore pattern '{}': {}", pattern, e),
        }
    }

    builder.build().context("Failed to compile ignore patterns")
}

/// Read the non-blank, non-comment lines of an ignore file. A missing file yields no patterns.
///
/// Lines are kept as written; unescaped trailing whitespace is dropped by the
/// gitignore compiler while an escaped trailing space (`foo\ `) survives.
pub fn read_patterns(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read ignore file: {}", path.display()))?;

    Ok(content
        .lines()
        .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

/// Append `entry` to the ignore file unless it is already listed.
///
/// A root-anchored `/entry` line counts as listed. Creates the file when
/// missing and terminates a dangling last line before appending. Returns
/// `true` when the file was changed.
pub fn ensure_listed(path: &Path, entry: &str) -> Result<bool> {
    let existing = if path.exists() {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read ignore file: {}", path.display()))?
    } else {
        String::new()
    };

    let listed = existing
        .lines()
        .map(str::trim)
        .any(|line| line == entry || line.strip_prefix('/') == Some(entry));
    if listed {
        return Ok(false);
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open ignore file for append: {}", path.display()))?;

    let mut addition = String::new();
    if !existing.is_empty() && !existing.ends_with('\n') {
        addition.push('\n');
    }
    addition.push_str(entry);
    addition.push('\n');

    file.write_all(addition.as_bytes())
        .with_context(|| format!("Failed to append to ignore file: {}", path.display()))?;

    tracing::info!("Added '{}' to {}", entry, path.display());
    Ok(true)
}

/// Escape a literal file name so it is matched verbatim as a gitignore pattern
pub fn literal_pattern(name: &str) -> String {
    let mut escaped = String::with_capacity(name.len());
    for (i, ch) in name.chars().enumerate() {
        match ch {
            '*' | '?' | '[' | ']' | '{' | '}' | '\\' => escaped.push('\\'),
            '!' | '#' if i == 0 => escaped.push('\\'),
            _ => {}
        }
        escaped.push(ch);
    }
    escaped
}
