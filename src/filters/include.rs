//! Extension allow-list
//!
//! The allow-list lives in a flat sidecar file next to the bundled tree, one
//! file-name suffix per line. A missing file is bootstrapped with the defaults.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Suffixes written to a freshly bootstrapped include file, in order
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    ".py", ".js", ".html", ".css", ".go", ".java", ".cpp", ".c", ".cs", ".php", ".rb", ".swift",
    ".ts", ".vue", ".json", ".xml", ".yml", ".md", ".sh",
];

/// Ordered set of file-name suffixes eligible for bundling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeSet {
    extensions: Vec<String>,
}

impl IncludeSet {
    /// Load the allow-list from `path`, creating it with [`DEFAULT_EXTENSIONS`] first if absent
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            Self::write_defaults(path)?;
            tracing::info!("Created default include file at {}", path.display());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read include file: {}", path.display()))?;

        let include = Self::parse(&content);
        tracing::debug!("Loaded {} included extensions", include.len());
        Ok(include)
    }

    /// Parse include file content: one trimmed suffix per non-blank line
    pub fn parse(content: &str) -> Self {
        let extensions = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        Self { extensions }
    }

    fn write_defaults(path: &Path) -> Result<()> {
        let mut content = String::new();
        for ext in DEFAULT_EXTENSIONS {
            content.push_str(ext);
            content.push('\n');
        }

        fs::write(path, content)
            .with_context(|| format!("Failed to create include file: {}", path.display()))
    }

    /// Check whether a file name ends with one of the allowed suffixes (case-sensitive)
    pub fn matches(&self, file_name: &str) -> bool {
        self.extensions.iter().any(|ext| file_name.ends_with(ext.as_str()))
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }
}
