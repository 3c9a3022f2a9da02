//! Path utilities
//!
//! Relative path computation between two absolute locations and a stable,
//! platform-independent rendering used in record headers.

use std::path::{Component, Path, PathBuf};

/// Compute `path` relative to `base`.
///
/// Both paths are expected to be absolute (canonicalized by the caller).
/// When `path` is not below `base`, the result climbs out with `..`
/// components, mirroring what `os.path.relpath`-style helpers produce.
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    if let Ok(stripped) = path.strip_prefix(base) {
        return stripped.to_path_buf();
    }

    let path_components: Vec<Component> = path.components().collect();
    let base_components: Vec<Component> = base.components().collect();

    let common = path_components
        .iter()
        .zip(base_components.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in common..base_components.len() {
        relative.push("..");
    }
    for component in &path_components[common..] {
        relative.push(component.as_os_str());
    }
    relative
}

/// Render a relative path with `/` separators regardless of platform
pub fn display_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
