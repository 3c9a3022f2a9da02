//! File selection: extension allow-list and gitignore-style exclusion

pub mod gitignore;
pub mod include;

pub use gitignore::{IgnoreMatcher, TOOL_NAME, ensure_listed, literal_pattern};
pub use include::{DEFAULT_EXTENSIONS, IncludeSet};
