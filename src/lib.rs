//! # llmbridge - bundle a source tree into one prompt-ready text file
//!
//! Walks a directory, keeps files whose names end in a suffix from the
//! `.llmbridgeinclude` allow-list, drops anything matched by `.gitignore`
//! rules, and writes every remaining file into a single delimited output.
//!
//! ## Quick Start
//!
//! ```bash
//! # Bundle the current directory into ./LLMOutput.txt
//! llmbridge
//!
//! # Bundle another tree into a custom file
//! llmbridge ../service out/service.txt
//! ```
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use llmbridge::bundler::bundle_directory;
//! use llmbridge::config::BridgeConfig;
//! use std::path::Path;
//!
//! let config = BridgeConfig::load()?;
//! let result = bundle_directory(Path::new("src"), Path::new("LLMOutput.txt"), &config)?;
//! println!("{} files bundled", result.stats.files_written);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod bundler;
pub mod cli;
pub mod config;
pub mod filters;
pub mod shared;

pub use cli::{Cli, Output};
pub use config::BridgeConfig;

/// Result type alias for llmbridge operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
