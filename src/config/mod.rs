//! Runtime configuration
//!
//! Settings are layered with figment: built-in defaults first, then
//! `LLMBRIDGE_`-prefixed environment variables. Command-line flags are applied
//! on top by the CLI.

use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

/// Prefix for environment overrides, e.g. `LLMBRIDGE_FOLLOW_LINKS=true`
pub const ENV_PREFIX: &str = "LLMBRIDGE_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Allow-list file name, resolved against the bundled root
    pub include_file: String,
    /// Ignore file name, resolved against the bundled root
    pub ignore_file: String,
    /// Output path used when none is given on the command line
    pub output_file: String,
    /// Visit directory entries in file-name order instead of filesystem order
    pub sort_entries: bool,
    /// Follow symbolic links while walking
    pub follow_links: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            include_file: ".llmbridgeinclude".to_string(),
            ignore_file: ".gitignore".to_string(),
            output_file: "./LLMOutput.txt".to_string(),
            sort_entries: true,
            follow_links: false,
        }
    }
}

impl BridgeConfig {
    pub fn load() -> Result<Self> {
        let config: BridgeConfig = Self::figment()
            .extract()
            .context("Failed to load configuration")?;
        tracing::trace!("CONFIG LOAD: {:?}", config);
        Ok(config)
    }

    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(BridgeConfig::default()))
            .merge(Env::prefixed(ENV_PREFIX))
    }
}
