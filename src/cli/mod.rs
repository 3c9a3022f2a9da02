//! Command-line interface for llmbridge
//!
//! Parses arguments, wires up logging, applies flag overrides on top of the
//! layered configuration and reports the outcome of the bundling run.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod output;

pub use output::Output;

use crate::bundler::bundle_directory;
use crate::config::BridgeConfig;

const AFTER_HELP: &str = "\
FILES:
  <ROOT>/.llmbridgeinclude   File-name suffixes to bundle, one per line (created with defaults)
  <ROOT>/.gitignore          Gitignore rules; the output file name is appended if missing

ENVIRONMENT:
  LLMBRIDGE_SORT_ENTRIES, LLMBRIDGE_FOLLOW_LINKS, LLMBRIDGE_INCLUDE_FILE,
  LLMBRIDGE_IGNORE_FILE, LLMBRIDGE_OUTPUT_FILE, RUST_LOG
";

/// Bundle a source tree into a single text file for LLM prompts
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, after_help = AFTER_HELP)]
pub struct Cli {
    /// Directory to bundle
    #[arg(value_name = "ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Output file [default: ./LLMOutput.txt]
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Keep filesystem enumeration order instead of sorting entries by name
    #[arg(long)]
    pub no_sort: bool,

    /// Follow symbolic links while walking
    #[arg(long)]
    pub follow_links: bool,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        setup_logging(self.verbose, self.quiet);
        let output = Output::new(self.verbose > 0, self.quiet);

        let mut config = BridgeConfig::load()?;
        if self.no_sort {
            config.sort_entries = false;
        }
        if self.follow_links {
            config.follow_links = true;
        }

        let output_path = self
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.output_file));

        output.verbose(&format!(
            "Bundling {} into {}",
            self.root.display(),
            output_path.display()
        ));

        let result = bundle_directory(&self.root, &output_path, &config)?;

        for warning in &result.warnings {
            output.warning(&format!("Skipped {}: {}", warning.path.display(), warning.message));
        }

        output.success(&format!(
            "Bundled {} files into {} in {:.2}s",
            result.stats.files_written,
            output_path.display(),
            result.stats.bundle_duration_ms as f64 / 1000.0
        ));
        if self.verbose > 0 {
            output.summary_stats("Bytes written:", result.stats.bytes_written);
            output.summary_stats("Skipped (extension):", result.stats.files_skipped);
            output.summary_stats("Ignored entries:", result.stats.entries_ignored);
            output.summary_stats("Unreadable:", result.warnings.len());
        }

        Ok(())
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter =
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info,ignore=warn,globset=warn,walkdir=warn"),
            2 => tracing_subscriber::EnvFilter::new("debug,ignore=warn,globset=warn,walkdir=warn"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
