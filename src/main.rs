use anyhow::Result;
use clap::Parser;

use llmbridge::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
