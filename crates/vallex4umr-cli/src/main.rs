//! Vallex4UMR CLI
//!
//! Command-line interface for:
//! - Converting annotated frame-occurrence exports into the Vallex4UMR
//!   dictionary, with optional gap filling from the lemma-URI mapping
//! - Appending curated abstract-predicate (`* SUM`) blocks to a dictionary

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod convert;
mod sumframes;

#[derive(Parser)]
#[command(name = "vallex4umr")]
#[command(
    author,
    version,
    about = "Vallex4UMR: Latin valency lexicon converter for UMR"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert frame-occurrence exports into the Vallex4UMR dictionary.
    Convert(convert::ConvertArgs),

    /// Append curated abstract-predicate (`* SUM`) blocks to a dictionary.
    AppendSumFrames(sumframes::AppendSumFramesArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Convert(args) => convert::cmd_convert(&args),
        Commands::AppendSumFrames(args) => sumframes::cmd_append_sum_frames(&args),
    }
}
