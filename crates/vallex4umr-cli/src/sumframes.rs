//! The `append-sum-frames` subcommand.
//!
//! Reads the curated abstract-predicate frame list and appends one `* SUM`
//! block per predicate to an existing dictionary. Append is the contract:
//! the converter owns the main body, this command only extends it.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use vallex4umr_ingest_tables as ingest;
use vallex4umr_lexicon::sumframes::{group_by_predicate, render_sum_frames};

#[derive(Args)]
pub struct AppendSumFramesArgs {
    /// Curated abstract-predicate frame list (headerless CSV).
    pub frames_csv: PathBuf,

    /// Dictionary to append to; created when absent.
    #[arg(long, default_value = "Vallex4UMR.txt")]
    pub out: PathBuf,
}

pub fn cmd_append_sum_frames(args: &AppendSumFramesArgs) -> Result<()> {
    let rows = ingest::read_sum_frame_rows(&args.frames_csv)?;
    let groups = group_by_predicate(&rows);
    let text = render_sum_frames(&groups);
    if text.is_empty() {
        println!("no abstract-predicate frames to append");
        return Ok(());
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&args.out)
        .with_context(|| format!("failed to open {}", args.out.display()))?;
    writeln!(file)?;
    file.write_all(text.as_bytes())?;

    println!(
        "{} {} ({} predicates)",
        "appended to".green().bold(),
        args.out.display().to_string().bold(),
        text.matches("* SUM\n").count(),
    );
    Ok(())
}
