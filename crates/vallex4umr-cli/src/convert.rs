//! The `convert` subcommand: exports in, dictionary out.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::Args;
use colored::Colorize;
use vallex4umr_ingest_tables as ingest;
use vallex4umr_lexicon::builder;
use vallex4umr_lexicon::dedup::dedup;
use vallex4umr_lexicon::format;
use vallex4umr_lexicon::gapfill;
use vallex4umr_lexicon::resolve::SynsetTable;
use vallex4umr_lexicon::roles::UnknownFunctorPolicy;

#[derive(Args)]
pub struct ConvertArgs {
    /// Frame-occurrence exports, concatenated in the given order.
    #[arg(required = true)]
    pub frames: Vec<PathBuf>,

    /// Synset definition inventory (CSV).
    #[arg(long)]
    pub synsets: Option<PathBuf>,

    /// Identifier-to-URI mapping table (TSV).
    #[arg(long)]
    pub mapping: Option<PathBuf>,

    /// Legacy lexicon dump (TSV); role source for gap filling.
    #[arg(long)]
    pub lexicon: Option<PathBuf>,

    /// Add reduced entries for mapping rows with no corpus occurrence.
    #[arg(long)]
    pub gap_fill: bool,

    /// Output dictionary path.
    #[arg(long, default_value = "Vallex4UMR.txt")]
    pub out: PathBuf,

    /// `strict` marks a whole occurrence NA on any unknown functor; `na`
    /// keeps unknowns visible as `[NA]` slots.
    #[arg(long, default_value = "strict")]
    pub unknown_functors: String,
}

pub fn cmd_convert(args: &ConvertArgs) -> Result<()> {
    let policy = parse_policy(&args.unknown_functors)?;
    let gap_fill_lexicon = if args.gap_fill {
        match (&args.synsets, &args.mapping, &args.lexicon) {
            (Some(_), Some(_), Some(lexicon)) => Some(lexicon.clone()),
            _ => {
                return Err(anyhow!(
                    "--gap-fill requires --synsets, --mapping, and --lexicon"
                ))
            }
        }
    } else {
        None
    };

    let records = ingest::read_frame_exports(&args.frames)?;
    let synsets = match &args.synsets {
        Some(path) => ingest::read_synset_table(path)?,
        None => SynsetTable::new(),
    };
    let mapping_rows = match &args.mapping {
        Some(path) => ingest::read_mapping_rows(path)?,
        None => Vec::new(),
    };
    let uris = ingest::uri_table_from_rows(&mapping_rows);

    let (mut entries, conflicts) = builder::build(&records, &synsets, &uris, policy);
    for conflict in &conflicts {
        eprintln!("{} {conflict}", "warning:".yellow().bold());
    }

    if let Some(lexicon_path) = &gap_fill_lexicon {
        let legacy = ingest::read_legacy_frames(lexicon_path)?;
        gapfill::fill_gaps(&mapping_rows, &legacy, &synsets, &mut entries, policy);
    }
    let subsumed = dedup(&mut entries);

    let text = format::render(&entries);
    write_atomic(&args.out, &text)?;

    let observed = entries.values().filter(|e| e.is_observed()).count();
    println!(
        "{} {} ({} entries: {} observed, {} gap-filled; {} subsumed by merged ids, {} conflicts)",
        "wrote".green().bold(),
        args.out.display().to_string().bold(),
        entries.len(),
        observed,
        entries.len() - observed,
        subsumed.len(),
        conflicts.len(),
    );
    Ok(())
}

fn parse_policy(raw: &str) -> Result<UnknownFunctorPolicy> {
    match raw {
        "strict" => Ok(UnknownFunctorPolicy::Strict),
        "na" => Ok(UnknownFunctorPolicy::NaSlot),
        other => Err(anyhow!(
            "unknown --unknown-functors value `{other}` (expected `strict` or `na`)"
        )),
    }
}

/// Full text to a sibling tmp file, then rename over the target. Readers
/// never see a half-written dictionary.
fn write_atomic(out: &Path, text: &str) -> Result<()> {
    let mut tmp = out.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    fs::write(&tmp, text).with_context(|| format!("failed to write {}", tmp.display()))?;
    fs::rename(&tmp, out)
        .with_context(|| format!("failed to move {} over {}", tmp.display(), out.display()))?;
    Ok(())
}
