//! The rendered dictionary format.
//!
//! One block per entry, blocks separated by a blank line:
//!
//! ```text
//! * ACCIPIO
//!  : id: accipio-01
//!  + ACT [ARG0], PAT [ARG1]
//!  : synset id: v#02210119
//!  : synset definition: receive willingly something given or offered
//!  : lemma URI: http://lila-erc.eu/data/id/lemma/87163
//!  	-POS: VERB
//!  	-Vallex1_id: accipio-1
//!  	-example: multi gloriam accipiunt
//!  	-LDT_ids: 5.4 (par.5); 7.2 (par.7)
//! ```
//!
//! The `gramm_info` line renders only when non-empty; the last three lines
//! render only for corpus-observed entries. Rendering is deterministic, and
//! [`parse`] is its structural inverse so downstream tooling can re-consume
//! the artifact. Multi-valued fields join on `"; "`, which members must not
//! contain.

use thiserror::Error;

use crate::entry::{ConsolidatedEntry, EntryMap, Provenance};
use crate::identifier::UmrId;

const ID_PREFIX: &str = " : id: ";
const ROLES_PREFIX: &str = " + ";
const SYNSET_PREFIX: &str = " : synset id: ";
const DEFINITION_PREFIX: &str = " : synset definition: ";
const URI_PREFIX: &str = " : lemma URI: ";
const POS_PREFIX: &str = " \t-POS: ";
const GRAMM_PREFIX: &str = " \t-gramm_info: ";
const FRAMES_PREFIX: &str = " \t-Vallex1_id: ";
const EXAMPLE_PREFIX: &str = " \t-example: ";
const LOCATIONS_PREFIX: &str = " \t-LDT_ids: ";

/// Separator for multi-valued fields.
const LIST_SEPARATOR: &str = "; ";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatParseError {
    #[error("parse error on line {line}: {message}")]
    Line { line: usize, message: String },
}

fn line_error(index: usize, message: impl Into<String>) -> FormatParseError {
    FormatParseError::Line {
        line: index + 1,
        message: message.into(),
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Renders the entry map in identifier sort order. Identical maps yield
/// byte-identical text.
pub fn render(entries: &EntryMap) -> String {
    let mut out = String::new();
    for (i, entry) in entries.values().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        render_entry(&mut out, entry);
    }
    out
}

fn render_entry(out: &mut String, entry: &ConsolidatedEntry) {
    out.push_str(&format!("* {}\n", entry.id.header_lemma().to_uppercase()));
    out.push_str(&format!("{ID_PREFIX}{}\n", entry.id));
    out.push_str(&format!("{ROLES_PREFIX}{}\n", entry.roles));
    out.push_str(&format!("{SYNSET_PREFIX}{}\n", entry.synset_id));
    out.push_str(&format!("{DEFINITION_PREFIX}{}\n", entry.definition));
    out.push_str(&format!("{URI_PREFIX}{}\n", entry.uri));
    out.push_str(&format!("{POS_PREFIX}{}\n", entry.pos));
    if !entry.gramm_info.is_empty() {
        out.push_str(&format!("{GRAMM_PREFIX}{}\n", entry.gramm_info));
    }
    if entry.is_observed() {
        out.push_str(&format!(
            "{FRAMES_PREFIX}{}\n",
            entry.v1_frames.join(LIST_SEPARATOR)
        ));
        out.push_str(&format!(
            "{EXAMPLE_PREFIX}{}\n",
            entry.examples.join(LIST_SEPARATOR)
        ));
        out.push_str(&format!(
            "{LOCATIONS_PREFIX}{}\n",
            entry.locations.join(LIST_SEPARATOR)
        ));
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Parses text in the rendered format back into an entry map.
///
/// Accepts exactly what [`render`] emits: appendix (`* SUM`) blocks and
/// hand-edited layouts fail with a line-numbered error. Provenance is
/// recovered from the presence of the occurrence lines.
pub fn parse(text: &str) -> Result<EntryMap, FormatParseError> {
    let lines: Vec<&str> = text.lines().collect();
    let mut entries = EntryMap::new();
    let mut ix = 0;
    while ix < lines.len() {
        if lines[ix].trim().is_empty() {
            ix += 1;
            continue;
        }
        if !lines[ix].starts_with("* ") {
            return Err(line_error(
                ix,
                format!("expected entry header `* ...`, found `{}`", lines[ix]),
            ));
        }
        let block_start = ix;
        let (entry, next) = parse_entry_block(&lines, ix)?;
        if entries.contains_key(&entry.id) {
            return Err(line_error(
                block_start,
                format!("duplicate entry `{}`", entry.id),
            ));
        }
        entries.insert(entry.id.clone(), entry);
        ix = next;
    }
    Ok(entries)
}

fn parse_entry_block(
    lines: &[&str],
    at: usize,
) -> Result<(ConsolidatedEntry, usize), FormatParseError> {
    let mut ix = at + 1;

    let raw_id = required(lines, ix, ID_PREFIX)?;
    let id = UmrId::parse(raw_id).map_err(|err| line_error(ix, err.to_string()))?;
    ix += 1;
    let roles = required(lines, ix, ROLES_PREFIX)?;
    ix += 1;
    let synset_id = required(lines, ix, SYNSET_PREFIX)?;
    ix += 1;
    let definition = required(lines, ix, DEFINITION_PREFIX)?;
    ix += 1;
    let uri = required(lines, ix, URI_PREFIX)?;
    ix += 1;
    let pos = required(lines, ix, POS_PREFIX)?;
    ix += 1;

    let mut gramm_info = "";
    if let Some(rest) = lines.get(ix).and_then(|line| line.strip_prefix(GRAMM_PREFIX)) {
        gramm_info = rest;
        ix += 1;
    }

    let observed = lines
        .get(ix)
        .map_or(false, |line| line.starts_with(FRAMES_PREFIX));
    let (v1_frames, examples, locations) = if observed {
        let frames = split_list(required(lines, ix, FRAMES_PREFIX)?);
        ix += 1;
        let examples = split_list(required(lines, ix, EXAMPLE_PREFIX)?);
        ix += 1;
        let locations = split_list(required(lines, ix, LOCATIONS_PREFIX)?);
        ix += 1;
        (frames, examples, locations)
    } else {
        (Vec::new(), Vec::new(), Vec::new())
    };

    if let Some(line) = lines.get(ix) {
        if !line.trim().is_empty() && !line.starts_with("* ") {
            return Err(line_error(ix, format!("unexpected line in entry block: `{line}`")));
        }
    }

    let entry = ConsolidatedEntry {
        id,
        locations,
        v1_frames,
        examples,
        roles: roles.to_string(),
        lemma: String::new(),
        synset_id: synset_id.to_string(),
        definition: definition.to_string(),
        uri: uri.to_string(),
        pos: pos.to_string(),
        gramm_info: gramm_info.to_string(),
        provenance: if observed {
            Provenance::Observed
        } else {
            Provenance::GapFilled
        },
    };
    Ok((entry, ix))
}

fn required<'a>(
    lines: &[&'a str],
    ix: usize,
    prefix: &str,
) -> Result<&'a str, FormatParseError> {
    let line = lines
        .get(ix)
        .copied()
        .ok_or_else(|| line_error(ix, format!("missing `{}` line", prefix.trim())))?;
    line.strip_prefix(prefix)
        .ok_or_else(|| line_error(ix, format!("expected `{}` line, found `{line}`", prefix.trim())))
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(LIST_SEPARATOR).map(str::to_string).collect()
}
