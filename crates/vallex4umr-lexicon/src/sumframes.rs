//! Appendix blocks for abstract-predicate frames.
//!
//! Some legacy frames were annotated directly with a UMR abstract predicate
//! (`have-role-91` and friends) instead of a lexicon identifier. Those never
//! become regular entries; they are grouped per predicate and appended to the
//! dictionary under a shared `* SUM` header, with a curated role line per
//! predicate.

use std::collections::BTreeMap;

use tracing::warn;

/// Curated PropBank role lines, one per supported abstract predicate.
pub const ABSTRACT_PREDICATE_ROLES: [(&str, &str); 7] = [
    ("belong-91", "ACT [ARG1], PAT [ARG2]"),
    ("exist-91", "ACT [ARG2]"),
    ("have-mod-91", "ACT [ARG1], PAT [ARG2]"),
    ("have-place-91", "ACT [ARG1], LOC [ARG2]"),
    ("have-role-91", "ACT [ARG1], APP [ARG2], PAT [ARG3]"),
    ("have-source-91", "ACT [ARG1], ORIG [ARG2]"),
    ("identity-91", "ACT [ARG1], PAT [ARG2]"),
];

/// Looks up the curated role line for an abstract predicate.
pub fn abstract_roles(predicate: &str) -> Option<&'static str> {
    ABSTRACT_PREDICATE_ROLES
        .iter()
        .find(|(name, _)| *name == predicate)
        .map(|(_, roles)| *roles)
}

/// One row of the abstract-predicate frame table: a legacy frame id and the
/// predicate it was annotated with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SumFrameRow {
    pub v1_frame: String,
    pub predicate: String,
}

/// Groups frame ids by predicate.
///
/// Rows with an empty predicate column are dropped. When a frame id repeats,
/// the last predicate wins but the frame keeps its first-appearance position,
/// so re-annotated rows move a frame between groups without reordering it.
pub fn group_by_predicate(rows: &[SumFrameRow]) -> BTreeMap<String, Vec<String>> {
    let mut assignments: Vec<(String, String)> = Vec::new();
    for row in rows {
        if row.predicate.is_empty() {
            continue;
        }
        match assignments.iter_mut().find(|(frame, _)| *frame == row.v1_frame) {
            Some((_, predicate)) => *predicate = row.predicate.clone(),
            None => assignments.push((row.v1_frame.clone(), row.predicate.clone())),
        }
    }

    let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (frame, predicate) in assignments {
        groups.entry(predicate).or_default().push(frame);
    }
    groups
}

/// Renders the appendix blocks, one per predicate in sorted order.
///
/// Predicates without a curated role line are skipped with a warning. The
/// output deliberately reuses only a subset of the entry-block grammar and is
/// not re-ingestable by [`crate::format::parse`].
pub fn render_sum_frames(groups: &BTreeMap<String, Vec<String>>) -> String {
    let mut out = String::new();
    let mut rendered = 0;
    for (predicate, frames) in groups {
        let Some(roles) = abstract_roles(predicate) else {
            warn!(predicate = %predicate, "no curated roles for predicate, skipping");
            continue;
        };
        if rendered > 0 {
            out.push('\n');
        }
        out.push_str("* SUM\n");
        out.push_str(&format!(" : id: {predicate}\n"));
        out.push_str(&format!(" + {roles}\n"));
        out.push_str(" \t-POS: VERB\n");
        out.push_str(&format!(" \t-Vallex1_id: {}\n", frames.join("; ")));
        rendered += 1;
    }
    out
}
