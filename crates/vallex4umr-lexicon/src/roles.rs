//! Functor-to-PropBank role conversion.
//!
//! Source annotation labels verb arguments with tectogrammatical functors
//! (`ACT`, `PAT`, `LOC`, ...). The dictionary wants PropBank-style numbered
//! arguments. `ACT` and `PAT` always claim `ARG0`/`ARG1`; every other
//! recognized functor is numbered `ARG2, ARG3, ...` in fixed hierarchy
//! order, never input order, so independent occurrences of one entry always
//! yield the same role string and conflict detection compares like with
//! like.

use thiserror::Error;

/// Placeholder annotators write when an occurrence has no role annotation.
pub const ROLE_PLACEHOLDER: &str = "---";

/// Functor precedence hierarchy for argument numbering.
pub const FUNCTOR_HIERARCHY: [&str; 25] = [
    "ACT", "PAT", "ADDR", "EFF", "ORIG", "BEN", "DIFF", "REG", "MANN", "DIR1", "DIR3",
    "DIR2", "LOC", "TOWH", "TFHL", "TWHEN", "MEANS", "EXT", "AIM", "MAT", "INTT",
    "CAUS", "CPR", "APP", "ACMP",
];

/// How [`roles_to_propbank`] treats functors absent from the hierarchy.
/// Exactly one policy is in force per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownFunctorPolicy {
    /// Unknown functors are data errors.
    #[default]
    Strict,
    /// Unknown functors render with a literal `NA` slot, placed after all
    /// recognized functors.
    NaSlot,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RoleError {
    #[error("unknown functor `{functor}`")]
    UnknownFunctor { functor: String },
}

fn hierarchy_index(functor: &str) -> Option<usize> {
    FUNCTOR_HIERARCHY.iter().position(|f| *f == functor)
}

/// Splits a raw comma-separated functor annotation into tokens, trimming
/// whitespace and dropping empty tokens.
pub fn parse_functor_list(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Converts a functor sequence into the PropBank-style role string.
///
/// Duplicate functors within one occurrence are suppressed (first kept).
/// A sequence consisting only of placeholders passes the placeholder through
/// unchanged, with no `[ARGn]` suffix; placeholders mixed with real functors
/// are stripped. An empty sequence yields an empty string.
pub fn roles_to_propbank(
    functors: &[&str],
    policy: UnknownFunctorPolicy,
) -> Result<String, RoleError> {
    let mut tags: Vec<&str> = Vec::new();
    for functor in functors {
        let functor = functor.trim();
        if functor.is_empty() || tags.contains(&functor) {
            continue;
        }
        tags.push(functor);
    }

    let saw_placeholder = tags.iter().any(|t| *t == ROLE_PLACEHOLDER);
    tags.retain(|t| *t != ROLE_PLACEHOLDER);
    if tags.is_empty() {
        return Ok(if saw_placeholder {
            ROLE_PLACEHOLDER.to_string()
        } else {
            String::new()
        });
    }

    let mut recognized: Vec<(usize, &str)> = Vec::new();
    let mut unrecognized: Vec<&str> = Vec::new();
    for tag in tags {
        match hierarchy_index(tag) {
            Some(rank) => recognized.push((rank, tag)),
            None => match policy {
                UnknownFunctorPolicy::Strict => {
                    return Err(RoleError::UnknownFunctor {
                        functor: tag.to_string(),
                    });
                }
                UnknownFunctorPolicy::NaSlot => unrecognized.push(tag),
            },
        }
    }
    recognized.sort_by_key(|(rank, _)| *rank);

    let mut parts: Vec<String> = Vec::new();
    let mut next_arg = 2u32;
    for (_, functor) in recognized {
        let label = match functor {
            "ACT" => "ARG0".to_string(),
            "PAT" => "ARG1".to_string(),
            _ => {
                let label = format!("ARG{next_arg}");
                next_arg += 1;
                label
            }
        };
        parts.push(format!("{functor} [{label}]"));
    }
    for functor in unrecognized {
        parts.push(format!("{functor} [NA]"));
    }
    Ok(parts.join(", "))
}
