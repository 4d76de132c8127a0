//! Tabular source ingestion for Vallex4UMR
//!
//! Readers for the external tables the converter consumes:
//! - annotated frame-occurrence exports (comma CSV, one row per corpus span)
//! - the synset definition inventory
//! - the identifier-to-URI mapping table (TSV)
//! - the legacy lexicon dump (TSV)
//! - the curated abstract-predicate frame list (headerless CSV)
//!
//! Readers check shape and report IO/decode failures with the offending
//! path; semantic filtering (abstract predicates, malformed identifiers)
//! happens in `vallex4umr-lexicon`.

pub mod frames;
pub mod legacy;
pub mod mapping;
pub mod sumframes;
pub mod synsets;

pub use frames::*;
pub use legacy::*;
pub use mapping::*;
pub use sumframes::*;
pub use synsets::*;
