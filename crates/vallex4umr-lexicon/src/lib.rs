//! Vallex4UMR lexicon core
//!
//! This crate owns the data model and algorithms of the Vallex4UMR
//! dictionary:
//! - UMR identifier grammar, sort keys, and merged-identifier handling
//! - functor-to-PropBank role conversion over the fixed functor hierarchy
//! - consolidation of annotated frame records into one entry per identifier
//! - gap-filling from the lemma-URI mapping backed by the legacy lexicon
//! - the rendered dictionary format (writer and round-trip parser)
//! - the abstract-predicate appendix (`* SUM` blocks)
//!
//! Everything here is pure in-memory computation over pre-loaded tables; file
//! ingestion lives in `vallex4umr-ingest-tables` and orchestration in the
//! `vallex4umr` binary.

pub mod builder;
pub mod dedup;
pub mod entry;
pub mod format;
pub mod gapfill;
pub mod identifier;
pub mod resolve;
pub mod roles;
pub mod sumframes;

pub use builder::*;
pub use dedup::*;
pub use entry::*;
pub use format::*;
pub use gapfill::*;
pub use identifier::*;
pub use resolve::*;
pub use roles::*;
pub use sumframes::*;
