//! Accession report writing
//!
//! Renders accessioned submitted variants as VCF 4.2 data lines and appends
//! them to a restart-safe report file. Variants with an empty allele get a
//! context base from the reference before rendering.

pub mod context;
pub mod line;
pub mod variant;
pub mod writer;

pub use context::add_context_base;
pub use line::ReportRecord;
pub use variant::{AccessionedVariant, SubmittedVariant};
pub use writer::{
    AccessionReportWriter, CheckpointStore, InMemoryCheckpoint, OpenOutcome, HEADER_WRITTEN_KEY,
};
