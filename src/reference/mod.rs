//! Reference sequence access
//!
//! The accession report only needs two things from a reference: "does this
//! contig exist" and "give me the bases in this range". The trait keeps the
//! report code independent of how the surrounding pipeline loads FASTA data.

pub mod mock;
pub mod provider;

pub use mock::MockProvider;
pub use provider::ReferenceProvider;
