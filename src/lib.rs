// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! ferro-accession: strand-aware allele normalization and accession reporting
//!
//! Part of the ferro bioinformatics toolkit.
//!
//! Normalizes dbSNP-style allele records (strand-tagged, with tandem-repeat
//! shorthand) into forward-strand sequences, and renders accessioned variants
//! into a restart-safe VCF 4.2 accession report.
//!
//! # Example
//!
//! ```
//! use ferro_accession::{Orientation, RawAlleleRecord, VariantClass};
//!
//! // A microsatellite allele list where later tokens omit the repeat unit
//! let record = RawAlleleRecord::new(
//!     "T",
//!     "(T)4/5/7",
//!     Orientation::Forward,
//!     Orientation::Forward,
//!     VariantClass::Microsatellite,
//! );
//!
//! let normalized = record.normalize().unwrap();
//! assert_eq!(normalized.reference, "T");
//! assert_eq!(normalized.alleles, vec!["TTTT", "TTTTT", "TTTTTTT"]);
//! ```

pub mod alleles;
pub mod error;
pub mod reference;
pub mod report;
pub mod sequence;

pub use alleles::{NormalizedAlleleSet, Orientation, RawAlleleRecord, VariantClass};
pub use error::AccessionError;
pub use reference::{MockProvider, ReferenceProvider};
pub use report::{
    add_context_base, AccessionReportWriter, AccessionedVariant, CheckpointStore,
    InMemoryCheckpoint, OpenOutcome, ReportRecord, SubmittedVariant,
};
pub use sequence::reverse_complement;
