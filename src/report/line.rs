//! Report line rendering

use std::fmt;

use serde::{Deserialize, Serialize};

use super::variant::SubmittedVariant;

/// VCF marker for a missing value
const MISSING_VALUE: &str = ".";

/// One rendered accession report record
///
/// QUAL, FILTER and INFO always carry the missing-value marker; the report
/// only communicates position, identifier and alleles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRecord {
    pub contig: String,
    pub position: u64,
    /// Accession prefix and number, with no separator (e.g., "ss5000000000")
    pub id: String,
    pub reference: String,
    pub alternate: String,
}

impl ReportRecord {
    /// Build a record from an accessioned variant.
    ///
    /// The variant must already carry non-empty alleles; context padding
    /// happens upstream. Exactly one alternate allele per record.
    pub fn new(accession_prefix: &str, accession: u64, variant: &SubmittedVariant) -> Self {
        Self {
            contig: variant.contig.clone(),
            position: variant.start,
            id: format!("{accession_prefix}{accession}"),
            reference: variant.reference_allele.clone(),
            alternate: variant.alternate_allele.clone(),
        }
    }
}

impl fmt::Display for ReportRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.contig,
            self.position,
            self.id,
            self.reference,
            self.alternate,
            MISSING_VALUE,
            MISSING_VALUE,
            MISSING_VALUE,
        )
    }
}
