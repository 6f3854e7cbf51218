//! Submitted-variant model consumed by the accession report

use serde::{Deserialize, Serialize};

/// One variant submitted for accessioning, with both alleles already
/// expressed on the forward strand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedVariant {
    /// Assembly accession (e.g., "GCA_000001405.15")
    pub assembly: String,

    /// NCBI taxonomy identifier
    pub taxonomy: u32,

    /// Submitting project accession
    pub project: String,

    /// Contig/chromosome name
    pub contig: String,

    /// 1-based position on the contig's forward strand
    pub start: u64,

    /// Reference allele; empty for a pure insertion
    pub reference_allele: String,

    /// Alternate allele; empty for a pure deletion
    pub alternate_allele: String,

    /// Whether the submitter provided supporting evidence
    pub supported_by_evidence: bool,
}

impl SubmittedVariant {
    /// Create a variant; evidence support defaults to true
    pub fn new(
        assembly: &str,
        taxonomy: u32,
        project: &str,
        contig: &str,
        start: u64,
        reference_allele: &str,
        alternate_allele: &str,
    ) -> Self {
        Self {
            assembly: assembly.to_string(),
            taxonomy,
            project: project.to_string(),
            contig: contig.to_string(),
            start,
            reference_allele: reference_allele.to_string(),
            alternate_allele: alternate_allele.to_string(),
            supported_by_evidence: true,
        }
    }

    /// Set whether the variant is supported by evidence
    pub fn with_evidence(mut self, supported: bool) -> Self {
        self.supported_by_evidence = supported;
        self
    }

    /// True when either allele is empty and the report format requires a
    /// context base before the variant can be rendered
    pub fn needs_context_base(&self) -> bool {
        self.reference_allele.is_empty() || self.alternate_allele.is_empty()
    }
}

/// A submitted variant paired with the accession assigned to it by the
/// external accessioning service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessionedVariant {
    pub accession: u64,
    pub variant: SubmittedVariant,
}

impl AccessionedVariant {
    pub fn new(accession: u64, variant: SubmittedVariant) -> Self {
        Self { accession, variant }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needs_context_base() {
        let snv = SubmittedVariant::new("GCA_000001405.15", 9606, "PRJEB0001", "22", 100, "A", "G");
        assert!(!snv.needs_context_base());

        let insertion =
            SubmittedVariant::new("GCA_000001405.15", 9606, "PRJEB0001", "22", 100, "", "G");
        assert!(insertion.needs_context_base());

        let deletion =
            SubmittedVariant::new("GCA_000001405.15", 9606, "PRJEB0001", "22", 100, "A", "");
        assert!(deletion.needs_context_base());
    }

    #[test]
    fn test_evidence_builder() {
        let variant = SubmittedVariant::new("asm", 9606, "project", "1", 5, "A", "T")
            .with_evidence(false);
        assert!(!variant.supported_by_evidence);
    }
}
