//! Reference provider trait
//!
//! Defines the interface for accessing reference sequence data.

use crate::error::AccessionError;

/// Trait for providing reference sequence data, addressed by contig name
///
/// Implementations might include:
/// - MockProvider for testing
/// - an indexed-FASTA reader in the surrounding pipeline
pub trait ReferenceProvider {
    /// Check whether a contig is present in the reference
    fn contig_exists(&self, contig: &str) -> bool;

    /// Get the bases in a contig range
    ///
    /// # Arguments
    ///
    /// * `contig` - Contig/chromosome name (e.g., "NC_000001.11", "chr1")
    /// * `start` - 1-based start position, inclusive
    /// * `end` - 1-based end position, inclusive
    ///
    /// # Returns
    ///
    /// The bases in the range. An empty string signals "no data"; callers
    /// treat that as fatal when bases were expected to exist.
    fn get_bases(&self, contig: &str, start: u64, end: u64) -> Result<String, AccessionError>;
}

/// Blanket implementation for boxed trait objects
impl ReferenceProvider for Box<dyn ReferenceProvider> {
    fn contig_exists(&self, contig: &str) -> bool {
        (**self).contig_exists(contig)
    }

    fn get_bases(&self, contig: &str, start: u64, end: u64) -> Result<String, AccessionError> {
        (**self).get_bases(contig, start, end)
    }
}
