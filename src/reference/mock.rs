//! Mock reference provider for testing

use std::collections::HashMap;

use crate::error::AccessionError;
use crate::reference::provider::ReferenceProvider;

/// In-memory reference provider backed by literal contig sequences
#[derive(Debug, Clone, Default)]
pub struct MockProvider {
    contigs: HashMap<String, String>,
}

impl MockProvider {
    /// Create an empty mock provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a contig with its full sequence
    pub fn add_contig(&mut self, name: impl Into<String>, sequence: impl Into<String>) {
        self.contigs.insert(name.into(), sequence.into());
    }

    /// Create a provider with a couple of small test contigs
    pub fn with_test_data() -> Self {
        let mut provider = Self::new();
        provider.add_contig("22", "TGCGCCTGGCAGTTAACGAT");
        provider.add_contig("X", "ATATATATAT");
        provider
    }
}

impl ReferenceProvider for MockProvider {
    fn contig_exists(&self, contig: &str) -> bool {
        self.contigs.contains_key(contig)
    }

    fn get_bases(&self, contig: &str, start: u64, end: u64) -> Result<String, AccessionError> {
        let sequence = self
            .contigs
            .get(contig)
            .ok_or_else(|| AccessionError::UnknownContig {
                contig: contig.to_string(),
            })?;

        // 1-based inclusive range; anything out of range is "no data"
        if start < 1 || end < start || end as usize > sequence.len() {
            return Ok(String::new());
        }
        Ok(sequence[(start - 1) as usize..end as usize].to_string())
    }
}
