//! Strand-aware allele records and forward-strand normalization
//!
//! dbSNP records store the reference sequence and the allele list on whatever
//! strand the submitter reported. This module parses those records and
//! re-expresses everything on the contig's forward strand, unrolling
//! microsatellite shorthand along the way.

pub mod microsatellite;

use serde::{Deserialize, Serialize};

use crate::error::AccessionError;
use crate::sequence::reverse_complement;

/// Strand a stored sequence is expressed on, relative to the contig's
/// reference orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Forward,
    Reverse,
}

/// Broad classification of a variant record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VariantClass {
    /// Single-base substitution
    Snv,
    /// Multi-base substitution
    Mnv,
    /// Insertion/deletion
    Indel,
    /// Tandem-repeat locus with `(unit)count` shorthand alleles
    Microsatellite,
    Other,
}

/// One raw allele record as stored: a reference sequence and a `/`-separated
/// allele list, each on its own strand.
///
/// The token `"-"` denotes the empty sequence (zero bases), never a literal
/// character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAlleleRecord {
    pub reference_sequence: String,
    pub allele_list_raw: String,
    pub reference_orientation: Orientation,
    pub allele_orientation: Orientation,
    pub variant_class: VariantClass,
}

/// Forward-strand view of a [`RawAlleleRecord`].
///
/// Allele order and duplicates are preserved exactly as in the raw list:
/// callers index into it, so no deduplication or sorting happens here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedAlleleSet {
    /// Forward-strand reference sequence, possibly empty
    pub reference: String,
    /// Forward-strand alleles in input order, entries possibly empty
    pub alleles: Vec<String>,
}

impl RawAlleleRecord {
    pub fn new(
        reference_sequence: &str,
        allele_list_raw: &str,
        reference_orientation: Orientation,
        allele_orientation: Orientation,
        variant_class: VariantClass,
    ) -> Self {
        Self {
            reference_sequence: reference_sequence.to_string(),
            allele_list_raw: allele_list_raw.to_string(),
            reference_orientation,
            allele_orientation,
            variant_class,
        }
    }

    /// Reference sequence expressed on the forward strand.
    ///
    /// `"-"` becomes the empty string; a reverse-oriented sequence is
    /// reverse-complemented.
    pub fn reference_in_forward_strand(&self) -> String {
        let reference = if self.reference_sequence == "-" {
            ""
        } else {
            self.reference_sequence.as_str()
        };
        match self.reference_orientation {
            Orientation::Forward => reference.to_string(),
            Orientation::Reverse => reverse_complement(reference),
        }
    }

    /// Allele list expressed on the forward strand, in input order.
    ///
    /// Microsatellite alleles are unrolled to literal bases before any
    /// strand flip, so reverse complementing operates on real sequence
    /// rather than shorthand. The shorthand pass runs once over the whole
    /// token list because later tokens borrow the unit from earlier ones.
    pub fn alleles_in_forward_strand(&self) -> Result<Vec<String>, AccessionError> {
        let mut tokens: Vec<String> = self
            .allele_list_raw
            .split('/')
            .map(|token| {
                if token == "-" {
                    String::new()
                } else {
                    token.to_string()
                }
            })
            .collect();

        if self.variant_class == VariantClass::Microsatellite {
            tokens = microsatellite::expand_shorthand(&tokens)?;
            tokens = tokens
                .iter()
                .map(|token| microsatellite::unroll(token))
                .collect::<Result<_, _>>()?;
        }

        Ok(tokens
            .into_iter()
            .map(|allele| match self.allele_orientation {
                Orientation::Forward => allele,
                Orientation::Reverse => reverse_complement(&allele),
            })
            .collect())
    }

    /// Normalize the whole record to the forward strand.
    pub fn normalize(&self) -> Result<NormalizedAlleleSet, AccessionError> {
        Ok(NormalizedAlleleSet {
            reference: self.reference_in_forward_strand(),
            alleles: self.alleles_in_forward_strand()?,
        })
    }
}
