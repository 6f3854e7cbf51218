//! Context-base padding for empty alleles
//!
//! VCF 4.2 section 1.4.1.4: "the REF and ALT Strings must include the base
//! before the event unless the event occurs at position 1 on the contig in
//! which case it must include the base after the event".

use crate::error::AccessionError;
use crate::reference::ReferenceProvider;

use super::variant::SubmittedVariant;

/// Pad an empty-allele variant with one flanking reference base.
///
/// Returns a new variant with the shifted start and padded alleles; the
/// input is untouched. Fails with [`AccessionError::UnknownContig`] when the
/// contig is missing from the reference (a configuration mismatch, not
/// retried) and with [`AccessionError::EmptyContextBase`] when the provider
/// returns no base for an in-range position.
pub fn add_context_base<P: ReferenceProvider>(
    variant: &SubmittedVariant,
    provider: &P,
) -> Result<SubmittedVariant, AccessionError> {
    if !provider.contig_exists(&variant.contig) {
        return Err(AccessionError::UnknownContig {
            contig: variant.contig.clone(),
        });
    }

    let new_start = if variant.start == 1 {
        variant.start + 1
    } else {
        variant.start - 1
    };
    let context_base = provider.get_bases(&variant.contig, new_start, new_start)?;
    if context_base.is_empty() {
        return Err(AccessionError::EmptyContextBase {
            contig: variant.contig.clone(),
            position: new_start,
        });
    }

    let (reference, alternate) = if variant.start == 1 {
        // Event at the first position of the contig: the anchor base follows
        (
            format!("{}{}", variant.reference_allele, context_base),
            format!("{}{}", variant.alternate_allele, context_base),
        )
    } else {
        (
            format!("{}{}", context_base, variant.reference_allele),
            format!("{}{}", context_base, variant.alternate_allele),
        )
    };

    Ok(SubmittedVariant {
        start: new_start,
        reference_allele: reference,
        alternate_allele: alternate,
        ..variant.clone()
    })
}
