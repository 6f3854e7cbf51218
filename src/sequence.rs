//! DNA sequence utilities

/// Reverse-complement a DNA sequence.
///
/// Reverses the character order and substitutes each base with its
/// Watson-Crick complement. Characters outside the A/C/G/T alphabet pass
/// through unchanged, so `N` survives the transform. The empty string maps
/// to itself.
pub fn reverse_complement(sequence: &str) -> String {
    sequence
        .chars()
        .rev()
        .map(|c| match c {
            'A' => 'T',
            'T' => 'A',
            'C' => 'G',
            'G' => 'C',
            other => other,
        })
        .collect()
}
