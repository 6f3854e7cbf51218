//! Error types for ferro-accession
//!
//! One flat error enum covers the whole crate. Variants are `Clone` and
//! `PartialEq` so tests can assert on exact error values; the `Io` variant
//! carries the rendered message rather than the source error for the same
//! reason.

use thiserror::Error;

/// Main error type for ferro-accession operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessionError {
    /// Microsatellite shorthand that cannot be expanded: a bare repeat count
    /// with no carried unit, or an unparseable count
    #[error("Malformed repeat notation in allele '{token}': {msg}")]
    MalformedRepeat { token: String, msg: String },

    /// The reference provider has no such contig
    #[error("Contig '{contig}' does not appear in the reference")]
    UnknownContig { contig: String },

    /// The provider reported the contig exists but returned no bases for an
    /// in-range position
    #[error("Reference returned no bases for {contig}:{position}")]
    EmptyContextBase { contig: String, position: u64 },

    /// A write was attempted before `open()` or after `close()`
    #[error(
        "The accession report was not opened properly. \
         Hint: check that the code called AccessionReportWriter::open"
    )]
    WriterNotOpen,

    /// IO error (for file operations)
    #[error("IO error: {msg}")]
    Io { msg: String },
}

impl From<std::io::Error> for AccessionError {
    fn from(err: std::io::Error) -> Self {
        AccessionError::Io {
            msg: err.to_string(),
        }
    }
}
