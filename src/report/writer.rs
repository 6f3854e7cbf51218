//! Restart-safe accession report writer
//!
//! The writer always opens its output in append mode and writes the VCF
//! header at most once per logical report across restarts, driven by a flag
//! in an external checkpoint store. Batch writes are all-or-nothing: every
//! line of a batch is built before anything reaches the file.

use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::AccessionError;
use crate::reference::ReferenceProvider;

use super::context::add_context_base;
use super::line::ReportRecord;
use super::variant::AccessionedVariant;

/// Checkpoint key under which the header flag is persisted
pub const HEADER_WRITTEN_KEY: &str = "accession_report.header_written";

/// Stored as a string because checkpoint stores are string-valued
const HEADER_WRITTEN_VALUE: &str = "true";

const DEFAULT_ACCESSION_PREFIX: &str = "ss";

/// Key/value store persisted and restored by the surrounding batch/restart
/// infrastructure.
///
/// This writer only ever reads and writes one boolean-like flag, under
/// [`HEADER_WRITTEN_KEY`].
pub trait CheckpointStore {
    fn get(&self, key: &str) -> Option<String>;
    fn put(&mut self, key: &str, value: &str);
}

/// In-memory checkpoint store for tests and single-run pipelines
#[derive(Debug, Clone, Default)]
pub struct InMemoryCheckpoint {
    values: HashMap<String, String>,
}

impl InMemoryCheckpoint {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CheckpointStore for InMemoryCheckpoint {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn put(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// How an [`AccessionReportWriter::open`] call went
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    /// Fresh target: the header was written on this open
    HeaderWritten,
    /// The checkpoint says the header is already on disk; nothing emitted
    HeaderSkipped,
    /// The output file existed although the checkpoint said the header was
    /// never written. The writer appends anyway, so the report may end up
    /// with two non-contiguous header sections.
    RestartWarning,
}

/// Appends accessioned variants to a VCF report file, writing the header at
/// most once across restarts.
///
/// Exactly one writer may hold the output handle for a given report; all
/// writes to that file go through that instance.
pub struct AccessionReportWriter<P: ReferenceProvider> {
    output: PathBuf,
    provider: P,
    accession_prefix: String,
    writer: Option<BufWriter<File>>,
}

impl<P: ReferenceProvider> AccessionReportWriter<P> {
    /// Create a writer for the given output path. No file is touched until
    /// [`open`](Self::open).
    pub fn new(output: impl AsRef<Path>, provider: P) -> Self {
        Self {
            output: output.as_ref().to_path_buf(),
            provider,
            accession_prefix: DEFAULT_ACCESSION_PREFIX.to_string(),
            writer: None,
        }
    }

    pub fn accession_prefix(&self) -> &str {
        &self.accession_prefix
    }

    /// Set the identifier prefix. Call before the first write.
    pub fn set_accession_prefix(&mut self, prefix: &str) {
        self.accession_prefix = prefix.to_string();
    }

    /// Open the report for appending.
    ///
    /// Never truncates, so re-opening after a crash keeps previously written
    /// lines. The header goes out only when the checkpoint says it was never
    /// written; the flag is set back into the checkpoint afterwards. An
    /// existing file combined with an unset flag is an inconsistent restart:
    /// it is logged, reported in the outcome, and appended to anyway.
    pub fn open(
        &mut self,
        checkpoint: &mut dyn CheckpointStore,
    ) -> Result<OpenOutcome, AccessionError> {
        let header_already_written =
            checkpoint.get(HEADER_WRITTEN_KEY).as_deref() == Some(HEADER_WRITTEN_VALUE);
        let inconsistent_restart = self.output.exists() && !header_already_written;
        if inconsistent_restart {
            log::warn!(
                "According to the job's checkpoint, the accession report {} should not exist, \
                 but it does. The writer will append to the file, but it's possible that there \
                 will be 2 non-contiguous header sections in the report. This can happen if the \
                 checkpoint was not properly restored.",
                self.output.display()
            );
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.output)?;
        let mut writer = BufWriter::new(file);

        if !header_already_written {
            writeln!(writer, "##fileformat=VCFv4.2")?;
            writeln!(writer, "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO")?;
            writer.flush()?;
            checkpoint.put(HEADER_WRITTEN_KEY, HEADER_WRITTEN_VALUE);
        }
        self.writer = Some(writer);

        Ok(if inconsistent_restart {
            OpenOutcome::RestartWarning
        } else if header_already_written {
            OpenOutcome::HeaderSkipped
        } else {
            OpenOutcome::HeaderWritten
        })
    }

    /// Append one batch of accessioned variants and flush.
    ///
    /// Every line of the batch is built before anything is written, so a
    /// failure (unknown contig, missing context base) leaves the report
    /// untouched.
    pub fn write(&mut self, accessions: &[AccessionedVariant]) -> Result<(), AccessionError> {
        if self.writer.is_none() {
            return Err(AccessionError::WriterNotOpen);
        }

        let mut batch = String::new();
        for accessioned in accessions {
            let record = self.build_record(accessioned)?;
            batch.push_str(&record.to_string());
            batch.push('\n');
        }

        let writer = self.writer.as_mut().ok_or(AccessionError::WriterNotOpen)?;
        writer.write_all(batch.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    fn build_record(
        &self,
        accessioned: &AccessionedVariant,
    ) -> Result<ReportRecord, AccessionError> {
        let variant = &accessioned.variant;
        if variant.needs_context_base() {
            let padded = add_context_base(variant, &self.provider)?;
            Ok(ReportRecord::new(
                &self.accession_prefix,
                accessioned.accession,
                &padded,
            ))
        } else {
            Ok(ReportRecord::new(
                &self.accession_prefix,
                accessioned.accession,
                variant,
            ))
        }
    }

    /// Flush and release the output handle. A second close surfaces
    /// [`AccessionError::WriterNotOpen`]; it is not expected under normal
    /// operation.
    pub fn close(&mut self) -> Result<(), AccessionError> {
        let mut writer = self.writer.take().ok_or(AccessionError::WriterNotOpen)?;
        writer.flush()?;
        Ok(())
    }
}
