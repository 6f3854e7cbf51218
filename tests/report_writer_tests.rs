//! Accession report writer tests
//!
//! End-to-end coverage of the restart-safe header contract, context-base
//! padding on the way to the report, and batch atomicity.

use std::fs;
use std::path::Path;

use ferro_accession::{
    AccessionError, AccessionReportWriter, AccessionedVariant, CheckpointStore,
    InMemoryCheckpoint, MockProvider, OpenOutcome, SubmittedVariant,
};

const HEADER_LINES: [&str; 2] = [
    "##fileformat=VCFv4.2",
    "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO",
];

fn provider() -> MockProvider {
    // Contig 22 starts TGCGCCTGGC...
    MockProvider::with_test_data()
}

fn snv(contig: &str, start: u64, reference: &str, alternate: &str) -> SubmittedVariant {
    SubmittedVariant::new(
        "GCA_000001405.15",
        9606,
        "PRJEB0001",
        contig,
        start,
        reference,
        alternate,
    )
}

fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_fresh_open_writes_header_once() {
    let dir = tempfile::tempdir().unwrap();
    let report = dir.path().join("report.vcf");
    let mut checkpoint = InMemoryCheckpoint::new();

    let mut writer = AccessionReportWriter::new(&report, provider());
    assert_eq!(writer.open(&mut checkpoint).unwrap(), OpenOutcome::HeaderWritten);
    writer
        .write(&[AccessionedVariant::new(100, snv("22", 5, "C", "T"))])
        .unwrap();
    writer.close().unwrap();

    let lines = read_lines(&report);
    assert_eq!(lines[0], HEADER_LINES[0]);
    assert_eq!(lines[1], HEADER_LINES[1]);
    assert_eq!(lines[2], "22\t5\tss100\tC\tT\t.\t.\t.");
    assert_eq!(lines.len(), 3);
}

#[test]
fn test_reopen_with_flag_set_skips_header() {
    let dir = tempfile::tempdir().unwrap();
    let report = dir.path().join("report.vcf");
    let mut checkpoint = InMemoryCheckpoint::new();

    let mut writer = AccessionReportWriter::new(&report, provider());
    writer.open(&mut checkpoint).unwrap();
    writer
        .write(&[AccessionedVariant::new(1, snv("22", 5, "C", "T"))])
        .unwrap();
    writer.close().unwrap();

    // Second run restores the same checkpoint: no second header, lines
    // appended after the existing content.
    let mut writer = AccessionReportWriter::new(&report, provider());
    assert_eq!(writer.open(&mut checkpoint).unwrap(), OpenOutcome::HeaderSkipped);
    writer
        .write(&[AccessionedVariant::new(2, snv("22", 6, "C", "A"))])
        .unwrap();
    writer.close().unwrap();

    let lines = read_lines(&report);
    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines
            .iter()
            .filter(|line| line.starts_with("##fileformat"))
            .count(),
        1
    );
    assert_eq!(lines[3], "22\t6\tss2\tC\tA\t.\t.\t.");
}

#[test]
fn test_inconsistent_restart_appends_with_warning_outcome() {
    let dir = tempfile::tempdir().unwrap();
    let report = dir.path().join("report.vcf");
    fs::write(&report, "pre-existing content\n").unwrap();

    // Empty checkpoint says the header was never written, yet the file
    // exists: the writer must append, never truncate.
    let mut checkpoint = InMemoryCheckpoint::new();
    let mut writer = AccessionReportWriter::new(&report, provider());
    assert_eq!(
        writer.open(&mut checkpoint).unwrap(),
        OpenOutcome::RestartWarning
    );
    writer.close().unwrap();

    let lines = read_lines(&report);
    assert_eq!(lines[0], "pre-existing content");
    assert_eq!(lines[1], HEADER_LINES[0]);
    assert_eq!(lines[2], HEADER_LINES[1]);
}

#[test]
fn test_open_sets_checkpoint_flag() {
    let dir = tempfile::tempdir().unwrap();
    let mut checkpoint = InMemoryCheckpoint::new();
    assert!(checkpoint.get(ferro_accession::report::HEADER_WRITTEN_KEY).is_none());

    let mut writer = AccessionReportWriter::new(dir.path().join("report.vcf"), provider());
    writer.open(&mut checkpoint).unwrap();
    writer.close().unwrap();

    assert_eq!(
        checkpoint
            .get(ferro_accession::report::HEADER_WRITTEN_KEY)
            .as_deref(),
        Some("true")
    );
}

#[test]
fn test_insertion_gets_context_base() {
    let dir = tempfile::tempdir().unwrap();
    let report = dir.path().join("report.vcf");
    let mut checkpoint = InMemoryCheckpoint::new();

    let mut writer = AccessionReportWriter::new(&report, provider());
    writer.open(&mut checkpoint).unwrap();
    // Insertion of AA at position 5 of contig 22 (TGCGC...): the base at
    // position 4 anchors the record.
    writer
        .write(&[AccessionedVariant::new(7, snv("22", 5, "", "AA"))])
        .unwrap();
    writer.close().unwrap();

    let lines = read_lines(&report);
    assert_eq!(lines[2], "22\t4\tss7\tG\tGAA\t.\t.\t.");
}

#[test]
fn test_insertion_at_position_one_anchors_after() {
    let dir = tempfile::tempdir().unwrap();
    let report = dir.path().join("report.vcf");
    let mut checkpoint = InMemoryCheckpoint::new();

    let mut writer = AccessionReportWriter::new(&report, provider());
    writer.open(&mut checkpoint).unwrap();
    writer
        .write(&[AccessionedVariant::new(8, snv("22", 1, "", "AA"))])
        .unwrap();
    writer.close().unwrap();

    let lines = read_lines(&report);
    assert_eq!(lines[2], "22\t2\tss8\tG\tAAG\t.\t.\t.");
}

#[test]
fn test_unknown_contig_aborts_whole_batch() {
    let dir = tempfile::tempdir().unwrap();
    let report = dir.path().join("report.vcf");
    let mut checkpoint = InMemoryCheckpoint::new();

    let mut writer = AccessionReportWriter::new(&report, provider());
    writer.open(&mut checkpoint).unwrap();

    // First item is fine, second needs padding on a contig the reference
    // does not have: nothing from this batch may reach the file.
    let batch = [
        AccessionedVariant::new(1, snv("22", 5, "C", "T")),
        AccessionedVariant::new(2, snv("7", 5, "", "A")),
    ];
    assert_eq!(
        writer.write(&batch),
        Err(AccessionError::UnknownContig {
            contig: "7".to_string()
        })
    );
    writer.close().unwrap();

    let lines = read_lines(&report);
    assert_eq!(lines.len(), 2, "only the header may be on disk");
}

#[test]
fn test_write_before_open_and_after_close() {
    let dir = tempfile::tempdir().unwrap();
    let report = dir.path().join("report.vcf");
    let mut checkpoint = InMemoryCheckpoint::new();

    let mut writer = AccessionReportWriter::new(&report, provider());
    let item = [AccessionedVariant::new(1, snv("22", 5, "C", "T"))];
    assert_eq!(writer.write(&item), Err(AccessionError::WriterNotOpen));
    assert!(!report.exists());

    writer.open(&mut checkpoint).unwrap();
    writer.close().unwrap();
    assert_eq!(writer.write(&item), Err(AccessionError::WriterNotOpen));
}

#[test]
fn test_custom_accession_prefix() {
    let dir = tempfile::tempdir().unwrap();
    let report = dir.path().join("report.vcf");
    let mut checkpoint = InMemoryCheckpoint::new();

    let mut writer = AccessionReportWriter::new(&report, provider());
    writer.set_accession_prefix("ess");
    writer.open(&mut checkpoint).unwrap();
    writer
        .write(&[AccessionedVariant::new(9, snv("22", 5, "C", "T"))])
        .unwrap();
    writer.close().unwrap();

    let lines = read_lines(&report);
    assert_eq!(lines[2], "22\t5\tess9\tC\tT\t.\t.\t.");
}

#[test]
fn test_multi_batch_writes_accumulate() {
    let dir = tempfile::tempdir().unwrap();
    let report = dir.path().join("report.vcf");
    let mut checkpoint = InMemoryCheckpoint::new();

    let mut writer = AccessionReportWriter::new(&report, provider());
    writer.open(&mut checkpoint).unwrap();
    writer
        .write(&[
            AccessionedVariant::new(1, snv("22", 5, "C", "T")),
            AccessionedVariant::new(2, snv("22", 6, "C", "A")),
        ])
        .unwrap();
    writer
        .write(&[AccessionedVariant::new(3, snv("X", 3, "A", "C"))])
        .unwrap();
    writer.close().unwrap();

    let lines = read_lines(&report);
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[4], "X\t3\tss3\tA\tC\t.\t.\t.");
}
