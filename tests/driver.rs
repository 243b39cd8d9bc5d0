//! End-to-end file runs through the driver

use std::fs;
use std::path::Path;

use eytzinger_layout::driver::{run, DriverConfig, DriverError};
use eytzinger_layout::{Placeholder, RecordError, Strategy};
use tempfile::tempdir;

mod common;

fn config_in(dir: &Path) -> DriverConfig {
    DriverConfig {
        input: dir.join("grapheme_break_data.txt"),
        output: dir.join("grapheme_break_data_lo.txt"),
        ..DriverConfig::default()
    }
}

#[test]
fn writes_placeholder_then_heap_order() {
    let dir = tempdir().expect("create temp dir");
    let config = config_in(dir.path());
    fs::write(&config.input, "r1\nr2\nr3\nr4\nr5\n").unwrap();

    let summary = run(&config).expect("driver run succeeds");

    let written = fs::read_to_string(&config.output).unwrap();
    assert_eq!(written, "0\nr4\nr2\nr5\nr1\nr3\n");
    assert_eq!(summary.records, 5);
    assert_eq!(summary.height, 3);
    assert_eq!(
        summary.fingerprint,
        blake3::hash(written.as_bytes()).to_hex().to_string()
    );
}

#[test]
fn empty_input_yields_single_placeholder_line() {
    let dir = tempdir().unwrap();
    let config = config_in(dir.path());
    fs::write(&config.input, "").unwrap();

    let summary = run(&config).unwrap();

    assert_eq!(fs::read_to_string(&config.output).unwrap(), "0\n");
    assert_eq!(summary.records, 0);
    assert_eq!(summary.height, 0);
}

#[test]
fn crlf_and_missing_final_newline_are_tolerated() {
    let dir = tempdir().unwrap();
    let config = config_in(dir.path());
    fs::write(&config.input, "a\r\nb\r\nc").unwrap();

    run(&config).unwrap();

    assert_eq!(fs::read_to_string(&config.output).unwrap(), "0\nb\na\nc\n");
}

#[test]
fn lone_carriage_return_separates_records() {
    let dir = tempdir().unwrap();
    let config = config_in(dir.path());
    fs::write(&config.input, "a\rb\rc\r").unwrap();

    let summary = run(&config).unwrap();

    assert_eq!(summary.records, 3);
    assert_eq!(fs::read_to_string(&config.output).unwrap(), "0\nb\na\nc\n");
}

#[test]
fn records_are_opaque_text() {
    let dir = tempdir().unwrap();
    let config = config_in(dir.path());
    let records = [
        "{0x0000, 0x0009, CONTROL},",
        "{0x000A, 0x000A, LF},",
        "",
        "  {0x000D, 0x000D, CR},  ",
    ];
    fs::write(&config.input, records.join("\n")).unwrap();

    run(&config).unwrap();

    let written = fs::read_to_string(&config.output).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines, vec!["0", records[2], records[1], records[3], records[0]]);
}

#[test]
fn missing_input_fails_without_output() {
    let dir = tempdir().unwrap();
    let config = config_in(dir.path());

    let err = run(&config).expect_err("missing input must fail");

    assert!(matches!(
        err,
        DriverError::Records(RecordError::Read { ref path, .. }) if path == &config.input
    ));
    assert!(!config.output.exists());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn record_equal_to_placeholder_is_laid_out() {
    let dir = tempdir().unwrap();
    let config = config_in(dir.path());
    fs::write(&config.input, "0\n1\n2\n").unwrap();
    fs::write(&config.output, "previous contents\n").unwrap();

    let summary = run(&config).expect("readable input always succeeds");

    assert_eq!(summary.records, 3);
    assert_eq!(summary.placeholder_collisions, 1);
    assert_eq!(fs::read_to_string(&config.output).unwrap(), "0\n1\n0\n2\n");
}

#[test]
fn blank_lines_with_empty_placeholder_still_succeed() {
    let dir = tempdir().unwrap();
    let config = DriverConfig {
        placeholder: Placeholder::new("").unwrap(),
        ..config_in(dir.path())
    };
    fs::write(&config.input, "\n").unwrap();

    let summary = run(&config).expect("blank record is a valid record");

    assert_eq!(summary.records, 1);
    assert_eq!(summary.placeholder_collisions, 1);
    assert_eq!(fs::read_to_string(&config.output).unwrap(), "\n\n");
}

#[test]
fn custom_placeholder_allows_zero_records() {
    let dir = tempdir().unwrap();
    let config = DriverConfig {
        placeholder: Placeholder::new("<none>").unwrap(),
        strategy: Strategy::Recursive,
        ..config_in(dir.path())
    };
    fs::write(&config.input, "0\n1\n2\n").unwrap();

    let summary = run(&config).unwrap();

    assert_eq!(summary.placeholder_collisions, 0);
    assert_eq!(
        fs::read_to_string(&config.output).unwrap(),
        "<none>\n1\n0\n2\n"
    );
}

#[test]
fn unwritable_destination_reports_write_error() {
    let dir = tempdir().unwrap();
    let config = DriverConfig {
        output: dir.path().join("missing-dir").join("out.txt"),
        ..config_in(dir.path())
    };
    fs::write(&config.input, "a\n").unwrap();

    let err = run(&config).expect_err("write into missing directory must fail");

    assert!(matches!(
        err,
        DriverError::Records(RecordError::Write { .. })
    ));
    assert!(!config.output.exists());
}

#[test]
fn output_reads_back_in_sorted_order() {
    let dir = tempdir().unwrap();
    let config = config_in(dir.path());
    let records: Vec<String> = (0..100).map(|i| format!("record-{i:03}")).collect();
    fs::write(&config.input, records.join("\n")).unwrap();

    run(&config).unwrap();

    let slots = eytzinger_layout::records::read_records(&config.output).unwrap();
    assert_eq!(slots.len(), records.len() + 1);
    assert_eq!(slots[0], "0");

    let mut restored = vec![String::new(); records.len()];
    let positions = eytzinger_layout::layout::InOrderPositions::new(records.len());
    for (rank, node) in positions.enumerate() {
        restored[rank] = slots[node.position()].clone();
    }
    assert_eq!(restored, records);

    let layout = eytzinger_layout::EytzingerLayout::new(&records, "0".to_string());
    let key = "record-042".to_string();
    assert_eq!(common::lower_bound_rank(&layout, &key), 42);
}
