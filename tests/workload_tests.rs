//! Integration tests for workload files.

use llrb_map::workload::{Execution, Record, Workload, WorkloadError, execute, load, verify};
use llrb_map::tree::RbTreeMap;
use rstest::{fixture, rstest};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_workload(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write workload");
    file.flush().expect("flush workload");
    file
}

#[fixture]
fn ascending_workload() -> NamedTempFile {
    let contents: String = (0..1000)
        .map(|index| format!("key{index:04},value{index}\n"))
        .collect();
    write_workload(&contents)
}

// =============================================================================
// Execute Tests
// =============================================================================

#[rstest]
fn test_execute_small_file() {
    let file = write_workload("b,2\na,1\nc,3\n");
    let Execution {
        records,
        keys,
        height,
        ..
    } = execute(file.path()).unwrap();

    assert_eq!(records, 3);
    assert_eq!(keys, 3);
    assert_eq!(height, 2);
}

#[rstest]
fn test_execute_ascending_file(ascending_workload: NamedTempFile) {
    let execution = execute(ascending_workload.path()).unwrap();
    assert_eq!(execution.records, 1000);
    assert_eq!(execution.keys, 1000);
    assert!(execution.height <= 10);
}

#[rstest]
fn test_execute_repeated_identical_lines() {
    let file = write_workload("a,1\na,1\nb,2\n");
    let execution = execute(file.path()).unwrap();
    assert_eq!(execution.records, 3);
    assert_eq!(execution.keys, 2);
}

#[rstest]
fn test_execute_conflicting_lines_reports_mismatch() {
    let file = write_workload("a,1\nb,2\na,9\n");
    let error = execute(file.path()).unwrap_err();
    assert_eq!(error.to_string(), "value does not match: 9 != 1 (1)");
}

#[rstest]
fn test_execute_malformed_line() {
    let file = write_workload("a,1\nnot-a-record\n");
    let error = execute(file.path()).unwrap_err();
    assert!(matches!(
        error,
        WorkloadError::MalformedLine { line_number: 2, .. }
    ));
}

#[rstest]
fn test_execute_missing_file() {
    let error = execute("/no/such/workload.csv").unwrap_err();
    assert!(matches!(error, WorkloadError::Io(_)));
}

#[rstest]
fn test_execute_empty_file() {
    let file = write_workload("");
    let execution = execute(file.path()).unwrap();
    assert_eq!(execution.records, 0);
    assert_eq!(execution.keys, 0);
    assert_eq!(execution.height, 0);
}

// =============================================================================
// Workload Tests
// =============================================================================

#[rstest]
fn test_open_matches_execute(ascending_workload: NamedTempFile) {
    let workload = Workload::open(ascending_workload.path()).unwrap();
    assert_eq!(workload.len(), 1000);
    assert!(workload.is_consistent());

    let map = workload.build();
    assert_eq!(map.len(), 1000);
    assert_eq!(verify(&map, workload.records().iter().cloned()).unwrap(), 1000);
}

#[rstest]
fn test_load_and_verify_iterators() {
    let records = vec![
        Record::new("b", "2"),
        Record::new("a", "1"),
        Record::new("c", "3"),
    ];
    let mut map = RbTreeMap::new();
    assert_eq!(load(&mut map, records.clone()), 3);
    assert_eq!(verify(&map, records).unwrap(), 3);
    assert_eq!(map.get("b"), Some(&"2".to_string()));
}

#[rstest]
fn test_verify_against_foreign_map() {
    let mut map = RbTreeMap::new();
    map.put("a", "other".to_string());
    let error = verify(&map, [Record::new("a", "1")]).unwrap_err();
    match error {
        WorkloadError::Mismatch {
            key,
            expected,
            actual,
            height,
        } => {
            assert_eq!(key, "a");
            assert_eq!(expected, "1");
            assert_eq!(actual.as_deref(), Some("other"));
            assert_eq!(height, 1);
        }
        other => panic!("unexpected error: {other}"),
    }
}
