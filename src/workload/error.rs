//! Errors raised while reading or verifying a workload.

use std::io;

/// Error type for workload operations.
///
/// The map itself never fails; these errors come from the workload file and
/// from the verification pass that compares the map against it.
#[derive(Debug, thiserror::Error)]
pub enum WorkloadError {
    /// The workload file could not be opened or read.
    #[error("failed to read workload: {0}")]
    Io(#[from] io::Error),

    /// A line did not contain a `key,value` pair.
    #[error("line {line_number}: expected `key,value`, found {line:?}")]
    MalformedLine {
        /// One-based line number within the file.
        line_number: usize,
        /// The offending line.
        line: String,
    },

    /// The map returned a different value than the workload expects.
    #[error(
        "value does not match: {} != {} ({})",
        .actual.as_deref().unwrap_or("null"),
        .expected,
        .height
    )]
    Mismatch {
        /// Key that was looked up.
        key: String,
        /// Value from the workload line.
        expected: String,
        /// Value found in the map, `None` if the key was absent.
        actual: Option<String>,
        /// Diagnostic height of the map at the time of the mismatch.
        height: usize,
    },
}
