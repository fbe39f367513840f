//! Workload files: load a map from `key,value` lines, then verify it.
//!
//! A workload is a text file with one `key,value` record per line. Running a
//! workload puts every record in file order, then reads the file again and
//! checks that the map returns, for every line, the value of that line's key.
//! Since a later line may overwrite an earlier one, the check passes only if
//! the final value of each key is the value of its last line; the
//! [`Workload::is_consistent`] check tells whether a file has that property.
//!
//! # Examples
//!
//! ```rust
//! use llrb_map::tree::RbTreeMap;
//! use llrb_map::workload::{Record, Workload, load, verify};
//!
//! let workload = Workload::new(vec![
//!     Record::new("b", "2"),
//!     Record::new("a", "1"),
//!     Record::new("c", "3"),
//! ]);
//!
//! let mut map = RbTreeMap::new();
//! load(&mut map, workload.records().iter().cloned());
//! verify(&map, workload.records().iter().cloned()).unwrap();
//! ```

mod error;
mod record;

pub use error::WorkloadError;
pub use record::{Record, open_records, read_records};

use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;
use std::time::{Duration, Instant};

use crate::tree::RbTreeMap;

// =============================================================================
// Workload Definition
// =============================================================================

/// An in-memory list of records in file order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Workload {
    records: Vec<Record>,
}

impl Workload {
    /// Wraps an already parsed list of records.
    #[must_use]
    pub const fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Reads every record from `reader`.
    ///
    /// # Errors
    ///
    /// Returns the first I/O error or malformed line.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, WorkloadError> {
        read_records(reader)
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }

    /// Reads every record from the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns the first I/O error or malformed line.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, WorkloadError> {
        open_records(path.as_ref())?
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }

    /// The records in file order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records (lines).
    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the workload has no records.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns `true` if verifying after a full load can succeed.
    ///
    /// That is the case when every key appears with a single value. A key
    /// written twice with different values makes the earlier line fail
    /// verification.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let mut seen: HashMap<&str, &str> = HashMap::with_capacity(self.records.len());
        self.records.iter().all(|record| {
            *seen
                .entry(record.key.as_str())
                .or_insert(record.value.as_str())
                == record.value
        })
    }

    /// Loads this workload into a fresh map.
    #[must_use]
    pub fn build(&self) -> RbTreeMap<String> {
        let mut map = RbTreeMap::new();
        load(&mut map, self.records.iter().cloned());
        map
    }
}

// =============================================================================
// Load / Verify
// =============================================================================

/// Puts every record into `map`, in order.
///
/// Returns the number of records applied.
pub fn load<I>(map: &mut RbTreeMap<String>, records: I) -> usize
where
    I: IntoIterator<Item = Record>,
{
    let mut applied = 0;
    for Record { key, value } in records {
        map.put(key, value);
        applied += 1;
    }
    applied
}

/// Checks every record against `map`, in order.
///
/// Returns the number of records checked.
///
/// # Errors
///
/// Returns [`WorkloadError::Mismatch`] for the first record whose value
/// differs from what the map holds for its key.
pub fn verify<I>(map: &RbTreeMap<String>, records: I) -> Result<usize, WorkloadError>
where
    I: IntoIterator<Item = Record>,
{
    let mut checked = 0;
    for record in records {
        check(map, record)?;
        checked += 1;
    }
    Ok(checked)
}

fn check(map: &RbTreeMap<String>, record: Record) -> Result<(), WorkloadError> {
    let actual = map.get(&record.key);
    if actual == Some(&record.value) {
        return Ok(());
    }
    Err(WorkloadError::Mismatch {
        actual: actual.cloned(),
        height: map.height(),
        key: record.key,
        expected: record.value,
    })
}

// =============================================================================
// Execution
// =============================================================================

/// Outcome of one [`execute`] run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Execution {
    /// Wall time for reading, loading, re-reading and verifying.
    pub elapsed: Duration,
    /// Number of lines in the file.
    pub records: usize,
    /// Number of distinct keys in the map.
    pub keys: usize,
    /// Diagnostic height of the map after loading.
    pub height: usize,
}

/// Runs one full pass over the workload file at `path`.
///
/// The file is read twice: once to load a fresh map, once to verify it.
/// Both reads are included in the elapsed time.
///
/// # Errors
///
/// Returns an I/O error, the first malformed line, or the first mismatch.
pub fn execute(path: impl AsRef<Path>) -> Result<Execution, WorkloadError> {
    let path = path.as_ref();
    let start = Instant::now();

    let mut map = RbTreeMap::new();
    let mut records = 0;
    for record in open_records(path)? {
        let Record { key, value } = record?;
        map.put(key, value);
        records += 1;
    }

    for record in open_records(path)? {
        check(&map, record?)?;
    }

    Ok(Execution {
        elapsed: start.elapsed(),
        records,
        keys: map.len(),
        height: map.height(),
    })
}
