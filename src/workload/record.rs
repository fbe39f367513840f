//! Parsing of `key,value` workload lines.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::WorkloadError;

/// A single `key,value` line of a workload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    /// The key field.
    pub key: String,
    /// The value field.
    pub value: String,
}

impl Record {
    /// Creates a record from its two fields.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Parses one workload line.
    ///
    /// Every comma separates fields; commas cannot be escaped. Trailing empty
    /// fields are dropped, then the first field is the key and the second the
    /// value. Anything after the second field is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`WorkloadError::MalformedLine`] if fewer than two fields remain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use llrb_map::workload::Record;
    ///
    /// assert_eq!(Record::parse(1, "k,v").unwrap(), Record::new("k", "v"));
    /// assert_eq!(Record::parse(1, "k,v,extra").unwrap(), Record::new("k", "v"));
    /// assert!(Record::parse(1, "k,").is_err());
    /// ```
    pub fn parse(line_number: usize, line: &str) -> Result<Self, WorkloadError> {
        let mut fields: Vec<&str> = line.split(',').collect();
        while fields.last().is_some_and(|field| field.is_empty()) {
            fields.pop();
        }

        match fields.as_slice() {
            [key, value, ..] => Ok(Self::new(*key, *value)),
            _ => Err(WorkloadError::MalformedLine {
                line_number,
                line: line.to_string(),
            }),
        }
    }
}

/// Streams records out of a reader, one per line.
///
/// # Errors
///
/// Stops at the first I/O error or malformed line.
pub fn read_records<R: BufRead>(
    reader: R,
) -> impl Iterator<Item = Result<Record, WorkloadError>> {
    reader.lines().enumerate().map(|(index, line)| {
        let line = line?;
        Record::parse(index + 1, &line)
    })
}

/// Opens `path` and streams its records.
///
/// # Errors
///
/// Returns [`WorkloadError::Io`] if the file cannot be opened.
pub fn open_records(
    path: &Path,
) -> Result<impl Iterator<Item = Result<Record, WorkloadError>>, WorkloadError> {
    let file = File::open(path)?;
    Ok(read_records(BufReader::new(file)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Cursor;

    #[rstest]
    #[case("a,1", "a", "1")]
    #[case("a,1,2", "a", "1")]
    #[case("a,,2", "a", "")]
    #[case(",x", "", "x")]
    #[case("key with spaces,value", "key with spaces", "value")]
    fn test_parse_valid(#[case] line: &str, #[case] key: &str, #[case] value: &str) {
        assert_eq!(Record::parse(1, line).unwrap(), Record::new(key, value));
    }

    #[rstest]
    #[case("")]
    #[case("lonely")]
    #[case("k,")]
    #[case("k,,")]
    fn test_parse_malformed(#[case] line: &str) {
        let error = Record::parse(7, line).unwrap_err();
        assert!(matches!(
            error,
            WorkloadError::MalformedLine { line_number: 7, .. }
        ));
    }

    #[rstest]
    fn test_read_records_numbers_lines_from_one() {
        let input = Cursor::new("a,1\nb,2\nbroken\n");
        let results: Vec<_> = read_records(input).collect();

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap(), &Record::new("a", "1"));
        assert_eq!(results[1].as_ref().unwrap(), &Record::new("b", "2"));
        assert!(matches!(
            results[2],
            Err(WorkloadError::MalformedLine { line_number: 3, .. })
        ));
    }

    #[rstest]
    fn test_open_records_missing_file() {
        let result = open_records(Path::new("/definitely/not/here.csv"));
        assert!(matches!(result, Err(WorkloadError::Io(_))));
    }
}
