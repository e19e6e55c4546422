//! Loading of the tab-separated sample files.
//!
//! Each line of a sample file carries tab-separated fields. The first field
//! holds the row identifier and the fourth a space-separated feature vector;
//! the remaining fields are ignored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants::{TSV_FEATURE_FIELD, TSV_ID_FIELD};

/// Result type for dataset operations
pub type Result<T> = std::result::Result<T, DatasetError>;

/// Errors that can occur while loading a sample file
#[derive(Error, Debug)]
pub enum DatasetError {
    /// The file could not be opened or read.
    #[error("Failed to read file {path}: {source}")]
    FileReadError {
        /// Path of the file that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A line had fewer tab-separated fields than the format requires.
    #[error("Line {line} has {found} fields, expected at least {expected}")]
    MissingFields {
        /// One-based line number.
        line: usize,
        /// Minimum number of fields required.
        expected: usize,
        /// Number of fields found.
        found: usize,
    },

    /// A feature vector component could not be parsed as a float.
    #[error("Line {line} has an unparsable feature component: {source}")]
    InvalidComponent {
        /// One-based line number.
        line: usize,
        /// Underlying parse error.
        source: std::num::ParseFloatError,
    },

    /// A feature vector did not have the expected number of components.
    #[error("Line {line} has a feature vector of dimension {found}, expected {expected}")]
    DimensionMismatch {
        /// One-based line number.
        line: usize,
        /// Expected dimensionality.
        expected: usize,
        /// Dimensionality found on the line.
        found: usize,
    },
}

/// A single row of a sample file: an identifier and its feature vector.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRecord {
    /// Row identifier.
    pub id: String,
    /// Feature vector components.
    pub feature: Vec<f32>,
}

/// Reads all feature records from a tab-separated sample file.
///
/// Blank lines are skipped. Every feature vector must have exactly
/// `dimension` components.
pub fn read_tsv(path: &Path, dimension: usize) -> Result<Vec<FeatureRecord>> {
    let file = File::open(path).map_err(|source| DatasetError::FileReadError {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| DatasetError::FileReadError {
            path: path.to_path_buf(),
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }
        records.push(parse_line(&line, idx + 1, dimension)?);
    }
    tracing::debug!("Read {} feature records from {}", records.len(), path.display());
    Ok(records)
}

fn parse_line(line: &str, line_number: usize, dimension: usize) -> Result<FeatureRecord> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() <= TSV_FEATURE_FIELD {
        return Err(DatasetError::MissingFields {
            line: line_number,
            expected: TSV_FEATURE_FIELD + 1,
            found: fields.len(),
        });
    }

    let id = fields[TSV_ID_FIELD].to_string();
    let feature = fields[TSV_FEATURE_FIELD]
        .split(' ')
        .filter(|component| !component.is_empty())
        .map(str::parse::<f32>)
        .collect::<std::result::Result<Vec<f32>, _>>()
        .map_err(|source| DatasetError::InvalidComponent {
            line: line_number,
            source,
        })?;

    if feature.len() != dimension {
        return Err(DatasetError::DimensionMismatch {
            line: line_number,
            expected: dimension,
            found: feature.len(),
        });
    }

    Ok(FeatureRecord { id, feature })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_sample(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes()).expect("Failed to write temp file");
        file
    }

    #[test_log::test]
    fn test_read_tsv_parses_records() {
        let file = write_sample(
            "row-a\tx\ty\t0.1 0.2 0.3 0.4\nrow-b\tx\ty\t1.0 0.0 0.5 0.25\n",
        );
        let records = read_tsv(file.path(), 4).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "row-a");
        assert_eq!(records[0].feature, vec![0.1, 0.2, 0.3, 0.4]);
        assert_eq!(records[1].id, "row-b");
        assert_eq!(records[1].feature, vec![1.0, 0.0, 0.5, 0.25]);
    }

    #[test]
    fn test_read_tsv_skips_blank_lines() {
        let file = write_sample("row-a\tx\ty\t0.5 0.5\n\nrow-b\tx\ty\t0.25 0.75\n");
        let records = read_tsv(file.path(), 2).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_read_tsv_rejects_short_lines() {
        let file = write_sample("row-a\t0.5 0.5\n");
        let err = read_tsv(file.path(), 2).unwrap_err();
        assert!(matches!(err, DatasetError::MissingFields { line: 1, found: 2, .. }));
    }

    #[test]
    fn test_read_tsv_rejects_bad_component() {
        let file = write_sample("row-a\tx\ty\t0.5 banana\n");
        let err = read_tsv(file.path(), 2).unwrap_err();
        assert!(matches!(err, DatasetError::InvalidComponent { line: 1, .. }));
    }

    #[test]
    fn test_read_tsv_rejects_wrong_dimension() {
        let file = write_sample("row-a\tx\ty\t0.5 0.5 0.5\n");
        let err = read_tsv(file.path(), 2).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::DimensionMismatch { line: 1, expected: 2, found: 3 }
        ));
    }

    #[test]
    fn test_read_tsv_missing_file() {
        let err = read_tsv(Path::new("/nonexistent/sample.tsv"), 2).unwrap_err();
        assert!(matches!(err, DatasetError::FileReadError { .. }));
    }

    #[test]
    fn test_display_dimension_mismatch() {
        let err = DatasetError::DimensionMismatch { line: 7, expected: 64, found: 63 };
        assert_eq!(
            err.to_string(),
            "Line 7 has a feature vector of dimension 63, expected 64"
        );
    }
}
