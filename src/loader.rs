//! Line-oriented process input.
//!
//! # Format
//!
//! One process per line, three comma-separated fields:
//!
//! ```text
//! name,duration,arrival
//! A,5,0
//! B,3,2
//! ```
//!
//! Lines are trimmed and blank lines ignored. A line with the wrong field
//! count, or a `duration`/`arrival` that is not a non-negative integer, is
//! dropped with a diagnostic; the remaining lines still load. So is a line
//! that would push the [`TickHorizon`] past `u64::MAX`.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{LoadError, MalformedReason, MalformedRecordError};
use crate::models::{Discipline, ProcessRecord};
use crate::repository::{ProcessRepository, TickHorizon};

/// Outcome of loading one input source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    /// Records from every well-formed line, in file order.
    pub repository: ProcessRepository,
    /// Lines that were dropped.
    pub rejected: Vec<MalformedRecordError>,
}

impl LoadReport {
    /// Whether every non-blank line loaded.
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Where process records come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// An explicit file.
    Path(PathBuf),
    /// The per-discipline file `<TAG>.txt` in the working directory.
    Conventional(Discipline),
}

impl InputSource {
    /// The conventional source for a discipline (`FIFO.txt`, `SJF.txt`).
    pub fn for_discipline(discipline: Discipline) -> Self {
        InputSource::Conventional(discipline)
    }

    /// Resolves the source to a file path.
    pub fn path(&self) -> PathBuf {
        match self {
            InputSource::Path(path) => path.clone(),
            InputSource::Conventional(d) => PathBuf::from(format!("{}.txt", d.tag())),
        }
    }

    /// Loads records from this source.
    pub fn load(&self) -> Result<LoadReport, LoadError> {
        load_path(self.path())
    }
}

/// Loads records from a file.
///
/// # Errors
/// - [`LoadError::NotFound`] if the file does not exist
/// - [`LoadError::Io`] if it cannot be read as UTF-8 text
/// - [`LoadError::Empty`] if it has no non-blank lines
///
/// A file whose lines are all malformed is not an error; it yields an
/// empty repository and a full `rejected` list.
pub fn load_path(path: impl AsRef<Path>) -> Result<LoadReport, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    if text.lines().all(|line| line.trim().is_empty()) {
        return Err(LoadError::Empty(path.to_path_buf()));
    }

    let report = parse_str(&text);
    debug!(
        path = %path.display(),
        loaded = report.repository.len(),
        rejected = report.rejected.len(),
        "input loaded"
    );
    Ok(report)
}

/// Parses records from in-memory text.
pub fn parse_str(text: &str) -> LoadReport {
    let mut records = Vec::new();
    let mut rejected = Vec::new();
    let mut horizon = TickHorizon::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let parsed = parse_line(idx + 1, line).and_then(|record| {
            if horizon.admit(&record) {
                Ok(record)
            } else {
                Err(MalformedRecordError {
                    line: idx + 1,
                    content: line.to_string(),
                    reason: MalformedReason::TickOverflow,
                })
            }
        });
        match parsed {
            Ok(record) => records.push(record),
            Err(err) => {
                warn!(
                    line = err.line,
                    content = %err.content,
                    reason = %err.reason,
                    "skipping malformed record"
                );
                rejected.push(err);
            }
        }
    }

    LoadReport {
        repository: ProcessRepository::from_admitted(records, horizon),
        rejected,
    }
}

/// Parses one trimmed, non-blank line. `line_no` is 1-based.
pub fn parse_line(line_no: usize, line: &str) -> Result<ProcessRecord, MalformedRecordError> {
    let malformed = |reason| MalformedRecordError {
        line: line_no,
        content: line.to_string(),
        reason,
    };

    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let &[name, duration, arrival] = fields.as_slice() else {
        return Err(malformed(MalformedReason::FieldCount(fields.len())));
    };

    let duration: u64 = duration
        .parse()
        .map_err(|_| malformed(MalformedReason::InvalidDuration(duration.to_string())))?;
    let arrival: u64 = arrival
        .parse()
        .map_err(|_| malformed(MalformedReason::InvalidArrival(arrival.to_string())))?;

    Ok(ProcessRecord::new(name, duration, arrival))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Discipline;
    use crate::scheduler;
    use crate::validation::validate_run;
    use std::io::Write;

    #[test]
    fn test_parse_line_ok() {
        let p = parse_line(1, "A,5,0").unwrap();
        assert_eq!(p, ProcessRecord::new("A", 5, 0));
    }

    #[test]
    fn test_parse_line_trims_fields() {
        let p = parse_line(1, "A , 5 ,0").unwrap();
        assert_eq!(p, ProcessRecord::new("A", 5, 0));
    }

    #[test]
    fn test_parse_line_field_count() {
        let err = parse_line(4, "X,5").unwrap_err();
        assert_eq!(err.line, 4);
        assert_eq!(err.content, "X,5");
        assert_eq!(err.reason, MalformedReason::FieldCount(2));

        let err = parse_line(1, "X,5,0,9").unwrap_err();
        assert_eq!(err.reason, MalformedReason::FieldCount(4));
    }

    #[test]
    fn test_parse_line_bad_numbers() {
        let err = parse_line(1, "X,five,0").unwrap_err();
        assert_eq!(err.reason, MalformedReason::InvalidDuration("five".into()));

        let err = parse_line(1, "X,5,-1").unwrap_err();
        assert_eq!(err.reason, MalformedReason::InvalidArrival("-1".into()));
    }

    #[test]
    fn test_parse_str_skips_malformed_and_blank() {
        let report = parse_str("A,5,0\nX,5\n\n   \nB,3,2\nC,2,1\n");
        assert_eq!(report.repository.len(), 3);
        assert_eq!(report.rejected.len(), 1);
        assert_eq!(report.rejected[0].line, 2);
        assert!(!report.is_clean());

        let run = scheduler::run(Discipline::Fifo, &report.repository);
        let timeline: Vec<(&str, u64, u64)> =
            run.iter().map(|r| (r.name.as_str(), r.start, r.end)).collect();
        assert_eq!(timeline, vec![("A", 0, 5), ("C", 5, 7), ("B", 7, 10)]);
    }

    #[test]
    fn test_parse_str_all_malformed_is_empty_repository() {
        let report = parse_str("X,5\nY\n");
        assert!(report.repository.is_empty());
        assert_eq!(report.rejected.len(), 2);
        assert!(scheduler::run(Discipline::Sjf, &report.repository).is_empty());
    }

    #[test]
    fn test_parse_str_rejects_line_past_tick_horizon() {
        let report = parse_str("A,18446744073709551615,0\nB,1,0\n");
        assert_eq!(report.repository.len(), 1);
        assert_eq!(report.rejected.len(), 1);
        assert_eq!(report.rejected[0].line, 2);
        assert_eq!(report.rejected[0].reason, MalformedReason::TickOverflow);

        for d in Discipline::ALL {
            let run = scheduler::run(d, &report.repository);
            assert_eq!((run.records[0].start, run.records[0].end), (0, u64::MAX));
            let processes = report.repository.records();
            assert!(validate_run(processes, &run).is_ok());
        }
    }

    #[test]
    fn test_parse_str_crlf() {
        let report = parse_str("A,5,0\r\nB,3,2\r\n");
        assert!(report.is_clean());
        assert_eq!(report.repository.len(), 2);
    }

    #[test]
    fn test_load_path_ok() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "A,5,0").unwrap();
        writeln!(file, "B,3,2").unwrap();
        writeln!(file, "C,2,4").unwrap();

        let report = load_path(file.path()).unwrap();
        assert!(report.is_clean());
        assert_eq!(report.repository.len(), 3);
    }

    #[test]
    fn test_load_path_missing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("FIFO.txt");
        let err = load_path(&missing).unwrap_err();
        assert!(matches!(err, LoadError::NotFound(p) if p == missing));
    }

    #[test]
    fn test_load_path_empty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "   ").unwrap();
        let err = load_path(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Empty(_)));
    }

    #[test]
    fn test_load_path_not_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0x00, b'\n']).unwrap();
        let err = load_path(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn test_input_source_paths() {
        assert_eq!(
            InputSource::for_discipline(Discipline::Fifo).path(),
            PathBuf::from("FIFO.txt")
        );
        assert_eq!(
            InputSource::for_discipline(Discipline::Sjf).path(),
            PathBuf::from("SJF.txt")
        );
        assert_eq!(
            InputSource::Path(PathBuf::from("jobs.csv")).path(),
            PathBuf::from("jobs.csv")
        );
    }

    #[test]
    fn test_input_source_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "A,4,3").unwrap();
        let source = InputSource::Path(file.path().to_path_buf());
        let report = source.load().unwrap();
        let run = scheduler::run(Discipline::Sjf, &report.repository);
        assert_eq!((run.records[0].start, run.records[0].end), (3, 7));
    }
}
