//! Error types.
//!
//! Fatal errors (`LoadError`, `UnknownDisciplineError`, `ConfigError`) stop an
//! invocation before any simulation runs. `MalformedRecordError` is local: the
//! offending line is dropped and loading continues.

use std::path::PathBuf;
use thiserror::Error;

/// The input source could not supply any records.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The input source does not exist.
    #[error("input source not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The input source exists but could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input source contains no non-blank lines.
    #[error("input source is empty: {}", .0.display())]
    Empty(PathBuf),
}

/// Why a single input line was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    /// The line did not split into exactly three comma-separated fields.
    #[error("expected 3 comma-separated fields, found {0}")]
    FieldCount(usize),

    /// The duration field is not a non-negative integer.
    #[error("duration is not a non-negative integer: '{0}'")]
    InvalidDuration(String),

    /// The arrival field is not a non-negative integer.
    #[error("arrival is not a non-negative integer: '{0}'")]
    InvalidArrival(String),

    /// Admitting the record would push the timeline past the last
    /// representable tick.
    #[error("timeline would end past tick {}", u64::MAX)]
    TickOverflow,
}

/// One input line that was dropped during loading.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line} ('{content}'): {reason}")]
pub struct MalformedRecordError {
    /// 1-based line number.
    pub line: usize,
    /// The trimmed line text.
    pub content: String,
    /// Rejection reason.
    pub reason: MalformedReason,
}

/// A discipline tag outside {FIFO, SJF}.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown discipline '{tag}' (expected FIFO or SJF)")]
pub struct UnknownDisciplineError {
    /// The rejected tag.
    pub tag: String,
}

impl UnknownDisciplineError {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }
}

/// A record set whose timeline cannot be represented in `u64` ticks.
///
/// The latest arrival plus the total burst of every record must not exceed
/// `u64::MAX`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("process '{name}' would end past tick {}", u64::MAX)]
pub struct TickOverflowError {
    /// The first record that did not fit.
    pub name: String,
}

/// Invalid command-line configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing discipline argument")]
    MissingDiscipline,

    #[error(transparent)]
    UnknownDiscipline(#[from] UnknownDisciplineError),

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("option '{0}' requires a value")]
    MissingValue(&'static str),

    #[error("invalid value '{value}' for option '{option}'")]
    InvalidValue { option: &'static str, value: String },

    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
}

/// Crate-level error for a whole load-and-run invocation.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    UnknownDiscipline(#[from] UnknownDisciplineError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    TickOverflow(#[from] TickOverflowError),

    #[error("failed to serialize run: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Convenience result alias.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_display() {
        let err = MalformedRecordError {
            line: 4,
            content: "X,5".into(),
            reason: MalformedReason::FieldCount(2),
        };
        assert_eq!(
            err.to_string(),
            "line 4 ('X,5'): expected 3 comma-separated fields, found 2"
        );
    }

    #[test]
    fn test_unknown_discipline_display() {
        let err = UnknownDisciplineError::new("RR");
        assert_eq!(err.to_string(), "unknown discipline 'RR' (expected FIFO or SJF)");
    }

    #[test]
    fn test_tick_overflow_display() {
        let err = TickOverflowError { name: "B".into() };
        assert_eq!(
            err.to_string(),
            "process 'B' would end past tick 18446744073709551615"
        );
        assert_eq!(
            MalformedReason::TickOverflow.to_string(),
            "timeline would end past tick 18446744073709551615"
        );
        let err: Error = err.into();
        assert!(matches!(err, Error::TickOverflow(_)));
    }

    #[test]
    fn test_error_from_conversions() {
        let err: Error = LoadError::NotFound(PathBuf::from("FIFO.txt")).into();
        assert!(matches!(err, Error::Load(LoadError::NotFound(_))));
        assert_eq!(err.to_string(), "input source not found: FIFO.txt");

        let err: Error = UnknownDisciplineError::new("RR").into();
        assert!(matches!(err, Error::UnknownDiscipline(_)));
    }
}
