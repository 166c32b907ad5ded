//! Integrity checks for simulation runs.
//!
//! Verifies that a run is a legal single-CPU, non-preemptive timeline for
//! its input. Detects:
//! - Processes missing from the run, or present more than once
//! - Records starting before their process arrived
//! - Records whose `end` is not `start + duration`
//! - Overlapping execution intervals

use std::collections::HashMap;

use crate::models::{ProcessRecord, SimulationRun};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// An input process has no execution record.
    MissingProcess,
    /// An execution record matches no remaining input process.
    UnexpectedRecord,
    /// A record starts before its process arrived.
    StartedBeforeArrival,
    /// A record's `end` differs from `start + duration`.
    DurationMismatch,
    /// Two records occupy the CPU at the same time.
    Overlap,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a run against the processes it was produced from.
///
/// Checks:
/// 1. Every input process appears exactly once (matched on name, duration,
///    and arrival, so duplicate descriptors must appear as often as they
///    were input)
/// 2. `start >= arrival` for every record
/// 3. `end == start + duration` for every record
/// 4. No two records overlap when ordered by start
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_run(processes: &[ProcessRecord], run: &SimulationRun) -> ValidationResult {
    let mut errors = Vec::new();

    // Multiset of expected descriptors
    let mut expected: HashMap<ProcessRecord, usize> = HashMap::new();
    for p in processes {
        *expected.entry(p.clone()).or_insert(0) += 1;
    }

    for record in run {
        let key = record.process();
        match expected.get_mut(&key) {
            Some(count) if *count > 0 => *count -= 1,
            _ => errors.push(ValidationError::new(
                ValidationErrorKind::UnexpectedRecord,
                format!(
                    "Record '{}' (duration {}, arrival {}) matches no unscheduled process",
                    record.name, record.duration, record.arrival
                ),
            )),
        }

        if record.start < record.arrival {
            errors.push(ValidationError::new(
                ValidationErrorKind::StartedBeforeArrival,
                format!(
                    "Record '{}' starts at {} before arrival {}",
                    record.name, record.start, record.arrival
                ),
            ));
        }

        if record.start.checked_add(record.duration) != Some(record.end) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DurationMismatch,
                format!(
                    "Record '{}' ends at {}, expected {} + {}",
                    record.name, record.end, record.start, record.duration
                ),
            ));
        }
    }

    let mut missing: Vec<(&ProcessRecord, usize)> = expected
        .iter()
        .filter(|(_, count)| **count > 0)
        .map(|(p, count)| (p, *count))
        .collect();
    missing.sort_by(|a, b| a.0.name.cmp(&b.0.name));
    for (p, count) in missing {
        errors.push(ValidationError::new(
            ValidationErrorKind::MissingProcess,
            format!("Process '{}' missing from run ({count} unscheduled)", p.name),
        ));
    }

    for pair in run.by_start().windows(2) {
        let (prev, next) = (pair[0], pair[1]);
        if next.start < prev.end {
            errors.push(ValidationError::new(
                ValidationErrorKind::Overlap,
                format!(
                    "Record '{}' starts at {} while '{}' runs until {}",
                    next.name, next.start, prev.name, prev.end
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
