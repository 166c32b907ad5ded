//! Process descriptor model.
//!
//! A process record is the immutable input to a simulation run: a display
//! name, the CPU burst it needs, and the clock tick at which it becomes
//! eligible to run.
//!
//! # Time Representation
//! All times are abstract simulation ticks relative to t=0. Unsigned types
//! carry the non-negativity constraint; a zero-length burst is legal and
//! completes instantly.

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// The `name` is for display only. It need not be unique and never
/// influences ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProcessRecord {
    /// Display identifier.
    pub name: String,
    /// CPU burst length (ticks).
    pub duration: u64,
    /// Clock tick at which the process becomes eligible.
    pub arrival: u64,
}

impl ProcessRecord {
    /// Creates a new process record.
    pub fn new(name: impl Into<String>, duration: u64, arrival: u64) -> Self {
        Self {
            name: name.into(),
            duration,
            arrival,
        }
    }

    /// Whether the process has arrived at clock tick `now`.
    #[inline]
    pub fn has_arrived(&self, now: u64) -> bool {
        self.arrival <= now
    }
}
