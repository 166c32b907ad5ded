//! Simulated single-CPU clock.

use tracing::debug;

use crate::models::{ExecutionRecord, ProcessRecord};

/// A monotonically non-decreasing simulation clock driving one CPU.
///
/// Starts at t=0. Idle gaps are not recorded; they show up only as the
/// distance between one record's `end` and the next record's `start`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimClock {
    now: u64,
}

impl SimClock {
    /// Creates a clock at t=0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current tick.
    #[inline]
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Moves the clock forward to `t`. Never moves it backwards.
    ///
    /// Returns the length of the idle gap that was skipped.
    pub fn advance_to(&mut self, t: u64) -> u64 {
        if t <= self.now {
            return 0;
        }
        let idle = t - self.now;
        debug!(from = self.now, to = t, idle, "cpu idle");
        self.now = t;
        idle
    }

    /// Runs `process` to completion starting now.
    ///
    /// Waits for the process to arrive first if the clock is behind its
    /// arrival tick.
    pub fn execute(&mut self, process: &ProcessRecord) -> ExecutionRecord {
        self.advance_to(process.arrival);
        let record = ExecutionRecord::started_at(process, self.now);
        debug!(
            name = %record.name,
            start = record.start,
            end = record.end,
            "dispatched"
        );
        self.now = record.end;
        record
    }
}
