//! Built-in dispatching rules.
//!
//! - **Queue**: FIFO (arrival order)
//! - **Time-based**: SPT (shortest burst)
//!
//! # Score Convention
//! All rules return lower scores for higher priority processes.
//!
//! # References
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

use super::{DispatchingRule, RuleScore, SchedulingContext};
use crate::models::ProcessRecord;

/// First In First Out.
///
/// Prioritizes processes by arrival tick.
#[derive(Debug, Clone, Copy)]
pub struct Fifo;

impl DispatchingRule for Fifo {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, process: &ProcessRecord, _context: &SchedulingContext) -> RuleScore {
        process.arrival
    }

    fn description(&self) -> &'static str {
        "First In First Out"
    }
}

/// Shortest Processing Time.
///
/// Prioritizes processes with shorter CPU bursts. Applied to the arrived
/// set at each decision point this is non-preemptive SJF.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on single machine.
#[derive(Debug, Clone, Copy)]
pub struct Spt;

impl DispatchingRule for Spt {
    fn name(&self) -> &'static str {
        "SPT"
    }

    fn evaluate(&self, process: &ProcessRecord, _context: &SchedulingContext) -> RuleScore {
        process.duration
    }

    fn description(&self) -> &'static str {
        "Shortest Processing Time"
    }
}
