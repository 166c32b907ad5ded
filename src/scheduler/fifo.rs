//! First-In-First-Out strategy.
//!
//! # Algorithm
//!
//! 1. Stable-sort processes by arrival tick (equal arrivals keep input order).
//! 2. Run them back to back in that fixed order, letting the clock jump
//!    forward whenever the next process has not arrived yet.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the simulation.

use super::{SimClock, Scheduler};
use crate::dispatching::{rules, RuleEngine, SchedulingContext};
use crate::models::{Discipline, ExecutionRecord, ProcessRecord};

/// Non-preemptive FIFO (first-come-first-served) scheduler.
///
/// # Example
///
/// ```
/// use u_cpusched::models::ProcessRecord;
/// use u_cpusched::scheduler::{FifoScheduler, Scheduler};
///
/// let processes = vec![
///     ProcessRecord::new("A", 5, 0),
///     ProcessRecord::new("B", 3, 2),
///     ProcessRecord::new("C", 2, 1),
/// ];
/// let records = FifoScheduler::new().schedule(&processes);
/// let order: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
/// assert_eq!(order, vec!["A", "C", "B"]);
/// assert_eq!(records[2].end, 10);
/// ```
#[derive(Debug, Clone)]
pub struct FifoScheduler {
    rule_engine: RuleEngine,
}

impl FifoScheduler {
    /// Creates a FIFO scheduler.
    pub fn new() -> Self {
        Self {
            rule_engine: RuleEngine::new().with_rule(rules::Fifo),
        }
    }
}

impl Default for FifoScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for FifoScheduler {
    fn discipline(&self) -> Discipline {
        Discipline::Fifo
    }

    fn schedule(&self, processes: &[ProcessRecord]) -> Vec<ExecutionRecord> {
        let order = self
            .rule_engine
            .sort_indices(processes, &SchedulingContext::at_time(0));

        let mut clock = SimClock::new();
        order
            .into_iter()
            .map(|idx| clock.execute(&processes[idx]))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(records: &[ExecutionRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_fifo_orders_by_arrival() {
        let processes = vec![
            ProcessRecord::new("A", 5, 0),
            ProcessRecord::new("B", 3, 2),
            ProcessRecord::new("C", 2, 1),
        ];
        let records = FifoScheduler::new().schedule(&processes);

        assert_eq!(names(&records), vec!["A", "C", "B"]);
        assert_eq!((records[0].start, records[0].end), (0, 5));
        assert_eq!((records[1].start, records[1].end), (5, 7));
        assert_eq!((records[2].start, records[2].end), (7, 10));
    }

    #[test]
    fn test_fifo_ties_keep_input_order() {
        let processes = vec![
            ProcessRecord::new("second_in_file", 1, 3),
            ProcessRecord::new("X", 9, 3),
            ProcessRecord::new("Y", 1, 3),
        ];
        let records = FifoScheduler::new().schedule(&processes);
        assert_eq!(names(&records), vec!["second_in_file", "X", "Y"]);
    }

    #[test]
    fn test_fifo_idle_gap() {
        let processes = vec![
            ProcessRecord::new("A", 2, 0),
            ProcessRecord::new("B", 1, 10),
        ];
        let records = FifoScheduler::new().schedule(&processes);
        assert_eq!((records[0].start, records[0].end), (0, 2));
        assert_eq!((records[1].start, records[1].end), (10, 11));
    }

    #[test]
    fn test_fifo_ignores_duration() {
        let processes = vec![
            ProcessRecord::new("long", 100, 0),
            ProcessRecord::new("short", 1, 0),
        ];
        let records = FifoScheduler::new().schedule(&processes);
        assert_eq!(names(&records), vec!["long", "short"]);
        assert_eq!(records[1].start, 100);
    }

    #[test]
    fn test_fifo_zero_length_bursts() {
        let processes = vec![
            ProcessRecord::new("Z1", 0, 0),
            ProcessRecord::new("Z2", 0, 0),
            ProcessRecord::new("A", 3, 0),
        ];
        let records = FifoScheduler::new().schedule(&processes);
        assert_eq!((records[0].start, records[0].end), (0, 0));
        assert_eq!((records[1].start, records[1].end), (0, 0));
        assert_eq!((records[2].start, records[2].end), (0, 3));
    }

    #[test]
    fn test_fifo_deterministic() {
        let processes = vec![
            ProcessRecord::new("A", 4, 2),
            ProcessRecord::new("B", 1, 2),
            ProcessRecord::new("C", 2, 0),
        ];
        let scheduler = FifoScheduler::new();
        assert_eq!(scheduler.schedule(&processes), scheduler.schedule(&processes));
    }

    #[test]
    fn test_fifo_empty() {
        assert!(FifoScheduler::new().schedule(&[]).is_empty());
    }
}
