//! Shortest-Job-First strategy (non-preemptive, dynamic selection).
//!
//! # Algorithm
//!
//! 1. Seed the pending list with all processes stable-sorted by arrival.
//! 2. At each decision point, consider the pending processes that have
//!    arrived (`arrival <= now`).
//!    - If any have, dispatch the one with the shortest burst. Equal bursts
//!      go to whichever comes first in the pending list. The list only ever
//!      shrinks, so survivors keep their relative order.
//!    - If none have, jump the clock to the earliest pending arrival.
//! 3. Run the chosen process to completion, remove it, repeat.
//!
//! The pending set is an order-preserving `Vec` scanned each step rather
//! than a heap keyed on burst length; a heap would lose the list-order
//! tie-break.
//!
//! # Complexity
//! O(n²): each of n decisions scans the pending list.

use tracing::debug;

use super::{SimClock, Scheduler};
use crate::dispatching::{rules, RuleEngine, SchedulingContext};
use crate::models::{Discipline, ExecutionRecord, ProcessRecord};

/// Non-preemptive Shortest-Job-First scheduler.
///
/// # Example
///
/// ```
/// use u_cpusched::models::ProcessRecord;
/// use u_cpusched::scheduler::{SjfScheduler, Scheduler};
///
/// let processes = vec![
///     ProcessRecord::new("A", 5, 0),
///     ProcessRecord::new("B", 3, 2),
///     ProcessRecord::new("C", 2, 4),
/// ];
/// let records = SjfScheduler::new().schedule(&processes);
/// let order: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
/// assert_eq!(order, vec!["A", "C", "B"]);
/// ```
#[derive(Debug, Clone)]
pub struct SjfScheduler {
    arrival_order: RuleEngine,
    selection: RuleEngine,
}

impl SjfScheduler {
    /// Creates an SJF scheduler.
    pub fn new() -> Self {
        Self {
            arrival_order: RuleEngine::new().with_rule(rules::Fifo),
            selection: RuleEngine::new().with_rule(rules::Spt),
        }
    }
}

impl Default for SjfScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for SjfScheduler {
    fn discipline(&self) -> Discipline {
        Discipline::Sjf
    }

    fn schedule(&self, processes: &[ProcessRecord]) -> Vec<ExecutionRecord> {
        let mut pending: Vec<&ProcessRecord> = self
            .arrival_order
            .sort_indices(processes, &SchedulingContext::at_time(0))
            .into_iter()
            .map(|idx| &processes[idx])
            .collect();

        let mut clock = SimClock::new();
        let mut records = Vec::with_capacity(processes.len());

        while !pending.is_empty() {
            let now = clock.now();
            let ctx = SchedulingContext::at_time(now);

            let chosen = self.selection.select_among(
                &pending,
                (0..pending.len()).filter(|&i| pending[i].has_arrived(now)),
                &ctx,
            );

            match chosen {
                Some(pos) => {
                    let process = pending.remove(pos);
                    records.push(clock.execute(process));
                }
                None => {
                    // Nothing has arrived: idle until the earliest pending arrival.
                    if let Some(next) = pending.iter().map(|p| p.arrival).min() {
                        debug!(now, next, "no arrived process");
                        clock.advance_to(next);
                    }
                }
            }
        }

        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(records: &[ExecutionRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_sjf_picks_shortest_arrived() {
        let processes = vec![
            ProcessRecord::new("A", 5, 0),
            ProcessRecord::new("B", 3, 2),
            ProcessRecord::new("C", 2, 4),
        ];
        let records = SjfScheduler::new().schedule(&processes);

        assert_eq!(names(&records), vec!["A", "C", "B"]);
        assert_eq!((records[0].start, records[0].end), (0, 5));
        assert_eq!((records[1].start, records[1].end), (5, 7));
        assert_eq!((records[2].start, records[2].end), (7, 10));
    }

    #[test]
    fn test_sjf_idle_gap_single() {
        let processes = vec![ProcessRecord::new("A", 4, 3)];
        let records = SjfScheduler::new().schedule(&processes);
        assert_eq!((records[0].start, records[0].end), (3, 7));
    }

    #[test]
    fn test_sjf_idle_gap_jumps_to_earliest_arrival() {
        // After A finishes at 2 nothing has arrived; clock must jump to 6 (C),
        // not 8 (B), even though B is shorter.
        let processes = vec![
            ProcessRecord::new("A", 2, 0),
            ProcessRecord::new("B", 1, 8),
            ProcessRecord::new("C", 5, 6),
        ];
        let records = SjfScheduler::new().schedule(&processes);
        assert_eq!(names(&records), vec!["A", "C", "B"]);
        assert_eq!(records[1].start, 6);
        assert_eq!(records[2].start, 11);
    }

    #[test]
    fn test_sjf_tie_goes_to_first_in_arrival_sorted_list() {
        // Both arrived by t=5 with equal bursts. The pending list is sorted by
        // arrival, so Late_in_file (arrival 1) precedes Early_in_file (arrival 2).
        let processes = vec![
            ProcessRecord::new("Head", 5, 0),
            ProcessRecord::new("Early_in_file", 2, 2),
            ProcessRecord::new("Late_in_file", 2, 1),
        ];
        let records = SjfScheduler::new().schedule(&processes);
        assert_eq!(names(&records), vec!["Head", "Late_in_file", "Early_in_file"]);
    }

    #[test]
    fn test_sjf_tie_equal_arrival_keeps_input_order() {
        let processes = vec![
            ProcessRecord::new("Z", 3, 0),
            ProcessRecord::new("Y", 3, 0),
            ProcessRecord::new("X", 3, 0),
        ];
        let records = SjfScheduler::new().schedule(&processes);
        assert_eq!(names(&records), vec!["Z", "Y", "X"]);
    }

    #[test]
    fn test_sjf_tie_not_broken_by_name() {
        let processes = vec![
            ProcessRecord::new("b", 1, 0),
            ProcessRecord::new("a", 1, 0),
        ];
        let records = SjfScheduler::new().schedule(&processes);
        assert_eq!(names(&records), vec!["b", "a"]);
    }

    #[test]
    fn test_sjf_non_preemptive() {
        // S arrives while L runs; L still runs to completion.
        let processes = vec![
            ProcessRecord::new("L", 10, 0),
            ProcessRecord::new("S", 1, 1),
        ];
        let records = SjfScheduler::new().schedule(&processes);
        assert_eq!((records[0].start, records[0].end), (0, 10));
        assert_eq!((records[1].start, records[1].end), (10, 11));
    }

    #[test]
    fn test_sjf_zero_length_burst_first() {
        let processes = vec![
            ProcessRecord::new("A", 3, 0),
            ProcessRecord::new("Z", 0, 0),
        ];
        let records = SjfScheduler::new().schedule(&processes);
        assert_eq!(names(&records), vec!["Z", "A"]);
        assert_eq!((records[0].start, records[0].end), (0, 0));
        assert_eq!(records[1].start, 0);
    }

    #[test]
    fn test_sjf_empty() {
        assert!(SjfScheduler::new().schedule(&[]).is_empty());
    }
}
