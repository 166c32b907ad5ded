//! Execution record and simulation run (solution) models.
//!
//! A simulation run is the ordered timeline one discipline produces over one
//! repository snapshot: exactly one execution record per input process, in
//! the order the processes were dispatched.

use serde::{Deserialize, Serialize};

use super::{Discipline, ProcessRecord};

/// When and for how long one process held the CPU.
///
/// Invariants: `start >= arrival` and `end == start + duration`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionRecord {
    /// Display identifier (copied from the process).
    pub name: String,
    /// Burst length (ticks).
    pub duration: u64,
    /// Arrival tick.
    pub arrival: u64,
    /// Tick at which the process started executing.
    pub start: u64,
    /// Tick at which the process finished.
    pub end: u64,
}

impl ExecutionRecord {
    /// Records that `process` ran from `start` to completion.
    ///
    /// Exact for every run over a `ProcessRepository`, whose tick horizon
    /// keeps `start + duration` within `u64`; saturates otherwise.
    pub fn started_at(process: &ProcessRecord, start: u64) -> Self {
        Self {
            name: process.name.clone(),
            duration: process.duration,
            arrival: process.arrival,
            start,
            end: start.saturating_add(process.duration),
        }
    }

    /// Time spent eligible but not running (`start - arrival`).
    #[inline]
    pub fn waiting_time(&self) -> u64 {
        self.start.saturating_sub(self.arrival)
    }

    /// Time from arrival to completion (`end - arrival`).
    #[inline]
    pub fn turnaround_time(&self) -> u64 {
        self.end.saturating_sub(self.arrival)
    }

    /// The process descriptor this record was produced from.
    pub fn process(&self) -> ProcessRecord {
        ProcessRecord::new(self.name.clone(), self.duration, self.arrival)
    }
}

/// The ordered timeline produced by one discipline over one repository.
///
/// Owned by the caller that requested it; a new run never reads state left
/// behind by a previous one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRun {
    /// Discipline that produced this run.
    pub discipline: Discipline,
    /// Execution records in dispatch order.
    pub records: Vec<ExecutionRecord>,
}

impl SimulationRun {
    /// Creates a run from already-ordered records.
    pub fn new(discipline: Discipline, records: Vec<ExecutionRecord>) -> Self {
        Self {
            discipline,
            records,
        }
    }

    /// Creates an empty run.
    pub fn empty(discipline: Discipline) -> Self {
        Self::new(discipline, Vec::new())
    }

    /// Number of execution records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the run contains no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates records in dispatch order.
    pub fn iter(&self) -> std::slice::Iter<'_, ExecutionRecord> {
        self.records.iter()
    }

    /// Latest completion tick across all records (0 when empty).
    pub fn makespan(&self) -> u64 {
        self.records.iter().map(|r| r.end).max().unwrap_or(0)
    }

    /// Total ticks the CPU spent executing (saturating).
    pub fn busy_time(&self) -> u64 {
        self.records
            .iter()
            .fold(0u64, |total, r| total.saturating_add(r.duration))
    }

    /// First record carrying the given name.
    pub fn record_for(&self, name: &str) -> Option<&ExecutionRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Records sorted by start tick (stable for equal starts).
    pub fn by_start(&self) -> Vec<&ExecutionRecord> {
        let mut sorted: Vec<&ExecutionRecord> = self.records.iter().collect();
        sorted.sort_by_key(|r| r.start);
        sorted
    }
}

impl<'a> IntoIterator for &'a SimulationRun {
    type Item = &'a ExecutionRecord;
    type IntoIter = std::slice::Iter<'a, ExecutionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_run() -> SimulationRun {
        let a = ProcessRecord::new("A", 5, 0);
        let c = ProcessRecord::new("C", 2, 1);
        let b = ProcessRecord::new("B", 3, 2);
        SimulationRun::new(
            Discipline::Fifo,
            vec![
                ExecutionRecord::started_at(&a, 0),
                ExecutionRecord::started_at(&c, 5),
                ExecutionRecord::started_at(&b, 7),
            ],
        )
    }

    #[test]
    fn test_started_at() {
        let p = ProcessRecord::new("A", 4, 3);
        let r = ExecutionRecord::started_at(&p, 3);
        assert_eq!(r.start, 3);
        assert_eq!(r.end, 7);
        assert_eq!(r.arrival, 3);
        assert_eq!(r.process(), p);
    }

    #[test]
    fn test_waiting_and_turnaround() {
        let p = ProcessRecord::new("B", 3, 2);
        let r = ExecutionRecord::started_at(&p, 7);
        assert_eq!(r.waiting_time(), 5);
        assert_eq!(r.turnaround_time(), 8);
    }

    #[test]
    fn test_zero_length_burst() {
        let p = ProcessRecord::new("Z", 0, 4);
        let r = ExecutionRecord::started_at(&p, 4);
        assert_eq!(r.start, r.end);
    }

    #[test]
    fn test_run_makespan_and_busy() {
        let run = sample_run();
        assert_eq!(run.len(), 3);
        assert_eq!(run.makespan(), 10);
        assert_eq!(run.busy_time(), 10);
    }

    #[test]
    fn test_busy_time_saturates() {
        let run = SimulationRun::new(
            Discipline::Fifo,
            vec![
                ExecutionRecord::started_at(&ProcessRecord::new("A", u64::MAX, 0), 0),
                ExecutionRecord::started_at(&ProcessRecord::new("B", 1, 0), 0),
            ],
        );
        assert_eq!(run.busy_time(), u64::MAX);
    }

    #[test]
    fn test_record_for() {
        let run = sample_run();
        assert_eq!(run.record_for("C").unwrap().start, 5);
        assert!(run.record_for("X").is_none());
    }

    #[test]
    fn test_by_start() {
        let mut run = sample_run();
        run.records.reverse();
        let starts: Vec<u64> = run.by_start().iter().map(|r| r.start).collect();
        assert_eq!(starts, vec![0, 5, 7]);
    }

    #[test]
    fn test_empty_run() {
        let run = SimulationRun::empty(Discipline::Sjf);
        assert!(run.is_empty());
        assert_eq!(run.makespan(), 0);
        assert_eq!(run.busy_time(), 0);
    }

    #[test]
    fn test_run_serializes_discipline_tag() {
        let run = SimulationRun::empty(Discipline::Sjf);
        let json = serde_json::to_value(&run).unwrap();
        assert_eq!(json["discipline"], "SJF");
        assert_eq!(json["records"], serde_json::json!([]));
    }
}
