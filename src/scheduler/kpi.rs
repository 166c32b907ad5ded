//! Schedule quality metrics (KPIs).
//!
//! Computes standard CPU-scheduling indicators from a completed run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest completion tick |
//! | Busy Time | Sum of bursts |
//! | Idle Time | Makespan minus busy time |
//! | Utilization | Busy time / makespan |
//! | Avg Waiting | Mean of (start - arrival) |
//! | Avg Turnaround | Mean of (end - arrival) |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::models::SimulationRun;

/// Run performance indicators.
///
/// All time values are in simulation ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Number of processes in the run.
    pub process_count: usize,
    /// Latest completion tick.
    pub makespan: u64,
    /// Ticks the CPU spent executing.
    pub busy_time: u64,
    /// Ticks the CPU spent idle before the makespan.
    pub idle_time: u64,
    /// Fraction of the makespan spent executing (0.0..=1.0).
    pub cpu_utilization: f64,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Largest single waiting time.
    pub max_waiting_time: u64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from a finished run.
    pub fn calculate(run: &SimulationRun) -> Self {
        let process_count = run.len();
        let makespan = run.makespan();
        let busy_time = run.busy_time();

        // Per-record times fit in u64; their sums over many records may not.
        let mut total_waiting: u128 = 0;
        let mut max_waiting: u64 = 0;
        let mut total_turnaround: u128 = 0;

        for record in run {
            let waiting = record.waiting_time();
            total_waiting += u128::from(waiting);
            max_waiting = max_waiting.max(waiting);
            total_turnaround += u128::from(record.turnaround_time());
        }

        let cpu_utilization = if makespan == 0 {
            0.0
        } else {
            busy_time as f64 / makespan as f64
        };

        let mean = |total: u128| {
            if process_count == 0 {
                0.0
            } else {
                total as f64 / process_count as f64
            }
        };

        Self {
            process_count,
            makespan,
            busy_time,
            idle_time: makespan.saturating_sub(busy_time),
            cpu_utilization,
            avg_waiting_time: mean(total_waiting),
            max_waiting_time: max_waiting,
            avg_turnaround_time: mean(total_turnaround),
        }
    }
}
