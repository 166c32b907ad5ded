//! Non-preemptive CPU schedulers and KPI evaluation.
//!
//! # Algorithm
//!
//! Both strategies drive a single [`SimClock`] from t=0. A process becomes
//! eligible once `now >= arrival` and, once started, runs to completion.
//!
//! - [`FifoScheduler`]: fixed arrival order, stable on ties.
//! - [`SjfScheduler`]: shortest arrived burst at each decision point.
//!
//! # KPI
//!
//! [`ScheduleKpi`] computes waiting time, turnaround time, idle time, and
//! CPU utilization for a finished run.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3-4

mod clock;
mod fifo;
mod kpi;
mod sjf;

pub use clock::SimClock;
pub use fifo::FifoScheduler;
pub use kpi::ScheduleKpi;
pub use sjf::SjfScheduler;

use tracing::info;

use crate::error::UnknownDisciplineError;
use crate::models::{Discipline, ExecutionRecord, ProcessRecord, SimulationRun};
use crate::repository::ProcessRepository;

/// A scheduling discipline that turns process records into a timeline.
///
/// Implementations never mutate or reorder the input slice. Timelines are
/// exact when the slice fits a [`TickHorizon`](crate::repository::TickHorizon),
/// as every repository's records do.
pub trait Scheduler {
    /// The discipline this strategy implements.
    fn discipline(&self) -> Discipline;

    /// Produces one execution record per process, in dispatch order.
    fn schedule(&self, processes: &[ProcessRecord]) -> Vec<ExecutionRecord>;
}

/// Returns the strategy implementing `discipline`.
pub fn scheduler_for(discipline: Discipline) -> Box<dyn Scheduler> {
    match discipline {
        Discipline::Fifo => Box::new(FifoScheduler::new()),
        Discipline::Sjf => Box::new(SjfScheduler::new()),
    }
}

/// Runs `discipline` over a repository snapshot.
///
/// An empty repository yields an empty run.
pub fn run(discipline: Discipline, repository: &ProcessRepository) -> SimulationRun {
    if repository.is_empty() {
        info!(%discipline, "empty repository, nothing to schedule");
        return SimulationRun::empty(discipline);
    }

    let records = scheduler_for(discipline).schedule(repository.records());
    let run = SimulationRun::new(discipline, records);
    info!(
        %discipline,
        processes = run.len(),
        makespan = run.makespan(),
        "simulation complete"
    );
    run
}

/// Runs the discipline named by `tag` (`FIFO` or `SJF`).
///
/// Any other tag fails without producing a run.
pub fn run_tagged(
    tag: &str,
    repository: &ProcessRepository,
) -> Result<SimulationRun, UnknownDisciplineError> {
    let discipline: Discipline = tag.parse()?;
    Ok(run(discipline, repository))
}
