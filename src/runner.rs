//! Load-and-run orchestration.
//!
//! Ties a [`RunConfig`] to the loader, a scheduler, and KPI evaluation, and
//! renders the result for the command-line binary.
//!
//! # Exit Codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Run completed (an empty run included) |
//! | 1 | Load failure, unknown discipline, or invalid option |
//! | 2 | No discipline given |

use std::fmt;

use serde::Serialize;
use tracing::{error, info, warn};

use crate::config::{OutputFormat, RunConfig, Workload, USAGE};
use crate::error::{ConfigError, MalformedRecordError, Result};
use crate::models::SimulationRun;
use crate::repository::ProcessRepository;
use crate::scheduler::{self, ScheduleKpi};
use crate::workload::BernoulliWorkload;

/// Exit code of a completed run.
pub const EXIT_OK: u8 = 0;
/// Exit code when the run could not be performed.
pub const EXIT_FAILURE: u8 = 1;
/// Exit code when no discipline was given.
pub const EXIT_USAGE: u8 = 2;

/// Everything one invocation produced.
#[derive(Debug, Clone, Serialize)]
pub struct Simulation {
    /// The timeline.
    pub run: SimulationRun,
    /// Metrics for the timeline.
    pub kpi: ScheduleKpi,
    /// Input lines that were dropped while loading.
    #[serde(skip)]
    pub rejected: Vec<MalformedRecordError>,
}

/// Loads the configured workload and runs the configured discipline.
///
/// # Errors
/// Fails with a load error before any scheduling if the input source is
/// missing, unreadable, or empty.
pub fn simulate(config: &RunConfig) -> Result<Simulation> {
    let (repository, rejected) = match &config.workload {
        Workload::File(source) => {
            let report = source.load()?;
            (report.repository, report.rejected)
        }
        Workload::Random { seed } => {
            let processes = BernoulliWorkload::default().generate(*seed);
            info!(seed, processes = processes.len(), "generated workload");
            (ProcessRepository::load(processes)?, Vec::new())
        }
    };

    let run = scheduler::run(config.discipline, &repository);
    let kpi = ScheduleKpi::calculate(&run);
    Ok(Simulation { run, kpi, rejected })
}

/// Renders a simulation in the requested format.
pub fn render(simulation: &Simulation, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(simulation)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(simulation)?),
    }
}

/// Renders the five-column timeline followed by KPIs.
pub fn render_table(simulation: &Simulation) -> String {
    TableView(simulation).to_string()
}

/// Text-table view of a [`Simulation`].
#[derive(Debug, Clone, Copy)]
pub struct TableView<'a>(pub &'a Simulation);

impl fmt::Display for TableView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let run = &self.0.run;
        if run.is_empty() {
            return writeln!(f, "{}: no processes loaded", run.discipline);
        }

        let name_width = run
            .iter()
            .map(|r| r.name.chars().count())
            .max()
            .unwrap_or(0)
            .max("Process".len());

        writeln!(f, "{} ({})", run.discipline, run.discipline.description())?;
        writeln!(
            f,
            "{:<name_width$}  {:>8}  {:>8}  {:>8}  {:>8}",
            "Process", "Duration", "Arrival", "Start", "End"
        )?;
        for r in run {
            writeln!(
                f,
                "{:<name_width$}  {:>8}  {:>8}  {:>8}  {:>8}",
                r.name, r.duration, r.arrival, r.start, r.end
            )?;
        }

        let kpi = &self.0.kpi;
        writeln!(f)?;
        writeln!(f, "makespan:            {}", kpi.makespan)?;
        writeln!(f, "cpu utilization:     {:.1}%", kpi.cpu_utilization * 100.0)?;
        writeln!(f, "avg waiting time:    {:.2}", kpi.avg_waiting_time)?;
        writeln!(f, "avg turnaround time: {:.2}", kpi.avg_turnaround_time)
    }
}

/// What the binary writes and the code it exits with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Process exit code.
    pub code: u8,
    /// Text for stdout.
    pub stdout: String,
    /// Text for stderr.
    pub stderr: String,
}

impl Outcome {
    fn success(stdout: String) -> Self {
        Self {
            code: EXIT_OK,
            stdout,
            stderr: String::new(),
        }
    }

    fn failure(code: u8, stderr: String) -> Self {
        Self {
            code,
            stdout: String::new(),
            stderr,
        }
    }
}

/// Runs one command-line invocation (arguments exclude the program name).
pub fn execute<I, S>(args: I) -> Outcome
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let config = match RunConfig::from_args(args) {
        Ok(config) => config,
        Err(ConfigError::MissingDiscipline) => {
            return Outcome::failure(EXIT_USAGE, format!("{USAGE}\n"));
        }
        Err(e) => return Outcome::failure(EXIT_FAILURE, format!("error: {e}\n{USAGE}\n")),
    };

    info!(discipline = %config.discipline, "starting simulation");

    let simulation = match simulate(&config) {
        Ok(simulation) => simulation,
        Err(e) => {
            error!(error = %e, "simulation aborted");
            return Outcome::failure(EXIT_FAILURE, format!("error: {e}\n"));
        }
    };

    if !simulation.rejected.is_empty() {
        warn!(
            rejected = simulation.rejected.len(),
            "some input lines were skipped"
        );
    }

    match render(&simulation, config.output) {
        Ok(mut text) => {
            if !text.ends_with('\n') {
                text.push('\n');
            }
            Outcome::success(text)
        }
        Err(e) => Outcome::failure(EXIT_FAILURE, format!("error: {e}\n")),
    }
}
