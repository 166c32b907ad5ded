//! Non-preemptive CPU-scheduling simulator.
//!
//! Loads process records (`name,duration,arrival`) and replays them through a
//! single simulated CPU under First-In-First-Out or Shortest-Job-First,
//! producing a per-process start/end timeline and summary KPIs.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ProcessRecord`, `ExecutionRecord`,
//!   `SimulationRun`, `Discipline`
//! - **`repository`**: In-memory store of loaded records
//! - **`loader`**: Line-oriented input parsing with per-line diagnostics
//! - **`dispatching`**: Priority rules (`Fifo`, `Spt`) and the rule engine
//! - **`scheduler`**: FIFO and SJF simulations, the virtual clock, KPIs
//! - **`validation`**: Timeline integrity checks
//! - **`workload`**: Seeded synthetic process sets
//! - **`config`**, **`runner`**, **`telemetry`**: Command-line plumbing
//!
//! # Example
//!
//! ```
//! use u_cpusched::{loader, scheduler, Discipline};
//!
//! let report = loader::parse_str("A,5,0\nB,3,2\nC,2,4\n");
//! let run = scheduler::run(Discipline::Sjf, &report.repository);
//!
//! let order: Vec<&str> = run.iter().map(|r| r.name.as_str()).collect();
//! assert_eq!(order, ["A", "C", "B"]);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod config;
pub mod dispatching;
pub mod error;
pub mod loader;
pub mod models;
pub mod repository;
pub mod runner;
pub mod scheduler;
pub mod telemetry;
pub mod validation;
pub mod workload;

pub use error::{Error, Result};
pub use models::{Discipline, ExecutionRecord, ProcessRecord, SimulationRun};
pub use repository::ProcessRepository;
pub use scheduler::{run, run_tagged};
