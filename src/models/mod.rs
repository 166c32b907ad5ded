//! CPU scheduling domain models.
//!
//! Provides the input and output data types of a simulation run.
//!
//! # Domain Mappings
//!
//! | u-cpusched | Operating system | Batch queue |
//! |------------|------------------|-------------|
//! | ProcessRecord | Process / thread | Job |
//! | ExecutionRecord | Dispatch interval | Job run |
//! | SimulationRun | CPU timeline | Queue history |

mod discipline;
mod execution;
mod process;

pub use discipline::Discipline;
pub use execution::{ExecutionRecord, SimulationRun};
pub use process::ProcessRecord;
