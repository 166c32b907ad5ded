//! Command-line configuration.
//!
//! ```text
//! u-cpusched <FIFO|SJF> [INPUT] [--json] [--random SEED]
//! ```
//!
//! Without `INPUT` the per-discipline file (`FIFO.txt` / `SJF.txt`) is read.
//! `--random SEED` replaces file input with a seeded synthetic workload.

use std::path::PathBuf;

use crate::error::ConfigError;
use crate::loader::InputSource;
use crate::models::Discipline;

/// Usage line printed on configuration errors.
pub const USAGE: &str = "usage: u-cpusched <FIFO|SJF> [INPUT] [--json] [--random SEED]";

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned text table followed by KPIs.
    #[default]
    Table,
    /// The run and its KPIs as JSON.
    Json,
}

/// Where the process records come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Workload {
    /// Load from a file.
    File(InputSource),
    /// Generate with the given seed.
    Random { seed: u64 },
}

/// A fully resolved invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Discipline to simulate.
    pub discipline: Discipline,
    /// Record source.
    pub workload: Workload,
    /// Output format.
    pub output: OutputFormat,
}

impl RunConfig {
    /// Creates a config reading the conventional file for `discipline`.
    pub fn new(discipline: Discipline) -> Self {
        Self {
            discipline,
            workload: Workload::File(InputSource::for_discipline(discipline)),
            output: OutputFormat::Table,
        }
    }

    /// Reads records from an explicit path.
    pub fn with_input(mut self, path: impl Into<PathBuf>) -> Self {
        self.workload = Workload::File(InputSource::Path(path.into()));
        self
    }

    /// Generates records from a seed instead of reading a file.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.workload = Workload::Random { seed };
        self
    }

    /// Sets the output format.
    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    /// Parses arguments (excluding the program name).
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut discipline: Option<Discipline> = None;
        let mut input: Option<PathBuf> = None;
        let mut seed: Option<u64> = None;
        let mut output = OutputFormat::Table;

        let mut args = args.into_iter().map(Into::<String>::into);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--json" => output = OutputFormat::Json,
                "--random" => {
                    let value = args.next().ok_or(ConfigError::MissingValue("--random"))?;
                    let parsed: u64 = value.parse().map_err(|_| ConfigError::InvalidValue {
                        option: "--random",
                        value,
                    })?;
                    seed = Some(parsed);
                }
                flag if flag.starts_with("--") => {
                    return Err(ConfigError::UnknownOption(flag.to_string()));
                }
                positional => {
                    if discipline.is_none() {
                        discipline = Some(positional.parse()?);
                    } else if input.is_none() {
                        input = Some(PathBuf::from(positional));
                    } else {
                        return Err(ConfigError::UnexpectedArgument(positional.to_string()));
                    }
                }
            }
        }

        let discipline = discipline.ok_or(ConfigError::MissingDiscipline)?;
        let mut config = RunConfig::new(discipline).with_output(output);
        if let Some(path) = input {
            config = config.with_input(path);
        }
        if let Some(seed) = seed {
            config = config.with_random_seed(seed);
        }
        Ok(config)
    }
}
