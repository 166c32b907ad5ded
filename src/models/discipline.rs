//! Scheduling discipline tag.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::UnknownDisciplineError;

/// The ordering policy used to pick the next process.
///
/// Only the two exact tags `FIFO` and `SJF` are recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Discipline {
    /// First-In-First-Out (first-come-first-served).
    #[serde(rename = "FIFO")]
    Fifo,
    /// Shortest-Job-First, non-preemptive.
    #[serde(rename = "SJF")]
    Sjf,
}

impl Discipline {
    /// Every recognized discipline, in display order.
    pub const ALL: [Discipline; 2] = [Discipline::Fifo, Discipline::Sjf];

    /// The canonical tag.
    pub fn tag(self) -> &'static str {
        match self {
            Discipline::Fifo => "FIFO",
            Discipline::Sjf => "SJF",
        }
    }

    /// Long-form name.
    pub fn description(self) -> &'static str {
        match self {
            Discipline::Fifo => "First In First Out",
            Discipline::Sjf => "Shortest Job First (non-preemptive)",
        }
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Discipline {
    type Err = UnknownDisciplineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Discipline::ALL
            .into_iter()
            .find(|d| d.tag() == s)
            .ok_or_else(|| UnknownDisciplineError::new(s))
    }
}
