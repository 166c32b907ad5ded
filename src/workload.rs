//! Synthetic workload generation.
//!
//! Produces reproducible process sets for demos and exploration when no
//! input file is at hand.

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::ProcessRecord;

/// Parameters of a Bernoulli arrival workload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BernoulliWorkload {
    /// Number of ticks over which arrivals are drawn.
    pub ticks: u64,
    /// Probability that a process arrives on a given tick.
    pub p_arrival: f64,
    /// Probability that an arriving process is short.
    pub p_short: f64,
    /// Burst length of a short process.
    pub short_burst: u64,
    /// Burst length of a long process.
    pub long_burst: u64,
}

impl Default for BernoulliWorkload {
    fn default() -> Self {
        Self {
            ticks: 50,
            p_arrival: 0.3,
            p_short: 0.3,
            short_burst: 2,
            long_burst: 6,
        }
    }
}

impl BernoulliWorkload {
    /// Sets the arrival window.
    pub fn with_ticks(mut self, ticks: u64) -> Self {
        self.ticks = ticks;
        self
    }

    /// Sets the short/long burst lengths.
    pub fn with_bursts(mut self, short_burst: u64, long_burst: u64) -> Self {
        self.short_burst = short_burst;
        self.long_burst = long_burst;
        self
    }

    /// Draws a process set. The same seed always yields the same set.
    ///
    /// Processes are named `P0`, `P1`, ... in arrival order.
    pub fn generate(&self, seed: u64) -> Vec<ProcessRecord> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut processes = Vec::new();

        for t in 0..self.ticks {
            if rng.random::<f64>() < self.p_arrival {
                let burst = if rng.random::<f64>() < self.p_short {
                    self.short_burst
                } else {
                    self.long_burst
                };
                processes.push(ProcessRecord::new(format!("P{}", processes.len()), burst, t));
            }
        }

        processes
    }
}

/// Shorthand for [`BernoulliWorkload::generate`].
pub fn bernoulli(
    ticks: u64,
    p_arrival: f64,
    p_short: f64,
    short_burst: u64,
    long_burst: u64,
    seed: u64,
) -> Vec<ProcessRecord> {
    BernoulliWorkload {
        ticks,
        p_arrival,
        p_short,
        short_burst,
        long_burst,
    }
    .generate(seed)
}
