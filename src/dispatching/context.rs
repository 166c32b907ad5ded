//! Scheduling context for dispatching rule evaluation.

/// Runtime scheduling state passed to dispatching rules.
///
/// Contains the simulated clock at the moment a selection is made. The
/// built-in `Fifo` and `Spt` rules score on static fields only;
/// `current_time` is what time-aware rules (aging, remaining slack) read.
/// A context is a `Copy` value built on the stack at each decision point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchedulingContext {
    /// Current simulation tick.
    pub current_time: u64,
}

impl SchedulingContext {
    /// Creates a context at the given tick.
    pub fn at_time(current_time: u64) -> Self {
        Self { current_time }
    }
}
