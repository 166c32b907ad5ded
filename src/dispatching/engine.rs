//! Rule engine for multi-criteria dispatching.
//!
//! Applies rules in sequence: the next rule is consulted only when every
//! earlier rule ties. Remaining ties are never broken by name or any other
//! hidden key; they fall back to the order the caller presented the
//! candidates in.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::sync::Arc;

use super::{DispatchingRule, RuleScore, SchedulingContext};
use crate::models::ProcessRecord;

/// A composable, sequential rule engine.
///
/// # Example
/// ```
/// use u_cpusched::dispatching::{rules, RuleEngine, SchedulingContext};
/// use u_cpusched::models::ProcessRecord;
///
/// let engine = RuleEngine::new().with_rule(rules::Spt);
/// let processes = vec![
///     ProcessRecord::new("long", 5, 0),
///     ProcessRecord::new("short", 2, 0),
/// ];
/// let ctx = SchedulingContext::at_time(0);
/// assert_eq!(engine.select_best(&processes, &ctx), Some(1));
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Adds a primary rule.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a tie-breaking rule, consulted only when all earlier rules tie.
    pub fn with_tie_breaker<R: DispatchingRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Sorts processes by priority (highest priority first).
    ///
    /// Returns indices into `processes`. The sort is stable: processes that
    /// tie on every rule keep their relative input order.
    pub fn sort_indices<P: Borrow<ProcessRecord>>(
        &self,
        processes: &[P],
        context: &SchedulingContext,
    ) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..processes.len()).collect();
        indices.sort_by(|&a, &b| {
            self.compare(processes[a].borrow(), processes[b].borrow(), context)
        });
        indices
    }

    /// Returns the index of the highest-priority process.
    pub fn select_best<P: Borrow<ProcessRecord>>(
        &self,
        processes: &[P],
        context: &SchedulingContext,
    ) -> Option<usize> {
        self.select_among(processes, 0..processes.len(), context)
    }

    /// Returns the best of the `candidates` (indices into `processes`).
    ///
    /// Among equally ranked candidates the one yielded first wins.
    pub fn select_among<P: Borrow<ProcessRecord>>(
        &self,
        processes: &[P],
        candidates: impl IntoIterator<Item = usize>,
        context: &SchedulingContext,
    ) -> Option<usize> {
        // `min_by` keeps the first of several equal minima.
        candidates.into_iter().min_by(|&a, &b| {
            self.compare(processes[a].borrow(), processes[b].borrow(), context)
        })
    }

    /// Evaluates a single process and returns the score from each rule.
    pub fn evaluate(&self, process: &ProcessRecord, context: &SchedulingContext) -> Vec<RuleScore> {
        self.rules
            .iter()
            .map(|rule| rule.evaluate(process, context))
            .collect()
    }

    fn compare(
        &self,
        a: &ProcessRecord,
        b: &ProcessRecord,
        context: &SchedulingContext,
    ) -> Ordering {
        self.rules
            .iter()
            .map(|rule| rule.evaluate(a, context).cmp(&rule.evaluate(b, context)))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field(
                "rules",
                &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
