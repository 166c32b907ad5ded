//! Process repository: the read-only record set for one run.
//!
//! # Tick Horizon
//!
//! A single CPU never finishes later than the latest arrival plus the sum of
//! every burst. The repository only admits record sets for which that bound
//! fits in `u64`, so every `start`, `end` and `makespan` a strategy computes
//! over it is exact.

use crate::error::TickOverflowError;
use crate::models::ProcessRecord;

/// Running upper bound on the completion tick of a record set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickHorizon {
    latest_arrival: u64,
    total_burst: u64,
}

impl TickHorizon {
    /// Creates an empty horizon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Extends the horizon by `process` if the bound stays representable.
    ///
    /// Returns `false` and leaves the horizon unchanged otherwise.
    pub fn admit(&mut self, process: &ProcessRecord) -> bool {
        let latest_arrival = self.latest_arrival.max(process.arrival);
        let fits = self
            .total_burst
            .checked_add(process.duration)
            .and_then(|total| latest_arrival.checked_add(total).map(|_| total));

        match fits {
            Some(total_burst) => {
                self.latest_arrival = latest_arrival;
                self.total_burst = total_burst;
                true
            }
            None => false,
        }
    }

    /// Latest tick any schedule of the admitted records can reach.
    pub fn bound(&self) -> u64 {
        // Both parts were checked together in `admit`.
        self.latest_arrival.saturating_add(self.total_burst)
    }
}

/// An in-memory, read-only collection of process records.
///
/// Holds records in load order. Strategies borrow it immutably, so several
/// engines may read the same repository concurrently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessRepository {
    records: Vec<ProcessRecord>,
    horizon: TickHorizon,
}

impl ProcessRepository {
    /// Builds a repository from records, preserving their order.
    ///
    /// An empty input is legal and yields an empty repository.
    ///
    /// # Errors
    /// [`TickOverflowError`] naming the first record whose admission would
    /// push the [`TickHorizon`] past `u64::MAX`.
    pub fn load(
        records: impl IntoIterator<Item = ProcessRecord>,
    ) -> Result<Self, TickOverflowError> {
        let mut repository = Self::default();
        for record in records {
            if !repository.horizon.admit(&record) {
                return Err(TickOverflowError { name: record.name });
            }
            repository.records.push(record);
        }
        Ok(repository)
    }

    /// Builds a repository from records already admitted into `horizon`.
    pub(crate) fn from_admitted(records: Vec<ProcessRecord>, horizon: TickHorizon) -> Self {
        Self { records, horizon }
    }

    /// The records in load order.
    pub fn records(&self) -> &[ProcessRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the repository holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates records in load order.
    pub fn iter(&self) -> std::slice::Iter<'_, ProcessRecord> {
        self.records.iter()
    }

    /// Upper bound on the makespan of any run over this repository.
    pub fn horizon(&self) -> TickHorizon {
        self.horizon
    }
}

impl<'a> IntoIterator for &'a ProcessRepository {
    type Item = &'a ProcessRecord;
    type IntoIter = std::slice::Iter<'a, ProcessRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
