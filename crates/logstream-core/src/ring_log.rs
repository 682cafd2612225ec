//! Bounded record store with FIFO eviction.

use crate::model::Record;
use std::collections::VecDeque;

/// Capacity used when none is configured
pub const DEFAULT_CAPACITY: usize = 1000;

/// Outcome of a single [`RingLog::append`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvictionReport {
    /// Records of the batch that were appended
    pub inserted: usize,
    /// Records dropped from the front, including records of the same batch
    pub evicted: usize,
}

/// Ordered, bounded sequence of records.
///
/// The ring log is the sole owner of its records: once a record is evicted it
/// is dropped and nothing inside the crate can reach it anymore.
#[derive(Debug, Clone)]
pub struct RingLog {
    records: VecDeque<Record>,
    capacity: usize,
}

impl Default for RingLog {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl RingLog {
    /// Create an empty ring log holding at most `capacity` records
    pub fn new(capacity: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(capacity.min(10_000)),
            capacity,
        }
    }

    /// Append records in order, dropping the oldest ones until the capacity
    /// bound holds again.
    ///
    /// Never fails. An empty batch is a no-op. A batch larger than the capacity
    /// leaves exactly the newest `capacity` records of that batch.
    pub fn append(&mut self, batch: impl IntoIterator<Item = Record>) -> EvictionReport {
        let before = self.records.len();
        self.records.extend(batch);
        let inserted = self.records.len() - before;

        let evicted = self.records.len().saturating_sub(self.capacity);
        if evicted > 0 {
            self.records.drain(..evicted);
        }

        EvictionReport { inserted, evicted }
    }

    /// Remove every record. Idempotent.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Current contents in arrival order, oldest first.
    ///
    /// Borrowing `self` keeps appends out while the snapshot is alive.
    pub fn snapshot(&self) -> impl ExactSizeIterator<Item = &Record> + DoubleEndedIterator {
        self.records.iter()
    }

    /// Most recently appended record
    pub fn latest(&self) -> Option<&Record> {
        self.records.back()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
