//! Collision history ledger.
//!
//! Append-only, ordered by event timestamp. Backed by a `BTreeMap` so
//! insertion stays O(log n) whatever order the host clock delivers
//! timestamps in. Equal timestamps are ordered by insertion sequence.

use std::collections::{BTreeMap, HashMap};

use airspace_core::events::CollisionHistoryItem;

/// Ledger key: event time, then insertion sequence for ties.
type LedgerKey = (u64, u64);

/// Ordered store of terminal collision records.
#[derive(Debug, Clone, Default)]
pub struct HistoryLedger {
    entries: BTreeMap<LedgerKey, CollisionHistoryItem>,
    /// Ledger key of each aircraft's record.
    keys: HashMap<String, LedgerKey>,
    next_seq: u64,
}

impl HistoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item under `timestamp`.
    ///
    /// Returns `false` and drops the item when a record for the same aircraft
    /// already exists; a ledger never holds two records for one id.
    pub fn insert(&mut self, timestamp: u64, item: CollisionHistoryItem) -> bool {
        if self.keys.contains_key(&item.aircraft.id) {
            return false;
        }
        let key = (timestamp, self.next_seq);
        self.next_seq += 1;
        self.keys.insert(item.aircraft.id.clone(), key);
        self.entries.insert(key, item);
        true
    }

    /// Whether a record exists for this aircraft id.
    pub fn contains(&self, id: &str) -> bool {
        self.keys.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Oldest first. Equal timestamps come out in insertion order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &CollisionHistoryItem> {
        self.entries.values()
    }

    /// Most recent first: the exact reverse of [`HistoryLedger::iter`].
    pub fn all_ordered_by_time_descending(&self) -> Vec<CollisionHistoryItem> {
        self.entries.values().rev().cloned().collect()
    }

    /// Record for a given aircraft, if it has collided.
    pub fn get(&self, id: &str) -> Option<&CollisionHistoryItem> {
        self.keys.get(id).and_then(|key| self.entries.get(key))
    }
}
