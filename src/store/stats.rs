//! Stats slice: the nine characteristics.
//!
//! Stats are a fixed, ordered sequence and are edited by position; there is
//! no add or delete. Icons are not part of the stored records — they come
//! back from the code-keyed lookup in [`crate::reference`], so a reloaded
//! sheet cannot end up with misaligned icons.

use crate::character::{Stat, StatPatch};
use crate::reference::DEFAULT_STATS;
use crate::storage::{keys, Bridge};

use super::Persisted;

/// Owns the ordered [`Stat`] sequence.
#[derive(Clone)]
pub struct StatsStore {
    slot: Persisted<Vec<Stat>>,
}

impl StatsStore {
    /// Load stats from storage, or seed the reference table.
    pub fn open(bridge: &Bridge) -> Self {
        Self {
            slot: Persisted::open(bridge.clone(), keys::STATS, DEFAULT_STATS.clone()),
        }
    }

    /// Current stats, in sheet order.
    pub fn get(&self) -> Vec<Stat> {
        self.slot.get()
    }

    /// Merge a partial update into the stat at `index` and persist.
    /// Out-of-range indices are a silent no-op.
    pub fn update(&self, index: usize, patch: StatPatch) {
        self.slot.update(|stats| {
            if let Some(stat) = stats.get_mut(index) {
                patch.apply(stat);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use std::sync::Arc;

    #[test]
    fn test_seeds_reference_table() {
        let bridge = Bridge::new(Arc::new(MemoryStorage::new()));
        let store = StatsStore::open(&bridge);

        let stats = store.get();
        assert_eq!(stats.len(), 9);
        assert_eq!(stats[3].short, "WI");
        assert_eq!(stats[3].increase, 10);
    }

    #[test]
    fn test_update_by_position_persists_and_keeps_order() {
        let storage = Arc::new(MemoryStorage::new());
        let store = StatsStore::open(&Bridge::new(storage.clone()));

        store.update(
            2,
            StatPatch {
                start: Some(35),
                increase: Some(10),
                ..Default::default()
            },
        );

        let reopened = StatsStore::open(&Bridge::new(storage));
        let stats = reopened.get();
        assert_eq!(stats[2].short, "ST");
        assert_eq!(stats[2].start, 35);
        assert_eq!(stats[2].increase, 10);
        assert_eq!(stats[2].total(), 45);

        // Order is untouched by an in-place edit.
        let shorts: Vec<_> = stats.iter().map(|s| s.short.as_str()).collect();
        assert_eq!(shorts, ["KG", "BF", "ST", "WI", "GW", "GS", "IN", "WK", "CH"]);
    }

    #[test]
    fn test_out_of_range_index_is_a_no_op() {
        let bridge = Bridge::new(Arc::new(MemoryStorage::new()));
        let store = StatsStore::open(&bridge);
        let before = store.get();

        store.update(
            99,
            StatPatch {
                start: Some(1),
                ..Default::default()
            },
        );

        assert_eq!(store.get(), before);
    }
}
