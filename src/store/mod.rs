//! Per-slice state stores.
//!
//! Each store owns one independently-persisted slice of the sheet. Store
//! handles are cheap to clone and share their state, so any part of the
//! presentation tree can hold its own handle — the stand-in for a
//! provider/consumer context. Every mutation synchronously re-persists the
//! owning slice through the [`Bridge`](crate::storage::Bridge); slices never
//! affect each other's slots.

use std::sync::{Arc, RwLock, RwLockReadGuard};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::storage::Bridge;

pub mod health_wealth;
pub mod info;
pub mod profile;
pub mod secondary;
pub mod skills;
pub mod stats;
pub mod talents;

pub use health_wealth::HealthWealthStore;
pub use info::InfoStore;
pub use profile::ProfileStore;
pub use secondary::SecondaryStore;
pub use skills::SkillsStore;
pub use stats::StatsStore;
pub use talents::TalentsStore;

/// Shared in-memory value mirrored into a storage slot.
///
/// The write path is read-modify-persist: mutate under the lock, then write
/// the whole slice back through the bridge. A poisoned lock means a consumer
/// panicked mid-update, which is a wiring bug, not a data condition — it
/// fails fast instead of limping on with half-applied state.
pub(crate) struct Persisted<T> {
    bridge: Bridge,
    key: &'static str,
    value: Arc<RwLock<T>>,
}

impl<T: Clone + Serialize> Persisted<T> {
    pub(crate) fn open(bridge: Bridge, key: &'static str, default: T) -> Self
    where
        T: DeserializeOwned,
    {
        let value = bridge.load_or(key, default);
        Self {
            bridge,
            key,
            value: Arc::new(RwLock::new(value)),
        }
    }

    pub(crate) fn get(&self) -> T {
        self.read().clone()
    }

    pub(crate) fn update(&self, mutate: impl FnOnce(&mut T)) {
        let mut value = self.value.write().expect("sheet store lock poisoned");
        mutate(&mut value);
        self.bridge.save(self.key, &*value);
    }

    fn read(&self) -> RwLockReadGuard<'_, T> {
        self.value.read().expect("sheet store lock poisoned")
    }
}

impl<T> Clone for Persisted<T> {
    fn clone(&self) -> Self {
        Self {
            bridge: self.bridge.clone(),
            key: self.key,
            value: Arc::clone(&self.value),
        }
    }
}
