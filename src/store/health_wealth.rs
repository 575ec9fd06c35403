//! Health and wealth slice, session-only.
//!
//! This is the one slice that is never written to durable storage: life
//! points and coin change constantly at the table, and the sheet starts each
//! session from a clean block.

use std::sync::{Arc, RwLock};

use crate::character::{HealthPatch, HealthWealth, WealthPatch};

/// Owns the [`HealthWealth`] singleton, in memory only.
#[derive(Clone, Default)]
pub struct HealthWealthStore {
    value: Arc<RwLock<HealthWealth>>,
}

impl HealthWealthStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current health/wealth snapshot.
    pub fn get(&self) -> HealthWealth {
        self.value.read().expect("sheet store lock poisoned").clone()
    }

    /// Merge a partial health update.
    pub fn update_health(&self, patch: HealthPatch) {
        let mut value = self.value.write().expect("sheet store lock poisoned");
        patch.apply(&mut value.health);
    }

    /// Merge a partial wealth update.
    pub fn update_wealth(&self, patch: WealthPatch) {
        let mut value = self.value.write().expect("sheet store lock poisoned");
        patch.apply(&mut value.wealth);
    }
}
