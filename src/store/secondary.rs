//! Secondary-attributes slice: fate, toughness, experience, movement.

use crate::character::{CharacterSecondary, SecondaryPatch};
use crate::storage::{keys, Bridge};

use super::Persisted;

/// Owns the [`CharacterSecondary`] singleton. Each nested group merges
/// independently; patching one group never disturbs its siblings.
#[derive(Clone)]
pub struct SecondaryStore {
    slot: Persisted<CharacterSecondary>,
}

impl SecondaryStore {
    /// Load secondary attributes from storage, or start zeroed.
    pub fn open(bridge: &Bridge) -> Self {
        Self {
            slot: Persisted::open(bridge.clone(), keys::SECONDARY, CharacterSecondary::default()),
        }
    }

    /// Current secondary attributes snapshot.
    pub fn get(&self) -> CharacterSecondary {
        self.slot.get()
    }

    /// Merge a partial update and persist.
    pub fn update(&self, patch: SecondaryPatch) {
        self.slot.update(|secondary| patch.apply(secondary));
    }
}
