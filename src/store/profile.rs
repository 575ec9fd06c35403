//! Profile slice: the character's identity block.

use crate::character::{CharacterProfile, ProfilePatch};
use crate::storage::{keys, Bridge};

use super::Persisted;

/// Owns the [`CharacterProfile`] singleton.
#[derive(Clone)]
pub struct ProfileStore {
    slot: Persisted<CharacterProfile>,
}

impl ProfileStore {
    /// Load the profile from storage, or start blank.
    pub fn open(bridge: &Bridge) -> Self {
        Self {
            slot: Persisted::open(bridge.clone(), keys::PROFILE, CharacterProfile::default()),
        }
    }

    /// Current profile snapshot.
    pub fn get(&self) -> CharacterProfile {
        self.slot.get()
    }

    /// Merge a partial update and persist.
    pub fn update(&self, patch: ProfilePatch) {
        self.slot.update(|profile| patch.apply(profile));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use std::sync::Arc;

    #[test]
    fn test_updates_survive_reopen() {
        let storage = Arc::new(MemoryStorage::new());
        let bridge = Bridge::new(storage.clone());

        let store = ProfileStore::open(&bridge);
        store.update(ProfilePatch {
            name: Some("Gunnar".to_string()),
            volk: Some("Zwerg".to_string()),
            ..Default::default()
        });

        let reopened = ProfileStore::open(&Bridge::new(storage));
        let profile = reopened.get();
        assert_eq!(profile.name, "Gunnar");
        assert_eq!(profile.volk, "Zwerg");
        assert_eq!(profile.klasse, "");
    }

    #[test]
    fn test_cloned_handles_share_state() {
        let bridge = Bridge::new(Arc::new(MemoryStorage::new()));
        let store = ProfileStore::open(&bridge);
        let other = store.clone();

        other.update(ProfilePatch {
            karriere: Some("Söldner".to_string()),
            ..Default::default()
        });

        assert_eq!(store.get().karriere, "Söldner");
    }
}
