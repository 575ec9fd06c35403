//! Talents slice: the keyed talent collection.
//!
//! Updates are keyed by id only. Positional talent updates are unsafe under
//! reordering or deletion and are deliberately not offered.

use crate::character::{Talent, TalentPatch};
use crate::reference::DEFAULT_TALENTS;
use crate::storage::{keys, Bridge};

use super::Persisted;

/// Owns the [`Talent`] collection. Identity is the id string; insertion
/// order is display order.
#[derive(Clone)]
pub struct TalentsStore {
    slot: Persisted<Vec<Talent>>,
}

impl TalentsStore {
    /// Load talents from storage, or seed the two blank rows.
    pub fn open(bridge: &Bridge) -> Self {
        Self {
            slot: Persisted::open(bridge.clone(), keys::TALENTS, DEFAULT_TALENTS.clone()),
        }
    }

    /// Current talents, in display order.
    pub fn get(&self) -> Vec<Talent> {
        self.slot.get()
    }

    /// Append a fully-formed talent and persist. Ids are not checked for
    /// uniqueness here; mint them with [`crate::character::fresh_id`].
    pub fn add(&self, talent: Talent) {
        self.slot.update(|talents| talents.push(talent));
    }

    /// Merge a partial update into the talent with `id` and persist.
    /// Unknown ids are a silent no-op.
    pub fn update(&self, id: &str, patch: TalentPatch) {
        self.slot.update(|talents| {
            if let Some(talent) = talents.iter_mut().find(|t| t.id == id) {
                patch.apply(talent);
            }
        });
    }

    /// Remove the talent with `id` and persist. Unknown ids are a silent
    /// no-op.
    pub fn delete(&self, id: &str) {
        self.slot.update(|talents| talents.retain(|t| t.id != id));
    }
}
