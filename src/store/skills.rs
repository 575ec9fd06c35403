//! Skills slice: the keyed skill collection.

use crate::character::{Skill, SkillPatch};
use crate::reference::DEFAULT_SKILLS;
use crate::storage::{keys, Bridge};

use super::Persisted;

/// Owns the [`Skill`] collection. Identity is the id string; insertion order
/// is display order.
#[derive(Clone)]
pub struct SkillsStore {
    slot: Persisted<Vec<Skill>>,
}

impl SkillsStore {
    /// Load skills from storage, or seed the starter set.
    pub fn open(bridge: &Bridge) -> Self {
        Self {
            slot: Persisted::open(bridge.clone(), keys::SKILLS, DEFAULT_SKILLS.clone()),
        }
    }

    /// Current skills, in display order.
    pub fn get(&self) -> Vec<Skill> {
        self.slot.get()
    }

    /// Append a fully-formed skill and persist. Ids are not checked for
    /// uniqueness here; mint them with [`crate::character::fresh_id`].
    pub fn add(&self, skill: Skill) {
        self.slot.update(|skills| skills.push(skill));
    }

    /// Merge a partial update into the skill with `id` and persist.
    /// Unknown ids are a silent no-op.
    pub fn update(&self, id: &str, patch: SkillPatch) {
        self.slot.update(|skills| {
            if let Some(skill) = skills.iter_mut().find(|s| s.id == id) {
                patch.apply(skill);
            }
        });
    }

    /// Remove the skill with `id` and persist. Unknown ids are a silent
    /// no-op.
    pub fn delete(&self, id: &str) {
        self.slot.update(|skills| skills.retain(|s| s.id != id));
    }
}
