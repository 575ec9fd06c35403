//! Info slice: character goals and group data.
//!
//! One store, two independent slots — goals and group are edited on the same
//! sheet page but persist separately, so a failed write of one never touches
//! the other.

use crate::character::{Goals, GoalsPatch, GroupData, GroupPatch};
use crate::storage::{keys, Bridge};

use super::Persisted;

/// Owns the [`Goals`] and [`GroupData`] singletons.
#[derive(Clone)]
pub struct InfoStore {
    goals: Persisted<Goals>,
    group: Persisted<GroupData>,
}

impl InfoStore {
    /// Load both slots from storage, or start blank.
    pub fn open(bridge: &Bridge) -> Self {
        Self {
            goals: Persisted::open(bridge.clone(), keys::GOALS, Goals::default()),
            group: Persisted::open(bridge.clone(), keys::GROUP, GroupData::default()),
        }
    }

    /// Current goals snapshot.
    pub fn goals(&self) -> Goals {
        self.goals.get()
    }

    /// Merge a partial goals update and persist.
    pub fn update_goals(&self, patch: GoalsPatch) {
        self.goals.update(|goals| patch.apply(goals));
    }

    /// Current group snapshot.
    pub fn group(&self) -> GroupData {
        self.group.get()
    }

    /// Merge a partial group update and persist.
    pub fn update_group(&self, patch: GroupPatch) {
        self.group.update(|group| patch.apply(group));
    }
}
