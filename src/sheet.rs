//! The assembled character sheet.
//!
//! [`CharacterSheet`] is pure composition: it opens one store per slice over
//! a shared [`Bridge`] and hands the store handles out unchanged, so
//! presentation code has a single point of access without any extra logic in
//! between.

use std::sync::Arc;

use crate::storage::{Bridge, MemoryStorage};
use crate::store::{
    HealthWealthStore, InfoStore, ProfileStore, SecondaryStore, SkillsStore, StatsStore,
    TalentsStore,
};

/// All sheet slices behind one handle. Cloning shares every slice.
#[derive(Clone)]
pub struct CharacterSheet {
    profile: ProfileStore,
    stats: StatsStore,
    skills: SkillsStore,
    talents: TalentsStore,
    secondary: SecondaryStore,
    info: InfoStore,
    health_wealth: HealthWealthStore,
}

impl CharacterSheet {
    /// Open every slice over the given bridge, seeding defaults for whatever
    /// storage does not yet hold.
    pub fn open(bridge: Bridge) -> Self {
        Self {
            profile: ProfileStore::open(&bridge),
            stats: StatsStore::open(&bridge),
            skills: SkillsStore::open(&bridge),
            talents: TalentsStore::open(&bridge),
            secondary: SecondaryStore::open(&bridge),
            info: InfoStore::open(&bridge),
            health_wealth: HealthWealthStore::new(),
        }
    }

    /// A sheet over throwaway in-memory storage. Nothing survives the
    /// process; handy for tests and previews.
    pub fn in_memory() -> Self {
        Self::open(Bridge::new(Arc::new(MemoryStorage::new())))
    }

    pub fn profile(&self) -> &ProfileStore {
        &self.profile
    }

    pub fn stats(&self) -> &StatsStore {
        &self.stats
    }

    pub fn skills(&self) -> &SkillsStore {
        &self.skills
    }

    pub fn talents(&self) -> &TalentsStore {
        &self.talents
    }

    pub fn secondary(&self) -> &SecondaryStore {
        &self.secondary
    }

    pub fn info(&self) -> &InfoStore {
        &self.info
    }

    pub fn health_wealth(&self) -> &HealthWealthStore {
        &self.health_wealth
    }
}
