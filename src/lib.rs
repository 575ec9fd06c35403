//! State and persistence layer for a Warhammer-style character sheet.
//!
//! This crate provides:
//! - Per-slice state stores (profile, stats, skills, talents, secondary
//!   attributes, goals/group, health/wealth) with partial-merge updates
//! - A durable key-value bridge that mirrors every change into storage and
//!   rehydrates it on the next load, best-effort and never failing the sheet
//! - Derived skill values and the static reference tables a new sheet
//!   starts from
//!
//! # Quick Start
//!
//! ```
//! use charakterbogen::{CharacterSheet, ProfilePatch, Skill};
//!
//! let sheet = CharacterSheet::in_memory();
//!
//! sheet.profile().update(ProfilePatch {
//!     name: Some("Gunnar Eisenfaust".to_string()),
//!     ..Default::default()
//! });
//!
//! sheet.skills().add(Skill::new("Springen", "GW", 3));
//!
//! let stats = sheet.stats().get();
//! for skill in sheet.skills().get() {
//!     println!("{}: {}", skill.name, skill.effective_value(&stats));
//! }
//! ```
//!
//! For a sheet that survives restarts, open it over file-backed storage:
//!
//! ```no_run
//! use std::sync::Arc;
//! use charakterbogen::{Bridge, CharacterSheet, FileStorage};
//!
//! let sheet = CharacterSheet::open(Bridge::new(Arc::new(FileStorage::open_default())));
//! ```

pub mod character;
pub mod reference;
pub mod sheet;
pub mod storage;
pub mod store;

// Primary public API
pub use character::{
    fresh_id, stat_options, CharacterProfile, CharacterSecondary, ExperiencePatch, FatePatch,
    Goals, GoalsPatch, GroupData, GroupPatch, Health, HealthPatch, HealthWealth, MovementPatch,
    ProfilePatch, SecondaryPatch, Skill, SkillPatch, Stat, StatOption, StatPatch, Talent,
    TalentPatch, ToughnessPatch, Wealth, WealthPatch,
};
pub use reference::{StatIcon, DEFAULT_SKILLS, DEFAULT_STATS, DEFAULT_TALENTS};
pub use sheet::CharacterSheet;
pub use storage::{Bridge, FileStorage, MemoryStorage, StorageBackend, StorageError};
pub use store::{
    HealthWealthStore, InfoStore, ProfileStore, SecondaryStore, SkillsStore, StatsStore,
    TalentsStore,
};
