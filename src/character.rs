//! Character-sheet data types.
//!
//! Contains the persisted shape of every sheet slice: profile, stats,
//! skills, talents, secondary attributes, goals, group info, and the
//! session-only health/wealth block. Field names follow the German sheet
//! layout and double as the persisted JSON keys.
//!
//! Every persisted type carries `#[serde(default)]` so that a stale stored
//! shape (saved before a field existed) still deserializes into a
//! structurally complete value.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::reference::StatIcon;

/// Mint a fresh record id for skills and talents.
///
/// Ids are plain strings; uniqueness within a collection is the caller's
/// responsibility, and this is the supported way to get a collision-free one.
pub fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}

// ============================================================================
// Profile
// ============================================================================

/// The character's identity block.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterProfile {
    pub name: String,
    /// Race, e.g. "Mensch" or "Zwerg".
    pub volk: String,
    /// Class, e.g. "Krieger".
    pub klasse: String,
    /// Career, e.g. "Söldner".
    pub karriere: String,
    /// Portrait as an already-encoded image string (data URL), if any.
    /// Encoding from a file input is the presentation layer's job.
    pub portrait: Option<String>,
}

/// Partial update for [`CharacterProfile`]. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub volk: Option<String>,
    pub klasse: Option<String>,
    pub karriere: Option<String>,
    /// `Some(None)` clears the portrait.
    pub portrait: Option<Option<String>>,
}

impl ProfilePatch {
    pub fn apply(self, profile: &mut CharacterProfile) {
        if let Some(name) = self.name {
            profile.name = name;
        }
        if let Some(volk) = self.volk {
            profile.volk = volk;
        }
        if let Some(klasse) = self.klasse {
            profile.klasse = klasse;
        }
        if let Some(karriere) = self.karriere {
            profile.karriere = karriere;
        }
        if let Some(portrait) = self.portrait {
            profile.portrait = portrait;
        }
    }
}

// ============================================================================
// Stats (Spielwerte)
// ============================================================================

/// A primary characteristic ("Spielwert"): percentile base value plus
/// advances.
///
/// Stats form a fixed, ordered sequence (see
/// [`DEFAULT_STATS`](crate::reference::DEFAULT_STATS)); they are edited in
/// place and never added or removed, so their order is stable across
/// persistence round-trips.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Stat {
    pub name: String,
    /// Two-letter code, e.g. "ST". Skills reference stats by this code.
    pub short: String,
    /// Base value.
    pub start: i32,
    /// Advances bought on top of the base value.
    pub increase: i32,
}

impl Stat {
    pub fn new(name: impl Into<String>, short: impl Into<String>, start: i32, increase: i32) -> Self {
        Self {
            name: name.into(),
            short: short.into(),
            start,
            increase,
        }
    }

    /// Current total shown on the sheet.
    pub fn total(&self) -> i32 {
        self.start + self.increase
    }

    /// Display icon for this stat, derived from its code.
    pub fn icon(&self) -> StatIcon {
        StatIcon::for_short(&self.short)
    }
}

/// Partial update for a [`Stat`].
#[derive(Debug, Clone, Default)]
pub struct StatPatch {
    pub name: Option<String>,
    pub short: Option<String>,
    pub start: Option<i32>,
    pub increase: Option<i32>,
}

impl StatPatch {
    pub fn apply(self, stat: &mut Stat) {
        if let Some(name) = self.name {
            stat.name = name;
        }
        if let Some(short) = self.short {
            stat.short = short;
        }
        if let Some(start) = self.start {
            stat.start = start;
        }
        if let Some(increase) = self.increase {
            stat.increase = increase;
        }
    }
}

/// A stat entry prepared for a selection widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatOption {
    pub short: String,
    /// Display label, e.g. "Stärke (ST)".
    pub label: String,
    pub start: i32,
}

/// Build the selectable stat list for skill editing.
pub fn stat_options(stats: &[Stat]) -> Vec<StatOption> {
    stats
        .iter()
        .map(|stat| StatOption {
            short: stat.short.clone(),
            label: format!("{} ({})", stat.name, stat.short),
            start: stat.start,
        })
        .collect()
}

// ============================================================================
// Skills
// ============================================================================

/// A learned skill, linked to a stat by its code.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub id: String,
    pub name: String,
    /// Code of the stat this skill rolls against.
    pub spielwert: String,
    /// Advances on top of the linked stat's base value.
    pub steigerung: i32,
}

impl Skill {
    /// Create a skill with a freshly minted id.
    pub fn new(name: impl Into<String>, spielwert: impl Into<String>, steigerung: i32) -> Self {
        Self {
            id: fresh_id(),
            name: name.into(),
            spielwert: spielwert.into(),
            steigerung,
        }
    }

    /// Effective skill value: the linked stat's base value plus this skill's
    /// advances. A code that resolves to no stat yields 0.
    pub fn effective_value(&self, stats: &[Stat]) -> i32 {
        stats
            .iter()
            .find(|stat| stat.short == self.spielwert)
            .map(|stat| stat.start + self.steigerung)
            .unwrap_or(0)
    }
}

/// Partial update for a [`Skill`]. The id itself is never patched.
#[derive(Debug, Clone, Default)]
pub struct SkillPatch {
    pub name: Option<String>,
    pub spielwert: Option<String>,
    pub steigerung: Option<i32>,
}

impl SkillPatch {
    pub fn apply(self, skill: &mut Skill) {
        if let Some(name) = self.name {
            skill.name = name;
        }
        if let Some(spielwert) = self.spielwert {
            skill.spielwert = spielwert;
        }
        if let Some(steigerung) = self.steigerung {
            skill.steigerung = steigerung;
        }
    }
}

// ============================================================================
// Talents
// ============================================================================

/// A talent: a named special ability with a tier and free-text description.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Talent {
    pub id: String,
    pub name: String,
    /// Tier/level, kept as free text ("1", "Meister", ...).
    pub stufe: String,
    pub beschreibung: String,
}

impl Talent {
    /// Create a talent with a freshly minted id.
    pub fn new(name: impl Into<String>, stufe: impl Into<String>, beschreibung: impl Into<String>) -> Self {
        Self {
            id: fresh_id(),
            name: name.into(),
            stufe: stufe.into(),
            beschreibung: beschreibung.into(),
        }
    }
}

/// Partial update for a [`Talent`]. The id itself is never patched.
#[derive(Debug, Clone, Default)]
pub struct TalentPatch {
    pub name: Option<String>,
    pub stufe: Option<String>,
    pub beschreibung: Option<String>,
}

impl TalentPatch {
    pub fn apply(self, talent: &mut Talent) {
        if let Some(name) = self.name {
            talent.name = name;
        }
        if let Some(stufe) = self.stufe {
            talent.stufe = stufe;
        }
        if let Some(beschreibung) = self.beschreibung {
            talent.beschreibung = beschreibung;
        }
    }
}

// ============================================================================
// Secondary attributes
// ============================================================================

/// Fate points.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FateAttributes {
    pub schicksal: i32,
    pub glueck: i32,
}

/// Toughness and resolve.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToughnessAttributes {
    pub zaehigkeit: i32,
    #[serde(rename = "mut")]
    pub mut_: i32,
    pub motivation: String,
}

/// Experience points: current, spent, lifetime total.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceAttributes {
    pub aktuell: i32,
    pub ausgegeben: i32,
    pub gesamt: i32,
}

/// Movement rates.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementAttributes {
    pub bewegung: i32,
    pub gehen: i32,
    pub rennen: i32,
}

/// The four secondary attribute groups. Each group is patched independently;
/// updating one never disturbs its siblings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterSecondary {
    pub fate: FateAttributes,
    pub toughness: ToughnessAttributes,
    pub experience: ExperienceAttributes,
    pub movement: MovementAttributes,
}

/// Partial update for [`FateAttributes`].
#[derive(Debug, Clone, Default)]
pub struct FatePatch {
    pub schicksal: Option<i32>,
    pub glueck: Option<i32>,
}

/// Partial update for [`ToughnessAttributes`].
#[derive(Debug, Clone, Default)]
pub struct ToughnessPatch {
    pub zaehigkeit: Option<i32>,
    pub mut_: Option<i32>,
    pub motivation: Option<String>,
}

/// Partial update for [`ExperienceAttributes`].
#[derive(Debug, Clone, Default)]
pub struct ExperiencePatch {
    pub aktuell: Option<i32>,
    pub ausgegeben: Option<i32>,
    pub gesamt: Option<i32>,
}

/// Partial update for [`MovementAttributes`].
#[derive(Debug, Clone, Default)]
pub struct MovementPatch {
    pub bewegung: Option<i32>,
    pub gehen: Option<i32>,
    pub rennen: Option<i32>,
}

/// Partial update for [`CharacterSecondary`]: any subset of groups, each
/// itself partial.
#[derive(Debug, Clone, Default)]
pub struct SecondaryPatch {
    pub fate: Option<FatePatch>,
    pub toughness: Option<ToughnessPatch>,
    pub experience: Option<ExperiencePatch>,
    pub movement: Option<MovementPatch>,
}

impl SecondaryPatch {
    pub fn apply(self, secondary: &mut CharacterSecondary) {
        if let Some(fate) = self.fate {
            if let Some(schicksal) = fate.schicksal {
                secondary.fate.schicksal = schicksal;
            }
            if let Some(glueck) = fate.glueck {
                secondary.fate.glueck = glueck;
            }
        }
        if let Some(toughness) = self.toughness {
            if let Some(zaehigkeit) = toughness.zaehigkeit {
                secondary.toughness.zaehigkeit = zaehigkeit;
            }
            if let Some(mut_) = toughness.mut_ {
                secondary.toughness.mut_ = mut_;
            }
            if let Some(motivation) = toughness.motivation {
                secondary.toughness.motivation = motivation;
            }
        }
        if let Some(experience) = self.experience {
            if let Some(aktuell) = experience.aktuell {
                secondary.experience.aktuell = aktuell;
            }
            if let Some(ausgegeben) = experience.ausgegeben {
                secondary.experience.ausgegeben = ausgegeben;
            }
            if let Some(gesamt) = experience.gesamt {
                secondary.experience.gesamt = gesamt;
            }
        }
        if let Some(movement) = self.movement {
            if let Some(bewegung) = movement.bewegung {
                secondary.movement.bewegung = bewegung;
            }
            if let Some(gehen) = movement.gehen {
                secondary.movement.gehen = gehen;
            }
            if let Some(rennen) = movement.rennen {
                secondary.movement.rennen = rennen;
            }
        }
    }
}

// ============================================================================
// Goals and group
// ============================================================================

/// Short- and long-term character goals.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Goals {
    pub kurzfristig: String,
    pub langfristig: String,
}

/// Partial update for [`Goals`].
#[derive(Debug, Clone, Default)]
pub struct GoalsPatch {
    pub kurzfristig: Option<String>,
    pub langfristig: Option<String>,
}

impl GoalsPatch {
    pub fn apply(self, goals: &mut Goals) {
        if let Some(kurzfristig) = self.kurzfristig {
            goals.kurzfristig = kurzfristig;
        }
        if let Some(langfristig) = self.langfristig {
            goals.langfristig = langfristig;
        }
    }
}

/// The adventuring party: name, shared goals, member roster.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupData {
    pub name: String,
    pub kurzfristig: String,
    pub langfristig: String,
    /// Free-text member roster.
    pub mitglieder: String,
}

/// Partial update for [`GroupData`].
#[derive(Debug, Clone, Default)]
pub struct GroupPatch {
    pub name: Option<String>,
    pub kurzfristig: Option<String>,
    pub langfristig: Option<String>,
    pub mitglieder: Option<String>,
}

impl GroupPatch {
    pub fn apply(self, group: &mut GroupData) {
        if let Some(name) = self.name {
            group.name = name;
        }
        if let Some(kurzfristig) = self.kurzfristig {
            group.kurzfristig = kurzfristig;
        }
        if let Some(langfristig) = self.langfristig {
            group.langfristig = langfristig;
        }
        if let Some(mitglieder) = self.mitglieder {
            group.mitglieder = mitglieder;
        }
    }
}

// ============================================================================
// Health and wealth (session-only)
// ============================================================================

/// Robustness and life points.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Health {
    pub robustheit: i32,
    pub lp: i32,
}

/// Coin purse in gold, silver, and brass.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Wealth {
    pub gold: i32,
    pub silber: i32,
    pub groschen: i32,
}

/// Combined health/wealth block. Tracked for the running session only and
/// never written to durable storage.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthWealth {
    pub health: Health,
    pub wealth: Wealth,
}

/// Partial update for [`Health`].
#[derive(Debug, Clone, Default)]
pub struct HealthPatch {
    pub robustheit: Option<i32>,
    pub lp: Option<i32>,
}

impl HealthPatch {
    pub fn apply(self, health: &mut Health) {
        if let Some(robustheit) = self.robustheit {
            health.robustheit = robustheit;
        }
        if let Some(lp) = self.lp {
            health.lp = lp;
        }
    }
}

/// Partial update for [`Wealth`].
#[derive(Debug, Clone, Default)]
pub struct WealthPatch {
    pub gold: Option<i32>,
    pub silber: Option<i32>,
    pub groschen: Option<i32>,
}

impl WealthPatch {
    pub fn apply(self, wealth: &mut Wealth) {
        if let Some(gold) = self.gold {
            wealth.gold = gold;
        }
        if let Some(silber) = self.silber {
            wealth.silber = silber;
        }
        if let Some(groschen) = self.groschen {
            wealth.groschen = groschen;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_patch_merges_only_given_fields() {
        let mut profile = CharacterProfile {
            name: "Gunnar".to_string(),
            volk: "Zwerg".to_string(),
            ..Default::default()
        };

        ProfilePatch {
            karriere: Some("Söldner".to_string()),
            ..Default::default()
        }
        .apply(&mut profile);

        assert_eq!(profile.name, "Gunnar");
        assert_eq!(profile.volk, "Zwerg");
        assert_eq!(profile.karriere, "Söldner");
    }

    #[test]
    fn test_profile_patch_can_clear_portrait() {
        let mut profile = CharacterProfile {
            portrait: Some("data:image/png;base64,AAAA".to_string()),
            ..Default::default()
        };

        ProfilePatch {
            portrait: Some(None),
            ..Default::default()
        }
        .apply(&mut profile);

        assert_eq!(profile.portrait, None);
    }

    #[test]
    fn test_patch_application_is_idempotent() {
        let mut once = Goals::default();
        let mut twice = Goals::default();
        let patch = GoalsPatch {
            kurzfristig: Some("Die Brücke halten".to_string()),
            ..Default::default()
        };

        patch.clone().apply(&mut once);
        patch.clone().apply(&mut twice);
        patch.apply(&mut twice);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_effective_value_adds_advances_to_stat_base() {
        let stats = vec![Stat::new("Stärke", "ST", 30, 5), Stat::new("Intelligenz", "IN", 35, 0)];
        let skill = Skill {
            id: "1".to_string(),
            name: "Klettern".to_string(),
            spielwert: "ST".to_string(),
            steigerung: 5,
        };

        // Base value, not the stat total: 30 + 5, the stat's own advances
        // play no part.
        assert_eq!(skill.effective_value(&stats), 35);
    }

    #[test]
    fn test_effective_value_unknown_code_is_zero() {
        let stats = vec![Stat::new("Stärke", "ST", 30, 5)];
        let skill = Skill {
            id: "1".to_string(),
            name: "Klettern".to_string(),
            spielwert: "XX".to_string(),
            steigerung: 5,
        };

        assert_eq!(skill.effective_value(&stats), 0);
    }

    #[test]
    fn test_secondary_patch_leaves_sibling_groups_untouched() {
        let mut secondary = CharacterSecondary {
            toughness: ToughnessAttributes {
                zaehigkeit: 4,
                mut_: 3,
                motivation: "Rache".to_string(),
            },
            experience: ExperienceAttributes {
                aktuell: 100,
                ausgegeben: 250,
                gesamt: 350,
            },
            ..Default::default()
        };
        let before = secondary.clone();

        SecondaryPatch {
            fate: Some(FatePatch {
                schicksal: Some(2),
                ..Default::default()
            }),
            ..Default::default()
        }
        .apply(&mut secondary);

        assert_eq!(secondary.fate.schicksal, 2);
        assert_eq!(secondary.fate.glueck, 0);
        assert_eq!(secondary.toughness, before.toughness);
        assert_eq!(secondary.experience, before.experience);
        assert_eq!(secondary.movement, before.movement);
    }

    #[test]
    fn test_nested_group_patch_is_field_wise() {
        let mut secondary = CharacterSecondary::default();
        secondary.toughness.motivation = "Gold".to_string();

        SecondaryPatch {
            toughness: Some(ToughnessPatch {
                mut_: Some(5),
                ..Default::default()
            }),
            ..Default::default()
        }
        .apply(&mut secondary);

        assert_eq!(secondary.toughness.mut_, 5);
        assert_eq!(secondary.toughness.motivation, "Gold");
    }

    #[test]
    fn test_toughness_mut_field_serializes_under_its_sheet_name() {
        let toughness = ToughnessAttributes {
            zaehigkeit: 1,
            mut_: 2,
            motivation: String::new(),
        };
        let json = serde_json::to_value(&toughness).unwrap();

        assert_eq!(json["mut"], 2);
    }

    #[test]
    fn test_stale_stored_shape_default_fills() {
        // A blob saved before the movement group existed.
        let secondary: CharacterSecondary =
            serde_json::from_str(r#"{"fate":{"schicksal":3,"glueck":1}}"#).unwrap();

        assert_eq!(secondary.fate.schicksal, 3);
        assert_eq!(secondary.movement, MovementAttributes::default());
        assert_eq!(secondary.toughness.motivation, "");
    }

    #[test]
    fn test_stat_options_carry_label_and_base() {
        let stats = vec![Stat::new("Gewandtheit", "GW", 30, 5)];
        let options = stat_options(&stats);

        assert_eq!(options.len(), 1);
        assert_eq!(options[0].short, "GW");
        assert_eq!(options[0].label, "Gewandtheit (GW)");
        assert_eq!(options[0].start, 30);
    }

    #[test]
    fn test_fresh_ids_do_not_collide() {
        let a = fresh_id();
        let b = fresh_id();
        assert_ne!(a, b);
    }
}
