//! Static reference tables for a new sheet.
//!
//! Default stats, skills, and talents, plus the presentation icon lookup.
//! Icons are display metadata and deliberately not part of the persisted
//! records: they are derived from the stable stat code, so a reloaded sheet
//! can never come back with misaligned icons.

use crate::character::{Skill, Stat, Talent};

/// Display icon handle for a stat. The presentation layer maps each variant
/// to its actual glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatIcon {
    Shield,
    Target,
    Dumbbell,
    Wind,
    ArrowRight,
    Brain,
    Compass,
    MessageCircle,
}

impl StatIcon {
    /// Icon for a stat code. Unknown codes fall back to the first reference
    /// stat's icon.
    pub fn for_short(short: &str) -> StatIcon {
        match short {
            "KG" | "WI" => StatIcon::Shield,
            "BF" => StatIcon::Target,
            "ST" => StatIcon::Dumbbell,
            "GW" => StatIcon::Wind,
            "GS" => StatIcon::ArrowRight,
            "IN" => StatIcon::Brain,
            "WK" => StatIcon::Compass,
            "CH" => StatIcon::MessageCircle,
            _ => StatIcon::Shield,
        }
    }
}

lazy_static::lazy_static! {
    /// The nine characteristics of a fresh sheet, in sheet order. The order
    /// is meaningful: stats are addressed by position when editing.
    pub static ref DEFAULT_STATS: Vec<Stat> = vec![
        Stat::new("Kampfgeschick", "KG", 30, 5),
        Stat::new("Ballistische Fertigkeit", "BF", 30, 0),
        Stat::new("Stärke", "ST", 30, 5),
        Stat::new("Widerstand", "WI", 30, 10),
        Stat::new("Gewandtheit", "GW", 30, 5),
        Stat::new("Geschwindigkeit", "GS", 30, 0),
        Stat::new("Intelligenz", "IN", 30, 5),
        Stat::new("Willenskraft", "WK", 30, 0),
        Stat::new("Charisma", "CH", 30, 0),
    ];

    /// Starter skills every new sheet begins with.
    pub static ref DEFAULT_SKILLS: Vec<Skill> = vec![
        skill("1", "Anführen", "CH"),
        skill("2", "Klettern", "ST"),
        skill("3", "Orientierung", "IN"),
        skill("4", "Reiten", "GW"),
        skill("5", "Schleichen", "GW"),
    ];

    /// Two blank talent rows so the sheet never starts empty.
    pub static ref DEFAULT_TALENTS: Vec<Talent> = vec![
        blank_talent("talent1"),
        blank_talent("talent2"),
    ];
}

fn skill(id: &str, name: &str, spielwert: &str) -> Skill {
    Skill {
        id: id.to_string(),
        name: name.to_string(),
        spielwert: spielwert.to_string(),
        steigerung: 0,
    }
}

fn blank_talent(id: &str) -> Talent {
    Talent {
        id: id.to_string(),
        ..Default::default()
    }
}
