//! Races - innate stat blocks and modifier metadata

use crate::stat_block::PrimaryAttributes;
use serde::{Deserialize, Serialize};

/// How a race is obtained
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RaceRarity {
    #[default]
    Common,
    Obtainable,
}

/// Race modifiers
///
/// Only `extra_stat_points` feeds the stat budget. The conversion coefficients,
/// flat bonus percents and tags are carried for display and are not read by the
/// derivation formula.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RaceModifiers {
    /// Extra attribute points added to the budget
    pub extra_stat_points: u32,
    /// x SPD => +crit%
    pub speed_to_crit: f64,
    /// x ARC => +magic damage%
    pub arc_to_damage: f64,
    pub bonus_crit_chance: f64,
    pub bonus_damage_percent: f64,
    pub bonus_defense_percent: f64,
    pub bonus_hp_regen: f64,
    pub tags: Vec<String>,
}

impl RaceModifiers {
    /// Human-readable list of the modifiers that are set
    pub fn describe(&self) -> Vec<String> {
        let mut parts = Vec::new();
        if self.extra_stat_points > 0 {
            parts.push(format!("+{} stat points", self.extra_stat_points));
        }
        let entries = [
            ("SPD to crit", self.speed_to_crit),
            ("ARC to damage", self.arc_to_damage),
            ("crit chance %", self.bonus_crit_chance),
            ("damage %", self.bonus_damage_percent),
            ("defense %", self.bonus_defense_percent),
            ("HP regen", self.bonus_hp_regen),
        ];
        for (label, value) in entries {
            if value != 0.0 {
                parts.push(format!("{:+} {}", value, label));
            }
        }
        parts
    }
}

/// A playable race
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Race {
    pub name: String,
    /// Innate STR/ARC/END/SPD/LCK, missing entries are zero
    #[serde(default)]
    pub base_stats: PrimaryAttributes<i32>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub rarity: RaceRarity,
    #[serde(default)]
    pub modifiers: RaceModifiers,
}

impl Race {
    /// Extra budget points granted by this race
    pub fn bonus_points(&self) -> u32 {
        self.modifiers.extra_stat_points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_race() {
        let race: Race = toml::from_str(
            r#"
name = "Dullahan"
description = "High stat scaling over levels."
base_stats = { STR = 3, ARC = 2, END = 4, LCK = 2, SPD = 1 }

[modifiers]
extra_stat_points = 3
tags = ["late-scaling"]
"#,
        )
        .unwrap();
        assert_eq!(race.base_stats.endurance, 4);
        assert_eq!(race.base_stats.speed, 1);
        assert_eq!(race.bonus_points(), 3);
        assert_eq!(race.rarity, RaceRarity::Common);
        assert_eq!(race.modifiers.tags, vec!["late-scaling"]);
    }

    #[test]
    fn test_race_without_modifiers() {
        let race: Race = toml::from_str(r#"name = "Plain""#).unwrap();
        assert_eq!(race.bonus_points(), 0);
        assert!(race.modifiers.describe().is_empty());
    }

    #[test]
    fn test_describe_modifiers() {
        let modifiers = RaceModifiers {
            extra_stat_points: 1,
            bonus_crit_chance: 5.0,
            ..Default::default()
        };
        assert_eq!(
            modifiers.describe(),
            vec!["+1 stat points", "+5 crit chance %"]
        );
    }
}
