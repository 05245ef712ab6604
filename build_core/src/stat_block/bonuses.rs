//! Stat bonus records and the flat/percent bonus views

use crate::types::PrimaryStat;
use serde::{Deserialize, Serialize};

/// Bonuses granted by a single class or equipment entry
///
/// Every field defaults to zero, so data files only list what an entry grants.
/// The `*_percent` fields scale the total of a primary stat after flat bonuses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatBonuses {
    // === Primary (flat) ===
    pub strength: f64,
    pub arcane: f64,
    pub endurance: f64,
    pub speed: f64,
    pub luck: f64,

    // === Primary (percent) ===
    pub strength_percent: f64,
    pub arcane_percent: f64,
    pub endurance_percent: f64,
    pub speed_percent: f64,
    pub luck_percent: f64,

    // === Derived ===
    pub hp_bonus: f64,
    pub hp_regen: f64,
    pub energy_regen: f64,
    pub physical_defense: f64,
    pub magic_defense: f64,
    pub crit_chance: f64,
    /// Percent points, divided by 100 in the crit damage formula
    pub crit_damage: f64,
}

impl StatBonuses {
    /// Flat part of this record
    pub fn flat(&self) -> FlatBonuses {
        FlatBonuses {
            strength: self.strength,
            arcane: self.arcane,
            endurance: self.endurance,
            speed: self.speed,
            luck: self.luck,
            hp_bonus: self.hp_bonus,
            hp_regen: self.hp_regen,
            energy_regen: self.energy_regen,
            physical_defense: self.physical_defense,
            magic_defense: self.magic_defense,
            crit_chance: self.crit_chance,
            crit_damage: self.crit_damage,
        }
    }

    /// Percent part of this record
    pub fn percent(&self) -> PercentBonuses {
        PercentBonuses {
            strength: self.strength_percent,
            arcane: self.arcane_percent,
            endurance: self.endurance_percent,
            speed: self.speed_percent,
            luck: self.luck_percent,
        }
    }

    /// Human-readable list of the non-zero bonuses, e.g. `["+3 STR", "+10% STR"]`
    pub fn describe(&self) -> Vec<String> {
        let mut parts = Vec::new();
        let flat = self.flat();
        let percent = self.percent();
        for &stat in PrimaryStat::all() {
            let value = flat.primary(stat);
            if value != 0.0 {
                parts.push(format!("{:+} {}", value, stat.abbrev()));
            }
            let pct = percent.get(stat);
            if pct != 0.0 {
                parts.push(format!("{:+}% {}", pct, stat.abbrev()));
            }
        }
        for (label, value) in flat.derived() {
            if value != 0.0 {
                parts.push(format!("{:+} {}", value, label));
            }
        }
        parts
    }
}

/// Additive bonuses summed across a set of sources
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FlatBonuses {
    pub strength: f64,
    pub arcane: f64,
    pub endurance: f64,
    pub speed: f64,
    pub luck: f64,
    pub hp_bonus: f64,
    pub hp_regen: f64,
    pub energy_regen: f64,
    pub physical_defense: f64,
    pub magic_defense: f64,
    pub crit_chance: f64,
    pub crit_damage: f64,
}

impl FlatBonuses {
    /// Flat bonus for a primary stat
    pub fn primary(&self, stat: PrimaryStat) -> f64 {
        match stat {
            PrimaryStat::Strength => self.strength,
            PrimaryStat::Arcane => self.arcane,
            PrimaryStat::Endurance => self.endurance,
            PrimaryStat::Speed => self.speed,
            PrimaryStat::Luck => self.luck,
        }
    }

    /// Derived-stat bonuses with display labels
    pub fn derived(&self) -> [(&'static str, f64); 7] {
        [
            ("HP", self.hp_bonus),
            ("HP Regen", self.hp_regen),
            ("Energy Regen", self.energy_regen),
            ("Phys Def", self.physical_defense),
            ("Magic Def", self.magic_defense),
            ("Crit %", self.crit_chance),
            ("Crit Dmg %", self.crit_damage),
        ]
    }

    /// Field-wise sum
    pub fn add(&mut self, other: &FlatBonuses) {
        self.strength += other.strength;
        self.arcane += other.arcane;
        self.endurance += other.endurance;
        self.speed += other.speed;
        self.luck += other.luck;
        self.hp_bonus += other.hp_bonus;
        self.hp_regen += other.hp_regen;
        self.energy_regen += other.energy_regen;
        self.physical_defense += other.physical_defense;
        self.magic_defense += other.magic_defense;
        self.crit_chance += other.crit_chance;
        self.crit_damage += other.crit_damage;
    }
}

/// Percent modifiers for the primary stats, kept apart from flat bonuses
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PercentBonuses {
    pub strength: f64,
    pub arcane: f64,
    pub endurance: f64,
    pub speed: f64,
    pub luck: f64,
}

impl PercentBonuses {
    pub fn get(&self, stat: PrimaryStat) -> f64 {
        match stat {
            PrimaryStat::Strength => self.strength,
            PrimaryStat::Arcane => self.arcane,
            PrimaryStat::Endurance => self.endurance,
            PrimaryStat::Speed => self.speed,
            PrimaryStat::Luck => self.luck,
        }
    }

    pub fn add(&mut self, other: &PercentBonuses) {
        self.strength += other.strength;
        self.arcane += other.arcane;
        self.endurance += other.endurance;
        self.speed += other.speed;
        self.luck += other.luck;
    }
}
