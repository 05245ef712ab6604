//! Stat derivation - combined attributes and bonuses into final combat stats

use crate::stat_block::{AggregatedBonuses, CombinedAttributes};
use crate::types::PrimaryStat;
use serde::{Deserialize, Serialize};

/// Health before any endurance or bonus
pub const BASE_HEALTH: f64 = 100.0;
pub const HEALTH_PER_ENDURANCE: f64 = 5.0;
/// Physical and magic damage both start at 100%
pub const BASE_DAMAGE: f64 = 100.0;
/// STR 9 -> +12.5%
pub const STRENGTH_DAMAGE_PER_POINT: f64 = 25.0 / 18.0;
/// ARC 10 -> +14%
pub const ARCANE_DAMAGE_PER_POINT: f64 = 7.0 / 5.0;
/// LCK 205 -> ~78.31% crit chance from luck alone
pub const CRIT_CHANCE_PER_LUCK: f64 = 0.382;
/// Base crit multiplier
pub const BASE_CRIT_DAMAGE: f64 = 1.75;
/// LCK 205 -> ~2.26x crit multiplier from luck alone
pub const CRIT_DAMAGE_PER_LUCK: f64 = 0.0024878;

/// Final derived combat statistics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinalStats {
    pub health: f64,
    /// Percent, 100 = no bonus
    pub physical_damage: f64,
    /// Percent, 100 = no bonus
    pub magic_damage: f64,
    /// Percent chance
    pub crit_chance: f64,
    /// Multiplier, e.g. 1.75x
    pub crit_damage: f64,
    pub hp_regen: f64,
    pub energy_regen: f64,
    pub physical_defense: f64,
    pub magic_defense: f64,
}

impl FinalStats {
    pub fn is_finite(&self) -> bool {
        [
            self.health,
            self.physical_damage,
            self.magic_damage,
            self.crit_chance,
            self.crit_damage,
            self.hp_regen,
            self.energy_regen,
            self.physical_defense,
            self.magic_defense,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

impl Default for FinalStats {
    /// The all-zero baseline: no race, no classes, no equipment, no points
    fn default() -> Self {
        derive_stats(
            &CombinedAttributes::default(),
            &AggregatedBonuses::default(),
            &AggregatedBonuses::default(),
        )
    }
}

/// Total of a primary stat: combined attribute + class flat + equipment flat
pub fn total_primary(
    stat: PrimaryStat,
    combined: &CombinedAttributes,
    class_bonuses: &AggregatedBonuses,
    equip_bonuses: &AggregatedBonuses,
) -> f64 {
    f64::from(combined.get(stat))
        + class_bonuses.flat.primary(stat)
        + equip_bonuses.flat.primary(stat)
}

/// Class + equipment percent modifier for a primary stat
pub fn percent_sum(
    stat: PrimaryStat,
    class_bonuses: &AggregatedBonuses,
    equip_bonuses: &AggregatedBonuses,
) -> f64 {
    class_bonuses.percent.get(stat) + equip_bonuses.percent.get(stat)
}

/// Whether a primary stat has a percent channel in the formula
pub fn has_percent_scaling(stat: PrimaryStat) -> bool {
    matches!(stat, PrimaryStat::Strength | PrimaryStat::Arcane)
}

/// Derive final combat stats
///
/// 1. Totals: combined + class flat + equipment flat, per primary stat
/// 2. Percent scaling: strength and arcane only, `total * (1 + percent / 100)`
/// 3. Derived stats as closed-form functions of totals and flat bonuses
pub fn derive_stats(
    combined: &CombinedAttributes,
    class_bonuses: &AggregatedBonuses,
    equip_bonuses: &AggregatedBonuses,
) -> FinalStats {
    let total = |stat| total_primary(stat, combined, class_bonuses, equip_bonuses);
    let total_strength = total(PrimaryStat::Strength);
    let total_arcane = total(PrimaryStat::Arcane);
    let total_endurance = total(PrimaryStat::Endurance);
    let total_luck = total(PrimaryStat::Luck);

    let effective_strength = total_strength
        * (1.0 + percent_sum(PrimaryStat::Strength, class_bonuses, equip_bonuses) / 100.0);
    let effective_arcane = total_arcane
        * (1.0 + percent_sum(PrimaryStat::Arcane, class_bonuses, equip_bonuses) / 100.0);

    let class = &class_bonuses.flat;
    let equip = &equip_bonuses.flat;

    FinalStats {
        health: BASE_HEALTH
            + total_endurance * HEALTH_PER_ENDURANCE
            + class.hp_bonus
            + equip.hp_bonus,
        physical_damage: BASE_DAMAGE + effective_strength * STRENGTH_DAMAGE_PER_POINT,
        magic_damage: BASE_DAMAGE + effective_arcane * ARCANE_DAMAGE_PER_POINT,
        crit_chance: total_luck * CRIT_CHANCE_PER_LUCK + class.crit_chance + equip.crit_chance,
        crit_damage: BASE_CRIT_DAMAGE
            + total_luck * CRIT_DAMAGE_PER_LUCK
            + (class.crit_damage + equip.crit_damage) / 100.0,
        hp_regen: class.hp_regen + equip.hp_regen,
        energy_regen: class.energy_regen + equip.energy_regen,
        physical_defense: class.physical_defense + equip.physical_defense,
        magic_defense: class.magic_defense + equip.magic_defense,
    }
}
