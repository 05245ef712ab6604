//! Per-stat breakdown of where a primary attribute's value comes from

use crate::dataset::Race;
use crate::stat_block::formula::{has_percent_scaling, percent_sum};
use crate::stat_block::{AggregatedBonuses, Allocation};
use crate::types::PrimaryStat;
use serde::{Deserialize, Serialize};

/// Contributions to a single primary stat
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatBreakdown {
    pub stat: PrimaryStat,
    pub race_innate: i32,
    pub level_scaling: u32,
    pub allocated: u32,
    pub class_flat: f64,
    pub equipment_flat: f64,
    /// Class + equipment percent modifier
    pub percent: f64,
    /// Sum of every flat contribution
    pub total: f64,
    /// Total after percent scaling (equal to `total` for stats without a percent channel)
    pub effective: f64,
}

impl StatBreakdown {
    /// Whether the percent modifier changes this stat's derived values
    pub fn percent_applies(&self) -> bool {
        has_percent_scaling(self.stat)
    }
}

/// Build a breakdown row for every primary stat
///
/// Sums agree with `combine_attributes` followed by the totals step of
/// `derive_stats`.
pub fn breakdown(
    race: Option<&Race>,
    scaling_increment: u32,
    allocation: &Allocation,
    class_bonuses: &AggregatedBonuses,
    equip_bonuses: &AggregatedBonuses,
) -> Vec<StatBreakdown> {
    PrimaryStat::all()
        .iter()
        .map(|&stat| {
            let (race_innate, level_scaling) = match race {
                Some(race) => (race.base_stats.get(stat), scaling_increment),
                None => (0, 0),
            };
            let allocated = allocation.get(stat);
            let class_flat = class_bonuses.flat.primary(stat);
            let equipment_flat = equip_bonuses.flat.primary(stat);
            let total = f64::from(race_innate)
                + f64::from(level_scaling)
                + f64::from(allocated)
                + class_flat
                + equipment_flat;
            let percent = percent_sum(stat, class_bonuses, equip_bonuses);
            let effective = if has_percent_scaling(stat) {
                total * (1.0 + percent / 100.0)
            } else {
                total
            };
            StatBreakdown {
                stat,
                race_innate,
                level_scaling,
                allocated,
                class_flat,
                equipment_flat,
                percent,
                total,
                effective,
            }
        })
        .collect()
}
