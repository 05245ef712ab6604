//! PrimaryAttributes - The five-field attribute block and the attribute combiner

use crate::dataset::Race;
use crate::types::PrimaryStat;
use serde::{Deserialize, Serialize};

/// A value for each of the five primary stats
///
/// Used for race innate stats, raw point allocations and combined attributes.
/// Missing fields deserialize to the type's default (zero).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct PrimaryAttributes<T> {
    #[serde(alias = "STR")]
    pub strength: T,
    #[serde(alias = "ARC")]
    pub arcane: T,
    #[serde(alias = "END")]
    pub endurance: T,
    #[serde(alias = "SPD")]
    pub speed: T,
    #[serde(alias = "LCK")]
    pub luck: T,
}

/// Raw points the user has spent
pub type Allocation = PrimaryAttributes<u32>;

/// Race innate + level scaling + allocation
pub type CombinedAttributes = PrimaryAttributes<i32>;

impl<T: Copy> PrimaryAttributes<T> {
    pub fn get(&self, stat: PrimaryStat) -> T {
        match stat {
            PrimaryStat::Strength => self.strength,
            PrimaryStat::Arcane => self.arcane,
            PrimaryStat::Endurance => self.endurance,
            PrimaryStat::Speed => self.speed,
            PrimaryStat::Luck => self.luck,
        }
    }

    pub fn set(&mut self, stat: PrimaryStat, value: T) {
        match stat {
            PrimaryStat::Strength => self.strength = value,
            PrimaryStat::Arcane => self.arcane = value,
            PrimaryStat::Endurance => self.endurance = value,
            PrimaryStat::Speed => self.speed = value,
            PrimaryStat::Luck => self.luck = value,
        }
    }

    /// Iterate over (stat, value) pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (PrimaryStat, T)> + '_ {
        PrimaryStat::all().iter().map(move |stat| (*stat, self.get(*stat)))
    }
}

impl Allocation {
    /// Sum of all allocated points
    pub fn total(&self) -> u32 {
        self.iter().fold(0u32, |acc, (_, value)| acc.saturating_add(value))
    }
}

/// Merge race innate stats, the per-level scaling increment and raw allocations
///
/// With a race: `innate + scaling + allocated` for each stat.
/// Without a race: the allocation alone (no scaling either).
pub fn combine_attributes(
    race: Option<&Race>,
    scaling_increment: u32,
    allocation: &Allocation,
) -> CombinedAttributes {
    let mut combined = CombinedAttributes::default();
    for &stat in PrimaryStat::all() {
        let allocated = clamp_to_i32(allocation.get(stat));
        let value = match race {
            Some(race) => race
                .base_stats
                .get(stat)
                .saturating_add(clamp_to_i32(scaling_increment))
                .saturating_add(allocated),
            None => allocated,
        };
        combined.set(stat, value);
    }
    combined
}

fn clamp_to_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
