//! BonusAccumulator - Sums bonus contributions from classes and equipment

use crate::source::StatSource;
use crate::stat_block::bonuses::{FlatBonuses, PercentBonuses, StatBonuses};
use serde::{Deserialize, Serialize};

/// Summed bonuses of one source family (classes or equipment)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregatedBonuses {
    pub flat: FlatBonuses,
    pub percent: PercentBonuses,
}

/// Accumulates bonus contributions before they are read by the formula
///
/// Flat and percent contributions are kept in separate views; a percent
/// bonus is never folded into the flat sum.
#[derive(Debug, Clone, Default)]
pub struct BonusAccumulator {
    flat: FlatBonuses,
    percent: PercentBonuses,
    sources: usize,
}

impl BonusAccumulator {
    pub fn new() -> Self {
        BonusAccumulator::default()
    }

    /// Add one entry's bonus record
    pub fn add_bonuses(&mut self, bonuses: &StatBonuses) {
        self.flat.add(&bonuses.flat());
        self.percent.add(&bonuses.percent());
        self.sources += 1;
    }

    /// Number of records added so far
    pub fn source_count(&self) -> usize {
        self.sources
    }

    pub fn finish(self) -> AggregatedBonuses {
        AggregatedBonuses {
            flat: self.flat,
            percent: self.percent,
        }
    }
}

/// Sum the bonuses of every source in the iterator
///
/// An empty iterator yields all-zero bonuses.
pub fn aggregate<'a, S, I>(sources: I) -> AggregatedBonuses
where
    S: StatSource + ?Sized + 'a,
    I: IntoIterator<Item = &'a S>,
{
    let mut accumulator = BonusAccumulator::new();
    for source in sources {
        source.apply(&mut accumulator);
    }
    accumulator.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Equipment, GameClass};
    use crate::types::{ClassTier, SlotKind};
    use proptest::prelude::*;

    fn class_with(name: &str, bonuses: StatBonuses) -> GameClass {
        GameClass {
            name: name.to_string(),
            tier: ClassTier::Base,
            path: None,
            derived_from: Vec::new(),
            stat_bonuses: bonuses,
            description: String::new(),
        }
    }

    fn item_with(name: &str, bonuses: StatBonuses) -> Equipment {
        Equipment {
            name: name.to_string(),
            slot: SlotKind::Accessory,
            description: String::new(),
            stat_bonuses: bonuses,
            passive_effects: Vec::new(),
        }
    }

    #[test]
    fn test_empty_aggregate_is_zero() {
        let none: Vec<&GameClass> = Vec::new();
        let result = aggregate(none);
        assert_eq!(result, AggregatedBonuses::default());
    }

    #[test]
    fn test_regen_sums_across_classes() {
        let a = class_with(
            "A",
            StatBonuses {
                hp_regen: 2.0,
                ..Default::default()
            },
        );
        let b = class_with(
            "B",
            StatBonuses {
                hp_regen: 2.0,
                strength: 1.0,
                ..Default::default()
            },
        );
        let result = aggregate([&a, &b]);
        assert!((result.flat.hp_regen - 4.0).abs() < f64::EPSILON);
        assert!((result.flat.strength - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_percent_kept_separate() {
        let item = item_with(
            "Gi",
            StatBonuses {
                strength: 10.0,
                strength_percent: 10.0,
                ..Default::default()
            },
        );
        let result = aggregate([&item]);
        assert!((result.flat.strength - 10.0).abs() < f64::EPSILON);
        assert!((result.percent.strength - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_dyn_sources_mix() {
        let class = class_with(
            "A",
            StatBonuses {
                luck: 3.0,
                ..Default::default()
            },
        );
        let item = item_with(
            "Charm",
            StatBonuses {
                luck: 5.0,
                ..Default::default()
            },
        );
        let sources: Vec<&dyn StatSource> = vec![&class, &item];
        let result = aggregate(sources);
        assert!((result.flat.luck - 8.0).abs() < f64::EPSILON);
    }

    fn arb_bonuses() -> impl Strategy<Value = StatBonuses> {
        (
            -50.0f64..50.0,
            -50.0f64..50.0,
            -50.0f64..50.0,
            -20.0f64..20.0,
            -5.0f64..5.0,
            -30.0f64..30.0,
        )
            .prop_map(|(strength, luck, hp_bonus, strength_percent, hp_regen, crit_damage)| {
                StatBonuses {
                    strength,
                    luck,
                    hp_bonus,
                    strength_percent,
                    hp_regen,
                    crit_damage,
                    ..Default::default()
                }
            })
    }

    proptest! {
        /// Permuting the sources never changes the sums beyond rounding noise
        #[test]
        fn prop_aggregation_order_independent(
            bonuses in prop::collection::vec(arb_bonuses(), 0..6),
            rotate in 0usize..6
        ) {
            let items: Vec<Equipment> = bonuses
                .iter()
                .enumerate()
                .map(|(i, b)| item_with(&format!("item{}", i), *b))
                .collect();
            let forward = aggregate(items.iter());
            let mut shuffled: Vec<&Equipment> = items.iter().collect();
            shuffled.reverse();
            if !shuffled.is_empty() {
                let len = shuffled.len();
                shuffled.rotate_left(rotate % len);
            }
            let permuted = aggregate(shuffled);

            prop_assert!((forward.flat.strength - permuted.flat.strength).abs() < 1e-9);
            prop_assert!((forward.flat.luck - permuted.flat.luck).abs() < 1e-9);
            prop_assert!((forward.flat.hp_bonus - permuted.flat.hp_bonus).abs() < 1e-9);
            prop_assert!((forward.flat.hp_regen - permuted.flat.hp_regen).abs() < 1e-9);
            prop_assert!((forward.flat.crit_damage - permuted.flat.crit_damage).abs() < 1e-9);
            prop_assert!((forward.percent.strength - permuted.percent.strength).abs() < 1e-9);
        }
    }
}
