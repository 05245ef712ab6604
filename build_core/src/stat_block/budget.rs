//! StatBudget - Level-based spend cap for primary attribute points

use crate::config::BuildConstants;
use crate::stat_block::Allocation;
use crate::types::PrimaryStat;
use serde::{Deserialize, Serialize};

/// Total spendable attribute points for a build
///
/// `total = (level_cap - 1) * points_per_level + race_bonus_points`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBudget {
    /// Points granted by levels alone
    pub base: u32,
    /// Extra points granted by the selected race
    pub race_bonus: u32,
}

impl StatBudget {
    pub fn new(constants: &BuildConstants, race_bonus: u32) -> Self {
        StatBudget {
            base: constants.base_budget(),
            race_bonus,
        }
    }

    pub fn total(&self) -> u32 {
        self.base.saturating_add(self.race_bonus)
    }

    /// Points left to spend; zero when the allocation already fills the budget
    pub fn remaining(&self, allocation: &Allocation) -> u32 {
        self.total().saturating_sub(allocation.total())
    }

    /// Clamp an attempted edit of one attribute so the aggregate stays within budget
    ///
    /// Negative requests are floored to zero first. If the other attributes plus
    /// the request exceed the budget, the request is cut to whatever is left.
    /// Applying the clamp to an already admissible value returns it unchanged.
    pub fn clamp_edit(&self, allocation: &Allocation, stat: PrimaryStat, requested: i64) -> u32 {
        let requested = u32::try_from(requested.max(0)).unwrap_or(u32::MAX);
        let other_total = allocation.total().saturating_sub(allocation.get(stat));
        let budget = self.total();

        if u64::from(other_total) + u64::from(requested) > u64::from(budget) {
            budget.saturating_sub(other_total)
        } else {
            requested
        }
    }

    /// Shrink an allocation until it fits this budget
    ///
    /// Points are removed starting from the last primary stat (luck) and working
    /// back toward strength. Returns true if anything changed.
    pub fn reclamp(&self, allocation: &mut Allocation) -> bool {
        let mut excess = allocation.total().saturating_sub(self.total());
        if excess == 0 {
            return false;
        }
        for &stat in PrimaryStat::all().iter().rev() {
            if excess == 0 {
                break;
            }
            let current = allocation.get(stat);
            let cut = current.min(excess);
            allocation.set(stat, current - cut);
            excess -= cut;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn reference_budget(race_bonus: u32) -> StatBudget {
        StatBudget::new(&BuildConstants::default(), race_bonus)
    }

    #[test]
    fn test_reference_budget() {
        assert_eq!(reference_budget(0).total(), 195);
        assert_eq!(reference_budget(3).total(), 198);
    }

    #[test]
    fn test_remaining() {
        let budget = reference_budget(0);
        let alloc = Allocation {
            strength: 50,
            luck: 45,
            ..Default::default()
        };
        assert_eq!(budget.remaining(&alloc), 100);
    }

    #[test]
    fn test_clamp_over_budget() {
        // Others total 190, asking for 20 strength leaves room for 5
        let budget = reference_budget(0);
        let alloc = Allocation {
            arcane: 100,
            endurance: 90,
            ..Default::default()
        };
        assert_eq!(budget.clamp_edit(&alloc, PrimaryStat::Strength, 20), 5);
    }

    #[test]
    fn test_clamp_accepts_within_budget() {
        let budget = reference_budget(0);
        let alloc = Allocation::default();
        assert_eq!(budget.clamp_edit(&alloc, PrimaryStat::Luck, 120), 120);
    }

    #[test]
    fn test_clamp_ignores_current_value_of_edited_stat() {
        // Lowering or replacing the edited stat frees its own points
        let budget = reference_budget(0);
        let alloc = Allocation {
            strength: 195,
            ..Default::default()
        };
        assert_eq!(budget.clamp_edit(&alloc, PrimaryStat::Strength, 150), 150);
        assert_eq!(budget.clamp_edit(&alloc, PrimaryStat::Arcane, 10), 0);
    }

    #[test]
    fn test_clamp_negative_floors_to_zero() {
        let budget = reference_budget(0);
        let alloc = Allocation {
            speed: 10,
            ..Default::default()
        };
        assert_eq!(budget.clamp_edit(&alloc, PrimaryStat::Speed, -7), 0);
    }

    #[test]
    fn test_reclamp_trims_from_luck_backwards() {
        let budget = reference_budget(0);
        let mut alloc = Allocation {
            strength: 100,
            speed: 95,
            luck: 3,
            ..Default::default()
        };
        assert!(budget.reclamp(&mut alloc));
        assert_eq!(alloc.total(), 195);
        assert_eq!(alloc.luck, 0);
        assert_eq!(alloc.speed, 95);
        assert_eq!(alloc.strength, 100);
    }

    #[test]
    fn test_reclamp_noop_when_within_budget() {
        let budget = reference_budget(0);
        let mut alloc = Allocation {
            strength: 10,
            ..Default::default()
        };
        assert!(!budget.reclamp(&mut alloc));
        assert_eq!(alloc.strength, 10);
    }

    fn arb_allocation() -> impl Strategy<Value = Allocation> {
        (0u32..60, 0u32..60, 0u32..60, 0u32..60, 0u32..60).prop_map(
            |(strength, arcane, endurance, speed, luck)| Allocation {
                strength,
                arcane,
                endurance,
                speed,
                luck,
            },
        )
    }

    proptest! {
        #[test]
        fn prop_clamp_idempotent(
            alloc in arb_allocation(),
            requested in -100i64..400,
            race_bonus in 0u32..5
        ) {
            let budget = reference_budget(race_bonus);
            let once = budget.clamp_edit(&alloc, PrimaryStat::Endurance, requested);
            let twice = budget.clamp_edit(&alloc, PrimaryStat::Endurance, i64::from(once));
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_clamped_edit_never_exceeds_budget(
            alloc in arb_allocation(),
            requested in -100i64..400
        ) {
            let budget = reference_budget(0);
            let mut edited = alloc;
            budget.reclamp(&mut edited);
            let value = budget.clamp_edit(&edited, PrimaryStat::Arcane, requested);
            edited.set(PrimaryStat::Arcane, value);
            prop_assert!(edited.total() <= budget.total());
        }

        #[test]
        fn prop_remaining_monotonic_in_level_cap_and_race_bonus(
            alloc in arb_allocation(),
            level_cap in 1u32..80,
            extra_levels in 0u32..20,
            race_bonus in 0u32..5,
            extra_bonus in 0u32..5
        ) {
            let low = StatBudget::new(&BuildConstants { level_cap, ..Default::default() }, race_bonus);
            let high = StatBudget::new(
                &BuildConstants { level_cap: level_cap + extra_levels, ..Default::default() },
                race_bonus + extra_bonus,
            );
            prop_assert!(high.remaining(&alloc) >= low.remaining(&alloc));
        }
    }
}
