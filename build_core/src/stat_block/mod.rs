//! Stat pipeline - attributes, bonuses, budget and the derivation formula

mod aggregator;
mod attributes;
mod bonuses;
mod breakdown;
mod budget;
mod formula;

pub use aggregator::{aggregate, AggregatedBonuses, BonusAccumulator};
pub use attributes::{combine_attributes, Allocation, CombinedAttributes, PrimaryAttributes};
pub use bonuses::{FlatBonuses, PercentBonuses, StatBonuses};
pub use breakdown::{breakdown, StatBreakdown};
pub use budget::StatBudget;
pub use formula::{
    derive_stats, has_percent_scaling, percent_sum, total_primary, FinalStats,
    ARCANE_DAMAGE_PER_POINT, BASE_CRIT_DAMAGE, BASE_DAMAGE, BASE_HEALTH, CRIT_CHANCE_PER_LUCK,
    CRIT_DAMAGE_PER_LUCK, HEALTH_PER_ENDURANCE, STRENGTH_DAMAGE_PER_POINT,
};
