//! StatSource - Trait and implementations for bonus providers

mod class;
mod gear;

use crate::stat_block::BonusAccumulator;

/// Trait for anything that contributes bonuses to a build
///
/// Contributions are purely additive, so application order does not matter.
pub trait StatSource: Send + Sync {
    /// Unique identifier for this source
    fn id(&self) -> &str;

    /// Add this source's bonuses to the accumulator
    fn apply(&self, bonuses: &mut BonusAccumulator);
}
