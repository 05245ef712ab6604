//! Class bonuses as a stat source

use crate::dataset::GameClass;
use crate::source::StatSource;
use crate::stat_block::BonusAccumulator;

impl StatSource for GameClass {
    fn id(&self) -> &str {
        &self.name
    }

    fn apply(&self, bonuses: &mut BonusAccumulator) {
        bonuses.add_bonuses(&self.stat_bonuses);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stat_block::StatBonuses;
    use crate::types::ClassTier;

    #[test]
    fn test_class_source_applies_bonuses() {
        let class = GameClass {
            name: "Warrior".to_string(),
            tier: ClassTier::Base,
            path: None,
            derived_from: Vec::new(),
            stat_bonuses: StatBonuses {
                strength: 3.0,
                endurance: 1.0,
                ..Default::default()
            },
            description: String::new(),
        };
        let mut acc = BonusAccumulator::new();
        class.apply(&mut acc);
        assert_eq!(class.id(), "Warrior");
        assert_eq!(acc.source_count(), 1);
        let result = acc.finish();
        assert!((result.flat.strength - 3.0).abs() < f64::EPSILON);
        assert!((result.flat.endurance - 1.0).abs() < f64::EPSILON);
    }
}
