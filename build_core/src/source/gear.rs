//! Equipment bonuses as a stat source

use crate::dataset::Equipment;
use crate::source::StatSource;
use crate::stat_block::BonusAccumulator;

impl StatSource for Equipment {
    fn id(&self) -> &str {
        &self.name
    }

    /// Flat bonuses go to the flat view, `*_percent` fields to the percent view.
    /// Passive effects are display-only and contribute nothing here.
    fn apply(&self, bonuses: &mut BonusAccumulator) {
        bonuses.add_bonuses(&self.stat_bonuses);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stat_block::StatBonuses;
    use crate::types::SlotKind;

    #[test]
    fn test_gear_source_splits_percent() {
        let item = Equipment {
            name: "Wandering Practitioner".to_string(),
            slot: SlotKind::Armor,
            description: String::new(),
            stat_bonuses: StatBonuses {
                strength: 10.0,
                speed: 5.0,
                hp_bonus: 30.0,
                strength_percent: 10.0,
                ..Default::default()
            },
            passive_effects: vec!["Flexible".to_string()],
        };
        let mut acc = BonusAccumulator::new();
        item.apply(&mut acc);
        let result = acc.finish();
        assert_eq!(item.id(), "Wandering Practitioner");
        assert!((result.flat.strength - 10.0).abs() < f64::EPSILON);
        assert!((result.flat.hp_bonus - 30.0).abs() < f64::EPSILON);
        assert!((result.percent.strength - 10.0).abs() < f64::EPSILON);
    }
}
