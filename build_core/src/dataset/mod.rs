//! Reference dataset - read-only catalogs of races, classes and equipment

mod class;
mod equipment;
mod race;

pub use class::GameClass;
pub use equipment::Equipment;
pub use race::{Race, RaceModifiers, RaceRarity};

use crate::types::{ClassTier, SlotKind};
use serde::{Deserialize, Serialize};

/// Immutable catalogs loaded once at startup
///
/// Names are treated as unique keys. The data is assumed well-formed; a
/// duplicate name resolves to its first entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceDataset {
    pub races: Vec<Race>,
    pub classes: Vec<GameClass>,
    pub equipment: Vec<Equipment>,
}

impl ReferenceDataset {
    pub fn new(races: Vec<Race>, classes: Vec<GameClass>, equipment: Vec<Equipment>) -> Self {
        ReferenceDataset {
            races,
            classes,
            equipment,
        }
    }

    pub fn race(&self, name: &str) -> Option<&Race> {
        self.races.iter().find(|r| r.name == name)
    }

    pub fn class(&self, name: &str) -> Option<&GameClass> {
        self.classes.iter().find(|c| c.name == name)
    }

    /// Look up a class and require it to belong to the given tier
    pub fn class_of_tier(&self, name: &str, tier: ClassTier) -> Option<&GameClass> {
        self.class(name).filter(|c| c.tier == tier)
    }

    pub fn item(&self, name: &str) -> Option<&Equipment> {
        self.equipment.iter().find(|e| e.name == name)
    }

    /// All classes of a tier, in data order
    pub fn classes_of_tier(&self, tier: ClassTier) -> impl Iterator<Item = &GameClass> + '_ {
        self.classes.iter().filter(move |c| c.tier == tier)
    }

    /// Super classes that may be picked on top of the given Base class
    pub fn super_classes_for<'a>(
        &'a self,
        base: Option<&'a str>,
    ) -> impl Iterator<Item = &'a GameClass> + 'a {
        self.classes_of_tier(ClassTier::Super)
            .filter(move |c| c.derivable_from(base))
    }

    /// All equipment tagged for a slot kind, in data order
    pub fn equipment_for(&self, kind: SlotKind) -> impl Iterator<Item = &Equipment> + '_ {
        self.equipment.iter().filter(move |e| e.slot == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stat_block::StatBonuses;

    fn class(name: &str, tier: ClassTier, derived_from: &[&str]) -> GameClass {
        GameClass {
            name: name.to_string(),
            tier,
            path: None,
            derived_from: derived_from.iter().map(|s| s.to_string()).collect(),
            stat_bonuses: StatBonuses::default(),
            description: String::new(),
        }
    }

    fn small_dataset() -> ReferenceDataset {
        ReferenceDataset::new(
            Vec::new(),
            vec![
                class("Warrior", ClassTier::Base, &[]),
                class("Mage", ClassTier::Base, &[]),
                class("Paladin", ClassTier::Super, &["Warrior"]),
                class("Hexer", ClassTier::Super, &["Mage"]),
                class("Drifter", ClassTier::Super, &[]),
                class("Musician", ClassTier::Sub, &[]),
            ],
            vec![Equipment {
                name: "Iron Sword".to_string(),
                slot: SlotKind::Weapon,
                description: String::new(),
                stat_bonuses: StatBonuses::default(),
                passive_effects: Vec::new(),
            }],
        )
    }

    #[test]
    fn test_lookup_unknown_is_none() {
        let data = small_dataset();
        assert!(data.class("Nobody").is_none());
        assert!(data.race("Nobody").is_none());
        assert!(data.item("Nothing").is_none());
    }

    #[test]
    fn test_class_of_tier() {
        let data = small_dataset();
        assert!(data.class_of_tier("Warrior", ClassTier::Base).is_some());
        assert!(data.class_of_tier("Warrior", ClassTier::Super).is_none());
    }

    #[test]
    fn test_super_classes_for_base() {
        let data = small_dataset();
        let names: Vec<&str> = data
            .super_classes_for(Some("Warrior"))
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Paladin", "Drifter"]);

        let all: Vec<&str> = data
            .super_classes_for(None)
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(all, vec!["Paladin", "Hexer", "Drifter"]);
    }

    #[test]
    fn test_equipment_for_kind() {
        let data = small_dataset();
        assert_eq!(data.equipment_for(SlotKind::Weapon).count(), 1);
        assert_eq!(data.equipment_for(SlotKind::Armor).count(), 0);
    }
}
