//! BuildSummary - serializable snapshot of a build and its results

use super::CharacterBuild;
use crate::stat_block::{Allocation, CombinedAttributes, FinalStats};
use crate::types::{ClassTier, GearSlot};
use serde::{Deserialize, Serialize};

/// One filled equipment slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquippedItem {
    pub slot: GearSlot,
    pub item: String,
}

/// Everything needed to share or print a build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildSummary {
    pub race: Option<String>,
    pub base_class: Option<String>,
    pub super_class: Option<String>,
    pub sub_class: Option<String>,
    pub equipment: Vec<EquippedItem>,
    pub allocation: Allocation,
    pub attributes: CombinedAttributes,
    pub budget: u32,
    pub remaining: u32,
    pub stats: FinalStats,
    pub passive_effects: Vec<String>,
}

impl BuildSummary {
    pub fn from_build(build: &CharacterBuild) -> Self {
        let owned = |name: Option<&str>| name.map(str::to_string);
        let selection = build.selection();
        let budget = build.budget();

        BuildSummary {
            race: selection.race.clone(),
            base_class: owned(selection.class(ClassTier::Base)),
            super_class: owned(selection.class(ClassTier::Super)),
            sub_class: owned(selection.class(ClassTier::Sub)),
            equipment: GearSlot::all()
                .iter()
                .filter_map(|&slot| {
                    selection.equipment(slot).map(|item| EquippedItem {
                        slot,
                        item: item.to_string(),
                    })
                })
                .collect(),
            allocation: selection.allocation,
            attributes: build.combined_attributes(),
            budget: budget.total(),
            remaining: budget.remaining(&selection.allocation),
            stats: build.final_stats(),
            passive_effects: build
                .passive_effects()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{default_dataset, BuildConstants};
    use crate::types::PrimaryStat;
    use std::sync::Arc;

    #[test]
    fn test_summary_contents() {
        let mut build = CharacterBuild::new(Arc::new(default_dataset()), BuildConstants::default());
        build.set_race(Some("Sheea"));
        build.set_class(ClassTier::Base, Some("Warrior"));
        build.set_class(ClassTier::Super, Some("Paladin"));
        build.set_equipment(GearSlot::Accessory(3), Some("Dragon Memoir"));
        build.set_attribute(PrimaryStat::Endurance, 30);

        let summary = build.summary();
        assert_eq!(summary.race.as_deref(), Some("Sheea"));
        assert_eq!(summary.super_class.as_deref(), Some("Paladin"));
        assert!(summary.sub_class.is_none());
        assert_eq!(
            summary.equipment,
            vec![EquippedItem {
                slot: GearSlot::Accessory(3),
                item: "Dragon Memoir".to_string(),
            }]
        );
        assert_eq!(summary.budget, 196);
        assert_eq!(summary.remaining, 166);
        assert_eq!(summary.passive_effects, vec!["Inflicts Bleed & Fractured on strike"]);
    }

    #[test]
    fn test_summary_json() {
        let build = CharacterBuild::new(Arc::new(default_dataset()), BuildConstants::default());
        let json = build.summary().to_json_pretty().unwrap();
        assert!(json.contains("\"remaining\": 195"));
        assert!(json.contains("\"physical_damage\": 100.0"));
        let back: BuildSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, build.summary());
    }
}
