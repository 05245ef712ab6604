//! CharacterBuild - a selection bound to a dataset and build constants

use super::{BuildSummary, Selection};
use crate::config::BuildConstants;
use crate::dataset::{Equipment, GameClass, Race, ReferenceDataset};
use crate::stat_block::{
    aggregate, breakdown, combine_attributes, derive_stats, AggregatedBonuses, CombinedAttributes,
    FinalStats, StatBreakdown, StatBudget,
};
use crate::types::{ClassTier, GearSlot, PrimaryStat};
use std::sync::Arc;
use tracing::{debug, warn};

/// A character build session
///
/// Owns the mutable [`Selection`] and answers every outbound query by
/// recomputing from scratch. The attribute allocation never exceeds the
/// current budget after any intent returns.
#[derive(Debug, Clone)]
pub struct CharacterBuild {
    dataset: Arc<ReferenceDataset>,
    constants: BuildConstants,
    selection: Selection,
}

impl CharacterBuild {
    pub fn new(dataset: Arc<ReferenceDataset>, constants: BuildConstants) -> Self {
        CharacterBuild {
            dataset,
            constants,
            selection: Selection::new(),
        }
    }

    /// Restore a session from a saved selection
    ///
    /// Unknown names are dropped and the allocation is clamped to the budget.
    pub fn from_selection(
        dataset: Arc<ReferenceDataset>,
        constants: BuildConstants,
        selection: Selection,
    ) -> Self {
        let mut build = CharacterBuild::new(dataset, constants);
        build.set_race(selection.race.as_deref());
        for &tier in ClassTier::all() {
            build.set_class(tier, selection.class(tier));
        }
        for &slot in GearSlot::all() {
            build.set_equipment(slot, selection.equipment(slot));
        }
        for (stat, value) in selection.allocation.iter() {
            build.set_attribute(stat, i64::from(value));
        }
        build
    }

    pub fn dataset(&self) -> &ReferenceDataset {
        &self.dataset
    }

    pub fn constants(&self) -> &BuildConstants {
        &self.constants
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    // === Inbound intents ===

    /// Select a race by name, or clear it with `None`
    ///
    /// An unknown name clears the race. If the new budget is smaller than the
    /// current allocation, points are removed starting from luck.
    pub fn set_race(&mut self, name: Option<&str>) {
        let resolved = name.and_then(|n| {
            let race = self.dataset.race(n);
            if race.is_none() {
                warn!(race = n, "unknown race, clearing selection");
            }
            race.map(|r| r.name.clone())
        });
        debug!(race = ?resolved, "set race");
        self.selection.race = resolved;

        let budget = self.budget();
        if budget.reclamp(&mut self.selection.allocation) {
            debug!(budget = budget.total(), "allocation trimmed to new budget");
        }
    }

    /// Select a class for a tier, or clear it with `None`
    ///
    /// The name must belong to a class of that tier, otherwise the tier is
    /// cleared. Re-selecting the current Sub class toggles it off.
    pub fn set_class(&mut self, tier: ClassTier, name: Option<&str>) {
        if tier == ClassTier::Sub && name.is_some() && name == self.selection.class(tier) {
            debug!(class = ?name, "sub class toggled off");
            *self.selection.class_mut(tier) = None;
            return;
        }
        let resolved = name.and_then(|n| {
            let class = self.dataset.class_of_tier(n, tier);
            if class.is_none() {
                warn!(class = n, tier = tier.name(), "unknown class for tier, clearing selection");
            }
            class.map(|c| c.name.clone())
        });
        debug!(tier = tier.name(), class = ?resolved, "set class");
        *self.selection.class_mut(tier) = resolved;
    }

    /// Put an item in a slot, or empty the slot with `None`
    ///
    /// Items are not checked against the slot kind. An accessory index past
    /// the last slot is ignored.
    pub fn set_equipment(&mut self, slot: GearSlot, name: Option<&str>) {
        let resolved = name.and_then(|n| {
            let item = self.dataset.item(n);
            if item.is_none() {
                warn!(item = n, "unknown item, emptying slot");
            }
            item.map(|i| i.name.clone())
        });
        match self.selection.equipment_mut(slot) {
            Some(entry) => {
                debug!(slot = %slot.label(), item = ?resolved, "set equipment");
                *entry = resolved;
            }
            None => warn!(?slot, "accessory slot out of range, ignoring"),
        }
    }

    /// Set an attribute's raw allocation, clamped to the budget
    ///
    /// Returns the value actually stored.
    pub fn set_attribute(&mut self, stat: PrimaryStat, requested: i64) -> u32 {
        let value = self
            .budget()
            .clamp_edit(&self.selection.allocation, stat, requested);
        if i64::from(value) != requested {
            debug!(stat = stat.abbrev(), requested, value, "attribute edit clamped");
        }
        self.selection.allocation.set(stat, value);
        value
    }

    /// Clear every choice
    pub fn reset(&mut self) {
        debug!("build reset");
        self.selection = Selection::new();
    }

    // === Outbound queries ===

    pub fn race(&self) -> Option<&Race> {
        self.selection
            .race
            .as_deref()
            .and_then(|name| self.dataset.race(name))
    }

    pub fn class(&self, tier: ClassTier) -> Option<&GameClass> {
        self.selection
            .class(tier)
            .and_then(|name| self.dataset.class_of_tier(name, tier))
    }

    /// Selected classes in base, super, sub order
    pub fn active_classes(&self) -> Vec<&GameClass> {
        ClassTier::all()
            .iter()
            .filter_map(|&tier| self.class(tier))
            .collect()
    }

    pub fn equipment(&self, slot: GearSlot) -> Option<&Equipment> {
        self.selection
            .equipment(slot)
            .and_then(|name| self.dataset.item(name))
    }

    /// Equipped items in weapon, armor, accessory 0..3 order
    pub fn active_equipment(&self) -> Vec<&Equipment> {
        GearSlot::all()
            .iter()
            .filter_map(|&slot| self.equipment(slot))
            .collect()
    }

    pub fn combined_attributes(&self) -> CombinedAttributes {
        combine_attributes(
            self.race(),
            self.constants.scaling_increment(),
            &self.selection.allocation,
        )
    }

    pub fn class_bonuses(&self) -> AggregatedBonuses {
        aggregate(self.active_classes())
    }

    pub fn equipment_bonuses(&self) -> AggregatedBonuses {
        aggregate(self.active_equipment())
    }

    pub fn budget(&self) -> StatBudget {
        StatBudget::new(
            &self.constants,
            self.race().map(Race::bonus_points).unwrap_or(0),
        )
    }

    pub fn remaining_points(&self) -> u32 {
        self.budget().remaining(&self.selection.allocation)
    }

    pub fn final_stats(&self) -> FinalStats {
        derive_stats(
            &self.combined_attributes(),
            &self.class_bonuses(),
            &self.equipment_bonuses(),
        )
    }

    /// Passive effect labels of all equipped items, weapon first
    pub fn passive_effects(&self) -> Vec<&str> {
        self.active_equipment()
            .into_iter()
            .flat_map(|item| item.passive_effects.iter().map(String::as_str))
            .collect()
    }

    pub fn breakdown(&self) -> Vec<StatBreakdown> {
        breakdown(
            self.race(),
            self.constants.scaling_increment(),
            &self.selection.allocation,
            &self.class_bonuses(),
            &self.equipment_bonuses(),
        )
    }

    pub fn summary(&self) -> BuildSummary {
        BuildSummary::from_build(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_dataset;

    fn new_build() -> CharacterBuild {
        CharacterBuild::new(Arc::new(default_dataset()), BuildConstants::default())
    }

    #[test]
    fn test_empty_build_is_baseline() {
        let build = new_build();
        assert_eq!(build.final_stats(), FinalStats::default());
        assert_eq!(build.remaining_points(), 195);
        assert!(build.passive_effects().is_empty());
    }

    #[test]
    fn test_race_adds_scaling_and_bonus_points() {
        let mut build = new_build();
        build.set_race(Some("Dullahan"));
        let combined = build.combined_attributes();
        assert_eq!(combined.strength, 3 + 8);
        assert_eq!(combined.endurance, 4 + 8);
        assert_eq!(build.budget().total(), 198);
    }

    #[test]
    fn test_unknown_race_clears() {
        let mut build = new_build();
        build.set_race(Some("Dullahan"));
        build.set_race(Some("Nobody"));
        assert!(build.race().is_none());
        assert_eq!(build.selection().race, None);
    }

    #[test]
    fn test_race_change_trims_allocation() {
        let mut build = new_build();
        build.set_race(Some("Dullahan"));
        assert_eq!(build.set_attribute(PrimaryStat::Strength, 150), 150);
        assert_eq!(build.set_attribute(PrimaryStat::Luck, 48), 48);
        assert_eq!(build.remaining_points(), 0);

        build.set_race(Some("Estella"));
        let alloc = build.selection().allocation;
        assert_eq!(alloc.total(), 195);
        assert_eq!(alloc.strength, 150);
        assert_eq!(alloc.luck, 45);
    }

    #[test]
    fn test_class_must_match_tier() {
        let mut build = new_build();
        build.set_class(ClassTier::Super, Some("Warrior"));
        assert!(build.class(ClassTier::Super).is_none());
        build.set_class(ClassTier::Base, Some("Warrior"));
        assert_eq!(build.class(ClassTier::Base).map(|c| c.name.as_str()), Some("Warrior"));
    }

    #[test]
    fn test_sub_class_toggles_off() {
        let mut build = new_build();
        build.set_class(ClassTier::Sub, Some("Musician"));
        assert!(build.class(ClassTier::Sub).is_some());
        build.set_class(ClassTier::Sub, Some("Musician"));
        assert!(build.class(ClassTier::Sub).is_none());
    }

    #[test]
    fn test_base_class_reselect_keeps_it() {
        let mut build = new_build();
        build.set_class(ClassTier::Base, Some("Mage"));
        build.set_class(ClassTier::Base, Some("Mage"));
        assert!(build.class(ClassTier::Base).is_some());
    }

    #[test]
    fn test_attribute_clamped() {
        let mut build = new_build();
        build.set_attribute(PrimaryStat::Arcane, 100);
        build.set_attribute(PrimaryStat::Endurance, 90);
        assert_eq!(build.set_attribute(PrimaryStat::Strength, 20), 5);
        assert_eq!(build.set_attribute(PrimaryStat::Speed, -3), 0);
        assert_eq!(build.remaining_points(), 0);
    }

    #[test]
    fn test_passive_effects_slot_order() {
        let mut build = new_build();
        build.set_equipment(GearSlot::Accessory(1), Some("Crystal Sphere"));
        build.set_equipment(GearSlot::Weapon, Some("Cursed Dagger"));
        assert_eq!(
            build.passive_effects(),
            vec!["Curse on hit", "Atk Speed boost on kill", "Removes Crit Fatigue"]
        );
    }

    #[test]
    fn test_any_item_in_any_slot() {
        let mut build = new_build();
        build.set_equipment(GearSlot::Armor, Some("Luck Charm"));
        assert!((build.equipment_bonuses().flat.luck - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_out_of_range_accessory_ignored() {
        let mut build = new_build();
        build.set_equipment(GearSlot::Accessory(9), Some("Luck Charm"));
        assert!(build.active_equipment().is_empty());
    }

    #[test]
    fn test_reset() {
        let mut build = new_build();
        build.set_race(Some("Sheea"));
        build.set_class(ClassTier::Base, Some("Thief"));
        build.set_equipment(GearSlot::Weapon, Some("Iron Dagger"));
        build.set_attribute(PrimaryStat::Luck, 10);
        build.reset();
        assert_eq!(build.selection(), &Selection::new());
        assert_eq!(build.final_stats(), FinalStats::default());
    }

    #[test]
    fn test_from_selection_drops_unknown_names() {
        let mut selection = Selection::new();
        selection.race = Some("Boreas".to_string());
        selection.base_class = Some("Nobody".to_string());
        selection.weapon = Some("Iron Sword".to_string());
        selection.allocation.strength = 500;
        let build = CharacterBuild::from_selection(
            Arc::new(default_dataset()),
            BuildConstants::default(),
            selection,
        );
        assert_eq!(build.selection().race.as_deref(), Some("Boreas"));
        assert!(build.selection().base_class.is_none());
        assert_eq!(build.selection().weapon.as_deref(), Some("Iron Sword"));
        assert_eq!(build.selection().allocation.strength, 195);
    }

    #[test]
    fn test_breakdown_matches_final_stats() {
        let mut build = new_build();
        build.set_race(Some("Corvolus"));
        build.set_class(ClassTier::Base, Some("Mage"));
        build.set_equipment(GearSlot::Weapon, Some("Sunstaff"));
        build.set_attribute(PrimaryStat::Arcane, 60);
        let arcane = build.breakdown()[1];
        assert_eq!(arcane.stat, PrimaryStat::Arcane);
        let expected = 100.0 + arcane.effective * 7.0 / 5.0;
        assert!((build.final_stats().magic_damage - expected).abs() < 1e-9);
    }
}
