//! Selection - the user's current choices

use crate::stat_block::Allocation;
use crate::types::{ClassTier, GearSlot, ACCESSORY_SLOTS};
use serde::{Deserialize, Serialize};

/// Raw selection state, keyed by dataset names
///
/// Holds only names and point counts. Resolving names against the dataset is
/// done by [`CharacterBuild`](super::CharacterBuild).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selection {
    // === Race & classes ===
    pub race: Option<String>,
    pub base_class: Option<String>,
    pub super_class: Option<String>,
    pub sub_class: Option<String>,

    // === Attributes ===
    pub allocation: Allocation,

    // === Equipment ===
    pub weapon: Option<String>,
    pub armor: Option<String>,
    pub accessories: [Option<String>; ACCESSORY_SLOTS],
}

impl Selection {
    pub fn new() -> Self {
        Selection::default()
    }

    pub fn class(&self, tier: ClassTier) -> Option<&str> {
        match tier {
            ClassTier::Base => self.base_class.as_deref(),
            ClassTier::Super => self.super_class.as_deref(),
            ClassTier::Sub => self.sub_class.as_deref(),
        }
    }

    pub(crate) fn class_mut(&mut self, tier: ClassTier) -> &mut Option<String> {
        match tier {
            ClassTier::Base => &mut self.base_class,
            ClassTier::Super => &mut self.super_class,
            ClassTier::Sub => &mut self.sub_class,
        }
    }

    /// Item name in a slot; `None` for an empty or out-of-range slot
    pub fn equipment(&self, slot: GearSlot) -> Option<&str> {
        match slot {
            GearSlot::Weapon => self.weapon.as_deref(),
            GearSlot::Armor => self.armor.as_deref(),
            GearSlot::Accessory(index) => self.accessories.get(index)?.as_deref(),
        }
    }

    /// Mutable slot handle; `None` when the accessory index is out of range
    pub(crate) fn equipment_mut(&mut self, slot: GearSlot) -> Option<&mut Option<String>> {
        match slot {
            GearSlot::Weapon => Some(&mut self.weapon),
            GearSlot::Armor => Some(&mut self.armor),
            GearSlot::Accessory(index) => self.accessories.get_mut(index),
        }
    }

    /// Class names in base, super, sub order, skipping empty tiers
    pub fn class_names(&self) -> impl Iterator<Item = &str> + '_ {
        ClassTier::all().iter().filter_map(move |&tier| self.class(tier))
    }

    /// Item names in weapon, armor, accessory 0..3 order, skipping empty slots
    pub fn equipment_names(&self) -> impl Iterator<Item = &str> + '_ {
        GearSlot::all()
            .iter()
            .filter_map(move |&slot| self.equipment(slot))
    }
}
