//! Core types shared by the dataset, the selection state and the formula

use serde::{Deserialize, Serialize};

/// Number of accessory slots on a build
pub const ACCESSORY_SLOTS: usize = 4;

/// The five user-allocatable attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryStat {
    Strength,
    Arcane,
    Endurance,
    Speed,
    Luck,
}

impl PrimaryStat {
    /// Get all primary stats in display order
    pub fn all() -> &'static [PrimaryStat] {
        &[
            PrimaryStat::Strength,
            PrimaryStat::Arcane,
            PrimaryStat::Endurance,
            PrimaryStat::Speed,
            PrimaryStat::Luck,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            PrimaryStat::Strength => "Strength",
            PrimaryStat::Arcane => "Arcane",
            PrimaryStat::Endurance => "Endurance",
            PrimaryStat::Speed => "Speed",
            PrimaryStat::Luck => "Luck",
        }
    }

    pub fn abbrev(&self) -> &'static str {
        match self {
            PrimaryStat::Strength => "STR",
            PrimaryStat::Arcane => "ARC",
            PrimaryStat::Endurance => "END",
            PrimaryStat::Speed => "SPD",
            PrimaryStat::Luck => "LCK",
        }
    }
}

/// Class tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassTier {
    Base,
    Super,
    Sub,
}

impl ClassTier {
    pub fn all() -> &'static [ClassTier] {
        &[ClassTier::Base, ClassTier::Super, ClassTier::Sub]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ClassTier::Base => "Base",
            ClassTier::Super => "Super",
            ClassTier::Sub => "Sub",
        }
    }
}

/// Cosmetic grouping of classes, no numeric effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassPath {
    Orderly,
    Neutral,
    Chaotic,
}

/// Kind of slot an equipment entry is tagged for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotKind {
    Weapon,
    Armor,
    Accessory,
}

/// A concrete gear slot on a build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GearSlot {
    Weapon,
    Armor,
    /// Accessory slot by index (0..ACCESSORY_SLOTS)
    Accessory(usize),
}

impl GearSlot {
    /// Get all gear slots in passive-effect order: weapon, armor, accessories 0..3
    pub fn all() -> &'static [GearSlot] {
        &[
            GearSlot::Weapon,
            GearSlot::Armor,
            GearSlot::Accessory(0),
            GearSlot::Accessory(1),
            GearSlot::Accessory(2),
            GearSlot::Accessory(3),
        ]
    }

    /// The slot kind an item must be tagged with to be listed for this slot
    pub fn kind(&self) -> SlotKind {
        match self {
            GearSlot::Weapon => SlotKind::Weapon,
            GearSlot::Armor => SlotKind::Armor,
            GearSlot::Accessory(_) => SlotKind::Accessory,
        }
    }

    pub fn label(&self) -> String {
        match self {
            GearSlot::Weapon => "Weapon".to_string(),
            GearSlot::Armor => "Armor".to_string(),
            GearSlot::Accessory(index) => format!("Accessory {}", index + 1),
        }
    }
}
