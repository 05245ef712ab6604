//! Equipment - weapons, armor and accessories

use crate::stat_block::StatBonuses;
use crate::types::SlotKind;
use serde::{Deserialize, Serialize};

/// An equippable item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub name: String,
    pub slot: SlotKind,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub stat_bonuses: StatBonuses,
    /// Display-only effect labels, in data order
    #[serde(default)]
    pub passive_effects: Vec<String>,
}
