//! build_core - Character build calculator library
//!
//! This library provides:
//! - ReferenceDataset: Races, classes and equipment loaded from TOML
//! - CharacterBuild: Selection state with budget-clamped attribute edits
//! - Bonus aggregation: Class and equipment bonuses summed via StatSource
//! - derive_stats: The pure formula from attributes and bonuses to final stats

pub mod build;
pub mod config;
pub mod dataset;
pub mod prelude;
pub mod source;
pub mod stat_block;
pub mod types;

// Re-export core types for convenience
pub use build::{BuildSummary, CharacterBuild, EquippedItem, Selection};
pub use config::{default_dataset, load_dataset, BuildConstants, ConfigError};
pub use dataset::{Equipment, GameClass, Race, RaceModifiers, RaceRarity, ReferenceDataset};
pub use source::StatSource;
pub use stat_block::{
    aggregate, combine_attributes, derive_stats, AggregatedBonuses, Allocation,
    CombinedAttributes, FinalStats, StatBonuses, StatBreakdown, StatBudget,
};
pub use types::{ClassPath, ClassTier, GearSlot, PrimaryStat, SlotKind, ACCESSORY_SLOTS};
