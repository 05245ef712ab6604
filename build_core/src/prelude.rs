//! Prelude module for convenient imports
//!
//! ```rust
//! use build_core::prelude::*;
//!
//! let mut build = CharacterBuild::new(
//!     std::sync::Arc::new(default_dataset()),
//!     BuildConstants::default(),
//! );
//! build.set_attribute(PrimaryStat::Endurance, 10);
//! assert_eq!(build.final_stats().health, 150.0);
//! ```

// Session
pub use crate::build::{BuildSummary, CharacterBuild, Selection};

// Core types
pub use crate::types::{ClassTier, GearSlot, PrimaryStat, SlotKind};

// Stat pipeline
pub use crate::stat_block::{AggregatedBonuses, Allocation, FinalStats, StatBonuses, StatBudget};

// Dataset
pub use crate::dataset::{Equipment, GameClass, Race, ReferenceDataset};

// Config
pub use crate::config::{default_dataset, BuildConstants};
