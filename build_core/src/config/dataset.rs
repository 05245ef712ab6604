//! Reference dataset loading

use super::ConfigError;
use crate::dataset::{Equipment, GameClass, Race, ReferenceDataset};
use serde::{Deserialize, Serialize};
use std::path::Path;

const RACES_FILE: &str = "races.toml";
const CLASSES_FILE: &str = "classes.toml";
const EQUIPMENT_FILE: &str = "equipment.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RacesConfig {
    #[serde(default)]
    races: Vec<Race>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ClassesConfig {
    #[serde(default)]
    classes: Vec<GameClass>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct EquipmentConfig {
    #[serde(default)]
    equipment: Vec<Equipment>,
}

/// Load the dataset from `races.toml`, `classes.toml` and `equipment.toml` in a directory
pub fn load_dataset(dir: &Path) -> Result<ReferenceDataset, ConfigError> {
    let races: RacesConfig = super::load_toml(&dir.join(RACES_FILE))?;
    let classes: ClassesConfig = super::load_toml(&dir.join(CLASSES_FILE))?;
    let equipment: EquipmentConfig = super::load_toml(&dir.join(EQUIPMENT_FILE))?;
    Ok(ReferenceDataset::new(
        races.races,
        classes.classes,
        equipment.equipment,
    ))
}

/// Parse the dataset from the three TOML documents
pub fn parse_dataset(
    races: &str,
    classes: &str,
    equipment: &str,
) -> Result<ReferenceDataset, ConfigError> {
    let races: RacesConfig = super::parse_toml(races)?;
    let classes: ClassesConfig = super::parse_toml(classes)?;
    let equipment: EquipmentConfig = super::parse_toml(equipment)?;
    Ok(ReferenceDataset::new(
        races.races,
        classes.classes,
        equipment.equipment,
    ))
}

/// Get the built-in dataset shipped with the crate
pub fn default_dataset() -> ReferenceDataset {
    parse_dataset(
        include_str!("../../config/races.toml"),
        include_str!("../../config/classes.toml"),
        include_str!("../../config/equipment.toml"),
    )
    .unwrap_or_else(|err| {
        tracing::error!(%err, "built-in dataset failed to parse, starting empty");
        ReferenceDataset::default()
    })
}
