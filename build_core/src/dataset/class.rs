//! Classes - Base, Super and Sub tiers with their bonuses

use crate::stat_block::StatBonuses;
use crate::types::{ClassPath, ClassTier};
use serde::{Deserialize, Serialize};

/// A selectable class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameClass {
    pub name: String,
    pub tier: ClassTier,
    #[serde(default)]
    pub path: Option<ClassPath>,
    /// For Super classes: the Base classes it may be derived from (empty = any)
    #[serde(default)]
    pub derived_from: Vec<String>,
    #[serde(default)]
    pub stat_bonuses: StatBonuses,
    #[serde(default)]
    pub description: String,
}

impl GameClass {
    /// Whether this class may be picked on top of the given Base class
    ///
    /// Only Super classes carry a constraint; an empty list, or no Base
    /// selected yet, places no restriction.
    pub fn derivable_from(&self, base: Option<&str>) -> bool {
        if self.tier != ClassTier::Super || self.derived_from.is_empty() {
            return true;
        }
        match base {
            Some(base) => self.derived_from.iter().any(|name| name == base),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn saint() -> GameClass {
        toml::from_str(
            r#"
name = "Saint"
tier = "Super"
path = "Orderly"
derived_from = ["Slayer"]
description = "A holy conduit of light."

[stat_bonuses]
arcane = 10
endurance = 5
hp_regen = 2
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_parse_class() {
        let class = saint();
        assert_eq!(class.tier, ClassTier::Super);
        assert_eq!(class.path, Some(ClassPath::Orderly));
        assert!((class.stat_bonuses.hp_regen - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_derivable_from() {
        let class = saint();
        assert!(class.derivable_from(Some("Slayer")));
        assert!(!class.derivable_from(Some("Mage")));
        assert!(class.derivable_from(None));
    }

    #[test]
    fn test_super_without_linkage_is_derivable_from_any() {
        let mut class = saint();
        class.derived_from.clear();
        assert!(class.derivable_from(Some("Mage")));
    }
}
