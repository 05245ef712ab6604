//! Theme preference and its persistence

use ratatui::style::Color;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Storage key for the theme preference
pub const THEME_KEY: &str = "arcane-theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Chaotic,
    Orderly,
}

impl Theme {
    pub fn key(&self) -> &'static str {
        match self {
            Theme::Chaotic => "chaotic",
            Theme::Orderly => "orderly",
        }
    }

    pub fn from_key(key: &str) -> Option<Theme> {
        match key {
            "chaotic" => Some(Theme::Chaotic),
            "orderly" => Some(Theme::Orderly),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Chaotic => "Chaotic",
            Theme::Orderly => "Orderly",
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Chaotic => Theme::Orderly,
            Theme::Orderly => Theme::Chaotic,
        }
    }

    /// Headers, borders of focused panels, tab highlight
    pub fn accent(&self) -> Color {
        match self {
            Theme::Chaotic => Color::LightRed,
            Theme::Orderly => Color::Cyan,
        }
    }

    /// Selected rows and key hints
    pub fn highlight(&self) -> Color {
        match self {
            Theme::Chaotic => Color::Magenta,
            Theme::Orderly => Color::Yellow,
        }
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to access preferences file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse preferences: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Failed to write preferences: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// String key-value storage for UI preferences
pub trait ThemeStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Read the stored theme, falling back to the default for missing or unknown values
pub fn load_theme(store: &dyn ThemeStore) -> Theme {
    store
        .get(THEME_KEY)
        .and_then(|value| Theme::from_key(&value))
        .unwrap_or_default()
}

/// Preferences kept as a flat TOML table in a single file
#[derive(Debug, Clone)]
pub struct FileThemeStore {
    path: PathBuf,
}

impl FileThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileThemeStore { path: path.into() }
    }

    /// `<config dir>/arcane_build/preferences.toml`, if the platform has a config dir
    pub fn default_location() -> Option<Self> {
        dirs::config_dir().map(|dir| FileThemeStore::new(dir.join("arcane_build").join("preferences.toml")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<BTreeMap<String, String>, StoreError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(toml::from_str(&content)?)
    }
}

impl ThemeStore for FileThemeStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.read() {
            Ok(mut values) => values.remove(key),
            Err(err) => {
                tracing::warn!(%err, path = %self.path.display(), "ignoring unreadable preferences");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values = self.read().unwrap_or_default();
        values.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, toml::to_string(&values)?)?;
        Ok(())
    }
}

/// Non-persistent store, used when no config dir is available and in tests
#[derive(Debug, Clone, Default)]
pub struct MemoryThemeStore {
    values: HashMap<String, String>,
}

impl ThemeStore for MemoryThemeStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_is_chaotic() {
        assert_eq!(load_theme(&MemoryThemeStore::default()), Theme::Chaotic);
    }

    #[test]
    fn test_unknown_value_falls_back() {
        let mut store = MemoryThemeStore::default();
        store.set(THEME_KEY, "neon").unwrap();
        assert_eq!(load_theme(&store), Theme::Chaotic);
    }

    #[test]
    fn test_toggle_roundtrip() {
        let theme = Theme::Chaotic.toggled();
        assert_eq!(theme, Theme::Orderly);
        assert_eq!(Theme::from_key(theme.key()), Some(theme));
        assert_eq!(theme.toggled(), Theme::Chaotic);
    }

    #[test]
    fn test_file_store_persists() {
        let dir = std::env::temp_dir().join(format!("arcane_build_theme_{}", std::process::id()));
        let path = dir.join("preferences.toml");
        let _ = fs::remove_file(&path);

        let mut store = FileThemeStore::new(&path);
        assert_eq!(store.get(THEME_KEY), None);
        store.set(THEME_KEY, Theme::Orderly.key()).unwrap();
        store.set("other", "value").unwrap();

        let reopened = FileThemeStore::new(&path);
        assert_eq!(load_theme(&reopened), Theme::Orderly);
        assert_eq!(reopened.get("other").as_deref(), Some("value"));

        let _ = fs::remove_dir_all(&dir);
    }
}
