//! Durable user preferences.
//!
//! A small key-value store persisted as TOML in the data directory. The
//! showcase only stores one key today (the theme choice), but the store is
//! generic string-to-string.

use std::collections::BTreeMap;
use std::path::PathBuf;

use tracing::debug;

/// Preference key for the stored theme choice
pub const THEME_KEY: &str = "theme";

/// Explicit theme choice stored by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemePreference {
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Unknown values read as no preference.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// What the page actually renders as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appearance {
    Light,
    Dark,
}

impl Appearance {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn preference(self) -> ThemePreference {
        match self {
            Self::Light => ThemePreference::Light,
            Self::Dark => ThemePreference::Dark,
        }
    }
}

/// Resolve the displayed appearance: an explicit preference always wins,
/// otherwise the system signal is used.
pub fn resolve_appearance(pref: Option<ThemePreference>, system: Appearance) -> Appearance {
    match pref {
        Some(ThemePreference::Light) => Appearance::Light,
        Some(ThemePreference::Dark) => Appearance::Dark,
        None => system,
    }
}

/// Key-value preference store backed by a TOML file.
///
/// A missing or unreadable file reads as an empty store; writes re-create
/// it. With no backing path the store is memory-only.
#[derive(Debug, Clone)]
pub struct PrefStore {
    path: Option<PathBuf>,
    values: BTreeMap<String, String>,
}

impl PrefStore {
    /// Open the store at `path`, loading existing values if present
    pub fn open(path: PathBuf) -> Self {
        let values = match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).unwrap_or_else(|e| {
                debug!("Ignoring unreadable preference file: {}", e);
                BTreeMap::new()
            }),
            Err(_) => BTreeMap::new(),
        };
        Self {
            path: Some(path),
            values,
        }
    }

    /// Memory-only store, nothing is persisted
    pub fn in_memory() -> Self {
        Self {
            path: None,
            values: BTreeMap::new(),
        }
    }

    /// Get a stored value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Store a value and write the file through
    pub fn set(&mut self, key: &str, value: &str) -> crate::Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.persist()
    }

    /// The stored theme preference, if any
    pub fn theme_preference(&self) -> Option<ThemePreference> {
        self.get(THEME_KEY).and_then(ThemePreference::parse)
    }

    /// Store an explicit theme preference
    pub fn set_theme_preference(&mut self, pref: ThemePreference) -> crate::Result<()> {
        self.set(THEME_KEY, pref.as_str())
    }

    fn persist(&self) -> crate::Result<()> {
        let Some(ref path) = self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(&self.values)
            .map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_preference_wins_over_system() {
        assert_eq!(
            resolve_appearance(Some(ThemePreference::Light), Appearance::Dark),
            Appearance::Light
        );
        assert_eq!(
            resolve_appearance(Some(ThemePreference::Dark), Appearance::Light),
            Appearance::Dark
        );
    }

    #[test]
    fn test_no_preference_falls_back_to_system() {
        assert_eq!(resolve_appearance(None, Appearance::Dark), Appearance::Dark);
        assert_eq!(
            resolve_appearance(None, Appearance::Light),
            Appearance::Light
        );
    }

    #[test]
    fn test_parse_unknown_value_reads_as_unset() {
        assert_eq!(ThemePreference::parse("solarized"), None);
        assert_eq!(ThemePreference::parse(""), None);
        assert_eq!(ThemePreference::parse("dark"), Some(ThemePreference::Dark));
    }

    #[test]
    fn test_in_memory_store_round_trip() {
        let mut store = PrefStore::in_memory();
        assert_eq!(store.theme_preference(), None);

        store
            .set_theme_preference(ThemePreference::Light)
            .expect("memory store never fails");
        assert_eq!(store.theme_preference(), Some(ThemePreference::Light));
        assert_eq!(store.get(THEME_KEY), Some("light"));
    }
}
