//! Local persistence for settings. The only persisted value is the display
//! theme, stored under [`THEME_STORAGE_KEY`].
//!
//! - Web: `window.localStorage`.
//! - Desktop: a small JSON object in `<data dir>/preferences.json`.

use std::cell::RefCell;
use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::core::error::StorageError;
use crate::core::theme::Theme;

pub const THEME_STORAGE_KEY: &str = "ddos-analyzer-theme";

/// String key/value persistence backend.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Reads and writes the theme preference through any [`PreferenceStore`].
#[derive(Debug, Clone)]
pub struct ThemeStore<S> {
    store: S,
}

impl<S: PreferenceStore> ThemeStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored theme, or `light` when nothing (or something unknown) is stored.
    pub fn load(&self) -> Theme {
        match self.store.get(THEME_STORAGE_KEY) {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|_| {
                warn!(value = %raw, "ignoring unknown stored theme");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(err) => {
                warn!(%err, "theme preference unavailable");
                Theme::default()
            }
        }
    }

    pub fn save(&self, theme: Theme) -> Result<(), StorageError> {
        debug!(theme = theme.id(), "persisting theme");
        self.store.set(THEME_STORAGE_KEY, theme.id())
    }
}

/// Theme store backed by the platform's local storage.
pub fn local_theme_store() -> ThemeStore<LocalPreferences> {
    ThemeStore::new(LocalPreferences::default())
}

/// In-memory backend, used by tests and as a fallback.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: RefCell<BTreeMap<String, String>>,
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone)]
pub struct LocalPreferences;

#[cfg(target_arch = "wasm32")]
impl LocalPreferences {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for LocalPreferences {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| StorageError::Unavailable)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::Unavailable)
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct LocalPreferences {
    path: Option<std::path::PathBuf>,
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for LocalPreferences {
    fn default() -> Self {
        let path = data_dir().map(|dir| dir.join("preferences.json"));
        Self { path }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl LocalPreferences {
    pub fn at(path: impl Into<std::path::PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    fn path(&self) -> Result<&std::path::Path, StorageError> {
        self.path.as_deref().ok_or(StorageError::Unavailable)
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let path = self.path()?;
        match std::fs::read_to_string(path) {
            Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl PreferenceStore for LocalPreferences {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self.read_all().unwrap_or_default();
        values.insert(key.to_string(), value.to_string());

        let path = self.path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let encoded = serde_json::to_string_pretty(&values)?;
        std::fs::write(path, encoded)?;
        Ok(())
    }
}

/// Per-user application data directory (desktop only).
#[cfg(not(target_arch = "wasm32"))]
pub fn data_dir() -> Option<std::path::PathBuf> {
    directories::ProjectDirs::from("com", "DDoS Analyzer", "DDoS Analyzer")
        .map(|dirs| dirs.data_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_light_when_empty() {
        let store = ThemeStore::new(MemoryPreferences::default());
        assert_eq!(store.load(), Theme::Light);
    }

    #[test]
    fn unknown_stored_value_falls_back_to_light() {
        let prefs = MemoryPreferences::default();
        prefs.set(THEME_STORAGE_KEY, "sepia").unwrap();
        assert_eq!(ThemeStore::new(prefs).load(), Theme::Light);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn dark_theme_survives_a_reload() {
        let dir = std::env::temp_dir().join(format!(
            "ddos-analyzer-prefs-{}-{}",
            std::process::id(),
            crate::core::platform::unix_millis()
        ));
        let path = dir.join("preferences.json");

        let first = ThemeStore::new(LocalPreferences::at(&path));
        assert_eq!(first.load(), Theme::Light);
        first.save(Theme::Dark).unwrap();

        // a fresh store simulates the next session
        let reloaded = ThemeStore::new(LocalPreferences::at(&path));
        assert_eq!(reloaded.load(), Theme::Dark);

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"ddos-analyzer-theme\": \"dark\""));

        std::fs::remove_dir_all(dir).ok();
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn malformed_file_reads_as_default() {
        let dir = std::env::temp_dir().join(format!(
            "ddos-analyzer-bad-prefs-{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("preferences.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = ThemeStore::new(LocalPreferences::at(&path));
        assert_eq!(store.load(), Theme::Light);
        // saving replaces the broken file
        store.save(Theme::Ocean).unwrap();
        assert_eq!(store.load(), Theme::Ocean);

        std::fs::remove_dir_all(dir).ok();
    }
}
