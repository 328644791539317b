//! Site preferences (language, theme) over a pluggable key-value store.

use std::collections::HashMap;
use std::fmt::Debug;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::error::StoreError;
use crate::models::preferences::{Locale, SitePreferences, Theme};

pub const LANGUAGE_KEY: &str = "language";
pub const THEME_KEY: &str = "theme";

/// Minimal get/set contract of the preference backend.
pub trait PreferenceStore: Send + Sync + Debug {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

// ─── In-memory store ─────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut map = self.values.write().map_err(|_| StoreError::Poisoned)?;
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ─── JSON file store ─────────────────────────────────────────────────────────

/// Flat `{ "key": "value" }` JSON file, rewritten on every `set`.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: RwLock<HashMap<String, String>>,
}

impl JsonFileStore {
    /// Opens `path`, starting empty if the file does not exist yet.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let values = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                HashMap::new()
            } else {
                serde_json::from_str(&content)?
            }
        } else {
            HashMap::new()
        };
        tracing::debug!(path = %path.display(), entries = values.len(), "preference file opened");
        Ok(Self { path, values: RwLock::new(values) })
    }

    fn flush(&self, values: &HashMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(values)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

impl PreferenceStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().ok()?.get(key).cloned()
    }

    /// The cached map only changes once the file write has succeeded.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut map = self.values.write().map_err(|_| StoreError::Poisoned)?;
        let mut next = map.clone();
        next.insert(key.to_string(), value.to_string());
        self.flush(&next)?;
        *map = next;
        Ok(())
    }
}

// ─── Preferences service ─────────────────────────────────────────────────────

/// Typed view over a [`PreferenceStore`]. Missing or unrecognised stored
/// values read back as the defaults (`en`, `light`).
#[derive(Clone, Debug)]
pub struct Preferences {
    store: Arc<dyn PreferenceStore>,
}

impl Preferences {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::default()))
    }

    pub fn language(&self) -> Locale {
        read_or_default(self.store.as_ref(), LANGUAGE_KEY)
    }

    pub fn theme(&self) -> Theme {
        read_or_default(self.store.as_ref(), THEME_KEY)
    }

    pub fn load(&self) -> SitePreferences {
        SitePreferences {
            language: self.language(),
            theme: self.theme(),
        }
    }

    pub fn set_language(&self, language: Locale) -> Result<SitePreferences, StoreError> {
        self.store.set(LANGUAGE_KEY, language.as_str())?;
        tracing::info!(language = %language, "language preference updated");
        Ok(self.load())
    }

    pub fn set_theme(&self, theme: Theme) -> Result<SitePreferences, StoreError> {
        self.store.set(THEME_KEY, theme.as_str())?;
        tracing::info!(theme = %theme, "theme preference updated");
        Ok(self.load())
    }

    /// rtl → `en`, anything else → `ar`
    pub fn toggle_language(&self) -> Result<SitePreferences, StoreError> {
        self.set_language(self.language().toggled())
    }

    /// dark → `light`, anything else → `dark`
    pub fn toggle_theme(&self) -> Result<SitePreferences, StoreError> {
        self.set_theme(self.theme().toggled())
    }
}

fn read_or_default<T>(store: &dyn PreferenceStore, key: &str) -> T
where
    T: std::str::FromStr + Default,
{
    match store.get(key) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "ignoring unrecognised stored preference");
            T::default()
        }),
        None => T::default(),
    }
}
