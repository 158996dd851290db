//! Preferences module
//!
//! Theme, language and favorites, loaded and saved through an injected
//! `PreferencesStore`. The file-backed store keeps them as JSON
//! (.litemark-prefs.json).

mod types;

pub use types::{Favorite, Language, Preferences, Theme};

use chrono::Utc;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LitemarkError, Result};

/// Explicit load/save seam for preferences
pub trait PreferencesStore {
    fn load(&self) -> Result<Preferences>;
    fn save(&self, prefs: &Preferences) -> Result<()>;
}

/// Preferences persisted as a JSON file
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete the backing file. Returns false if there was nothing to delete.
    pub fn reset(&self) -> Result<bool> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

impl PreferencesStore for JsonFileStore {
    fn load(&self) -> Result<Preferences> {
        if !self.path.exists() {
            log::debug!(
                "Preferences file {} not found, using defaults",
                self.path.display()
            );
            return Ok(Preferences::default());
        }

        let content = fs::read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(|e| {
            LitemarkError::Preferences(format!(
                "Cannot parse '{}': {}. Run 'litemark prefs reset' to start over.",
                self.path.display(),
                e
            ))
        })
    }

    fn save(&self, prefs: &Preferences) -> Result<()> {
        let mut prefs = prefs.clone();
        prefs.last_updated = Utc::now();

        let json = serde_json::to_string_pretty(&prefs)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.path, json)?;
        log::info!("Saved preferences to {}", self.path.display());
        Ok(())
    }
}

/// In-process store for embedding and tests
#[derive(Default)]
pub struct MemoryStore {
    prefs: RefCell<Option<Preferences>>,
}

impl PreferencesStore for MemoryStore {
    fn load(&self) -> Result<Preferences> {
        Ok(self.prefs.borrow().clone().unwrap_or_default())
    }

    fn save(&self, prefs: &Preferences) -> Result<()> {
        *self.prefs.borrow_mut() = Some(prefs.clone());
        Ok(())
    }
}

/// Load, apply `change`, save. Returns whatever `change` returns.
pub fn update<S, T>(store: &S, change: impl FnOnce(&mut Preferences) -> T) -> Result<T>
where
    S: PreferencesStore + ?Sized,
{
    let mut prefs = store.load()?;
    let outcome = change(&mut prefs);
    store.save(&prefs)?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_loads_defaults() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().join("prefs.json"));

        let prefs = store.load().unwrap();
        assert_eq!(prefs, Preferences {
            last_updated: prefs.last_updated,
            ..Preferences::default()
        });
    }

    #[test]
    fn test_save_then_load() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().join("nested/prefs.json"));

        let mut prefs = Preferences::default();
        prefs.toggle_theme();
        store.save(&prefs).unwrap();

        assert!(store.path().exists());
        let loaded = store.load().unwrap();
        assert_eq!(loaded.theme, Theme::Light);
    }

    #[test]
    fn test_corrupt_file_is_preferences_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("prefs.json");
        fs::write(&path, "{ not json").unwrap();

        let err = JsonFileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, LitemarkError::Preferences(_)));
        assert!(err.to_string().contains("litemark prefs reset"));
    }

    #[test]
    fn test_reset() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().join("prefs.json"));

        assert!(!store.reset().unwrap());
        store.save(&Preferences::default()).unwrap();
        assert!(store.reset().unwrap());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::default();
        assert_eq!(store.load().unwrap().language, Language::En);

        let mut prefs = Preferences::default();
        prefs.toggle_language();
        store.save(&prefs).unwrap();

        assert_eq!(store.load().unwrap().language, Language::Ja);
    }

    #[test]
    fn test_update_persists_change() {
        let store = MemoryStore::default();

        let added = update(&store, |prefs| {
            prefs.toggle_favorite(Favorite {
                id: "42".to_string(),
                title: String::new(),
            })
        })
        .unwrap();

        assert!(added);
        assert!(store.load().unwrap().is_favorite("42"));
    }
}
