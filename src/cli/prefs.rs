use std::path::PathBuf;

use litemark::config;
use litemark::error::Result;
use litemark::prefs::{self, Favorite, JsonFileStore, PreferencesStore};

fn open_store(config_path: Option<PathBuf>) -> Result<JsonFileStore> {
    let config = config::load_or_default(config_path.as_deref())?;
    Ok(JsonFileStore::new(config.preferences.file))
}

/// Print the current preferences
pub fn show(config_path: Option<PathBuf>) -> Result<()> {
    let store = open_store(config_path)?;
    let prefs = store.load()?;

    println!("Preferences file: {}", store.path().display());
    println!("theme = {}", prefs.theme);
    println!("language = {}", prefs.language);
    println!("favorites = {}", prefs.favorites.len());
    for favorite in &prefs.favorites {
        if favorite.title.is_empty() {
            println!("  - {}", favorite.id);
        } else {
            println!("  - {} ({})", favorite.id, favorite.title);
        }
    }

    Ok(())
}

/// Switch between light and dark
pub fn toggle_theme(config_path: Option<PathBuf>) -> Result<()> {
    let store = open_store(config_path)?;
    let theme = prefs::update(&store, |p| p.toggle_theme())?;
    println!("Theme set to {}", theme);
    Ok(())
}

/// Switch between English and Japanese
pub fn toggle_language(config_path: Option<PathBuf>) -> Result<()> {
    let store = open_store(config_path)?;
    let language = prefs::update(&store, |p| p.toggle_language())?;
    println!("Language set to {}", language);
    Ok(())
}

/// Add or remove a favorite by id
pub fn toggle_favorite(
    config_path: Option<PathBuf>,
    id: String,
    title: Option<String>,
) -> Result<()> {
    let store = open_store(config_path)?;
    let favorite = Favorite {
        id: id.clone(),
        title: title.unwrap_or_default(),
    };

    if prefs::update(&store, |p| p.toggle_favorite(favorite))? {
        println!("Added to favorites: {}", id);
    } else {
        println!("Removed from favorites: {}", id);
    }
    Ok(())
}

/// Reset preferences by deleting the preferences file
pub fn reset(config_path: Option<PathBuf>) -> Result<()> {
    let store = open_store(config_path)?;

    if store.reset()? {
        println!("Preferences file deleted: {}", store.path().display());
    } else {
        println!("Preferences file does not exist: {}", store.path().display());
        println!("Nothing to reset.");
    }

    Ok(())
}
