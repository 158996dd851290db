use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// User preferences shared by the display layer and the CLI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Preferences file format version
    pub version: String,

    /// Last time preferences were saved
    pub last_updated: DateTime<Utc>,

    /// Colour theme used for terminal output
    #[serde(default)]
    pub theme: Theme,

    /// Interface language
    #[serde(default)]
    pub language: Language,

    /// Bookmarked items, in insertion order
    #[serde(default)]
    pub favorites: Vec<Favorite>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    En,
    Ja,
}

/// A bookmarked item, identified by `id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    pub id: String,
    #[serde(default)]
    pub title: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            last_updated: Utc::now(),
            theme: Theme::default(),
            language: Language::default(),
            favorites: Vec::new(),
        }
    }
}

impl Preferences {
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = match self.theme {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
        self.theme
    }

    pub fn toggle_language(&mut self) -> Language {
        self.language = match self.language {
            Language::En => Language::Ja,
            Language::Ja => Language::En,
        };
        self.language
    }

    /// Add the favorite if absent, remove it if present.
    /// Returns true when the item was added.
    pub fn toggle_favorite(&mut self, favorite: Favorite) -> bool {
        if let Some(index) = self.favorites.iter().position(|f| f.id == favorite.id) {
            self.favorites.remove(index);
            false
        } else {
            self.favorites.push(favorite);
            true
        }
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.iter().any(|f| f.id == id)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::En => write!(f, "en"),
            Language::Ja => write!(f, "ja"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn favorite(id: &str) -> Favorite {
        Favorite {
            id: id.to_string(),
            title: format!("Image {}", id),
        }
    }

    #[test]
    fn test_preferences_default() {
        let prefs = Preferences::default();
        assert_eq!(prefs.version, "1.0");
        assert_eq!(prefs.theme, Theme::Dark);
        assert_eq!(prefs.language, Language::En);
        assert!(prefs.favorites.is_empty());
    }

    #[test]
    fn test_toggle_theme() {
        let mut prefs = Preferences::default();
        assert_eq!(prefs.toggle_theme(), Theme::Light);
        assert_eq!(prefs.toggle_theme(), Theme::Dark);
    }

    #[test]
    fn test_toggle_language() {
        let mut prefs = Preferences::default();
        assert_eq!(prefs.toggle_language(), Language::Ja);
        assert_eq!(prefs.toggle_language(), Language::En);
    }

    #[test]
    fn test_toggle_favorite_adds_then_removes() {
        let mut prefs = Preferences::default();

        assert!(prefs.toggle_favorite(favorite("a1")));
        assert!(prefs.toggle_favorite(favorite("b2")));
        assert!(prefs.is_favorite("a1"));

        assert!(!prefs.toggle_favorite(favorite("a1")));
        assert!(!prefs.is_favorite("a1"));
        assert_eq!(prefs.favorites, vec![favorite("b2")]);
    }

    #[test]
    fn test_favorite_identity_is_id_only() {
        let mut prefs = Preferences::default();
        prefs.toggle_favorite(favorite("a1"));

        let renamed = Favorite {
            id: "a1".to_string(),
            title: "Other title".to_string(),
        };
        assert!(!prefs.toggle_favorite(renamed));
        assert!(prefs.favorites.is_empty());
    }

    #[test]
    fn test_preferences_serialization() {
        let mut prefs = Preferences::default();
        prefs.toggle_language();
        prefs.toggle_favorite(favorite("x"));

        let json = serde_json::to_string(&prefs).unwrap();
        assert!(json.contains(r#""language":"ja""#));

        let parsed: Preferences = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, prefs);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let parsed: Preferences =
            serde_json::from_str(r#"{"version":"1.0","last_updated":"2024-01-01T00:00:00Z"}"#)
                .unwrap();
        assert_eq!(parsed.theme, Theme::Dark);
        assert_eq!(parsed.language, Language::En);
        assert!(parsed.favorites.is_empty());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Theme::Light.to_string(), "light");
        assert_eq!(Language::Ja.to_string(), "ja");
    }
}
