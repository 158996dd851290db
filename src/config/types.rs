use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Litemark configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output settings for `litemark render`
    pub output: Output,

    /// HTML renderer settings
    pub html: Html,

    /// Where user preferences are stored
    pub preferences: PreferencesLocation,
}

/// Output formats understood by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Rich terminal output, plain when colours are unavailable
    #[default]
    Terminal,
    Plain,
    Html,
    Markdown,
    Json,
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Output {
    /// Default output format
    pub format: OutputFormat,

    /// Glyph printed before bullet items in plain output
    pub bullet: String,
}

/// HTML renderer settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Html {
    /// Element used for header blocks (h1..h6)
    pub heading_tag: String,
}

/// Preferences file location
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferencesLocation {
    pub file: PathBuf,
}

impl Default for Output {
    fn default() -> Self {
        Self {
            format: OutputFormat::Terminal,
            bullet: "•".to_string(),
        }
    }
}

impl Default for Html {
    fn default() -> Self {
        Self {
            heading_tag: "h3".to_string(),
        }
    }
}

impl Default for PreferencesLocation {
    fn default() -> Self {
        Self {
            file: PathBuf::from("./.litemark-prefs.json"),
        }
    }
}

impl Html {
    /// Whether the heading tag names a real HTML heading element
    pub fn has_valid_heading_tag(&self) -> bool {
        matches!(
            self.heading_tag.as_str(),
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6"
        )
    }
}
