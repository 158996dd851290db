use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use litemark::config::{self, OutputFormat};
use litemark::display;
use litemark::error::{LitemarkError, Result};
use litemark::prefs::{JsonFileStore, Preferences, PreferencesStore};
use litemark::renderer::Renderer;

/// Format a text file (or stdin) and print it
pub fn run(
    input: Option<PathBuf>,
    config_path: Option<PathBuf>,
    format: Option<OutputFormat>,
) -> Result<()> {
    let config = config::load_or_default(config_path.as_deref())?;
    let text = read_input(input.as_deref())?;

    let blocks = litemark::render(&text);
    let renderer = Renderer::new(&config);

    match format.unwrap_or(config.output.format) {
        OutputFormat::Terminal => {
            let prefs = load_prefs_for_display(&config.preferences.file);
            display::print_document(&blocks, &config, prefs.theme);
        }
        OutputFormat::Plain => println!("{}", renderer.plain(&blocks)),
        OutputFormat::Html => println!("{}", renderer.html(&blocks)),
        OutputFormat::Markdown => println!("{}", renderer.markdown(&blocks)),
        OutputFormat::Json => println!("{}", renderer.json(&blocks)?),
    }

    Ok(())
}

/// Read the whole input; `None` or `-` means stdin
fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => fs::read_to_string(path).map_err(|e| {
            LitemarkError::Input(format!("Cannot read '{}': {}", path.display(), e))
        }),
        _ => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Preferences only pick the terminal theme here, so a broken file is not fatal
fn load_prefs_for_display(path: &Path) -> Preferences {
    JsonFileStore::new(path).load().unwrap_or_else(|e| {
        log::warn!("Ignoring preferences: {}", e);
        Preferences::default()
    })
}
