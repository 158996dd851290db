use litemark::config::{self, Config, DEFAULT_CONFIG_FILE};
use litemark::error::Result;
use std::path::PathBuf;

/// Initialize litemark.toml configuration file
pub fn init(path: Option<PathBuf>) -> Result<()> {
    let config_path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

    // Check if file already exists
    if config_path.exists() {
        eprintln!(
            "Configuration file already exists at: {}",
            config_path.display()
        );
        eprintln!("Remove it first if you want to reinitialize.");
        return Ok(());
    }

    config::save(&Config::default(), &config_path)?;

    println!("Configuration file created: {}", config_path.display());
    println!("\nNext steps:");
    println!(
        "1. Edit {} to pick an output format and bullet glyph",
        config_path.display()
    );
    println!("2. Run 'litemark render <FILE>' to format a document");

    Ok(())
}
