mod cli;

use clap::{ArgAction, Parser, Subcommand};
use litemark::config::OutputFormat;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "litemark")]
#[command(about = "Format lightweight markdown into headers, lists and paragraphs", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format a document and print it
    Render {
        /// Input file (reads stdin when omitted or "-")
        input: Option<PathBuf>,

        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format (overrides the config file)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Preference commands
    Prefs {
        #[command(subcommand)]
        command: PrefsCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Initialize litemark.toml configuration file
    Init {
        /// Path where to create the config file
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum PrefsCommands {
    /// Print the current preferences
    Show {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Toggle between light and dark theme
    Theme {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Toggle between English and Japanese
    Language {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Add or remove a favorite
    Favorite {
        /// Identifier of the item
        id: String,

        /// Human-readable title stored with the favorite
        #[arg(long)]
        title: Option<String>,

        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Delete the preferences file
    Reset {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    let _ = TermLogger::init(level, log_config, TerminalMode::Stderr, ColorChoice::Auto);
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Render {
            input,
            config,
            format,
        } => cli::render::run(input, config, format),
        Commands::Config { command } => match command {
            ConfigCommands::Init { path } => cli::config::init(path),
        },
        Commands::Prefs { command } => match command {
            PrefsCommands::Show { config } => cli::prefs::show(config),
            PrefsCommands::Theme { config } => cli::prefs::toggle_theme(config),
            PrefsCommands::Language { config } => cli::prefs::toggle_language(config),
            PrefsCommands::Favorite { id, title, config } => {
                cli::prefs::toggle_favorite(config, id, title)
            }
            PrefsCommands::Reset { config } => cli::prefs::reset(config),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
