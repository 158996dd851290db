//! Command-line interface module
//!
//! Implements all CLI commands using clap:
//! - render: Format a document and print it
//! - config init: Initialize configuration file
//! - prefs show/theme/language/favorite/reset: Manage preferences

pub mod config;
pub mod prefs;
pub mod render;
