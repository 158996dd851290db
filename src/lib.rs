//! Lightweight markdown-subset formatter.
//!
//! Text goes in, an ordered list of headers, lists and paragraphs with
//! resolved inline spans comes out. The crate also carries output
//! renderers, terminal display, configuration and a preferences store
//! used by the `litemark` binary.

pub mod config;
pub mod display;
pub mod error;
pub mod format;
pub mod prefs;
pub mod renderer;

pub use error::{LitemarkError, Result};
pub use format::{
    format_inline, render, segment, Block, FormattedBlock, FormattedItem, InlineSpan, ListItem,
    ListKind,
};
