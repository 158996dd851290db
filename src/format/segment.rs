//! Block segmentation
//!
//! Splits text into lines and classifies each trimmed line as a header,
//! a list entry or a paragraph. Consecutive list entries share one List
//! block until a blank or non-list line flushes it.

use regex::Regex;
use std::sync::LazyLock;

use super::types::{Block, ListItem, ListKind};

static BULLET_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\*|-|•)\s+").unwrap());

static NUMBER_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+\.\s+").unwrap());

const HEADER_DELIMITER: &str = "**";

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Split text into an ordered sequence of blocks
pub fn segment(text: &str) -> Vec<Block> {
    let mut segmenter = Segmenter::default();

    for line in text.split('\n') {
        segmenter.push_line(line);
    }

    segmenter.finish()
}

#[derive(Default)]
struct Segmenter {
    blocks: Vec<Block>,
    pending_items: Vec<ListItem>,
}

impl Segmenter {
    fn push_line(&mut self, line: &str) {
        let line = line.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK);

        if let Some(text) = header_text(line) {
            self.flush_list();
            self.blocks.push(Block::Header(text.to_string()));
        } else if let Some(item) = list_item(line) {
            self.pending_items.push(item);
        } else if line.is_empty() {
            self.flush_list();
        } else {
            self.flush_list();
            self.blocks.push(Block::Paragraph(line.to_string()));
        }
    }

    /// Close the open list, if any, and emit it
    fn flush_list(&mut self) {
        if !self.pending_items.is_empty() {
            let items = std::mem::take(&mut self.pending_items);
            self.blocks.push(Block::List(items));
        }
    }

    fn finish(mut self) -> Vec<Block> {
        self.flush_list();
        self.blocks
    }
}

/// Inner text of a `**...**` line longer than the delimiter pair
fn header_text(line: &str) -> Option<&str> {
    if line.chars().count() <= HEADER_DELIMITER.len() * 2 {
        return None;
    }

    line.strip_prefix(HEADER_DELIMITER)?
        .strip_suffix(HEADER_DELIMITER)
}

fn list_item(line: &str) -> Option<ListItem> {
    if let Some(marker) = BULLET_MARKER.find(line) {
        return Some(ListItem {
            kind: ListKind::Bullet,
            text: line[marker.end()..].to_string(),
        });
    }

    NUMBER_MARKER.find(line).map(|marker| ListItem {
        kind: ListKind::Numbered,
        text: line[marker.end()..].to_string(),
    })
}
