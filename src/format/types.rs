use serde::{Deserialize, Serialize};

// ============================================================================
// Block Models
// ============================================================================

/// Whether a list entry was written as a bullet or as a numbered line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    Bullet,
    Numbered,
}

/// A single list entry with its marker already removed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub kind: ListKind,
    pub text: String,
}

/// Top-level structural unit produced by the segmenter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "snake_case")]
pub enum Block {
    /// Line wrapped in `**`, delimiters stripped
    Header(String),
    /// Run of consecutive bullet/numbered lines
    List(Vec<ListItem>),
    /// Any other non-blank line, one block per line
    Paragraph(String),
}

// ============================================================================
// Inline Models
// ============================================================================

/// A run of text carrying exactly one formatting attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum InlineSpan {
    Plain(String),
    Bold(String),
    Italic(String),
    Code(String),
}

impl InlineSpan {
    /// Literal text of the span, without delimiters
    pub fn text(&self) -> &str {
        match self {
            InlineSpan::Plain(text)
            | InlineSpan::Bold(text)
            | InlineSpan::Italic(text)
            | InlineSpan::Code(text) => text,
        }
    }
}

/// Concatenate the literal text of a span sequence
pub fn spans_text(spans: &[InlineSpan]) -> String {
    spans.iter().map(InlineSpan::text).collect()
}

// ============================================================================
// Formatted Models
// ============================================================================

/// A list entry with inline spans resolved and its display ordinal assigned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedItem {
    pub kind: ListKind,
    /// 1-based position within the enclosing list
    pub ordinal: usize,
    pub spans: Vec<InlineSpan>,
}

/// A block with its inline spans resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "snake_case")]
pub enum FormattedBlock {
    Header(Vec<InlineSpan>),
    List(Vec<FormattedItem>),
    Paragraph(Vec<InlineSpan>),
}
