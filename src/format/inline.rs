//! Inline span resolution
//!
//! One combined pattern is scanned left to right. At each position the
//! alternatives are tried in order (code, bold, italic) and the first that
//! matches wins. Spans never nest.

use regex::{Match, Regex};
use std::sync::LazyLock;

use super::types::InlineSpan;

static INLINE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`[^`]+`|\*\*[^*]+\*\*|\*[^*]+\*").unwrap());

/// Resolve code, bold and italic spans within a single line of text
pub fn format_inline(text: &str) -> Vec<InlineSpan> {
    let mut spans = Vec::new();
    let mut last = 0;

    for token in INLINE_TOKEN.find_iter(text) {
        if token.start() > last {
            spans.push(InlineSpan::Plain(text[last..token.start()].to_string()));
        }
        spans.push(classify(&token));
        last = token.end();
    }

    if last < text.len() {
        spans.push(InlineSpan::Plain(text[last..].to_string()));
    }

    if spans.is_empty() {
        spans.push(InlineSpan::Plain(text.to_string()));
    }

    spans
}

fn classify(token: &Match<'_>) -> InlineSpan {
    let raw = token.as_str();

    if let Some(inner) = strip_pair(raw, "`") {
        InlineSpan::Code(inner.to_string())
    } else if let Some(inner) = strip_pair(raw, "**") {
        InlineSpan::Bold(inner.to_string())
    } else {
        // Only remaining alternative is `*...*`
        InlineSpan::Italic(raw[1..raw.len() - 1].to_string())
    }
}

fn strip_pair<'a>(raw: &'a str, delimiter: &str) -> Option<&'a str> {
    raw.strip_prefix(delimiter)?.strip_suffix(delimiter)
}
