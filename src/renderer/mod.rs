//! Output renderer module
//!
//! Turns formatted blocks into plain text, HTML, canonical markdown or JSON.
//! Blocks are emitted in the order given and separated by a blank line.

use crate::config::Config;
use crate::error::Result;
use crate::format::{spans_text, FormattedBlock, FormattedItem, InlineSpan, ListKind};

/// Renderer for formatted blocks
pub struct Renderer<'a> {
    config: &'a Config,
}

impl<'a> Renderer<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Render as plain text with list markers but no inline delimiters
    pub fn plain(&self, blocks: &[FormattedBlock]) -> String {
        join_blocks(blocks, |block| match block {
            FormattedBlock::Header(spans) | FormattedBlock::Paragraph(spans) => spans_text(spans),
            FormattedBlock::List(items) => items
                .iter()
                .map(|item| format!("{} {}", self.marker(item), spans_text(&item.spans)))
                .collect::<Vec<_>>()
                .join("\n"),
        })
    }

    /// Render as an HTML fragment
    pub fn html(&self, blocks: &[FormattedBlock]) -> String {
        let tag = &self.config.html.heading_tag;

        join_blocks(blocks, |block| match block {
            FormattedBlock::Header(spans) => format!("<{tag}>{}</{tag}>", html_spans(spans)),
            FormattedBlock::Paragraph(spans) => format!("<p>{}</p>", html_spans(spans)),
            FormattedBlock::List(items) => {
                let mut output = String::from("<ul>\n");
                for item in items {
                    output.push_str(&format!(
                        "  <li><span>{}</span> <span>{}</span></li>\n",
                        escape_html(&self.marker(item)),
                        html_spans(&item.spans)
                    ));
                }
                output.push_str("</ul>");
                output
            }
        })
    }

    /// Render as canonical markdown, escaping text that would read as markup
    pub fn markdown(&self, blocks: &[FormattedBlock]) -> String {
        join_blocks(blocks, |block| match block {
            FormattedBlock::Header(spans) => format!("### {}", markdown_spans(spans)),
            FormattedBlock::Paragraph(spans) => markdown_spans(spans),
            FormattedBlock::List(items) => items
                .iter()
                .map(|item| {
                    let marker = match item.kind {
                        ListKind::Bullet => "-".to_string(),
                        ListKind::Numbered => format!("{}.", item.ordinal),
                    };
                    format!("{} {}", marker, markdown_spans(&item.spans))
                })
                .collect::<Vec<_>>()
                .join("\n"),
        })
    }

    /// Render as pretty-printed JSON
    pub fn json(&self, blocks: &[FormattedBlock]) -> Result<String> {
        Ok(serde_json::to_string_pretty(blocks)?)
    }

    /// Display marker: the configured bullet glyph, or the item's ordinal
    pub fn marker(&self, item: &FormattedItem) -> String {
        match item.kind {
            ListKind::Bullet => self.config.output.bullet.clone(),
            ListKind::Numbered => format!("{}.", item.ordinal),
        }
    }
}

fn join_blocks(blocks: &[FormattedBlock], render: impl Fn(&FormattedBlock) -> String) -> String {
    blocks.iter().map(render).collect::<Vec<_>>().join("\n\n")
}

fn html_spans(spans: &[InlineSpan]) -> String {
    spans
        .iter()
        .map(|span| match span {
            InlineSpan::Plain(text) => escape_html(text),
            InlineSpan::Bold(text) => format!("<strong>{}</strong>", escape_html(text)),
            InlineSpan::Italic(text) => format!("<em>{}</em>", escape_html(text)),
            InlineSpan::Code(text) => format!("<code>{}</code>", escape_html(text)),
        })
        .collect()
}

fn markdown_spans(spans: &[InlineSpan]) -> String {
    let mut output = String::new();
    for span in spans {
        match span {
            InlineSpan::Plain(text) => output.push_str(&escape_markdown(text)),
            InlineSpan::Bold(text) => push_emphasis(&mut output, "**", text),
            InlineSpan::Italic(text) => push_emphasis(&mut output, "*", text),
            InlineSpan::Code(text) => output.push_str(&format!("`{}`", text)),
        }
    }
    escape_line_start(output)
}

/// Emphasis delimiters must hug non-whitespace, so edge whitespace goes outside
fn push_emphasis(output: &mut String, delimiter: &str, text: &str) {
    let inner = text.trim();
    if inner.is_empty() {
        output.push_str(text);
        return;
    }

    let start = text.len() - text.trim_start().len();
    let end = start + inner.len();

    output.push_str(&text[..start]);
    output.push_str(delimiter);
    output.push_str(&escape_markdown(inner));
    output.push_str(delimiter);
    output.push_str(&text[end..]);
}

fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '*' | '_' | '`' | '[' | ']' | '<' | '|') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Keep a line from being read as a heading, quote, rule or list item
fn escape_line_start(line: String) -> String {
    if line.starts_with(['#', '>', '-', '+', '=']) {
        return format!("\\{}", line);
    }

    let digits = line.len() - line.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    let rest = &line[digits..];
    if digits > 0 && rest.starts_with(['.', ')']) {
        let after = &rest[1..];
        if after.is_empty() || after.starts_with(char::is_whitespace) {
            return format!("{}\\{}", &line[..digits], rest);
        }
    }

    line
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
