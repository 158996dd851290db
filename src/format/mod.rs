//! Text formatter module
//!
//! Converts a constrained markdown-like text block into structured blocks
//! (headers, lists, paragraphs) with inline bold/italic/code spans resolved.
//! Every function here is total: malformed input degrades to paragraphs and
//! plain text instead of failing.

mod inline;
mod segment;
mod types;

pub use inline::format_inline;
pub use segment::segment;
pub use types::{spans_text, Block, FormattedBlock, FormattedItem, InlineSpan, ListItem, ListKind};

/// Segment text into blocks and resolve inline spans for each of them
pub fn render(text: &str) -> Vec<FormattedBlock> {
    let blocks = segment(text);
    log::debug!("Segmented input into {} block(s)", blocks.len());

    blocks.into_iter().map(FormattedBlock::from).collect()
}

impl From<Block> for FormattedBlock {
    fn from(block: Block) -> Self {
        match block {
            Block::Header(text) => FormattedBlock::Header(format_inline(&text)),
            Block::Paragraph(text) => FormattedBlock::Paragraph(format_inline(&text)),
            Block::List(items) => FormattedBlock::List(
                items
                    .into_iter()
                    .enumerate()
                    .map(|(index, item)| FormattedItem {
                        kind: item.kind,
                        ordinal: index + 1,
                        spans: format_inline(&item.text),
                    })
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &str) -> InlineSpan {
        InlineSpan::Plain(text.to_string())
    }

    #[test]
    fn test_render_empty() {
        assert!(render("").is_empty());
    }

    #[test]
    fn test_render_resolves_every_block() {
        let blocks = render("**The `main` loop**\n* uses *tokio*\n\nDone **now**.");

        assert_eq!(
            blocks,
            vec![
                FormattedBlock::Header(vec![
                    plain("The "),
                    InlineSpan::Code("main".to_string()),
                    plain(" loop"),
                ]),
                FormattedBlock::List(vec![FormattedItem {
                    kind: ListKind::Bullet,
                    ordinal: 1,
                    spans: vec![plain("uses "), InlineSpan::Italic("tokio".to_string())],
                }]),
                FormattedBlock::Paragraph(vec![
                    plain("Done "),
                    InlineSpan::Bold("now".to_string()),
                    plain("."),
                ]),
            ]
        );
    }

    #[test]
    fn test_numbered_items_are_renumbered() {
        let blocks = render("5. x\n6. y");

        match &blocks[..] {
            [FormattedBlock::List(items)] => {
                let ordinals: Vec<usize> = items.iter().map(|i| i.ordinal).collect();
                assert_eq!(ordinals, vec![1, 2]);
                assert_eq!(spans_text(&items[0].spans), "x");
                assert_eq!(spans_text(&items[1].spans), "y");
            }
            other => panic!("Expected a single list, got {:?}", other),
        }
    }

    #[test]
    fn test_ordinals_restart_per_list() {
        let blocks = render("1. a\n2. b\n\n1. c");
        let firsts: Vec<usize> = blocks
            .iter()
            .filter_map(|b| match b {
                FormattedBlock::List(items) => items.first().map(|i| i.ordinal),
                _ => None,
            })
            .collect();
        assert_eq!(firsts, vec![1, 1]);
    }

    #[test]
    fn test_literal_text_survives_modulo_block_delimiters() {
        let input = "**Why `Rc`?**\n- shares *ownership*\n2. counts **refs**\nplain end";
        let literal: Vec<String> = render(input)
            .iter()
            .flat_map(|block| match block {
                FormattedBlock::Header(spans) | FormattedBlock::Paragraph(spans) => {
                    vec![spans_text(spans)]
                }
                FormattedBlock::List(items) => items.iter().map(|i| spans_text(&i.spans)).collect(),
            })
            .collect();

        assert_eq!(
            literal,
            vec!["Why Rc?", "shares ownership", "counts refs", "plain end"]
        );
    }
}
