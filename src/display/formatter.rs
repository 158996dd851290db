//! Terminal formatting of formatted blocks using termimad styles
//!
//! Blocks are styled directly from the node tree. Text is never handed back
//! to a markdown parser, so literal `#`, `>` or `---` in a paragraph stay
//! literal.

use std::io::{self, Write};

use termimad::{gray, CompoundStyle, MadSkin};

use crate::config::Config;
use crate::display::terminal::should_use_colors;
use crate::format::{FormattedBlock, InlineSpan};
use crate::prefs::Theme;
use crate::renderer::Renderer;

/// Print blocks to terminal with rich formatting (or plain fallback)
pub fn print_document(blocks: &[FormattedBlock], config: &Config, theme: Theme) {
    if should_use_colors() {
        if let Err(e) = print_rich(blocks, config, theme) {
            log::warn!("Terminal rendering failed ({}), using plain output", e);
            print_plain(blocks, config);
        }
    } else {
        print_plain(blocks, config);
    }
}

fn print_rich(blocks: &[FormattedBlock], config: &Config, theme: Theme) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write_rich(&mut stdout, blocks, config, theme)?;
    stdout.flush()
}

/// Write styled blocks, separated by a blank line
fn write_rich(
    out: &mut impl Write,
    blocks: &[FormattedBlock],
    config: &Config,
    theme: Theme,
) -> io::Result<()> {
    let skin = skin_for(theme);
    let marker_style = CompoundStyle::with_fg(accent(theme));
    let renderer = Renderer::new(config);

    for (index, block) in blocks.iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }

        match block {
            FormattedBlock::Header(spans) => {
                write_spans(out, &skin, spans, Some(&skin.headers[2].compound_style))?;
                writeln!(out)?;
            }
            FormattedBlock::Paragraph(spans) => {
                write_spans(out, &skin, spans, None)?;
                writeln!(out)?;
            }
            FormattedBlock::List(items) => {
                for item in items {
                    write!(out, "{} ", marker_style.apply_to(renderer.marker(item)))?;
                    write_spans(out, &skin, &item.spans, None)?;
                    writeln!(out)?;
                }
            }
        }
    }

    Ok(())
}

/// Plain spans take `plain_style` when given, otherwise they are written raw
fn write_spans(
    out: &mut impl Write,
    skin: &MadSkin,
    spans: &[InlineSpan],
    plain_style: Option<&CompoundStyle>,
) -> io::Result<()> {
    for span in spans {
        match span {
            InlineSpan::Plain(text) => match plain_style {
                Some(style) => write!(out, "{}", style.apply_to(text.as_str()))?,
                None => write!(out, "{}", text)?,
            },
            InlineSpan::Bold(text) => write!(out, "{}", skin.bold.apply_to(text.as_str()))?,
            InlineSpan::Italic(text) => write!(out, "{}", skin.italic.apply_to(text.as_str()))?,
            InlineSpan::Code(text) => {
                write!(out, "{}", skin.inline_code.apply_to(text.as_str()))?
            }
        }
    }
    Ok(())
}

fn accent(theme: Theme) -> termimad::crossterm::style::Color {
    use termimad::crossterm::style::Color::*;

    match theme {
        Theme::Dark => Magenta,
        Theme::Light => DarkMagenta,
    }
}

/// Skin matching the preferred theme, accents in purple
fn skin_for(theme: Theme) -> MadSkin {
    use termimad::crossterm::style::Attribute;

    let mut skin = match theme {
        Theme::Dark => MadSkin::default_dark(),
        Theme::Light => MadSkin::default_light(),
    };
    let accent = accent(theme);

    for header in skin.headers.iter_mut() {
        header.set_fg(accent);
        header.add_attr(Attribute::Bold);
    }

    skin.inline_code.set_fg(accent);
    skin.inline_code.set_bg(match theme {
        Theme::Dark => gray(4),
        Theme::Light => gray(20),
    });

    skin.bold.set_fg(accent);
    skin.bold.add_attr(Attribute::Bold);
    skin.italic.add_attr(Attribute::Italic);

    skin
}

/// Print the plain-text rendering without styling
fn print_plain(blocks: &[FormattedBlock], config: &Config) {
    println!("{}", Renderer::new(config).plain(blocks));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::render;
    use serial_test::serial;

    fn rich_output(text: &str) -> String {
        let config = Config::default();
        let mut buf = Vec::new();
        write_rich(&mut buf, &render(text), &config, Theme::Dark).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    #[serial]
    fn test_print_document_plain_fallback() {
        // Set NO_COLOR to force plain output
        std::env::set_var("NO_COLOR", "1");

        print_document(&render("**Test**\n\nHello **world**"), &Config::default(), Theme::Dark);

        std::env::remove_var("NO_COLOR");
    }

    #[test]
    fn test_skins_differ_by_theme() {
        let dark = skin_for(Theme::Dark);
        let light = skin_for(Theme::Light);

        assert_ne!(
            dark.inline_code.object_style.background_color,
            light.inline_code.object_style.background_color
        );
    }

    #[test]
    fn test_markdown_lookalikes_stay_literal() {
        let output = rich_output("# x\n> y\n---");

        assert!(output.contains("# x"));
        assert!(output.contains("> y"));
        assert!(output.contains("---"));
    }

    #[test]
    fn test_emphasis_keeps_edge_whitespace() {
        let output = rich_output("a * 3 * b");

        assert!(output.contains(" 3 "));
        assert!(!output.contains('*'));
    }

    #[test]
    fn test_list_markers_use_ordinals() {
        let output = rich_output("5. first\n- second");

        assert!(output.contains("1."));
        assert!(output.contains("first"));
        assert!(output.contains("•"));
        assert!(!output.contains("5."));
    }
}
