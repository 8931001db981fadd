//! Terminal rendering of preview blocks.

use crossterm::style::Stylize;
use postdesk_core::markup::{PreviewBlock, Segment, Style};

/// Render preview blocks as terminal text, with ANSI styling when `styled`.
pub fn render_terminal(blocks: &[PreviewBlock], styled: bool) -> String {
    let mut out = String::new();

    for block in blocks {
        match block {
            PreviewBlock::Heading { level, segments } => {
                for seg in segments {
                    out.push_str(&paint_heading(seg, *level, styled));
                }
                out.push_str("\n\n");
            }
            PreviewBlock::Quote { segments } => {
                out.push_str("  │ ");
                for seg in segments {
                    let text = paint(seg, styled);
                    if styled && seg.style == Style::Plain {
                        out.push_str(&text.italic().to_string());
                    } else {
                        out.push_str(&text);
                    }
                }
                out.push('\n');
            }
            PreviewBlock::CodeBlock { code, .. } => {
                for line in code.lines() {
                    out.push_str("    ");
                    if styled {
                        out.push_str(&line.dark_grey().to_string());
                    } else {
                        out.push_str(line);
                    }
                    out.push('\n');
                }
            }
            PreviewBlock::Blank => out.push('\n'),
            PreviewBlock::Paragraph { segments } => {
                for seg in segments {
                    out.push_str(&paint(seg, styled));
                }
                out.push('\n');
            }
        }
    }

    out
}

/// Heading level styling wins over inline bold; italic and code keep their look.
fn paint_heading(seg: &Segment, level: u8, styled: bool) -> String {
    let text = seg.text.as_str();
    if !styled {
        return text.to_string();
    }
    match (seg.style, level) {
        (Style::Italic | Style::Code | Style::Link, _) => paint(seg, styled),
        (_, 1) => text.bold().underlined().cyan().to_string(),
        (_, 2) => text.bold().cyan().to_string(),
        _ => text.bold().to_string(),
    }
}

fn paint(seg: &Segment, styled: bool) -> String {
    let text = seg.text.as_str();
    if !styled {
        return text.to_string();
    }
    match seg.style {
        Style::Plain => text.to_string(),
        Style::Bold => text.bold().to_string(),
        Style::Italic => text.italic().to_string(),
        Style::Code => text.red().on_grey().to_string(),
        Style::Link => text.blue().underlined().to_string(),
    }
}
