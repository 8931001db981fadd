//! Line scanner turning a post body into preview blocks.

use serde::Serialize;

use super::inline::{Segment, tokenize};
use super::line::{FENCE, LineClass, classify_line};

/// One block of preview output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PreviewBlock {
    Heading { level: u8, segments: Vec<Segment> },
    Quote { segments: Vec<Segment> },
    CodeBlock { lang: Option<String>, code: String },
    Blank,
    Paragraph { segments: Vec<Segment> },
}

#[derive(Debug, Default)]
enum ScanState {
    #[default]
    Normal,
    InFence { lang: Option<String>, code: String },
}

/// Incremental scanner that threads fence state from line to line.
#[derive(Debug, Default)]
pub struct LineScanner {
    state: ScanState,
    blocks: Vec<PreviewBlock>,
}

impl LineScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next line (without its newline).
    pub fn push_line(&mut self, line: &str) {
        self.state = match std::mem::take(&mut self.state) {
            ScanState::InFence { lang, mut code } => {
                if line.starts_with(FENCE) {
                    self.blocks.push(PreviewBlock::CodeBlock { lang, code });
                    ScanState::Normal
                } else {
                    code.push_str(line);
                    code.push('\n');
                    ScanState::InFence { lang, code }
                }
            }
            ScanState::Normal => self.push_normal(line),
        };
    }

    fn push_normal(&mut self, line: &str) -> ScanState {
        let block = match classify_line(line) {
            LineClass::FenceBoundary { lang } => {
                return ScanState::InFence { lang, code: String::new() };
            }
            LineClass::Heading1(text) => heading(1, &text),
            LineClass::Heading2(text) => heading(2, &text),
            LineClass::Heading3(text) => heading(3, &text),
            LineClass::Blockquote(text) => PreviewBlock::Quote { segments: tokenize(&text) },
            LineClass::Blank => PreviewBlock::Blank,
            LineClass::Plain(text) => PreviewBlock::Paragraph { segments: tokenize(&text) },
        };
        self.blocks.push(block);
        ScanState::Normal
    }

    /// Finish scanning. An unterminated fence still yields its code.
    pub fn finish(mut self) -> Vec<PreviewBlock> {
        if let ScanState::InFence { lang, code } = self.state {
            tracing::debug!("code fence left open at end of body");
            self.blocks.push(PreviewBlock::CodeBlock { lang, code });
        }
        self.blocks
    }
}

fn heading(level: u8, text: &str) -> PreviewBlock {
    PreviewBlock::Heading { level, segments: tokenize(text) }
}

/// Scan a whole body into preview blocks.
pub fn scan_lines(body: &str) -> Vec<PreviewBlock> {
    let mut scanner = LineScanner::new();
    for line in body.lines() {
        scanner.push_line(line);
    }
    scanner.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::inline::Style;

    #[test]
    fn scans_headings_quotes_and_paragraphs() {
        let blocks = scan_lines("# Top\n\n> said *so*\nplain `x`");
        assert_eq!(
            blocks,
            vec![
                PreviewBlock::Heading { level: 1, segments: vec![Segment::plain("Top")] },
                PreviewBlock::Blank,
                PreviewBlock::Quote {
                    segments: vec![
                        Segment::plain("said "),
                        Segment::styled("so", Style::Italic)
                    ]
                },
                PreviewBlock::Paragraph {
                    segments: vec![Segment::plain("plain "), Segment::styled("x", Style::Code)]
                },
            ]
        );
    }

    #[test]
    fn fence_content_is_verbatim() {
        let body = "```python\ndef f():\n    return **x**  \n```\nafter";
        assert_eq!(
            scan_lines(body),
            vec![
                PreviewBlock::CodeBlock {
                    lang: Some("python".into()),
                    code: "def f():\n    return **x**  \n".into()
                },
                PreviewBlock::Paragraph { segments: vec![Segment::plain("after")] },
            ]
        );
    }

    #[test]
    fn fence_lines_are_not_classified() {
        let blocks = scan_lines("```\n# not a heading\n\n> nor a quote\n```");
        assert_eq!(
            blocks,
            vec![PreviewBlock::CodeBlock {
                lang: None,
                code: "# not a heading\n\n> nor a quote\n".into()
            }]
        );
    }

    #[test]
    fn unterminated_fence_keeps_code() {
        let blocks = scan_lines("intro\n```\nlet a = 1;");
        assert_eq!(
            blocks,
            vec![
                PreviewBlock::Paragraph { segments: vec![Segment::plain("intro")] },
                PreviewBlock::CodeBlock { lang: None, code: "let a = 1;\n".into() },
            ]
        );
    }

    #[test]
    fn headings_and_quotes_are_both_tokenized() {
        let blocks = scan_lines("## **Bold** title\n> **q**");
        assert_eq!(
            blocks,
            vec![
                PreviewBlock::Heading {
                    level: 2,
                    segments: vec![
                        Segment::styled("Bold", Style::Bold),
                        Segment::plain(" title")
                    ]
                },
                PreviewBlock::Quote { segments: vec![Segment::styled("q", Style::Bold)] },
            ]
        );
    }

    #[test]
    fn closing_fence_may_carry_trailing_text() {
        let blocks = scan_lines("```\ncode\n```end\nnext");
        assert_eq!(blocks.len(), 2);
        assert!(matches!(blocks[1], PreviewBlock::Paragraph { .. }));
    }
}
