use super::{ContentBlock, HeadingPath, HEADING_MARKER};
use std::iter::FusedIterator;
use std::str::Lines;

/// Heading-aware splitter of markdown text into content blocks
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownParser;

impl MarkdownParser {
    /// Lazily walk `text`, yielding one block per run of body text
    pub fn blocks<'a>(&self, text: &'a str) -> ContentBlocks<'a> {
        ContentBlocks::new(text)
    }
}

/// Iterator over the content blocks of one document, in document order
pub struct ContentBlocks<'a> {
    lines: Lines<'a>,
    headings: HeadingPath,
    pending: Vec<&'a str>,
    /// A blank line was seen since the last pending line
    paragraph_break: bool,
}

impl<'a> ContentBlocks<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines(),
            headings: HeadingPath::new(),
            pending: Vec::new(),
            paragraph_break: false,
        }
    }

    /// The heading path as it stands at the current position
    pub fn headings(&self) -> &HeadingPath {
        &self.headings
    }

    fn take_pending(&mut self) -> Option<ContentBlock> {
        self.paragraph_break = false;
        if self.pending.is_empty() {
            return None;
        }

        let text = self.pending.join("\n");
        self.pending.clear();

        Some(ContentBlock {
            headings: self.headings.to_vec(),
            text,
        })
    }
}

impl Iterator for ContentBlocks<'_> {
    type Item = ContentBlock;

    fn next(&mut self) -> Option<ContentBlock> {
        while let Some(line) = self.lines.next() {
            if let Some((level, text)) = parse_heading(line) {
                // The finished block belongs to the headings above it
                let block = self.take_pending();
                self.headings.enter(level, text);
                if block.is_some() {
                    return block;
                }
            } else if line.trim().is_empty() {
                if !self.pending.is_empty() {
                    self.paragraph_break = true;
                }
            } else {
                if self.paragraph_break {
                    self.pending.push("");
                    self.paragraph_break = false;
                }
                self.pending.push(line);
            }
        }

        self.take_pending()
    }
}

impl FusedIterator for ContentBlocks<'_> {}

/// Split a heading line into its level and text
fn parse_heading(line: &str) -> Option<(usize, &str)> {
    let level = line.chars().take_while(|&c| c == HEADING_MARKER).count();
    if level == 0 {
        return None;
    }

    // Markers are stripped from both ends, then surrounding whitespace
    Some((level, line.trim_matches(HEADING_MARKER).trim()))
}

#[cfg(test)]
mod heading_tests {
    use super::*;

    #[test]
    fn test_plain_line_is_not_heading() {
        assert_eq!(parse_heading("Hello #world"), None);
        assert_eq!(parse_heading(""), None);
        assert_eq!(parse_heading(" # indented"), None);
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(parse_heading("# Intro"), Some((1, "Intro")));
        assert_eq!(parse_heading("### Deep"), Some((3, "Deep")));
        assert_eq!(parse_heading("##NoSpace"), Some((2, "NoSpace")));
    }

    #[test]
    fn test_trailing_markers_stripped() {
        assert_eq!(parse_heading("## Title ##"), Some((2, "Title")));
        assert_eq!(parse_heading("# Title##"), Some((1, "Title")));
        assert_eq!(parse_heading("# Using C#"), Some((1, "Using C")));
        assert_eq!(parse_heading("# ###"), Some((1, "")));
        assert_eq!(parse_heading("#"), Some((1, "")));
    }
}
