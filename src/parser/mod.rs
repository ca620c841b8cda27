mod block;
mod markdown;

#[cfg(test)]
mod tests;

pub use block::{ContentBlock, HeadingPath};
pub use markdown::{ContentBlocks, MarkdownParser};

/// Character that opens an ATX heading line
pub const HEADING_MARKER: char = '#';
