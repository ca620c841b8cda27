use super::ChunkOrder;
use serde::{Deserialize, Serialize};

/// One unit of output text, ready for indexing or embedding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Trimmed, non-empty text
    pub content: String,
    /// Title of the book this chunk belongs to
    pub book: String,
    /// Source file name without its extension
    pub chapter: String,
    /// Heading path above the content, outermost first
    pub headings: Vec<String>,
    /// Run-wide position, strictly increasing
    pub order: ChunkOrder,
}

/// Book and chapter a piece of text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkOrigin<'a> {
    pub book: &'a str,
    pub chapter: &'a str,
}

impl<'a> ChunkOrigin<'a> {
    pub fn new(book: &'a str, chapter: &'a str) -> Self {
        Self { book, chapter }
    }
}
