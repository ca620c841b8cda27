mod chunk;
mod splitter;


pub use chunk::{Chunk, ChunkOrigin};
pub use splitter::TextSplitter;

/// Position of a chunk within a processing run
pub type ChunkOrder = u64;

/// Maximum characters per chunk when none is configured
pub const DEFAULT_MAX_CHUNK_SIZE: usize = 1000;

/// Separator between paragraphs inside a content block
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Sentence boundary used by the fallback splitter
pub const SENTENCE_SEPARATOR: &str = ". ";
