// Public API exports
pub mod book;
pub mod chunker;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod parser;

// Re-export main types for convenience
pub use book::{Book, BookOutput, SkippedFile, chapter_name, list_markdown_files};

pub use chunker::{Chunk, ChunkOrder, ChunkOrigin, DEFAULT_MAX_CHUNK_SIZE, TextSplitter};

pub use config::{Config, LogRotation, Overrides};

pub use error::ChunkerError;

pub use logging::init_logging;

pub use output::save_chunks_to_json;

pub use parser::{ContentBlock, ContentBlocks, HeadingPath, MarkdownParser};
