use super::{
    Chunk, ChunkOrder, ChunkOrigin, DEFAULT_MAX_CHUNK_SIZE, PARAGRAPH_SEPARATOR,
    SENTENCE_SEPARATOR,
};
use crate::parser::{ContentBlock, MarkdownParser};
use tracing::debug;

/// Greedy, size-bounded splitter for markdown text
///
/// Content blocks are packed paragraph by paragraph. A paragraph that is too
/// large on its own falls back to sentence packing. A single sentence larger
/// than the limit is kept whole, so the limit is a target rather than a
/// guarantee.
#[derive(Debug, Clone)]
pub struct TextSplitter {
    max_chunk_size: usize,
}

impl TextSplitter {
    /// Create a splitter with the given maximum chunk size in characters.
    ///
    /// A size of zero is raised to one.
    pub fn new(max_chunk_size: usize) -> Self {
        Self {
            max_chunk_size: max_chunk_size.max(1),
        }
    }

    pub fn max_chunk_size(&self) -> usize {
        self.max_chunk_size
    }

    /// Parse a whole markdown document and chunk every content block.
    ///
    /// Returns the chunks and the next free order value.
    pub fn split_document(
        &self,
        text: &str,
        origin: ChunkOrigin<'_>,
        start_order: ChunkOrder,
    ) -> (Vec<Chunk>, ChunkOrder) {
        let mut chunks = Vec::new();
        let mut next_order = start_order;

        for block in MarkdownParser.blocks(text) {
            let (block_chunks, after) = self.split_block(&block, origin, next_order);
            chunks.extend(block_chunks);
            next_order = after;
        }

        (chunks, next_order)
    }

    /// Chunk one content block, numbering chunks from `start_order`.
    ///
    /// Returns the chunks and the next free order value.
    pub fn split_block(
        &self,
        block: &ContentBlock,
        origin: ChunkOrigin<'_>,
        start_order: ChunkOrder,
    ) -> (Vec<Chunk>, ChunkOrder) {
        let mut writer = ChunkWriter::new(origin, &block.headings, start_order);
        let mut acc = Accumulator::default();

        for paragraph in block.text.split(PARAGRAPH_SEPARATOR) {
            if paragraph.trim().is_empty() {
                continue;
            }

            let paragraph_len = char_len(paragraph);

            // Adding this paragraph would overflow the current chunk
            if acc.len() + paragraph_len > self.max_chunk_size && !acc.is_empty() {
                writer.flush(&mut acc);
            }

            if paragraph_len > self.max_chunk_size {
                writer.flush(&mut acc);
                self.split_paragraph(paragraph, &mut writer);
            } else {
                acc.push(paragraph, PARAGRAPH_SEPARATOR);
            }
        }

        writer.flush(&mut acc);
        writer.finish()
    }

    /// Sentence-level fallback for a paragraph larger than the limit
    fn split_paragraph(&self, paragraph: &str, writer: &mut ChunkWriter<'_>) {
        let mut acc = Accumulator::default();

        // Each piece keeps its trailing ". " so nothing is lost on rejoin
        for sentence in paragraph.split_inclusive(SENTENCE_SEPARATOR) {
            let sentence_len = char_len(sentence);

            if acc.len() + sentence_len > self.max_chunk_size && !acc.is_empty() {
                writer.flush(&mut acc);
            }

            if sentence_len > self.max_chunk_size {
                debug!(
                    chapter = writer.origin.chapter,
                    chars = sentence_len,
                    max = self.max_chunk_size,
                    "Sentence exceeds max chunk size, emitting it whole"
                );
            }

            acc.push(sentence, "");
        }

        writer.flush(&mut acc);
    }
}

impl Default for TextSplitter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CHUNK_SIZE)
    }
}

/// Text collected for the chunk under construction
#[derive(Debug, Default)]
struct Accumulator {
    text: String,
    /// Length of `text` in characters
    chars: usize,
}

impl Accumulator {
    fn push(&mut self, piece: &str, separator: &str) {
        self.text.push_str(piece);
        self.text.push_str(separator);
        self.chars += char_len(piece) + char_len(separator);
    }

    fn len(&self) -> usize {
        self.chars
    }

    fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn clear(&mut self) {
        self.text.clear();
        self.chars = 0;
    }
}

/// Turns accumulated text into numbered chunks
struct ChunkWriter<'a> {
    origin: ChunkOrigin<'a>,
    headings: &'a [String],
    next_order: ChunkOrder,
    chunks: Vec<Chunk>,
}

impl<'a> ChunkWriter<'a> {
    fn new(origin: ChunkOrigin<'a>, headings: &'a [String], start_order: ChunkOrder) -> Self {
        Self {
            origin,
            headings,
            next_order: start_order,
            chunks: Vec::new(),
        }
    }

    /// Emit the accumulated text as a chunk unless it is blank, then reset it
    fn flush(&mut self, acc: &mut Accumulator) {
        let content = acc.text.trim();
        if !content.is_empty() {
            self.chunks.push(Chunk {
                content: content.to_string(),
                book: self.origin.book.to_string(),
                chapter: self.origin.chapter.to_string(),
                headings: self.headings.to_vec(),
                order: self.next_order,
            });
            self.next_order += 1;
        }
        acc.clear();
    }

    fn finish(self) -> (Vec<Chunk>, ChunkOrder) {
        (self.chunks, self.next_order)
    }
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}
