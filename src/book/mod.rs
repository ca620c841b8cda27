
use crate::chunker::{Chunk, ChunkOrder, ChunkOrigin, TextSplitter};
use crate::error::ChunkerError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

/// Extension of the files that make up a book
pub const MARKDOWN_EXTENSION: &str = "md";

/// A directory of markdown chapters sharing one title
#[derive(Debug, Clone)]
pub struct Book {
    directory: PathBuf,
    title: String,
    splitter: TextSplitter,
}

/// Everything a book run produced
#[derive(Debug, Default)]
pub struct BookOutput {
    /// All chunks, in file-then-position order
    pub chunks: Vec<Chunk>,
    /// Files that could not be processed
    pub skipped: Vec<SkippedFile>,
}

/// A file left out of the run and why
#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

impl Book {
    pub fn new(
        directory: impl Into<PathBuf>,
        title: impl Into<String>,
        splitter: TextSplitter,
    ) -> Self {
        Self {
            directory: directory.into(),
            title: title.into(),
            splitter,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Chunk every markdown file of the book in file name order.
    ///
    /// A file that fails is logged and skipped; failing to list the
    /// directory aborts the run.
    pub fn process(&self) -> Result<BookOutput, ChunkerError> {
        let files = list_markdown_files(&self.directory)?;
        let mut output = BookOutput::default();
        let mut next_order: ChunkOrder = 0;

        for path in files {
            match self.process_file(&path, next_order) {
                Ok((chunks, after)) => {
                    next_order = after;
                    output.chunks.extend(chunks);
                }
                Err(err) if err.is_recoverable() => {
                    warn!(
                        file = %path.display(),
                        error = %err,
                        "Skipping file due to processing error"
                    );
                    output.skipped.push(SkippedFile {
                        path,
                        reason: err.to_string(),
                    });
                }
                Err(err) => return Err(err),
            }
        }

        info!(
            book = %self.title,
            chunks = output.chunks.len(),
            skipped = output.skipped.len(),
            "Processed book"
        );

        Ok(output)
    }

    /// Read and chunk one chapter file, numbering chunks from `start_order`.
    ///
    /// Returns the chunks and the next free order value.
    pub fn process_file(
        &self,
        path: &Path,
        start_order: ChunkOrder,
    ) -> Result<(Vec<Chunk>, ChunkOrder), ChunkerError> {
        let text = fs::read_to_string(path).map_err(|source| ChunkerError::FileProcessing {
            path: path.to_path_buf(),
            source,
        })?;

        let chapter = chapter_name(path);
        let origin = ChunkOrigin::new(&self.title, &chapter);
        let (chunks, next_order) = self.splitter.split_document(&text, origin, start_order);

        info!(
            file = %path.display(),
            chunks = chunks.len(),
            "Processed file"
        );

        Ok((chunks, next_order))
    }
}

/// Chapter name for a source file: its name without the extension
pub fn chapter_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// List the markdown files directly inside `directory`, sorted by file name
pub fn list_markdown_files(directory: &Path) -> Result<Vec<PathBuf>, ChunkerError> {
    if !directory.is_dir() {
        return Err(ChunkerError::DirectoryAccess {
            path: directory.to_path_buf(),
            reason: "not a directory or does not exist".to_string(),
        });
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            // Depth 0 means the directory itself could not be read
            Err(err) if err.depth() == 0 => {
                return Err(ChunkerError::DirectoryAccess {
                    path: directory.to_path_buf(),
                    reason: err.to_string(),
                });
            }
            Err(err) => {
                warn!(error = %err, "Skipping unreadable directory entry");
                continue;
            }
        };

        let path = entry.path();
        let is_markdown = path
            .extension()
            .is_some_and(|ext| ext == MARKDOWN_EXTENSION);

        if entry.file_type().is_file() && is_markdown {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}
