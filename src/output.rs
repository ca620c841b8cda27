use crate::chunker::Chunk;
use crate::error::ChunkerError;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Write chunks to `output_file` as a pretty-printed JSON array.
///
/// Missing parent directories are created.
pub fn save_chunks_to_json(chunks: &[Chunk], output_file: &Path) -> Result<(), ChunkerError> {
    write_json(chunks, output_file).map_err(|e| ChunkerError::OutputWrite {
        path: output_file.to_path_buf(),
        reason: e.to_string(),
    })?;

    info!(
        chunks = chunks.len(),
        file = %output_file.display(),
        "Saved chunks"
    );
    Ok(())
}

fn write_json(chunks: &[Chunk], output_file: &Path) -> io::Result<()> {
    if let Some(parent) = output_file.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut writer = BufWriter::new(File::create(output_file)?);
    serde_json::to_writer_pretty(&mut writer, chunks)?;
    writer.write_all(b"\n")?;
    writer.flush()
}
