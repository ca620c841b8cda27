use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChunkerError {
    #[error("Failed to process file {}: {source}", path.display())]
    FileProcessing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to access directory {}: {reason}", path.display())]
    DirectoryAccess { path: PathBuf, reason: String },

    #[error("Unable to save chunks to {}: {reason}", path.display())]
    OutputWrite { path: PathBuf, reason: String },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ChunkerError {
    /// Whether the orchestrator may skip past this error and keep going
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ChunkerError::FileProcessing { .. })
    }
}
