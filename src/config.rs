use crate::chunker::DEFAULT_MAX_CHUNK_SIZE;
use crate::error::ChunkerError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the configuration file
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// Settings for one book run, loaded from YAML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Target maximum characters per chunk
    #[serde(default = "default_max_chunk_size")]
    pub max_chunk_size: usize,
    /// Directory holding the book's markdown chapters
    pub input_directory: PathBuf,
    pub book_title: String,
    /// Where the JSON array of chunks is written
    pub output_file: PathBuf,
    /// Optional log file, in addition to the console
    #[serde(default)]
    pub log_file: Option<PathBuf>,
    /// Filter directive, e.g. `info` or `bookchunk=debug`
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_rotation: LogRotation,
    /// Number of rotated log files to keep; all when unset
    #[serde(default)]
    pub log_max_files: Option<usize>,
}

/// How often the log file rolls over
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    #[default]
    Never,
    Minutely,
    Hourly,
    Daily,
}

/// Command-line values that replace what the config file says
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub max_chunk_size: Option<usize>,
    pub input_directory: Option<PathBuf>,
    pub book_title: Option<String>,
    pub output_file: Option<PathBuf>,
    pub log_level: Option<String>,
}

fn default_max_chunk_size() -> usize {
    DEFAULT_MAX_CHUNK_SIZE
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load the config file, apply overrides, and validate the result
    pub fn resolve(path: &Path, overrides: Overrides) -> Result<Self, ChunkerError> {
        let mut config = Self::load(path)?;
        config.apply(overrides);
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a YAML config file
    pub fn load(path: &Path) -> Result<Self, ChunkerError> {
        let text = fs::read_to_string(path).map_err(|e| {
            ChunkerError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;

        Self::from_yaml(&text)
            .map_err(|e| ChunkerError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    pub fn apply(&mut self, overrides: Overrides) {
        if let Some(size) = overrides.max_chunk_size {
            self.max_chunk_size = size;
        }
        if let Some(dir) = overrides.input_directory {
            self.input_directory = dir;
        }
        if let Some(title) = overrides.book_title {
            self.book_title = title;
        }
        if let Some(file) = overrides.output_file {
            self.output_file = file;
        }
        if let Some(level) = overrides.log_level {
            self.log_level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ChunkerError> {
        if self.max_chunk_size == 0 {
            return Err(ChunkerError::Config(
                "max_chunk_size must be a positive integer".to_string(),
            ));
        }

        if self.book_title.trim().is_empty() {
            return Err(ChunkerError::Config("book_title must not be empty".to_string()));
        }

        if self.output_file.as_os_str().is_empty() {
            return Err(ChunkerError::Config("output_file must not be empty".to_string()));
        }

        Ok(())
    }
}
