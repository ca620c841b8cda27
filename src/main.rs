use anyhow::{Context, Result};
use bookchunk::{Book, Config, Overrides, TextSplitter, init_logging, save_chunks_to_json};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing::{debug, error, info};

#[derive(Debug, Parser)]
#[command(name = "bookchunk", version)]
#[command(about = "Split a directory of markdown chapters into ordered chunks")]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(long, default_value = bookchunk::config::DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Override max chunk size
    #[arg(long)]
    max_chunk_size: Option<usize>,

    /// Override input directory
    #[arg(long)]
    input_directory: Option<PathBuf>,

    /// Override book title
    #[arg(long)]
    book_title: Option<String>,

    /// Override output file
    #[arg(long)]
    output_file: Option<PathBuf>,

    /// Override log level
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            max_chunk_size: self.max_chunk_size,
            input_directory: self.input_directory.clone(),
            book_title: self.book_title.clone(),
            output_file: self.output_file.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::resolve(&cli.config, cli.overrides()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = init_logging(&config) {
        eprintln!("error: {err:#}");
        return ExitCode::FAILURE;
    }

    info!("Starting book processing");
    debug!(?config, "Using configuration");

    match run(&config) {
        Ok(()) => {
            info!("Book processing completed successfully");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("An error occurred during processing: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<()> {
    let start_time = Instant::now();

    let splitter = TextSplitter::new(config.max_chunk_size);
    let book = Book::new(&config.input_directory, &config.book_title, splitter);
    info!(
        book = book.title(),
        directory = %book.directory().display(),
        max_chunk_size = config.max_chunk_size,
        "Processing book"
    );

    let output = book
        .process()
        .with_context(|| format!("Failed to process book '{}'", config.book_title))?;

    for skipped in &output.skipped {
        debug!(file = %skipped.path.display(), reason = %skipped.reason, "Skipped file");
    }

    save_chunks_to_json(&output.chunks, &config.output_file)
        .context("Failed to save chunks")?;

    info!(
        chunks = output.chunks.len(),
        skipped = output.skipped.len(),
        elapsed_secs = start_time.elapsed().as_secs_f64(),
        "Run finished"
    );

    Ok(())
}
