use crate::config::{Config, LogRotation};
use anyhow::{Context, Result};
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

impl From<LogRotation> for Rotation {
    fn from(rotation: LogRotation) -> Self {
        match rotation {
            LogRotation::Never => Rotation::NEVER,
            LogRotation::Minutely => Rotation::MINUTELY,
            LogRotation::Hourly => Rotation::HOURLY,
            LogRotation::Daily => Rotation::DAILY,
        }
    }
}

/// Install the global subscriber: console on stderr, plus a plain-text file
/// layer when `log_file` is configured.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_logging(config: &Config) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_level)
            .with_context(|| format!("Invalid log level: {}", config.log_level))?,
    };

    let file_layer = match &config.log_file {
        Some(path) => {
            let appender = rolling_appender(path, config.log_rotation, config.log_max_files)?;
            Some(fmt::layer().with_writer(appender).with_ansi(false))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}

fn rolling_appender(
    path: &Path,
    rotation: LogRotation,
    max_files: Option<usize>,
) -> Result<RollingFileAppender> {
    let directory = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("Log file has no file name: {}", path.display()))?;

    let mut builder = RollingFileAppender::builder()
        .rotation(rotation.into())
        .filename_prefix(file_name.to_string_lossy());
    if let Some(max) = max_files {
        builder = builder.max_log_files(max);
    }

    builder
        .build(directory)
        .with_context(|| format!("Failed to open log file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_mapping() {
        assert_eq!(Rotation::from(LogRotation::Never), Rotation::NEVER);
        assert_eq!(Rotation::from(LogRotation::Daily), Rotation::DAILY);
        assert_eq!(Rotation::from(LogRotation::Hourly), Rotation::HOURLY);
        assert_eq!(Rotation::from(LogRotation::Minutely), Rotation::MINUTELY);
    }

    #[test]
    fn test_appender_created_in_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.log");

        let appender = rolling_appender(&path, LogRotation::Never, Some(3));

        assert!(appender.is_ok());
        assert!(path.exists());
    }

    #[test]
    fn test_appender_rejects_path_without_file_name() {
        let result = rolling_appender(Path::new("/"), LogRotation::Never, None);
        assert!(result.is_err());
    }
}
