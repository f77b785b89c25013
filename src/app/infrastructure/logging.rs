//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! The binary calls [`init_logging`] once at startup. The filter is read from
//! the `LINGUAOPS_LOG` environment variable (same syntax as `RUST_LOG`) and
//! falls back to the configured level for this crate, `warn` for everything
//! else.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_ENV_VAR: &str = "LINGUAOPS_LOG";

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: Level,
    pub with_ansi: bool,
    /// Append to this file instead of writing to stderr.
    pub log_file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            with_ansi: true,
            log_file: None,
        }
    }
}

impl LogConfig {
    /// Debug builds log at debug level, release builds at info.
    pub fn for_build() -> Self {
        let level = if cfg!(debug_assertions) {
            Level::DEBUG
        } else {
            Level::INFO
        };
        Self {
            level,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.with_ansi = path.is_none();
        self.log_file = path;
        self
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| {
            let level = self.level.as_str().to_lowercase();
            EnvFilter::new(format!("warn,lingua_ops={level},LinguaOps={level}"))
        })
    }
}

/// Install the global subscriber. A second call is a no-op.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    let filter = config.env_filter();

    let result = match &config.log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let file = Arc::new(Mutex::new(file));
            let layer = fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(move || SharedFile(Arc::clone(&file)));
            tracing_subscriber::registry().with(filter).with(layer).try_init()
        }
        None => {
            let layer = fmt::layer()
                .with_ansi(config.with_ansi)
                .with_target(false)
                .with_writer(io::stderr);
            tracing_subscriber::registry().with(filter).with(layer).try_init()
        }
    };

    // Already installed (tests, embedding). Keep the existing subscriber.
    if result.is_err() {
        tracing::debug!("tracing subscriber already initialized");
    }
    Ok(())
}

struct SharedFile(Arc<Mutex<std::fs::File>>);

impl io::Write for SharedFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .0
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        guard.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut guard = self
            .0
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        guard.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LogConfig::default();
        assert_eq!(config.level, Level::INFO);
        assert!(config.with_ansi);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_log_file_disables_ansi() {
        let config = LogConfig::default().with_log_file(Some(PathBuf::from("app.log")));
        assert!(!config.with_ansi);
        assert_eq!(config.log_file, Some(PathBuf::from("app.log")));
    }

    #[test]
    fn test_init_twice_is_harmless() {
        let dir = tempfile::tempdir().unwrap();
        let config = LogConfig::default().with_log_file(Some(dir.path().join("logs").join("app.log")));
        assert!(init_logging(&config).is_ok());
        assert!(init_logging(&LogConfig::default()).is_ok());
        assert!(dir.path().join("logs").join("app.log").exists());
    }
}
