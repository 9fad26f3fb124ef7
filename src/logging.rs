//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Headless commands log to stderr. The TUI owns the terminal, so while it
//! runs logs go to the `--log-file` path or nowhere. `RUST_LOG` overrides the
//! level picked from `-v` flags.
//!
//! # Log Levels
//!
//! - `warn`: screens that fail to open, config problems (default)
//! - `info`: startup, screen mount/unmount
//! - `debug`: key actions, rejected input, filter recomputations
//! - `trace`: everything else

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Where formatted log lines are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// Appended to this file, without ANSI colors.
    File(PathBuf),
    /// Dropped.
    Discard,
}

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log level filter used when `RUST_LOG` is unset.
    pub level: Level,
    pub target: LogTarget,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            target: LogTarget::Stderr,
        }
    }
}

impl LogConfig {
    /// Map `-v` occurrences to a level: 0 warn, 1 info, 2 debug, 3+ trace.
    pub fn from_verbosity(verbosity: u8) -> Self {
        let level = match verbosity {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self {
            level,
            target: LogTarget::Stderr,
        }
    }

    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.target = LogTarget::File(path);
        }
        self
    }

    /// Keep log lines off the terminal while the TUI draws on it.
    ///
    /// A log file still receives everything; stderr output is dropped.
    pub fn for_tui(mut self) -> Self {
        if self.target == LogTarget::Stderr {
            self.target = LogTarget::Discard;
        }
        self
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.level.as_str().to_lowercase()))
    }
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns an IO error if the log file cannot be opened.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_target(true);

    let result = match &config.target {
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        LogTarget::Stderr => builder.with_writer(io::stderr).try_init(),
        LogTarget::Discard => builder.with_ansi(false).with_writer(io::sink).try_init(),
    };

    // A subscriber set earlier (tests, embedding) wins
    if let Err(e) = result {
        tracing::debug!("logging already initialized: {}", e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(LogConfig::from_verbosity(0).level, Level::WARN);
        assert_eq!(LogConfig::from_verbosity(1).level, Level::INFO);
        assert_eq!(LogConfig::from_verbosity(2).level, Level::DEBUG);
        assert_eq!(LogConfig::from_verbosity(9).level, Level::TRACE);
    }

    #[test]
    fn test_tui_never_logs_to_terminal() {
        let config = LogConfig::from_verbosity(3).for_tui();
        assert_eq!(config.target, LogTarget::Discard);

        let path = PathBuf::from("showcase.log");
        let config = LogConfig::from_verbosity(0)
            .with_log_file(Some(path.clone()))
            .for_tui();
        assert_eq!(config.target, LogTarget::File(path));
    }

    #[test]
    fn test_headless_logs_to_stderr() {
        let config = LogConfig::from_verbosity(0).with_log_file(None);
        assert_eq!(config.target, LogTarget::Stderr);
    }

    #[test]
    fn test_log_file_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("showcase.log");
        let config = LogConfig::from_verbosity(1).with_log_file(Some(path.clone()));
        init_logging(&config).unwrap();
        assert!(path.exists());
    }
}
