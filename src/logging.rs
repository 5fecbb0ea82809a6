//! Logging setup on top of `tracing-subscriber`.
//!
//! The interactive browser owns the terminal, so it logs to a file.
//! Headless commands log to stderr. `FILM_INDONESIA_LOG` overrides the
//! filter with the usual `EnvFilter` directive syntax.
//!
//! A log file that cannot be opened is not fatal: one warning goes to
//! stderr before the terminal switches to raw mode, and records are dropped.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

use crate::error::{AppError, Result};
use crate::types::{LogConfig, LogTarget};

/// Environment variable holding a filter directive.
pub const LOG_ENV: &str = "FILM_INDONESIA_LOG";

/// `<cache dir>/film-indonesia/film-indonesia.log`, or the temp dir when the
/// platform has no cache dir.
pub fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("film-indonesia")
        .join("film-indonesia.log")
}

/// Default filter level when the environment sets none.
pub fn default_level(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

/// Open `path` for appending, creating parent directories.
pub fn open_log_file(path: &Path) -> Result<File> {
    let open = || -> io::Result<File> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        OpenOptions::new().create(true).append(true).open(path)
    };
    open().map_err(|source| AppError::LogFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Writer for a file target, or a sink when the file cannot be opened.
fn file_writer(path: &Path) -> BoxMakeWriter {
    match open_log_file(path) {
        Ok(file) => BoxMakeWriter::new(Mutex::new(file)),
        Err(err) => {
            eprintln!("Warning: {}; logging disabled", err);
            BoxMakeWriter::new(io::sink)
        }
    }
}

/// Install the global subscriber. Fails only if one is already installed.
pub fn init(config: &LogConfig) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_level(config.verbose)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let installed = match &config.target {
        LogTarget::Stderr => builder.with_writer(io::stderr).try_init(),
        LogTarget::File(path) => builder
            .with_ansi(false)
            .with_writer(file_writer(path))
            .try_init(),
    };

    installed.map_err(|e| AppError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_log_path_names_the_app() {
        let path = default_log_path();
        assert!(path.ends_with("film-indonesia/film-indonesia.log"));
    }

    #[test]
    fn verbose_raises_level() {
        assert_eq!(default_level(false), "warn");
        assert_eq!(default_level(true), "debug");
    }

    #[test]
    fn open_log_file_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("app.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn open_log_file_appends() {
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        writeln!(open_log_file(&path).unwrap(), "first").unwrap();
        writeln!(open_log_file(&path).unwrap(), "second").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first\nsecond\n");
    }

    /// A regular file standing where the log directory should be.
    fn blocked_log_path() -> (tempfile::NamedTempFile, PathBuf) {
        let blocker = tempfile::NamedTempFile::new().unwrap();
        let path = blocker.path().join("app.log");
        (blocker, path)
    }

    #[test]
    fn open_log_file_error_names_the_path() {
        let (_blocker, path) = blocked_log_path();
        match open_log_file(&path) {
            Err(err @ AppError::LogFile { .. }) => {
                assert!(err.to_string().contains(&path.display().to_string()));
            }
            other => panic!("expected LogFile error, got {:?}", other),
        }
    }

    #[test]
    fn unwritable_log_file_falls_back_to_a_sink() {
        use std::io::Write;
        use tracing_subscriber::fmt::MakeWriter;

        let (_blocker, path) = blocked_log_path();
        let writer = file_writer(&path);
        writer.make_writer().write_all(b"dropped\n").unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn init_survives_an_unwritable_log_file() {
        let (_blocker, path) = blocked_log_path();
        let config = LogConfig {
            target: LogTarget::File(path),
            verbose: false,
        };
        init(&config).unwrap();
        tracing::warn!("goes nowhere");
    }
}
