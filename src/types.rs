//! Shared configuration and output types.

use std::path::PathBuf;

// ============================================================================
// OUTPUT
// ============================================================================

/// Output format for headless commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Where log records go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error. Only safe when no TUI owns the terminal.
    Stderr,
    /// Append to a file.
    File(PathBuf),
}

/// Logging settings resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub target: LogTarget,
    /// Raise the default filter from `warn` to `debug`.
    pub verbose: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            target: LogTarget::Stderr,
            verbose: false,
        }
    }
}

/// Settings for the interactive browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseConfig {
    pub log: LogConfig,
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            log: LogConfig {
                target: LogTarget::File(crate::logging::default_log_path()),
                verbose: false,
            },
        }
    }
}
