//! Command-line arguments for the ticker client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use ticker_common::feed::{DEFAULT_FEED_URL, DEFAULT_INTERVAL_SECS, DEFAULT_TIMEOUT_SECS};
use ticker_common::{FeedFormat, TickerError};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about = "Live-updating stock ticker for the terminal", long_about = None)]
pub struct Args {
    /// Path to a text file with the symbols to watch.
    /// Symbols may be separated by commas, spaces, or new lines.
    #[clap(long, default_value = "stocks.txt")]
    pub symbols: String,

    /// Seconds between two refreshes.
    #[clap(long, default_value_t = DEFAULT_INTERVAL_SECS)]
    pub interval: u64,

    /// Quote feed endpoint.
    #[clap(long, default_value = DEFAULT_FEED_URL)]
    pub url: String,

    /// Payload format served by the feed.
    #[clap(long, value_enum, default_value_t = FeedFormat::Csv)]
    pub format: FeedFormat,

    /// HTTP timeout in seconds.
    #[clap(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Show trade dates with a two-digit year (1/1/2024 -> 1/1/24).
    #[clap(long)]
    pub short_year: bool,

    /// Keep the last frame and skip the tick when the feed fails, instead of exiting.
    #[clap(long)]
    pub skip_failed_ticks: bool,

    /// Paint a single frame and exit.
    #[clap(long)]
    pub once: bool,

    /// Write logs to this file instead of stderr.
    #[clap(long)]
    pub log_file: Option<String>,
}

impl Args {
    /// Refresh interval; rejects zero.
    pub fn interval(&self) -> Result<Duration, TickerError> {
        if self.interval == 0 {
            return Err(TickerError::Config("--interval must be at least 1 second".to_string()));
        }
        Ok(Duration::from_secs(self.interval))
    }

    /// HTTP timeout; rejects zero.
    pub fn timeout(&self) -> Result<Duration, TickerError> {
        if self.timeout == 0 {
            return Err(TickerError::Config("--timeout must be at least 1 second".to_string()));
        }
        Ok(Duration::from_secs(self.timeout))
    }

    /// Symbols file path with surrounding whitespace and quotes removed.
    pub fn symbols_path(&self) -> PathBuf {
        normalize_path(&self.symbols)
    }

    /// Log file path, normalized like [`Args::symbols_path`].
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.as_deref().map(normalize_path)
    }
}

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}
