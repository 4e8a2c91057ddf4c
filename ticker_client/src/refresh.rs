//! Refresh loop: fetch, render and paint on every tick.
//!
//! One tick runs to completion before the next wait starts, so a slow feed delays
//! the following refresh instead of queueing ticks. The wait is multiplexed with a
//! shutdown channel so Ctrl+C is honoured between ticks.
use std::io::Write;
use std::time::Duration;

use chrono::Local;
use crossbeam_channel::{Receiver, after, select};
use log::{debug, info, warn};
use ticker_common::{ErrorKind, Result, Symbol, TickerError};
use ticker_feed::QuoteSource;

use crate::render::{ScreenPainter, Table, ansi};

/// Format of the timestamp line above the table.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// What to do when a tick cannot produce rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Stop the ticker with the error.
    #[default]
    Abort,
    /// Keep the last frame on screen and try again on the next tick.
    /// Terminal write failures still abort.
    SkipTick,
}

impl ErrorPolicy {
    fn skips(self, err: &TickerError) -> bool {
        self == ErrorPolicy::SkipTick && matches!(err.kind(), ErrorKind::Fetch | ErrorKind::Decode)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RefreshOptions {
    pub interval: Duration,
    pub short_year: bool,
    pub policy: ErrorPolicy,
}

/// Result of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// A frame with this many rows was painted.
    Painted(usize),
    /// The feed failed and the policy allowed skipping.
    Skipped,
}

pub struct RefreshLoop<S: QuoteSource> {
    source: S,
    symbols: Vec<Symbol>,
    painter: ScreenPainter,
    options: RefreshOptions,
}

impl<S: QuoteSource> RefreshLoop<S> {
    pub fn new(source: S, symbols: Vec<Symbol>, options: RefreshOptions) -> Self {
        Self {
            source,
            symbols,
            painter: ScreenPainter::new(),
            options,
        }
    }

    /// Runs one fetch, render and paint cycle.
    pub fn tick<W: Write>(&mut self, out: &mut W, timestamp: &str) -> Result<TickOutcome> {
        let rows = match self.source.fetch_rows(&self.symbols) {
            Ok(rows) => rows,
            Err(e) if self.options.policy.skips(&e) => {
                warn!("Skipping refresh: {}", e);
                // the warning may have landed on the terminal
                self.painter.invalidate();
                return Ok(TickOutcome::Skipped);
            }
            Err(e) => return Err(e),
        };

        let table = Table::new(rows);
        if table.is_empty() {
            warn!("Feed returned no rows for {} symbols", self.symbols.len());
            // the warning may have landed on the terminal
            self.painter.invalidate();
        }
        let lines = table.render_aligned(self.options.short_year);
        self.painter.paint(out, timestamp, &lines)?;
        debug!("Painted {} rows at {}", table.len(), timestamp);
        Ok(TickOutcome::Painted(table.len()))
    }

    /// Ticks immediately, then once per interval until `shutdown` fires.
    pub fn run<W: Write>(&mut self, out: &mut W, shutdown: &Receiver<()>) -> Result<()> {
        info!(
            "Refreshing {} symbols every {:?}",
            self.symbols.len(),
            self.options.interval
        );
        loop {
            self.tick(out, &now())?;
            select! {
                recv(shutdown) -> _ => break,
                recv(after(self.options.interval)) -> _ => {},
            }
        }

        info!("Refresh loop stopped");
        reset_attributes(out)
    }

    /// Paints a single frame.
    pub fn run_once<W: Write>(&mut self, out: &mut W) -> Result<()> {
        match self.tick(out, &now())? {
            TickOutcome::Painted(_) => reset_attributes(out),
            TickOutcome::Skipped => Err(TickerError::Fetch("no quotes received".to_string())),
        }
    }
}

fn reset_attributes<W: Write>(out: &mut W) -> Result<()> {
    out.write_all(ansi::RESET.as_bytes())
        .and_then(|_| out.flush())
        .map_err(TickerError::Write)
}

fn now() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}
