//! Ticker Client — polls a quote feed and keeps a color-coded quote table up to date in
//! the terminal. It reads the symbols to watch from a text file, fetches all of them in
//! one request per tick, and repaints the table in place on every refresh.
//!
//! Usage example (CLI):
//! ```bash
//! ticker_client --symbols ./stocks.txt --interval 3 --log-file ticker.log
//! ```
//!
//! The symbols file may separate symbols with commas, spaces, or new lines.
//! See `ticker_common::symbols` for details.
#![warn(missing_docs)]
mod args;
mod refresh;
mod render;

use std::fs::File;
use std::io::{self, BufWriter};

use clap::Parser;
use crossbeam_channel::bounded;
use log::{error, info};
use ticker_common::{Result, Symbol, SymbolParser, TickerError};
use ticker_feed::HttpQuoteSource;

use crate::args::Args;
use crate::refresh::{ErrorPolicy, RefreshLoop, RefreshOptions};

/// Output buffer large enough to hold a full frame of a long symbol list.
const FRAME_BUFFER_BYTES: usize = 64 * 1024;

fn main() -> Result<(), TickerError> {
    let args = Args::parse();
    init_logger(&args)?;

    if let Err(e) = run(&args) {
        error!("Ticker stopped: {}", e);
        return Err(e);
    }
    Ok(())
}

fn run(args: &Args) -> Result<()> {
    let symbols = Symbol::parse_from_file(&args.symbols_path())?;
    if symbols.is_empty() {
        return Err(TickerError::Config(format!(
            "no symbols in {}",
            args.symbols_path().display()
        )));
    }
    info!("Symbols: {:?}", symbols);

    let source = HttpQuoteSource::new(&args.url, args.format, args.timeout()?)?;
    let options = RefreshOptions {
        interval: args.interval()?,
        short_year: args.short_year,
        policy: if args.skip_failed_ticks {
            ErrorPolicy::SkipTick
        } else {
            ErrorPolicy::Abort
        },
    };
    let mut refresh = RefreshLoop::new(source, symbols, options);

    let stdout = io::stdout();
    let mut out = BufWriter::with_capacity(FRAME_BUFFER_BYTES, stdout.lock());

    if args.once {
        return refresh.run_once(&mut out);
    }

    let (shutdown_tx, shutdown_rx) = bounded::<()>(1);
    ctrlc::set_handler(move || {
        info!("Ctrl+C received. Shutting down ticker...");
        let _ = shutdown_tx.try_send(());
    })
    .map_err(|e| TickerError::Config(format!("install Ctrl+C handler: {e}")))?;

    info!("Ticker is running. Press Ctrl+C to exit.");
    refresh.run(&mut out, &shutdown_rx)
}

fn init_logger(args: &Args) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env();

    if let Some(path) = args.log_path() {
        let file = File::create(&path).map_err(|e| {
            TickerError::Config(format!("cannot create log file {}: {}", path.display(), e))
        })?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}
