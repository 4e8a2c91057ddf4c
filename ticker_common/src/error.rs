//! Error types shared by the feed and the client.
//!
//! The `TickerError` enum unifies every failure the ticker can hit: reaching the
//! feed, decoding its payload, writing frames to the terminal, and loading the
//! symbol list. `TickerError::kind` groups the variants so the refresh loop can
//! apply its error policy without looking at messages.
use std::io;

use thiserror::Error;

/// Unified error type shared by every crate in the workspace.
#[derive(Error, Debug)]
pub enum TickerError {
    /// I/O error originating from the standard library (files, sockets).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Transport failure or non-success HTTP status from the quote feed.
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Malformed payload, missing column or non-numeric required field.
    #[error("Decode error: {0}")]
    Decode(String),

    /// The terminal output stream rejected a write or flush.
    #[error("Write error: {0}")]
    Write(#[source] io::Error),

    /// Error while parsing the symbols file into `Symbol` values.
    #[error("Parse symbols file error: {0}")]
    ParseSymbolsFile(String),

    /// Invalid command-line or runtime configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Coarse classification of a [`TickerError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Network or transport failure.
    Fetch,
    /// Payload could not be turned into rows.
    Decode,
    /// Terminal output failure.
    Write,
    /// Everything else (configuration, local I/O).
    Other,
}

impl TickerError {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TickerError::Fetch(_) => ErrorKind::Fetch,
            TickerError::Decode(_) => ErrorKind::Decode,
            TickerError::Write(_) => ErrorKind::Write,
            TickerError::Io(_) | TickerError::ParseSymbolsFile(_) | TickerError::Config(_) => {
                ErrorKind::Other
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_the_taxonomy() {
        assert_eq!(TickerError::Fetch("timeout".into()).kind(), ErrorKind::Fetch);
        assert_eq!(TickerError::Decode("bad".into()).kind(), ErrorKind::Decode);
        let broken = io::Error::new(io::ErrorKind::BrokenPipe, "gone");
        assert_eq!(TickerError::Write(broken).kind(), ErrorKind::Write);
        assert_eq!(TickerError::Config("zero".into()).kind(), ErrorKind::Other);
    }

    #[test]
    fn messages_carry_context() {
        let err = TickerError::Decode("AAPL: column `open` is not a number".into());
        assert_eq!(
            err.to_string(),
            "Decode error: AAPL: column `open` is not a number"
        );
    }
}
