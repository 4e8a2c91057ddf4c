//! Ticker symbols and helpers for loading them from a symbols file.
//!
//! A symbols file lists tickers separated by new lines, commas or spaces. Entries are
//! case-insensitive and are stored uppercase.
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use crate::error::TickerError;

/// A validated ticker symbol such as `AAPL` or `BRK.B`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol(String);

impl Symbol {
    /// Returns the symbol text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Symbol {
    type Err = TickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(TickerError::ParseSymbolsFile("empty symbol".to_string()));
        }
        if let Some(bad) = trimmed
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '^' | '=')))
        {
            return Err(TickerError::ParseSymbolsFile(format!(
                "invalid character {bad:?} in symbol {trimmed:?}"
            )));
        }
        Ok(Symbol(trimmed.to_ascii_uppercase()))
    }
}

/// Trait providing symbol-list parsing.
pub trait SymbolParser {
    /// Parses symbols from a buffered reader.
    ///
    /// Every line is split on commas and whitespace; empty entries are skipped.
    /// Returns an error if any entry is not a valid symbol.
    fn parse_from_reader<R: BufRead>(reader: R) -> Result<Vec<Symbol>, TickerError>;

    /// Opens `path` and parses it with [`SymbolParser::parse_from_reader`].
    fn parse_from_file(path: &Path) -> Result<Vec<Symbol>, TickerError> {
        let file = File::open(path).map_err(|e| {
            TickerError::ParseSymbolsFile(format!("cannot open {}: {}", path.display(), e))
        })?;
        Self::parse_from_reader(BufReader::new(file))
    }
}

impl SymbolParser for Symbol {
    fn parse_from_reader<R: BufRead>(reader: R) -> Result<Vec<Self>, TickerError> {
        let mut symbols = Vec::new();

        for line_result in reader.lines() {
            let line = line_result.map_err(TickerError::Io)?;
            for entry in line.split(|c: char| c == ',' || c.is_whitespace()) {
                if entry.is_empty() {
                    continue;
                }
                symbols.push(entry.parse::<Self>()?);
            }
        }
        Ok(symbols)
    }
}

/// Joins symbols with commas, the form the feed query expects.
pub fn join_symbols(symbols: &[Symbol]) -> String {
    symbols
        .iter()
        .map(Symbol::as_str)
        .collect::<Vec<_>>()
        .join(",")
}
