//! Quote feed: fetches quote payloads and decodes them into rows.
//!
//! - `fetch` — `HttpQuoteSource`, a blocking HTTP client for the quotes endpoint.
//! - `decode` — CSV and JSON payload decoders.
#![warn(missing_docs)]
pub mod decode;
pub mod fetch;

use ticker_common::{Result, Row, Symbol};

pub use fetch::HttpQuoteSource;

/// Anything able to produce one refresh worth of rows for a list of symbols.
pub trait QuoteSource {
    /// Fetches and decodes the current quotes for `symbols`, in feed order.
    fn fetch_rows(&self, symbols: &[Symbol]) -> Result<Vec<Row>>;
}
