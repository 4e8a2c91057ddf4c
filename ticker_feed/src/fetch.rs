//! Fetching quote payloads over HTTP.
//!
//! One blocking GET per refresh. The request asks for the nine quote fields of every
//! symbol in a single call; a transport failure or a non-success status is reported
//! as `TickerError::Fetch` and is never retried here.
use std::time::Duration;

use log::{debug, info};
use reqwest::blocking::Client as HttpClient;
use ticker_common::feed::field_codes;
use ticker_common::symbols::join_symbols;
use ticker_common::{FeedFormat, Result, Row, Symbol, TickerError};

use crate::QuoteSource;
use crate::decode::decode_rows;

/// Quote source backed by an HTTP endpoint.
#[derive(Debug, Clone)]
pub struct HttpQuoteSource {
    url: String,
    format: FeedFormat,
    http: HttpClient,
}

impl HttpQuoteSource {
    /// Creates a source for `url` serving payloads in `format`.
    pub fn new(url: &str, format: FeedFormat, timeout: Duration) -> Result<Self> {
        let url = url.trim().to_string();
        if url.is_empty() {
            return Err(TickerError::Config("feed URL must not be empty".to_string()));
        }

        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TickerError::Config(format!("build HTTP client: {e}")))?;

        info!("Quote feed: {} ({})", url, format);
        Ok(Self { url, format, http })
    }

    /// Performs the GET and returns the raw payload.
    pub fn fetch_payload(&self, symbols: &[Symbol]) -> Result<Vec<u8>> {
        let response = self
            .http
            .get(&self.url)
            .query(&[
                ("e", ".csv".to_string()),
                ("f", field_codes()),
                ("s", join_symbols(symbols)),
            ])
            .send()
            .map_err(|e| TickerError::Fetch(format!("GET {}: {}", self.url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TickerError::Fetch(format!(
                "GET {}: unexpected status {}",
                self.url, status
            )));
        }

        let body = response
            .bytes()
            .map_err(|e| TickerError::Fetch(format!("read body from {}: {}", self.url, e)))?;
        debug!("Fetched {} bytes for {} symbols", body.len(), symbols.len());
        Ok(body.to_vec())
    }
}

impl QuoteSource for HttpQuoteSource {
    fn fetch_rows(&self, symbols: &[Symbol]) -> Result<Vec<Row>> {
        let payload = self.fetch_payload(symbols)?;
        decode_rows(self.format, &payload)
    }
}
