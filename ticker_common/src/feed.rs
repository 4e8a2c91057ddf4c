//! Shared feed constants used by the fetcher and the client.

use clap::ValueEnum;
use strum_macros::{Display, EnumString};

/// Legacy quotes CSV endpoint.
pub const DEFAULT_FEED_URL: &str = "http://download.finance.yahoo.com/d/quote.csv";

/// Default seconds between two refreshes.
pub const DEFAULT_INTERVAL_SECS: u64 = 3;

/// Default HTTP timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Feed field codes in the column order of a CSV response: symbol, last trade date,
/// last trade time, last trade price, change (realtime), change percent (realtime),
/// open, day's high, day's low.
pub const FIELD_CODES: [&str; 9] = ["s", "d1", "t1", "l1", "c6", "k2", "o", "h", "g"];

/// Concatenated field codes, the value of the `f` query parameter.
pub fn field_codes() -> String {
    FIELD_CODES.concat()
}

/// Payload encoding served by the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Display, EnumString)]
#[clap(rename_all = "lower")]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum FeedFormat {
    /// Header-less CSV, one record per symbol in `FIELD_CODES` order.
    #[default]
    Csv,
    /// JSON array of camelCase row objects.
    Json,
}
