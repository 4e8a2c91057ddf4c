//! Quote row model.
//!
//! A `Row` is one symbol's quote snapshot for one refresh. Rows are produced by the
//! feed decoders and consumed by the client's table renderer; a fresh set is built
//! on every tick.
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::TickerError;

/// Quote snapshot for a single ticker symbol.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    /// Ticker symbol (e.g., `AAPL`). Never empty.
    pub symbol: String,
    /// Display string for the date of the last trade, e.g. `1/1/2024`.
    pub last_trade_date: String,
    /// Display string for the time of the last trade, e.g. `9:30am`.
    pub last_trade_time: String,
    /// Last traded price.
    pub last_trade_price: Decimal,
    /// Opening price of the session.
    pub open: Decimal,
    /// Day's high.
    pub high: Decimal,
    /// Day's low.
    pub low: Decimal,
    /// Signed price change since the previous close.
    pub change: Decimal,
    /// Signed change in percent, without the `%` sign.
    pub change_percent: Decimal,
}

impl Row {
    /// Checks the invariants decoders cannot express in the type.
    pub fn validate(self) -> Result<Self, TickerError> {
        if self.symbol.trim().is_empty() {
            return Err(TickerError::Decode("row with an empty symbol".to_string()));
        }
        Ok(self)
    }
}
