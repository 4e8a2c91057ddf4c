//! Payload decoders turning a raw feed response into quote rows.
//!
//! CSV responses carry no header and list the columns in `FIELD_CODES` order. JSON
//! responses are an array of camelCase row objects. Any record that cannot be turned
//! into a complete `Row` fails the whole payload.
use std::str::FromStr;

use log::debug;
use rust_decimal::Decimal;
use ticker_common::feed::FIELD_CODES;
use ticker_common::{FeedFormat, Result, Row, TickerError};

const COL_SYMBOL: usize = 0;
const COL_DATE: usize = 1;
const COL_TIME: usize = 2;
const COL_PRICE: usize = 3;
const COL_CHANGE: usize = 4;
const COL_CHANGE_PERCENT: usize = 5;
const COL_OPEN: usize = 6;
const COL_HIGH: usize = 7;
const COL_LOW: usize = 8;

/// Decodes `payload` according to `format`.
pub fn decode_rows(format: FeedFormat, payload: &[u8]) -> Result<Vec<Row>> {
    match format {
        FeedFormat::Csv => decode_csv(payload),
        FeedFormat::Json => decode_json(payload),
    }
}

/// Decodes a header-less CSV payload.
pub fn decode_csv(payload: &[u8]) -> Result<Vec<Row>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(payload);

    let mut rows = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record.map_err(|e| TickerError::Decode(format!("CSV record {line}: {e}")))?;
        if record.len() != FIELD_CODES.len() {
            return Err(TickerError::Decode(format!(
                "CSV record {line}: expected {} columns, got {}",
                FIELD_CODES.len(),
                record.len()
            )));
        }

        let symbol = &record[COL_SYMBOL];
        let number = |col: usize| parse_decimal(symbol, col, &record[col]);
        let row = Row {
            symbol: symbol.to_string(),
            last_trade_date: record[COL_DATE].to_string(),
            last_trade_time: record[COL_TIME].to_string(),
            last_trade_price: number(COL_PRICE)?,
            open: number(COL_OPEN)?,
            high: number(COL_HIGH)?,
            low: number(COL_LOW)?,
            change: number(COL_CHANGE)?,
            change_percent: parse_decimal(
                symbol,
                COL_CHANGE_PERCENT,
                percent_value(&record[COL_CHANGE_PERCENT]),
            )?,
        };
        rows.push(row.validate()?);
    }
    debug!("Decoded {} CSV rows", rows.len());
    Ok(rows)
}

/// Decodes a JSON array of rows.
pub fn decode_json(payload: &[u8]) -> Result<Vec<Row>> {
    let rows: Vec<Row> = serde_json::from_slice(payload)
        .map_err(|e| TickerError::Decode(format!("JSON payload: {e}")))?;
    let rows = rows
        .into_iter()
        .map(Row::validate)
        .collect::<Result<Vec<_>>>()?;
    debug!("Decoded {} JSON rows", rows.len());
    Ok(rows)
}

/// Extracts the numeric part of a change-percent cell.
///
/// Realtime cells look like `N/A - <b>+0.52%</b>`; only the last token counts.
fn percent_value(raw: &str) -> &str {
    let last = raw.split_whitespace().last().unwrap_or("");
    let last = last.strip_prefix("<b>").unwrap_or(last);
    let last = last.strip_suffix("</b>").unwrap_or(last);
    last.strip_suffix('%').unwrap_or(last)
}

fn parse_decimal(symbol: &str, col: usize, raw: &str) -> Result<Decimal> {
    let digits = raw.strip_prefix('+').unwrap_or(raw);
    Decimal::from_str(digits).map_err(|e| {
        TickerError::Decode(format!(
            "{symbol}: column `{}` value {raw:?} is not a number ({e})",
            FIELD_CODES[col]
        ))
    })
}
