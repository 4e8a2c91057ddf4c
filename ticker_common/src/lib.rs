//!
//! Common types and utilities shared by the quote feed and the ticker client.
//!
//! This crate aggregates:
//! - `error` — unified error type `TickerError` used across the workspace.
//! - `result` — handy `Result<T, TickerError>` alias.
//! - `symbols` — ticker symbols and symbols-file parsing.
//! - `row` — the quote row decoded from the feed.
//! - `feed` — feed constants and the payload format selector.
#![warn(missing_docs)]
pub mod error;
pub mod feed;
pub mod result;
pub mod row;
pub mod symbols;

pub use error::{ErrorKind, TickerError};
pub use feed::FeedFormat;
pub use result::Result;
pub use row::Row;
pub use symbols::{Symbol, SymbolParser};
