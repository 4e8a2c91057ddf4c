//! Terminal rendering of quote tables.
//!
//! - `field` — per-field formatting and color rules.
//! - `table` — header and row lines, column alignment.
//! - `painter` — first paint versus in-place repaint.
//! - `ansi` — escape sequences.
pub mod ansi;
pub mod field;
pub mod painter;
pub mod table;

pub use painter::ScreenPainter;
pub use table::Table;
