//! Table model and layout.
//!
//! `Table::render` builds one header line and one line per row, every cell wrapped
//! in its style markers and separated by tabs. `align_columns` then replaces the
//! tabs with space padding so the columns line up. Escape sequences measure zero
//! columns during alignment.
use ticker_common::Row;

use super::ansi;
use super::field::{FIELDS, FormatContext, format_field};

/// Spaces between two aligned columns.
const GUTTER: usize = 2;

/// All rows of one refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Field labels, in column order.
    pub fn header() -> Vec<&'static str> {
        FIELDS.iter().map(|field| field.label).collect()
    }

    /// Length of the longest symbol, in characters.
    pub fn symbol_width(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.symbol.chars().count())
            .max()
            .unwrap_or(0)
    }

    /// Tab-separated header and row lines, styled but not yet aligned.
    pub fn render(&self, short_year: bool) -> Vec<String> {
        let ctx = FormatContext {
            symbol_width: self.symbol_width(),
            short_year,
        };

        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        lines.push(
            Self::header()
                .iter()
                .map(|label| ansi::styled(ansi::UNDERLINE, label))
                .collect::<Vec<_>>()
                .join("\t"),
        );
        for row in &self.rows {
            lines.push(
                FIELDS
                    .iter()
                    .map(|field| format_field(row, field.id, &ctx).styled())
                    .collect::<Vec<_>>()
                    .join("\t"),
            );
        }
        lines
    }

    /// Rendered and aligned lines, ready for the painter.
    pub fn render_aligned(&self, short_year: bool) -> Vec<String> {
        align_columns(&self.render(short_year))
    }
}

/// Replaces tabs with padding so tab-terminated cells line up in columns.
///
/// A column is as wide as its widest tab-terminated cell plus the gutter. The last
/// cell of a line is never padded.
pub fn align_columns(lines: &[String]) -> Vec<String> {
    let split: Vec<Vec<&str>> = lines.iter().map(|line| line.split('\t').collect()).collect();

    let mut widths: Vec<usize> = Vec::new();
    for cells in &split {
        for (col, cell) in cells.iter().take(cells.len().saturating_sub(1)).enumerate() {
            let width = ansi::visible_width(cell);
            match widths.get_mut(col) {
                Some(current) => *current = (*current).max(width),
                None => widths.push(width),
            }
        }
    }

    split
        .iter()
        .map(|cells| {
            let mut out = String::new();
            let last = cells.len().saturating_sub(1);
            for (col, cell) in cells.iter().enumerate() {
                out.push_str(cell);
                if col < last {
                    let pad = widths[col] - ansi::visible_width(cell) + GUTTER;
                    out.push_str(&" ".repeat(pad));
                }
            }
            out
        })
        .collect()
}
