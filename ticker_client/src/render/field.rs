//! Per-field formatting and color rules.
//!
//! The table layout is driven by `FIELDS`, a static, ordered list of field
//! descriptors. Each descriptor knows its header label, how to turn a row into
//! display text, and which color class the text gets.
use rust_decimal::{Decimal, RoundingStrategy};
use ticker_common::Row;

use super::ansi;

/// Semantic color of a rendered cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorClass {
    Neutral,
    Positive,
    Negative,
    Emphasis,
}

impl ColorClass {
    /// Escape sequence that opens this class, `None` for plain text.
    pub fn style(self) -> Option<&'static str> {
        match self {
            ColorClass::Neutral => None,
            ColorClass::Positive => Some(ansi::GREEN),
            ColorClass::Negative => Some(ansi::RED),
            ColorClass::Emphasis => Some(ansi::BOLD),
        }
    }

    /// Wraps `text` in this class's markers.
    pub fn paint(self, text: &str) -> String {
        match self.style() {
            Some(style) => ansi::styled(style, text),
            None => text.to_string(),
        }
    }
}

/// Identifies one of the nine displayed quote fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Symbol,
    LastTradeDate,
    LastTradeTime,
    LastTradePrice,
    Open,
    High,
    Low,
    Change,
    ChangePercent,
}

/// Table-wide values some fields need while formatting a single row.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatContext {
    /// Width of the longest symbol in the table.
    pub symbol_width: usize,
    /// Trim four-digit years in trade dates to two digits.
    pub short_year: bool,
}

/// A formatted, not yet styled cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub color: ColorClass,
}

impl Cell {
    /// Cell text wrapped in its color markers.
    pub fn styled(&self) -> String {
        self.color.paint(&self.text)
    }
}

/// Static description of one displayed field.
pub struct FieldSpec {
    pub id: FieldId,
    pub label: &'static str,
    format: fn(&Row, &FormatContext) -> String,
    color: fn(&Row) -> ColorClass,
}

impl FieldSpec {
    /// Formats this field of `row`.
    ///
    /// Control characters become spaces so a cell always stays on one line and in
    /// one column.
    pub fn cell(&self, row: &Row, ctx: &FormatContext) -> Cell {
        let text = (self.format)(row, ctx)
            .chars()
            .map(|c| if c.is_control() { ' ' } else { c })
            .collect();
        Cell {
            text,
            color: (self.color)(row),
        }
    }
}

/// Displayed fields, in column order.
pub static FIELDS: [FieldSpec; 9] = [
    FieldSpec {
        id: FieldId::Symbol,
        label: "Symbol",
        format: |row, ctx| format!("{:<width$}", row.symbol, width = ctx.symbol_width),
        color: |_| ColorClass::Emphasis,
    },
    FieldSpec {
        id: FieldId::LastTradeDate,
        label: "Date",
        format: |row, ctx| {
            if ctx.short_year {
                short_year(&row.last_trade_date)
            } else {
                row.last_trade_date.clone()
            }
        },
        color: neutral,
    },
    FieldSpec {
        id: FieldId::LastTradeTime,
        label: "Time",
        format: |row, _| row.last_trade_time.clone(),
        color: neutral,
    },
    FieldSpec {
        id: FieldId::LastTradePrice,
        label: "Last",
        format: |row, _| two_places(row.last_trade_price),
        color: neutral,
    },
    FieldSpec {
        id: FieldId::Open,
        label: "Open",
        format: |row, _| two_places(row.open),
        color: neutral,
    },
    FieldSpec {
        id: FieldId::High,
        label: "High",
        format: |row, _| two_places(row.high),
        color: neutral,
    },
    FieldSpec {
        id: FieldId::Low,
        label: "Low",
        format: |row, _| two_places(row.low),
        color: neutral,
    },
    FieldSpec {
        id: FieldId::Change,
        label: "Change",
        format: |row, _| signed(row.change),
        color: change_color,
    },
    FieldSpec {
        id: FieldId::ChangePercent,
        label: "Change %",
        format: |row, _| format!("{}%", signed(row.change_percent)),
        color: change_color,
    },
];

/// Formats `id` of `row`.
pub fn format_field(row: &Row, id: FieldId, ctx: &FormatContext) -> Cell {
    // FIELDS is indexed in FieldId declaration order.
    FIELDS[id as usize].cell(row, ctx)
}

fn neutral(_: &Row) -> ColorClass {
    ColorClass::Neutral
}

/// Both change columns follow the sign of the price change; zero counts as a loss.
fn change_color(row: &Row) -> ColorClass {
    if row.change > Decimal::ZERO {
        ColorClass::Positive
    } else {
        ColorClass::Negative
    }
}

fn two_places(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    // -0.001 rounds to a negative zero
    let rounded = if rounded.is_zero() { Decimal::ZERO } else { rounded };
    format!("{rounded:.2}")
}

fn signed(value: Decimal) -> String {
    if value > Decimal::ZERO {
        format!("+{}", two_places(value))
    } else {
        two_places(value)
    }
}

/// `1/1/2024` -> `1/1/24`; anything not ending in `/YYYY` is returned unchanged.
pub fn short_year(date: &str) -> String {
    match date.rsplit_once('/') {
        Some((head, year)) if year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit()) => {
            format!("{head}/{}", &year[2..])
        }
        _ => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn row(symbol: &str, change: Decimal, change_percent: Decimal) -> Row {
        Row {
            symbol: symbol.to_string(),
            last_trade_date: "1/1/2024".to_string(),
            last_trade_time: "9:30am".to_string(),
            last_trade_price: dec!(150.10),
            open: dec!(150.00),
            high: dec!(152),
            low: dec!(149.5),
            change,
            change_percent,
        }
    }

    fn ctx(symbol_width: usize) -> FormatContext {
        FormatContext {
            symbol_width,
            short_year: false,
        }
    }

    #[test]
    fn descriptors_follow_field_id_order() {
        for (index, spec) in FIELDS.iter().enumerate() {
            assert_eq!(spec.id as usize, index);
        }
    }

    #[test]
    fn negative_change_is_red_without_plus() {
        let row = row("AAPL", dec!(-1.23), dec!(-0.5));
        let change = format_field(&row, FieldId::Change, &ctx(4));
        assert_eq!(change.color, ColorClass::Negative);
        assert_eq!(change.text, "-1.23");

        let pct = format_field(&row, FieldId::ChangePercent, &ctx(4));
        assert_eq!(pct.color, ColorClass::Negative);
        assert_eq!(pct.text, "-0.50%");

        let symbol = format_field(&row, FieldId::Symbol, &ctx(4));
        assert_eq!(symbol.color, ColorClass::Emphasis);
        assert_eq!(symbol.text, "AAPL");
    }

    #[test]
    fn positive_change_is_green_with_plus() {
        let row = row("MSFT", dec!(2.1), dec!(0.57));
        let change = format_field(&row, FieldId::Change, &ctx(4));
        assert_eq!(change.color, ColorClass::Positive);
        assert_eq!(change.text, "+2.10");
        assert_eq!(change.styled(), "\x1b[32m+2.10\x1b[0m");

        let pct = format_field(&row, FieldId::ChangePercent, &ctx(4));
        assert_eq!(pct.text, "+0.57%");
    }

    #[test]
    fn zero_change_counts_as_negative() {
        let row = row("T", dec!(0), dec!(0.00));
        let change = format_field(&row, FieldId::Change, &ctx(1));
        assert_eq!(change.color, ColorClass::Negative);
        assert_eq!(change.text, "0.00");
        assert_eq!(
            format_field(&row, FieldId::ChangePercent, &ctx(1)).text,
            "0.00%"
        );
    }

    #[test]
    fn percent_color_follows_price_change() {
        // Feeds can disagree on sign after rounding; the price change wins.
        let row = row("IBM", dec!(0.01), dec!(-0.001));
        let change = format_field(&row, FieldId::Change, &ctx(3));
        let pct = format_field(&row, FieldId::ChangePercent, &ctx(3));
        assert_eq!(change.color, ColorClass::Positive);
        assert_eq!(pct.color, change.color);
    }

    #[test]
    fn numbers_always_have_two_decimals() {
        let row = row("AAPL", dec!(-1.235), dec!(-0.5));
        let ctx = ctx(4);
        assert_eq!(format_field(&row, FieldId::LastTradePrice, &ctx).text, "150.10");
        assert_eq!(format_field(&row, FieldId::Open, &ctx).text, "150.00");
        assert_eq!(format_field(&row, FieldId::High, &ctx).text, "152.00");
        assert_eq!(format_field(&row, FieldId::Low, &ctx).text, "149.50");
        assert_eq!(format_field(&row, FieldId::Change, &ctx).text, "-1.24");
        assert_eq!(format_field(&row, FieldId::Low, &ctx).color, ColorClass::Neutral);
    }

    #[test]
    fn symbol_is_padded_after_the_text() {
        let row = row("A", dec!(1), dec!(1));
        assert_eq!(format_field(&row, FieldId::Symbol, &ctx(5)).text, "A    ");
    }

    #[test]
    fn date_and_time_pass_through() {
        let row = row("A", dec!(1), dec!(1));
        assert_eq!(format_field(&row, FieldId::LastTradeDate, &ctx(1)).text, "1/1/2024");
        assert_eq!(format_field(&row, FieldId::LastTradeTime, &ctx(1)).text, "9:30am");

        let short = FormatContext {
            symbol_width: 1,
            short_year: true,
        };
        assert_eq!(format_field(&row, FieldId::LastTradeDate, &short).text, "1/1/24");
    }

    #[test]
    fn short_year_leaves_other_shapes_alone() {
        assert_eq!(short_year("12/31/1999"), "12/31/99");
        assert_eq!(short_year("Jan 5"), "Jan 5");
        assert_eq!(short_year("1/1/24"), "1/1/24");
        assert_eq!(short_year("N/A"), "N/A");
    }

    #[test]
    fn tiny_negative_change_shows_unsigned_zero() {
        let row = row("T", dec!(-0.001), dec!(-0.004));
        let change = format_field(&row, FieldId::Change, &ctx(1));
        assert_eq!(change.text, "0.00");
        assert_eq!(change.color, ColorClass::Negative);
        assert_eq!(
            format_field(&row, FieldId::ChangePercent, &ctx(1)).text,
            "0.00%"
        );
    }

    #[test]
    fn control_characters_are_blanked() {
        let mut row = row("AAPL", dec!(1), dec!(1));
        row.last_trade_time = "9:30\nam".to_string();
        row.last_trade_date = "1/1\t/2024".to_string();
        let ctx = ctx(4);
        assert_eq!(format_field(&row, FieldId::LastTradeTime, &ctx).text, "9:30 am");
        assert_eq!(format_field(&row, FieldId::LastTradeDate, &ctx).text, "1/1 /2024");
    }
}
