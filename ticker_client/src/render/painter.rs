//! Screen painter: owns the terminal's cursor bookkeeping across refreshes.
//!
//! The first paint clears the screen and starts at the home position. Every later
//! paint rewinds the cursor over the previous frame (timestamp line, header line
//! and one line per row) and overwrites it in place, so the display refreshes
//! without scrolling or flicker.
//!
//! A frame is assembled in memory and handed to the sink with one `write_all`
//! followed by `flush`, so the terminal never sees half a frame.
use std::io::Write;

use ticker_common::{Result, TickerError};

use super::ansi;

/// What the painter remembers between two paints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaintState {
    pub has_painted_before: bool,
    /// Rows (header excluded) written by the previous paint.
    pub last_row_count: usize,
}

/// How the next frame will reach the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintMode {
    FirstPaint,
    /// Overwrite in place after moving up `rewind` lines.
    Repainting { rewind: usize },
}

#[derive(Debug, Default)]
pub struct ScreenPainter {
    state: PaintState,
}

impl ScreenPainter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PaintState {
        self.state
    }

    pub fn mode(&self) -> PaintMode {
        if self.state.has_painted_before {
            PaintMode::Repainting {
                // timestamp line + header line
                rewind: self.state.last_row_count + 2,
            }
        } else {
            PaintMode::FirstPaint
        }
    }

    /// Forces the next paint to clear the whole screen.
    ///
    /// Used when something else wrote to the terminal and the cursor position can no
    /// longer be trusted.
    pub fn invalidate(&mut self) {
        self.state = PaintState::default();
    }

    /// Builds the bytes of the next frame without touching any state.
    ///
    /// `lines` holds the header line followed by one line per row.
    pub fn frame(&self, timestamp: &str, lines: &[String]) -> String {
        let mut out = String::new();
        match self.mode() {
            PaintMode::FirstPaint => {
                out.push_str(ansi::CLEAR_SCREEN);
                out.push_str(ansi::CURSOR_HOME);
                for line in std::iter::once(timestamp).chain(lines.iter().map(String::as_str)) {
                    out.push_str(line);
                    out.push('\n');
                }
            }
            PaintMode::Repainting { rewind } => {
                out.push_str(&ansi::cursor_up(rewind));
                for line in std::iter::once(timestamp).chain(lines.iter().map(String::as_str)) {
                    out.push_str(ansi::CLEAR_LINE);
                    out.push_str(line);
                    out.push('\n');
                }
                // rows left over from a longer previous table
                out.push_str(ansi::CLEAR_BELOW);
            }
        }
        out
    }

    /// Writes the next frame to `out` and records its row count.
    ///
    /// The state only advances once the frame has been written and flushed.
    pub fn paint<W: Write>(&mut self, out: &mut W, timestamp: &str, lines: &[String]) -> Result<()> {
        let frame = self.frame(timestamp, lines);
        out.write_all(frame.as_bytes()).map_err(TickerError::Write)?;
        out.flush().map_err(TickerError::Write)?;

        self.state = PaintState {
            has_painted_before: true,
            last_row_count: lines.len().saturating_sub(1),
        };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn table_lines(rows: usize) -> Vec<String> {
        let mut lines = vec!["Symbol  Last".to_string()];
        lines.extend((0..rows).map(|i| format!("SYM{i}    1.00")));
        lines
    }

    fn paint(painter: &mut ScreenPainter, timestamp: &str, lines: &[String]) -> String {
        let mut sink = Vec::new();
        painter.paint(&mut sink, timestamp, lines).unwrap();
        String::from_utf8(sink).unwrap()
    }

    #[test]
    fn first_paint_clears_before_content() {
        let mut painter = ScreenPainter::new();
        assert_eq!(painter.mode(), PaintMode::FirstPaint);

        let out = paint(&mut painter, "2024-01-01 09:30:00", &table_lines(2));
        assert!(out.starts_with("\x1b[2J\x1b[H2024-01-01 09:30:00\n"));
        assert!(!out.contains("\x1b[K"));
        assert_eq!(out.matches('\n').count(), 4);
        assert_eq!(
            painter.state(),
            PaintState {
                has_painted_before: true,
                last_row_count: 2,
            }
        );
    }

    #[test]
    fn repaint_rewinds_over_previous_frame() {
        let mut painter = ScreenPainter::new();
        paint(&mut painter, "t1", &table_lines(2));

        let out = paint(&mut painter, "t2", &table_lines(2));
        assert!(out.starts_with("\x1b[4A\x1b[Kt2\n"));
        assert!(!out.contains("\x1b[2J"));
        assert!(out.ends_with("\x1b[J"));
    }

    #[test]
    fn rewind_uses_previous_row_count() {
        let mut painter = ScreenPainter::new();
        paint(&mut painter, "t1", &table_lines(5));

        let second = paint(&mut painter, "t2", &table_lines(3));
        assert!(second.starts_with("\x1b[7A"));
        assert_eq!(painter.state().last_row_count, 3);

        let third = paint(&mut painter, "t3", &table_lines(3));
        assert!(third.starts_with("\x1b[5A"));
    }

    #[test]
    fn same_table_repaints_identically_except_timestamp() {
        let mut painter = ScreenPainter::new();
        paint(&mut painter, "t0", &table_lines(3));
        let a = paint(&mut painter, "09:30:00", &table_lines(3));
        let b = paint(&mut painter, "09:30:03", &table_lines(3));
        assert_ne!(a, b);
        assert_eq!(a.replace("09:30:00", ""), b.replace("09:30:03", ""));
    }

    #[test]
    fn invalidate_returns_to_first_paint() {
        let mut painter = ScreenPainter::new();
        paint(&mut painter, "t1", &table_lines(1));
        painter.invalidate();
        let out = paint(&mut painter, "t2", &table_lines(1));
        assert!(out.starts_with("\x1b[2J\x1b[H"));
    }

    struct BrokenTerminal;

    impl Write for BrokenTerminal {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal gone"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_is_reported_and_state_kept() {
        let mut painter = ScreenPainter::new();
        let err = painter
            .paint(&mut BrokenTerminal, "t1", &table_lines(1))
            .unwrap_err();
        assert!(matches!(err, TickerError::Write(_)));
        assert_eq!(painter.mode(), PaintMode::FirstPaint);
    }
}
