//! VT100 escape sequences written by the renderer and the painter.

/// Clears the whole screen.
pub const CLEAR_SCREEN: &str = "\x1b[2J";
/// Moves the cursor to the top-left corner.
pub const CURSOR_HOME: &str = "\x1b[H";
/// Clears from the cursor to the end of the line.
pub const CLEAR_LINE: &str = "\x1b[K";
/// Clears from the cursor to the end of the screen.
pub const CLEAR_BELOW: &str = "\x1b[J";
/// Resets every attribute.
pub const RESET: &str = "\x1b[0m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const BOLD: &str = "\x1b[1m";
pub const GREEN: &str = "\x1b[32m";
pub const RED: &str = "\x1b[31m";

/// Moves the cursor up `lines` lines.
pub fn cursor_up(lines: usize) -> String {
    format!("\x1b[{lines}A")
}

/// Wraps `text` between `style` and a reset.
pub fn styled(style: &str, text: &str) -> String {
    format!("{style}{text}{RESET}")
}

/// Display width of `text`, ignoring CSI escape sequences.
pub fn visible_width(text: &str) -> usize {
    use unicode_width::UnicodeWidthChar;

    let mut width = 0;
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // CSI: ESC '[' params final-byte
            if chars.next() == Some('[') {
                for c in chars.by_ref() {
                    if ('@'..='~').contains(&c) {
                        break;
                    }
                }
            }
            continue;
        }
        width += c.width().unwrap_or(0);
    }
    width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_measure_zero() {
        assert_eq!(visible_width(&styled(GREEN, "+1.23")), 5);
        assert_eq!(visible_width(&styled(UNDERLINE, "Change %")), 8);
        assert_eq!(visible_width("plain"), 5);
    }

    #[test]
    fn cursor_up_encodes_count() {
        assert_eq!(cursor_up(7), "\x1b[7A");
    }
}
