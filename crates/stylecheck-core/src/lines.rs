//! Line sequence helpers.
//!
//! A line always carries its terminator (`\n` or `\r\n`) except possibly the
//! last one in a file. Every check measures lines through these helpers so
//! that the terminator is treated the same way everywhere:
//!
//! - [`char_len`] counts the terminator.
//! - [`body`], [`is_blank`] and [`indent_width`] ignore it.

/// Split text into lines, keeping each line's terminator.
///
/// Empty input yields no lines. A trailing line without a terminator is kept.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split_inclusive('\n').collect()
}

/// The line without its terminator.
pub fn body(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
}

/// `true` if the line holds nothing but its terminator.
pub fn is_blank(line: &str) -> bool {
    body(line).is_empty()
}

/// Number of characters in the line, terminator included.
pub fn char_len(line: &str) -> usize {
    line.chars().count()
}

/// Number of leading whitespace characters before the first non-whitespace
/// character of the line body.
pub fn indent_width(line: &str) -> usize {
    body(line).chars().take_while(|c| c.is_whitespace()).count()
}
