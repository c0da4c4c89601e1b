//! Shared text utilities for diamond rendering

use unicode_width::UnicodeWidthStr;

/// Display width of `text` in terminal columns
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Surround `line` with `left` spaces before it and `right` spaces after.
///
/// # Example
/// ```
/// use diamond::core::pad_line;
///
/// assert_eq!(pad_line("a", 2, 2), "  a  ");
/// assert_eq!(pad_line("a", 2, 0), "  a");
/// ```
pub fn pad_line(line: &str, left: usize, right: usize) -> String {
    let mut out = String::with_capacity(line.len() + left + right);
    out.extend(std::iter::repeat(' ').take(left));
    out.push_str(line);
    out.extend(std::iter::repeat(' ').take(right));
    out
}
