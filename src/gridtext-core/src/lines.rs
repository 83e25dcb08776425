//! Line splitting and fixed-width line fitting.
//!
//! Every character counts as one display column; there is no Unicode width
//! awareness here. Truncation always happens on `char` boundaries.

/// Split `text` into lines with the terminators removed.
///
/// A trailing terminator does not introduce an extra empty line, and an
/// empty string yields no lines at all. Both `\n` and `\r\n` are accepted.
///
/// ```
/// use gridtext_core::lines::split_lines;
///
/// assert_eq!(split_lines("Hello,\nHello Kitty"), vec!["Hello,", "Hello Kitty"]);
/// assert_eq!(split_lines("a\n\nb\n"), vec!["a", "", "b"]);
/// assert!(split_lines("").is_empty());
/// ```
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_owned).collect()
}

/// Display width of a single line.
#[inline]
pub fn display_width(line: &str) -> usize {
    line.chars().count()
}

/// Measure a text block as `(width, height)`.
///
/// The height counts terminated lines plus one for unterminated trailing
/// content; the width is the widest line.
pub fn block_size(block: &str) -> (usize, usize) {
    let width = block.lines().map(display_width).max().unwrap_or(0);
    let mut height = block.matches('\n').count();
    if !block.is_empty() && !block.ends_with('\n') {
        height += 1;
    }
    (width, height)
}

/// Cut `line` down to at most `width` columns.
pub fn truncate(line: &str, width: usize) -> &str {
    match line.char_indices().nth(width) {
        Some((idx, _)) => &line[..idx],
        None => line,
    }
}

/// Fit `line` into exactly `width` columns, padding on the right.
pub fn fit_left(line: &str, width: usize) -> String {
    let visible = truncate(line, width);
    let mut out = String::with_capacity(width);
    out.push_str(visible);
    out.extend(std::iter::repeat_n(' ', width - display_width(visible)));
    out
}

/// Fit `line` into exactly `width` columns, padding on the left.
pub fn fit_right(line: &str, width: usize) -> String {
    let visible = truncate(line, width);
    let mut out = String::with_capacity(width);
    out.extend(std::iter::repeat_n(' ', width - display_width(visible)));
    out.push_str(visible);
    out
}

/// A line of `width` spaces.
#[inline]
pub fn blank(width: usize) -> String {
    " ".repeat(width)
}
