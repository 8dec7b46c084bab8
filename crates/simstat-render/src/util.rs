//! Utility functions for Unicode-aware text measurement, padding, and wrapping.
//!
//! All widths are *display columns*: East Asian Wide and Fullwidth characters
//! count as 2 columns, everything else as 1. Measuring by `chars().count()`
//! misaligns any table containing CJK text, which is why every function here
//! goes through [`display_width`].

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Returns the display width of a string in terminal columns.
///
/// CJK wide and fullwidth characters count as 2 columns each.
///
/// # Example
///
/// ```rust
/// use simstat_render::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("日本"), 4);  // 2 columns per character
/// assert_eq!(display_width(""), 0);
/// ```
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Pads a string on the right with spaces until its display width reaches
/// `width`.
///
/// If the string's display width already meets or exceeds the target, it is
/// returned unchanged; padding never truncates.
///
/// # Example
///
/// ```rust
/// use simstat_render::pad_right;
///
/// assert_eq!(pad_right("42", 5), "42   ");
/// assert_eq!(pad_right("hello", 3), "hello");  // No truncation
/// assert_eq!(pad_right("日本", 6), "日本  ");   // 4 columns + 2 spaces
/// ```
pub fn pad_right(s: &str, width: usize) -> String {
    let current = display_width(s);
    if current >= width {
        return s.to_string();
    }
    let mut padded = String::with_capacity(s.len() + (width - current));
    padded.push_str(s);
    padded.push_str(&" ".repeat(width - current));
    padded
}

/// Word-wraps a string to the given display width.
///
/// Breaks greedily at whitespace boundaries, measuring in display columns.
/// A single token wider than the whole line is split at column boundaries
/// rather than truncated, so no characters are ever lost. Whitespace-only
/// input produces no lines.
///
/// # Example
///
/// ```rust
/// use simstat_render::wrap;
///
/// assert_eq!(wrap("hello world foo bar", 11), vec!["hello world", "foo bar"]);
/// assert_eq!(wrap("", 10), Vec::<String>::new());
/// ```
pub fn wrap(s: &str, width: usize) -> Vec<String> {
    // Width 0 would never make progress; one column is the floor.
    let width = width.max(1);
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();
    let mut line_width = 0usize;

    for word in s.split_whitespace() {
        let word_width = display_width(word);
        if !line.is_empty() {
            if line_width + 1 + word_width <= width {
                line.push(' ');
                line.push_str(word);
                line_width += 1 + word_width;
                continue;
            }
            lines.push(std::mem::take(&mut line));
            line_width = 0;
        }
        if word_width <= width {
            line.push_str(word);
            line_width = word_width;
        } else {
            // Token wider than the whole line: split at column boundaries.
            for c in word.chars() {
                let char_width = c.width().unwrap_or(0);
                if line_width + char_width > width && !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                    line_width = 0;
                }
                line.push(c);
                line_width += char_width;
            }
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
