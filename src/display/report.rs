//! Report formatting utilities for terminal output
//!
//! Provides formatting helpers shared by the table and chart renderers.
//! Widths are counted in characters, not bytes.

use colored::Colorize;

/// Format a header line in bold
pub fn format_header(title: &str) -> String {
    title.bold().to_string()
}

/// Format a separator line of dashes
pub fn separator(width: usize) -> String {
    "-".repeat(width)
}

/// Display width of a string in characters
pub fn display_width(s: &str) -> usize {
    s.chars().count()
}

/// Truncate a string to a maximum length with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if display_width(s) <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

/// Right-align text in a field of given width
pub fn right_align(s: &str, width: usize) -> String {
    let len = display_width(s);
    if len >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - len), s)
    }
}

/// Left-align text in a field of given width
pub fn left_align(s: &str, width: usize) -> String {
    let len = display_width(s);
    if len >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("Test", 4), "Test");
        assert_eq!(truncate("Crème brûlée", 8), "Crème...");
        assert_eq!(truncate("abcdef", 2), "..");
    }

    #[test]
    fn test_alignment() {
        assert_eq!(right_align("abc", 5), "  abc");
        assert_eq!(left_align("abc", 5), "abc  ");
        assert_eq!(left_align("café", 6), "café  ");
        assert_eq!(right_align("toolong", 3), "toolong");
    }

    #[test]
    fn test_separator() {
        assert_eq!(separator(4), "----");
        assert_eq!(separator(0), "");
    }
}
