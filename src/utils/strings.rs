//! String utility functions

/// Split profile text into lines on `\n`.
///
/// A single trailing newline terminates the last line rather than starting an
/// empty one, so `"a\n"` and `"a"` both give `["a"]`. Blank lines elsewhere,
/// including extra trailing ones, are kept. `\r` is not stripped, so CRLF
/// lines come back byte-identical when rejoined.
///
/// # Examples
///
/// ```
/// use shenv::utils::strings::split_lines;
///
/// assert_eq!(split_lines("a\nb"), vec!["a", "b"]);
/// assert_eq!(split_lines("a\n"), vec!["a"]);
/// assert_eq!(split_lines("a\n\nb\n\n"), vec!["a", "", "b", ""]);
/// assert_eq!(split_lines(""), Vec::<&str>::new());
/// ```
pub fn split_lines(s: &str) -> Vec<&str> {
    if s.is_empty() {
        return Vec::new();
    }
    s.strip_suffix('\n').unwrap_or(s).split('\n').collect()
}

/// Truncate a string to fit within max_width characters, adding "..." if truncated
pub fn truncate_display(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width <= 3 {
        s.chars().take(max_width).collect()
    } else {
        format!("{}...", s.chars().take(max_width - 3).collect::<String>())
    }
}
