//! Utility functions for diagnostic text handling.

/// Truncates a string to fit within a maximum display width, adding ellipsis if needed.
///
/// Used when quoting raw rule fragments in diagnostics, so that a pathological
/// input line does not flood the log. Uses Unicode width calculations for
/// proper handling of CJK and other wide characters. If the string fits within
/// `max_width`, it is returned unchanged; otherwise characters are removed from
/// the end and replaced with `…` (ellipsis).
///
/// # Example
///
/// ```rust
/// use stenocss::truncate_to_width;
///
/// assert_eq!(truncate_to_width("bg: primary", 20), "bg: primary");
/// assert_eq!(truncate_to_width("margin: 0 auto 0 auto", 10), "margin: 0…");
/// ```
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    // Reserve 1 column for the ellipsis
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
