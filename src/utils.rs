//! Common utility functions shared across the codebase.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Checks if the text contains at least one Unicode alphabetic character.
///
/// Returns false for empty strings, pure numbers, or pure symbols.
///
/// # Examples
///
/// ```
/// use tsglot::utils::contains_alphabetic;
///
/// assert!(contains_alphabetic("Katvan"));
/// assert!(contains_alphabetic("כתבן"));
/// assert!(contains_alphabetic("Qt6"));
/// assert!(!contains_alphabetic("%1"));
/// assert!(!contains_alphabetic("..."));
/// assert!(!contains_alphabetic(""));
/// ```
pub fn contains_alphabetic(text: &str) -> bool {
    text.chars().any(|c| c.is_alphabetic())
}

/// Render text on one line by escaping line breaks and tabs.
pub fn single_line(text: &str) -> String {
    text.replace('\n', "\\n").replace('\t', "\\t")
}

/// Truncate text to at most `max_width` display columns, appending "..."
/// when cut.
///
/// Width is measured in terminal columns so that CJK text lines up.
pub fn truncate_display(text: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(text) <= max_width {
        return text.to_string();
    }

    let budget = max_width.saturating_sub(3);
    let mut width = 0;
    let mut truncated = String::new();
    for c in text.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        truncated.push(c);
    }
    truncated.push_str("...");
    truncated
}

/// Pad text with spaces to `width` display columns.
pub fn pad_display(text: &str, width: usize) -> String {
    let current = UnicodeWidthStr::width(text);
    format!("{}{}", text, " ".repeat(width.saturating_sub(current)))
}
