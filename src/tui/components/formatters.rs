// Text formatters
//
// Shared helpers for fitting passenger data into fixed-width cells.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Format a count with commas for readability
///
/// # Examples
/// ```ignore
/// assert_eq!(format_number(1309), "1,309");
/// assert_eq!(format_number(42), "42");
/// ```
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();

    for (count, ch) in s.chars().rev().enumerate() {
        if count > 0 && count % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, ch);
    }

    result
}

/// Truncate to at most `max_width` display columns, ending with `…` when cut
///
/// Measures terminal cells rather than chars, so wide glyphs in names
/// never push a column out of alignment.
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}
