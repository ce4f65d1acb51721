//! Fixed-width cell formatting, accounting for Unicode character widths.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate `text` to `width` columns, or right-align it when shorter.
pub fn fit(text: &str, width: usize) -> String {
    if text.width() < width {
        return right(text, width);
    }
    let mut used = 0;
    let truncated: String = text
        .chars()
        .take_while(|c| {
            used += c.width().unwrap_or(0);
            used <= width
        })
        .collect();
    // a wide character straddling the edge leaves one column short
    right(&truncated, width)
}

/// Center `text` in `width` columns; the left side gets the smaller half.
///
/// Text at least `width` wide is returned unchanged.
pub fn center(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        return text.to_string();
    }
    let total_padding = width - text_width;
    let left_padding = total_padding / 2;
    let right_padding = total_padding - left_padding;
    format!(
        "{}{}{}",
        " ".repeat(left_padding),
        text,
        " ".repeat(right_padding)
    )
}

/// Pad `text` on the right to `width` columns.
pub fn left(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}

/// Pad `text` on the left to `width` columns.
pub fn right(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{}{}", " ".repeat(padding), text)
}

/// True for lines that carry no visible text.
pub fn is_blank(line: &str) -> bool {
    line.chars().all(char::is_whitespace)
}
