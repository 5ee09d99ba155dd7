//! Text fitting for TUI cells

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "...";

/// Fits `text` into `max_width` terminal columns, ending with "..." when
/// it had to be cut. Wide characters (CJK, most emoji) take two columns.
pub fn fit_width(text: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(text) <= max_width {
        return text.to_string();
    }

    let budget = max_width.saturating_sub(ELLIPSIS.len());
    let mut used = 0;
    let mut fitted = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        fitted.push(c);
    }

    fitted.push_str(&ELLIPSIS[..max_width.min(ELLIPSIS.len())]);
    fitted
}
