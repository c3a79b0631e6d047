//! Utility helpers for padding and truncating rendered cells.

use super::grapheme::grapheme_segments;
use super::width::{display_width, grapheme_width};

/// Unicode `White_Space` without U+0085 NEXT LINE, plus U+FEFF ZERO WIDTH NO-BREAK SPACE.
pub fn is_whitespace_char(ch: char) -> bool {
    match ch {
        '\u{85}' => false,
        '\u{feff}' => true,
        _ => ch.is_whitespace(),
    }
}

/// Pads `text` with spaces up to `width` display columns. Wider text is returned unchanged.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let text_width = display_width(text);
    let padding_needed = width.saturating_sub(text_width);
    let mut padded = String::with_capacity(text.len() + padding_needed);
    padded.push_str(text);
    if padding_needed > 0 {
        padded.push_str(&" ".repeat(padding_needed));
    }
    padded
}

pub fn truncate_to_width(text: &str, max_width: usize, ellipsis: &str, pad: bool) -> String {
    if max_width == 0 {
        return String::new();
    }

    let text_width = display_width(text);
    if text_width <= max_width {
        if pad {
            return pad_to_width(text, max_width);
        }
        return text.to_string();
    }

    let ellipsis_width = display_width(ellipsis);
    let target_width = max_width.saturating_sub(ellipsis_width);
    if target_width == 0 {
        return ellipsis.chars().take(max_width).collect();
    }

    let mut truncated = String::new();
    let mut current_width = 0;
    for grapheme in grapheme_segments(text) {
        let width = grapheme_width(grapheme);
        if current_width + width > target_width {
            break;
        }
        truncated.push_str(grapheme);
        current_width += width;
    }
    truncated.push_str(ellipsis);

    if pad {
        return pad_to_width(&truncated, max_width);
    }
    truncated
}
