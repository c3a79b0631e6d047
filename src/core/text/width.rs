//! Half-width/full-width weighting and terminal display width.
//!
//! Two different notions of width live here. [`weighted_width_count`] is the counting metric:
//! a grapheme is half-width only when all of its code points are in `0x01..=0x7E`.
//! [`display_width`] is the terminal column width used when laying out panels.

use emojis::get as emoji_get;
use unicode_width::UnicodeWidthChar;

use super::grapheme::{GraphemeSegmenter, UnicodeSegmenter};

const TAB_WIDTH: usize = 4;

pub const HALF_WIDTH_WEIGHT: f64 = 0.5;
pub const FULL_WIDTH_WEIGHT: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharWidthClass {
    Half,
    Full,
}

impl CharWidthClass {
    pub fn weight(self) -> f64 {
        match self {
            CharWidthClass::Half => HALF_WIDTH_WEIGHT,
            CharWidthClass::Full => FULL_WIDTH_WEIGHT,
        }
    }
}

fn is_half_width_code_point(ch: char) -> bool {
    matches!(ch, '\u{01}'..='\u{7E}')
}

/// Full-width if any code point of the grapheme is outside `0x01..=0x7E`.
pub fn classify_grapheme(grapheme: &str) -> CharWidthClass {
    if grapheme.chars().all(is_half_width_code_point) {
        CharWidthClass::Half
    } else {
        CharWidthClass::Full
    }
}

pub fn weighted_width_count(text: &str) -> f64 {
    weighted_width_count_with(&UnicodeSegmenter, text)
}

pub fn weighted_width_count_with(segmenter: &dyn GraphemeSegmenter, text: &str) -> f64 {
    segmenter
        .segment(text)
        .map(|grapheme| classify_grapheme(grapheme).weight())
        .sum()
}

/// Terminal column width of a single grapheme.
pub fn grapheme_width(grapheme: &str) -> usize {
    if grapheme.is_empty() {
        return 0;
    }
    if grapheme == "\t" {
        return TAB_WIDTH;
    }

    if emoji_get(grapheme).is_some() {
        return 2;
    }

    let mut width = 0;
    for ch in grapheme.chars() {
        if ch == '\t' {
            width += TAB_WIDTH;
            continue;
        }
        width += UnicodeWidthChar::width(ch).unwrap_or(0);
    }
    width
}

pub fn display_width(input: &str) -> usize {
    UnicodeSegmenter.segment(input).map(grapheme_width).sum()
}

pub fn tab_width() -> usize {
    TAB_WIDTH
}

#[cfg(test)]
mod tests {
    use super::{
        classify_grapheme, display_width, weighted_width_count, weighted_width_count_with,
        CharWidthClass,
    };
    use crate::core::text::grapheme::CodePointSegmenter;

    #[test]
    fn ascii_is_half_and_kana_is_full() {
        assert_eq!(weighted_width_count(""), 0.0);
        assert_eq!(weighted_width_count("A"), 0.5);
        assert_eq!(weighted_width_count("あ"), 1.0);
        assert_eq!(weighted_width_count("Aあ"), 1.5);
    }

    #[test]
    fn range_boundaries() {
        assert_eq!(classify_grapheme("\u{01}"), CharWidthClass::Half);
        assert_eq!(classify_grapheme("~"), CharWidthClass::Half);
        assert_eq!(classify_grapheme("\n"), CharWidthClass::Half);
        assert_eq!(classify_grapheme("\0"), CharWidthClass::Full);
        assert_eq!(classify_grapheme("\u{7f}"), CharWidthClass::Full);
        assert_eq!(classify_grapheme("é"), CharWidthClass::Full);
    }

    #[test]
    fn half_width_katakana_counts_as_full() {
        assert_eq!(weighted_width_count("ｱｲｳ"), 3.0);
    }

    #[test]
    fn mixed_grapheme_is_full_width() {
        // ASCII base with a non-ASCII combining mark is one grapheme.
        assert_eq!(classify_grapheme("e\u{301}"), CharWidthClass::Full);
        assert_eq!(weighted_width_count("e\u{301}"), 1.0);
        assert_eq!(weighted_width_count_with(&CodePointSegmenter, "e\u{301}"), 1.5);
    }

    #[test]
    fn crlf_counts_once_as_half() {
        assert_eq!(weighted_width_count("a\r\nb"), 1.5);
    }

    #[test]
    fn display_width_handles_cjk_and_emoji() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("文字数"), 6);
        assert_eq!(display_width("😀"), 2);
        assert_eq!(display_width("a\tb"), 6);
    }
}
