//! Grapheme segmentation capability and grapheme counts.

use unicode_segmentation::UnicodeSegmentation;

use super::utils::is_whitespace_char;

/// Splits text into user-perceived characters.
///
/// Implementations must be restartable: segmenting the same input twice yields the same
/// sequence.
pub trait GraphemeSegmenter: Send + Sync {
    fn segment<'a>(&self, text: &'a str) -> Box<dyn Iterator<Item = &'a str> + 'a>;

    fn count(&self, text: &str) -> usize {
        self.segment(text).count()
    }
}

/// Extended grapheme clusters (UAX #29).
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSegmenter;

impl GraphemeSegmenter for UnicodeSegmenter {
    fn segment<'a>(&self, text: &'a str) -> Box<dyn Iterator<Item = &'a str> + 'a> {
        Box::new(grapheme_segments(text))
    }
}

/// One segment per code point.
///
/// Degraded mode: combining sequences and emoji clusters count once per code point.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodePointSegmenter;

impl GraphemeSegmenter for CodePointSegmenter {
    fn segment<'a>(&self, text: &'a str) -> Box<dyn Iterator<Item = &'a str> + 'a> {
        Box::new(
            text.char_indices()
                .map(move |(idx, ch)| &text[idx..idx + ch.len_utf8()]),
        )
    }

    fn count(&self, text: &str) -> usize {
        text.chars().count()
    }
}

pub fn grapheme_segments(text: &str) -> unicode_segmentation::Graphemes<'_> {
    UnicodeSegmentation::graphemes(text, true)
}

pub fn grapheme_count(text: &str) -> usize {
    grapheme_count_with(&UnicodeSegmenter, text)
}

pub fn grapheme_count_with(segmenter: &dyn GraphemeSegmenter, text: &str) -> usize {
    segmenter.count(text)
}

pub fn grapheme_count_without_whitespace(text: &str) -> usize {
    grapheme_count_without_whitespace_with(&UnicodeSegmenter, text)
}

/// Counts graphemes after removing every `White_Space` code point.
pub fn grapheme_count_without_whitespace_with(
    segmenter: &dyn GraphemeSegmenter,
    text: &str,
) -> usize {
    let stripped = strip_whitespace(text);
    segmenter.count(&stripped)
}

pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|ch| !is_whitespace_char(*ch)).collect()
}
