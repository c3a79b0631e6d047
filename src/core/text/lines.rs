//! Raw and wrapped line counts.

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use crate::error::MeasureError;

use super::grapheme::{GraphemeSegmenter, UnicodeSegmenter};

/// Maximum number of graphemes assumed to fit on one rendered line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WrapWidth(NonZeroUsize);

impl WrapWidth {
    pub const DEFAULT: WrapWidth = match NonZeroUsize::new(80) {
        Some(width) => WrapWidth(width),
        None => unreachable!(),
    };

    pub fn new(width: usize) -> Result<Self, MeasureError> {
        NonZeroUsize::new(width)
            .map(WrapWidth)
            .ok_or_else(|| MeasureError::invalid_wrap_width(width.to_string()))
    }

    /// Parses the leading integer of `input`, ignoring trailing garbage.
    ///
    /// `"80"`, `" 80 "`, `"+80"`, `"80px"` and `"80.5"` all read as 80. Input without leading
    /// digits, zero and negative values are rejected. Values beyond `usize::MAX` saturate.
    pub fn parse(input: &str) -> Result<Self, MeasureError> {
        let trimmed = input.trim_start();
        let (negative, unsigned) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let digits_len = unsigned
            .bytes()
            .take_while(|byte| byte.is_ascii_digit())
            .count();
        if digits_len == 0 {
            return Err(MeasureError::invalid_wrap_width(input));
        }

        let value = unsigned[..digits_len].bytes().fold(0usize, |acc, byte| {
            acc.saturating_mul(10)
                .saturating_add(usize::from(byte - b'0'))
        });
        if negative || value == 0 {
            return Err(MeasureError::invalid_wrap_width(input));
        }
        Self::new(value).map_err(|_| MeasureError::invalid_wrap_width(input))
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for WrapWidth {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for WrapWidth {
    type Err = MeasureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for WrapWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<NonZeroUsize> for WrapWidth {
    fn from(width: NonZeroUsize) -> Self {
        Self(width)
    }
}

/// Number of `'\n'`-separated segments. Empty text is one empty line.
pub fn raw_line_count(text: &str) -> usize {
    text.split('\n').count()
}

pub fn wrapped_line_count(text: &str, wrap_width: WrapWidth) -> usize {
    wrapped_line_count_with(&UnicodeSegmenter, text, wrap_width)
}

/// Sum of `ceil(graphemes(line) / wrap_width)` over raw lines; empty lines contribute 0.
pub fn wrapped_line_count_with(
    segmenter: &dyn GraphemeSegmenter,
    text: &str,
    wrap_width: WrapWidth,
) -> usize {
    let width = wrap_width.get();
    text.split('\n')
        .map(|line| segmenter.count(line).div_ceil(width))
        .sum()
}

/// Splits every raw line into rows of at most `wrap_width` graphemes.
///
/// An empty raw line still yields one empty row so the rows can be displayed.
pub fn wrap_graphemes(
    segmenter: &dyn GraphemeSegmenter,
    text: &str,
    wrap_width: WrapWidth,
) -> Vec<String> {
    let width = wrap_width.get();
    let mut rows = Vec::new();
    for line in text.split('\n') {
        let mut row = String::new();
        let mut in_row = 0;
        for grapheme in segmenter.segment(line) {
            if in_row == width {
                rows.push(std::mem::take(&mut row));
                in_row = 0;
            }
            row.push_str(grapheme);
            in_row += 1;
        }
        rows.push(row);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::{raw_line_count, wrap_graphemes, wrapped_line_count, WrapWidth};
    use crate::core::text::grapheme::UnicodeSegmenter;
    use crate::error::MeasureError;

    fn width(value: usize) -> WrapWidth {
        WrapWidth::new(value).expect("positive width")
    }

    #[test]
    fn raw_lines_follow_split_semantics() {
        assert_eq!(raw_line_count(""), 1);
        assert_eq!(raw_line_count("a\nb\nc"), 3);
        assert_eq!(raw_line_count("trailing\n"), 2);
        assert_eq!(raw_line_count("\n\n"), 3);
        assert_eq!(raw_line_count("crlf\r\nline"), 2);
    }

    #[test]
    fn wrapped_lines_round_up_per_line() {
        assert_eq!(wrapped_line_count("", WrapWidth::DEFAULT), 0);
        assert_eq!(wrapped_line_count(&"a".repeat(85), width(80)), 2);
        assert_eq!(wrapped_line_count(&"a".repeat(80), width(80)), 1);
        assert_eq!(wrapped_line_count("abc\n\nabcd", width(2)), 4);
        assert_eq!(wrapped_line_count("😀😀😀", width(2)), 2);
    }

    #[test]
    fn zero_width_is_rejected() {
        assert_eq!(
            WrapWidth::new(0),
            Err(MeasureError::InvalidWrapWidth {
                input: "0".to_string()
            })
        );
    }

    #[test]
    fn parse_reads_leading_integer() {
        assert_eq!(WrapWidth::parse("80").map(WrapWidth::get), Ok(80));
        assert_eq!(WrapWidth::parse("  40 ").map(WrapWidth::get), Ok(40));
        assert_eq!(WrapWidth::parse("+12").map(WrapWidth::get), Ok(12));
        assert_eq!(WrapWidth::parse("12.9").map(WrapWidth::get), Ok(12));
        assert_eq!(WrapWidth::parse("20px").map(WrapWidth::get), Ok(20));
        assert_eq!(
            WrapWidth::parse("99999999999999999999999999").map(WrapWidth::get),
            Ok(usize::MAX)
        );
    }

    #[test]
    fn parse_rejects_non_positive_and_non_numeric() {
        for input in ["", "  ", "abc", "0", "000", "-5", "-0", "+", "x80", ".5"] {
            assert_eq!(
                WrapWidth::parse(input),
                Err(MeasureError::invalid_wrap_width(input)),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn wrap_rows_match_wrapped_count_for_non_empty_lines() {
        let rows = wrap_graphemes(&UnicodeSegmenter, "abcde\n\nあい", width(2));
        assert_eq!(rows, vec!["ab", "cd", "e", "", "あい"]);
        assert_eq!(wrapped_line_count("abcde\n\nあい", width(2)), 4);
    }
}
