//! Aggregated metrics for one snapshot of input.
//!
//! [`Measurer`] holds the injected capabilities; [`MeasureRequest`] carries the immutable inputs.
//! Every call recomputes from scratch.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::core::encoding::{
    byte_length_with, ByteEncoder, ByteLength, Encoding, StandardEncoder,
};
use crate::core::text::grapheme::{
    grapheme_count_with, grapheme_count_without_whitespace_with, GraphemeSegmenter,
    UnicodeSegmenter,
};
use crate::core::text::lines::{raw_line_count, wrapped_line_count_with, WrapWidth};
use crate::core::text::width::weighted_width_count_with;
use crate::error::MeasureError;

pub const DEFAULT_ENCODING_NAMES: [&str; 2] = ["UTF-8", "Shift_JIS"];

/// Inputs for one measurement. The wrap width and encodings stay in their raw user form so
/// invalid values can be reported next to the metric they affect.
#[derive(Debug, Clone, Copy)]
pub struct MeasureRequest<'a> {
    pub text: &'a str,
    pub wrap_width: &'a str,
    pub encodings: &'a [&'a str],
}

impl<'a> MeasureRequest<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            wrap_width: "80",
            encodings: &DEFAULT_ENCODING_NAMES,
        }
    }

    pub fn with_wrap_width(mut self, wrap_width: &'a str) -> Self {
        self.wrap_width = wrap_width;
        self
    }

    pub fn with_encodings(mut self, encodings: &'a [&'a str]) -> Self {
        self.encodings = encodings;
        self
    }
}

/// The wrap width actually used, and whether the raw input had to be replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapWidthReadout {
    pub width: WrapWidth,
    pub input: String,
    pub error: Option<MeasureError>,
}

impl WrapWidthReadout {
    pub fn resolve(input: &str) -> Self {
        match WrapWidth::parse(input) {
            Ok(width) => Self {
                width,
                input: input.to_string(),
                error: None,
            },
            Err(err) => {
                tracing::warn!("{err}; falling back to {}", WrapWidth::DEFAULT);
                Self {
                    width: WrapWidth::DEFAULT,
                    input: input.to_string(),
                    error: Some(err),
                }
            }
        }
    }

    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ByteReadout {
    pub name: String,
    pub result: Result<ByteLength, MeasureError>,
}

impl ByteReadout {
    pub fn encoding(&self) -> Option<Encoding> {
        Encoding::from_name(&self.name).ok()
    }
}

impl Serialize for ByteReadout {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ByteReadout", 3)?;
        state.serialize_field("encoding", &self.name)?;
        match &self.result {
            Ok(length) => {
                state.serialize_field("bytes", &length.bytes)?;
                state.serialize_field("substituted", &length.substitutions.len())?;
            }
            Err(err) => {
                state.serialize_field("error", &err.to_string())?;
            }
        }
        state.end()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextMetrics {
    pub graphemes: usize,
    pub graphemes_without_whitespace: usize,
    pub weighted_width: f64,
    pub lines: usize,
    pub wrap_width: WrapWidthReadout,
    pub wrapped_lines: usize,
    pub byte_lengths: Vec<ByteReadout>,
}

impl TextMetrics {
    pub fn byte_length(&self, encoding: Encoding) -> Option<usize> {
        self.byte_lengths
            .iter()
            .filter(|readout| readout.encoding() == Some(encoding))
            .find_map(|readout| readout.result.as_ref().ok().map(|length| length.bytes))
    }
}

impl Serialize for TextMetrics {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("TextMetrics", 8)?;
        state.serialize_field("graphemes", &self.graphemes)?;
        state.serialize_field(
            "graphemes_without_whitespace",
            &self.graphemes_without_whitespace,
        )?;
        state.serialize_field("weighted_width", &self.weighted_width)?;
        state.serialize_field("lines", &self.lines)?;
        state.serialize_field("wrap_width", &self.wrap_width.width.get())?;
        state.serialize_field("wrap_width_valid", &self.wrap_width.is_valid())?;
        state.serialize_field("wrapped_lines", &self.wrapped_lines)?;
        state.serialize_field("byte_lengths", &self.byte_lengths)?;
        state.end()
    }
}

/// Computes metrics through injected segmentation and transcoding capabilities.
pub struct Measurer {
    segmenter: Box<dyn GraphemeSegmenter>,
    encoder: Box<dyn ByteEncoder>,
}

impl Measurer {
    pub fn new(segmenter: Box<dyn GraphemeSegmenter>, encoder: Box<dyn ByteEncoder>) -> Self {
        Self { segmenter, encoder }
    }

    pub fn with_segmenter(mut self, segmenter: Box<dyn GraphemeSegmenter>) -> Self {
        self.segmenter = segmenter;
        self
    }

    pub fn with_encoder(mut self, encoder: Box<dyn ByteEncoder>) -> Self {
        self.encoder = encoder;
        self
    }

    pub fn segmenter(&self) -> &dyn GraphemeSegmenter {
        self.segmenter.as_ref()
    }

    pub fn grapheme_count(&self, text: &str) -> usize {
        grapheme_count_with(self.segmenter.as_ref(), text)
    }

    pub fn grapheme_count_without_whitespace(&self, text: &str) -> usize {
        grapheme_count_without_whitespace_with(self.segmenter.as_ref(), text)
    }

    pub fn weighted_width_count(&self, text: &str) -> f64 {
        weighted_width_count_with(self.segmenter.as_ref(), text)
    }

    pub fn raw_line_count(&self, text: &str) -> usize {
        raw_line_count(text)
    }

    pub fn wrapped_line_count(&self, text: &str, wrap_width: WrapWidth) -> usize {
        wrapped_line_count_with(self.segmenter.as_ref(), text, wrap_width)
    }

    pub fn byte_length(&self, text: &str, encoding: Encoding) -> ByteLength {
        byte_length_with(self.encoder.as_ref(), text, encoding)
    }

    pub fn byte_length_by_name(&self, text: &str, name: &str) -> Result<ByteLength, MeasureError> {
        let encoding = Encoding::from_name(name).inspect_err(|err| tracing::warn!("{err}"))?;
        Ok(self.byte_length(text, encoding))
    }

    pub fn measure(&self, request: &MeasureRequest<'_>) -> TextMetrics {
        let text = request.text;
        let wrap_width = WrapWidthReadout::resolve(request.wrap_width);
        let wrapped_lines = self.wrapped_line_count(text, wrap_width.width);
        let byte_lengths = request
            .encodings
            .iter()
            .map(|name| ByteReadout {
                name: (*name).to_string(),
                result: self.byte_length_by_name(text, name),
            })
            .collect();

        TextMetrics {
            graphemes: self.grapheme_count(text),
            graphemes_without_whitespace: self.grapheme_count_without_whitespace(text),
            weighted_width: self.weighted_width_count(text),
            lines: self.raw_line_count(text),
            wrap_width,
            wrapped_lines,
            byte_lengths,
        }
    }
}

impl Default for Measurer {
    fn default() -> Self {
        Self::new(Box::new(UnicodeSegmenter), Box::new(StandardEncoder))
    }
}

#[cfg(test)]
mod tests {
    use super::{MeasureRequest, Measurer, WrapWidthReadout};
    use crate::core::encoding::{ByteEncoder, Encoded, Encoding};
    use crate::core::text::grapheme::{CodePointSegmenter, GraphemeSegmenter};
    use crate::core::text::lines::WrapWidth;
    use crate::error::MeasureError;

    /// Treats every byte as one segment.
    struct ByteSegmenter;

    impl GraphemeSegmenter for ByteSegmenter {
        fn segment<'a>(&self, text: &'a str) -> Box<dyn Iterator<Item = &'a str> + 'a> {
            Box::new(text.char_indices().flat_map(move |(idx, ch)| {
                let len = ch.len_utf8();
                std::iter::repeat(&text[idx..idx + len]).take(len)
            }))
        }
    }

    struct FixedEncoder(usize);

    impl ByteEncoder for FixedEncoder {
        fn encode(&self, _text: &str, _encoding: Encoding) -> Encoded {
            Encoded {
                bytes: vec![0; self.0],
                substitutions: Vec::new(),
            }
        }
    }

    #[test]
    fn default_measurer_reports_every_metric() {
        let measurer = Measurer::default();
        let metrics = measurer.measure(&MeasureRequest::new("Aあ 😀\nxyz").with_wrap_width("2"));

        assert_eq!(metrics.graphemes, 8);
        assert_eq!(metrics.graphemes_without_whitespace, 6);
        assert_eq!(metrics.weighted_width, 0.5 + 1.0 + 0.5 + 1.0 + 0.5 + 1.5);
        assert_eq!(metrics.lines, 2);
        assert_eq!(metrics.wrap_width.width.get(), 2);
        assert!(metrics.wrap_width.is_valid());
        assert_eq!(metrics.wrapped_lines, 4);
        assert_eq!(metrics.byte_length(Encoding::Utf8), Some(13));
        assert_eq!(metrics.byte_length(Encoding::ShiftJis), Some(9));
    }

    #[test]
    fn invalid_wrap_width_falls_back_to_default() {
        let readout = WrapWidthReadout::resolve("abc");
        assert_eq!(readout.width, WrapWidth::DEFAULT);
        assert_eq!(readout.error, Some(MeasureError::invalid_wrap_width("abc")));

        let metrics = Measurer::default()
            .measure(&MeasureRequest::new(&"a".repeat(85)).with_wrap_width("-3"));
        assert!(!metrics.wrap_width.is_valid());
        assert_eq!(metrics.wrapped_lines, 2);
    }

    #[test]
    fn unsupported_encoding_only_fails_its_readout() {
        let names = ["UTF-8", "EUC-JP", "Shift_JIS"];
        let metrics =
            Measurer::default().measure(&MeasureRequest::new("あ").with_encodings(&names));

        assert_eq!(metrics.graphemes, 1);
        assert_eq!(metrics.byte_lengths.len(), 3);
        assert_eq!(metrics.byte_lengths[0].result.as_ref().map(|l| l.bytes), Ok(3));
        assert_eq!(
            metrics.byte_lengths[1].result,
            Err(MeasureError::unsupported_encoding("EUC-JP"))
        );
        assert_eq!(metrics.byte_lengths[2].result.as_ref().map(|l| l.bytes), Ok(2));
    }

    #[test]
    fn injected_capabilities_drive_the_counts() {
        let measurer = Measurer::default()
            .with_segmenter(Box::new(ByteSegmenter))
            .with_encoder(Box::new(FixedEncoder(7)));

        assert_eq!(measurer.grapheme_count("あa"), 4);
        assert_eq!(measurer.weighted_width_count("あa"), 3.5);
        assert_eq!(measurer.byte_length("anything", Encoding::Utf8).bytes, 7);
    }

    #[test]
    fn code_point_fallback_counts_clusters_per_code_point() {
        let measurer = Measurer::default().with_segmenter(Box::new(CodePointSegmenter));
        assert_eq!(measurer.grapheme_count("👍🏽"), 2);
        assert_eq!(measurer.grapheme_count("😀"), 1);
    }

    #[test]
    fn measuring_twice_is_identical() {
        let measurer = Measurer::default();
        let request = MeasureRequest::new("同じ入力\nsame input 👨‍👩‍👧").with_wrap_width("3");
        assert_eq!(measurer.measure(&request), measurer.measure(&request));
    }
}
