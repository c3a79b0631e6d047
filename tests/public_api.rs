#![allow(unused_imports)]

use text_counter::config::EnvConfig;
use text_counter::logging;
use text_counter::{
    byte_length, byte_length_by_name, classify_grapheme, display_width, grapheme_count,
    grapheme_count_without_whitespace, raw_line_count, render_report, weighted_width_count,
    wrapped_line_count, ByteEncoder, ByteLength, ByteReadout, CharWidthClass, CodePointSegmenter,
    Columns, Component, Encoded, Encoding, GraphemeSegmenter, MeasureError, MeasureRequest,
    Measurer, Readout, ReadoutPanel, Report, ReportOptions, StandardEncoder, TextMetrics,
    TextPanel, UnicodeSegmenter, UnmappableCharacter, WrapWidth, WrapWidthReadout,
};

#[test]
fn public_api_exports_compile() {}
