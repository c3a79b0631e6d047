//! Grapheme-aware text counter.
//!
//! Every metric is a pure function of its inputs and is recomputed on each call; nothing is
//! cached between measurements.
//!
//! # Public API Overview
//! - Count user-perceived characters with [`grapheme_count`] and
//!   [`grapheme_count_without_whitespace`].
//! - Weight half-width (ASCII) graphemes as 0.5 with [`weighted_width_count`].
//! - Count raw and wrapped lines with [`raw_line_count`] and [`wrapped_line_count`].
//! - Measure UTF-8 and Shift_JIS byte lengths with [`byte_length`].
//! - Aggregate everything through [`Measurer`], which takes injected [`GraphemeSegmenter`] and
//!   [`ByteEncoder`] capabilities, and render it with [`render_report`].
//!
//! ```
//! use text_counter::{byte_length, grapheme_count, weighted_width_count, Encoding};
//!
//! assert_eq!(grapheme_count("👍🏽あ"), 2);
//! assert_eq!(weighted_width_count("Aあ"), 1.5);
//! assert_eq!(byte_length("あ", Encoding::ShiftJis).bytes, 2);
//! ```

pub mod config;
pub mod logging;

pub mod core;
pub mod error;
pub mod report;
pub mod widgets;

pub use crate::error::MeasureError;

/// Grapheme segmentation capability and counts.
pub use crate::core::text::grapheme::{
    grapheme_count, grapheme_count_without_whitespace, CodePointSegmenter, GraphemeSegmenter,
    UnicodeSegmenter,
};
/// Line counts and the validated wrap width.
pub use crate::core::text::lines::{raw_line_count, wrapped_line_count, WrapWidth};
/// Half-width/full-width weighting and display width.
pub use crate::core::text::width::{
    classify_grapheme, display_width, weighted_width_count, CharWidthClass,
};

/// Byte transcoding capability and byte lengths.
pub use crate::core::encoding::{
    byte_length, byte_length_by_name, ByteEncoder, ByteLength, Encoded, Encoding,
    StandardEncoder, UnmappableCharacter,
};

/// Aggregated measurement.
pub use crate::core::measure::{
    ByteReadout, MeasureRequest, Measurer, TextMetrics, WrapWidthReadout,
};

/// Presentation.
pub use crate::core::component::Component;
pub use crate::report::{render_report, Report, ReportOptions};
pub use crate::widgets::{Columns, Readout, ReadoutPanel, TextPanel};
