//! Labeled readout panel.

use crate::core::component::Component;
use crate::core::encoding::Encoding;
use crate::core::measure::{ByteReadout, TextMetrics};
use crate::core::text::utils::truncate_to_width;

const VALUE_INDENT: &str = "  ";

/// One label/value pair, optionally annotated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Readout {
    pub label: String,
    pub value: String,
    pub note: Option<String>,
}

impl Readout {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Formats a weighted width without a trailing `.0` for whole numbers.
pub fn format_weighted(value: f64) -> String {
    format!("{value}")
}

pub fn readouts_from_metrics(metrics: &TextMetrics, mono: bool) -> Vec<Readout> {
    let mut readouts = vec![
        Readout::new("文字数", format!("{}文字", metrics.graphemes)),
        Readout::new(
            "文字数（空白を除く）",
            format!("{}文字", metrics.graphemes_without_whitespace),
        ),
        Readout::new(
            "全角文字数（半角文字を0.5文字でカウントする）",
            format!("{}文字", format_weighted(metrics.weighted_width)),
        ),
        Readout::new("行数", format!("{}行", metrics.lines)),
    ];

    let wrap = &metrics.wrap_width;
    let mut wrap_readout = Readout::new("1行の文字数", wrap.width.to_string());
    if !wrap.is_valid() {
        wrap_readout = wrap_readout.with_note(format!(
            "不正な値「{}」のため{}を使用",
            wrap.input, wrap.width
        ));
    }
    readouts.push(wrap_readout);
    readouts.push(Readout::new(
        "行数（1行の文字数で計算）",
        format!("{}行", metrics.wrapped_lines),
    ));

    readouts.extend(metrics.byte_lengths.iter().map(byte_readout));

    readouts.push(Readout::new(
        "等幅フォントで表示する",
        if mono { "[x]" } else { "[ ]" },
    ));
    readouts
}

fn byte_readout(readout: &ByteReadout) -> Readout {
    let name = readout
        .encoding()
        .map(Encoding::name)
        .unwrap_or(readout.name.as_str());
    let label = format!("バイト数（{name}）");
    match &readout.result {
        Ok(length) if length.substitutions.is_empty() => {
            Readout::new(label, format!("{}バイト", length.bytes))
        }
        Ok(length) => Readout::new(label, format!("{}バイト", length.bytes))
            .with_note(format!("{}文字を置換", length.substitutions.len())),
        Err(err) => Readout::new(label, err.to_string()),
    }
}

pub struct ReadoutPanel {
    readouts: Vec<Readout>,
}

impl ReadoutPanel {
    pub fn new(readouts: Vec<Readout>) -> Self {
        Self { readouts }
    }

    pub fn from_metrics(metrics: &TextMetrics, mono: bool) -> Self {
        Self::new(readouts_from_metrics(metrics, mono))
    }
}

impl Component for ReadoutPanel {
    fn render(&mut self, width: usize) -> Vec<String> {
        if width == 0 {
            return Vec::new();
        }

        let value_width = width.saturating_sub(VALUE_INDENT.len());
        let mut lines = Vec::with_capacity(self.readouts.len() * 2);
        for readout in &self.readouts {
            lines.push(truncate_to_width(&readout.label, width, "…", true));
            let value = match &readout.note {
                Some(note) => format!("{} ({note})", readout.value),
                None => readout.value.clone(),
            };
            lines.push(format!(
                "{VALUE_INDENT}{}",
                truncate_to_width(&value, value_width, "…", true)
            ));
        }
        lines
    }
}
