//! One-shot rendering of text plus its metrics as the two-panel readout.

use crate::core::component::Component;
use crate::core::measure::{MeasureRequest, Measurer, TextMetrics};
use crate::widgets::{Columns, ReadoutPanel, TextPanel};

pub const DEFAULT_REPORT_WIDTH: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Total terminal columns available.
    pub width: usize,
    /// Monospace display preference; affects rendering only.
    pub mono: bool,
    /// Render only the readout panel.
    pub readouts_only: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_REPORT_WIDTH,
            mono: false,
            readouts_only: false,
        }
    }
}

pub struct Report {
    pub metrics: TextMetrics,
    pub lines: Vec<String>,
}

/// Measures `request` and renders the panels in one pass.
pub fn render_report(
    measurer: &Measurer,
    request: &MeasureRequest<'_>,
    options: ReportOptions,
) -> Report {
    let metrics = measurer.measure(request);
    let lines = render_metrics(measurer, request.text, &metrics, options);
    Report { metrics, lines }
}

/// Renders already computed metrics. Trailing padding is trimmed from every line.
pub fn render_metrics(
    measurer: &Measurer,
    text: &str,
    metrics: &TextMetrics,
    options: ReportOptions,
) -> Vec<String> {
    let readouts = ReadoutPanel::from_metrics(metrics, options.mono);
    let mut root: Box<dyn Component> = if options.readouts_only {
        Box::new(readouts)
    } else {
        let text_panel = TextPanel::new(
            measurer.segmenter(),
            text,
            metrics.wrap_width.width,
            options.mono,
        );
        Box::new(Columns::new(Box::new(text_panel), Box::new(readouts)))
    };

    root.render(options.width)
        .into_iter()
        .map(|line| line.trim_end().to_string())
        .collect()
}
