//! Text panel: the entered text, wrapped to the configured wrap width.

use crate::core::component::Component;
use crate::core::text::grapheme::GraphemeSegmenter;
use crate::core::text::lines::{wrap_graphemes, WrapWidth};
use crate::core::text::utils::truncate_to_width;
use crate::core::text::width::tab_width;

pub const TEXT_LABEL: &str = "カウントしたいテキスト：";
pub const PLACEHOLDER: &str = "ここにテキストを入力...";
const TAB_MARKER: &str = "→";

pub struct TextPanel {
    rows: Vec<String>,
    mono: bool,
}

impl TextPanel {
    /// Rows are cut every `wrap_width` graphemes, the same unit the wrapped line count uses.
    pub fn new(
        segmenter: &dyn GraphemeSegmenter,
        text: &str,
        wrap_width: WrapWidth,
        mono: bool,
    ) -> Self {
        let rows = if text.is_empty() {
            Vec::new()
        } else {
            wrap_graphemes(segmenter, text, wrap_width)
        };
        Self { rows, mono }
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    fn display_row(&self, row: &str) -> String {
        if self.mono {
            row.replace('\t', &" ".repeat(tab_width()))
        } else {
            row.replace('\t', TAB_MARKER)
        }
    }
}

impl Component for TextPanel {
    fn render(&mut self, width: usize) -> Vec<String> {
        if width == 0 {
            return Vec::new();
        }

        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        lines.push(truncate_to_width(TEXT_LABEL, width, "…", true));
        if self.rows.is_empty() {
            lines.push(truncate_to_width(PLACEHOLDER, width, "…", true));
            return lines;
        }
        for row in &self.rows {
            let row = self.display_row(row.trim_end_matches('\r'));
            lines.push(truncate_to_width(&row, width, "…", true));
        }
        lines
    }
}
