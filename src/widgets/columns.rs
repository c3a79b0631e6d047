//! Two-column layout: a wide primary panel beside a narrow secondary panel.

use crate::core::component::Component;
use crate::core::text::utils::pad_to_width;

const SEPARATOR: &str = " │ ";
const SEPARATOR_WIDTH: usize = 3;

pub struct Columns {
    left: Box<dyn Component>,
    right: Box<dyn Component>,
    /// Share of the content width given to the left column, as `numerator / denominator`.
    left_share: (usize, usize),
}

impl Columns {
    /// Two thirds for the left column, one third for the right.
    pub fn new(left: Box<dyn Component>, right: Box<dyn Component>) -> Self {
        Self::with_share(left, right, 2, 3)
    }

    pub fn with_share(
        left: Box<dyn Component>,
        right: Box<dyn Component>,
        numerator: usize,
        denominator: usize,
    ) -> Self {
        let denominator = denominator.max(1);
        Self {
            left,
            right,
            left_share: (numerator.min(denominator), denominator),
        }
    }

    fn split(&self, width: usize) -> (usize, usize) {
        let content = width.saturating_sub(SEPARATOR_WIDTH);
        let (numerator, denominator) = self.left_share;
        let left = content / denominator * numerator
            + (content % denominator).saturating_mul(numerator) / denominator;
        (left, content - left)
    }
}

impl Component for Columns {
    fn render(&mut self, width: usize) -> Vec<String> {
        let (left_width, right_width) = self.split(width);
        if left_width == 0 || right_width == 0 {
            // Too narrow for two columns: stack them instead.
            let mut lines = self.left.render(width);
            lines.extend(self.right.render(width));
            return lines;
        }

        let left = self.left.render(left_width);
        let right = self.right.render(right_width);
        let rows = left.len().max(right.len());

        let mut lines = Vec::with_capacity(rows);
        for row in 0..rows {
            let left_cell = left.get(row).map(String::as_str).unwrap_or("");
            let right_cell = right.get(row).map(String::as_str).unwrap_or("");
            lines.push(format!(
                "{}{SEPARATOR}{}",
                pad_to_width(left_cell, left_width),
                pad_to_width(right_cell, right_width)
            ));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::Columns;
    use crate::core::component::Component;
    use crate::core::text::width::display_width;

    struct StaticComponent {
        lines: Vec<String>,
    }

    impl Component for StaticComponent {
        fn render(&mut self, _width: usize) -> Vec<String> {
            self.lines.clone()
        }
    }

    fn component(lines: &[&str]) -> Box<dyn Component> {
        Box::new(StaticComponent {
            lines: lines.iter().map(|line| line.to_string()).collect(),
        })
    }

    #[test]
    fn columns_pad_the_shorter_side() {
        let mut columns = Columns::new(component(&["left"]), component(&["r1", "r2"]));
        let lines = columns.render(12);
        assert_eq!(lines, vec!["left   │ r1 ", "       │ r2 "]);
        assert!(lines.iter().all(|line| display_width(line) == 12));
    }

    #[test]
    fn full_width_cells_align_by_columns() {
        let mut columns = Columns::with_share(component(&["行"]), component(&["数"]), 1, 2);
        let lines = columns.render(9);
        assert_eq!(lines, vec!["行  │ 数 "]);
    }

    #[test]
    fn huge_widths_split_without_overflow() {
        let columns = Columns::new(component(&["a"]), component(&["b"]));
        let content = usize::MAX - 3;
        let (left, right) = columns.split(usize::MAX);
        assert_eq!(left + right, content);
        assert_eq!(left, content / 3 * 2);
        assert_eq!(columns.split(12), (6, 3));
    }

    #[test]
    fn narrow_width_stacks_panels() {
        let mut columns = Columns::new(component(&["a"]), component(&["b"]));
        assert_eq!(columns.render(3), vec!["a", "b"]);
    }
}
