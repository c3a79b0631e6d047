//! Component trait.

/// Renderable component interface.
pub trait Component {
    /// Render to a list of lines at the given width.
    ///
    /// Every returned line must fit within `width` display columns.
    fn render(&mut self, width: usize) -> Vec<String>;
}
