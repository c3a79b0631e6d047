//! Presentation widgets for the two-panel readout.

pub mod columns;
pub mod readout;
pub mod text_panel;

pub use columns::Columns;
pub use readout::{Readout, ReadoutPanel};
pub use text_panel::TextPanel;
