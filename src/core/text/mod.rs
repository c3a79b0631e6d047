//! Text metrics (grapheme counts, width weighting, line counts) and display-width helpers.
//!
//! These helpers are pure (string in/number out) and live under `core` so widgets can depend on
//! them without importing anything from the render layer.

pub mod grapheme;
pub mod lines;
pub mod utils;
pub mod width;
