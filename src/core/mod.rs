//! Measurement core: text metrics, transcoding, and the component interface used by widgets.

pub mod component;
pub mod encoding;
pub mod measure;
pub mod text;
