//! Command-line front end for `text_counter`.
//!
//! Reads text from a file or stdin and prints the two-panel readout, or JSON with `--json`.
//! With `--interactive`, every stdin line is appended to the text (or handled as a `/command`)
//! and the readout is re-rendered after each change.
//!
//! Defaults come from the environment (see `text_counter::config::EnvConfig`); flags override
//! them.

pub mod app;
pub mod commands;
