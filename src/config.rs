//! Environment configuration.

use std::env;

use crate::core::measure::DEFAULT_ENCODING_NAMES;

pub const DEFAULT_WRAP_WIDTH: &str = "80";

#[derive(Debug, Clone)]
pub struct EnvConfig {
    /// Raw wrap width; validated at measurement time.
    pub wrap_width: String,
    pub encodings: Vec<String>,
    pub log_file: Option<String>,
    pub debug: bool,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self {
            wrap_width: env_string_opt("TEXT_COUNTER_WRAP_WIDTH")
                .unwrap_or_else(|| DEFAULT_WRAP_WIDTH.to_string()),
            encodings: env_string_opt("TEXT_COUNTER_ENCODINGS")
                .map(|value| split_list(&value))
                .unwrap_or_else(default_encodings),
            log_file: env_string_opt("TEXT_COUNTER_LOG"),
            debug: env_flag("TEXT_COUNTER_DEBUG"),
        }
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            wrap_width: DEFAULT_WRAP_WIDTH.to_string(),
            encodings: default_encodings(),
            log_file: None,
            debug: false,
        }
    }
}

fn default_encodings() -> Vec<String> {
    DEFAULT_ENCODING_NAMES
        .iter()
        .map(|name| (*name).to_string())
        .collect()
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn env_flag(key: &str) -> bool {
    env::var(key).map(|value| value == "1").unwrap_or(false)
}

fn env_string_opt(key: &str) -> Option<String> {
    env::var(key).ok().and_then(|value| {
        if value.trim().is_empty() {
            None
        } else {
            Some(value)
        }
    })
}
