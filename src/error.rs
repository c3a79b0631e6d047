use thiserror::Error;

/// Errors raised while validating measurement inputs.
///
/// Each error is local to the metric that needed the input: an unsupported
/// encoding only fails its own byte-length readout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeasureError {
    #[error("invalid wrap width {input:?}: expected a positive integer")]
    InvalidWrapWidth { input: String },

    #[error("unsupported encoding '{name}': expected UTF-8 or Shift_JIS")]
    UnsupportedEncoding { name: String },
}

impl MeasureError {
    #[must_use]
    pub fn invalid_wrap_width(input: impl Into<String>) -> Self {
        Self::InvalidWrapWidth {
            input: input.into(),
        }
    }

    #[must_use]
    pub fn unsupported_encoding(name: impl Into<String>) -> Self {
        Self::UnsupportedEncoding { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::MeasureError;

    #[test]
    fn messages_name_the_rejected_input() {
        assert_eq!(
            MeasureError::invalid_wrap_width("abc").to_string(),
            "invalid wrap width \"abc\": expected a positive integer"
        );
        assert_eq!(
            MeasureError::unsupported_encoding("EUC-JP").to_string(),
            "unsupported encoding 'EUC-JP': expected UTF-8 or Shift_JIS"
        );
    }
}
