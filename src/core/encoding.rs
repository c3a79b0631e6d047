//! Byte transcoding capability and byte-length counts.
//!
//! Shift_JIS follows the WHATWG mapping, except that U+2212 MINUS SIGN has no representation
//! (only U+FF0D FULLWIDTH HYPHEN-MINUS maps to 0x81 0x7C). A character with no Shift_JIS
//! representation is replaced by the single byte `?` and recorded as an
//! [`UnmappableCharacter`]; the byte count includes the replacement.

use std::fmt;
use std::str::FromStr;

use encoding_rs::{EncoderResult, SHIFT_JIS};
use serde::Serialize;

use crate::error::MeasureError;

pub const SUBSTITUTE_BYTE: u8 = b'?';

const ENCODE_CHUNK: usize = 1024;

const MINUS_SIGN: char = '\u{2212}';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Encoding {
    #[serde(rename = "UTF-8")]
    Utf8,
    #[serde(rename = "Shift_JIS")]
    ShiftJis,
}

impl Encoding {
    pub fn name(self) -> &'static str {
        match self {
            Encoding::Utf8 => "UTF-8",
            Encoding::ShiftJis => "Shift_JIS",
        }
    }

    /// Accepts the canonical names case-insensitively plus the common aliases.
    pub fn from_name(name: &str) -> Result<Self, MeasureError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(Encoding::Utf8),
            "shift_jis" | "shift-jis" | "sjis" => Ok(Encoding::ShiftJis),
            _ => Err(MeasureError::unsupported_encoding(name)),
        }
    }
}

impl FromStr for Encoding {
    type Err = MeasureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A character that was replaced during transcoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UnmappableCharacter {
    pub ch: char,
    /// Byte offset of the character in the source text.
    pub offset: usize,
}

impl fmt::Display for UnmappableCharacter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "U+{:04X} at byte {} substituted with '{}'",
            u32::from(self.ch),
            self.offset,
            char::from(SUBSTITUTE_BYTE)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Encoded {
    pub bytes: Vec<u8>,
    pub substitutions: Vec<UnmappableCharacter>,
}

/// Maps text to bytes in a target encoding.
pub trait ByteEncoder: Send + Sync {
    fn encode(&self, text: &str, encoding: Encoding) -> Encoded;
}

/// [`ByteEncoder`] backed by `encoding_rs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardEncoder;

impl ByteEncoder for StandardEncoder {
    fn encode(&self, text: &str, encoding: Encoding) -> Encoded {
        match encoding {
            Encoding::Utf8 => Encoded {
                bytes: text.as_bytes().to_vec(),
                substitutions: Vec::new(),
            },
            Encoding::ShiftJis => encode_shift_jis(text),
        }
    }
}

fn encode_shift_jis(text: &str) -> Encoded {
    let mut encoded = Encoded {
        bytes: Vec::with_capacity(text.len()),
        substitutions: Vec::new(),
    };
    let mut start = 0;
    for (offset, _) in text.match_indices(MINUS_SIGN) {
        encode_shift_jis_run(&text[start..offset], start, &mut encoded);
        substitute(&mut encoded, MINUS_SIGN, offset);
        start = offset + MINUS_SIGN.len_utf8();
    }
    encode_shift_jis_run(&text[start..], start, &mut encoded);
    encoded
}

/// Encodes `run`, which starts at byte `base` of the source text.
fn encode_shift_jis_run(run: &str, base: usize, encoded: &mut Encoded) {
    let mut encoder = SHIFT_JIS.new_encoder();
    let mut buffer = [0u8; ENCODE_CHUNK];
    let mut consumed = 0;

    loop {
        let (result, read, written) =
            encoder.encode_from_utf8_without_replacement(&run[consumed..], &mut buffer, true);
        consumed += read;
        encoded.bytes.extend_from_slice(&buffer[..written]);
        match result {
            EncoderResult::InputEmpty => break,
            EncoderResult::OutputFull => {}
            EncoderResult::Unmappable(ch) => {
                substitute(encoded, ch, base + consumed - ch.len_utf8());
            }
        }
    }
}

fn substitute(encoded: &mut Encoded, ch: char, offset: usize) {
    encoded.bytes.push(SUBSTITUTE_BYTE);
    encoded.substitutions.push(UnmappableCharacter { ch, offset });
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ByteLength {
    pub bytes: usize,
    pub substitutions: Vec<UnmappableCharacter>,
}

pub fn byte_length(text: &str, encoding: Encoding) -> ByteLength {
    byte_length_with(&StandardEncoder, text, encoding)
}

pub fn byte_length_with(encoder: &dyn ByteEncoder, text: &str, encoding: Encoding) -> ByteLength {
    let encoded = encoder.encode(text, encoding);
    for substitution in &encoded.substitutions {
        tracing::debug!(encoding = encoding.name(), "unmappable character: {substitution}");
    }
    ByteLength {
        bytes: encoded.bytes.len(),
        substitutions: encoded.substitutions,
    }
}

/// Resolves `name` and measures; unknown names fail without affecting other encodings.
pub fn byte_length_by_name(text: &str, name: &str) -> Result<ByteLength, MeasureError> {
    let encoding = Encoding::from_name(name)?;
    Ok(byte_length(text, encoding))
}
