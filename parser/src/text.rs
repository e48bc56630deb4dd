//! Decoding of text values.
//!
//! Only the default repertoire (read as ISO-8859-1)
//! and UTF-8 (`ISO_IR 192`) are distinguished.
//! Any other declared character set is read with the default repertoire.
use encoding::all::{ISO_8859_1, UTF_8};
use encoding::{DecoderTrap, Encoding};

/// A character set for decoding text values.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CharacterSet {
    /// The default character repertoire,
    /// decoded so that every byte maps to exactly one character.
    #[default]
    Default,
    /// UTF-8 (`ISO_IR 192`).
    Utf8,
}

impl CharacterSet {
    /// Obtain the character set for the given Specific Character Set term.
    ///
    /// Returns `None` if the term is not supported.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim_matches(|c: char| c <= ' ') {
            "" | "ISO_IR 6" | "ISO_IR 100" | "ISO 2022 IR 6" | "ISO 2022 IR 100" => {
                Some(CharacterSet::Default)
            }
            "ISO_IR 192" => Some(CharacterSet::Utf8),
            _ => None,
        }
    }

    /// Decode the given bytes into text.
    ///
    /// Malformed sequences are replaced rather than rejected.
    pub fn decode(self, bytes: &[u8]) -> String {
        let out = match self {
            CharacterSet::Default => ISO_8859_1.decode(bytes, DecoderTrap::Replace),
            CharacterSet::Utf8 => UTF_8.decode(bytes, DecoderTrap::Replace),
        };
        out.unwrap_or_else(|e| e.into_owned())
    }
}
