//! This module includes the tagged union of decoded DICOM element values.
//!
//! Values are produced by the element decoder in the parser crate.
//! Text values are kept exactly as read,
//! trimming is a concern of the accessors.

use smallvec::SmallVec;
use std::borrow::Cow;

/// An aggregation of one or more elements in a value.
pub type C<T> = SmallVec<[T; 2]>;

/// A function which tries to extract a number from text
/// that failed to parse as a plain decimal number.
pub type NumberFallback = fn(&str) -> Option<f64>;

/// A decoded data element value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// No value: either the element had a zero length,
    /// or its value was skipped.
    Empty,
    /// Text, as read from the stream.
    Text(String),
    /// A single unsigned 16-bit integer.
    U16(u16),
    /// A single signed 16-bit integer.
    I16(i16),
    /// A single signed 32-bit integer.
    I32(i32),
    /// A single signed 64-bit integer.
    I64(i64),
    /// A single unsigned 32-bit integer, widened to 64 bits.
    U32(u64),
    /// A single precision floating point number.
    F32(f32),
    /// A double precision floating point number.
    F64(f64),
    /// An attribute tag value, as a (group, element) pair.
    TagPair([u16; 2]),
    /// Multiple unsigned 16-bit integers.
    U16s(C<u16>),
    /// Multiple signed 16-bit integers.
    I16s(C<i16>),
    /// Multiple signed 32-bit integers.
    I32s(C<i32>),
    /// Multiple signed 64-bit integers.
    I64s(C<i64>),
    /// Multiple unsigned 32-bit integers, each widened to 64 bits.
    U32s(C<u64>),
    /// Multiple single precision floating point numbers.
    F32s(C<f32>),
    /// Multiple double precision floating point numbers.
    F64s(C<f64>),
    /// A raw byte blob.
    Bytes(Vec<u8>),
    /// A sequence.
    /// The nested elements are the children of the node
    /// which holds this value.
    Sequence,
}

/// Trim the characters which are not significant at either end of a text value:
/// spaces, control characters and null bytes.
fn trim_text(text: &str) -> &str {
    text.trim_matches(|c: char| c <= ' ')
}

fn join<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\\")
}

impl Value {
    /// Check whether the value holds nothing.
    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Empty)
    }

    /// Check whether this is a sequence value.
    pub fn is_sequence(&self) -> bool {
        matches!(self, Value::Sequence)
    }

    /// Retrieve the number of individual values held.
    ///
    /// Text values count as one value,
    /// regardless of the presence of backslash separators.
    pub fn multiplicity(&self) -> usize {
        match self {
            Value::Empty | Value::Sequence => 0,
            Value::U16s(v) => v.len(),
            Value::I16s(v) => v.len(),
            Value::I32s(v) => v.len(),
            Value::I64s(v) => v.len(),
            Value::U32s(v) => v.len(),
            Value::F32s(v) => v.len(),
            Value::F64s(v) => v.len(),
            _ => 1,
        }
    }

    /// Retrieve the value as a single string, with no leading or trailing whitespace.
    ///
    /// Numbers are formatted in decimal notation,
    /// multiple numbers are joined with a backslash.
    /// Returns `None` for empty values, byte blobs and sequences.
    pub fn to_str(&self) -> Option<Cow<'_, str>> {
        let out = match self {
            Value::Empty | Value::Sequence | Value::Bytes(_) => return None,
            Value::Text(text) => return Some(Cow::Borrowed(trim_text(text))),
            Value::U16(v) => v.to_string(),
            Value::I16(v) => v.to_string(),
            Value::I32(v) => v.to_string(),
            Value::I64(v) => v.to_string(),
            Value::U32(v) => v.to_string(),
            Value::F32(v) => v.to_string(),
            Value::F64(v) => v.to_string(),
            Value::TagPair([g, e]) => format!("({:04X},{:04X})", g, e),
            Value::U16s(v) => join(v),
            Value::I16s(v) => join(v),
            Value::I32s(v) => join(v),
            Value::I64s(v) => join(v),
            Value::U32s(v) => join(v),
            Value::F32s(v) => join(v),
            Value::F64s(v) => join(v),
        };
        Some(Cow::Owned(out))
    }

    /// Retrieve the value as the raw text held, without trimming.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Retrieve the raw bytes of a byte blob value.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Retrieve the value as a number.
    ///
    /// Binary numbers are converted directly,
    /// and for multiple binary numbers the first one is taken.
    /// Text is parsed as a decimal number after trimming,
    /// and when that fails the given fallback gets a chance.
    pub fn to_number_with(&self, fallback: NumberFallback) -> Option<f64> {
        match self {
            Value::Text(text) => {
                let text = trim_text(text);
                text.parse::<f64>().ok().or_else(|| fallback(text))
            }
            Value::U16(v) => Some(f64::from(*v)),
            Value::I16(v) => Some(f64::from(*v)),
            Value::I32(v) => Some(f64::from(*v)),
            Value::I64(v) => Some(*v as f64),
            Value::U32(v) => Some(*v as f64),
            Value::F32(v) => Some(f64::from(*v)),
            Value::F64(v) => Some(*v),
            Value::U16s(v) => v.first().map(|x| f64::from(*x)),
            Value::I16s(v) => v.first().map(|x| f64::from(*x)),
            Value::I32s(v) => v.first().map(|x| f64::from(*x)),
            Value::I64s(v) => v.first().map(|x| *x as f64),
            Value::U32s(v) => v.first().map(|x| *x as f64),
            Value::F32s(v) => v.first().map(|x| f64::from(*x)),
            Value::F64s(v) => v.first().copied(),
            Value::Empty | Value::Sequence | Value::Bytes(_) | Value::TagPair(_) => None,
        }
    }

    /// Retrieve all numbers in the value.
    ///
    /// Text is split on backslashes and each part is parsed
    /// as in [`to_number_with`](Value::to_number_with).
    /// Parts which cannot be parsed are left out.
    pub fn to_numbers_with(&self, fallback: NumberFallback) -> Vec<f64> {
        match self {
            Value::Text(text) => text
                .split('\\')
                .map(trim_text)
                .filter(|part| !part.is_empty())
                .filter_map(|part| part.parse::<f64>().ok().or_else(|| fallback(part)))
                .collect(),
            Value::U16s(v) => v.iter().map(|x| f64::from(*x)).collect(),
            Value::I16s(v) => v.iter().map(|x| f64::from(*x)).collect(),
            Value::I32s(v) => v.iter().map(|x| f64::from(*x)).collect(),
            Value::I64s(v) => v.iter().map(|x| *x as f64).collect(),
            Value::U32s(v) => v.iter().map(|x| *x as f64).collect(),
            Value::F32s(v) => v.iter().map(|x| f64::from(*x)).collect(),
            Value::F64s(v) => v.to_vec(),
            single => single.to_number_with(fallback).into_iter().collect(),
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}
