//! This module contains the two halves of element decoding:
//! [`header`] resolves the tag, value representation and value length
//! of the next element,
//! and [`value`] turns the value bytes into a [`Value`](dcmstack_core::Value)
//! according to the resolved value representation.

pub mod header;
pub mod value;

pub use self::header::{read_header, ElementHeader, Token, VrCode};
pub use self::value::{decode_value, has_decoder};
