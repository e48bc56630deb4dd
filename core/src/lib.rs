#![crate_type = "lib"]
#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    unused_import_braces
)]

//! This is the core library of dcmstack, containing the data types
//! shared by the attribute dictionary, the element decoder
//! and the series assembly logic.
//!
//! The current structure of this crate is as follows:
//!
//! - [`header`] comprises the DICOM attribute tag
//!   and the value representation registry,
//!   including the length encoding class of each code.
//! - [`dictionary`] describes common behavior of DICOM data dictionaries,
//!   which translate tags to an alias and a default value representation.
//! - [`value`] holds the tagged union of decoded element values.

pub mod dictionary;
pub mod header;
pub mod value;

pub use dictionary::{DataDictionary, DictionaryEntry, DictionaryEntryRef};
pub use header::{LengthClass, Tag, VR};
pub use value::Value;

// re-export crates that are part of the public API
pub use smallvec;
