//! This crate implements the standard DICOM attribute dictionary
//! used by the dcmstack element decoder.
//!
//! ## Run-time dictionary
//!
//! [`data_element`] contains the attributes which the decoder and
//! the series assembly logic need to know about,
//! recorded with their alias and typical value representation.
//! The dictionary is provided as a singleton
//! behind the unit type [`StandardDataDictionary`],
//! initialized on first use and never modified afterwards.
//!
//! ## Constants
//!
//! [`tags`] maps attribute aliases to DICOM tags at compile time,
//! thus without incurring a look-up cost.
pub mod data_element;
pub mod tags;

pub use data_element::{StandardDataDictionary, StandardDataDictionaryRegistry};
