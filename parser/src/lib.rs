//! This crate provides the element decoder of dcmstack:
//! it reads DICOM data elements from a seekable byte source
//! into an [`AttributeTree`],
//! tolerating the many ways in which real-world producers
//! deviate from the standard.
//!
//! - [`reader`] holds the [`ElementReader`],
//!   which drives the decoding of one top-level element at a time
//!   with an explicit stack of open sequences.
//! - [`decode`] contains the header resolution procedure
//!   (tag, value representation and length)
//!   and the per-VR value decoding table.
//! - [`tree`] contains the arena-based attribute tree.
//! - [`options`] holds the parse options and the per-reader parse context.
//!
//! All APIs are based on synchronous I/O.
//! Independent readers share no state,
//! so distinct files may be decoded in parallel.
//!
//! # Example
//!
//! ```no_run
//! use dcmstack_parser::{ElementReader, ParseOptions};
//! use dcmstack_dictionary_std::tags;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let file = std::fs::File::open("image.dcm")?;
//! let tree = ElementReader::new(std::io::BufReader::new(file), ParseOptions::default())?
//!     .read_to_end()?;
//! if let Some(rows) = tree.get(tags::ROWS) {
//!     println!("{} = {:?}", rows.key(), rows.to_number());
//! }
//! # Ok(())
//! # }
//! ```

pub mod decode;
pub mod error;
pub mod number;
pub mod options;
pub mod reader;
pub mod source;
pub mod text;
pub mod tree;

pub use error::{Error, Result};
pub use options::{ParseContext, ParseOptions};
pub use reader::ElementReader;
pub use tree::{AttributeNode, AttributeTree, NodeId};

pub use byteordered::Endianness;
