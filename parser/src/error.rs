//! Error types of the element decoder.
use dcmstack_core::Tag;
use snafu::{Backtrace, Snafu};
use std::io;

/// An error which may occur while decoding DICOM data elements.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Could not determine the size of the data source"))]
    SourceSize {
        source: io::Error,
        backtrace: Backtrace,
    },
    #[snafu(display("Could not read element header at position {}", position))]
    ReadHeader {
        position: u64,
        source: io::Error,
        backtrace: Backtrace,
    },
    /// The length of a top-level element exceeds the stream size
    /// in both byte orders.
    #[snafu(display(
        "Invalid tag length {} for element {} at position {}",
        len,
        tag,
        position
    ))]
    InvalidTagLength {
        tag: Tag,
        len: i64,
        position: u64,
        backtrace: Backtrace,
    },
    #[snafu(display("Could not read value of element {} at position {}", tag, position))]
    ReadValue {
        tag: Tag,
        position: u64,
        source: io::Error,
        backtrace: Backtrace,
    },
    #[snafu(display("Could not seek to position {}", position))]
    Seek {
        position: u64,
        source: io::Error,
        backtrace: Backtrace,
    },
}

impl Error {
    /// Whether the error was caused by the data source
    /// ending in the middle of an element header.
    pub fn is_truncated_header(&self) -> bool {
        matches!(self, Error::ReadHeader { source, .. } if source.kind() == io::ErrorKind::UnexpectedEof)
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
