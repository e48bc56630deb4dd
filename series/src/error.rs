//! Error types of series assembly.
use snafu::{Backtrace, Snafu};
use std::path::PathBuf;

/// An error which may occur while opening a file
/// or extracting its descriptor.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Could not open file '{}'", path.display()))]
    OpenFile {
        path: PathBuf,
        source: std::io::Error,
        backtrace: Backtrace,
    },
    #[snafu(display("Could not read preamble bytes of '{}'", path.display()))]
    ReadPreambleBytes {
        path: PathBuf,
        source: std::io::Error,
        backtrace: Backtrace,
    },
    #[snafu(display("Could not parse file '{}'", path.display()))]
    ParseFile {
        path: PathBuf,
        #[snafu(backtrace)]
        source: dcmstack_parser::Error,
    },
    /// The file lacks an attribute required of an image.
    #[snafu(display("Missing attribute {} in '{}'", alias, path.display()))]
    MissingAttribute {
        path: PathBuf,
        alias: &'static str,
        backtrace: Backtrace,
    },
    #[snafu(display("Invalid value of attribute {} in '{}'", alias, path.display()))]
    InvalidAttribute {
        path: PathBuf,
        alias: &'static str,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
