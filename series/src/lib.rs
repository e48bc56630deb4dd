//! This crate assembles multi-file DICOM series:
//! each file is decoded into an attribute tree,
//! summarized into a [`FileDescriptor`],
//! and the descriptors of a series are put in stacking order.
//!
//! - [`file`] opens DICOM files,
//!   locating the preamble and following the declared transfer syntax.
//! - [`descriptor`] extracts the dimensions, tiles, image type
//!   and plane offsets of one file.
//! - [`ordering`] holds the comparator which reconstructs
//!   the stacking order of a series.
//! - [`load`] loads and sorts whole series,
//!   in parallel when the `rayon` feature is enabled.
//!
//! # Example
//!
//! ```no_run
//! use dcmstack_series::{load_series, OpenFileOptions, SeriesSummary};
//!
//! let paths = ["slice1.dcm", "slice2.dcm", "slice3.dcm"];
//! let series = load_series(&paths, &OpenFileOptions::new());
//! let summary = SeriesSummary::from_sorted(&series);
//! println!("{} planes in {} files", summary.planes, summary.files);
//! ```

pub mod descriptor;
pub mod error;
pub mod file;
pub mod load;
pub mod ordering;

pub use descriptor::{DimensionInfo, FileDescriptor, TileDescriptor};
pub use error::{Error, Result};
pub use file::{
    open_file, Compression, DicomFile, OpenFileOptions, ReadPreamble, TransferSyntax,
};
pub use load::{load_series, try_load_series, SeriesSummary};
pub use ordering::{compare_descriptors, sort_series};
