//! Loading whole series.
use crate::descriptor::FileDescriptor;
use crate::error::Result;
use crate::file::OpenFileOptions;
use crate::ordering::sort_series;
use std::path::Path;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Open every file of a series and sort the descriptors into stacking order.
///
/// Files which cannot be opened or are not images
/// are logged and left out.
/// With the `rayon` feature the files are decoded in parallel,
/// each with its own reader.
pub fn load_series<P>(paths: &[P], options: &OpenFileOptions) -> Vec<FileDescriptor>
where
    P: AsRef<Path> + Sync,
{
    let mut series: Vec<FileDescriptor> = open_all(paths, options)
        .into_iter()
        .filter_map(|result| match result {
            Ok(descriptor) => Some(descriptor),
            Err(e) => {
                tracing::warn!("Skipping file: {}", snafu::Report::from_error(e));
                None
            }
        })
        .collect();
    sort_series(&mut series);
    tracing::info!("Loaded {} of {} files", series.len(), paths.len());
    series
}

/// Open every file of a series and sort the descriptors into stacking order,
/// failing on the first file which cannot be opened.
pub fn try_load_series<P>(paths: &[P], options: &OpenFileOptions) -> Result<Vec<FileDescriptor>>
where
    P: AsRef<Path> + Sync,
{
    let mut series = open_all(paths, options)
        .into_iter()
        .collect::<Result<Vec<_>>>()?;
    sort_series(&mut series);
    Ok(series)
}

#[cfg(feature = "rayon")]
fn open_all<P>(paths: &[P], options: &OpenFileOptions) -> Vec<Result<FileDescriptor>>
where
    P: AsRef<Path> + Sync,
{
    paths
        .par_iter()
        .map(|path| FileDescriptor::open(path, options))
        .collect()
}

#[cfg(not(feature = "rayon"))]
fn open_all<P>(paths: &[P], options: &OpenFileOptions) -> Vec<Result<FileDescriptor>>
where
    P: AsRef<Path> + Sync,
{
    paths
        .iter()
        .map(|path| FileDescriptor::open(path, options))
        .collect()
}

/// What the volume assembler needs to know about a sorted series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSummary {
    /// the number of files
    pub files: usize,
    /// the total number of planes
    pub planes: usize,
    /// the z offsets of all files, in stacking order
    pub z_offsets: Vec<f64>,
}

impl SeriesSummary {
    /// Summarize a series already in stacking order.
    pub fn from_sorted(descriptors: &[FileDescriptor]) -> Self {
        SeriesSummary {
            files: descriptors.len(),
            planes: descriptors.iter().map(|d| d.plane_count() as usize).sum(),
            z_offsets: descriptors
                .iter()
                .flat_map(|d| d.z_offsets().iter().copied())
                .collect(),
        }
    }
}
