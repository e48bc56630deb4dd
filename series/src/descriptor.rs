//! Per-file descriptors of a series.
//!
//! A [`FileDescriptor`] summarizes one decoded file:
//! its dimensions and pixel format,
//! where each frame lies in the file,
//! its image type and the z offset of each plane.
//! The attribute tree is not kept.
use crate::error::{InvalidAttributeSnafu, MissingAttributeSnafu, Result};
use crate::file::{Compression, DicomFile, OpenFileOptions, TransferSyntax};
use dcmstack_core::Tag;
use dcmstack_dictionary_std::tags;
use dcmstack_parser::{AttributeTree, Endianness, NodeId};
use snafu::{ensure, OptionExt};
use std::path::{Path, PathBuf};

/// The dimensions and pixel format of the image in one file.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionInfo {
    /// the width of the full image
    pub size_x: u32,
    /// the height of the full image
    pub size_y: u32,
    /// the width of each frame,
    /// less than `size_x` for tiled whole slide images
    pub tile_width: u32,
    /// the height of each frame
    pub tile_height: u32,
    /// the number of frames in the file
    pub frames: u32,
    pub samples_per_pixel: u16,
    pub bits_allocated: u16,
    /// whether the pixel samples are signed
    pub signed: bool,
    pub photometric_interpretation: String,
    /// whether the samples of each pixel are stored together
    /// (planar configuration 0)
    pub interleaved: bool,
    pub rescale_slope: f64,
    pub rescale_intercept: f64,
    /// the byte order of the pixel data
    pub byte_order: Endianness,
    pub compression: Compression,
}

impl DimensionInfo {
    /// Create the dimensions of a single frame,
    /// 8-bit monochrome image with the given size.
    pub fn new(size_x: u32, size_y: u32) -> Self {
        DimensionInfo {
            size_x,
            size_y,
            tile_width: size_x,
            tile_height: size_y,
            frames: 1,
            samples_per_pixel: 1,
            bits_allocated: 8,
            signed: false,
            photometric_interpretation: "MONOCHROME2".to_string(),
            interleaved: true,
            rescale_slope: 1.,
            rescale_intercept: 0.,
            byte_order: Endianness::Little,
            compression: Compression::None,
        }
    }

    /// The number of bytes of each sample.
    pub fn bytes_per_sample(&self) -> u32 {
        ((u32::from(self.bits_allocated) + 7) / 8).max(1)
    }

    /// The number of bytes of each native frame.
    pub fn frame_bytes(&self) -> u64 {
        u64::from(self.tile_width)
            .saturating_mul(u64::from(self.tile_height))
            .saturating_mul(u64::from(self.samples_per_pixel))
            .saturating_mul(u64::from(self.bytes_per_sample()))
    }

    /// Whether each frame is a tile of a larger image.
    pub fn is_tiled(&self) -> bool {
        self.tile_width < self.size_x || self.tile_height < self.size_y
    }

    /// The number of tile columns and rows covering the full image.
    pub fn tile_grid(&self) -> (u64, u64) {
        fn tiles_along(size: u32, tile: u32) -> u64 {
            let tile = u64::from(tile.max(1));
            ((u64::from(size) + tile - 1) / tile).max(1)
        }
        (
            tiles_along(self.size_x, self.tile_width),
            tiles_along(self.size_y, self.tile_height),
        )
    }
}

/// The location of one frame, or one tile of a frame, in a file.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TileDescriptor {
    /// the column of the top left pixel in the full image
    pub x: u32,
    /// the row of the top left pixel in the full image
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// the plane to which the tile belongs
    pub plane: u32,
    /// the position of the first byte in the file
    pub offset: u64,
    /// the number of bytes
    pub len: u64,
}

/// The summary of one file of a series.
#[derive(Debug, Clone, PartialEq)]
pub struct FileDescriptor {
    path: PathBuf,
    dimensions: DimensionInfo,
    tiles: Vec<TileDescriptor>,
    image_type: String,
    z_offsets: Vec<f64>,
}

impl FileDescriptor {
    /// Create a descriptor with the given dimensions,
    /// no tiles, no image type and no plane offsets.
    pub fn new<P>(path: P, dimensions: DimensionInfo) -> Self
    where
        P: Into<PathBuf>,
    {
        FileDescriptor {
            path: path.into(),
            dimensions,
            tiles: Vec::new(),
            image_type: String::new(),
            z_offsets: Vec::new(),
        }
    }

    /// Replace the image type.
    pub fn with_image_type<S>(mut self, image_type: S) -> Self
    where
        S: Into<String>,
    {
        self.image_type = image_type.into();
        self
    }

    /// Replace the tiles.
    pub fn with_tiles(mut self, tiles: Vec<TileDescriptor>) -> Self {
        self.tiles = tiles;
        self
    }

    /// Replace the plane offsets.
    pub fn with_z_offsets(mut self, z_offsets: Vec<f64>) -> Self {
        self.z_offsets = z_offsets;
        self
    }

    /// Open the file at the given path and extract its descriptor.
    pub fn open<P>(path: P, options: &OpenFileOptions) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let file = options.open_file(path)?;
        Self::from_file(&file)
    }

    /// Extract the descriptor of a decoded file.
    pub fn from_file(file: &DicomFile) -> Result<Self> {
        Self::from_tree(
            file.path(),
            file.tree(),
            file.transfer_syntax(),
            file.byte_order(),
        )
    }

    /// Extract the descriptor from the attribute tree of a file.
    ///
    /// # Errors
    ///
    /// The file must declare its rows and columns,
    /// otherwise it is not an image.
    pub fn from_tree<P>(
        path: P,
        tree: &AttributeTree,
        transfer_syntax: Option<&TransferSyntax>,
        byte_order: Endianness,
    ) -> Result<Self>
    where
        P: Into<PathBuf>,
    {
        let path = path.into();
        let dimensions = extract_dimensions(&path, tree, transfer_syntax, byte_order)?;
        let tiles = extract_tiles(&path, tree, &dimensions);
        let image_type = tree
            .get(tags::IMAGE_TYPE)
            .and_then(|n| n.to_str().map(|s| s.into_owned()))
            .unwrap_or_default();
        let z_offsets = extract_z_offsets(tree);

        tracing::debug!(
            "{}: {}x{}, {} frame(s), image type `{}`",
            path.display(),
            dimensions.size_x,
            dimensions.size_y,
            dimensions.frames,
            image_type
        );
        Ok(FileDescriptor {
            path,
            dimensions,
            tiles,
            image_type,
            z_offsets,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dimensions(&self) -> &DimensionInfo {
        &self.dimensions
    }

    /// The width of the full image.
    pub fn size_x(&self) -> u32 {
        self.dimensions.size_x
    }

    /// The height of the full image.
    pub fn size_y(&self) -> u32 {
        self.dimensions.size_y
    }

    /// The location of each frame in the file.
    pub fn tiles(&self) -> &[TileDescriptor] {
        &self.tiles
    }

    /// The image type classification, as backslash separated terms,
    /// or an empty string if the file declares none.
    pub fn image_type(&self) -> &str {
        &self.image_type
    }

    /// The z offset of each plane, in frame order.
    pub fn z_offsets(&self) -> &[f64] {
        &self.z_offsets
    }

    /// The number of planes in the file.
    pub fn plane_count(&self) -> u32 {
        if self.dimensions.is_tiled() {
            self.tiles
                .iter()
                .map(|t| t.plane + 1)
                .max()
                .unwrap_or(1)
        } else {
            self.dimensions.frames
        }
    }
}

fn number(tree: &AttributeTree, tag: Tag) -> Option<f64> {
    tree.get(tag)?.to_number()
}

fn dimension(path: &Path, tree: &AttributeTree, tag: Tag, alias: &'static str) -> Result<u32> {
    let value = number(tree, tag).context(MissingAttributeSnafu { path, alias })?;
    checked_dimension(path, value, alias)
}

fn optional_dimension(
    path: &Path,
    tree: &AttributeTree,
    tag: Tag,
    alias: &'static str,
) -> Result<Option<u32>> {
    number(tree, tag)
        .map(|value| checked_dimension(path, value, alias))
        .transpose()
}

fn checked_dimension(path: &Path, value: f64, alias: &'static str) -> Result<u32> {
    ensure!(
        value >= 1. && value <= f64::from(u32::MAX),
        InvalidAttributeSnafu { path, alias }
    );
    Ok(value as u32)
}

fn extract_dimensions(
    path: &Path,
    tree: &AttributeTree,
    transfer_syntax: Option<&TransferSyntax>,
    byte_order: Endianness,
) -> Result<DimensionInfo> {
    let columns = dimension(path, tree, tags::COLUMNS, "Columns")?;
    let rows = dimension(path, tree, tags::ROWS, "Rows")?;
    let mut dims = DimensionInfo::new(columns, rows);

    // tiled whole slide images declare the size of the full image
    let total_x = optional_dimension(
        path,
        tree,
        tags::TOTAL_PIXEL_MATRIX_COLUMNS,
        "TotalPixelMatrixColumns",
    )?;
    let total_y = optional_dimension(
        path,
        tree,
        tags::TOTAL_PIXEL_MATRIX_ROWS,
        "TotalPixelMatrixRows",
    )?;
    if let (Some(total_x), Some(total_y)) = (total_x, total_y) {
        if total_x >= columns && total_y >= rows {
            dims.size_x = total_x;
            dims.size_y = total_y;
        }
    }

    let small = |tag: Tag, default: u16| {
        number(tree, tag)
            .filter(|v| *v >= 0. && *v <= f64::from(u16::MAX))
            .map(|v| v as u16)
            .unwrap_or(default)
    };

    dims.frames = number(tree, tags::NUMBER_OF_FRAMES)
        .filter(|v| *v >= 1. && *v <= f64::from(u32::MAX))
        .map(|v| v as u32)
        .unwrap_or(1);
    dims.samples_per_pixel = small(tags::SAMPLES_PER_PIXEL, 1).max(1);
    dims.bits_allocated = small(tags::BITS_ALLOCATED, 8);
    dims.signed = small(tags::PIXEL_REPRESENTATION, 0) == 1;
    dims.interleaved = small(tags::PLANAR_CONFIGURATION, 0) == 0;
    if let Some(photometric) = tree
        .get(tags::PHOTOMETRIC_INTERPRETATION)
        .and_then(|n| n.to_str())
    {
        dims.photometric_interpretation = photometric.into_owned();
    }
    dims.rescale_slope = number(tree, tags::RESCALE_SLOPE).unwrap_or(1.);
    dims.rescale_intercept = number(tree, tags::RESCALE_INTERCEPT).unwrap_or(0.);
    dims.byte_order = byte_order;
    dims.compression = transfer_syntax
        .map(TransferSyntax::compression)
        .unwrap_or_default();

    Ok(dims)
}

/// Retrieve the elements with the given tag
/// in the items of the per-frame functional groups sequence,
/// in frame order.
fn per_frame(tree: &AttributeTree, tag: Tag) -> Vec<NodeId> {
    tree.root_id(tags::PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE)
        .map(|groups| {
            tree[groups]
                .children()
                .iter()
                .copied()
                .filter(|id| tree[*id].tag() == tag)
                .collect()
        })
        .unwrap_or_default()
}

fn extract_z_offsets(tree: &AttributeTree) -> Vec<f64> {
    let third = |id: NodeId| tree[id].to_numbers().get(2).copied();

    let z: Vec<f64> = per_frame(tree, tags::PLANE_POSITION_SEQUENCE)
        .into_iter()
        .filter_map(|pos| tree.lookup_child(pos, tags::IMAGE_POSITION_PATIENT))
        .filter_map(third)
        .collect();
    if !z.is_empty() {
        return z;
    }
    if let Some(z) = tree
        .root_id(tags::IMAGE_POSITION_PATIENT)
        .and_then(third)
    {
        return vec![z];
    }
    number(tree, tags::SLICE_LOCATION).into_iter().collect()
}

/// Retrieve the zero-based position of each frame
/// in the total pixel matrix of a tiled image.
fn slide_positions(tree: &AttributeTree) -> Vec<(u32, u32)> {
    per_frame(tree, tags::PLANE_POSITION_SLIDE_SEQUENCE)
        .into_iter()
        .filter_map(|pos| {
            let coord = |tag: Tag| {
                let id = tree.lookup_child(pos, tag)?;
                let v = tree[id].to_number()?;
                Some((v.max(1.) - 1.) as u32)
            };
            Some((
                coord(tags::COLUMN_POSITION_IN_TOTAL_IMAGE_PIXEL_MATRIX)?,
                coord(tags::ROW_POSITION_IN_TOTAL_IMAGE_PIXEL_MATRIX)?,
            ))
        })
        .collect()
}

fn extract_tiles(path: &Path, tree: &AttributeTree, dims: &DimensionInfo) -> Vec<TileDescriptor> {
    let pixels = match tree.get(tags::PIXEL_DATA) {
        Some(pixels) => pixels,
        None => {
            tracing::warn!("No pixel data in {}", path.display());
            return Vec::new();
        }
    };
    let start = pixels.value_start();

    if dims.compression.is_encapsulated() {
        return vec![TileDescriptor {
            x: 0,
            y: 0,
            width: dims.size_x,
            height: dims.size_y,
            plane: 0,
            offset: start,
            len: pixels.end() - start,
        }];
    }

    let frame_bytes = dims.frame_bytes();
    let available = u64::from(pixels.length());
    let positions = if dims.is_tiled() {
        slide_positions(tree)
    } else {
        Vec::new()
    };
    let (across, down) = dims.tile_grid();
    let per_plane = across * down;

    // the frame count is only trusted as far as the pixel data goes
    let complete = available / frame_bytes.max(1);
    let mut tiles = Vec::with_capacity(complete.min(u64::from(dims.frames)) as usize);
    for i in 0..dims.frames {
        let offset = u64::from(i) * frame_bytes;
        if offset.saturating_add(frame_bytes) > available {
            tracing::warn!(
                "Pixel data of {} holds {} of {} frames",
                path.display(),
                i,
                dims.frames
            );
            break;
        }
        let (x, y, plane) = if dims.is_tiled() {
            let i = u64::from(i);
            let (x, y) = positions.get(i as usize).copied().unwrap_or_else(|| {
                let k = i % per_plane;
                // within the full image, thus within u32
                let x = (k % across) * u64::from(dims.tile_width);
                let y = (k / across) * u64::from(dims.tile_height);
                (x as u32, y as u32)
            });
            (x, y, (i / per_plane) as u32)
        } else {
            (0, 0, i)
        };
        tiles.push(TileDescriptor {
            x,
            y,
            width: dims.tile_width,
            height: dims.tile_height,
            plane,
            offset: start + offset,
            len: frame_bytes,
        });
    }
    tiles
}
