//! Decoding options and the mutable state of a single decoding run.
use crate::text::CharacterSet;
use byteordered::Endianness;

/// The set of options for decoding DICOM data elements.
///
/// The options are given once at the creation of an
/// [`ElementReader`](crate::ElementReader).
/// What may change while decoding
/// is kept apart in a [`ParseContext`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct ParseOptions {
    /// the byte order in which decoding starts
    pub byte_order: Endianness,
    /// whether the file declares the explicit VR big endian transfer syntax
    pub big_endian_transfer_syntax: bool,
    /// whether odd value lengths are kept as they are
    /// instead of being rounded up to the next even number
    pub odd_locations: bool,
    /// whether the pixel data value is loaded into the tree
    pub read_pixel_data: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            byte_order: Endianness::Little,
            big_endian_transfer_syntax: false,
            odd_locations: false,
            read_pixel_data: false,
        }
    }
}

impl ParseOptions {
    /// Replace the initial byte order.
    pub fn byte_order(mut self, byte_order: Endianness) -> Self {
        self.byte_order = byte_order;
        self
    }

    /// Declare whether the content is in explicit VR big endian.
    pub fn big_endian_transfer_syntax(mut self, big_endian: bool) -> Self {
        self.big_endian_transfer_syntax = big_endian;
        self
    }

    /// Keep odd value lengths as they are.
    pub fn odd_locations(mut self, odd_locations: bool) -> Self {
        self.odd_locations = odd_locations;
        self
    }

    /// Load the pixel data value instead of skipping it.
    pub fn read_pixel_data(mut self, read_pixel_data: bool) -> Self {
        self.read_pixel_data = read_pixel_data;
        self
    }
}

/// The mutable state of one decoding run.
///
/// Each reader owns its own context,
/// so that readers of different files never interfere.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ParseContext {
    /// the byte order currently in effect
    pub byte_order: Endianness,
    /// whether a big endian group word should switch the byte order
    pub big_endian_transfer_syntax: bool,
    /// whether odd value lengths are kept as they are
    pub odd_locations: bool,
    /// whether the pixel data value is loaded into the tree
    pub read_pixel_data: bool,
    /// the character set for decoding text values
    pub charset: CharacterSet,
}

impl From<ParseOptions> for ParseContext {
    fn from(options: ParseOptions) -> Self {
        ParseContext {
            byte_order: options.byte_order,
            big_endian_transfer_syntax: options.big_endian_transfer_syntax,
            odd_locations: options.odd_locations,
            read_pixel_data: options.read_pixel_data,
            charset: CharacterSet::default(),
        }
    }
}

impl Default for ParseContext {
    fn default() -> Self {
        ParseOptions::default().into()
    }
}

impl ParseContext {
    /// Switch to the opposite byte order.
    pub fn swap_byte_order(&mut self) {
        self.byte_order = opposite(self.byte_order);
    }
}

/// Obtain the opposite of the given byte order.
pub(crate) fn opposite(order: Endianness) -> Endianness {
    match order {
        Endianness::Little => Endianness::Big,
        Endianness::Big => Endianness::Little,
    }
}
