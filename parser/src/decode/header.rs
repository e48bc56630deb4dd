//! Element header resolution.
//!
//! A header is resolved in three steps:
//! the tag is read (skipping delimitation items),
//! the value representation code and length are interpreted
//! according to the length class of the code,
//! and finally the length is adjusted for known producer quirks.
//!
//! Lengths are handled as signed 64-bit numbers throughout,
//! since a 32-bit length with the high bit set
//! stands for an undefined length.
use crate::error::{InvalidTagLengthSnafu, ReadHeaderSnafu, Result, SeekSnafu};
use crate::options::{opposite, ParseContext};
use crate::source::Source;
use byteordered::Endianness;
use dcmstack_core::header::{LengthClass, Tag, VR};
use dcmstack_dictionary_std::tags;
use snafu::ResultExt;
use std::io::{Read, Seek};

/// A private attribute known to be written with a zero length
/// in front of its actual length.
const PRIVATE_DEFERRED_LENGTH: Tag = Tag(0x0029, 0x1014);

/// The group of the pixel data attribute.
const PIXEL_DATA_GROUP: u16 = 0x7FE0;

/// How the value representation code bytes of an element were interpreted.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum VrCode {
    /// A registered code was found in the stream.
    Explicit(VR),
    /// No code was found: the bytes after the tag are part of the length.
    Implicit,
    /// The reserved code `0xFFFF`,
    /// denoting an undefined length.
    Reserved,
    /// Two upper case letters which are not a registered code.
    Unrecognized([u8; 2]),
}

/// A resolved element header.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ElementHeader {
    /// the attribute tag
    pub tag: Tag,
    /// the value representation code, as found in the stream
    pub vr_code: VrCode,
    /// the number of value bytes to consume
    pub len: u32,
    /// the number of value bytes which belong to the value,
    /// which is less than `len` when an odd length was rounded up
    pub value_len: u32,
    /// whether the length was undefined,
    /// in which case `len` is zero
    pub undefined: bool,
    /// the position of the first byte of the header
    pub header_start: u64,
    /// the position of the first byte of the value
    pub value_start: u64,
}

impl ElementHeader {
    /// The position right after the declared value.
    pub fn value_end(&self) -> u64 {
        self.value_start + u64::from(self.len)
    }
}

/// A token read from the stream at an element boundary.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Token {
    /// An element header.
    Header(ElementHeader),
    /// A sequence delimitation item, already consumed.
    SequenceDelimiter,
    /// There are not enough bytes left for a tag.
    EndOfStream,
}

/// Read the next element header from the source.
///
/// Item delimitation items are skipped.
/// Sequence delimitation items are consumed and reported as
/// [`Token::SequenceDelimiter`].
///
/// The context may be changed in the process:
/// the byte order switches to big endian
/// when a big endian group word is found in a big endian transfer syntax,
/// and it is flipped when a length does not fit in the stream.
///
/// # Errors
///
/// [`InvalidTagLength`](crate::Error::InvalidTagLength)
/// is raised when the length does not fit in the stream
/// in either byte order.
/// The byte order of the context is then left as it was.
pub fn read_header<S>(src: &mut Source<S>, ctx: &mut ParseContext) -> Result<Token>
where
    S: Read + Seek,
{
    loop {
        let start = src.position();
        if start + 4 > src.len() {
            return Ok(Token::EndOfStream);
        }
        let tag = read_tag(src, ctx, start)?;

        if tag == tags::ITEM_DELIMITATION_ITEM || tag == tags::SEQUENCE_DELIMITATION_ITEM {
            src.skip(4).context(SeekSnafu {
                position: start + 8,
            })?;
            if tag == tags::SEQUENCE_DELIMITATION_ITEM {
                return Ok(Token::SequenceDelimiter);
            }
            continue;
        }

        let (mut vr_code, mut len) = read_length(src, ctx, tag, start)?;

        if len > src.len() as i64 {
            tracing::warn!(
                "Length {} of element {} at position {} exceeds the stream size, swapping byte order",
                len,
                tag,
                start
            );
            src.seek(start).context(SeekSnafu { position: start })?;
            ctx.swap_byte_order();
            let tag = read_tag(src, ctx, start)?;
            let (vr_code, len) = read_length(src, ctx, tag, start)?;
            if len > src.len() as i64 {
                ctx.swap_byte_order();
                return InvalidTagLengthSnafu {
                    tag,
                    len,
                    position: start,
                }
                .fail();
            }
            return Ok(Token::Header(finish(tag, vr_code, len, len, start, src)));
        }

        let order = ctx.byte_order;
        if len < 0 && tag.group() == PIXEL_DATA_GROUP {
            src.skip(12).context(SeekSnafu { position: start })?;
            len = read_i32(src, order, start)?;
            if len < 0 {
                len = read_i32(src, order, start)?;
            }
        }

        if len == 0 && (tag.group() == PIXEL_DATA_GROUP || tag == PRIVATE_DEFERRED_LENGTH) {
            let (code, l) = read_length(src, ctx, tag, start)?;
            vr_code = code;
            len = l;
        } else if len == 0 {
            // a zero length may be the reserved field of an unlisted long code
            src.rewind(4).context(SeekSnafu { position: start })?;
            let mut code = [0; 2];
            src.read_exact(&mut code)
                .context(ReadHeaderSnafu { position: start })?;
            src.skip(2).context(SeekSnafu { position: start })?;
            if &code == b"UT" {
                len = read_i32(src, order, start)?;
            }
        }

        let value_len = len;
        if !ctx.odd_locations && len % 2 == 1 {
            len += 1;
        }

        return Ok(Token::Header(finish(tag, vr_code, len, value_len, start, src)));
    }
}

fn finish<S>(
    tag: Tag,
    vr_code: VrCode,
    len: i64,
    value_len: i64,
    header_start: u64,
    src: &Source<S>,
) -> ElementHeader
where
    S: Read + Seek,
{
    let undefined = len < 0;
    let clamp = |l: i64| if l < 0 { 0 } else { l as u32 };
    ElementHeader {
        tag,
        vr_code,
        len: clamp(len),
        value_len: clamp(value_len),
        undefined,
        header_start,
        value_start: src.position(),
    }
}

fn read_tag<S>(src: &mut Source<S>, ctx: &mut ParseContext, start: u64) -> Result<Tag>
where
    S: Read + Seek,
{
    let mut group = src
        .read_u16(ctx.byte_order)
        .context(ReadHeaderSnafu { position: start })?;
    if group == 0x0800 && ctx.big_endian_transfer_syntax {
        tracing::debug!("Big endian group word at position {}, switching byte order", start);
        group = 0x0008;
        ctx.byte_order = Endianness::Big;
    }
    let element = src
        .read_u16(ctx.byte_order)
        .context(ReadHeaderSnafu { position: start })?;
    Ok(Tag(group, element))
}

fn read_i32<S>(src: &mut Source<S>, order: Endianness, start: u64) -> Result<i64>
where
    S: Read + Seek,
{
    src.read_i32(order)
        .map(i64::from)
        .context(ReadHeaderSnafu { position: start })
}

fn short_from(bytes: [u8; 2], order: Endianness) -> i64 {
    let v = match order {
        Endianness::Little => u16::from_le_bytes(bytes),
        Endianness::Big => u16::from_be_bytes(bytes),
    };
    i64::from(v)
}

fn int_from(bytes: [u8; 4], order: Endianness) -> i64 {
    let v = match order {
        Endianness::Little => i32::from_le_bytes(bytes),
        Endianness::Big => i32::from_be_bytes(bytes),
    };
    i64::from(v)
}

/// Interpret the four bytes after the tag
/// (and possibly four more)
/// as a value representation code and a value length.
fn read_length<S>(
    src: &mut Source<S>,
    ctx: &ParseContext,
    tag: Tag,
    start: u64,
) -> Result<(VrCode, i64)>
where
    S: Read + Seek,
{
    let order = ctx.byte_order;
    let mut b = [0; 4];
    src.read_exact(&mut b)
        .context(ReadHeaderSnafu { position: start })?;
    let code = [b[0], b[1]];
    let pos = src.position() as i64;
    let total = src.len() as i64;
    let fits = |len: i64| pos + len <= total;

    match VR::from_binary(code) {
        None => {
            // implicit VR, the four bytes are the length
            let mut len = int_from(b, order);
            if len < 0 || !fits(len) {
                len = short_from([b[2], b[3]], order);
            }
            let vr_code = if VR::looks_like_code(code) {
                VrCode::Unrecognized(code)
            } else {
                VrCode::Implicit
            };
            Ok((vr_code, len))
        }
        Some(VR::Reserved) => {
            if b == [0xFF; 4] {
                Ok((VrCode::Reserved, -1))
            } else {
                Ok((VrCode::Implicit, 8))
            }
        }
        Some(vr) if vr.length_class() == LengthClass::LongExplicit => {
            if b[2] == 0 && b[3] == 0 {
                Ok((VrCode::Explicit(vr), read_i32(src, order, start)?))
            } else {
                // not a VR after all
                Ok((VrCode::Implicit, int_from(b, order)))
            }
        }
        Some(vr) => {
            let n1 = short_from([b[2], b[3]], order);
            if tag == tags::LUT_DATA {
                return Ok((VrCode::Explicit(vr), n1));
            }
            let n2 = short_from([b[2], b[3]], opposite(order));
            let len = if fits(n1) {
                n1
            } else if fits(n2) {
                n2
            } else {
                n1
            };
            Ok((VrCode::Explicit(vr), len))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{read_header, ElementHeader, Token, VrCode};
    use crate::options::{ParseContext, ParseOptions};
    use crate::source::Source;
    use byteordered::Endianness;
    use dcmstack_core::{Tag, VR};
    use std::io::Cursor;

    fn header_of(data: &[u8], options: ParseOptions) -> (ElementHeader, ParseContext) {
        let mut src = Source::new(Cursor::new(data)).unwrap();
        let mut ctx = ParseContext::from(options);
        match read_header(&mut src, &mut ctx).unwrap() {
            Token::Header(h) => (h, ctx),
            t => panic!("expected header, got {:?}", t),
        }
    }

    #[test]
    fn explicit_short_length() {
        #[rustfmt::skip]
        let data: &[u8] = &[
            0x10, 0x00, 0x10, 0x00, // (0010,0010) PatientName
            b'P', b'N', 0x08, 0x00, // VR: PN, len: 8
            b'D', b'O', b'E', b'^', b'J', b'O', b'H', b'N',
        ];
        let (h, _) = header_of(data, ParseOptions::default());
        assert_eq!(h.tag, Tag(0x0010, 0x0010));
        assert_eq!(h.vr_code, VrCode::Explicit(VR::PN));
        assert_eq!(h.len, 8);
        assert_eq!(h.value_start, 8);
        assert!(!h.undefined);
    }

    #[test]
    fn explicit_long_length() {
        #[rustfmt::skip]
        let data: &[u8] = &[
            0x09, 0x00, 0x10, 0x10, // (0009,1010)
            b'O', b'B', 0x00, 0x00, // VR: OB, reserved
            0x04, 0x00, 0x00, 0x00, // len: 4
            0x01, 0x02, 0x03, 0x04,
        ];
        let (h, _) = header_of(data, ParseOptions::default());
        assert_eq!(h.vr_code, VrCode::Explicit(VR::OB));
        assert_eq!(h.len, 4);
        assert_eq!(h.value_start, 12);
    }

    #[test]
    fn implicit_length() {
        #[rustfmt::skip]
        let data: &[u8] = &[
            0x28, 0x00, 0x10, 0x00, // (0028,0010) Rows
            0x02, 0x00, 0x00, 0x00, // len: 2
            0x00, 0x02,
        ];
        let (h, _) = header_of(data, ParseOptions::default());
        assert_eq!(h.vr_code, VrCode::Implicit);
        assert_eq!(h.len, 2);
        assert_eq!(h.value_start, 8);
    }

    #[test]
    fn reserved_code_is_undefined_length() {
        #[rustfmt::skip]
        let data: &[u8] = &[
            0xFE, 0xFF, 0x00, 0xE0, // (FFFE,E000) Item
            0xFF, 0xFF, 0xFF, 0xFF, // undefined length
            0x00, 0x00, 0x00, 0x00,
        ];
        let (h, _) = header_of(data, ParseOptions::default());
        assert_eq!(h.vr_code, VrCode::Reserved);
        assert!(h.undefined);
        assert_eq!(h.len, 0);
    }

    #[test]
    fn odd_length_rounding() {
        #[rustfmt::skip]
        let data: &[u8] = &[
            0x08, 0x00, 0x60, 0x00, // (0008,0060) Modality
            b'C', b'S', 0x07, 0x00, // VR: CS, len: 7
            b'O', b'T', b'H', b'E', b'R', b'S', b'X', 0x00,
        ];
        let (h, _) = header_of(data, ParseOptions::default());
        assert_eq!((h.len, h.value_len), (8, 7));

        let (h, _) = header_of(data, ParseOptions::default().odd_locations(true));
        assert_eq!((h.len, h.value_len), (7, 7));
    }

    #[test]
    fn short_length_in_swapped_order() {
        #[rustfmt::skip]
        let data: &[u8] = &[
            0x08, 0x00, 0x60, 0x00, // (0008,0060) Modality
            b'C', b'S', 0x00, 0x02, // VR: CS, len: 512 LE, 2 BE
            b'M', b'R',
        ];
        let (h, ctx) = header_of(data, ParseOptions::default());
        assert_eq!(h.len, 2);
        // only the length is read in the other order
        assert_eq!(ctx.byte_order, Endianness::Little);
    }

    #[test]
    fn big_endian_group_switch() {
        #[rustfmt::skip]
        let data: &[u8] = &[
            0x00, 0x08, 0x00, 0x60, // (0008,0060) Modality, big endian
            b'C', b'S', 0x00, 0x02, // VR: CS, len: 2
            b'C', b'T',
        ];
        let options = ParseOptions::default().big_endian_transfer_syntax(true);
        let (h, ctx) = header_of(data, options);
        assert_eq!(h.tag, Tag(0x0008, 0x0060));
        assert_eq!(h.len, 2);
        assert_eq!(ctx.byte_order, Endianness::Big);
    }

    #[test]
    fn delimiters_are_skipped() {
        #[rustfmt::skip]
        let data: &[u8] = &[
            0xFE, 0xFF, 0x0D, 0xE0, // (FFFE,E00D) Item Delimitation Item
            0x00, 0x00, 0x00, 0x00,
            0xFE, 0xFF, 0xDD, 0xE0, // (FFFE,E0DD) Sequence Delimitation Item
            0x00, 0x00, 0x00, 0x00,
            0x08, 0x00, 0x60, 0x00, // (0008,0060) Modality
            b'C', b'S', 0x02, 0x00,
            b'C', b'T',
        ];
        let mut src = Source::new(Cursor::new(data)).unwrap();
        let mut ctx = ParseContext::default();
        assert_eq!(
            read_header(&mut src, &mut ctx).unwrap(),
            Token::SequenceDelimiter
        );
        assert_eq!(src.position(), 16);
        match read_header(&mut src, &mut ctx).unwrap() {
            Token::Header(h) => assert_eq!(h.tag, Tag(0x0008, 0x0060)),
            t => panic!("expected header, got {:?}", t),
        }
        assert_eq!(
            read_header(&mut src, &mut ctx).unwrap(),
            Token::EndOfStream
        );
    }

    #[test]
    fn swapped_byte_order_fallback() {
        #[rustfmt::skip]
        let data: &[u8] = &[
            0x00, 0x28, 0x00, 0x10, // (0028,0010) Rows, big endian
            0x00, 0x00, 0x00, 0x02, // implicit, len: 2 BE
            0x02, 0x00,
        ];
        let (h, ctx) = header_of(data, ParseOptions::default());
        assert_eq!(h.tag, Tag(0x0028, 0x0010));
        assert_eq!(h.len, 2);
        assert_eq!(h.value_start, 8);
        assert_eq!(ctx.byte_order, Endianness::Big);
    }

    #[test]
    fn length_beyond_stream_is_an_error() {
        #[rustfmt::skip]
        let data: &[u8] = &[
            0x09, 0x00, 0x10, 0x10, // (0009,1010)
            b'O', b'B', 0x00, 0x00, // VR: OB, reserved
            0x00, 0x00, 0x00, 0x10, // len: 0x10000000 LE, 0x10 BE
            0x01, 0x02,
        ];
        let mut src = Source::new(Cursor::new(data)).unwrap();
        let mut ctx = ParseContext::default();
        let e = read_header(&mut src, &mut ctx).unwrap_err();
        assert!(matches!(e, crate::Error::InvalidTagLength { .. }));
        assert_eq!(ctx.byte_order, Endianness::Little);
    }
}
