//! Value decoding by value representation.
//!
//! The decoding routine of each value representation
//! is kept in a table built on first use.
//! Value representations without an entry in the table
//! have their value skipped.
use crate::options::ParseContext;
use byteordered::{ByteOrdered, Endianness};
use dcmstack_core::value::{Value, C};
use dcmstack_core::VR;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::io;

/// A routine decoding the value bytes of an element.
type DecodeFn = fn(&[u8], &ParseContext) -> io::Result<Value>;

/// Values of an implicit VR element up to this length are read as text.
const IMPLICIT_TEXT_MAX_LEN: usize = 44;

static DECODERS: Lazy<HashMap<VR, DecodeFn>> = Lazy::new(|| {
    use VR::*;
    let mut table: HashMap<VR, DecodeFn> = HashMap::new();
    for vr in [
        AE, AS, CS, DA, DS, DT, IS, LO, LT, PN, SH, ST, TM, UC, UI, UR, UT,
    ] {
        table.insert(vr, decode_text);
    }
    table.insert(AT, decode_tag);
    table.insert(FL, decode_f32);
    table.insert(FD, decode_f64);
    table.insert(SL, decode_i32);
    table.insert(SV, decode_i64);
    table.insert(UL, decode_u32);
    table.insert(OB, decode_bytes);
    table.insert(UN, decode_bytes);
    table.insert(US, decode_u16);
    table.insert(OW, decode_u16);
    table.insert(SS, decode_i16);
    table.insert(Implicit, decode_implicit);
    table
});

/// Check whether values of the given representation are decoded.
///
/// The values of all other representations are skipped.
pub fn has_decoder(vr: VR) -> bool {
    DECODERS.contains_key(&vr)
}

/// Decode the value bytes of an element with the given value representation.
///
/// Returns `None` if the representation has no decoding routine.
/// Values too short for their representation
/// result in an error.
pub fn decode_value(vr: VR, bytes: &[u8], ctx: &ParseContext) -> Option<io::Result<Value>> {
    DECODERS.get(&vr).map(|decode| decode(bytes, ctx))
}

fn reader(bytes: &[u8], order: Endianness) -> ByteOrdered<&[u8], Endianness> {
    ByteOrdered::runtime(bytes, order)
}

fn decode_text(bytes: &[u8], ctx: &ParseContext) -> io::Result<Value> {
    Ok(Value::Text(ctx.charset.decode(bytes)))
}

fn decode_bytes(bytes: &[u8], _: &ParseContext) -> io::Result<Value> {
    Ok(Value::Bytes(bytes.to_vec()))
}

fn decode_tag(bytes: &[u8], ctx: &ParseContext) -> io::Result<Value> {
    let mut r = reader(bytes, ctx.byte_order);
    let group = r.read_u16()?;
    let element = r.read_u16()?;
    Ok(Value::TagPair([group, element]))
}

/// Generate a decoding routine for a binary number type
/// which yields multiple numbers only when the value holds
/// a whole number of them and more than one.
macro_rules! multi_if_fits {
    ($name: ident, $size: expr, $read: ident, $single: ident, $multi: ident) => {
        fn $name(bytes: &[u8], ctx: &ParseContext) -> io::Result<Value> {
            let mut r = reader(bytes, ctx.byte_order);
            if bytes.len() % $size == 0 && bytes.len() > $size {
                let values = (0..bytes.len() / $size)
                    .map(|_| r.$read().map(Into::into))
                    .collect::<io::Result<C<_>>>()?;
                Ok(Value::$multi(values))
            } else {
                Ok(Value::$single(r.$read()?.into()))
            }
        }
    };
}

multi_if_fits!(decode_f32, 4, read_f32, F32, F32s);
multi_if_fits!(decode_f64, 8, read_f64, F64, F64s);
multi_if_fits!(decode_i32, 4, read_i32, I32, I32s);
multi_if_fits!(decode_i64, 8, read_i64, I64, I64s);
multi_if_fits!(decode_u32, 4, read_u32, U32, U32s);

/// Generate a decoding routine for a 16-bit type
/// which yields a single number only for a value of exactly two bytes.
macro_rules! single_if_one {
    ($name: ident, $read: ident, $single: ident, $multi: ident) => {
        fn $name(bytes: &[u8], ctx: &ParseContext) -> io::Result<Value> {
            let mut r = reader(bytes, ctx.byte_order);
            if bytes.len() == 2 {
                Ok(Value::$single(r.$read()?))
            } else {
                let values = (0..bytes.len() / 2)
                    .map(|_| r.$read())
                    .collect::<io::Result<C<_>>>()?;
                Ok(Value::$multi(values))
            }
        }
    };
}

single_if_one!(decode_u16, read_u16, U16, U16s);
single_if_one!(decode_i16, read_i16, I16, I16s);

fn decode_implicit(bytes: &[u8], ctx: &ParseContext) -> io::Result<Value> {
    if bytes.len() != 2 && bytes.len() <= IMPLICIT_TEXT_MAX_LEN {
        decode_text(bytes, ctx)
    } else {
        decode_u16(bytes, ctx)
    }
}
