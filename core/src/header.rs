//! This module contains the basic data types for interpreting DICOM data element headers:
//! the attribute tag and the value representation registry.
//!
//! The value representation registry maps the two-byte codes found
//! in explicit VR streams to [`VR`] variants,
//! and classifies each variant by how its value length is encoded
//! (see [`LengthClass`]).

use std::fmt;
use std::str::FromStr;

/// Idiomatic alias for a tag's group number.
pub type GroupNumber = u16;
/// Idiomatic alias for a tag's element number.
pub type ElementNumber = u16;

/// The data type for DICOM data element tags.
///
/// A tag is a `(group, element)` pair,
/// which also admits a combined 32-bit form (`group << 16 | element`).
/// Tags are totally ordered by group first, then by element,
/// which is the same order as their combined form.
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy)]
pub struct Tag(pub GroupNumber, pub ElementNumber);

impl Tag {
    /// Getter for the tag's group value.
    #[inline]
    pub fn group(self) -> GroupNumber {
        self.0
    }

    /// Getter for the tag's element value.
    #[inline]
    pub fn element(self) -> ElementNumber {
        self.1
    }

    /// Create a tag from its combined 32-bit form.
    #[inline]
    pub fn from_u32(value: u32) -> Tag {
        Tag((value >> 16) as u16, (value & 0xFFFF) as u16)
    }

    /// Retrieve the combined 32-bit form of the tag.
    #[inline]
    pub fn to_u32(self) -> u32 {
        (u32::from(self.0) << 16) | u32::from(self.1)
    }

    /// Check whether the tag belongs to a private group (odd group number).
    #[inline]
    pub fn is_private(self) -> bool {
        self.0 & 1 == 1
    }

    /// Check whether this is a private content creator tag:
    /// an odd group with element number `0x0010`.
    #[inline]
    pub fn is_private_creator(self) -> bool {
        self.is_private() && self.1 == 0x0010
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Tag({:#06X?}, {:#06X?})", self.0, self.1)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:04X},{:04X})", self.0, self.1)
    }
}

impl PartialEq<(u16, u16)> for Tag {
    fn eq(&self, other: &(u16, u16)) -> bool {
        self.0 == other.0 && self.1 == other.1
    }
}

impl From<(u16, u16)> for Tag {
    #[inline]
    fn from(value: (u16, u16)) -> Tag {
        Tag(value.0, value.1)
    }
}

impl From<[u16; 2]> for Tag {
    #[inline]
    fn from(value: [u16; 2]) -> Tag {
        Tag(value[0], value[1])
    }
}

impl From<u32> for Tag {
    #[inline]
    fn from(value: u32) -> Tag {
        Tag::from_u32(value)
    }
}

/// The way in which the value length of an element is encoded,
/// given the value representation found in the element header.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub enum LengthClass {
    /// Two reserved bytes follow the VR code,
    /// then a 32-bit length.
    LongExplicit,
    /// A 16-bit length follows the VR code.
    ShortExplicit,
    /// There is no explicit VR in the stream:
    /// the four bytes after the tag are interpreted as a length.
    ImplicitFallback,
}

/// An enum type for a DICOM value representation.
///
/// Besides the standard codes,
/// three sentinel variants are part of the registry:
/// [`VR::QQ`], [`VR::Implicit`] and [`VR::Reserved`].
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone, Ord, PartialOrd)]
pub enum VR {
    /// Application Entity
    AE,
    /// Age String
    AS,
    /// Attribute Tag
    AT,
    /// Code String
    CS,
    /// Date
    DA,
    /// Decimal String
    DS,
    /// Date Time
    DT,
    /// Floating Point Single
    FL,
    /// Floating Point Double
    FD,
    /// Integer String
    IS,
    /// Long String
    LO,
    /// Long Text
    LT,
    /// Other Byte
    OB,
    /// Other Double
    OD,
    /// Other Float
    OF,
    /// Other Long
    OL,
    /// Other Very Long
    OV,
    /// Other Word
    OW,
    /// Person Name
    PN,
    /// Short String
    SH,
    /// Signed Long
    SL,
    /// Sequence of Items
    SQ,
    /// Signed Short
    SS,
    /// Short Text
    ST,
    /// Signed Very Long
    SV,
    /// Time
    TM,
    /// Unlimited Characters
    UC,
    /// Unique Identifier (UID)
    UI,
    /// Unsigned Long
    UL,
    /// Unknown
    UN,
    /// Universal Resource Identifier or Universal Resource Locator (URI/URL)
    UR,
    /// Unsigned Short
    US,
    /// Unlimited Text
    UT,
    /// Unsigned Very Long
    UV,
    /// The `??` code, written by producers which emitted
    /// the explicit VR bytes in the wrong byte order.
    /// It is followed by a 16-bit length.
    QQ,
    /// No explicit VR was present in the stream.
    Implicit,
    /// The reserved code `0xFFFF`.
    Reserved,
}

impl VR {
    /// Obtain the value representation corresponding to the given two bytes.
    ///
    /// Standard codes are two upper case alphabetic characters.
    /// The sentinel codes `??` and `0xFFFF` are also recognized.
    /// [`VR::Implicit`] is never returned.
    pub fn from_binary(chars: [u8; 2]) -> Option<Self> {
        use VR::*;
        let vr = match &chars {
            b"AE" => AE,
            b"AS" => AS,
            b"AT" => AT,
            b"CS" => CS,
            b"DA" => DA,
            b"DS" => DS,
            b"DT" => DT,
            b"FL" => FL,
            b"FD" => FD,
            b"IS" => IS,
            b"LO" => LO,
            b"LT" => LT,
            b"OB" => OB,
            b"OD" => OD,
            b"OF" => OF,
            b"OL" => OL,
            b"OV" => OV,
            b"OW" => OW,
            b"PN" => PN,
            b"SH" => SH,
            b"SL" => SL,
            b"SQ" => SQ,
            b"SS" => SS,
            b"ST" => ST,
            b"SV" => SV,
            b"TM" => TM,
            b"UC" => UC,
            b"UI" => UI,
            b"UL" => UL,
            b"UN" => UN,
            b"UR" => UR,
            b"US" => US,
            b"UT" => UT,
            b"UV" => UV,
            b"??" => QQ,
            [0xFF, 0xFF] => Reserved,
            _ => return None,
        };
        Some(vr)
    }

    /// Check whether the two bytes have the shape of a standard VR code
    /// (two upper case ASCII letters),
    /// regardless of whether the code is registered.
    pub fn looks_like_code(chars: [u8; 2]) -> bool {
        chars.iter().all(u8::is_ascii_uppercase)
    }

    /// Retrieve the length encoding class of this value representation.
    pub fn length_class(self) -> LengthClass {
        use VR::*;
        match self {
            OB | OD | OF | OL | OV | OW | SQ | SV | UC | UN | UR | UT | UV => {
                LengthClass::LongExplicit
            }
            Implicit | Reserved => LengthClass::ImplicitFallback,
            _ => LengthClass::ShortExplicit,
        }
    }

    /// Retrieve a string representation of this VR.
    pub fn to_string(self) -> &'static str {
        use VR::*;
        match self {
            AE => "AE",
            AS => "AS",
            AT => "AT",
            CS => "CS",
            DA => "DA",
            DS => "DS",
            DT => "DT",
            FL => "FL",
            FD => "FD",
            IS => "IS",
            LO => "LO",
            LT => "LT",
            OB => "OB",
            OD => "OD",
            OF => "OF",
            OL => "OL",
            OV => "OV",
            OW => "OW",
            PN => "PN",
            SH => "SH",
            SL => "SL",
            SQ => "SQ",
            SS => "SS",
            ST => "ST",
            SV => "SV",
            TM => "TM",
            UC => "UC",
            UI => "UI",
            UL => "UL",
            UN => "UN",
            UR => "UR",
            US => "US",
            UT => "UT",
            UV => "UV",
            QQ => "??",
            Implicit => "--",
            Reserved => "RESERVED",
        }
    }

    /// Retrieve a copy of this VR's byte representation,
    /// or `None` for [`VR::Implicit`], which has no code.
    pub fn to_bytes(self) -> Option<[u8; 2]> {
        match self {
            VR::Implicit => None,
            VR::Reserved => Some([0xFF, 0xFF]),
            vr => {
                let bytes = vr.to_string().as_bytes();
                Some([bytes[0], bytes[1]])
            }
        }
    }
}

/// Obtain the value representation corresponding to the given string.
/// The string should hold exactly two alphabetic characters
/// in upper case, otherwise no match is made.
impl FromStr for VR {
    type Err = &'static str;

    fn from_str(string: &str) -> std::result::Result<Self, Self::Err> {
        let bytes = string.as_bytes();
        if bytes.len() != 2 {
            return Err("no such value representation");
        }
        VR::from_binary([bytes[0], bytes[1]]).ok_or("no such value representation")
    }
}

impl fmt::Display for VR {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(VR::to_string(*self))
    }
}
