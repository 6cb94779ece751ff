//! Tag byte table.
//!
//! Every encoded unit starts with one of these bytes. The `FIX*` and
//! `NEGATIVE_FIXINT` entries are prefixes: the low bits carry a small value or
//! length inline.

/// One-byte format markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Marker {
    PositiveFixint = 0x00,
    Fixmap = 0x80,
    Fixarray = 0x90,
    Fixstr = 0xa0,
    Nil = 0xc0,
    False = 0xc2,
    True = 0xc3,
    Bin8 = 0xc4,
    Bin16 = 0xc5,
    Bin32 = 0xc6,
    Float32 = 0xca,
    Uint8 = 0xcc,
    Uint16 = 0xcd,
    Uint32 = 0xce,
    Int8 = 0xd0,
    Int16 = 0xd1,
    Int32 = 0xd2,
    Str8 = 0xd9,
    Str16 = 0xda,
    Str32 = 0xdb,
    Array16 = 0xdc,
    Array32 = 0xdd,
    Map16 = 0xde,
    Map32 = 0xdf,
    NegativeFixint = 0xe0,
}

impl Marker {
    #[inline]
    pub const fn byte(self) -> u8 {
        self as u8
    }

    /// Classifies a leading byte, folding inline-value forms onto their
    /// prefix marker. Returns `None` for bytes this encoder never emits first.
    pub const fn from_lead(byte: u8) -> Option<Marker> {
        Some(match byte {
            0x00..=0x7f => Marker::PositiveFixint,
            0x80..=0x8f => Marker::Fixmap,
            0x90..=0x9f => Marker::Fixarray,
            0xa0..=0xbf => Marker::Fixstr,
            0xc0 => Marker::Nil,
            0xc2 => Marker::False,
            0xc3 => Marker::True,
            0xc4 => Marker::Bin8,
            0xc5 => Marker::Bin16,
            0xc6 => Marker::Bin32,
            0xca => Marker::Float32,
            0xcc => Marker::Uint8,
            0xcd => Marker::Uint16,
            0xce => Marker::Uint32,
            0xd0 => Marker::Int8,
            0xd1 => Marker::Int16,
            0xd2 => Marker::Int32,
            0xd9 => Marker::Str8,
            0xda => Marker::Str16,
            0xdb => Marker::Str32,
            0xdc => Marker::Array16,
            0xdd => Marker::Array32,
            0xde => Marker::Map16,
            0xdf => Marker::Map32,
            0xe0..=0xff => Marker::NegativeFixint,
            _ => return None,
        })
    }
}

/// Largest value stored inline in a positive fixint.
pub const MAX_POSITIVE_FIXINT: u32 = 0x7f;
/// Smallest value stored inline in a negative fixint.
pub const MIN_NEGATIVE_FIXINT: i32 = -0x20;
/// Longest text stored with a fixstr header.
pub const MAX_FIXSTR_LEN: usize = 0x1f;
/// Largest element or pair count stored in a fixarray / fixmap header.
pub const MAX_FIXCOLLECTION_LEN: usize = 0x0f;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_lead_folds_inline_forms() {
        assert_eq!(Marker::from_lead(0x05), Some(Marker::PositiveFixint));
        assert_eq!(Marker::from_lead(0x8f), Some(Marker::Fixmap));
        assert_eq!(Marker::from_lead(0x93), Some(Marker::Fixarray));
        assert_eq!(Marker::from_lead(0xbf), Some(Marker::Fixstr));
        assert_eq!(Marker::from_lead(0xff), Some(Marker::NegativeFixint));
    }

    #[test]
    fn from_lead_rejects_unused_bytes() {
        for byte in [0xc1, 0xc7, 0xc8, 0xc9, 0xcb, 0xcf, 0xd3, 0xd4, 0xd8] {
            assert_eq!(Marker::from_lead(byte), None, "byte {byte:#04x}");
        }
    }

    #[test]
    fn byte_matches_discriminant() {
        assert_eq!(Marker::Str8.byte(), 0xd9);
        assert_eq!(Marker::from_lead(Marker::Map32.byte()), Some(Marker::Map32));
    }
}
