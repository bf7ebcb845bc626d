//! PackStream marker byte constants.
//!
//! PackStream partitions the 256-byte marker space into tiny inline ranges
//! (where the low nibble carries a count or is the value itself) and
//! explicit sized-prefix markers. This table is the single source of truth
//! for both [`crate::encode`] and [`crate::decode`].

// Null
pub const NULL: u8 = 0xC0;

// Boolean
pub const FALSE: u8 = 0xC2;
pub const TRUE: u8 = 0xC3;

// Float (IEEE 754 binary64, big-endian)
pub const FLOAT_64: u8 = 0xC1;

// Integer, beyond the TINY_INT range.
pub const INT_8: u8 = 0xC8;
pub const INT_16: u8 = 0xC9;
pub const INT_32: u8 = 0xCA;
pub const INT_64: u8 = 0xCB;

// TINY_INT: single byte, value inline.
// Positive: 0x00..=0x7F (0..127)
// Negative: 0xF0..=0xFF (-16..-1)
pub const TINY_INT_POSITIVE_MAX: u8 = 0x7F;
pub const TINY_INT_NEGATIVE_MIN: u8 = 0xF0;

// String
// TINY_STRING: 0x80..=0x8F (high nibble 0x8, low = byte length 0..15)
pub const TINY_STRING_NIBBLE: u8 = 0x80;
pub const STRING_8: u8 = 0xD0;
pub const STRING_16: u8 = 0xD1;
pub const STRING_32: u8 = 0xD2;

// List
// TINY_LIST: 0x90..=0x9F (high nibble 0x9, low = item count 0..15)
pub const TINY_LIST_NIBBLE: u8 = 0x90;
pub const LIST_8: u8 = 0xD4;
pub const LIST_16: u8 = 0xD5;
pub const LIST_32: u8 = 0xD6;

// Map
// TINY_MAP: 0xA0..=0xAF (high nibble 0xA, low = pair count 0..15)
pub const TINY_MAP_NIBBLE: u8 = 0xA0;
pub const MAP_8: u8 = 0xD8;
pub const MAP_16: u8 = 0xD9;
pub const MAP_32: u8 = 0xDA;

// Structure
// TINY_STRUCT: 0xB0..=0xBF (high nibble 0xB, low = field count 0..15),
// followed by a one-byte signature.
pub const TINY_STRUCT_NIBBLE: u8 = 0xB0;
pub const STRUCT_8: u8 = 0xDC;
pub const STRUCT_16: u8 = 0xDD;

/// High-nibble mask applied to a marker to find its tiny-form family.
pub const NIBBLE_MASK: u8 = 0xF0;

/// Returns `true` if `marker` falls in the tiny-form range for the given
/// nibble base (one of the `TINY_*_NIBBLE` constants).
pub fn is_tiny(marker: u8, nibble: u8) -> bool {
    marker & NIBBLE_MASK == nibble
}
