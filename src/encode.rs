//! PackStream encoding: [`Value`] → bytes.

use crate::buffer::WriteBuffer;
use crate::error::PackStreamError;
use crate::marker;
use crate::value::{Map, Value};

/// Largest list/map element count a 4-byte length prefix can carry.
const MAX_CONTAINER_LEN: usize = u32::MAX as usize;

/// Largest structure field count a 2-byte length prefix can carry
/// (strictly less than 2^16, per the wire contract).
const MAX_STRUCT_FIELDS: usize = u16::MAX as usize;

/// Encodes `value` into `buf` using PackStream format.
///
/// Recursively dispatches on the value's variant. All output goes to `buf`;
/// there is no hidden I/O. Fails with `Range` if a list/map/string exceeds
/// the wire's length-prefix capacity, or if a structure has too many fields.
pub fn encode_value(buf: &mut WriteBuffer, value: &Value) -> Result<(), PackStreamError> {
    match value {
        Value::Null => Ok(encode_null(buf)),
        Value::Bool(b) => Ok(encode_bool(buf, *b)),
        Value::Integer(i) => Ok(encode_int(buf, *i)),
        Value::Float(f) => Ok(encode_float(buf, *f)),
        Value::String(s) => encode_string(buf, s),
        Value::List(items) => encode_list(buf, items),
        Value::Map(map) => encode_map(buf, map),
        Value::Structure { signature, fields } => encode_structure(buf, *signature, fields),
    }
}

/// Encodes `value` into a freshly allocated byte vector.
pub fn encode_bytes(value: &Value) -> Result<Vec<u8>, PackStreamError> {
    let mut buf = WriteBuffer::new();
    encode_value(&mut buf, value)?;
    Ok(buf.finish())
}

/// Encodes `value` into the given `buf`. Equivalent to [`encode_value`] with
/// the arguments in `(value, writer)` order, matching the host-interface
/// naming used elsewhere in this crate's API.
pub fn encode_into(value: &Value, buf: &mut WriteBuffer) -> Result<(), PackStreamError> {
    encode_value(buf, value)
}

pub fn encode_null(buf: &mut WriteBuffer) {
    buf.write_byte(marker::NULL);
}

pub fn encode_bool(buf: &mut WriteBuffer, value: bool) {
    buf.write_byte(if value { marker::TRUE } else { marker::FALSE });
}

/// Encodes an integer using the smallest PackStream representation that can
/// hold it, per the tiny-int / Int8 / Int16 / Int32 / Int64 tie-break.
pub fn encode_int(buf: &mut WriteBuffer, value: i64) {
    if (-16..=127).contains(&value) {
        buf.write_byte(value as u8);
    } else if i64::from(i8::MIN) <= value && value <= i64::from(i8::MAX) {
        buf.write_byte(marker::INT_8);
        buf.write_i8(value as i8);
    } else if i64::from(i16::MIN) <= value && value <= i64::from(i16::MAX) {
        buf.write_byte(marker::INT_16);
        buf.write_i16(value as i16);
    } else if i64::from(i32::MIN) <= value && value <= i64::from(i32::MAX) {
        buf.write_byte(marker::INT_32);
        buf.write_i32(value as i32);
    } else {
        buf.write_byte(marker::INT_64);
        buf.write_i64(value);
    }
}

/// Encodes a double as its exact big-endian IEEE-754 bit pattern. NaN
/// payloads and the sign of zero are never canonicalized.
pub fn encode_float(buf: &mut WriteBuffer, value: f64) {
    buf.write_byte(marker::FLOAT_64);
    buf.write_f64(value);
}

/// Encodes a string (length is byte count, not code-point count).
pub fn encode_string(buf: &mut WriteBuffer, value: &str) -> Result<(), PackStreamError> {
    let len = value.len();
    encode_string_header(buf, len)?;
    buf.write_bytes(value.as_bytes());
    Ok(())
}

fn encode_string_header(buf: &mut WriteBuffer, len: usize) -> Result<(), PackStreamError> {
    if len <= 15 {
        buf.write_byte(marker::TINY_STRING_NIBBLE | len as u8);
    } else if len <= 0xFF {
        buf.write_byte(marker::STRING_8);
        buf.write_byte(len as u8);
    } else if len <= 0xFFFF {
        buf.write_byte(marker::STRING_16);
        buf.write_u16(len as u16);
    } else if len <= MAX_CONTAINER_LEN {
        buf.write_byte(marker::STRING_32);
        buf.write_u32(len as u32);
    } else {
        return Err(PackStreamError::range(format!("string of {len} bytes")));
    }
    Ok(())
}

pub fn encode_list(buf: &mut WriteBuffer, items: &[Value]) -> Result<(), PackStreamError> {
    encode_list_header(buf, items.len())?;
    for item in items {
        encode_value(buf, item)?;
    }
    Ok(())
}

fn encode_list_header(buf: &mut WriteBuffer, len: usize) -> Result<(), PackStreamError> {
    if len <= 15 {
        buf.write_byte(marker::TINY_LIST_NIBBLE | len as u8);
    } else if len <= 0xFF {
        buf.write_byte(marker::LIST_8);
        buf.write_byte(len as u8);
    } else if len <= 0xFFFF {
        buf.write_byte(marker::LIST_16);
        buf.write_u16(len as u16);
    } else if len <= MAX_CONTAINER_LEN {
        buf.write_byte(marker::LIST_32);
        buf.write_u32(len as u32);
    } else {
        return Err(PackStreamError::range(format!("list of {len} elements")));
    }
    Ok(())
}

pub fn encode_map(buf: &mut WriteBuffer, map: &Map) -> Result<(), PackStreamError> {
    encode_map_header(buf, map.len())?;
    for (key, value) in map.iter() {
        encode_value(buf, key)?;
        encode_value(buf, value)?;
    }
    Ok(())
}

fn encode_map_header(buf: &mut WriteBuffer, len: usize) -> Result<(), PackStreamError> {
    if len <= 15 {
        buf.write_byte(marker::TINY_MAP_NIBBLE | len as u8);
    } else if len <= 0xFF {
        buf.write_byte(marker::MAP_8);
        buf.write_byte(len as u8);
    } else if len <= 0xFFFF {
        buf.write_byte(marker::MAP_16);
        buf.write_u16(len as u16);
    } else if len <= MAX_CONTAINER_LEN {
        buf.write_byte(marker::MAP_32);
        buf.write_u32(len as u32);
    } else {
        return Err(PackStreamError::range(format!("map of {len} pairs")));
    }
    Ok(())
}

pub fn encode_structure(
    buf: &mut WriteBuffer,
    signature: u8,
    fields: &[Value],
) -> Result<(), PackStreamError> {
    let len = fields.len();
    if len >= MAX_STRUCT_FIELDS + 1 {
        return Err(PackStreamError::range(format!(
            "structure of {len} fields (signature 0x{signature:02X})"
        )));
    }
    encode_struct_header(buf, len)?;
    buf.write_byte(signature);
    for field in fields {
        encode_value(buf, field)?;
    }
    Ok(())
}

fn encode_struct_header(buf: &mut WriteBuffer, len: usize) -> Result<(), PackStreamError> {
    if len <= 15 {
        buf.write_byte(marker::TINY_STRUCT_NIBBLE | len as u8);
    } else if len <= 0xFF {
        buf.write_byte(marker::STRUCT_8);
        buf.write_byte(len as u8);
    } else {
        // len is already known to be <= 0xFFFF (checked by the caller).
        buf.write_byte(marker::STRUCT_16);
        buf.write_u16(len as u16);
    }
    Ok(())
}
