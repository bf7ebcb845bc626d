//! PackStream decoding: bytes → [`Value`].

use crate::cursor::ReadCursor;
use crate::error::PackStreamError;
use crate::marker;
use crate::registry::StructRegistry;
use crate::value::{Map, Value};

/// Decodes a complete PackStream value from `bytes`, using an empty registry
/// (unregistered structures decode to a generic `Value::Structure`).
pub fn decode_bytes(bytes: &[u8]) -> Result<Value, PackStreamError> {
    let registry = StructRegistry::new();
    decode_with_registry(bytes, &registry)
}

/// Decodes a complete PackStream value from `bytes`, consulting `registry`
/// to reify any top-level or nested `Structure`.
pub fn decode_with_registry(
    bytes: &[u8],
    registry: &StructRegistry,
) -> Result<Value, PackStreamError> {
    let mut cursor = ReadCursor::new(bytes);
    decode_next(&mut cursor, Some(registry))
}

/// Reads one value from `cursor`, recursing into containers and structures.
///
/// A decoding failure anywhere inside a container propagates immediately; no
/// partial container is ever returned, and the cursor is left at whatever
/// position the failing read stopped at (single-use per top-level call).
pub fn decode_next(
    cursor: &mut ReadCursor<'_>,
    registry: Option<&StructRegistry>,
) -> Result<Value, PackStreamError> {
    let offset = cursor.position();
    let m = cursor.read_u8()?;

    match m {
        marker::NULL => Ok(Value::Null),
        marker::FALSE => Ok(Value::Bool(false)),
        marker::TRUE => Ok(Value::Bool(true)),

        marker::FLOAT_64 => Ok(Value::Float(cursor.read_f64()?)),

        marker::INT_8 => Ok(Value::Integer(i64::from(cursor.read_i8()?))),
        marker::INT_16 => Ok(Value::Integer(i64::from(cursor.read_i16()?))),
        marker::INT_32 => Ok(Value::Integer(i64::from(cursor.read_i32()?))),
        marker::INT_64 => Ok(Value::Integer(cursor.read_i64()?)),

        marker::STRING_8 => {
            let len = cursor.read_u8()? as usize;
            decode_string(cursor, len)
        }
        marker::STRING_16 => {
            let len = cursor.read_u16()? as usize;
            decode_string(cursor, len)
        }
        marker::STRING_32 => {
            let len = cursor.read_u32()? as usize;
            decode_string(cursor, len)
        }

        marker::LIST_8 => {
            let len = cursor.read_u8()? as usize;
            decode_list(cursor, registry, len)
        }
        marker::LIST_16 => {
            let len = cursor.read_u16()? as usize;
            decode_list(cursor, registry, len)
        }
        marker::LIST_32 => {
            let len = cursor.read_u32()? as usize;
            decode_list(cursor, registry, len)
        }

        marker::MAP_8 => {
            let len = cursor.read_u8()? as usize;
            decode_map(cursor, registry, len)
        }
        marker::MAP_16 => {
            let len = cursor.read_u16()? as usize;
            decode_map(cursor, registry, len)
        }
        marker::MAP_32 => {
            let len = cursor.read_u32()? as usize;
            decode_map(cursor, registry, len)
        }

        marker::STRUCT_8 => {
            let len = cursor.read_u8()? as usize;
            let signature = cursor.read_u8()?;
            decode_structure(cursor, registry, signature, len)
        }
        marker::STRUCT_16 => {
            let len = cursor.read_u16()? as usize;
            let signature = cursor.read_u8()?;
            decode_structure(cursor, registry, signature, len)
        }

        _ if m <= marker::TINY_INT_POSITIVE_MAX => Ok(Value::Integer(i64::from(m))),
        _ if m >= marker::TINY_INT_NEGATIVE_MIN => Ok(Value::Integer(i64::from(m as i8))),

        _ if marker::is_tiny(m, marker::TINY_STRING_NIBBLE) => {
            decode_string(cursor, (m & 0x0F) as usize)
        }
        _ if marker::is_tiny(m, marker::TINY_LIST_NIBBLE) => {
            decode_list(cursor, registry, (m & 0x0F) as usize)
        }
        _ if marker::is_tiny(m, marker::TINY_MAP_NIBBLE) => {
            decode_map(cursor, registry, (m & 0x0F) as usize)
        }
        _ if marker::is_tiny(m, marker::TINY_STRUCT_NIBBLE) => {
            let signature = cursor.read_u8()?;
            decode_structure(cursor, registry, signature, (m & 0x0F) as usize)
        }

        _ => Err(PackStreamError::UnknownMarker { marker: m, offset }),
    }
}

fn decode_string(cursor: &mut ReadCursor<'_>, len: usize) -> Result<Value, PackStreamError> {
    Ok(Value::String(cursor.read_utf8(len)?))
}

fn decode_list(
    cursor: &mut ReadCursor<'_>,
    registry: Option<&StructRegistry>,
    len: usize,
) -> Result<Value, PackStreamError> {
    let mut items = Vec::with_capacity(len.min(4096));
    for _ in 0..len {
        items.push(decode_next(cursor, registry)?);
    }
    Ok(Value::List(items))
}

fn decode_map(
    cursor: &mut ReadCursor<'_>,
    registry: Option<&StructRegistry>,
    len: usize,
) -> Result<Value, PackStreamError> {
    let mut map = Map::with_capacity(len.min(4096));
    for _ in 0..len {
        let key = decode_next(cursor, registry)?;
        let value = decode_next(cursor, registry)?;
        map.insert(key, value);
    }
    Ok(Value::Map(map))
}

fn decode_structure(
    cursor: &mut ReadCursor<'_>,
    registry: Option<&StructRegistry>,
    signature: u8,
    field_count: usize,
) -> Result<Value, PackStreamError> {
    let mut fields = Vec::with_capacity(field_count.min(4096));
    for _ in 0..field_count {
        fields.push(decode_next(cursor, registry)?);
    }
    Ok(match registry {
        Some(registry) => registry.construct(signature, fields),
        None => Value::Structure { signature, fields },
    })
}
