//! Error types for the PackStream codec.

use crate::value::Value;

/// Errors that can occur while encoding or decoding PackStream values.
///
/// Every variant corresponds to one of the failure kinds in the PackStream
/// contract: out-of-range sizes, value shapes the encoder doesn't carry,
/// malformed or truncated wire data, and allocation failure. Every encode or
/// decode call aborts cleanly on the first error; nothing is retried or
/// partially recovered.
#[derive(Debug, thiserror::Error)]
pub enum PackStreamError {
    #[error("value out of range: {0}")]
    Range(String),

    /// No `Value` shape can actually produce this from `encode_value`: the
    /// enum is a closed sum and encoding matches it exhaustively. Kept for
    /// API completeness against the contract's seven error kinds, and for a
    /// caller-supplied `StructRegistry` constructor (or any other code
    /// converting a broader host type into `Value`) that needs to report a
    /// shape it can't carry.
    #[error("unsupported value: {0}")]
    Unsupported(String),

    /// Unreachable from this crate's own `Map`, which stores arbitrary
    /// `Value` keys by design (see DESIGN.md's map-key open-question
    /// resolution). Kept for a host `Map` type that restricts keys (e.g. to
    /// strings) and needs to reject a decoded non-conforming key.
    #[error("map key not representable: {0}")]
    UnsupportedKey(String),

    #[error("truncated input at offset {offset}: need {needed} bytes, {remaining} remaining")]
    Truncated {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    #[error("unknown marker 0x{marker:02X} at offset {offset}")]
    UnknownMarker { marker: u8, offset: usize },

    #[error("invalid UTF-8 string at offset {offset}: {source}")]
    Encoding {
        offset: usize,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("allocation failure: {0}")]
    Memory(String),
}

impl PackStreamError {
    /// Builds a `Range` error naming the offending value.
    pub fn range(value: impl std::fmt::Display) -> Self {
        Self::Range(value.to_string())
    }

    /// Builds an `Unsupported` error naming the offending value.
    pub fn unsupported(value: &Value) -> Self {
        Self::Unsupported(value.to_string())
    }

    /// Builds an `UnsupportedKey` error naming the offending key value.
    pub fn unsupported_key(key: &Value) -> Self {
        Self::UnsupportedKey(key.to_string())
    }
}
