//! PackStream — a binary serialization codec for the Bolt wire protocol.
//!
//! PackStream is the self-describing binary format Bolt uses for its
//! message payloads: a marker byte dispatches to one of a closed set of
//! value shapes (null, boolean, integer, float, string, list, map,
//! structure), with length-prefixed container framing and a smallest-width
//! integer encoding. This crate is the payload codec only — chunking,
//! handshakes, sessions, and transport live in a higher Bolt layer and are
//! out of scope here.
//!
//! # Architecture
//!
//! - **`value`** — the [`Value`] sum type and the insertion-ordered [`Map`]
//!   it uses for PackStream maps.
//! - **`marker`** — the marker byte table shared by encode and decode.
//! - **`buffer`** — [`WriteBuffer`], the growable sink the encoder writes
//!   into.
//! - **`cursor`** — [`ReadCursor`], the bounds-checked view the decoder
//!   reads from.
//! - **`encode`** / **`decode`** — the codec itself.
//! - **`registry`** — [`StructRegistry`], the signature → constructor map
//!   consulted when decoding a `Structure`.
//! - **`error`** — [`PackStreamError`], the codec's single error type.

pub mod buffer;
pub mod cursor;
pub mod decode;
pub mod encode;
pub mod error;
pub mod marker;
pub mod registry;
pub mod value;

pub use buffer::WriteBuffer;
pub use cursor::ReadCursor;
pub use decode::{decode_bytes, decode_next, decode_with_registry};
pub use encode::{encode_bytes, encode_into, encode_value};
pub use error::PackStreamError;
pub use registry::StructRegistry;
pub use value::{Map, Value};
