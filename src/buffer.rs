//! `WriteBuffer` — the growable byte sink the encoder writes into.

use bytes::{BufMut, BytesMut};

use crate::error::PackStreamError;

/// A growable byte buffer with an explicit geometric growth policy.
///
/// Wraps [`bytes::BytesMut`] for the actual storage and `put_*` primitives,
/// but owns the capacity/growth decision itself: a write that would exceed
/// the remaining capacity grows to `max(2 * capacity, capacity + needed)`
/// before writing, per the PackStream wire-layer contract. This is a
/// specified behavior, not an incidental detail of `BytesMut::reserve`, so it
/// isn't left to `BytesMut`'s own (undocumented) growth curve.
#[derive(Debug, Default)]
pub struct WriteBuffer {
    inner: BytesMut,
}

impl WriteBuffer {
    pub fn new() -> Self {
        Self {
            inner: BytesMut::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: BytesMut::with_capacity(capacity),
        }
    }

    /// Ensures at least `additional` more bytes can be written without a
    /// further reallocation, growing geometrically if needed.
    pub fn ensure_capacity(&mut self, additional: usize) {
        let capacity = self.inner.capacity();
        let len = self.inner.len();
        let needed = len + additional;
        if needed > capacity {
            // `BytesMut::reserve` is relative to `len()`, not `capacity()`: it
            // guarantees `capacity() - len() >= x` for `reserve(x)`. The
            // target total capacity is `grown`, so the relative amount to
            // request is `grown - len`, not `grown - capacity`.
            let grown = capacity.saturating_mul(2).max(needed);
            self.inner.reserve(grown - len);
        }
    }

    pub fn write_byte(&mut self, byte: u8) {
        self.ensure_capacity(1);
        self.inner.put_u8(byte);
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.ensure_capacity(bytes.len());
        self.inner.put_slice(bytes);
    }

    pub fn write_u16(&mut self, value: u16) {
        self.ensure_capacity(2);
        self.inner.put_u16(value);
    }

    pub fn write_u32(&mut self, value: u32) {
        self.ensure_capacity(4);
        self.inner.put_u32(value);
    }

    pub fn write_i8(&mut self, value: i8) {
        self.ensure_capacity(1);
        self.inner.put_i8(value);
    }

    pub fn write_i16(&mut self, value: i16) {
        self.ensure_capacity(2);
        self.inner.put_i16(value);
    }

    pub fn write_i32(&mut self, value: i32) {
        self.ensure_capacity(4);
        self.inner.put_i32(value);
    }

    pub fn write_i64(&mut self, value: i64) {
        self.ensure_capacity(8);
        self.inner.put_i64(value);
    }

    pub fn write_f64(&mut self, value: f64) {
        self.ensure_capacity(8);
        self.inner.put_f64(value);
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Consumes the buffer, returning the written bytes.
    pub fn finish(self) -> Vec<u8> {
        self.inner.to_vec()
    }
}

impl TryFrom<WriteBuffer> for Vec<u8> {
    type Error = PackStreamError;

    fn try_from(buf: WriteBuffer) -> Result<Self, Self::Error> {
        Ok(buf.finish())
    }
}
