//! `ReadCursor` — the bounds-checked view the decoder reads from.

use crate::error::PackStreamError;

/// A cursor over a borrowed, immutable byte slice.
///
/// Position advances monotonically and never retreats. Every read first
/// checks that `position + width <= end`; on violation it returns
/// `PackStreamError::Truncated` rather than panicking or reading past the
/// end of the slice. The cursor borrows its input, which must outlive it.
pub struct ReadCursor<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> ReadCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    pub fn at_end(&self) -> bool {
        self.position >= self.data.len()
    }

    fn check(&self, width: usize) -> Result<(), PackStreamError> {
        if self.position + width > self.data.len() {
            Err(PackStreamError::Truncated {
                offset: self.position,
                needed: width,
                remaining: self.remaining(),
            })
        } else {
            Ok(())
        }
    }

    pub fn peek_u8(&self) -> Result<u8, PackStreamError> {
        self.check(1)?;
        Ok(self.data[self.position])
    }

    pub fn read_u8(&mut self) -> Result<u8, PackStreamError> {
        let b = self.peek_u8()?;
        self.position += 1;
        Ok(b)
    }

    pub fn read_i8(&mut self) -> Result<i8, PackStreamError> {
        Ok(self.read_u8()? as i8)
    }

    pub fn read_u16(&mut self) -> Result<u16, PackStreamError> {
        let bytes = self.read_bytes(2)?;
        Ok(u16::from_be_bytes(bytes.try_into().unwrap()))
    }

    pub fn read_i16(&mut self) -> Result<i16, PackStreamError> {
        Ok(self.read_u16()? as i16)
    }

    pub fn read_u32(&mut self) -> Result<u32, PackStreamError> {
        let bytes = self.read_bytes(4)?;
        Ok(u32::from_be_bytes(bytes.try_into().unwrap()))
    }

    pub fn read_i32(&mut self) -> Result<i32, PackStreamError> {
        Ok(self.read_u32()? as i32)
    }

    pub fn read_u64(&mut self) -> Result<u64, PackStreamError> {
        let bytes = self.read_bytes(8)?;
        Ok(u64::from_be_bytes(bytes.try_into().unwrap()))
    }

    pub fn read_i64(&mut self) -> Result<i64, PackStreamError> {
        Ok(self.read_u64()? as i64)
    }

    pub fn read_f64(&mut self) -> Result<f64, PackStreamError> {
        let bytes = self.read_bytes(8)?;
        Ok(f64::from_be_bytes(bytes.try_into().unwrap()))
    }

    /// Reads `n` raw bytes and advances the position.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], PackStreamError> {
        self.check(n)?;
        let slice = &self.data[self.position..self.position + n];
        self.position += n;
        Ok(slice)
    }

    /// Reads `n` bytes and validates them as well-formed UTF-8 text.
    pub fn read_utf8(&mut self, n: usize) -> Result<String, PackStreamError> {
        let offset = self.position;
        let bytes = self.read_bytes(n)?;
        String::from_utf8(bytes.to_vec())
            .map_err(|source| PackStreamError::Encoding { offset, source })
    }
}
