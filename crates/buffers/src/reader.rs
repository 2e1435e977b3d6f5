//! Bounded little-endian reader with cursor tracking.

use byteorder::{ByteOrder, LittleEndian};

use crate::BufferError;

/// A binary reader over a byte slice.
///
/// The reader keeps a cursor `x` and a logical end `end`. Every read checks
/// that enough bytes remain before `end`; on failure the cursor is left where
/// it was, so a caller can retry once more data has arrived.
///
/// # Example
///
/// ```
/// use frame_buffers::Reader;
///
/// let data = [0x01, 0x03, 0x02];
/// let mut reader = Reader::new(&data);
///
/// assert_eq!(reader.u8().unwrap(), 0x01);
/// assert_eq!(reader.u16().unwrap(), 0x0203);
/// assert!(reader.u8().is_err());
/// assert_eq!(reader.x, 3);
/// ```
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    /// The underlying byte slice.
    pub uint8: &'a [u8],
    /// Current cursor position.
    pub x: usize,
    /// End position (exclusive).
    pub end: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader for the given byte slice.
    pub fn new(uint8: &'a [u8]) -> Self {
        let end = uint8.len();
        Self { uint8, x: 0, end }
    }

    /// Creates a reader starting at `x` that treats `end` as the logical end.
    ///
    /// `end` is clamped to the slice length and `x` to `end`.
    pub fn from_slice(uint8: &'a [u8], x: usize, end: usize) -> Self {
        let end = end.min(uint8.len());
        Self {
            uint8,
            x: x.min(end),
            end,
        }
    }

    /// Resets the reader with a new byte slice.
    pub fn reset(&mut self, uint8: &'a [u8]) {
        self.x = 0;
        self.end = uint8.len();
        self.uint8 = uint8;
    }

    /// Returns the number of remaining bytes.
    pub fn size(&self) -> usize {
        self.end.saturating_sub(self.x)
    }

    #[inline]
    fn ensure(&self, needed: usize) -> Result<(), BufferError> {
        let remaining = self.size();
        if needed > remaining {
            return Err(BufferError::EndOfBuffer { needed, remaining });
        }
        Ok(())
    }

    /// Advances the cursor by the given number of bytes.
    pub fn skip(&mut self, length: usize) -> Result<(), BufferError> {
        self.ensure(length)?;
        self.x += length;
        Ok(())
    }

    /// Returns a subslice of the given size and advances the cursor.
    pub fn buf(&mut self, size: usize) -> Result<&'a [u8], BufferError> {
        self.ensure(size)?;
        let x = self.x;
        self.x += size;
        Ok(&self.uint8[x..self.x])
    }

    /// Returns the next `size` bytes without advancing the cursor.
    pub fn peek_buf(&self, size: usize) -> Result<&'a [u8], BufferError> {
        self.ensure(size)?;
        Ok(&self.uint8[self.x..self.x + size])
    }

    /// Reads an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self) -> Result<u8, BufferError> {
        Ok(self.buf(1)?[0])
    }

    /// Reads a signed 8-bit integer.
    #[inline]
    pub fn i8(&mut self) -> Result<i8, BufferError> {
        Ok(self.buf(1)?[0] as i8)
    }

    /// Reads a one-byte boolean; any non-zero byte is `true`.
    #[inline]
    pub fn bool(&mut self) -> Result<bool, BufferError> {
        Ok(self.buf(1)?[0] != 0)
    }

    /// Reads an unsigned 16-bit integer (little-endian).
    #[inline]
    pub fn u16(&mut self) -> Result<u16, BufferError> {
        Ok(LittleEndian::read_u16(self.buf(2)?))
    }

    /// Reads a signed 16-bit integer (little-endian).
    #[inline]
    pub fn i16(&mut self) -> Result<i16, BufferError> {
        Ok(LittleEndian::read_i16(self.buf(2)?))
    }

    /// Reads an unsigned 32-bit integer (little-endian).
    #[inline]
    pub fn u32(&mut self) -> Result<u32, BufferError> {
        Ok(LittleEndian::read_u32(self.buf(4)?))
    }

    /// Reads a signed 32-bit integer (little-endian).
    #[inline]
    pub fn i32(&mut self) -> Result<i32, BufferError> {
        Ok(LittleEndian::read_i32(self.buf(4)?))
    }

    /// Reads an unsigned 64-bit integer (little-endian).
    #[inline]
    pub fn u64(&mut self) -> Result<u64, BufferError> {
        Ok(LittleEndian::read_u64(self.buf(8)?))
    }

    /// Reads a signed 64-bit integer (little-endian).
    #[inline]
    pub fn i64(&mut self) -> Result<i64, BufferError> {
        Ok(LittleEndian::read_i64(self.buf(8)?))
    }

    /// Reads a 32-bit floating point number (little-endian).
    #[inline]
    pub fn f32(&mut self) -> Result<f32, BufferError> {
        Ok(LittleEndian::read_f32(self.buf(4)?))
    }

    /// Reads a 64-bit floating point number (little-endian).
    #[inline]
    pub fn f64(&mut self) -> Result<f64, BufferError> {
        Ok(LittleEndian::read_f64(self.buf(8)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u8() {
        let data = [0x01, 0x02, 0x03];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.u8().unwrap(), 0x01);
        assert_eq!(reader.u8().unwrap(), 0x02);
        assert_eq!(reader.u8().unwrap(), 0x03);
    }

    #[test]
    fn test_u16_is_little_endian() {
        let data = [0x01, 0x02, 0x03, 0x04];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.u16().unwrap(), 0x0201);
        assert_eq!(reader.u16().unwrap(), 0x0403);
    }

    #[test]
    fn test_u32() {
        let data = [0x01, 0x02, 0x03, 0x04];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.u32().unwrap(), 0x04030201);
    }

    #[test]
    fn test_short_read_keeps_cursor() {
        let data = [0x01, 0x02, 0x03];
        let mut reader = Reader::new(&data);
        reader.skip(1).unwrap();
        assert_eq!(
            reader.u32(),
            Err(BufferError::EndOfBuffer {
                needed: 4,
                remaining: 2
            })
        );
        assert_eq!(reader.x, 1);
        assert_eq!(reader.u16().unwrap(), 0x0302);
    }

    #[test]
    fn test_logical_end() {
        let data = [0x01, 0x02, 0x03, 0x04, 0x05];
        let mut reader = Reader::from_slice(&data, 1, 3);
        assert_eq!(reader.size(), 2);
        assert_eq!(reader.u8().unwrap(), 0x02);
        assert_eq!(reader.u8().unwrap(), 0x03);
        assert!(reader.u8().is_err());
    }

    #[test]
    fn test_bool() {
        let data = [0x00, 0x01, 0x7f];
        let mut reader = Reader::new(&data);
        assert!(!reader.bool().unwrap());
        assert!(reader.bool().unwrap());
        assert!(reader.bool().unwrap());
    }
}
