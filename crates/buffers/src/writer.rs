//! Bounded little-endian writer over a fixed-capacity slice.

use byteorder::{ByteOrder, LittleEndian};

use crate::BufferError;

/// A binary writer that encodes into a caller-provided mutable slice.
///
/// Unlike a growable writer, the target never reallocates: a write that does
/// not fit in the remaining space fails with [`BufferError::Overflow`] and
/// leaves both the cursor and the bytes untouched.
///
/// # Example
///
/// ```
/// use frame_buffers::Writer;
///
/// let mut out = [0u8; 3];
/// let mut writer = Writer::new(&mut out);
/// writer.u16(0x0102).unwrap();
/// assert!(writer.u16(0x0304).is_err());
/// assert_eq!(writer.x, 2);
/// assert_eq!(out, [0x02, 0x01, 0x00]);
/// ```
#[derive(Debug)]
pub struct Writer<'a> {
    /// The target byte slice.
    pub uint8: &'a mut [u8],
    /// Current cursor position.
    pub x: usize,
}

impl<'a> Writer<'a> {
    /// Creates a writer positioned at the start of `uint8`.
    pub fn new(uint8: &'a mut [u8]) -> Self {
        Self { uint8, x: 0 }
    }

    /// Creates a writer positioned at `x`, clamped to the slice length.
    pub fn at(uint8: &'a mut [u8], x: usize) -> Self {
        let x = x.min(uint8.len());
        Self { uint8, x }
    }

    /// Returns the remaining writable capacity.
    pub fn size(&self) -> usize {
        self.uint8.len() - self.x
    }

    /// Returns the bytes written so far (from the start of the slice).
    pub fn written(&self) -> &[u8] {
        &self.uint8[..self.x]
    }

    /// Reserves `size` bytes, advances the cursor and returns the slot.
    #[inline]
    pub fn slot(&mut self, size: usize) -> Result<&mut [u8], BufferError> {
        let remaining = self.size();
        if size > remaining {
            return Err(BufferError::Overflow {
                needed: size,
                remaining,
            });
        }
        let x = self.x;
        self.x += size;
        Ok(&mut self.uint8[x..x + size])
    }

    /// Copies raw bytes.
    pub fn buf(&mut self, data: &[u8]) -> Result<(), BufferError> {
        self.slot(data.len())?.copy_from_slice(data);
        Ok(())
    }

    /// Writes `count` zero bytes.
    pub fn zeros(&mut self, count: usize) -> Result<(), BufferError> {
        self.slot(count)?.fill(0);
        Ok(())
    }

    /// Writes an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self, val: u8) -> Result<(), BufferError> {
        self.slot(1)?[0] = val;
        Ok(())
    }

    /// Writes a signed 8-bit integer.
    #[inline]
    pub fn i8(&mut self, val: i8) -> Result<(), BufferError> {
        self.u8(val as u8)
    }

    /// Writes a boolean as a single `0`/`1` byte.
    #[inline]
    pub fn bool(&mut self, val: bool) -> Result<(), BufferError> {
        self.u8(u8::from(val))
    }

    /// Writes an unsigned 16-bit integer (little-endian).
    #[inline]
    pub fn u16(&mut self, val: u16) -> Result<(), BufferError> {
        LittleEndian::write_u16(self.slot(2)?, val);
        Ok(())
    }

    /// Writes a signed 16-bit integer (little-endian).
    #[inline]
    pub fn i16(&mut self, val: i16) -> Result<(), BufferError> {
        LittleEndian::write_i16(self.slot(2)?, val);
        Ok(())
    }

    /// Writes an unsigned 32-bit integer (little-endian).
    #[inline]
    pub fn u32(&mut self, val: u32) -> Result<(), BufferError> {
        LittleEndian::write_u32(self.slot(4)?, val);
        Ok(())
    }

    /// Writes a signed 32-bit integer (little-endian).
    #[inline]
    pub fn i32(&mut self, val: i32) -> Result<(), BufferError> {
        LittleEndian::write_i32(self.slot(4)?, val);
        Ok(())
    }

    /// Writes an unsigned 64-bit integer (little-endian).
    #[inline]
    pub fn u64(&mut self, val: u64) -> Result<(), BufferError> {
        LittleEndian::write_u64(self.slot(8)?, val);
        Ok(())
    }

    /// Writes a signed 64-bit integer (little-endian).
    #[inline]
    pub fn i64(&mut self, val: i64) -> Result<(), BufferError> {
        LittleEndian::write_i64(self.slot(8)?, val);
        Ok(())
    }

    /// Writes a 32-bit floating point number (little-endian).
    #[inline]
    pub fn f32(&mut self, val: f32) -> Result<(), BufferError> {
        LittleEndian::write_f32(self.slot(4)?, val);
        Ok(())
    }

    /// Writes a 64-bit floating point number (little-endian).
    #[inline]
    pub fn f64(&mut self, val: f64) -> Result<(), BufferError> {
        LittleEndian::write_f64(self.slot(8)?, val);
        Ok(())
    }
}
