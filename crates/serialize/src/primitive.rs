//! Fixed-width element types that fields are built from.

use std::fmt;

use byteorder::{ByteOrder, LittleEndian};
use frame_buffers::{BufferError, Reader, Writer};

/// A fixed-width value with a little-endian wire encoding.
///
/// Implemented for `u8 i8 bool u16 i16 u32 i32 u64 i64 f32 f64`.
pub trait Primitive: Copy + Default + PartialEq + fmt::Debug + 'static {
    /// Encoded width in bytes.
    const SIZE: usize;

    fn read(reader: &mut Reader<'_>) -> Result<Self, BufferError>;

    fn write(self, writer: &mut Writer<'_>) -> Result<(), BufferError>;

    /// Decodes `dst.len()` values from `src`, which holds exactly
    /// `dst.len() * SIZE` bytes.
    fn decode_into(src: &[u8], dst: &mut [Self]);

    /// Encodes `src` into `dst`, which holds exactly `src.len() * SIZE` bytes.
    fn encode_from(src: &[Self], dst: &mut [u8]);
}

impl Primitive for u8 {
    const SIZE: usize = 1;

    fn read(reader: &mut Reader<'_>) -> Result<Self, BufferError> {
        reader.u8()
    }

    fn write(self, writer: &mut Writer<'_>) -> Result<(), BufferError> {
        writer.u8(self)
    }

    fn decode_into(src: &[u8], dst: &mut [Self]) {
        dst.copy_from_slice(src);
    }

    fn encode_from(src: &[Self], dst: &mut [u8]) {
        dst.copy_from_slice(src);
    }
}

impl Primitive for i8 {
    const SIZE: usize = 1;

    fn read(reader: &mut Reader<'_>) -> Result<Self, BufferError> {
        reader.i8()
    }

    fn write(self, writer: &mut Writer<'_>) -> Result<(), BufferError> {
        writer.i8(self)
    }

    fn decode_into(src: &[u8], dst: &mut [Self]) {
        for (d, &s) in dst.iter_mut().zip(src) {
            *d = s as i8;
        }
    }

    fn encode_from(src: &[Self], dst: &mut [u8]) {
        for (d, &s) in dst.iter_mut().zip(src) {
            *d = s as u8;
        }
    }
}

impl Primitive for bool {
    const SIZE: usize = 1;

    fn read(reader: &mut Reader<'_>) -> Result<Self, BufferError> {
        reader.bool()
    }

    fn write(self, writer: &mut Writer<'_>) -> Result<(), BufferError> {
        writer.bool(self)
    }

    fn decode_into(src: &[u8], dst: &mut [Self]) {
        for (d, &s) in dst.iter_mut().zip(src) {
            *d = s != 0;
        }
    }

    fn encode_from(src: &[Self], dst: &mut [u8]) {
        for (d, &s) in dst.iter_mut().zip(src) {
            *d = u8::from(s);
        }
    }
}

macro_rules! impl_primitive {
    ($ty:ty, $size:expr, $read:ident, $write:ident, $read_into:ident, $write_into:ident) => {
        impl Primitive for $ty {
            const SIZE: usize = $size;

            #[inline]
            fn read(reader: &mut Reader<'_>) -> Result<Self, BufferError> {
                reader.$read()
            }

            #[inline]
            fn write(self, writer: &mut Writer<'_>) -> Result<(), BufferError> {
                writer.$write(self)
            }

            fn decode_into(src: &[u8], dst: &mut [Self]) {
                LittleEndian::$read_into(src, dst);
            }

            fn encode_from(src: &[Self], dst: &mut [u8]) {
                LittleEndian::$write_into(src, dst);
            }
        }
    };
}

impl_primitive!(u16, 2, u16, u16, read_u16_into, write_u16_into);
impl_primitive!(i16, 2, i16, i16, read_i16_into, write_i16_into);
impl_primitive!(u32, 4, u32, u32, read_u32_into, write_u32_into);
impl_primitive!(i32, 4, i32, i32, read_i32_into, write_i32_into);
impl_primitive!(u64, 8, u64, u64, read_u64_into, write_u64_into);
impl_primitive!(i64, 8, i64, i64, read_i64_into, write_i64_into);
impl_primitive!(f32, 4, f32, f32, read_f32_into, write_f32_into);
impl_primitive!(f64, 8, f64, f64, read_f64_into, write_f64_into);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes_match_memory_width() {
        assert_eq!(<u16 as Primitive>::SIZE, std::mem::size_of::<u16>());
        assert_eq!(<i32 as Primitive>::SIZE, std::mem::size_of::<i32>());
        assert_eq!(<f64 as Primitive>::SIZE, std::mem::size_of::<f64>());
        assert_eq!(<bool as Primitive>::SIZE, 1);
    }

    #[test]
    fn test_slice_codec_matches_scalar_codec() {
        let values = [1u32, 0xDEAD_BEEF, u32::MAX];
        let mut bulk = [0u8; 12];
        u32::encode_from(&values, &mut bulk);

        let mut single = [0u8; 12];
        let mut writer = Writer::new(&mut single);
        for v in values {
            v.write(&mut writer).unwrap();
        }
        assert_eq!(bulk, single);

        let mut back = [0u32; 3];
        u32::decode_into(&bulk, &mut back);
        assert_eq!(back, values);
    }

    #[test]
    fn test_bool_slice() {
        let mut out = [false; 3];
        bool::decode_into(&[0, 1, 9], &mut out);
        assert_eq!(out, [false, true, true]);
    }
}
