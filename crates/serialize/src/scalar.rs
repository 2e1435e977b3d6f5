//! Fixed-width scalar fields.

use std::any::Any;

use frame_buffers::{Reader, Writer};

use crate::{Field, FieldShape, Primitive, SerializeError};

/// A field holding one fixed-width value.
///
/// Encodes as exactly `T::SIZE` little-endian bytes regardless of value.
///
/// # Example
///
/// ```
/// use frame_serialize::{Field, LongField};
///
/// let field = LongField::new(0x1234_5678_90AB_CDEF);
/// let mut buf = [0u8; 64];
/// let cursor = field.write_to_buffer(&mut buf, 0).unwrap();
/// assert_eq!(cursor, 8);
///
/// let mut back = LongField::default();
/// assert_eq!(back.read_from_buffer(&buf, 0).unwrap(), 8);
/// assert_eq!(back.get(), 0x1234_5678_90AB_CDEF);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Scalar<T: Primitive> {
    pub value: T,
}

impl<T: Primitive> Scalar<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    pub fn get(&self) -> T {
        self.value
    }

    pub fn set(&mut self, value: T) {
        self.value = value;
    }
}

impl<T: Primitive> From<T> for Scalar<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: Primitive> Field for Scalar<T> {
    fn shape(&self) -> FieldShape {
        FieldShape::Scalar { width: T::SIZE }
    }

    fn type_size(&self) -> usize {
        T::SIZE
    }

    fn real_size(&self) -> usize {
        T::SIZE
    }

    fn zero(&mut self) {
        self.value = T::default();
    }

    fn read(&mut self, reader: &mut Reader<'_>) -> Result<(), SerializeError> {
        self.value = T::read(reader)?;
        Ok(())
    }

    fn write(&self, writer: &mut Writer<'_>) -> Result<(), SerializeError> {
        self.value.write(writer)?;
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

pub type ByteField = Scalar<u8>;
pub type CharField = Scalar<i8>;
pub type BoolField = Scalar<bool>;
pub type ShortField = Scalar<i16>;
pub type UShortField = Scalar<u16>;
pub type IntField = Scalar<i32>;
pub type UIntField = Scalar<u32>;
pub type LongField = Scalar<i64>;
pub type ULongField = Scalar<u64>;
pub type FloatField = Scalar<f32>;
pub type DoubleField = Scalar<f64>;
