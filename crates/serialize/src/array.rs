//! Fixed- and variable-length array fields.

use std::any::Any;

use frame_buffers::{BufferError, Reader, Writer};

use crate::{Field, FieldShape, Primitive, SerializeError, MAX_VARIABLE_SIZE};

/// How an array field is laid out on the wire. Chosen once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthMode {
    /// The whole declared capacity, no prefix.
    Fixed,
    /// A 2-byte real size prefix followed by only the meaningful elements.
    Variable,
}

/// Outcome of copying into an array field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Copied {
    /// Elements actually copied.
    pub count: usize,
    /// `true` if fewer elements than requested fit in the field.
    pub truncated: bool,
}

/// A sequence of primitive elements with a declared capacity.
///
/// The backing storage is allocated at construction and never resized. In
/// [`LengthMode::Variable`] the field also tracks how many leading bytes are
/// meaningful (`real_size`), always a whole number of elements.
///
/// # Example
///
/// ```
/// use frame_serialize::{ArrayField, Field};
///
/// let mut field = ArrayField::<u16>::variable(4);
/// field.set_values(&[7, 8]);
/// assert_eq!(field.real_size(), 4);
///
/// let mut buf = [0u8; 16];
/// let end = field.write_to_buffer(&mut buf, 0).unwrap();
/// assert_eq!(&buf[..end], &[4, 0, 7, 0, 8, 0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayField<T: Primitive> {
    values: Box<[T]>,
    mode: LengthMode,
    real_size: usize,
}

impl<T: Primitive> ArrayField<T> {
    /// Creates a zeroed field of `capacity` elements.
    ///
    /// A variable field starts out empty.
    ///
    /// # Panics
    ///
    /// Panics if a variable field's byte capacity exceeds [`MAX_VARIABLE_SIZE`],
    /// which the 2-byte prefix cannot express.
    pub fn with_capacity(capacity: usize, mode: LengthMode) -> Self {
        let mut field = Self::from_vec(vec![T::default(); capacity], mode);
        if mode == LengthMode::Variable {
            field.real_size = 0;
        }
        field
    }

    /// Creates a fixed-length field of `capacity` elements.
    pub fn fixed(capacity: usize) -> Self {
        Self::with_capacity(capacity, LengthMode::Fixed)
    }

    /// Creates an empty variable-length field holding at most `capacity`
    /// elements.
    ///
    /// # Panics
    ///
    /// See [`ArrayField::with_capacity`].
    pub fn variable(capacity: usize) -> Self {
        Self::with_capacity(capacity, LengthMode::Variable)
    }

    /// Takes ownership of existing storage. Every element is meaningful, so a
    /// variable field starts out full.
    ///
    /// # Panics
    ///
    /// See [`ArrayField::with_capacity`].
    pub fn from_vec(values: Vec<T>, mode: LengthMode) -> Self {
        let declared = values.len() * T::SIZE;
        if mode == LengthMode::Variable {
            assert!(
                declared <= MAX_VARIABLE_SIZE,
                "variable field of {declared} bytes exceeds the {MAX_VARIABLE_SIZE} byte prefix range"
            );
        }
        Self {
            values: values.into_boxed_slice(),
            mode,
            real_size: declared,
        }
    }

    pub fn mode(&self) -> LengthMode {
        self.mode
    }

    /// Capacity in elements.
    pub fn capacity(&self) -> usize {
        self.values.len()
    }

    /// The meaningful elements.
    pub fn as_slice(&self) -> &[T] {
        &self.values[..self.element_count()]
    }

    /// The whole backing storage, including elements past the real size.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut [T] {
        &mut self.values
    }

    /// Sets the number of meaningful elements; `real_size` follows.
    ///
    /// Has no effect on the wire layout of a fixed field, which always
    /// spans its declared capacity.
    pub fn set_element_count(&mut self, count: usize) -> Result<(), SerializeError> {
        if count > self.capacity() {
            return Err(SerializeError::LengthTooLarge {
                real_size: count.saturating_mul(T::SIZE),
                capacity: self.declared_size(),
            });
        }
        if self.mode == LengthMode::Variable {
            self.real_size = count * T::SIZE;
        }
        Ok(())
    }

    /// Sets the meaningful byte count; the element count follows.
    pub fn set_real_size(&mut self, real_size: usize) -> Result<(), SerializeError> {
        if real_size % T::SIZE != 0 {
            return Err(SerializeError::Misaligned {
                real_size,
                type_size: T::SIZE,
            });
        }
        self.set_element_count(real_size / T::SIZE)
    }

    /// Copies `count` elements of `source`, starting at `src_offset`, into the
    /// field at `dest_offset`.
    ///
    /// The copy is truncated to what fits after `dest_offset`; the returned
    /// [`Copied`] says whether that happened. `source` only has to hold the
    /// elements actually copied. A variable field's element count becomes the
    /// number of elements copied.
    pub fn set(
        &mut self,
        source: &[T],
        dest_offset: usize,
        src_offset: usize,
        count: usize,
    ) -> Result<Copied, SerializeError> {
        if dest_offset > self.capacity() {
            return Err(SerializeError::OffsetOutOfRange {
                offset: dest_offset,
                len: self.capacity(),
            });
        }
        let copied = count.min(self.capacity() - dest_offset);
        // Only the elements that fit are read from `source`.
        let in_source = src_offset
            .checked_add(copied)
            .is_some_and(|end| end <= source.len());
        if !in_source {
            return Err(SerializeError::OffsetOutOfRange {
                offset: src_offset,
                len: source.len(),
            });
        }
        self.values[dest_offset..dest_offset + copied]
            .copy_from_slice(&source[src_offset..src_offset + copied]);
        if self.mode == LengthMode::Variable {
            self.real_size = copied * T::SIZE;
        }
        Ok(Copied {
            count: copied,
            truncated: copied < count,
        })
    }

    /// Copies as much of `source` as fits, starting at element zero.
    pub fn set_values(&mut self, source: &[T]) -> Copied {
        let copied = source.len().min(self.capacity());
        self.values[..copied].copy_from_slice(&source[..copied]);
        if self.mode == LengthMode::Variable {
            self.real_size = copied * T::SIZE;
        }
        Copied {
            count: copied,
            truncated: copied < source.len(),
        }
    }

    fn read_prefixed(&mut self, reader: &mut Reader<'_>) -> Result<(), SerializeError> {
        let real_size = reader.u16()? as usize;
        if real_size > self.declared_size() {
            tracing::debug!(
                real_size,
                capacity = self.declared_size(),
                "length prefix exceeds field capacity"
            );
            return Err(SerializeError::LengthTooLarge {
                real_size,
                capacity: self.declared_size(),
            });
        }
        if real_size % T::SIZE != 0 {
            tracing::debug!(real_size, type_size = T::SIZE, "misaligned length prefix");
            return Err(SerializeError::Misaligned {
                real_size,
                type_size: T::SIZE,
            });
        }
        let payload = reader.buf(real_size)?;
        let count = real_size / T::SIZE;
        T::decode_into(payload, &mut self.values[..count]);
        self.real_size = real_size;
        Ok(())
    }
}

impl<T: Primitive> Field for ArrayField<T> {
    fn shape(&self) -> FieldShape {
        let len = self.values.len() * T::SIZE;
        match self.mode {
            LengthMode::Fixed => FieldShape::FixedArray { len },
            LengthMode::Variable => FieldShape::VariableArray { max_len: len },
        }
    }

    fn type_size(&self) -> usize {
        T::SIZE
    }

    fn real_size(&self) -> usize {
        match self.mode {
            LengthMode::Fixed => self.declared_size(),
            LengthMode::Variable => self.real_size,
        }
    }

    /// Zeroes the whole backing storage, not just the meaningful prefix.
    fn zero(&mut self) {
        self.values.fill(T::default());
    }

    fn read(&mut self, reader: &mut Reader<'_>) -> Result<(), SerializeError> {
        match self.mode {
            LengthMode::Fixed => {
                let payload = reader.buf(self.declared_size())?;
                T::decode_into(payload, &mut self.values);
                Ok(())
            }
            LengthMode::Variable => {
                let start = reader.x;
                let result = self.read_prefixed(reader);
                if result.is_err() {
                    reader.x = start;
                }
                result
            }
        }
    }

    fn write(&self, writer: &mut Writer<'_>) -> Result<(), SerializeError> {
        let needed = self.encoded_len();
        let remaining = writer.size();
        if needed > remaining {
            return Err(BufferError::Overflow { needed, remaining }.into());
        }
        if self.mode == LengthMode::Variable {
            writer.u16(self.real_size as u16)?;
        }
        let count = self.element_count();
        T::encode_from(&self.values[..count], writer.slot(count * T::SIZE)?);
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
