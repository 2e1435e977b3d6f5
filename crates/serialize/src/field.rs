//! The capability shared by every serializable field.

use std::any::Any;

use frame_buffers::{BufferError, ByteBuffer, Reader, Writer};

use crate::{FieldShape, SerializeError};

/// A self-describing typed unit of a message.
///
/// A field knows its element width, its declared and real sizes and how to
/// encode/decode itself at a cursor. Reads and writes are all-or-nothing: on
/// error the cursor is where it was before the call.
pub trait Field: Any {
    /// Wire layout of this field.
    fn shape(&self) -> FieldShape;

    /// Width of one element in bytes.
    fn type_size(&self) -> usize;

    /// Number of meaningful payload bytes. Always the declared size for
    /// fixed-length fields.
    fn real_size(&self) -> usize;

    /// Resets the value to zero.
    fn zero(&mut self);

    /// Decodes the field from `reader`, advancing it on success.
    fn read(&mut self, reader: &mut Reader<'_>) -> Result<(), SerializeError>;

    /// Encodes the field into `writer`, advancing it on success.
    fn write(&self, writer: &mut Writer<'_>) -> Result<(), SerializeError>;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn is_variable_length(&self) -> bool {
        self.shape().is_variable_length()
    }

    fn declared_size(&self) -> usize {
        self.shape().declared_size()
    }

    fn element_count(&self) -> usize {
        self.real_size() / self.type_size()
    }

    /// Bytes this field currently occupies on the wire.
    fn encoded_len(&self) -> usize {
        self.shape().encoded_len(self.real_size())
    }

    /// Decodes from `buffer` at `cursor` and returns the advanced cursor.
    fn read_from_buffer(&mut self, buffer: &[u8], cursor: usize) -> Result<usize, SerializeError> {
        let mut reader = Reader::from_slice(buffer, cursor, buffer.len());
        if reader.x != cursor {
            return Err(BufferError::EndOfBuffer {
                needed: self.encoded_len(),
                remaining: 0,
            }
            .into());
        }
        self.read(&mut reader)?;
        Ok(reader.x)
    }

    /// Encodes into `buffer` at `cursor` and returns the advanced cursor.
    fn write_to_buffer(&self, buffer: &mut [u8], cursor: usize) -> Result<usize, SerializeError> {
        if cursor > buffer.len() {
            return Err(BufferError::Overflow {
                needed: self.encoded_len(),
                remaining: 0,
            }
            .into());
        }
        let mut writer = Writer::at(buffer, cursor);
        self.write(&mut writer)?;
        Ok(writer.x)
    }

    /// Encodes onto the end of `out`'s occupied bytes.
    fn append_to(&self, out: &mut ByteBuffer) -> Result<(), SerializeError> {
        out.append_with(|writer| self.write(writer))
    }
}

impl dyn Field {
    /// Returns the concrete field if it is of type `T`.
    pub fn downcast_ref<T: Field>(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }

    pub fn downcast_mut<T: Field>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut()
    }
}
