//! Ordered composition of fields into messages.

use frame_buffers::{BufferError, ByteBuffer, Reader, Writer};

use crate::{Field, SerializeError};

/// A record whose wire form is its fields encoded back to back.
///
/// The order returned by [`Message::fields`] and [`Message::fields_mut`] is
/// the schema: both must list the same fields in the same order. Reading or
/// writing stops at the first failing field and reports it as
/// [`SerializeError::Field`]; the caller's cursor is then left unmoved.
///
/// # Example
///
/// ```
/// use frame_serialize::{BytesField, Field, IntField, Message};
///
/// struct Login {
///     user_id: IntField,
///     name: BytesField,
/// }
///
/// impl Message for Login {
///     fn fields(&self) -> Vec<&dyn Field> {
///         vec![&self.user_id as &dyn Field, &self.name]
///     }
///     fn fields_mut(&mut self) -> Vec<&mut dyn Field> {
///         vec![&mut self.user_id as &mut dyn Field, &mut self.name]
///     }
/// }
///
/// let mut login = Login { user_id: IntField::new(7), name: BytesField::variable(16) };
/// login.name.set_str("ana", 0).unwrap();
///
/// let mut buf = [0u8; 32];
/// let end = login.write_to_buffer(&mut buf, 0).unwrap();
/// assert_eq!(end, 4 + 2 + 3);
///
/// let mut back = Login { user_id: IntField::default(), name: BytesField::variable(16) };
/// assert_eq!(back.read_from_buffer(&buf, 0).unwrap(), end);
/// assert_eq!(back.user_id.get(), 7);
/// assert_eq!(back.name.get_string(), "ana");
/// ```
pub trait Message {
    /// Fields in declaration order.
    fn fields(&self) -> Vec<&dyn Field>;

    /// Fields in declaration order, mutably.
    fn fields_mut(&mut self) -> Vec<&mut dyn Field>;

    /// Total wire size of the current values.
    fn encoded_len(&self) -> usize {
        self.fields().iter().map(|f| f.encoded_len()).sum()
    }

    fn zero(&mut self) {
        for field in self.fields_mut() {
            field.zero();
        }
    }

    /// Decodes every field in order, advancing `reader` only if all succeed.
    fn read_from(&mut self, reader: &mut Reader<'_>) -> Result<(), SerializeError> {
        let start = reader.x;
        for (index, field) in self.fields_mut().into_iter().enumerate() {
            if let Err(source) = field.read(reader) {
                reader.x = start;
                tracing::debug!(index, error = %source, "message decode stopped");
                return Err(SerializeError::Field {
                    index,
                    source: Box::new(source),
                });
            }
        }
        Ok(())
    }

    /// Encodes every field in order, advancing `writer` only if all succeed.
    fn write_to(&self, writer: &mut Writer<'_>) -> Result<(), SerializeError> {
        let start = writer.x;
        for (index, field) in self.fields().into_iter().enumerate() {
            if let Err(source) = field.write(writer) {
                writer.x = start;
                tracing::debug!(index, error = %source, "message encode stopped");
                return Err(SerializeError::Field {
                    index,
                    source: Box::new(source),
                });
            }
        }
        Ok(())
    }

    /// Decodes from `buffer` at `cursor` and returns the advanced cursor.
    fn read_from_buffer(&mut self, buffer: &[u8], cursor: usize) -> Result<usize, SerializeError> {
        if cursor > buffer.len() {
            return Err(BufferError::EndOfBuffer {
                needed: self.encoded_len(),
                remaining: 0,
            }
            .into());
        }
        let mut reader = Reader::from_slice(buffer, cursor, buffer.len());
        self.read_from(&mut reader)?;
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
        self.write_to(&mut writer)?;
        Ok(writer.x)
    }

    /// Encodes onto the end of `out`'s occupied bytes; `out` is unchanged on
    /// failure.
    fn append_to(&self, out: &mut ByteBuffer) -> Result<(), SerializeError> {
        out.append_with(|writer| self.write_to(writer))
    }
}

/// A message assembled at runtime from boxed fields.
///
/// # Example
///
/// ```
/// use frame_serialize::{BytesField, LongField, Message, Record};
///
/// let record = Record::new()
///     .with(LongField::new(-1))
///     .with(BytesField::fixed(4));
/// assert_eq!(record.encoded_len(), 12);
/// assert_eq!(record.get::<LongField>(0).map(|f| f.get()), Some(-1));
/// assert!(record.get::<LongField>(1).is_none());
/// ```
#[derive(Default)]
pub struct Record {
    fields: Vec<Box<dyn Field>>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field, returning the record for chaining.
    pub fn with<F: Field>(mut self, field: F) -> Self {
        self.push(field);
        self
    }

    pub fn push<F: Field>(&mut self, field: F) {
        self.fields.push(Box::new(field));
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The field at `index` if it is of type `F`.
    pub fn get<F: Field>(&self, index: usize) -> Option<&F> {
        self.fields.get(index)?.downcast_ref()
    }

    pub fn get_mut<F: Field>(&mut self, index: usize) -> Option<&mut F> {
        self.fields.get_mut(index)?.downcast_mut()
    }
}

impl Message for Record {
    fn fields(&self) -> Vec<&dyn Field> {
        let mut out: Vec<&dyn Field> = Vec::with_capacity(self.fields.len());
        for field in &self.fields {
            out.push(field.as_ref());
        }
        out
    }

    fn fields_mut(&mut self) -> Vec<&mut dyn Field> {
        let mut out: Vec<&mut dyn Field> = Vec::with_capacity(self.fields.len());
        for field in &mut self.fields {
            out.push(field.as_mut());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BytesField, IntField, ShortField};

    fn sample() -> Record {
        let mut name = BytesField::variable(8);
        name.set_str("bob", 0).unwrap();
        Record::new()
            .with(ShortField::new(3))
            .with(name)
            .with(IntField::new(99))
    }

    #[test]
    fn test_encoded_len_sums_fields() {
        assert_eq!(sample().encoded_len(), 2 + 2 + 3 + 4);
    }

    #[test]
    fn test_write_failure_names_field_and_keeps_cursor() {
        let record = sample();
        let mut buf = [0u8; 9];
        let mut writer = Writer::new(&mut buf);
        let err = record.write_to(&mut writer).unwrap_err();
        assert!(matches!(err, SerializeError::Field { index: 2, .. }));
        assert_eq!(writer.x, 0);
    }

    #[test]
    fn test_read_failure_is_incomplete() {
        let record = sample();
        let mut buf = [0u8; 16];
        let end = record.write_to_buffer(&mut buf, 0).unwrap();

        let mut back = Record::new()
            .with(ShortField::default())
            .with(BytesField::variable(8))
            .with(IntField::default());
        let err = back.read_from_buffer(&buf[..end - 1], 0).unwrap_err();
        assert!(err.is_incomplete());
        assert_eq!(back.read_from_buffer(&buf[..end], 0).unwrap(), end);
        assert_eq!(back.get::<IntField>(2).unwrap().get(), 99);
    }

    #[test]
    fn test_zero_resets_all() {
        let mut record = sample();
        record.zero();
        assert_eq!(record.get::<ShortField>(0).unwrap().get(), 0);
        assert_eq!(record.get::<IntField>(2).unwrap().get(), 0);
    }

    #[test]
    fn test_get_mut() {
        let mut record = sample();
        record.get_mut::<IntField>(2).unwrap().set(5);
        assert_eq!(record.get::<IntField>(2).unwrap().get(), 5);
    }
}
