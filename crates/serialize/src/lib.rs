//! Typed-field binary serialization.
//!
//! A message is an ordered list of fields, each of which knows its own size
//! and encodes itself at a cursor. The wire format is fixed:
//!
//! - scalar fields: their raw little-endian bytes
//! - fixed-length arrays: the whole declared capacity, no prefix
//! - variable-length arrays: a 2-byte little-endian real size, then exactly
//!   that many bytes
//! - messages: their fields concatenated in declaration order
//!
//! Decoding never panics on short or malformed input; every read and write
//! returns a [`Result`] and leaves the cursor unmoved on failure.
//!
//! # Example
//!
//! ```
//! use frame_buffers::ByteBuffer;
//! use frame_serialize::{BytesField, Field, LongField, Message, Record};
//!
//! let mut payload = BytesField::variable(10);
//! payload.set(b"hello", 0, 0, 5).unwrap();
//!
//! let mut out = ByteBuffer::with_capacity(64);
//! payload.append_to(&mut out).unwrap();
//! assert_eq!(out.data(), &[0x05, 0x00, b'h', b'e', b'l', b'l', b'o']);
//!
//! let mut message = Record::new()
//!     .with(LongField::default())
//!     .with(BytesField::variable(10));
//! out.clear();
//! LongField::new(42).append_to(&mut out).unwrap();
//! payload.append_to(&mut out).unwrap();
//! assert_eq!(message.read_from_buffer(out.data(), 0).unwrap(), 15);
//! ```

mod array;
mod bytes;
mod error;
mod field;
mod message;
mod primitive;
mod scalar;
mod shape;

pub use array::{ArrayField, Copied, LengthMode};
pub use bytes::BytesField;
pub use error::SerializeError;
pub use field::Field;
pub use message::{Message, Record};
pub use primitive::Primitive;
pub use scalar::{
    BoolField, ByteField, CharField, DoubleField, FloatField, IntField, LongField, Scalar,
    ShortField, UIntField, ULongField, UShortField,
};
pub use shape::FieldShape;

pub use frame_buffers::TextEncoding;

/// Size of the real-size prefix of a variable-length field.
pub const LENGTH_PREFIX_SIZE: usize = 2;

/// Largest payload a variable-length field can declare.
pub const MAX_VARIABLE_SIZE: usize = u16::MAX as usize;
