//! Serialization error type.

use frame_buffers::BufferError;
use thiserror::Error;

/// Error type for field and message encoding/decoding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializeError {
    /// Not enough data to read, or not enough room to write.
    #[error(transparent)]
    Buffer(#[from] BufferError),
    /// A real size larger than the field's declared capacity.
    #[error("real size {real_size} exceeds declared capacity {capacity}")]
    LengthTooLarge { real_size: usize, capacity: usize },
    /// A real size that is not a whole number of elements.
    #[error("real size {real_size} is not a multiple of element size {type_size}")]
    Misaligned { real_size: usize, type_size: usize },
    /// A copy offset outside the source or destination.
    #[error("offset {offset} out of range for length {len}")]
    OffsetOutOfRange { offset: usize, len: usize },
    /// A field of a message failed; `index` is its declaration position.
    #[error("field {index}: {source}")]
    Field {
        index: usize,
        #[source]
        source: Box<SerializeError>,
    },
}

impl SerializeError {
    /// Returns `true` when the failure only means more input is needed.
    ///
    /// Callers accumulating network reads treat this as "message not yet
    /// complete" and retry after appending more bytes.
    pub fn is_incomplete(&self) -> bool {
        match self {
            SerializeError::Buffer(BufferError::EndOfBuffer { .. }) => true,
            SerializeError::Field { source, .. } => source.is_incomplete(),
            _ => false,
        }
    }
}
