//! Byte buffers for frame-serialize.
//!
//! # Overview
//!
//! - [`ByteBuffer`] - An append-only buffer with explicit growth, used to
//!   accumulate partially received data
//! - [`Reader`] - Reads little-endian values from a byte slice with a cursor
//! - [`Writer`] - Writes little-endian values into a fixed-capacity slice
//! - [`TextEncoding`] - Text/byte conversion for string-carrying fields
//!
//! Every bounded operation either succeeds completely or fails without moving
//! its cursor or changing any occupied bytes.
//!
//! # Example
//!
//! ```
//! use frame_buffers::{ByteBuffer, Reader};
//!
//! let mut buf = ByteBuffer::with_capacity(16);
//! buf.append_with(|w| {
//!     w.u8(0x01)?;
//!     w.u16(0x0203)
//! })
//! .unwrap();
//!
//! let mut reader = Reader::new(buf.data());
//! assert_eq!(reader.u8().unwrap(), 0x01);
//! assert_eq!(reader.u16().unwrap(), 0x0203);
//! assert!(reader.u8().is_err());
//! ```

use thiserror::Error;

mod byte_buffer;
mod print_octets;
mod reader;
mod text;
mod writer;

pub use byte_buffer::{ByteBuffer, DEFAULT_CAPACITY};
pub use print_octets::print_octets;
pub use reader::Reader;
pub use text::TextEncoding;
pub use writer::Writer;

/// Error type for buffer operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Fewer bytes remain before the logical end than a read requires.
    #[error("end of buffer: needed {needed} bytes, {remaining} remaining")]
    EndOfBuffer { needed: usize, remaining: usize },
    /// Not enough capacity left for a write or append.
    #[error("buffer overflow: needed {needed} bytes, {remaining} available")]
    Overflow { needed: usize, remaining: usize },
    /// A removal range does not lie within the occupied bytes.
    #[error("range {start}+{count} out of bounds for length {len}")]
    OutOfRange {
        start: usize,
        count: usize,
        len: usize,
    },
    /// Bytes are not valid in the requested text encoding.
    #[error("invalid text for encoding")]
    InvalidText,
}
