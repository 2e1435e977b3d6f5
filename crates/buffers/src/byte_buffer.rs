//! Append-only byte buffer with explicit growth.

use std::fmt;

use crate::{print_octets, BufferError, Writer};

/// Capacity used by [`ByteBuffer::new`].
pub const DEFAULT_CAPACITY: usize = 1024;

/// A byte buffer that accumulates data over several writes.
///
/// The buffer owns a fixed-size backing allocation and tracks how many leading
/// bytes are occupied. Appends never grow the allocation implicitly: an append
/// that does not fit is rejected and leaves the buffer unchanged. Capacity only
/// changes through [`ByteBuffer::grow`], which never shrinks.
///
/// # Example
///
/// ```
/// use frame_buffers::ByteBuffer;
///
/// let mut buf = ByteBuffer::with_capacity(4);
/// buf.append(b"abc").unwrap();
/// assert!(buf.append(b"de").is_err());
/// assert_eq!(buf.data(), b"abc");
///
/// buf.grow(8);
/// buf.append(b"de").unwrap();
/// buf.remove_range(0, 2).unwrap();
/// assert_eq!(buf.data(), b"cde");
/// ```
#[derive(Clone)]
pub struct ByteBuffer {
    uint8: Box<[u8]>,
    len: usize,
}

/// Buffers are equal when their occupied bytes are; capacity and the bytes
/// past the occupied length are not compared.
impl PartialEq for ByteBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.data() == other.data()
    }
}

impl Eq for ByteBuffer {}

impl Default for ByteBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteBuffer {
    /// Creates a buffer with [`DEFAULT_CAPACITY`] bytes of storage.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty buffer with exactly `capacity` bytes of storage.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            uint8: vec![0u8; capacity].into_boxed_slice(),
            len: 0,
        }
    }

    /// Returns the occupied bytes.
    pub fn data(&self) -> &[u8] {
        &self.uint8[..self.len]
    }

    /// Returns the whole backing storage, including unoccupied bytes.
    pub fn raw(&self) -> &[u8] {
        &self.uint8
    }

    /// Number of occupied bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Size of the backing storage.
    pub fn capacity(&self) -> usize {
        self.uint8.len()
    }

    /// Bytes that can still be appended without growing.
    pub fn remaining(&self) -> usize {
        self.capacity() - self.len
    }

    /// Copies `data` to the end of the occupied region.
    ///
    /// Fails with [`BufferError::Overflow`] when `data` does not fit in the
    /// remaining capacity; the buffer is not modified in that case.
    pub fn append(&mut self, data: &[u8]) -> Result<(), BufferError> {
        let remaining = self.remaining();
        if data.len() > remaining {
            tracing::debug!(
                needed = data.len(),
                remaining,
                "byte buffer append rejected"
            );
            return Err(BufferError::Overflow {
                needed: data.len(),
                remaining,
            });
        }
        self.uint8[self.len..self.len + data.len()].copy_from_slice(data);
        self.len += data.len();
        Ok(())
    }

    /// Appends the occupied bytes of `other`.
    pub fn merge(&mut self, other: &ByteBuffer) -> Result<(), BufferError> {
        self.append(other.data())
    }

    /// Lets `fill` encode directly into the spare capacity.
    ///
    /// Whatever `fill` writes is committed only if it returns `Ok`; on error
    /// the occupied length is unchanged. Bytes a failed `fill` wrote stay in
    /// the spare capacity, visible through [`ByteBuffer::raw`] but never
    /// through [`ByteBuffer::data`].
    pub fn append_with<E, F>(&mut self, fill: F) -> Result<(), E>
    where
        F: FnOnce(&mut Writer<'_>) -> Result<(), E>,
    {
        let mut writer = Writer::new(&mut self.uint8[self.len..]);
        fill(&mut writer)?;
        let written = writer.x;
        self.len += written;
        Ok(())
    }

    /// Removes `count` bytes starting at `start`, shifting the tail left.
    ///
    /// Fails with [`BufferError::OutOfRange`] unless `start + count` lies
    /// within the occupied region; the buffer is not modified in that case.
    pub fn remove_range(&mut self, start: usize, count: usize) -> Result<(), BufferError> {
        let in_range = start
            .checked_add(count)
            .is_some_and(|end| end <= self.len);
        if !in_range {
            tracing::debug!(start, count, len = self.len, "byte buffer remove rejected");
            return Err(BufferError::OutOfRange {
                start,
                count,
                len: self.len,
            });
        }
        self.uint8.copy_within(start + count..self.len, start);
        self.len -= count;
        Ok(())
    }

    /// Forgets the occupied bytes without releasing storage.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Reallocates to `capacity` bytes, keeping the occupied prefix.
    ///
    /// Does nothing if `capacity` is not larger than the current capacity.
    pub fn grow(&mut self, capacity: usize) {
        if capacity <= self.capacity() {
            return;
        }
        tracing::trace!(from = self.capacity(), to = capacity, "byte buffer grow");
        let mut uint8 = vec![0u8; capacity].into_boxed_slice();
        uint8[..self.len].copy_from_slice(&self.uint8[..self.len]);
        self.uint8 = uint8;
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        self.data()
    }
}

impl From<Vec<u8>> for ByteBuffer {
    /// Wraps `data` as a completely full buffer.
    fn from(data: Vec<u8>) -> Self {
        let len = data.len();
        Self {
            uint8: data.into_boxed_slice(),
            len,
        }
    }
}

impl fmt::Debug for ByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteBuffer")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("data", &print_octets(self.data(), 16))
            .finish()
    }
}
