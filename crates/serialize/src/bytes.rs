//! Raw byte fields and their text helpers.

use frame_buffers::TextEncoding;

use crate::{ArrayField, Copied, LengthMode, SerializeError};

/// An array of raw bytes, the most common array field.
pub type BytesField = ArrayField<u8>;

impl ArrayField<u8> {
    /// Stores `value` encoded as UTF-8 at `dest_offset`.
    ///
    /// Same truncation rule as [`ArrayField::set`]: a variable field's real
    /// size becomes the number of bytes copied.
    pub fn set_str(&mut self, value: &str, dest_offset: usize) -> Result<Copied, SerializeError> {
        self.set_str_with(value, TextEncoding::default(), dest_offset)
    }

    /// Stores `value` in `encoding` at `dest_offset`.
    ///
    /// # Example
    ///
    /// ```
    /// use frame_buffers::TextEncoding;
    /// use frame_serialize::{BytesField, Field};
    ///
    /// let mut name = BytesField::variable(4);
    /// let copied = name.set_str_with("héllo", TextEncoding::Latin1, 0).unwrap();
    /// assert!(copied.truncated);
    /// assert_eq!(name.real_size(), 4);
    /// assert_eq!(name.get_string_with(TextEncoding::Latin1), "héll");
    /// ```
    pub fn set_str_with(
        &mut self,
        value: &str,
        encoding: TextEncoding,
        dest_offset: usize,
    ) -> Result<Copied, SerializeError> {
        let bytes = encoding.encode(value);
        self.set(&bytes, dest_offset, 0, bytes.len())
    }

    /// Decodes the meaningful bytes as UTF-8.
    pub fn get_string(&self) -> String {
        self.get_string_with(TextEncoding::default())
    }

    /// Decodes the meaningful bytes in `encoding`.
    ///
    /// A fixed field's meaningful bytes are its whole storage, so trailing
    /// NUL padding is dropped. A variable field's real size already ends the
    /// text and every byte up to it is kept.
    pub fn get_string_with(&self, encoding: TextEncoding) -> String {
        self.strip_padding(encoding.decode(self.as_slice()))
    }

    /// Decodes `length` bytes of the backing storage starting at `start`, or
    /// up to the end of the storage when `length` is `None`.
    pub fn get_string_range(
        &self,
        encoding: TextEncoding,
        start: usize,
        length: Option<usize>,
    ) -> Result<String, SerializeError> {
        let storage = self.values();
        if start > storage.len() {
            return Err(SerializeError::OffsetOutOfRange {
                offset: start,
                len: storage.len(),
            });
        }
        let end = match length {
            Some(length) => start
                .checked_add(length)
                .filter(|&end| end <= storage.len())
                .ok_or(SerializeError::OffsetOutOfRange {
                    offset: start.saturating_add(length),
                    len: storage.len(),
                })?,
            None => storage.len(),
        };
        Ok(encoding.decode(&storage[start..end]))
    }

    /// Like [`ArrayField::get_string_with`] but fails on bytes that are not
    /// valid in `encoding`.
    pub fn try_get_string(&self, encoding: TextEncoding) -> Result<String, SerializeError> {
        let text = encoding.decode_strict(self.as_slice())?;
        Ok(self.strip_padding(text))
    }

    fn strip_padding(&self, mut text: String) -> String {
        if self.mode() == LengthMode::Fixed {
            let trimmed = text.trim_end_matches('\0').len();
            text.truncate(trimmed);
        }
        text
    }
}
