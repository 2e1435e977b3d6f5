//! Text encodings used by the string helpers of byte fields.

use crate::BufferError;

/// A character encoding for converting between text and bytes.
///
/// Encoding never fails: characters the target encoding cannot represent are
/// replaced with `?`. Lossy decoding replaces invalid input in the same spirit,
/// while [`TextEncoding::decode_strict`] reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    #[default]
    Utf8,
    /// 7-bit ASCII.
    Ascii,
    /// ISO-8859-1, one byte per code point up to `U+00FF`.
    Latin1,
    /// UTF-16, little-endian code units, no BOM.
    Utf16Le,
}

impl TextEncoding {
    /// Encodes `s` into a new byte vector.
    ///
    /// # Example
    ///
    /// ```
    /// use frame_buffers::TextEncoding;
    ///
    /// assert_eq!(TextEncoding::Utf8.encode("日"), vec![0xE6, 0x97, 0xA5]);
    /// assert_eq!(TextEncoding::Ascii.encode("aé"), b"a?".to_vec());
    /// assert_eq!(TextEncoding::Utf16Le.encode("hi"), vec![b'h', 0, b'i', 0]);
    /// ```
    pub fn encode(self, s: &str) -> Vec<u8> {
        match self {
            TextEncoding::Utf8 => s.as_bytes().to_vec(),
            TextEncoding::Ascii => s
                .chars()
                .map(|c| if c.is_ascii() { c as u8 } else { b'?' })
                .collect(),
            TextEncoding::Latin1 => s
                .chars()
                .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
                .collect(),
            TextEncoding::Utf16Le => s.encode_utf16().flat_map(u16::to_le_bytes).collect(),
        }
    }

    /// Decodes `bytes`, substituting anything invalid.
    pub fn decode(self, bytes: &[u8]) -> String {
        match self {
            TextEncoding::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            TextEncoding::Ascii => bytes
                .iter()
                .map(|&b| if b.is_ascii() { b as char } else { '?' })
                .collect(),
            TextEncoding::Latin1 => bytes.iter().map(|&b| b as char).collect(),
            TextEncoding::Utf16Le => {
                let units = bytes
                    .chunks_exact(2)
                    .map(|pair| u16::from_le_bytes([pair[0], pair[1]]));
                let mut out: String = char::decode_utf16(units)
                    .map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER))
                    .collect();
                if bytes.len() % 2 == 1 {
                    out.push(char::REPLACEMENT_CHARACTER);
                }
                out
            }
        }
    }

    /// Decodes `bytes`, failing with [`BufferError::InvalidText`] on input
    /// that is not valid in this encoding.
    pub fn decode_strict(self, bytes: &[u8]) -> Result<String, BufferError> {
        match self {
            TextEncoding::Utf8 => std::str::from_utf8(bytes)
                .map(str::to_owned)
                .map_err(|_| BufferError::InvalidText),
            TextEncoding::Ascii if !bytes.is_ascii() => Err(BufferError::InvalidText),
            TextEncoding::Utf16Le => {
                if bytes.len() % 2 == 1 {
                    return Err(BufferError::InvalidText);
                }
                let units = bytes
                    .chunks_exact(2)
                    .map(|pair| u16::from_le_bytes([pair[0], pair[1]]));
                char::decode_utf16(units)
                    .collect::<Result<String, _>>()
                    .map_err(|_| BufferError::InvalidText)
            }
            _ => Ok(self.decode(bytes)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_roundtrip() {
        let bytes = TextEncoding::Utf8.encode("héllo");
        assert_eq!(TextEncoding::Utf8.decode(&bytes), "héllo");
    }

    #[test]
    fn test_latin1() {
        assert_eq!(TextEncoding::Latin1.encode("é€"), vec![0xE9, b'?']);
        assert_eq!(TextEncoding::Latin1.decode(&[0xE9]), "é");
    }

    #[test]
    fn test_utf16_odd_length() {
        assert_eq!(TextEncoding::Utf16Le.decode(&[b'a', 0, b'b']), "a\u{FFFD}");
        assert_eq!(
            TextEncoding::Utf16Le.decode_strict(&[b'a', 0, b'b']),
            Err(BufferError::InvalidText)
        );
    }

    #[test]
    fn test_strict_utf8() {
        assert_eq!(TextEncoding::Utf8.decode_strict(&[0xff]), Err(BufferError::InvalidText));
        assert_eq!(TextEncoding::Utf8.decode(&[0xff]), "\u{FFFD}");
    }

    #[test]
    fn test_default_is_utf8() {
        assert_eq!(TextEncoding::default(), TextEncoding::Utf8);
    }
}
