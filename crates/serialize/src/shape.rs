//! Wire shapes a field can take.

use crate::LENGTH_PREFIX_SIZE;

/// The closed set of wire layouts a field encodes to.
///
/// Sizes are in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldShape {
    /// `width` raw bytes.
    Scalar { width: usize },
    /// `len` raw bytes, no prefix.
    FixedArray { len: usize },
    /// A 2-byte little-endian real size followed by that many bytes, at most
    /// `max_len`.
    VariableArray { max_len: usize },
}

impl FieldShape {
    /// Declared (maximum) payload size.
    pub fn declared_size(self) -> usize {
        match self {
            FieldShape::Scalar { width } => width,
            FieldShape::FixedArray { len } => len,
            FieldShape::VariableArray { max_len } => max_len,
        }
    }

    pub fn is_variable_length(self) -> bool {
        matches!(self, FieldShape::VariableArray { .. })
    }

    /// Wire size of a field of this shape currently holding `real_size`
    /// payload bytes. Fixed shapes ignore `real_size`.
    pub fn encoded_len(self, real_size: usize) -> usize {
        match self {
            FieldShape::Scalar { width } => width,
            FieldShape::FixedArray { len } => len,
            FieldShape::VariableArray { .. } => LENGTH_PREFIX_SIZE + real_size,
        }
    }

    /// Largest wire size this shape can produce.
    pub fn max_encoded_len(self) -> usize {
        self.encoded_len(self.declared_size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoded_len() {
        assert_eq!(FieldShape::Scalar { width: 8 }.encoded_len(0), 8);
        assert_eq!(FieldShape::FixedArray { len: 10 }.encoded_len(3), 10);
        assert_eq!(FieldShape::VariableArray { max_len: 10 }.encoded_len(5), 7);
        assert_eq!(FieldShape::VariableArray { max_len: 10 }.max_encoded_len(), 12);
    }
}
