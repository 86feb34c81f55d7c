//! Tag field extraction

use crate::error::{TlvError, TlvResult};
use std::fmt;

/// Bit 6 of the first tag byte: constructed (1) vs primitive (0)
const CONSTRUCTED_BIT: u8 = 0x20;
/// Low 5 bits of the first tag byte all set: tag continues in following bytes
const MULTI_BYTE_MARKER: u8 = 0x1F;
/// Bit 8 of a continuation byte: another tag byte follows
const CONTINUATION_BIT: u8 = 0x80;

/// BER-TLV tag field
///
/// A borrowed view of the raw tag bytes at the start of a TLV object.
/// EMV/smart-card streams identify fields by these raw bytes (e.g. `9f11`),
/// so no tag-class/number model is built on top of them.
///
/// # Encoding Format
///
/// Single-byte form (low 5 bits not all ones):
/// ```text
/// Bits: 8 7 6 5 4 3 2 1
///       C C P T T T T T
/// ```
///
/// Multi-byte form (low 5 bits all ones):
/// ```text
/// First byte:      C C P 1 1 1 1 1
/// Following bytes: M T T T T T T T  (M = 1 while more bytes follow)
/// ```
/// The tag ends at the first following byte whose M bit is 0, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tag<'a> {
    bytes: &'a [u8],
}

impl<'a> Tag<'a> {
    /// Decode a tag from the start of a buffer
    ///
    /// # Returns
    /// Returns `Ok((Tag, bytes_consumed))` if successful.
    ///
    /// # Error Handling
    /// Returns error if:
    /// - The buffer is empty (`EmptyInput`)
    /// - A continuation sequence runs past the end of the buffer
    ///   (`TruncatedInput`)
    pub fn decode(data: &'a [u8]) -> TlvResult<(Self, usize)> {
        let first = *data.first().ok_or(TlvError::EmptyInput)?;

        let mut width = 1;
        if first & MULTI_BYTE_MARKER == MULTI_BYTE_MARKER {
            loop {
                let byte = *data.get(width).ok_or(TlvError::TruncatedInput {
                    needed: 1,
                    available: 0,
                })?;
                width += 1;
                if byte & CONTINUATION_BIT == 0 {
                    break;
                }
            }
        }

        Ok((Self { bytes: &data[..width] }, width))
    }

    pub(crate) fn from_field(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// Get the raw tag bytes
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Check if the tag marks a constructed object
    ///
    /// Constructed objects carry further TLV objects in their value field;
    /// primitive objects carry raw data. Pure function of the first tag
    /// byte, cannot fail.
    pub fn is_constructed(&self) -> bool {
        self.bytes[0] & CONSTRUCTED_BIT != 0
    }

    /// Check if the tag marks a primitive object
    ///
    /// Always the complement of [`is_constructed`](Self::is_constructed).
    pub fn is_primitive(&self) -> bool {
        !self.is_constructed()
    }
}

impl fmt::Display for Tag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_byte_tag() {
        let data = hex::decode("840e31").unwrap();
        let (tag, consumed) = Tag::decode(&data).unwrap();
        assert_eq!(consumed, 1);
        assert_eq!(tag.as_bytes(), &[0x84]);
    }

    #[test]
    fn test_two_byte_tag() {
        let data = hex::decode("9f110101").unwrap();
        let (tag, consumed) = Tag::decode(&data).unwrap();
        assert_eq!(consumed, 2);
        assert_eq!(tag.as_bytes(), &[0x9f, 0x11]);
    }

    #[test]
    fn test_three_byte_tag() {
        // Continuation byte 0x85 has its high bit set, so a third byte follows
        let data = [0x5f, 0x85, 0x01, 0x02];
        let (tag, consumed) = Tag::decode(&data).unwrap();
        assert_eq!(consumed, 3);
        assert_eq!(tag.as_bytes(), &[0x5f, 0x85, 0x01]);
    }

    #[test]
    fn test_tag_empty_input() {
        assert_eq!(Tag::decode(&[]), Err(TlvError::EmptyInput));
    }

    #[test]
    fn test_tag_truncated_continuation() {
        // Low 5 bits all ones announce a continuation byte that never comes
        let result = Tag::decode(&[0x9f]);
        assert_eq!(
            result,
            Err(TlvError::TruncatedInput {
                needed: 1,
                available: 0
            })
        );
    }

    #[test]
    fn test_constructed_flag() {
        let (constructed, _) = Tag::decode(&[0x6f]).unwrap();
        assert!(constructed.is_constructed());
        assert!(!constructed.is_primitive());

        let (primitive, _) = Tag::decode(&[0x84]).unwrap();
        assert!(primitive.is_primitive());
        assert!(!primitive.is_constructed());
    }

    #[test]
    fn test_tag_display() {
        let (tag, _) = Tag::decode(&[0x9f, 0x11]).unwrap();
        assert_eq!(format!("{}", tag), "9f11");
    }
}
