//! Length field extraction

use crate::error::{TlvError, TlvResult};

/// BER-TLV length field
///
/// A length is encoded in one of two forms:
/// - **Short form**: single byte with bit 8 clear, value 0-127
/// - **Long form**: first byte has bit 8 set and its low 7 bits give the
///   number of following bytes, which hold the value as a big-endian
///   unsigned integer
///
/// A long-form byte count of 0 is the indefinite-length marker of general
/// BER. Smart-card TLV streams never use it and it is rejected rather than
/// guessed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Length {
    /// Short form: length 0-127
    Short(u8),
    /// Long form: length decoded from an explicit run of big-endian bytes
    Long(usize),
}

impl Length {
    /// Decode a length from a buffer positioned just after the tag field
    ///
    /// # Returns
    /// Returns `Ok((Length, bytes_consumed))` if successful.
    ///
    /// # Error Handling
    /// Returns error if:
    /// - The buffer is empty (`EmptyInput`)
    /// - Long form declares a zero byte count (`MalformedLength`)
    /// - Long form declares more bytes than fit a `usize` (`MalformedLength`)
    /// - The declared length bytes run past the buffer (`TruncatedInput`)
    pub fn decode(data: &[u8]) -> TlvResult<(Self, usize)> {
        let first = *data.first().ok_or(TlvError::EmptyInput)?;

        if first & 0x80 == 0 {
            // Short form: length is in bits 7-1
            return Ok((Length::Short(first & 0x7F), 1));
        }

        // Long form: bits 7-1 give the number of length bytes
        let num_bytes = (first & 0x7F) as usize;

        if num_bytes == 0 {
            return Err(TlvError::MalformedLength(
                "indefinite length encoding not supported".to_string(),
            ));
        }

        if num_bytes > size_of::<usize>() {
            return Err(TlvError::MalformedLength(format!(
                "length encoding too large: {} bytes (max {})",
                num_bytes,
                size_of::<usize>()
            )));
        }

        if data.len() < 1 + num_bytes {
            return Err(TlvError::TruncatedInput {
                needed: 1 + num_bytes - data.len(),
                available: data.len() - 1,
            });
        }

        // Decode length value (big-endian)
        let mut length = 0usize;
        for &byte in &data[1..1 + num_bytes] {
            length = (length << 8) | (byte as usize);
        }

        Ok((Length::Long(length), 1 + num_bytes))
    }

    /// Get the decoded length value
    pub fn value(&self) -> usize {
        match self {
            Length::Short(l) => *l as usize,
            Length::Long(l) => *l,
        }
    }
}
