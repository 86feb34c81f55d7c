//! TLV object views and stream boundary operations
//!
//! A [`TlvObject`] is an ephemeral view over the exact byte span of one
//! complete Tag-Length-Value triad. It borrows from the caller's buffer and
//! never copies it; re-walking the same bytes always yields the same
//! objects.
//!
//! A byte stream may hold several sibling objects back to back. [`head`]
//! and [`tail`] split off the first object and the remainder, so a
//! constructed value is consumed by repeatedly taking `head` and advancing
//! to `tail` until nothing remains.

use crate::error::{TlvError, TlvResult};
use crate::length::Length;
use crate::tag::Tag;

/// One complete BER-TLV object
///
/// Holds the exact byte span `tag ‖ length ‖ value` plus the two field
/// widths computed while decoding, so accessors are plain slicing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TlvObject<'a> {
    bytes: &'a [u8],
    tag_width: usize,
    header_width: usize,
}

/// Decode the first complete TLV object at the start of a stream
///
/// # Returns
/// Returns the object spanning `tag ‖ length ‖ value`.
///
/// # Error Handling
/// Returns error if:
/// - The stream is empty (`EmptyInput`) — never a silent zero-length object
/// - Tag, length, or value extends past the stream (`TruncatedInput`)
/// - The length field carries a reserved encoding (`MalformedLength`)
pub fn head(stream: &[u8]) -> TlvResult<TlvObject<'_>> {
    if stream.is_empty() {
        return Err(TlvError::EmptyInput);
    }

    let (_, tag_width) = Tag::decode(stream)?;
    let (length, length_width) = Length::decode(&stream[tag_width..])?;

    let header_width = tag_width + length_width;
    let total = header_width
        .checked_add(length.value())
        .ok_or_else(|| TlvError::MalformedLength("declared length overflows usize".to_string()))?;

    if stream.len() < total {
        return Err(TlvError::TruncatedInput {
            needed: total - stream.len(),
            available: stream.len() - header_width,
        });
    }

    Ok(TlvObject {
        bytes: &stream[..total],
        tag_width,
        header_width,
    })
}

/// Everything after the first complete TLV object in a stream
///
/// Empty if that object was the only content. For any non-empty valid
/// stream `s`, `head(s)` and `tail(s)` concatenate back to `s`.
pub fn tail(stream: &[u8]) -> TlvResult<&[u8]> {
    let first = head(stream)?;
    Ok(&stream[first.as_bytes().len()..])
}

impl<'a> TlvObject<'a> {
    /// Get the tag field
    pub fn tag(&self) -> Tag<'a> {
        Tag::from_field(&self.bytes[..self.tag_width])
    }

    /// Get the decoded value length in bytes
    pub fn length(&self) -> usize {
        self.bytes.len() - self.header_width
    }

    /// Get the value bytes
    pub fn value(&self) -> &'a [u8] {
        &self.bytes[self.header_width..]
    }

    /// Get the full encoded span (tag + length + value)
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Check if this is a constructed object
    pub fn is_constructed(&self) -> bool {
        self.tag().is_constructed()
    }

    /// Check if this is a primitive object
    pub fn is_primitive(&self) -> bool {
        self.tag().is_primitive()
    }

    /// Enumerate the immediate child objects
    ///
    /// # Returns
    /// Returns the children in stream order, which mirrors protocol-defined
    /// field ordering. Empty for primitive objects.
    ///
    /// # Error Handling
    /// Returns error if the value bytes of a constructed object do not parse
    /// as a run of complete TLV objects.
    pub fn children(&self) -> TlvResult<Vec<TlvObject<'a>>> {
        let mut children = Vec::new();
        if self.is_primitive() {
            return Ok(children);
        }

        let mut rest = self.value();
        while !rest.is_empty() {
            let child = head(rest)?;
            rest = &rest[child.as_bytes().len()..];
            children.push(child);
        }

        Ok(children)
    }
}
