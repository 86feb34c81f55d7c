//! Depth-first tag search

use crate::error::TlvResult;
use crate::object::{TlvObject, head};

/// Find the first object carrying a tag anywhere in a stream
///
/// Walks the top-level siblings in stream order and descends into every
/// constructed object, pre-order: an object is matched against the target
/// before its children are visited. The first match wins.
///
/// # Arguments
/// * `target_tag` - Raw tag bytes to look for (e.g. `[0x9f, 0x11]`)
/// * `stream` - Stream of zero or more sibling TLV objects
///
/// # Returns
/// Returns `Ok(Some(object))` for the first pre-order match, `Ok(None)` when
/// the whole tree carries no such tag. A clean miss is a normal outcome, not
/// an error.
///
/// # Error Handling
/// Malformed bytes anywhere in the traversal surface as the underlying
/// decode error.
///
/// Traversal uses an explicit worklist so that stack depth stays constant
/// regardless of how deeply an adversarial input nests.
pub fn find<'a>(target_tag: &[u8], stream: &'a [u8]) -> TlvResult<Option<TlvObject<'a>>> {
    let mut worklist: Vec<&'a [u8]> = Vec::new();
    if !stream.is_empty() {
        worklist.push(stream);
    }

    while let Some(run) = worklist.pop() {
        let object = head(run)?;
        let siblings = &run[object.as_bytes().len()..];

        if object.tag().as_bytes() == target_tag {
            return Ok(Some(object));
        }

        // Later siblings go under this object's children: pre-order
        if !siblings.is_empty() {
            worklist.push(siblings);
        }
        if object.is_constructed() && !object.value().is_empty() {
            worklist.push(object.value());
        }
    }

    Ok(None)
}
