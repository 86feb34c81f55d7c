//! BER-TLV decoding and tree navigation
//!
//! This crate decodes the restricted BER-TLV subset found in EMV/smart-card
//! data streams: tags of one or more bytes via the continuation-bit
//! convention, lengths in short form or long form with an explicit byte
//! count. It decodes and navigates only; it does not encode, and it is not
//! a general ASN.1 toolkit.
//!
//! # Architecture
//!
//! The layers build strictly bottom-up, each defined purely in terms of
//! byte offsets computed by the layer below:
//!
//! - [`Tag`] / [`Length`]: field extractors that compute their own width
//!   from the bytes they read
//! - [`head`] / [`tail`]: boundary of the first complete object in a
//!   stream, and the rest
//! - [`TlvObject`]: an ephemeral view of one object, with classification
//!   and child enumeration
//! - [`find`]: pre-order depth-first tag search
//! - [`render`]: indented tree view
//!
//! # Purity
//!
//! Every operation is a synchronous pure function over a caller-owned
//! read-only buffer. Nothing is mutated, allocated per session, logged, or
//! shared, so decoding independent streams from many threads needs no
//! synchronization.
//!
//! # Usage
//!
//! ```
//! use bertlv_core::{find, head, render, RenderConfig};
//!
//! let data = hex::decode("6f0784050011223344").unwrap();
//! let object = head(&data).unwrap();
//! assert!(object.is_constructed());
//!
//! let aid = find(&[0x84], &data).unwrap().unwrap();
//! assert_eq!(aid.value(), [0x00, 0x11, 0x22, 0x33, 0x44]);
//!
//! println!("{}", render(&object, 0, &RenderConfig::default()).unwrap());
//! ```

pub mod error;
pub mod length;
pub mod object;
pub mod render;
pub mod search;
pub mod tag;

pub use error::{TlvError, TlvResult};
pub use length::Length;
pub use object::{TlvObject, head, tail};
pub use render::{RenderConfig, render};
pub use search::find;
pub use tag::Tag;
