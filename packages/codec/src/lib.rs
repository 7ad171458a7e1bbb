//! Extrinsic codec: deterministic binary encoding for runtime payloads.
//!
//! This is the bottom layer of the extrinsic stack. Everything here is pure
//! bytes in, typed values out: no dispatch semantics, no validation rules.
//!
//! - [`Encode`] / [`Decode`]: a canonical encoding and its exact inverse.
//! - [`Variant`]: closed tagged unions written as `discriminant:u8 payload`.
//! - [`Compact`]: variable-length integers used for length prefixes.
//! - [`Empty`]: the zero-byte payload.
//!
//! # Example
//!
//! ```rust
//! use extrinsic_codec::{Decode, Encode, Error};
//!
//! let tags: Vec<Vec<u8>> = vec![b"nonce".to_vec()];
//! let bytes = tags.encode();
//! assert_eq!(Vec::<Vec<u8>>::decode_all(&bytes).unwrap(), tags);
//!
//! // Truncated input is an error, never a panic.
//! assert!(matches!(u32::decode_all(&[1, 2]), Err(Error::Underflow { .. })));
//! ```

pub use bytes::{Buf, BufMut, Bytes, BytesMut};

mod compact;
mod error;
mod primitives;
mod traits;
mod variant;

pub use compact::Compact;
pub use error::{Error, Result};
pub use primitives::Empty;
pub use traits::{Decode, Encode};
pub use variant::{decode_variant, encode_variant, unknown_discriminant, Variant};
