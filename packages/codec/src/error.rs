//! Error types for the codec layer.
//!
//! Every error here is a data error: the input bytes were not a valid
//! encoding of the requested type. Decoders report them as values and never
//! panic, whatever the input.

use thiserror::Error;

/// Errors produced while decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input ended before the value was complete.
    #[error("unexpected end of input: needed {needed} byte(s), {remaining} remaining")]
    Underflow { needed: usize, remaining: usize },

    /// A tagged union carried a discriminant outside its declared set.
    #[error("unknown discriminant {discriminant} for {type_name}")]
    UnknownDiscriminant {
        type_name: &'static str,
        discriminant: u8,
    },

    /// A boolean byte was neither `0x00` nor `0x01`.
    #[error("invalid boolean byte: {0:#04x}")]
    InvalidBool(u8),

    /// A compact integer used a wider mode than its value needs.
    #[error("non-canonical compact encoding")]
    NonCanonicalCompact,

    /// A compact integer does not fit the target type.
    #[error("compact integer out of range for {type_name}")]
    CompactOverflow { type_name: &'static str },

    /// A length prefix claims more bytes than the input holds.
    #[error("length prefix {length} exceeds remaining input ({remaining} byte(s))")]
    LengthOverflow { length: u64, remaining: usize },

    /// A non-empty collection of elements that occupy no bytes on the wire.
    #[error("collection of {length} zero-width element(s)")]
    ZeroWidthElements { length: usize },

    /// A string payload was not valid UTF-8.
    #[error("invalid utf-8 in string payload")]
    InvalidUtf8,

    /// `decode_all` finished with input left over.
    #[error("{0} trailing byte(s) after decoded value")]
    TrailingBytes(usize),
}

/// Result type alias for decode operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Fail with [`Error::Underflow`] unless `src` holds at least `needed` bytes.
pub(crate) fn ensure_remaining<B: bytes::Buf + ?Sized>(src: &B, needed: usize) -> Result<()> {
    let remaining = src.remaining();
    if remaining < needed {
        return Err(Error::Underflow { needed, remaining });
    }
    Ok(())
}
