//! Core traits: Encode, Decode.

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::error::{Error, Result};

/// A value with a canonical, deterministic byte representation.
///
/// `encode_to` is a pure function of `self`: the same value always produces
/// the same bytes, on every platform.
pub trait Encode {
    /// Append the encoding of `self` to `dst`.
    fn encode_to<B: BufMut + ?Sized>(&self, dst: &mut B);

    /// A guess at the encoded length, used to size buffers. May be zero.
    fn size_hint(&self) -> usize {
        0
    }

    /// Encode `self` into a fresh buffer.
    fn encode(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(self.size_hint());
        self.encode_to(&mut buf);
        buf.freeze()
    }
}

/// The exact inverse of [`Encode`].
///
/// Implementations must report malformed or truncated input as an [`Error`]
/// and must never panic.
pub trait Decode: Sized {
    /// Decode one value from the front of `src`, leaving the rest in place.
    fn decode<B: Buf + ?Sized>(src: &mut B) -> Result<Self>;

    /// Decode one value that must span the whole of `bytes`.
    fn decode_all(mut bytes: &[u8]) -> Result<Self> {
        let value = Self::decode(&mut bytes)?;
        if !bytes.is_empty() {
            return Err(Error::TrailingBytes(bytes.len()));
        }
        Ok(value)
    }
}

// Blanket implementations for references and boxes

impl<T: Encode + ?Sized> Encode for &T {
    fn encode_to<B: BufMut + ?Sized>(&self, dst: &mut B) {
        (**self).encode_to(dst)
    }

    fn size_hint(&self) -> usize {
        (**self).size_hint()
    }
}

impl<T: Encode + ?Sized> Encode for Box<T> {
    fn encode_to<B: BufMut + ?Sized>(&self, dst: &mut B) {
        self.as_ref().encode_to(dst)
    }

    fn size_hint(&self) -> usize {
        self.as_ref().size_hint()
    }
}

impl<T: Decode> Decode for Box<T> {
    fn decode<B: Buf + ?Sized>(src: &mut B) -> Result<Self> {
        T::decode(src).map(Box::new)
    }
}
