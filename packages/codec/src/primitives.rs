//! Encodings for the building blocks payloads are made of.
//!
//! - Fixed-width unsigned integers: little endian.
//! - `bool`: a single `0x00` or `0x01` byte.
//! - `()` and [`Empty`]: zero bytes.
//! - `[u8; N]`: the `N` raw bytes.
//! - `Vec<T>`, `String`, `Bytes`: compact length prefix, then the contents.
//!
//! A collection whose elements decode without consuming input (`Vec<Empty>`,
//! `Vec<()>`) only decodes when empty: every element must advance the input,
//! so decoding work stays bounded by the input length.

use bytes::{Buf, BufMut, Bytes};

use crate::compact::{decode_len, encode_len, len_size_hint};
use crate::error::{ensure_remaining, Error, Result};
use crate::{Decode, Encode};

/// The empty marker: a payload that carries no data.
///
/// Used as the payload of data-less variants such as a successful dispatch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Empty;

impl Encode for Empty {
    fn encode_to<B: BufMut + ?Sized>(&self, _dst: &mut B) {}
}

impl Decode for Empty {
    fn decode<B: Buf + ?Sized>(_src: &mut B) -> Result<Self> {
        Ok(Empty)
    }
}

impl Encode for () {
    fn encode_to<B: BufMut + ?Sized>(&self, _dst: &mut B) {}
}

impl Decode for () {
    fn decode<B: Buf + ?Sized>(_src: &mut B) -> Result<Self> {
        Ok(())
    }
}

macro_rules! impl_fixed_width {
    ($($ty:ty => $put:ident, $get:ident;)+) => {
        $(
            impl Encode for $ty {
                fn encode_to<B: BufMut + ?Sized>(&self, dst: &mut B) {
                    dst.$put(*self);
                }

                fn size_hint(&self) -> usize {
                    std::mem::size_of::<$ty>()
                }
            }

            impl Decode for $ty {
                fn decode<B: Buf + ?Sized>(src: &mut B) -> Result<Self> {
                    ensure_remaining(src, std::mem::size_of::<$ty>())?;
                    Ok(src.$get())
                }
            }
        )+
    };
}

impl_fixed_width! {
    u8 => put_u8, get_u8;
    u16 => put_u16_le, get_u16_le;
    u32 => put_u32_le, get_u32_le;
    u64 => put_u64_le, get_u64_le;
}

impl Encode for bool {
    fn encode_to<B: BufMut + ?Sized>(&self, dst: &mut B) {
        dst.put_u8(u8::from(*self));
    }

    fn size_hint(&self) -> usize {
        1
    }
}

impl Decode for bool {
    fn decode<B: Buf + ?Sized>(src: &mut B) -> Result<Self> {
        match u8::decode(src)? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(Error::InvalidBool(other)),
        }
    }
}

impl<const N: usize> Encode for [u8; N] {
    fn encode_to<B: BufMut + ?Sized>(&self, dst: &mut B) {
        dst.put_slice(self);
    }

    fn size_hint(&self) -> usize {
        N
    }
}

impl<const N: usize> Decode for [u8; N] {
    fn decode<B: Buf + ?Sized>(src: &mut B) -> Result<Self> {
        ensure_remaining(src, N)?;
        let mut out = [0u8; N];
        src.copy_to_slice(&mut out);
        Ok(out)
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode_to<B: BufMut + ?Sized>(&self, dst: &mut B) {
        encode_len(self.len(), dst);
        for item in self {
            item.encode_to(dst);
        }
    }

    fn size_hint(&self) -> usize {
        len_size_hint(self.len()) + self.iter().map(Encode::size_hint).sum::<usize>()
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode<B: Buf + ?Sized>(src: &mut B) -> Result<Self> {
        let len = decode_len(src)?;
        // A hostile length prefix must not drive the allocation.
        let mut items = Vec::with_capacity(len.min(src.remaining()));
        for _ in 0..len {
            let before = src.remaining();
            items.push(T::decode(src)?);
            if src.remaining() == before {
                return Err(Error::ZeroWidthElements { length: len });
            }
        }
        Ok(items)
    }
}

impl Encode for Bytes {
    fn encode_to<B: BufMut + ?Sized>(&self, dst: &mut B) {
        encode_len(self.len(), dst);
        dst.put_slice(self);
    }

    fn size_hint(&self) -> usize {
        len_size_hint(self.len()) + self.len()
    }
}

impl Decode for Bytes {
    fn decode<B: Buf + ?Sized>(src: &mut B) -> Result<Self> {
        let len = decode_exact_len(src)?;
        Ok(src.copy_to_bytes(len))
    }
}

impl Encode for String {
    fn encode_to<B: BufMut + ?Sized>(&self, dst: &mut B) {
        self.as_str().encode_to(dst);
    }

    fn size_hint(&self) -> usize {
        self.as_str().size_hint()
    }
}

impl Encode for str {
    fn encode_to<B: BufMut + ?Sized>(&self, dst: &mut B) {
        encode_len(self.len(), dst);
        dst.put_slice(self.as_bytes());
    }

    fn size_hint(&self) -> usize {
        len_size_hint(self.len()) + self.len()
    }
}

impl Decode for String {
    fn decode<B: Buf + ?Sized>(src: &mut B) -> Result<Self> {
        let len = decode_exact_len(src)?;
        let mut raw = vec![0u8; len];
        src.copy_to_slice(&mut raw);
        String::from_utf8(raw).map_err(|_| Error::InvalidUtf8)
    }
}

/// Decode a length prefix for a run of raw bytes that must be present in full.
fn decode_exact_len<B: Buf + ?Sized>(src: &mut B) -> Result<usize> {
    let len = decode_len(src)?;
    let remaining = src.remaining();
    if len > remaining {
        return Err(Error::LengthOverflow {
            length: len as u64,
            remaining,
        });
    }
    Ok(len)
}
