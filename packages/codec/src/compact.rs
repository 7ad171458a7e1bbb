//! Compact integers: variable-length, mode-prefixed, little endian.
//!
//! The two low bits of the first byte select the mode:
//!
//! | mode   | width        | range            |
//! |--------|--------------|------------------|
//! | `0b00` | 1 byte       | `0..2^6`         |
//! | `0b01` | 2 bytes      | `2^6..2^14`      |
//! | `0b10` | 4 bytes      | `2^14..2^30`     |
//! | `0b11` | 1 + 4..=8    | `2^30..2^64`     |
//!
//! In the big-integer mode the upper six bits of the first byte hold the
//! number of value bytes minus four. Every value has exactly one valid
//! encoding; wider-than-needed encodings are rejected.

use bytes::{Buf, BufMut};

use crate::error::{ensure_remaining, Error, Result};
use crate::{Decode, Encode};

const SINGLE_BYTE_MAX: u64 = (1 << 6) - 1;
const TWO_BYTE_MAX: u64 = (1 << 14) - 1;
const FOUR_BYTE_MAX: u64 = (1 << 30) - 1;

/// Wrapper selecting the compact encoding for an integer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Compact<T>(pub T);

impl<T> Compact<T> {
    /// Unwrap the integer.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> From<T> for Compact<T> {
    fn from(value: T) -> Self {
        Compact(value)
    }
}

fn encode_compact<B: BufMut + ?Sized>(value: u64, dst: &mut B) {
    match value {
        0..=SINGLE_BYTE_MAX => dst.put_u8((value as u8) << 2),
        0..=TWO_BYTE_MAX => dst.put_u16_le(((value as u16) << 2) | 0b01),
        0..=FOUR_BYTE_MAX => dst.put_u32_le(((value as u32) << 2) | 0b10),
        _ => {
            let width = 8 - (value.leading_zeros() / 8) as usize;
            dst.put_u8((((width - 4) as u8) << 2) | 0b11);
            dst.put_slice(&value.to_le_bytes()[..width]);
        }
    }
}

fn compact_width(value: u64) -> usize {
    match value {
        0..=SINGLE_BYTE_MAX => 1,
        0..=TWO_BYTE_MAX => 2,
        0..=FOUR_BYTE_MAX => 4,
        _ => 1 + 8 - (value.leading_zeros() / 8) as usize,
    }
}

fn decode_compact<B: Buf + ?Sized>(src: &mut B) -> Result<u64> {
    let first = u8::decode(src)?;
    match first & 0b11 {
        0b00 => Ok(u64::from(first >> 2)),
        0b01 => {
            ensure_remaining(src, 1)?;
            let raw = u16::from_le_bytes([first, src.get_u8()]);
            let value = u64::from(raw >> 2);
            if value <= SINGLE_BYTE_MAX {
                return Err(Error::NonCanonicalCompact);
            }
            Ok(value)
        }
        0b10 => {
            ensure_remaining(src, 3)?;
            let mut raw = [first, 0, 0, 0];
            src.copy_to_slice(&mut raw[1..]);
            let value = u64::from(u32::from_le_bytes(raw) >> 2);
            if value <= TWO_BYTE_MAX {
                return Err(Error::NonCanonicalCompact);
            }
            Ok(value)
        }
        _ => {
            let width = usize::from(first >> 2) + 4;
            if width > 8 {
                return Err(Error::CompactOverflow { type_name: "u64" });
            }
            ensure_remaining(src, width)?;
            let mut raw = [0u8; 8];
            src.copy_to_slice(&mut raw[..width]);
            let value = u64::from_le_bytes(raw);
            if value <= FOUR_BYTE_MAX || raw[width - 1] == 0 {
                return Err(Error::NonCanonicalCompact);
            }
            Ok(value)
        }
    }
}

impl Encode for Compact<u64> {
    fn encode_to<B: BufMut + ?Sized>(&self, dst: &mut B) {
        encode_compact(self.0, dst);
    }

    fn size_hint(&self) -> usize {
        compact_width(self.0)
    }
}

impl Decode for Compact<u64> {
    fn decode<B: Buf + ?Sized>(src: &mut B) -> Result<Self> {
        decode_compact(src).map(Compact)
    }
}

impl Encode for Compact<u32> {
    fn encode_to<B: BufMut + ?Sized>(&self, dst: &mut B) {
        encode_compact(u64::from(self.0), dst);
    }

    fn size_hint(&self) -> usize {
        compact_width(u64::from(self.0))
    }
}

impl Decode for Compact<u32> {
    fn decode<B: Buf + ?Sized>(src: &mut B) -> Result<Self> {
        let value = decode_compact(src)?;
        u32::try_from(value)
            .map(Compact)
            .map_err(|_| Error::CompactOverflow { type_name: "u32" })
    }
}

/// Write a collection length prefix.
pub(crate) fn encode_len<B: BufMut + ?Sized>(len: usize, dst: &mut B) {
    encode_compact(len as u64, dst);
}

/// Read a collection length prefix. Lengths are bounded by `u32`.
pub(crate) fn decode_len<B: Buf + ?Sized>(src: &mut B) -> Result<usize> {
    let Compact(len) = Compact::<u32>::decode(src)?;
    usize::try_from(len).map_err(|_| Error::CompactOverflow { type_name: "usize" })
}

pub(crate) fn len_size_hint(len: usize) -> usize {
    compact_width(len as u64)
}
