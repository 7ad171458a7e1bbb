//! The Variant codec: closed tagged unions on the wire.
//!
//! A variant value is written as one discriminant byte (the position of the
//! active alternative, starting at 0) followed by the encoding of that
//! alternative's payload:
//!
//! ```text
//! variant ::= discriminant:u8 payload
//! ```
//!
//! The set of alternatives is fixed by the Rust enum implementing
//! [`Variant`], so an encoder can never be handed a payload outside the
//! declared set. Decoding a discriminant outside the set fails with
//! [`Error::UnknownDiscriminant`].
//!
//! # Implementing Variant
//!
//! ```rust
//! use extrinsic_codec::{impl_variant_codec, unknown_discriminant, Buf, BufMut};
//! use extrinsic_codec::{Decode, Encode, Result, Variant};
//!
//! #[derive(Debug, PartialEq)]
//! enum Reading {
//!     Missing,
//!     Celsius(u16),
//! }
//!
//! impl Variant for Reading {
//!     const NAME: &'static str = "Reading";
//!
//!     fn discriminant(&self) -> u8 {
//!         match self {
//!             Reading::Missing => 0,
//!             Reading::Celsius(_) => 1,
//!         }
//!     }
//!
//!     fn encode_payload<B: BufMut + ?Sized>(&self, dst: &mut B) {
//!         if let Reading::Celsius(t) = self {
//!             t.encode_to(dst);
//!         }
//!     }
//!
//!     fn decode_payload<B: Buf + ?Sized>(discriminant: u8, src: &mut B) -> Result<Self> {
//!         match discriminant {
//!             0 => Ok(Reading::Missing),
//!             1 => Ok(Reading::Celsius(u16::decode(src)?)),
//!             other => Err(unknown_discriminant::<Self>(other)),
//!         }
//!     }
//! }
//!
//! impl_variant_codec!(Reading);
//!
//! assert_eq!(&Reading::Celsius(21).encode()[..], &[1, 21, 0]);
//! assert_eq!(Reading::decode_all(&[0]).unwrap(), Reading::Missing);
//! assert!(Reading::decode_all(&[7]).is_err());
//! ```

use bytes::{Buf, BufMut};

use crate::error::{Error, Result};
use crate::{Decode, Encode};

/// A closed, fixed-cardinality tagged union.
pub trait Variant: Sized {
    /// Type name reported in [`Error::UnknownDiscriminant`].
    const NAME: &'static str;

    /// Position of the active alternative.
    fn discriminant(&self) -> u8;

    /// Append the active alternative's payload (without the discriminant).
    fn encode_payload<B: BufMut + ?Sized>(&self, dst: &mut B);

    /// Decode the payload for `discriminant` from `src`.
    ///
    /// Must return [`unknown_discriminant`] for positions outside the set.
    fn decode_payload<B: Buf + ?Sized>(discriminant: u8, src: &mut B) -> Result<Self>;

    /// A guess at the payload's encoded length.
    fn payload_size_hint(&self) -> usize {
        0
    }
}

/// Write `value` as `discriminant:u8 payload`.
pub fn encode_variant<V: Variant, B: BufMut + ?Sized>(value: &V, dst: &mut B) {
    dst.put_u8(value.discriminant());
    value.encode_payload(dst);
}

/// Read a discriminant byte, then the payload it selects.
pub fn decode_variant<V: Variant, B: Buf + ?Sized>(src: &mut B) -> Result<V> {
    let discriminant = u8::decode(src)?;
    V::decode_payload(discriminant, src)
}

/// The error for a discriminant outside `V`'s declared set.
pub fn unknown_discriminant<V: Variant>(discriminant: u8) -> Error {
    Error::UnknownDiscriminant {
        type_name: V::NAME,
        discriminant,
    }
}

/// Implement [`Encode`] and [`Decode`] for types implementing [`Variant`].
#[macro_export]
macro_rules! impl_variant_codec {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Encode for $ty {
                fn encode_to<B: $crate::BufMut + ?Sized>(&self, dst: &mut B) {
                    $crate::encode_variant(self, dst)
                }

                fn size_hint(&self) -> usize {
                    1 + $crate::Variant::payload_size_hint(self)
                }
            }

            impl $crate::Decode for $ty {
                fn decode<B: $crate::Buf + ?Sized>(src: &mut B) -> $crate::Result<Self> {
                    $crate::decode_variant(src)
                }
            }
        )+
    };
}

/// Implement [`Variant`], [`Encode`] and [`Decode`] for a fieldless enum
/// with explicitly numbered alternatives.
///
/// ```rust
/// use extrinsic_codec::{impl_unit_variant_codec, Decode, Encode};
///
/// #[derive(Debug, PartialEq)]
/// enum Light {
///     Red,
///     Green,
/// }
///
/// impl_unit_variant_codec!(Light { Red = 0, Green = 1 });
///
/// assert_eq!(&Light::Green.encode()[..], &[1]);
/// assert_eq!(Light::decode_all(&[0]).unwrap(), Light::Red);
/// ```
#[macro_export]
macro_rules! impl_unit_variant_codec {
    ($ty:ident { $($variant:ident = $index:literal),+ $(,)? }) => {
        impl $crate::Variant for $ty {
            const NAME: &'static str = stringify!($ty);

            fn discriminant(&self) -> u8 {
                match self {
                    $($ty::$variant => $index,)+
                }
            }

            fn encode_payload<B: $crate::BufMut + ?Sized>(&self, _dst: &mut B) {}

            fn decode_payload<B: $crate::Buf + ?Sized>(
                discriminant: u8,
                _src: &mut B,
            ) -> $crate::Result<Self> {
                match discriminant {
                    $($index => Ok($ty::$variant),)+
                    other => Err($crate::unknown_discriminant::<Self>(other)),
                }
            }
        }

        $crate::impl_variant_codec!($ty);
    };
}

impl<T: Encode + Decode> Variant for Option<T> {
    const NAME: &'static str = "Option";

    fn discriminant(&self) -> u8 {
        match self {
            None => 0,
            Some(_) => 1,
        }
    }

    fn encode_payload<B: BufMut + ?Sized>(&self, dst: &mut B) {
        if let Some(value) = self {
            value.encode_to(dst);
        }
    }

    fn decode_payload<B: Buf + ?Sized>(discriminant: u8, src: &mut B) -> Result<Self> {
        match discriminant {
            0 => Ok(None),
            1 => T::decode(src).map(Some),
            other => Err(unknown_discriminant::<Self>(other)),
        }
    }

    fn payload_size_hint(&self) -> usize {
        self.as_ref().map_or(0, Encode::size_hint)
    }
}

impl<T: Encode + Decode> Encode for Option<T> {
    fn encode_to<B: BufMut + ?Sized>(&self, dst: &mut B) {
        encode_variant(self, dst)
    }

    fn size_hint(&self) -> usize {
        1 + self.payload_size_hint()
    }
}

impl<T: Encode + Decode> Decode for Option<T> {
    fn decode<B: Buf + ?Sized>(src: &mut B) -> Result<Self> {
        decode_variant(src)
    }
}

impl<T: Encode + Decode, E: Encode + Decode> Variant for std::result::Result<T, E> {
    const NAME: &'static str = "Result";

    fn discriminant(&self) -> u8 {
        match self {
            Ok(_) => 0,
            Err(_) => 1,
        }
    }

    fn encode_payload<B: BufMut + ?Sized>(&self, dst: &mut B) {
        match self {
            Ok(value) => value.encode_to(dst),
            Err(err) => err.encode_to(dst),
        }
    }

    fn decode_payload<B: Buf + ?Sized>(discriminant: u8, src: &mut B) -> Result<Self> {
        match discriminant {
            0 => T::decode(src).map(Ok),
            1 => E::decode(src).map(Err),
            other => Err(unknown_discriminant::<Self>(other)),
        }
    }

    fn payload_size_hint(&self) -> usize {
        match self {
            Ok(value) => value.size_hint(),
            Err(err) => err.size_hint(),
        }
    }
}

impl<T: Encode + Decode, E: Encode + Decode> Encode for std::result::Result<T, E> {
    fn encode_to<B: BufMut + ?Sized>(&self, dst: &mut B) {
        encode_variant(self, dst)
    }

    fn size_hint(&self) -> usize {
        1 + self.payload_size_hint()
    }
}

impl<T: Encode + Decode, E: Encode + Decode> Decode for std::result::Result<T, E> {
    fn decode<B: Buf + ?Sized>(src: &mut B) -> Result<Self> {
        decode_variant(src)
    }
}
