//! The result of attempting to dispatch an extrinsic.
//!
//! Wire format:
//!
//! ```text
//! DispatchOutcome ::= discriminant:u8 payload
//!   0x00 => (none)                 success
//!   0x01 => DispatchError encoding failure
//! ```
//!
//! `Success` only says the dispatch mechanism did not fail. Whatever the
//! call reports at the application level travels elsewhere.

use extrinsic_codec::{
    impl_variant_codec, unknown_discriminant, Buf, BufMut, Bytes, Decode, Empty, Encode, Result,
    Variant,
};
use serde::{Deserialize, Serialize};

use crate::DispatchError;

/// What a callable returns: unit on success, the abort reason otherwise.
pub type DispatchResult = std::result::Result<(), DispatchError>;

/// Success, or failure with a structured reason.
///
/// Built right after a callable finishes and consumed by the encoder; it is
/// never mutated in between.
///
/// Only the empty marker and a [`DispatchError`] can become an outcome:
///
/// ```rust
/// use extrinsic_primitives::{DispatchError, DispatchOutcome, Empty};
///
/// assert!(DispatchOutcome::new(Empty).is_success());
/// assert!(DispatchOutcome::new(DispatchError::BadOrigin).is_failure());
/// ```
///
/// Anything else is rejected at compile time:
///
/// ```compile_fail
/// use extrinsic_primitives::DispatchOutcome;
///
/// let outcome = DispatchOutcome::new(42u32);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DispatchOutcome {
    /// The callable ran to completion.
    #[default]
    Success,
    /// Dispatch was aborted.
    Failure(DispatchError),
}

impl DispatchOutcome {
    /// Build an outcome from the empty marker, a `DispatchError`, or a
    /// [`DispatchResult`].
    pub fn new(payload: impl Into<DispatchOutcome>) -> Self {
        payload.into()
    }

    pub fn success() -> Self {
        DispatchOutcome::Success
    }

    pub fn failure(err: DispatchError) -> Self {
        DispatchOutcome::Failure(err)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, DispatchOutcome::Success)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, DispatchOutcome::Failure(_))
    }

    /// The abort reason, if dispatch failed.
    pub fn error(&self) -> Option<&DispatchError> {
        match self {
            DispatchOutcome::Success => None,
            DispatchOutcome::Failure(err) => Some(err),
        }
    }

    pub fn into_result(self) -> DispatchResult {
        self.into()
    }

    /// The wire encoding.
    pub fn bytes(&self) -> Bytes {
        self.encode()
    }
}

impl Variant for DispatchOutcome {
    const NAME: &'static str = "DispatchOutcome";

    fn discriminant(&self) -> u8 {
        match self {
            DispatchOutcome::Success => 0,
            DispatchOutcome::Failure(_) => 1,
        }
    }

    fn encode_payload<B: BufMut + ?Sized>(&self, dst: &mut B) {
        match self {
            DispatchOutcome::Success => Empty.encode_to(dst),
            DispatchOutcome::Failure(err) => err.encode_to(dst),
        }
    }

    fn decode_payload<B: Buf + ?Sized>(discriminant: u8, src: &mut B) -> Result<Self> {
        match discriminant {
            0 => Empty::decode(src).map(DispatchOutcome::from),
            1 => DispatchError::decode(src).map(DispatchOutcome::from),
            other => Err(unknown_discriminant::<Self>(other)),
        }
    }

    fn payload_size_hint(&self) -> usize {
        self.error().map_or(0, Encode::size_hint)
    }
}

impl_variant_codec!(DispatchOutcome);

impl From<Empty> for DispatchOutcome {
    fn from(_: Empty) -> Self {
        DispatchOutcome::Success
    }
}

impl From<DispatchError> for DispatchOutcome {
    fn from(err: DispatchError) -> Self {
        DispatchOutcome::Failure(err)
    }
}

impl From<DispatchResult> for DispatchOutcome {
    fn from(result: DispatchResult) -> Self {
        match result {
            Ok(()) => DispatchOutcome::Success,
            Err(err) => DispatchOutcome::Failure(err),
        }
    }
}

impl From<DispatchOutcome> for DispatchResult {
    fn from(outcome: DispatchOutcome) -> Self {
        match outcome {
            DispatchOutcome::Success => Ok(()),
            DispatchOutcome::Failure(err) => Err(err),
        }
    }
}
