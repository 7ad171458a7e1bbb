//! Extrinsic: the dispatch surface between a runtime and its modules.
//!
//! A runtime is assembled from modules addressed by a one-byte index. Each
//! module exposes a table of callables addressed by a one-byte function
//! index, a pre-dispatch check and a validator for unsigned submissions.
//! Executing a call yields a [`DispatchOutcome`], which crosses the runtime
//! boundary as a tagged union of bytes.
//!
//! The layers, bottom up:
//!
//! - [`codec`]: the byte-level encoding, including tagged unions ([`codec::Variant`])
//! - [`primitives`]: dispatch outcomes and errors, transaction validity, the [`Call`] contract
//! - [`frame`]: the [`Module`] contract, call tables and the [`Router`]

pub use extrinsic_codec as codec;
pub use extrinsic_frame as frame;
pub use extrinsic_primitives as primitives;

pub use extrinsic_codec::{Decode, Encode};
pub use extrinsic_frame::{CallTable, Module, Router};
pub use extrinsic_primitives::{
    Call, DispatchError, DispatchOutcome, TransactionSource, TransactionValidity,
    TransactionValidityError,
};
