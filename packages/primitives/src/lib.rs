//! Extrinsic primitives: the values dispatch produces and consumes.
//!
//! This layer gives meaning to the byte codec below it:
//! - [`DispatchOutcome`]: success, or failure with a [`DispatchError`]
//! - [`TransactionSource`], [`ValidTransaction`], [`TransactionValidityError`]:
//!   the vocabulary of unsigned-submission validation
//! - [`Call`]: the encodable, executable unit a module registers
//!
//! Every value type has a binary encoding (the consensus format) and a serde
//! representation (for JSON views).
//!
//! # Example
//!
//! ```rust
//! use extrinsic_primitives::{ArithmeticError, Decode, DispatchError, DispatchOutcome, Encode};
//!
//! let outcome = DispatchOutcome::new(DispatchError::from(ArithmeticError::Overflow));
//! let bytes = outcome.encode();
//! assert_eq!(&bytes[..], &[0x01, 0x08, 0x01]);
//! assert_eq!(DispatchOutcome::decode_all(&bytes).unwrap(), outcome);
//! ```

mod call;
mod dispatch_error;
mod dispatch_outcome;
mod transaction;

pub use call::Call;
pub use dispatch_error::{
    ArithmeticError, DispatchError, ModuleError, TokenError, TransactionalError,
};
pub use dispatch_outcome::{DispatchOutcome, DispatchResult};
pub use transaction::{
    InvalidTransaction, TransactionSource, TransactionTag, TransactionValidity,
    TransactionValidityError, UnknownTransaction, ValidTransaction, ValidTransactionBuilder,
};

// Re-export codec types for convenience
pub use extrinsic_codec::{Decode, Empty, Encode};
