//! Structured reasons a dispatch was aborted.

use extrinsic_codec::{
    impl_unit_variant_codec, impl_variant_codec, unknown_discriminant, Buf, BufMut, Decode,
    Encode, Result, Variant,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An error reported by a specific module.
///
/// `index` is the module's index in the runtime; `error` is the module's own
/// error code, opaque at this level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleError {
    pub index: u8,
    pub error: [u8; 4],
}

impl Encode for ModuleError {
    fn encode_to<B: BufMut + ?Sized>(&self, dst: &mut B) {
        self.index.encode_to(dst);
        self.error.encode_to(dst);
    }

    fn size_hint(&self) -> usize {
        5
    }
}

impl Decode for ModuleError {
    fn decode<B: Buf + ?Sized>(src: &mut B) -> Result<Self> {
        Ok(ModuleError {
            index: u8::decode(src)?,
            error: <[u8; 4]>::decode(src)?,
        })
    }
}

/// Failures moving tokens or balances.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum TokenError {
    #[error("funds are unavailable")]
    FundsUnavailable,
    #[error("account that must exist would die")]
    OnlyProvider,
    #[error("account cannot exist with the funds that would be given")]
    BelowMinimum,
    #[error("account cannot be created")]
    CannotCreate,
    #[error("the asset in question is unknown")]
    UnknownAsset,
    #[error("funds exist but are frozen")]
    Frozen,
    #[error("operation is not supported by the asset")]
    Unsupported,
    #[error("account cannot be created for recording amount on hold")]
    CannotCreateHold,
    #[error("account that is desired to remain would die")]
    NotExpendable,
    #[error("account cannot receive the assets")]
    Blocked,
}

impl_unit_variant_codec!(TokenError {
    FundsUnavailable = 0,
    OnlyProvider = 1,
    BelowMinimum = 2,
    CannotCreate = 3,
    UnknownAsset = 4,
    Frozen = 5,
    Unsupported = 6,
    CannotCreateHold = 7,
    NotExpendable = 8,
    Blocked = 9,
});

/// Checked arithmetic failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum ArithmeticError {
    #[error("arithmetic underflow")]
    Underflow,
    #[error("arithmetic overflow")]
    Overflow,
    #[error("division by zero")]
    DivisionByZero,
}

impl_unit_variant_codec!(ArithmeticError {
    Underflow = 0,
    Overflow = 1,
    DivisionByZero = 2,
});

/// Failures of the transactional storage layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum TransactionalError {
    #[error("too many transactional layers have been spawned")]
    LimitReached,
    #[error("a transactional layer was expected, but does not exist")]
    NoLayer,
}

impl_unit_variant_codec!(TransactionalError {
    LimitReached = 0,
    NoLayer = 1,
});

/// Why the runtime's dispatch mechanism aborted a call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum DispatchError {
    #[error("other dispatch error")]
    Other,
    #[error("failed to look up an account or call")]
    CannotLookup,
    #[error("bad origin")]
    BadOrigin,
    #[error("module {} error {:?}", .0.index, .0.error)]
    Module(ModuleError),
    #[error("account has remaining consumers")]
    ConsumerRemaining,
    #[error("account has no providers")]
    NoProviders,
    #[error("too many consumers")]
    TooManyConsumers,
    #[error("token error: {0}")]
    Token(TokenError),
    #[error("arithmetic error: {0}")]
    Arithmetic(ArithmeticError),
    #[error("transactional error: {0}")]
    Transactional(TransactionalError),
    #[error("resources exhausted")]
    Exhausted,
    #[error("state is corrupt")]
    Corruption,
    #[error("resource is unavailable")]
    Unavailable,
}

impl Variant for DispatchError {
    const NAME: &'static str = "DispatchError";

    fn discriminant(&self) -> u8 {
        match self {
            DispatchError::Other => 0,
            DispatchError::CannotLookup => 1,
            DispatchError::BadOrigin => 2,
            DispatchError::Module(_) => 3,
            DispatchError::ConsumerRemaining => 4,
            DispatchError::NoProviders => 5,
            DispatchError::TooManyConsumers => 6,
            DispatchError::Token(_) => 7,
            DispatchError::Arithmetic(_) => 8,
            DispatchError::Transactional(_) => 9,
            DispatchError::Exhausted => 10,
            DispatchError::Corruption => 11,
            DispatchError::Unavailable => 12,
        }
    }

    fn encode_payload<B: BufMut + ?Sized>(&self, dst: &mut B) {
        match self {
            DispatchError::Module(err) => err.encode_to(dst),
            DispatchError::Token(err) => err.encode_to(dst),
            DispatchError::Arithmetic(err) => err.encode_to(dst),
            DispatchError::Transactional(err) => err.encode_to(dst),
            _ => {}
        }
    }

    fn decode_payload<B: Buf + ?Sized>(discriminant: u8, src: &mut B) -> Result<Self> {
        Ok(match discriminant {
            0 => DispatchError::Other,
            1 => DispatchError::CannotLookup,
            2 => DispatchError::BadOrigin,
            3 => DispatchError::Module(ModuleError::decode(src)?),
            4 => DispatchError::ConsumerRemaining,
            5 => DispatchError::NoProviders,
            6 => DispatchError::TooManyConsumers,
            7 => DispatchError::Token(TokenError::decode(src)?),
            8 => DispatchError::Arithmetic(ArithmeticError::decode(src)?),
            9 => DispatchError::Transactional(TransactionalError::decode(src)?),
            10 => DispatchError::Exhausted,
            11 => DispatchError::Corruption,
            12 => DispatchError::Unavailable,
            other => return Err(unknown_discriminant::<Self>(other)),
        })
    }

    fn payload_size_hint(&self) -> usize {
        match self {
            DispatchError::Module(_) => 5,
            DispatchError::Token(_)
            | DispatchError::Arithmetic(_)
            | DispatchError::Transactional(_) => 1,
            _ => 0,
        }
    }
}

impl_variant_codec!(DispatchError);

impl From<ModuleError> for DispatchError {
    fn from(err: ModuleError) -> Self {
        DispatchError::Module(err)
    }
}

impl From<TokenError> for DispatchError {
    fn from(err: TokenError) -> Self {
        DispatchError::Token(err)
    }
}

impl From<ArithmeticError> for DispatchError {
    fn from(err: ArithmeticError) -> Self {
        DispatchError::Arithmetic(err)
    }
}

impl From<TransactionalError> for DispatchError {
    fn from(err: TransactionalError) -> Self {
        DispatchError::Transactional(err)
    }
}
