//! Transaction validity: where a submission came from, how it was judged.

use extrinsic_codec::{
    impl_unit_variant_codec, impl_variant_codec, unknown_discriminant, Buf, BufMut, Decode,
    Encode, Result, Variant,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tag used to order transactions in the pool.
pub type TransactionTag = Vec<u8>;

/// Where an extrinsic was submitted from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionSource {
    /// Already part of a block being imported.
    InBlock,
    /// Submitted by the local node.
    Local,
    /// Received from the network or an RPC client.
    External,
}

impl_unit_variant_codec!(TransactionSource {
    InBlock = 0,
    Local = 1,
    External = 2,
});

/// Information about a transaction judged valid for the pool.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidTransaction {
    /// Higher priority transactions are included first.
    pub priority: u64,
    /// Tags that must be provided by earlier transactions.
    pub requires: Vec<TransactionTag>,
    /// Tags this transaction provides to later ones.
    pub provides: Vec<TransactionTag>,
    /// Number of blocks the transaction stays valid for.
    pub longevity: u64,
    /// Whether the transaction may be gossiped to peers.
    pub propagate: bool,
}

impl Default for ValidTransaction {
    fn default() -> Self {
        Self {
            priority: 0,
            requires: Vec::new(),
            provides: Vec::new(),
            longevity: u64::MAX,
            propagate: true,
        }
    }
}

impl ValidTransaction {
    pub fn builder() -> ValidTransactionBuilder {
        ValidTransactionBuilder::default()
    }

    /// Merge the verdicts of two independent checks on the same transaction.
    ///
    /// Priorities add (saturating), tags concatenate, the shorter longevity
    /// wins and propagation requires both to agree.
    pub fn combine_with(mut self, mut other: ValidTransaction) -> Self {
        self.priority = self.priority.saturating_add(other.priority);
        self.requires.append(&mut other.requires);
        self.provides.append(&mut other.provides);
        self.longevity = self.longevity.min(other.longevity);
        self.propagate = self.propagate && other.propagate;
        self
    }
}

impl Encode for ValidTransaction {
    fn encode_to<B: BufMut + ?Sized>(&self, dst: &mut B) {
        self.priority.encode_to(dst);
        self.requires.encode_to(dst);
        self.provides.encode_to(dst);
        self.longevity.encode_to(dst);
        self.propagate.encode_to(dst);
    }

    fn size_hint(&self) -> usize {
        8 + self.requires.size_hint() + self.provides.size_hint() + 8 + 1
    }
}

impl Decode for ValidTransaction {
    fn decode<B: Buf + ?Sized>(src: &mut B) -> Result<Self> {
        Ok(ValidTransaction {
            priority: u64::decode(src)?,
            requires: Vec::decode(src)?,
            provides: Vec::decode(src)?,
            longevity: u64::decode(src)?,
            propagate: bool::decode(src)?,
        })
    }
}

/// Builder for [`ValidTransaction`], starting from its defaults.
#[derive(Clone, Debug, Default)]
pub struct ValidTransactionBuilder {
    inner: ValidTransaction,
}

impl ValidTransactionBuilder {
    pub fn priority(mut self, priority: u64) -> Self {
        self.inner.priority = priority;
        self
    }

    pub fn and_requires(mut self, tag: impl Into<TransactionTag>) -> Self {
        self.inner.requires.push(tag.into());
        self
    }

    pub fn and_provides(mut self, tag: impl Into<TransactionTag>) -> Self {
        self.inner.provides.push(tag.into());
        self
    }

    pub fn longevity(mut self, longevity: u64) -> Self {
        self.inner.longevity = longevity;
        self
    }

    pub fn propagate(mut self, propagate: bool) -> Self {
        self.inner.propagate = propagate;
        self
    }

    pub fn build(self) -> ValidTransaction {
        self.inner
    }
}

impl From<ValidTransactionBuilder> for ValidTransaction {
    fn from(builder: ValidTransactionBuilder) -> Self {
        builder.build()
    }
}

/// The transaction is definitely invalid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum InvalidTransaction {
    #[error("call of the transaction is not expected")]
    Call,
    #[error("inability to pay some fees")]
    Payment,
    #[error("transaction not yet valid")]
    Future,
    #[error("transaction is outdated")]
    Stale,
    #[error("transaction has a bad signature")]
    BadProof,
    #[error("transaction has an ancient birth block")]
    AncientBirthBlock,
    #[error("transaction would exhaust the block limits")]
    ExhaustsResources,
    #[error("custom invalid transaction error: {0}")]
    Custom(u8),
    #[error("a mandatory dispatch failed")]
    BadMandatory,
    #[error("a mandatory dispatch was submitted as a transaction")]
    MandatoryValidation,
    #[error("transaction has a bad signer")]
    BadSigner,
}

impl Variant for InvalidTransaction {
    const NAME: &'static str = "InvalidTransaction";

    fn discriminant(&self) -> u8 {
        match self {
            InvalidTransaction::Call => 0,
            InvalidTransaction::Payment => 1,
            InvalidTransaction::Future => 2,
            InvalidTransaction::Stale => 3,
            InvalidTransaction::BadProof => 4,
            InvalidTransaction::AncientBirthBlock => 5,
            InvalidTransaction::ExhaustsResources => 6,
            InvalidTransaction::Custom(_) => 7,
            InvalidTransaction::BadMandatory => 8,
            InvalidTransaction::MandatoryValidation => 9,
            InvalidTransaction::BadSigner => 10,
        }
    }

    fn encode_payload<B: BufMut + ?Sized>(&self, dst: &mut B) {
        if let InvalidTransaction::Custom(code) = self {
            code.encode_to(dst);
        }
    }

    fn decode_payload<B: Buf + ?Sized>(discriminant: u8, src: &mut B) -> Result<Self> {
        Ok(match discriminant {
            0 => InvalidTransaction::Call,
            1 => InvalidTransaction::Payment,
            2 => InvalidTransaction::Future,
            3 => InvalidTransaction::Stale,
            4 => InvalidTransaction::BadProof,
            5 => InvalidTransaction::AncientBirthBlock,
            6 => InvalidTransaction::ExhaustsResources,
            7 => InvalidTransaction::Custom(u8::decode(src)?),
            8 => InvalidTransaction::BadMandatory,
            9 => InvalidTransaction::MandatoryValidation,
            10 => InvalidTransaction::BadSigner,
            other => return Err(unknown_discriminant::<Self>(other)),
        })
    }

    fn payload_size_hint(&self) -> usize {
        usize::from(matches!(self, InvalidTransaction::Custom(_)))
    }
}

/// Validity could not be determined.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum UnknownTransaction {
    #[error("could not look up information required to validate the transaction")]
    CannotLookup,
    #[error("no validator found for the unsigned transaction")]
    NoUnsignedValidator,
    #[error("custom unknown transaction error: {0}")]
    Custom(u8),
}

impl Variant for UnknownTransaction {
    const NAME: &'static str = "UnknownTransaction";

    fn discriminant(&self) -> u8 {
        match self {
            UnknownTransaction::CannotLookup => 0,
            UnknownTransaction::NoUnsignedValidator => 1,
            UnknownTransaction::Custom(_) => 2,
        }
    }

    fn encode_payload<B: BufMut + ?Sized>(&self, dst: &mut B) {
        if let UnknownTransaction::Custom(code) = self {
            code.encode_to(dst);
        }
    }

    fn decode_payload<B: Buf + ?Sized>(discriminant: u8, src: &mut B) -> Result<Self> {
        match discriminant {
            0 => Ok(UnknownTransaction::CannotLookup),
            1 => Ok(UnknownTransaction::NoUnsignedValidator),
            2 => u8::decode(src).map(UnknownTransaction::Custom),
            other => Err(unknown_discriminant::<Self>(other)),
        }
    }

    fn payload_size_hint(&self) -> usize {
        usize::from(matches!(self, UnknownTransaction::Custom(_)))
    }
}

/// Why a transaction was refused entry to the pool or block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum TransactionValidityError {
    #[error("invalid transaction: {0}")]
    Invalid(InvalidTransaction),
    #[error("unknown transaction validity: {0}")]
    Unknown(UnknownTransaction),
}

impl TransactionValidityError {
    /// The rejection given by modules that have no unsigned calls.
    pub fn no_unsigned_validator() -> Self {
        TransactionValidityError::Unknown(UnknownTransaction::NoUnsignedValidator)
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, TransactionValidityError::Invalid(_))
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, TransactionValidityError::Unknown(_))
    }
}

impl Variant for TransactionValidityError {
    const NAME: &'static str = "TransactionValidityError";

    fn discriminant(&self) -> u8 {
        match self {
            TransactionValidityError::Invalid(_) => 0,
            TransactionValidityError::Unknown(_) => 1,
        }
    }

    fn encode_payload<B: BufMut + ?Sized>(&self, dst: &mut B) {
        match self {
            TransactionValidityError::Invalid(err) => err.encode_to(dst),
            TransactionValidityError::Unknown(err) => err.encode_to(dst),
        }
    }

    fn decode_payload<B: Buf + ?Sized>(discriminant: u8, src: &mut B) -> Result<Self> {
        match discriminant {
            0 => InvalidTransaction::decode(src).map(TransactionValidityError::Invalid),
            1 => UnknownTransaction::decode(src).map(TransactionValidityError::Unknown),
            other => Err(unknown_discriminant::<Self>(other)),
        }
    }

    fn payload_size_hint(&self) -> usize {
        match self {
            TransactionValidityError::Invalid(err) => err.size_hint(),
            TransactionValidityError::Unknown(err) => err.size_hint(),
        }
    }
}

impl_variant_codec!(InvalidTransaction, UnknownTransaction, TransactionValidityError);

impl From<InvalidTransaction> for TransactionValidityError {
    fn from(err: InvalidTransaction) -> Self {
        TransactionValidityError::Invalid(err)
    }
}

impl From<UnknownTransaction> for TransactionValidityError {
    fn from(err: UnknownTransaction) -> Self {
        TransactionValidityError::Unknown(err)
    }
}

/// The verdict of unsigned validation.
///
/// Encodes as a `Result` variant: `0x00 ValidTransaction` or
/// `0x01 TransactionValidityError`.
pub type TransactionValidity = std::result::Result<ValidTransaction, TransactionValidityError>;

#[cfg(test)]
mod tests {
    use super::*;
    use extrinsic_codec::Error;

    #[test]
    fn source_discriminants() {
        assert_eq!(&TransactionSource::InBlock.encode()[..], &[0]);
        assert_eq!(&TransactionSource::External.encode()[..], &[2]);
        assert_eq!(TransactionSource::decode_all(&[1]), Ok(TransactionSource::Local));
        assert!(matches!(
            TransactionSource::decode_all(&[3]),
            Err(Error::UnknownDiscriminant { .. })
        ));
    }

    #[test]
    fn valid_transaction_defaults() {
        let valid = ValidTransaction::default();
        assert_eq!(valid.priority, 0);
        assert!(valid.requires.is_empty());
        assert!(valid.provides.is_empty());
        assert_eq!(valid.longevity, u64::MAX);
        assert!(valid.propagate);
    }

    #[test]
    fn valid_transaction_layout() {
        let valid = ValidTransaction::builder()
            .priority(1)
            .and_provides(vec![0xaa])
            .longevity(2)
            .propagate(false)
            .build();
        let mut expected = vec![1, 0, 0, 0, 0, 0, 0, 0];
        expected.push(0x00); // requires: empty
        expected.extend_from_slice(&[0x04, 0x04, 0xaa]); // provides: [[0xaa]]
        expected.extend_from_slice(&[2, 0, 0, 0, 0, 0, 0, 0]);
        expected.push(0x00);
        assert_eq!(&valid.encode()[..], &expected[..]);
        assert_eq!(ValidTransaction::decode_all(&expected), Ok(valid.clone()));
        assert_eq!(valid.size_hint(), expected.len());
    }

    #[test]
    fn combine_with_merges_verdicts() {
        let a = ValidTransaction::builder()
            .priority(u64::MAX - 1)
            .and_requires(b"a".to_vec())
            .longevity(10)
            .build();
        let b = ValidTransaction::builder()
            .priority(5)
            .and_provides(b"b".to_vec())
            .longevity(3)
            .propagate(false)
            .build();
        let merged = a.combine_with(b);
        assert_eq!(merged.priority, u64::MAX);
        assert_eq!(merged.requires, vec![b"a".to_vec()]);
        assert_eq!(merged.provides, vec![b"b".to_vec()]);
        assert_eq!(merged.longevity, 3);
        assert!(!merged.propagate);
    }

    #[test]
    fn validity_error_layout() {
        assert_eq!(
            &TransactionValidityError::no_unsigned_validator().encode()[..],
            &[1, 1]
        );
        assert_eq!(
            &TransactionValidityError::from(InvalidTransaction::Custom(42)).encode()[..],
            &[0, 7, 42]
        );
        assert_eq!(
            TransactionValidityError::decode_all(&[1, 2, 9]),
            Ok(TransactionValidityError::Unknown(UnknownTransaction::Custom(9)))
        );
    }

    #[test]
    fn transaction_validity_is_a_result_variant() {
        let rejected: TransactionValidity = Err(TransactionValidityError::no_unsigned_validator());
        assert_eq!(&rejected.encode()[..], &[1, 1, 1]);
        assert_eq!(TransactionValidity::decode_all(&[1, 1, 1]), Ok(rejected));

        let accepted: TransactionValidity = Ok(ValidTransaction::default());
        let bytes = accepted.encode();
        assert_eq!(bytes[0], 0);
        assert_eq!(TransactionValidity::decode_all(&bytes), Ok(accepted));
    }

    #[test]
    fn custom_codes_underflow_without_payload() {
        assert!(matches!(
            InvalidTransaction::decode_all(&[7]),
            Err(Error::Underflow { .. })
        ));
        assert!(matches!(
            UnknownTransaction::decode_all(&[2]),
            Err(Error::Underflow { .. })
        ));
    }

    #[test]
    fn predicates_and_display() {
        let err = TransactionValidityError::no_unsigned_validator();
        assert!(err.is_unknown());
        assert!(!err.is_invalid());
        assert_eq!(
            format!("{}", err),
            "unknown transaction validity: no validator found for the unsigned transaction"
        );
    }

    #[test]
    fn json_view() {
        let err = TransactionValidityError::from(InvalidTransaction::Stale);
        let json = serde_json::to_value(err).unwrap();
        assert_eq!(json, serde_json::json!({"Invalid": "Stale"}));
    }
}
