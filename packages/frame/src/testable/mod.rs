//! The testable module: one no-op call, no unsigned calls.
//!
//! It exists so the outer runtime's routing and validation paths can be
//! exercised end to end without any business logic behind them.

mod call;

pub use call::TestCall;

use extrinsic_primitives::{
    Call, Empty, TransactionSource, TransactionValidity, TransactionValidityError,
};

use crate::module::no_unsigned_validator;
use crate::{CallTable, Module};

/// A module registering [`TestCall`] at
/// [`FUNCTION_TEST_INDEX`](crate::constants::FUNCTION_TEST_INDEX).
///
/// - `pre_dispatch` accepts every call.
/// - `validate_unsigned` rejects every call with
///   `Unknown(NoUnsignedValidator)`.
#[derive(Debug)]
pub struct TestableModule {
    functions: CallTable,
}

impl TestableModule {
    pub fn new() -> Self {
        Self {
            functions: CallTable::from_calls([Box::new(TestCall::new()) as Box<dyn Call>]),
        }
    }
}

impl Default for TestableModule {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for TestableModule {
    fn functions(&self) -> &CallTable {
        &self.functions
    }

    fn pre_dispatch(&self, _call: &dyn Call) -> Result<Empty, TransactionValidityError> {
        Ok(Empty)
    }

    fn validate_unsigned(
        &self,
        _source: TransactionSource,
        _call: &dyn Call,
    ) -> TransactionValidity {
        no_unsigned_validator()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{FUNCTION_TEST_INDEX, TESTABLE_MODULE_INDEX};
    use extrinsic_codec::{Buf, BufMut, Decode, Encode};
    use extrinsic_primitives::{DispatchError, DispatchResult, UnknownTransaction};

    #[test]
    fn registers_exactly_the_test_call() {
        let module = TestableModule::new();
        let functions = module.functions();
        assert_eq!(functions.len(), 1);
        let call = functions.get(FUNCTION_TEST_INDEX).unwrap();
        assert_eq!(call.module_index(), TESTABLE_MODULE_INDEX);
        assert_eq!(call.function_index(), FUNCTION_TEST_INDEX);
        assert!(functions.get(0).is_none());
    }

    #[test]
    fn functions_is_stable() {
        let module = TestableModule::new();
        let first: Vec<u8> = module.functions().indices().collect();
        let second: Vec<u8> = module.functions().indices().collect();
        assert_eq!(first, second);
        assert!(std::ptr::eq(module.functions(), module.functions()));
    }

    #[test]
    fn pre_dispatch_accepts_everything() {
        let module = TestableModule::new();
        for (_, call) in module.functions().iter() {
            assert_eq!(module.pre_dispatch(call), Ok(Empty));
        }
    }

    /// A call owned by some other module, with arguments.
    #[derive(Debug)]
    struct Foreign {
        payload: u32,
    }

    impl Call for Foreign {
        fn module_index(&self) -> u8 {
            3
        }

        fn function_index(&self) -> u8 {
            0
        }

        fn encode_args(&self, dst: &mut dyn BufMut) {
            self.payload.encode_to(dst);
        }

        fn decode_args(&self, src: &mut dyn Buf) -> extrinsic_codec::Result<Box<dyn Call>> {
            Ok(Box::new(Foreign {
                payload: u32::decode(src)?,
            }))
        }

        fn dispatch(&self) -> DispatchResult {
            Err(DispatchError::BadOrigin)
        }
    }

    #[test]
    fn pre_dispatch_accepts_calls_it_does_not_own() {
        let module = TestableModule::new();
        let foreign = Foreign { payload: 7 };
        assert_ne!(foreign.module_index(), TESTABLE_MODULE_INDEX);
        assert_eq!(module.pre_dispatch(&foreign), Ok(Empty));
        assert_eq!(
            module.validate_unsigned(TransactionSource::Local, &foreign),
            Err(TransactionValidityError::no_unsigned_validator())
        );
    }

    #[test]
    fn validate_unsigned_rejects_every_source() {
        let module = TestableModule::default();
        let call = TestCall::new();
        for source in [
            TransactionSource::InBlock,
            TransactionSource::Local,
            TransactionSource::External,
        ] {
            assert_eq!(
                module.validate_unsigned(source, &call),
                Err(TransactionValidityError::Unknown(
                    UnknownTransaction::NoUnsignedValidator
                ))
            );
        }
    }
}
