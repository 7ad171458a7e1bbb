//! The Module contract every runtime module implements.

use std::sync::Arc;

use extrinsic_primitives::{
    Call, Empty, TransactionSource, TransactionValidity, TransactionValidityError,
};

use crate::CallTable;

/// The capability set the outer runtime needs from a module.
///
/// All three operations are pure over their inputs and the module's
/// immutable call table, so a module can serve any number of threads at
/// once. None of them retries internally.
///
/// There are no default bodies: a module states its pre-dispatch and
/// unsigned-validation policy explicitly, even when the policy is "accept
/// everything" or "reject everything".
///
/// # Object Safety
///
/// This trait is object-safe: routers hold `Box<dyn Module>`.
pub trait Module: Send + Sync {
    /// The module's call table. Built once at construction; every call
    /// returns the same table.
    fn functions(&self) -> &CallTable;

    /// Check run right before executing `call`.
    fn pre_dispatch(&self, call: &dyn Call) -> Result<Empty, TransactionValidityError>;

    /// Decide whether an unsigned submission of `call` may enter the pool or
    /// a block.
    ///
    /// Modules without unsigned calls return [`no_unsigned_validator`].
    fn validate_unsigned(&self, source: TransactionSource, call: &dyn Call) -> TransactionValidity;
}

/// The verdict of a module that provides no unsigned-validation logic.
pub fn no_unsigned_validator() -> TransactionValidity {
    Err(TransactionValidityError::no_unsigned_validator())
}

// Blanket implementations for references and smart pointers

impl<T: Module + ?Sized> Module for &T {
    fn functions(&self) -> &CallTable {
        (**self).functions()
    }

    fn pre_dispatch(&self, call: &dyn Call) -> Result<Empty, TransactionValidityError> {
        (**self).pre_dispatch(call)
    }

    fn validate_unsigned(&self, source: TransactionSource, call: &dyn Call) -> TransactionValidity {
        (**self).validate_unsigned(source, call)
    }
}

impl<T: Module + ?Sized> Module for Box<T> {
    fn functions(&self) -> &CallTable {
        self.as_ref().functions()
    }

    fn pre_dispatch(&self, call: &dyn Call) -> Result<Empty, TransactionValidityError> {
        self.as_ref().pre_dispatch(call)
    }

    fn validate_unsigned(&self, source: TransactionSource, call: &dyn Call) -> TransactionValidity {
        self.as_ref().validate_unsigned(source, call)
    }
}

impl<T: Module + ?Sized> Module for Arc<T> {
    fn functions(&self) -> &CallTable {
        self.as_ref().functions()
    }

    fn pre_dispatch(&self, call: &dyn Call) -> Result<Empty, TransactionValidityError> {
        self.as_ref().pre_dispatch(call)
    }

    fn validate_unsigned(&self, source: TransactionSource, call: &dyn Call) -> TransactionValidity {
        self.as_ref().validate_unsigned(source, call)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testable::{TestCall, TestableModule};
    use extrinsic_primitives::{InvalidTransaction, ValidTransaction};

    /// A module with an unsigned call that only accepts local submissions.
    struct LocalOnly {
        functions: CallTable,
    }

    impl LocalOnly {
        fn new() -> Self {
            Self {
                functions: CallTable::from_calls([Box::new(TestCall::new()) as Box<dyn Call>]),
            }
        }
    }

    impl Module for LocalOnly {
        fn functions(&self) -> &CallTable {
            &self.functions
        }

        fn pre_dispatch(&self, _call: &dyn Call) -> Result<Empty, TransactionValidityError> {
            Ok(Empty)
        }

        fn validate_unsigned(
            &self,
            source: TransactionSource,
            _call: &dyn Call,
        ) -> TransactionValidity {
            match source {
                TransactionSource::Local => Ok(ValidTransaction::default()),
                _ => Err(InvalidTransaction::Call.into()),
            }
        }
    }

    #[test]
    fn no_unsigned_validator_is_the_named_rejection() {
        assert_eq!(
            no_unsigned_validator(),
            Err(TransactionValidityError::no_unsigned_validator())
        );
    }

    #[test]
    fn custom_module_policy() {
        let module = LocalOnly::new();
        let call = TestCall::new();
        assert!(module
            .validate_unsigned(TransactionSource::Local, &call)
            .is_ok());
        assert_eq!(
            module.validate_unsigned(TransactionSource::External, &call),
            Err(TransactionValidityError::Invalid(InvalidTransaction::Call))
        );
    }

    #[test]
    fn smart_pointers_forward() {
        let module = Arc::new(TestableModule::new());
        let boxed: Box<dyn Module> = Box::new(Arc::clone(&module));
        let call = TestCall::new();
        assert_eq!(boxed.pre_dispatch(&call), Ok(Empty));
        assert_eq!(
            boxed.validate_unsigned(TransactionSource::InBlock, &call),
            no_unsigned_validator()
        );
        assert_eq!(boxed.functions().len(), module.functions().len());
        let by_ref: &dyn Module = &*module;
        assert_eq!(<&dyn Module as Module>::functions(&by_ref).len(), 1);
    }
}
