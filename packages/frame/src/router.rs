//! Router: route extrinsics to the module and callable they name.
//!
//! The router is the outer runtime's view of all modules: a table from module
//! index to [`Module`], each of which owns a [`CallTable`](crate::CallTable)
//! from function index to callable. Uniqueness of function indices is
//! enforced per module by the call table; uniqueness of module indices is
//! enforced here. A call is addressed by the pair, so two modules may reuse
//! the same function index.
//!
//! Flow for an unsigned extrinsic:
//!
//! ```text
//! bytes --decode_call--> Box<dyn Call>
//!       --validate_unsigned--> ValidTransaction
//!       --pre_dispatch--> Empty
//!       --dispatch--> DispatchOutcome --encode--> bytes
//! ```

use std::collections::BTreeMap;

use extrinsic_codec::{Buf, Decode};
use extrinsic_primitives::{
    Call, DispatchError, DispatchOutcome, Empty, TransactionSource, TransactionValidity,
    TransactionValidityError, UnknownTransaction,
};
use tracing::{debug, trace, warn};

use crate::{Error, Module, Result};

/// A boxed module that is Send + Sync.
pub type ModuleBox = Box<dyn Module>;

/// Configuration for the router.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Maximum number of modules that may be registered.
    pub max_modules: usize,
}

impl Default for RouterConfig {
    fn default() -> Self {
        // One per possible module index.
        Self {
            max_modules: usize::from(u8::MAX) + 1,
        }
    }
}

/// Routes calls to the modules registered by index.
///
/// Registration happens while the runtime is assembled; afterwards the
/// router is only read, so it can be shared across threads without locking.
///
/// # Example
///
/// ```rust
/// use extrinsic_frame::constants::{FUNCTION_TEST_INDEX, TESTABLE_MODULE_INDEX};
/// use extrinsic_frame::testable::TestableModule;
/// use extrinsic_frame::Router;
/// use extrinsic_primitives::DispatchOutcome;
///
/// let mut router = Router::default();
/// router.register(TESTABLE_MODULE_INDEX, TestableModule::new()).unwrap();
///
/// let mut bytes: &[u8] = &[TESTABLE_MODULE_INDEX, FUNCTION_TEST_INDEX];
/// let call = router.decode_call(&mut bytes).unwrap();
/// assert_eq!(router.dispatch(call.as_ref()), DispatchOutcome::Success);
/// ```
pub struct Router {
    config: RouterConfig,
    modules: BTreeMap<u8, ModuleBox>,
}

impl Router {
    /// Create an empty router with the given configuration.
    pub fn new(config: RouterConfig) -> Self {
        Self {
            config,
            modules: BTreeMap::new(),
        }
    }

    /// Register `module` under `index`.
    ///
    /// Every call in the module's table must report `index` as its
    /// `module_index()`, so that decoding by the wire's module byte and
    /// dispatching by the call's own index reach the same module.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// [`Error::DuplicateModule`] if `index` is taken,
    /// [`Error::ModuleIndexMismatch`] if a call reports another module index,
    /// [`Error::TooManyModules`] if the configured maximum is reached.
    pub fn register(&mut self, index: u8, module: impl Module + 'static) -> Result<()> {
        if self.modules.contains_key(&index) {
            return Err(Error::DuplicateModule { index });
        }
        if let Some((_, call)) = module
            .functions()
            .iter()
            .find(|(_, call)| call.module_index() != index)
        {
            return Err(Error::ModuleIndexMismatch {
                index,
                module_index: call.module_index(),
            });
        }
        if self.modules.len() >= self.config.max_modules {
            return Err(Error::TooManyModules {
                max_modules: self.config.max_modules,
            });
        }

        let functions: Vec<u8> = module.functions().indices().collect();
        debug!(module = index, ?functions, "module registered");
        self.modules.insert(index, Box::new(module));
        Ok(())
    }

    /// The module registered at `index`, if any.
    pub fn module(&self, index: u8) -> Option<&dyn Module> {
        self.modules.get(&index).map(|module| &**module as &dyn Module)
    }

    /// Registered module indices in ascending order.
    pub fn module_indices(&self) -> impl Iterator<Item = u8> + '_ {
        self.modules.keys().copied()
    }

    /// The callable registered at `(module, function)`.
    pub fn resolve(&self, module: u8, function: u8) -> Result<&dyn Call> {
        let functions = self
            .module(module)
            .ok_or(Error::UnknownModule { module })?
            .functions();
        functions
            .get(function)
            .ok_or(Error::UnknownFunction { module, function })
    }

    /// Decode `module_index:u8 function_index:u8 args` into a call.
    pub fn decode_call<B: Buf + ?Sized>(&self, src: &mut B) -> Result<Box<dyn Call>> {
        let module = u8::decode(src)?;
        let function = u8::decode(src)?;
        let template = self.resolve(module, function)?;
        let mut src = src;
        let call = template.decode_args(&mut src)?;
        trace!(module, function, "call decoded");
        Ok(call)
    }

    /// The module owning `call`, if it is registered and knows the function.
    fn owner(&self, call: &dyn Call) -> Option<&dyn Module> {
        self.resolve(call.module_index(), call.function_index())
            .ok()
            .and_then(|_| self.module(call.module_index()))
    }

    /// Ask the owning module whether an unsigned `call` may be accepted.
    ///
    /// A call no registered module owns is `Unknown(CannotLookup)`.
    pub fn validate_unsigned(
        &self,
        source: TransactionSource,
        call: &dyn Call,
    ) -> TransactionValidity {
        let Some(module) = self.owner(call) else {
            return Err(UnknownTransaction::CannotLookup.into());
        };
        let verdict = module.validate_unsigned(source, call);
        if let Err(err) = &verdict {
            debug!(
                module = call.module_index(),
                function = call.function_index(),
                ?source,
                %err,
                "unsigned call rejected"
            );
        }
        verdict
    }

    /// Run the owning module's pre-dispatch check on `call`.
    pub fn pre_dispatch(
        &self,
        call: &dyn Call,
    ) -> std::result::Result<Empty, TransactionValidityError> {
        match self.owner(call) {
            Some(module) => module.pre_dispatch(call),
            None => Err(UnknownTransaction::CannotLookup.into()),
        }
    }

    /// Execute `call` and wrap its result as a [`DispatchOutcome`].
    ///
    /// A call no registered module owns fails with `CannotLookup`.
    pub fn dispatch(&self, call: &dyn Call) -> DispatchOutcome {
        if self.owner(call).is_none() {
            warn!(
                module = call.module_index(),
                function = call.function_index(),
                "dispatch to unregistered call"
            );
            return DispatchOutcome::failure(DispatchError::CannotLookup);
        }
        let outcome = DispatchOutcome::from(call.dispatch());
        trace!(
            module = call.module_index(),
            function = call.function_index(),
            success = outcome.is_success(),
            "call dispatched"
        );
        outcome
    }

    /// Validate, pre-dispatch and dispatch an unsigned `call`.
    ///
    /// A rejection at either check stops before execution.
    pub fn apply_unsigned(
        &self,
        source: TransactionSource,
        call: &dyn Call,
    ) -> std::result::Result<DispatchOutcome, TransactionValidityError> {
        self.validate_unsigned(source, call)?;
        self.pre_dispatch(call)?;
        Ok(self.dispatch(call))
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(RouterConfig::default())
    }
}
