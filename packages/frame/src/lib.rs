//! Extrinsic frame: the contract between the runtime and its modules.
//!
//! - [`Module`]: what every runtime module provides: its call table, a
//!   pre-dispatch check, and unsigned-submission validation
//! - [`CallTable`]: a module's immutable function-index -> callable table
//! - [`Router`]: module-index -> module routing for the outer runtime
//! - [`testable`]: a reference module with a single no-op call
//!
//! # Example
//!
//! ```rust
//! use extrinsic_frame::constants::TESTABLE_MODULE_INDEX;
//! use extrinsic_frame::testable::{TestCall, TestableModule};
//! use extrinsic_frame::{Module, Router};
//! use extrinsic_primitives::{Encode, TransactionSource, TransactionValidityError};
//!
//! let module = TestableModule::new();
//! assert_eq!(module.functions().len(), 1);
//!
//! let mut router = Router::default();
//! router.register(TESTABLE_MODULE_INDEX, module).unwrap();
//!
//! // The testable module has no unsigned calls.
//! let verdict = router.validate_unsigned(TransactionSource::External, &TestCall::new());
//! assert_eq!(verdict, Err(TransactionValidityError::no_unsigned_validator()));
//!
//! // Dispatching it directly succeeds, and the outcome encodes as 0x00.
//! let outcome = router.dispatch(&TestCall::new());
//! assert_eq!(&outcome.encode()[..], &[0x00]);
//! ```

mod call_table;
pub mod constants;
mod error;
mod module;
mod router;
pub mod testable;

pub use call_table::CallTable;
pub use error::{Error, Result};
pub use module::{no_unsigned_validator, Module};
pub use router::{ModuleBox, Router, RouterConfig};
