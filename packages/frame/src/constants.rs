//! Static module configuration: the indices modules are registered under.

/// Module index of [`TestableModule`](crate::testable::TestableModule).
pub const TESTABLE_MODULE_INDEX: u8 = 255;

/// Function index of [`TestCall`](crate::testable::TestCall).
pub const FUNCTION_TEST_INDEX: u8 = 255;
