use extrinsic_codec::{Buf, BufMut};
use extrinsic_primitives::{Call, DispatchResult};

use crate::constants::{FUNCTION_TEST_INDEX, TESTABLE_MODULE_INDEX};

/// A call with no arguments whose dispatch always succeeds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TestCall;

impl TestCall {
    pub fn new() -> Self {
        TestCall
    }
}

impl Call for TestCall {
    fn module_index(&self) -> u8 {
        TESTABLE_MODULE_INDEX
    }

    fn function_index(&self) -> u8 {
        FUNCTION_TEST_INDEX
    }

    fn encode_args(&self, _dst: &mut dyn BufMut) {}

    fn decode_args(&self, _src: &mut dyn Buf) -> extrinsic_codec::Result<Box<dyn Call>> {
        Ok(Box::new(TestCall))
    }

    fn dispatch(&self) -> DispatchResult {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use extrinsic_codec::Encode;

    #[test]
    fn encodes_as_bare_indices() {
        let call: &dyn Call = &TestCall::new();
        assert_eq!(
            &call.encode()[..],
            &[TESTABLE_MODULE_INDEX, FUNCTION_TEST_INDEX]
        );
    }

    #[test]
    fn decode_consumes_nothing() {
        let mut src: &[u8] = &[1, 2, 3];
        let call = TestCall.decode_args(&mut src).unwrap();
        assert_eq!(src.len(), 3);
        assert_eq!(call.function_index(), FUNCTION_TEST_INDEX);
    }

    #[test]
    fn dispatch_succeeds() {
        assert_eq!(TestCall.dispatch(), Ok(()));
    }
}
