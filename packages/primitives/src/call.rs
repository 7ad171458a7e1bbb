//! The Call contract: an encodable, executable unit of a module.

use std::fmt;

use extrinsic_codec::{Buf, BufMut, Encode};

use crate::DispatchResult;

/// A callable registered in a module's call table.
///
/// A call is identified by its module index and its function index within
/// that module. The table holds one instance per function; decoding an
/// incoming extrinsic asks that instance for a fresh call carrying the
/// decoded arguments.
///
/// # Object Safety
///
/// This trait is object-safe: tables hold `Box<dyn Call>`.
///
/// # Example
///
/// ```rust
/// use extrinsic_codec::{Buf, BufMut, Decode, Encode};
/// use extrinsic_primitives::{Call, DispatchError, DispatchResult};
///
/// #[derive(Debug)]
/// struct Remark {
///     len: u32,
/// }
///
/// impl Call for Remark {
///     fn module_index(&self) -> u8 {
///         0
///     }
///
///     fn function_index(&self) -> u8 {
///         1
///     }
///
///     fn encode_args(&self, dst: &mut dyn BufMut) {
///         self.len.encode_to(dst);
///     }
///
///     fn decode_args(&self, src: &mut dyn Buf) -> extrinsic_codec::Result<Box<dyn Call>> {
///         Ok(Box::new(Remark { len: u32::decode(src)? }))
///     }
///
///     fn dispatch(&self) -> DispatchResult {
///         if self.len > 1024 {
///             return Err(DispatchError::Exhausted);
///         }
///         Ok(())
///     }
/// }
///
/// let call: Box<dyn Call> = Box::new(Remark { len: 3 });
/// assert_eq!(&call.encode()[..], &[0, 1, 3, 0, 0, 0]);
/// assert!(call.dispatch().is_ok());
/// ```
pub trait Call: fmt::Debug + Send + Sync {
    /// Index of the module owning this call.
    fn module_index(&self) -> u8;

    /// Index of this call within its module.
    fn function_index(&self) -> u8;

    /// Append the encoded arguments (without the two index bytes).
    fn encode_args(&self, dst: &mut dyn BufMut);

    /// Decode arguments for this function into a new call.
    fn decode_args(&self, src: &mut dyn Buf) -> extrinsic_codec::Result<Box<dyn Call>>;

    /// Run the call.
    fn dispatch(&self) -> DispatchResult;

    /// Whether the call is an inherent (block-author supplied) call.
    fn is_inherent(&self) -> bool {
        false
    }
}

/// `module_index:u8 function_index:u8 args`
impl Encode for dyn Call + '_ {
    fn encode_to<B: BufMut + ?Sized>(&self, dst: &mut B) {
        dst.put_u8(self.module_index());
        dst.put_u8(self.function_index());
        let mut dst = dst;
        self.encode_args(&mut dst);
    }

    fn size_hint(&self) -> usize {
        2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DispatchError;
    use extrinsic_codec::Decode;

    #[derive(Debug)]
    struct Transfer {
        amount: u64,
    }

    impl Call for Transfer {
        fn module_index(&self) -> u8 {
            4
        }

        fn function_index(&self) -> u8 {
            0
        }

        fn encode_args(&self, dst: &mut dyn BufMut) {
            self.amount.encode_to(dst);
        }

        fn decode_args(&self, src: &mut dyn Buf) -> extrinsic_codec::Result<Box<dyn Call>> {
            Ok(Box::new(Transfer {
                amount: u64::decode(src)?,
            }))
        }

        fn dispatch(&self) -> DispatchResult {
            if self.amount == 0 {
                return Err(DispatchError::Other);
            }
            Ok(())
        }
    }

    #[test]
    fn dyn_call_encodes_indices_then_args() {
        let call: Box<dyn Call> = Box::new(Transfer { amount: 5 });
        assert_eq!(&call.encode()[..], &[4, 0, 5, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn decode_args_builds_new_call() {
        let template = Transfer { amount: 0 };
        let mut src: &[u8] = &[9, 0, 0, 0, 0, 0, 0, 0];
        let call = template.decode_args(&mut src).unwrap();
        assert!(src.is_empty());
        assert!(call.dispatch().is_ok());
        assert_eq!(template.dispatch(), Err(DispatchError::Other));
    }

    #[test]
    fn decode_args_reports_underflow() {
        let template = Transfer { amount: 0 };
        let mut src: &[u8] = &[1, 2];
        assert!(template.decode_args(&mut src).is_err());
    }

    #[test]
    fn calls_are_not_inherent_by_default() {
        assert!(!Transfer { amount: 1 }.is_inherent());
    }
}
