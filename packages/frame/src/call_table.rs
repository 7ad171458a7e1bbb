//! CallTable: the immutable function-index routing table of one module.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;

use extrinsic_primitives::Call;
use tracing::debug;

use crate::{Error, Result};

/// Maps a module's function indices to its callables.
///
/// A table is built once, from the module's static call list, and cannot be
/// changed afterwards: there is no insertion or removal API. Function indices
/// are unique within a table and the table is never empty.
///
/// # Example
///
/// ```rust
/// use extrinsic_frame::testable::TestCall;
/// use extrinsic_frame::{constants::FUNCTION_TEST_INDEX, CallTable};
/// use extrinsic_primitives::Call;
///
/// let table = CallTable::from_calls([Box::new(TestCall::new()) as Box<dyn Call>]);
///
/// assert!(table.get(FUNCTION_TEST_INDEX).is_some());
/// assert!(table.get(0).is_none());
/// ```
pub struct CallTable {
    calls: BTreeMap<u8, Box<dyn Call>>,
}

impl CallTable {
    /// Build a table keyed by each call's own function index.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTable`] if no calls are given,
    /// [`Error::DuplicateFunctionIndex`] if two calls share an index.
    pub fn try_from_calls<I>(calls: I) -> Result<Self>
    where
        I: IntoIterator<Item = Box<dyn Call>>,
    {
        Self::try_from_pairs(
            calls
                .into_iter()
                .map(|call| (call.function_index(), call)),
        )
    }

    /// Build a table from explicit `(index, call)` pairs.
    ///
    /// # Errors
    ///
    /// As [`CallTable::try_from_calls`], plus [`Error::IndexMismatch`] if a
    /// pair's index differs from the call's own `function_index()`.
    pub fn try_from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u8, Box<dyn Call>)>,
    {
        let mut calls = BTreeMap::new();
        for (index, call) in pairs {
            let function_index = call.function_index();
            if function_index != index {
                return Err(Error::IndexMismatch {
                    index,
                    function_index,
                });
            }
            match calls.entry(index) {
                Entry::Occupied(_) => return Err(Error::DuplicateFunctionIndex { index }),
                Entry::Vacant(slot) => {
                    slot.insert(call);
                }
            }
        }

        if calls.is_empty() {
            return Err(Error::EmptyTable);
        }

        debug!(functions = calls.len(), "call table built");
        Ok(Self { calls })
    }

    /// Build a table from a module's static call list.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty or two calls share a function index.
    /// Both mean the module's own configuration is wrong, so there is
    /// nothing a caller could recover.
    pub fn from_calls<I>(calls: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn Call>>,
    {
        match Self::try_from_calls(calls) {
            Ok(table) => table,
            Err(err) => panic!("invalid module call table: {}", err),
        }
    }

    /// Build a table from explicit `(index, call)` pairs.
    ///
    /// # Panics
    ///
    /// On the same conditions as [`CallTable::try_from_pairs`] errors.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (u8, Box<dyn Call>)>,
    {
        match Self::try_from_pairs(pairs) {
            Ok(table) => table,
            Err(err) => panic!("invalid module call table: {}", err),
        }
    }

    /// The callable registered at `index`, if any.
    pub fn get(&self, index: u8) -> Option<&dyn Call> {
        self.calls.get(&index).map(|call| &**call)
    }

    pub fn contains(&self, index: u8) -> bool {
        self.calls.contains_key(&index)
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    /// Always false for a built table; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Registered function indices in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = u8> + '_ {
        self.calls.keys().copied()
    }

    /// `(index, call)` entries in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &dyn Call)> + '_ {
        self.calls
            .iter()
            .map(|(index, call)| (*index, &**call as &dyn Call))
    }
}

impl fmt::Debug for CallTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.calls.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use extrinsic_codec::{Buf, BufMut};
    use extrinsic_primitives::DispatchResult;

    #[derive(Debug)]
    struct Noop {
        function: u8,
    }

    impl Call for Noop {
        fn module_index(&self) -> u8 {
            0
        }

        fn function_index(&self) -> u8 {
            self.function
        }

        fn encode_args(&self, _dst: &mut dyn BufMut) {}

        fn decode_args(&self, _src: &mut dyn Buf) -> extrinsic_codec::Result<Box<dyn Call>> {
            Ok(Box::new(Noop {
                function: self.function,
            }))
        }

        fn dispatch(&self) -> DispatchResult {
            Ok(())
        }
    }

    fn noop(function: u8) -> Box<dyn Call> {
        Box::new(Noop { function })
    }

    #[test]
    fn table_holds_exactly_the_registered_calls() {
        let table = CallTable::from_calls([noop(2), noop(0), noop(7)]);
        assert_eq!(table.len(), 3);
        assert!(!table.is_empty());
        assert_eq!(table.indices().collect::<Vec<_>>(), vec![0, 2, 7]);
        for (index, call) in table.iter() {
            assert_eq!(call.function_index(), index);
        }
    }

    #[test]
    fn unregistered_index_is_absent() {
        let table = CallTable::from_calls([noop(1)]);
        assert!(table.get(0).is_none());
        assert!(!table.contains(2));
        assert_eq!(table.get(1).map(|call| call.function_index()), Some(1));
    }

    #[test]
    fn duplicate_index_is_rejected() {
        let result = CallTable::try_from_calls([noop(4), noop(4)]);
        assert_eq!(
            result.err(),
            Some(Error::DuplicateFunctionIndex { index: 4 })
        );
    }

    #[test]
    fn empty_list_is_rejected() {
        let result = CallTable::try_from_calls(Vec::new());
        assert_eq!(result.err(), Some(Error::EmptyTable));
    }

    #[test]
    fn pair_index_must_match_call() {
        let result = CallTable::try_from_pairs([(3, noop(5))]);
        assert_eq!(
            result.err(),
            Some(Error::IndexMismatch {
                index: 3,
                function_index: 5
            })
        );
    }

    #[test]
    fn pairs_build_the_same_table() {
        let table = CallTable::from_pairs([(0, noop(0)), (9, noop(9))]);
        assert_eq!(table.indices().collect::<Vec<_>>(), vec![0, 9]);
    }

    #[test]
    #[should_panic(expected = "duplicate function index 1")]
    fn from_calls_panics_on_duplicate() {
        let _ = CallTable::from_calls([noop(1), noop(1)]);
    }

    #[test]
    #[should_panic(expected = "call table has no functions")]
    fn from_calls_panics_on_empty() {
        let _ = CallTable::from_calls(Vec::new());
    }

    #[test]
    fn debug_lists_entries() {
        let table = CallTable::from_calls([noop(3)]);
        assert!(format!("{:?}", table).contains("Noop"));
    }
}
