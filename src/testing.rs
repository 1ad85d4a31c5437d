//! Testing utilities for pipeline results
//!
//! Assertion macros for the [`PipelineError`](crate::PipelineError) kinds, and
//! proptest strategies for collections with null entries behind the
//! `proptest` feature.
//!
//! # Examples
//!
//! ```rust
//! use gently::{assert_empty_collection, assert_missing_collection, assert_operation_failed};
//! use gently::Datasets;
//!
//! let datasets = Datasets::seeded(1);
//!
//! assert_missing_collection!(datasets.clone().without_fruits().sorted_fruits(), "fruits");
//! assert_empty_collection!(datasets.clone().with_integers(vec![]).mean());
//! assert_operation_failed!(datasets.with_integer_entries(vec![None]).top_ten());
//! ```

/// Assert that a result failed with a missing collection.
///
/// With a second argument, also checks the collection name.
#[macro_export]
macro_rules! assert_missing_collection {
    ($result:expr) => {
        match $result {
            Err(err) if err.is_missing_collection() => {}
            Err(err) => panic!("Expected MissingCollection, got error: {:?}", err),
            Ok(v) => panic!("Expected MissingCollection, got Ok: {:?}", v),
        }
    };
    ($result:expr, $name:expr) => {
        match $result {
            Err($crate::PipelineError::MissingCollection { name }) => {
                assert_eq!(name, $name);
            }
            other => panic!("Expected MissingCollection for {:?}, got {:?}", $name, other),
        }
    };
}

/// Assert that a result failed with an empty collection.
#[macro_export]
macro_rules! assert_empty_collection {
    ($result:expr) => {
        match $result {
            Err(err) if err.is_empty_collection() => {}
            Err(err) => panic!("Expected EmptyCollection, got error: {:?}", err),
            Ok(v) => panic!("Expected EmptyCollection, got Ok: {:?}", v),
        }
    };
}

/// Assert that a result failed with an operation failure.
///
/// With a second argument, also checks that the error message contains it.
#[macro_export]
macro_rules! assert_operation_failed {
    ($result:expr) => {
        match $result {
            Err(err) if err.is_operation_failed() => {}
            Err(err) => panic!("Expected OperationFailed, got error: {:?}", err),
            Ok(v) => panic!("Expected OperationFailed, got Ok: {:?}", v),
        }
    };
    ($result:expr, $needle:expr) => {
        match $result {
            Err(err) if err.is_operation_failed() => {
                let message = err.to_string();
                assert!(
                    message.contains($needle),
                    "Expected OperationFailed containing {:?}, got {:?}",
                    $needle,
                    message
                );
            }
            other => panic!("Expected OperationFailed, got {:?}", other),
        }
    };
}

/// Proptest strategies for collections with null entries.
#[cfg(feature = "proptest")]
pub mod strategies {
    use crate::dataset::{DEFAULT_MAX, DEFAULT_MIN};
    use proptest::prelude::*;

    /// Up to `max_len` integers in the default draw range, about one in ten null.
    pub fn integer_entries(max_len: usize) -> impl Strategy<Value = Vec<Option<i32>>> {
        prop::collection::vec(
            prop::option::weighted(0.9, DEFAULT_MIN..=DEFAULT_MAX),
            0..=max_len,
        )
    }

    /// Up to `max_len` short words, some blank, about one in ten null.
    pub fn word_entries(max_len: usize) -> impl Strategy<Value = Vec<Option<String>>> {
        prop::collection::vec(prop::option::weighted(0.9, "[A-Za-z ]{0,12}"), 0..=max_len)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Datasets, PipelineError};

    fn missing() -> Result<Vec<String>, PipelineError> {
        Err(PipelineError::missing("fruits"))
    }

    #[test]
    fn assert_missing_collection_macro() {
        assert_missing_collection!(missing());
        assert_missing_collection!(missing(), "fruits");
    }

    #[test]
    fn assert_empty_collection_macro() {
        assert_empty_collection!(Err::<(), _>(PipelineError::empty("veggies")));
    }

    #[test]
    fn assert_operation_failed_macro() {
        let result = Datasets::seeded(0).with_fruits(Vec::<String>::new()).sorted_fruits_excluding_a();
        assert_operation_failed!(result.clone());
        assert_operation_failed!(result, "cannot be empty");
    }

    #[test]
    #[should_panic(expected = "Expected MissingCollection, got Ok")]
    fn assert_missing_collection_panics_on_ok() {
        assert_missing_collection!(Ok::<_, PipelineError>(1));
    }

    #[test]
    #[should_panic(expected = "Expected EmptyCollection, got error")]
    fn assert_empty_collection_panics_on_other_error() {
        assert_empty_collection!(missing());
    }

    #[test]
    #[should_panic]
    fn assert_missing_collection_checks_name() {
        assert_missing_collection!(missing(), "veggies");
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::super::strategies::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn integer_entries_respect_bounds(entries in integer_entries(50)) {
                prop_assert!(entries.len() <= 50);
                prop_assert!(entries.iter().flatten().all(|v| (0..=1000).contains(v)));
            }

            #[test]
            fn word_entries_are_short(entries in word_entries(20)) {
                prop_assert!(entries.len() <= 20);
                prop_assert!(entries.iter().flatten().all(|w| w.chars().count() <= 12));
            }
        }
    }
}
