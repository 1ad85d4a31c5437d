//! Generic pipeline steps
//!
//! The building blocks behind every [`Datasets`](crate::Datasets) operation.
//! Collections are passed as `Option<&[Option<T>]>`: the outer `None` is an
//! absent collection, an inner `None` is a null entry.
//!
//! Failures follow one policy, applied by [`guarded`]: a missing collection is
//! the caller's mistake and propagates untouched, an existing
//! [`PipelineError::OperationFailed`] propagates untouched, and anything else
//! raised inside a chain is wrapped into an `OperationFailed` that names the
//! operation.
//!
//! # Example
//!
//! ```
//! use gently::pipeline::sorted_with_filter;
//! use gently::predicate::*;
//!
//! let words = [Some("Avocado".to_string()), None, Some("Lime".to_string())];
//! let kept = sorted_with_filter(Some(&words[..]), "words", starts_with("A").not(), Ord::cmp)
//!     .unwrap();
//!
//! assert_eq!(kept, vec!["Lime".to_string()]);
//! ```

use crate::error::PipelineError;
use crate::nonempty::NonEmptyVec;
use crate::predicate::Predicate;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::hash::Hash;

/// Fail with [`PipelineError::MissingCollection`] if the collection is absent.
pub fn require<'a, T>(
    collection: Option<&'a [Option<T>]>,
    name: &'static str,
) -> Result<&'a [Option<T>], PipelineError> {
    collection.ok_or_else(|| PipelineError::missing(name))
}

/// Require a present, non-empty collection.
///
/// # Example
///
/// ```
/// use gently::pipeline::validate_collection;
///
/// let empty: [Option<i32>; 0] = [];
/// let err = validate_collection(Some(&empty[..]), "numbers").unwrap_err();
/// assert!(err.is_empty_collection());
///
/// let err = validate_collection::<i32>(None, "numbers").unwrap_err();
/// assert!(err.is_missing_collection());
/// ```
pub fn validate_collection<'a, T>(
    collection: Option<&'a [Option<T>]>,
    name: &'static str,
) -> Result<&'a [Option<T>], PipelineError> {
    let items = require(collection, name)?;
    if items.is_empty() {
        return Err(PipelineError::empty(name));
    }
    Ok(items)
}

/// Iterate over the non-null entries of a collection.
pub fn present<T>(items: &[Option<T>]) -> impl Iterator<Item = &T> {
    items.iter().flatten()
}

/// Collect every entry, failing on the first null.
///
/// For steps that have no sensible way to order or compare a null.
pub fn all_present<T: Clone>(
    items: &[Option<T>],
    name: &'static str,
) -> Result<Vec<T>, PipelineError> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.clone()
                .ok_or_else(|| PipelineError::null_element(name, index))
        })
        .collect()
}

/// Filter out nulls and rejected elements, then stable-sort by `compare`.
///
/// The collection must be present and non-empty. A missing collection
/// propagates as is; an empty one is reported as an operation failure caused
/// by [`PipelineError::EmptyCollection`].
///
/// The predicate may check a borrowed form of the element, so `str`
/// predicates apply directly to `String` elements.
pub fn sorted_with_filter<T, Q, P, C>(
    collection: Option<&[Option<T>]>,
    name: &'static str,
    predicate: P,
    compare: C,
) -> Result<Vec<T>, PipelineError>
where
    T: Clone + Borrow<Q>,
    Q: ?Sized,
    P: Predicate<Q>,
    C: FnMut(&T, &T) -> Ordering,
{
    guarded("sort and filter collection", || {
        let items = validate_collection(collection, name)?;
        let mut kept: Vec<T> = present(items)
            .filter(|item| predicate.check(<T as Borrow<Q>>::borrow(item)))
            .cloned()
            .collect();
        kept.sort_by(compare);
        Ok(kept)
    })
}

/// Deduplicate by value, keeping the first occurrence of each.
///
/// # Example
///
/// ```
/// use gently::pipeline::distinct;
///
/// let unique: Vec<i32> = distinct(vec![3, 1, 3, 2, 1]).collect();
/// assert_eq!(unique, vec![3, 1, 2]);
/// ```
pub fn distinct<I>(items: I) -> impl Iterator<Item = I::Item>
where
    I: IntoIterator,
    I::Item: Eq + Hash + Clone,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(move |item| seen.insert(item.clone()))
}

/// Sort descending and keep at most `n` elements.
///
/// # Example
///
/// ```
/// use gently::pipeline::top_n;
///
/// assert_eq!(top_n(vec![4, 9, 1, 9], 3), vec![9, 9, 4]);
/// assert_eq!(top_n(vec![4], 3), vec![4]);
/// ```
pub fn top_n<T: Ord>(mut items: Vec<T>, n: usize) -> Vec<T> {
    items.sort_by(|a, b| b.cmp(a));
    items.truncate(n);
    items
}

/// Mean of the non-null entries, or `None` when there are none.
pub fn safe_average<T: Copy + Into<f64>>(items: &[Option<T>]) -> Option<f64> {
    let values: Vec<T> = present(items).copied().collect();
    NonEmptyVec::from_vec(values).map(|values| values.mean())
}

/// Run a pipeline step and apply the wrapping policy to its error.
///
/// # Example
///
/// ```
/// use gently::pipeline::guarded;
/// use gently::PipelineError;
///
/// let err = guarded::<(), _>("rank values", || Err(PipelineError::empty("values")))
///     .unwrap_err();
/// assert_eq!(err.to_string(), "failed to rank values: values collection cannot be empty");
///
/// let err = guarded::<(), _>("rank values", || Err(PipelineError::missing("values")))
///     .unwrap_err();
/// assert!(err.is_missing_collection());
/// ```
pub fn guarded<T, F>(operation: &'static str, step: F) -> Result<T, PipelineError>
where
    F: FnOnce() -> Result<T, PipelineError>,
{
    step().map_err(|err| match err {
        PipelineError::MissingCollection { .. } | PipelineError::OperationFailed { .. } => err,
        other => {
            #[cfg(feature = "tracing")]
            tracing::warn!(operation, error = %other, "pipeline step failed");
            PipelineError::failed_with(format!("failed to {}", operation), other)
        }
    })
}

/// Comparator that reverses the natural order.
pub fn reverse_order<T: Ord>(a: &T, b: &T) -> Ordering {
    b.cmp(a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{odd, starts_with, PredicateExt};

    fn strings(items: &[Option<&str>]) -> Vec<Option<String>> {
        items.iter().map(|s| s.map(String::from)).collect()
    }

    #[test]
    fn test_require() {
        let items = [Some(1)];
        assert!(require(Some(&items[..]), "xs").is_ok());
        assert_eq!(
            require::<i32>(None, "xs").unwrap_err(),
            PipelineError::missing("xs")
        );
    }

    #[test]
    fn test_validate_collection_accepts_only_nulls() {
        let items: [Option<i32>; 2] = [None, None];
        assert!(validate_collection(Some(&items[..]), "xs").is_ok());
    }

    #[test]
    fn test_present_skips_nulls() {
        let items = [Some(1), None, Some(3)];
        let values: Vec<_> = present(&items).copied().collect();
        assert_eq!(values, vec![1, 3]);
    }

    #[test]
    fn test_all_present_reports_first_null() {
        let items = [Some(1), None, Some(3), None];
        assert_eq!(
            all_present(&items, "xs").unwrap_err(),
            PipelineError::null_element("xs", 1)
        );
        assert_eq!(all_present(&[Some(2), Some(1)], "xs").unwrap(), vec![2, 1]);
    }

    #[test]
    fn test_sorted_with_filter_strings() {
        let items = strings(&[Some("Pear"), Some("Apple"), None, Some("Banana")]);
        let result =
            sorted_with_filter(Some(&items[..]), "fruits", starts_with("A").not(), Ord::cmp)
                .unwrap();
        assert_eq!(result, vec!["Banana".to_string(), "Pear".to_string()]);
    }

    #[test]
    fn test_sorted_with_filter_custom_comparator() {
        let items = [Some(3i32), Some(8), Some(5), Some(2)];
        let result =
            sorted_with_filter(Some(&items[..]), "xs", odd::<i32>(), reverse_order).unwrap();
        assert_eq!(result, vec![5, 3]);
    }

    #[test]
    fn test_sorted_with_filter_stable() {
        let items = strings(&[Some("bb"), Some("a"), Some("cc"), Some("d")]);
        let result = sorted_with_filter(
            Some(&items[..]),
            "xs",
            |_: &str| true,
            |a: &String, b: &String| a.len().cmp(&b.len()),
        )
        .unwrap();
        assert_eq!(result, vec!["a", "d", "bb", "cc"]);
    }

    #[test]
    fn test_sorted_with_filter_missing_is_not_wrapped() {
        let err = sorted_with_filter::<String, str, _, _>(None, "fruits", starts_with("A"), Ord::cmp)
            .unwrap_err();
        assert_eq!(err, PipelineError::missing("fruits"));
    }

    #[test]
    fn test_sorted_with_filter_empty_is_wrapped() {
        let items: Vec<Option<String>> = Vec::new();
        let err =
            sorted_with_filter(Some(&items[..]), "fruits", starts_with("A"), Ord::cmp).unwrap_err();
        assert!(err.is_operation_failed());
        assert_eq!(err.cause(), Some(&PipelineError::empty("fruits")));
    }

    #[test]
    fn test_distinct_keeps_first() {
        let unique: Vec<_> = distinct(vec!["b", "a", "b", "c", "a"]).collect();
        assert_eq!(unique, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_top_n() {
        assert_eq!(top_n(vec![1, 5, 3, 5, 2], 2), vec![5, 5]);
        assert_eq!(top_n(Vec::<i32>::new(), 10), Vec::<i32>::new());
    }

    #[test]
    fn test_safe_average() {
        assert_eq!(safe_average(&[Some(2), None, Some(4)]), Some(3.0));
        assert_eq!(safe_average::<i32>(&[None, None]), None);
        assert_eq!(safe_average::<i32>(&[]), None);
    }

    #[test]
    fn test_guarded_passes_success_through() {
        assert_eq!(guarded("noop", || Ok::<_, PipelineError>(5)), Ok(5));
    }

    #[test]
    fn test_guarded_does_not_double_wrap() {
        let inner = PipelineError::failed("already failed");
        let err = guarded::<(), _>("outer", || Err(inner.clone())).unwrap_err();
        assert_eq!(err, inner);
    }

    #[cfg(feature = "tracing")]
    #[tracing_test::traced_test]
    #[test]
    fn test_guarded_logs_wrapped_failure() {
        let _ = guarded::<(), _>("rank values", || Err(PipelineError::empty("values")));
        assert!(logs_contain("pipeline step failed"));
        assert!(logs_contain("rank values"));
    }

    #[cfg(feature = "tracing")]
    #[tracing_test::traced_test]
    #[test]
    fn test_guarded_does_not_log_missing() {
        let _ = guarded::<(), _>("rank values", || Err(PipelineError::missing("values")));
        assert!(!logs_contain("pipeline step failed"));
    }

    #[test]
    fn test_reverse_order() {
        let mut items = vec!["Corn", "Pea", "Carrot"];
        items.sort_by(reverse_order);
        assert_eq!(items, vec!["Pea", "Corn", "Carrot"]);
    }
}
