//! The collection pipeline facade
//!
//! [`Datasets`] holds three read-only collections, a fruit list, a vegetable
//! list and a list of random integers, and answers queries over them. Every
//! query is a short filter/sort/map/limit chain that builds a new sequence;
//! the stored collections never change after construction.
//!
//! # Example
//!
//! ```
//! use gently::Datasets;
//!
//! let datasets = Datasets::seeded(42);
//!
//! assert_eq!(
//!     datasets.joined_sorted_fruits().unwrap(),
//!     "Apple, Banana, Orange, Peach, Pear, Tomato"
//! );
//! assert_eq!(
//!     datasets.reverse_sorted_veggies_uppercase().unwrap(),
//!     vec!["TOMATO", "POTATO", "PEA", "CORN", "CARROT"]
//! );
//!
//! let top = datasets.top_ten_unique_odd().unwrap();
//! assert!(top.len() <= 10);
//! assert!(top.iter().all(|v| v % 2 != 0));
//! ```
//!
//! Collections can be swapped out, including for absent ones:
//!
//! ```
//! use gently::Datasets;
//!
//! let datasets = Datasets::seeded(1).without_veggies();
//! assert!(datasets.reverse_sorted_veggies().unwrap_err().is_missing_collection());
//! ```

use crate::dataset::DatasetConfig;
use crate::error::PipelineError;
use crate::pipeline::{
    all_present, distinct, guarded, present, require, reverse_order, safe_average,
    sorted_with_filter, top_n, validate_collection,
};
use crate::predicate::{not_blank, odd, starts_with, Predicate, PredicateExt};
use std::sync::Arc;

/// Name of the fruit collection in errors.
pub const FRUITS: &str = "fruits";

/// Name of the vegetable collection in errors.
pub const VEGGIES: &str = "veggies";

/// Name of the integer collection in errors.
pub const INTEGERS: &str = "integer values";

/// The fruit list every new [`Datasets`] starts with.
pub const DEFAULT_FRUITS: [&str; 6] = ["Apple", "Orange", "Banana", "Pear", "Peach", "Tomato"];

/// The vegetable list every new [`Datasets`] starts with.
pub const DEFAULT_VEGGIES: [&str; 5] = ["Corn", "Potato", "Carrot", "Pea", "Tomato"];

const TOP: usize = 10;

type Entries<T> = Option<Arc<[Option<T>]>>;

/// Three fixed collections and the pipelines that query them.
///
/// Cloning is cheap: the collections are shared, never copied.
#[derive(Debug, Clone)]
pub struct Datasets {
    fruits: Entries<String>,
    veggies: Entries<String>,
    integers: Entries<i32>,
}

impl Default for Datasets {
    fn default() -> Self {
        Self::new()
    }
}

impl Datasets {
    /// The default fruits and vegetables plus 1000 unseeded integers in `[0, 1000]`.
    pub fn new() -> Self {
        Self::with_sample(DatasetConfig::default().sample())
    }

    /// Like [`Datasets::new`], but the integer draw is reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use gently::Datasets;
    ///
    /// assert_eq!(Datasets::seeded(3).integers(), Datasets::seeded(3).integers());
    /// ```
    pub fn seeded(seed: u64) -> Self {
        Self::with_sample(DatasetConfig::default().with_seed(seed).sample())
    }

    /// The default fruits and vegetables plus integers drawn per `config`.
    pub fn from_config(config: &DatasetConfig) -> Result<Self, PipelineError> {
        Ok(Self::with_sample(config.generate_integers()?))
    }

    fn with_sample(integers: Vec<i32>) -> Self {
        Self {
            fruits: None,
            veggies: None,
            integers: None,
        }
        .with_fruits(DEFAULT_FRUITS)
        .with_veggies(DEFAULT_VEGGIES)
        .with_integers(integers)
    }

    /// Replace the fruit collection.
    pub fn with_fruits<I, S>(self, fruits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_fruit_entries(fruits.into_iter().map(|fruit| Some(fruit.into())))
    }

    /// Replace the fruit collection with entries that may be null.
    pub fn with_fruit_entries<I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = Option<String>>,
    {
        self.fruits = Some(entries.into_iter().collect());
        self
    }

    /// Drop the fruit collection entirely.
    pub fn without_fruits(mut self) -> Self {
        self.fruits = None;
        self
    }

    /// Replace the vegetable collection.
    pub fn with_veggies<I, S>(self, veggies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_veggie_entries(veggies.into_iter().map(|veggie| Some(veggie.into())))
    }

    /// Replace the vegetable collection with entries that may be null.
    pub fn with_veggie_entries<I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = Option<String>>,
    {
        self.veggies = Some(entries.into_iter().collect());
        self
    }

    /// Drop the vegetable collection entirely.
    pub fn without_veggies(mut self) -> Self {
        self.veggies = None;
        self
    }

    /// Replace the integer collection.
    pub fn with_integers<I>(self, integers: I) -> Self
    where
        I: IntoIterator<Item = i32>,
    {
        self.with_integer_entries(integers.into_iter().map(Some))
    }

    /// Replace the integer collection with entries that may be null.
    pub fn with_integer_entries<I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = Option<i32>>,
    {
        self.integers = Some(entries.into_iter().collect());
        self
    }

    /// Drop the integer collection entirely.
    pub fn without_integers(mut self) -> Self {
        self.integers = None;
        self
    }

    /// The fruit collection, `None` if absent.
    pub fn fruits(&self) -> Option<&[Option<String>]> {
        self.fruits.as_deref()
    }

    /// The vegetable collection, `None` if absent.
    pub fn veggies(&self) -> Option<&[Option<String>]> {
        self.veggies.as_deref()
    }

    /// The integer collection, `None` if absent.
    pub fn integers(&self) -> Option<&[Option<i32>]> {
        self.integers.as_deref()
    }

    /// Fruits in ascending order, nulls dropped.
    ///
    /// Unlike the other fruit queries, an empty collection is an error here.
    pub fn sorted_fruits(&self) -> Result<Vec<String>, PipelineError> {
        let fruits = validate_collection(self.fruits(), FRUITS)?;
        let sorted = ascending(fruits);
        record("sorted_fruits", sorted.len());
        Ok(sorted)
    }

    /// Fruits not starting with an upper-case "A", in ascending order.
    pub fn sorted_fruits_excluding_a(&self) -> Result<Vec<String>, PipelineError> {
        self.sorted_fruits_with_filter(starts_with("A").not())
    }

    /// Fruits accepted by `predicate`, in ascending order, nulls dropped.
    ///
    /// An empty collection fails with an operation failure caused by
    /// [`PipelineError::EmptyCollection`].
    ///
    /// # Example
    ///
    /// ```
    /// use gently::Datasets;
    /// use gently::predicate::*;
    ///
    /// let datasets = Datasets::seeded(0);
    /// let pe = datasets.sorted_fruits_with_filter(starts_with("Pe")).unwrap();
    /// assert_eq!(pe, vec!["Peach", "Pear"]);
    /// ```
    pub fn sorted_fruits_with_filter<P>(&self, predicate: P) -> Result<Vec<String>, PipelineError>
    where
        P: Predicate<str>,
    {
        let sorted = sorted_with_filter(self.fruits(), FRUITS, predicate, Ord::cmp)?;
        record("sorted_fruits_with_filter", sorted.len());
        Ok(sorted)
    }

    /// The first two fruits in ascending order, fewer if there are fewer.
    pub fn first_two_sorted_fruits(&self) -> Result<Vec<String>, PipelineError> {
        guarded("get first two sorted fruits", || {
            let fruits = require(self.fruits(), FRUITS)?;
            let mut sorted = ascending(fruits);
            sorted.truncate(2);
            record("first_two_sorted_fruits", sorted.len());
            Ok(sorted)
        })
    }

    /// Fruits in ascending order joined with `", "`; empty string for no fruits.
    pub fn joined_sorted_fruits(&self) -> Result<String, PipelineError> {
        guarded("create comma-separated fruits list", || {
            let fruits = require(self.fruits(), FRUITS)?;
            let joined = ascending(fruits).join(", ");
            record("joined_sorted_fruits", joined.len());
            Ok(joined)
        })
    }

    /// Vegetables in descending order, nulls and blank names dropped.
    pub fn reverse_sorted_veggies(&self) -> Result<Vec<String>, PipelineError> {
        guarded("sort veggies in reverse", || {
            let veggies = require(self.veggies(), VEGGIES)?;
            let sorted = descending_named(veggies);
            record("reverse_sorted_veggies", sorted.len());
            Ok(sorted)
        })
    }

    /// [`reverse_sorted_veggies`](Self::reverse_sorted_veggies), upper-cased.
    ///
    /// Uses the Unicode default case mapping, which does not depend on locale:
    /// `"i"` always becomes `"I"`.
    pub fn reverse_sorted_veggies_uppercase(&self) -> Result<Vec<String>, PipelineError> {
        guarded("sort and uppercase veggies", || {
            let veggies = require(self.veggies(), VEGGIES)?;
            let upper: Vec<String> = descending_named(veggies)
                .iter()
                .map(|veggie| veggie.to_uppercase())
                .collect();
            record("reverse_sorted_veggies_uppercase", upper.len());
            Ok(upper)
        })
    }

    /// The ten largest integers in descending order, duplicates kept.
    pub fn top_ten(&self) -> Result<Vec<i32>, PipelineError> {
        guarded("retrieve top ten values", || {
            let values = self.ranked_integers()?;
            let top: Vec<i32> = values.into_iter().take(TOP).collect();
            record("top_ten", top.len());
            Ok(top)
        })
    }

    /// The ten largest distinct integers in descending order.
    pub fn top_ten_unique(&self) -> Result<Vec<i32>, PipelineError> {
        guarded("retrieve top ten unique values", || {
            let values = self.ranked_integers()?;
            let top: Vec<i32> = distinct(values).take(TOP).collect();
            record("top_ten_unique", top.len());
            Ok(top)
        })
    }

    /// The ten largest distinct odd integers in descending order.
    pub fn top_ten_unique_odd(&self) -> Result<Vec<i32>, PipelineError> {
        guarded("retrieve top ten unique odd values", || {
            let values = self.ranked_integers()?;
            let is_odd = odd::<i32>();
            let top: Vec<i32> = distinct(values)
                .filter(|value| is_odd.check(value))
                .take(TOP)
                .collect();
            record("top_ten_unique_odd", top.len());
            Ok(top)
        })
    }

    /// Arithmetic mean of the non-null integers.
    ///
    /// # Errors
    ///
    /// - [`PipelineError::MissingCollection`] if the integers are absent.
    /// - [`PipelineError::EmptyCollection`] if there are no entries at all.
    /// - [`PipelineError::OperationFailed`] if every entry is null.
    pub fn mean(&self) -> Result<f64, PipelineError> {
        let values = validate_collection(self.integers(), INTEGERS)?;
        let mean = safe_average(values).ok_or_else(|| {
            PipelineError::failed("average calculation failed: no valid values to average")
        })?;
        record("mean", values.len());
        Ok(mean)
    }

    // A null cannot be ranked against numbers.
    fn ranked_integers(&self) -> Result<Vec<i32>, PipelineError> {
        let integers = require(self.integers(), INTEGERS)?;
        let values = all_present(integers, INTEGERS)?;
        Ok(top_n(values, usize::MAX))
    }
}

fn ascending(items: &[Option<String>]) -> Vec<String> {
    let mut sorted: Vec<String> = present(items).cloned().collect();
    sorted.sort();
    sorted
}

fn descending_named(items: &[Option<String>]) -> Vec<String> {
    let keep = not_blank();
    let mut sorted: Vec<String> = present(items)
        .filter(|item| keep.check(item.as_str()))
        .cloned()
        .collect();
    sorted.sort_by(reverse_order);
    sorted
}

#[inline]
fn record(operation: &'static str, len: usize) {
    #[cfg(feature = "tracing")]
    tracing::trace!(operation, len, "pipeline completed");
    #[cfg(not(feature = "tracing"))]
    let _ = (operation, len);
}
