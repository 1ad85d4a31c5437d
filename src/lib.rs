//! # Gently
//!
//! Small functional collection pipelines: filter, sort, map, limit, distinct
//! and aggregate over a fruit list, a vegetable list and a list of random
//! integers.
//!
//! ## Philosophy
//!
//! Every query is a pure chain over read-only data:
//! - The datasets are fixed when a [`Datasets`] is built and never change
//! - Each query builds a new sequence and returns it
//! - Failures are values ([`PipelineError`]), never panics
//!
//! ## Quick Example
//!
//! ```rust
//! use gently::Datasets;
//!
//! let datasets = Datasets::seeded(2024);
//!
//! assert_eq!(
//!     datasets.sorted_fruits().unwrap(),
//!     vec!["Apple", "Banana", "Orange", "Peach", "Pear", "Tomato"]
//! );
//! assert_eq!(datasets.first_two_sorted_fruits().unwrap(), vec!["Apple", "Banana"]);
//!
//! let mean = datasets.mean().unwrap();
//! assert!((0.0..=1000.0).contains(&mean));
//!
//! // An absent collection is a caller error, never an empty answer
//! let err = datasets.without_fruits().sorted_fruits().unwrap_err();
//! assert!(err.is_missing_collection());
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod dataset;
pub mod datasets;
pub mod error;
pub mod nonempty;
pub mod pipeline;
pub mod predicate;
pub mod testing;

// Re-exports
pub use dataset::DatasetConfig;
pub use datasets::Datasets;
pub use error::PipelineError;
pub use nonempty::NonEmptyVec;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::dataset::DatasetConfig;
    pub use crate::datasets::Datasets;
    pub use crate::error::PipelineError;
    pub use crate::nonempty::NonEmptyVec;
    pub use crate::predicate::{Predicate, PredicateExt};
}
