//! Composable predicates for pipeline filters
//!
//! Filters in a pipeline are ordinary values implementing [`Predicate`]. Simple
//! predicates combine with `and`, `or` and `not` into the rule a pipeline step
//! needs, and any `Fn(&T) -> bool` closure is a predicate too.
//!
//! # Example
//!
//! ```rust
//! use gently::predicate::*;
//!
//! let keep = starts_with("A").not().and(not_blank());
//! assert!(keep.check("Banana"));
//! assert!(!keep.check("Apple"));
//! assert!(!keep.check("   "));
//!
//! assert!(odd().check(&7));
//! assert!(odd().check(&-3));
//! assert!(!odd().check(&10));
//! ```

mod combinators;
mod number;
mod string;

pub use combinators::{And, Not, Or, Predicate, PredicateExt};

pub use number::{even, odd, Even, Odd, Parity};

pub use string::{not_blank, starts_with, NotBlank, StartsWith};
