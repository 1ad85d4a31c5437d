//! String predicates
//!
//! String predicates are implemented for `str` only. Pipelines over owned
//! `String` elements check them through `Borrow<str>`, which keeps combined
//! predicates like `starts_with("A").not().and(not_blank())` unambiguous.

use super::combinators::Predicate;

/// Predicate that checks if a string starts with a prefix.
#[derive(Clone, Debug)]
pub struct StartsWith<S>(pub S);

impl<S: AsRef<str> + Send + Sync> Predicate<str> for StartsWith<S> {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.starts_with(self.0.as_ref())
    }
}

/// Create a predicate that checks if string starts with prefix.
///
/// The comparison is case-sensitive.
///
/// # Example
///
/// ```rust
/// use gently::predicate::*;
///
/// assert!(starts_with("A").check("Apple"));
/// assert!(!starts_with("A").check("apple"));
/// assert!(!starts_with("A").check("Banana"));
/// ```
pub fn starts_with<S: AsRef<str> + Send + Sync>(prefix: S) -> StartsWith<S> {
    StartsWith(prefix)
}

/// Predicate that checks if a string has at least one non-whitespace character.
#[derive(Clone, Copy, Default, Debug)]
pub struct NotBlank;

impl Predicate<str> for NotBlank {
    #[inline]
    fn check(&self, value: &str) -> bool {
        !value.trim().is_empty()
    }
}

/// Create a predicate that rejects empty and whitespace-only strings.
///
/// # Example
///
/// ```rust
/// use gently::predicate::*;
///
/// assert!(not_blank().check("Corn"));
/// assert!(not_blank().check("  Pea "));
/// assert!(!not_blank().check(""));
/// assert!(!not_blank().check(" \t\n"));
/// ```
pub fn not_blank() -> NotBlank {
    NotBlank
}
