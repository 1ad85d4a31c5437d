//! Core predicate trait and logical combinators

/// A composable predicate over values of type T.
///
/// # Example
///
/// ```rust
/// use gently::predicate::*;
///
/// let short_word = |s: &str| s.len() <= 4;
/// let p = short_word.and(starts_with("P"));
/// assert!(p.check("Pear"));
/// assert!(!p.check("Peach"));
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

// Blanket impl for closures
impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// Extension trait for predicate combinators.
///
/// All methods return concrete types, so a combined filter compiles down to
/// the same code as the hand-written boolean expression.
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// Combine with AND logic.
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Combine with OR logic.
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Invert the predicate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gently::predicate::*;
    ///
    /// let p = starts_with("A").not();
    /// assert!(p.check("Orange"));
    /// assert!(!p.check("Apple"));
    /// ```
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// AND combinator - both predicates must be true.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) && self.1.check(value)
    }
}

/// OR combinator - either predicate must be true.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Or<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) || self.1.check(value)
    }
}

/// NOT combinator - inverts the predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.check(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{not_blank, odd, starts_with};

    #[test]
    fn test_and() {
        let p = starts_with("P").and(not_blank());
        assert!(p.check("Pea"));
        assert!(!p.check("Corn"));
    }

    #[test]
    fn test_or() {
        let p = starts_with("A").or(starts_with("B"));
        assert!(p.check("Apple"));
        assert!(p.check("Banana"));
        assert!(!p.check("Pear"));
    }

    #[test]
    fn test_not() {
        let p = odd().not();
        assert!(p.check(&4));
        assert!(!p.check(&5));
    }

    #[test]
    fn test_closure_as_predicate() {
        let big = |x: &i32| *x > 900;
        let p = big.and(odd());
        assert!(p.check(&999));
        assert!(!p.check(&998));
        assert!(!p.check(&11));
    }

    #[test]
    fn test_complex_chain() {
        let p = starts_with("T").not().and(not_blank()).or(|s: &str| s == "Tomato");
        assert!(p.check("Corn"));
        assert!(p.check("Tomato"));
        assert!(!p.check("Turnip"));
        assert!(!p.check(" "));
    }
}
