//! Number predicates
//!
//! Parity checks for the integer pipelines. Odd means `value % 2 != 0`, so
//! negative odd numbers (where the remainder is `-1`) count as odd.

use super::combinators::Predicate;
use std::marker::PhantomData;
use std::ops::Rem;

/// Integer types the parity predicates apply to.
pub trait Parity: Copy + PartialEq + Rem<Output = Self> + Send + Sync {
    /// The value `0`.
    const ZERO: Self;
    /// The value `2`.
    const TWO: Self;
}

macro_rules! impl_parity {
    ($($t:ty),* $(,)?) => {
        $(
            impl Parity for $t {
                const ZERO: Self = 0;
                const TWO: Self = 2;
            }
        )*
    };
}

impl_parity!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Predicate for odd integers.
#[derive(Debug)]
pub struct Odd<T>(PhantomData<fn() -> T>);

impl<T> Clone for Odd<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Odd<T> {}

impl<T: Parity> Predicate<T> for Odd<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value % T::TWO != T::ZERO
    }
}

/// Create a predicate that checks if an integer is odd.
///
/// # Example
///
/// ```rust
/// use gently::predicate::*;
///
/// assert!(odd().check(&999));
/// assert!(odd().check(&-1));
/// assert!(!odd().check(&0));
/// ```
pub fn odd<T: Parity>() -> Odd<T> {
    Odd(PhantomData)
}

/// Predicate for even integers.
#[derive(Debug)]
pub struct Even<T>(PhantomData<fn() -> T>);

impl<T> Clone for Even<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Even<T> {}

impl<T: Parity> Predicate<T> for Even<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value % T::TWO == T::ZERO
    }
}

/// Create a predicate that checks if an integer is even.
///
/// # Example
///
/// ```rust
/// use gently::predicate::*;
///
/// assert!(even::<u32>().check(&1000));
/// assert!(!even::<u32>().check(&7));
/// ```
pub fn even<T: Parity>() -> Even<T> {
    Even(PhantomData)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::PredicateExt;

    #[test]
    fn test_odd() {
        let p = odd::<i32>();
        assert!(p.check(&1));
        assert!(p.check(&999));
        assert!(!p.check(&2));
        assert!(!p.check(&1000));
    }

    #[test]
    fn test_odd_negative() {
        assert!(odd::<i32>().check(&-3));
        assert!(!odd::<i32>().check(&-4));
    }

    #[test]
    fn test_even() {
        assert!(even::<i64>().check(&0));
        assert!(even::<i64>().check(&-8));
        assert!(!even::<i64>().check(&5));
    }

    #[test]
    fn test_odd_is_not_even() {
        for v in -10i32..=10 {
            assert_eq!(odd().check(&v), odd::<i32>().not().not().check(&v));
            assert_ne!(odd().check(&v), even().check(&v));
        }
    }

    #[test]
    fn test_unsigned() {
        assert!(odd::<u8>().check(&255));
        assert!(even::<usize>().check(&4));
    }
}
