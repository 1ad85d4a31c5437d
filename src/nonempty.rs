//! Non-empty vector type for total aggregations
//!
//! Aggregations like `min`, `max` and `mean` have no answer for an empty
//! collection. `NonEmptyVec<T>` moves that check to construction time: once a
//! value exists, those operations always succeed and return plain values
//! instead of `Option`.
//!
//! # Examples
//!
//! ```
//! use gently::NonEmptyVec;
//!
//! let nev = NonEmptyVec::new(4, vec![8, 15, 16, 23, 42]);
//! assert_eq!(nev.len(), 6);
//! assert_eq!(nev.max(), &42);
//! assert_eq!(nev.mean(), 18.0);
//!
//! assert!(NonEmptyVec::from_vec(Vec::<i32>::new()).is_none());
//! ```

/// A vector guaranteed to contain at least one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyVec<T> {
    head: T,
    tail: Vec<T>,
}

impl<T> NonEmptyVec<T> {
    /// Create a new non-empty vector with a head element and tail.
    pub fn new(head: T, tail: Vec<T>) -> Self {
        Self { head, tail }
    }

    /// Create a non-empty vector from a single element.
    pub fn singleton(value: T) -> Self {
        Self::new(value, Vec::new())
    }

    /// Try to create a non-empty vector from a `Vec`.
    ///
    /// Returns `None` if the vector is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use gently::NonEmptyVec;
    ///
    /// let nev = NonEmptyVec::from_vec(vec![1, 2, 3]).unwrap();
    /// assert_eq!(nev.head(), &1);
    /// ```
    pub fn from_vec(mut vec: Vec<T>) -> Option<Self> {
        if vec.is_empty() {
            None
        } else {
            let head = vec.remove(0);
            Some(Self::new(head, vec))
        }
    }

    /// Get the first element (always succeeds).
    pub fn head(&self) -> &T {
        &self.head
    }

    /// Get all elements except the first.
    pub fn tail(&self) -> &[T] {
        &self.tail
    }

    /// Get the number of elements.
    ///
    /// Always >= 1.
    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Always returns `false`; present to satisfy clippy's
    /// `len_without_is_empty` lint.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate over all elements, head first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }

    /// Convert into a standard `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        let mut vec = Vec::with_capacity(self.len());
        vec.push(self.head);
        vec.extend(self.tail);
        vec
    }
}

impl<T: Ord> NonEmptyVec<T> {
    /// The largest element. Ties resolve to the last occurrence.
    pub fn max(&self) -> &T {
        self.tail.iter().fold(&self.head, |acc, x| acc.max(x))
    }

    /// The smallest element. Ties resolve to the first occurrence.
    pub fn min(&self) -> &T {
        self.tail.iter().fold(&self.head, |acc, x| acc.min(x))
    }
}

impl<T: Copy + Into<f64>> NonEmptyVec<T> {
    /// Arithmetic mean of all elements as `f64`.
    ///
    /// # Example
    ///
    /// ```
    /// use gently::NonEmptyVec;
    ///
    /// let nev = NonEmptyVec::new(1, vec![2]);
    /// assert_eq!(nev.mean(), 1.5);
    /// ```
    pub fn mean(&self) -> f64 {
        let sum: f64 = self.iter().map(|&x| x.into()).sum();
        sum / self.len() as f64
    }
}

impl<T> IntoIterator for NonEmptyVec<T> {
    type Item = T;
    type IntoIter = std::iter::Chain<std::iter::Once<T>, std::vec::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.head).chain(self.tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singleton() {
        let nev = NonEmptyVec::singleton(42);
        assert_eq!(nev.len(), 1);
        assert_eq!(nev.head(), &42);
        assert!(nev.tail().is_empty());
        assert!(!nev.is_empty());
    }

    #[test]
    fn test_from_vec() {
        let nev = NonEmptyVec::from_vec(vec![1, 2, 3]).unwrap();
        assert_eq!(nev.head(), &1);
        assert_eq!(nev.tail(), &[2, 3]);

        assert_eq!(NonEmptyVec::<i32>::from_vec(vec![]), None);
    }

    #[test]
    fn test_min_max() {
        let nev = NonEmptyVec::new(500, vec![3, 999, 0, 17]);
        assert_eq!(nev.min(), &0);
        assert_eq!(nev.max(), &999);

        let single = NonEmptyVec::singleton(7);
        assert_eq!(single.min(), &7);
        assert_eq!(single.max(), &7);
    }

    #[test]
    fn test_mean_all_zero() {
        let nev = NonEmptyVec::new(0, vec![0; 999]);
        assert_eq!(nev.mean(), 0.0);
    }

    #[test]
    fn test_mean_mixed_sign() {
        let nev = NonEmptyVec::new(-10i32, vec![10, 3]);
        assert_eq!(nev.mean(), 1.0);
    }

    #[test]
    fn test_iter_order() {
        let nev = NonEmptyVec::new("a", vec!["b", "c"]);
        let items: Vec<_> = nev.iter().copied().collect();
        assert_eq!(items, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_into_vec_and_into_iter_agree() {
        let nev = NonEmptyVec::new(1, vec![2, 3]);
        let from_iter: Vec<_> = nev.clone().into_iter().collect();
        assert_eq!(from_iter, nev.into_vec());
    }
}
