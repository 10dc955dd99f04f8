//! The cons-list operation suite, defined once over a structural seam.
//!
//! This module provides two traits:
//!
//! - [`ListCore`]: the three structural primitives of a two-variant cons
//!   list — an empty constructor (`nil`), a node constructor (`cons`), and
//!   a variant discriminator (`split`).
//! - [`ListOps`]: the full operation suite (`append`, `at`, `concat`,
//!   `filter`, `first`, `fold_left`, `fold_right`, `join`, `last`,
//!   `length`, `map`, `reverse`, `scan_left`, `scan_right`, `take`,
//!   `take_while`, `zip_with`), written entirely as provided methods over
//!   those three primitives and granted to every `ListCore` implementor by
//!   a blanket impl.
//!
//! # Derivation
//!
//! Because every construction inside the suite goes through `Self::cons`
//! and `Self::nil`, a second list type implementing [`ListCore`] inherits
//! the whole suite with `Self` fixed to itself: inherited operations keep
//! producing values of the derived type rather than falling back to the
//! base list. [`NumList`](crate::numeric::NumList) relies on exactly this
//! to reuse the suite while adding its own `sum` aggregate.
//!
//! # Case analysis
//!
//! Each operation is a total function over the two variants. `split`
//! returns `None` for the empty variant and `Some((head, tail))` for a
//! node, so every operation body is a single exhaustive case split — there
//! is no partial operation and no fallthrough.
//!
//! # Recursion
//!
//! The reference definitions of these operations are structurally
//! recursive, with stack depth proportional to list length. The provided
//! bodies use iterative collect-then-rebuild equivalents that produce
//! identical results without unbounded recursion.

use crate::error::ListError;

/// The structural primitives of a two-variant cons list.
///
/// Implementing this trait for a type declares it to be a cons list: a
/// closed sum of an empty variant and a node variant carrying one element
/// and a tail of the same type. The entire [`ListOps`] suite is derived
/// from these three primitives.
///
/// # Contract
///
/// - `split(&Self::nil())` returns `None`.
/// - `split(&Self::cons(head, tail))` returns `Some` with references to
///   exactly that head and tail.
/// - Chains are finite and acyclic; `cons` never mutates an existing node.
///
/// # Examples
///
/// ```rust
/// use kons::ops::ListCore;
/// use kons::list::List;
///
/// let xs: List<i32> = List::cons(1, List::cons(2, List::nil()));
/// let (head, tail) = xs.split().unwrap();
/// assert_eq!(*head, 1);
/// assert_eq!(tail.split().map(|(h, _)| *h), Some(2));
/// ```
pub trait ListCore: Sized + Clone {
    /// The element type stored in each node.
    type Elem: Clone;

    /// Returns the empty list.
    #[must_use]
    fn nil() -> Self;

    /// Constructs a node holding `head` in front of `tail`.
    #[must_use]
    fn cons(head: Self::Elem, tail: Self) -> Self;

    /// Discriminates the receiver's variant.
    ///
    /// Returns `None` for the empty list and `Some((head, tail))` for a
    /// node. Every operation in [`ListOps`] is a case split over this
    /// result.
    fn split(&self) -> Option<(&Self::Elem, &Self)>;

    /// Builds a list from a sequence of elements, preserving their order.
    ///
    /// Elements are folded right-to-left into nodes so that the final
    /// left-to-right order matches the input order. This is the shared
    /// seam used by every factory in the crate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kons::prelude::*;
    ///
    /// let xs = List::from_elements([1, 2, 3]);
    /// assert_eq!(xs.join(","), "1,2,3");
    /// ```
    #[must_use]
    fn from_elements<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = Self::Elem>,
        I::IntoIter: DoubleEndedIterator,
    {
        let mut result = Self::nil();
        for element in elements.into_iter().rev() {
            result = Self::cons(element, result);
        }
        result
    }

    /// Returns an iterator over references to the elements, front to back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kons::prelude::*;
    ///
    /// let xs = list![1, 2, 3];
    /// let collected: Vec<&i32> = xs.items().collect();
    /// assert_eq!(collected, vec![&1, &2, &3]);
    /// ```
    fn items(&self) -> Items<'_, Self> {
        Items { current: self }
    }
}

/// An iterator over references to the elements of a [`ListCore`] chain.
pub struct Items<'a, L> {
    current: &'a L,
}

impl<'a, L: ListCore> Iterator for Items<'a, L> {
    type Item = &'a L::Elem;

    fn next(&mut self) -> Option<Self::Item> {
        // Copy the reference out so the yielded items borrow the list, not
        // this iterator.
        let current = self.current;
        current.split().map(|(head, tail)| {
            self.current = tail;
            head
        })
    }
}

/// The full cons-list operation suite.
///
/// Every method is provided; implementors supply nothing beyond
/// [`ListCore`]. The blanket impl at the bottom of this module grants the
/// suite to every `ListCore` type, so a derived list type defined
/// elsewhere inherits all seventeen operations without re-declaring any of
/// them, and its inherited operations construct values of the derived type.
///
/// # Examples
///
/// ```rust
/// use kons::prelude::*;
///
/// let xs = list![1, 2, 3];
/// assert_eq!(xs.append(4), list![1, 2, 3, 4]);
/// assert_eq!(xs.reverse(), list![3, 2, 1]);
/// assert_eq!(xs.fold_left(0, |acc, x| acc + x), 6);
/// ```
pub trait ListOps: ListCore {
    /// Returns `true` if the list contains no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.split().is_none()
    }

    /// Returns the number of elements in the list.
    ///
    /// # Complexity
    ///
    /// O(n) — the chain is traversed; no length is cached.
    #[must_use]
    fn length(&self) -> usize {
        self.items().count()
    }

    /// Appends a single element to the end of the list.
    ///
    /// # Complexity
    ///
    /// O(n) — the whole chain is rebuilt to reach the end.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kons::prelude::*;
    ///
    /// assert_eq!(list![1, 2, 3].append(4), list![1, 2, 3, 4]);
    /// assert_eq!(List::nil().append(1), list![1]);
    /// ```
    #[must_use]
    fn append(&self, element: Self::Elem) -> Self {
        let mut elements: Vec<Self::Elem> = self.items().cloned().collect();
        elements.push(element);
        Self::from_elements(elements)
    }

    /// Returns a reference to the element at the given index.
    ///
    /// Negative indices count from the end (`-1` is the last element).
    /// Resolving a negative index requires a length pass first, so the
    /// worst case is two traversals.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfBounds`] when `index` lies outside
    /// `[-length, length - 1]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kons::prelude::*;
    ///
    /// let xs = list![1, 2, 3];
    /// assert_eq!(xs.at(0), Ok(&1));
    /// assert_eq!(xs.at(-1), Ok(&3));
    /// assert!(xs.at(3).is_err());
    /// assert!(xs.at(-4).is_err());
    /// ```
    fn at(&self, index: i64) -> Result<&Self::Elem, ListError> {
        let offset = if let Ok(offset) = usize::try_from(index) {
            offset
        } else {
            // A negative index is recomputed against the length.
            let length = self.length();
            let from_end = usize::try_from(index.unsigned_abs()).unwrap_or(usize::MAX);
            if from_end > length {
                return Err(ListError::IndexOutOfBounds { index, length });
            }
            length - from_end
        };
        self.items()
            .nth(offset)
            .ok_or_else(|| ListError::IndexOutOfBounds {
                index,
                length: self.length(),
            })
    }

    /// Concatenates another list onto the end of this one.
    ///
    /// When the receiver is empty the other list is returned unmodified;
    /// otherwise the receiver's chain is rebuilt in front of it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kons::prelude::*;
    ///
    /// let xs = list![1, 2];
    /// let ys = list![3, 4];
    /// assert_eq!(xs.concat(&ys), list![1, 2, 3, 4]);
    /// assert_eq!(List::nil().concat(&ys), ys);
    /// ```
    #[must_use]
    fn concat(&self, other: &Self) -> Self {
        let elements: Vec<Self::Elem> = self.items().cloned().collect();
        let mut result = other.clone();
        for element in elements.into_iter().rev() {
            result = Self::cons(element, result);
        }
        result
    }

    /// Keeps the elements that satisfy the predicate, preserving order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kons::prelude::*;
    ///
    /// let xs = list![1, 2, 3, 4];
    /// assert_eq!(xs.filter(|x| x % 2 == 0), list![2, 4]);
    /// ```
    #[must_use]
    fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&Self::Elem) -> bool,
    {
        let kept: Vec<Self::Elem> = self
            .items()
            .filter(|element| predicate(element))
            .cloned()
            .collect();
        Self::from_elements(kept)
    }

    /// Returns a reference to the first element.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyCollectionAccess`] on the empty list.
    fn first(&self) -> Result<&Self::Elem, ListError> {
        self.split()
            .map(|(head, _)| head)
            .ok_or(ListError::EmptyCollectionAccess { operation: "first" })
    }

    /// Returns a reference to the last element.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyCollectionAccess`] on the empty list.
    ///
    /// # Complexity
    ///
    /// O(n)
    fn last(&self) -> Result<&Self::Elem, ListError> {
        self.items()
            .last()
            .ok_or(ListError::EmptyCollectionAccess { operation: "last" })
    }

    /// Reduces the list left-to-right with a strict fold.
    ///
    /// # Arguments
    ///
    /// * `unit` - The accumulator value used for the empty list
    /// * `combine` - Combines the accumulator with each element in order
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kons::prelude::*;
    ///
    /// let xs = list![1, 2, 3];
    /// assert_eq!(xs.fold_left(0, |acc, x| acc + x), 6);
    /// assert_eq!(xs.fold_left(String::new(), |acc, x| acc + &x.to_string()), "123");
    /// ```
    fn fold_left<B, F>(&self, unit: B, combine: F) -> B
    where
        F: FnMut(B, &Self::Elem) -> B,
    {
        self.items().fold(unit, combine)
    }

    /// Reduces the list right-to-left.
    ///
    /// Equivalent to the recursive definition
    /// `combine(head, tail.fold_right(unit, combine))`, evaluated without
    /// per-element recursion.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kons::prelude::*;
    ///
    /// let xs = list![1, 2, 3, 4];
    /// // 1 - (2 - (3 - (4 - 0))) = -2
    /// assert_eq!(xs.fold_right(0, |x, acc| x - acc), -2);
    /// ```
    fn fold_right<B, F>(&self, unit: B, mut combine: F) -> B
    where
        F: FnMut(&Self::Elem, B) -> B,
    {
        let elements: Vec<&Self::Elem> = self.items().collect();
        elements
            .into_iter()
            .rev()
            .fold(unit, |accumulator, element| combine(element, accumulator))
    }

    /// Renders the elements as strings joined by a separator.
    ///
    /// The empty list renders as `""`; there is no trailing separator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kons::prelude::*;
    ///
    /// assert_eq!(list![1, 2, 3].join(","), "1,2,3");
    /// assert_eq!(List::<i32>::nil().join(","), "");
    /// ```
    #[must_use]
    fn join(&self, separator: &str) -> String
    where
        Self::Elem: std::fmt::Display,
    {
        self.items()
            .map(|element| element.to_string())
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Applies a function to each element, preserving structure.
    ///
    /// Satisfies the functor laws: `xs.map(|x| x.clone()) == xs`, and
    /// mapping a composition equals mapping in sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kons::prelude::*;
    ///
    /// assert_eq!(list![1, 2, 3].map(|x| x * 2), list![2, 4, 6]);
    /// ```
    #[must_use]
    fn map<F>(&self, function: F) -> Self
    where
        F: FnMut(&Self::Elem) -> Self::Elem,
    {
        let mapped: Vec<Self::Elem> = self.items().map(function).collect();
        Self::from_elements(mapped)
    }

    /// Returns a new list with the elements in reverse order.
    ///
    /// # Complexity
    ///
    /// O(n) — a single accumulator pass, equivalent in result to the
    /// quadratic repeated-append definition.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kons::prelude::*;
    ///
    /// assert_eq!(list![1, 2, 3].reverse(), list![3, 2, 1]);
    /// ```
    #[must_use]
    fn reverse(&self) -> Self {
        self.items().fold(Self::nil(), |accumulator, element| {
            Self::cons(element.clone(), accumulator)
        })
    }

    /// Returns the intermediate accumulator values of a left fold.
    ///
    /// The result starts with the seed and has length `n + 1`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kons::prelude::*;
    ///
    /// let xs = list![1, 2, 3];
    /// assert_eq!(xs.scan_left(0, |acc, x| acc + x).join(","), "0,1,3,6");
    /// assert_eq!(List::nil().scan_left(0, |acc, x| acc + x), list![0]);
    /// ```
    #[must_use]
    fn scan_left<F>(&self, seed: Self::Elem, mut combine: F) -> Self
    where
        F: FnMut(&Self::Elem, &Self::Elem) -> Self::Elem,
    {
        let mut results = Vec::new();
        let mut accumulator = seed;
        results.push(accumulator.clone());
        for element in self.items() {
            accumulator = combine(&accumulator, element);
            results.push(accumulator.clone());
        }
        Self::from_elements(results)
    }

    /// Returns the intermediate accumulator values of a right fold.
    ///
    /// The result ends with the seed and has length `n + 1`; accumulation
    /// runs from the right, so the total lands at the front.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kons::prelude::*;
    ///
    /// let xs = list![1, 2, 3];
    /// assert_eq!(xs.scan_right(0, |acc, x| acc + x).join(","), "6,5,3,0");
    /// assert_eq!(List::nil().scan_right(0, |acc, x| acc + x), list![0]);
    /// ```
    #[must_use]
    fn scan_right<F>(&self, seed: Self::Elem, mut combine: F) -> Self
    where
        F: FnMut(&Self::Elem, &Self::Elem) -> Self::Elem,
    {
        let elements: Vec<&Self::Elem> = self.items().collect();
        let mut accumulator = seed;
        let mut result = Self::cons(accumulator.clone(), Self::nil());
        for element in elements.into_iter().rev() {
            accumulator = combine(&accumulator, element);
            result = Self::cons(accumulator.clone(), result);
        }
        result
    }

    /// Returns the first `count` elements.
    ///
    /// Taking more than the list's length returns the whole list; taking
    /// zero returns the empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kons::prelude::*;
    ///
    /// let xs = list![1, 2, 3];
    /// assert_eq!(xs.take(2), list![1, 2]);
    /// assert_eq!(xs.take(10), xs);
    /// assert_eq!(xs.take(0), List::nil());
    /// ```
    #[must_use]
    fn take(&self, count: usize) -> Self {
        let taken: Vec<Self::Elem> = self.items().take(count).cloned().collect();
        Self::from_elements(taken)
    }

    /// Returns the longest prefix of elements satisfying the predicate.
    ///
    /// Stops at the first failing element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kons::prelude::*;
    ///
    /// let xs = list![1, 2, 3, 4, 1];
    /// assert_eq!(xs.take_while(|x| *x < 3), list![1, 2]);
    /// ```
    #[must_use]
    fn take_while<P>(&self, predicate: P) -> Self
    where
        P: Fn(&Self::Elem) -> bool,
    {
        let taken: Vec<Self::Elem> = self
            .items()
            .take_while(|element| predicate(element))
            .cloned()
            .collect();
        Self::from_elements(taken)
    }

    /// Combines two lists element-wise.
    ///
    /// The result has the length of the shorter list; excess elements of
    /// the longer list are dropped rather than being an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kons::prelude::*;
    ///
    /// let xs = list![1, 2, 3];
    /// let ys = list![4, 5];
    /// assert_eq!(xs.zip_with(&ys, |a, b| a + b), list![5, 7]);
    /// ```
    #[must_use]
    fn zip_with<F>(&self, other: &Self, mut combine: F) -> Self
    where
        F: FnMut(&Self::Elem, &Self::Elem) -> Self::Elem,
    {
        let combined: Vec<Self::Elem> = self
            .items()
            .zip(other.items())
            .map(|(left, right)| combine(left, right))
            .collect();
        Self::from_elements(combined)
    }
}

impl<L: ListCore> ListOps for L {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::List;
    use rstest::rstest;

    #[rstest]
    fn test_split_discriminates_variants() {
        let empty: List<i32> = List::nil();
        assert!(empty.split().is_none());

        let xs = List::cons(1, List::nil());
        let (head, tail) = xs.split().unwrap();
        assert_eq!(*head, 1);
        assert!(tail.split().is_none());
    }

    #[rstest]
    fn test_from_elements_preserves_order() {
        let xs: List<i32> = List::from_elements([1, 2, 3]);
        let collected: Vec<&i32> = xs.items().collect();
        assert_eq!(collected, vec![&1, &2, &3]);
    }

    #[rstest]
    fn test_from_elements_empty() {
        let xs: List<i32> = List::from_elements([]);
        assert!(xs.is_empty());
    }

    #[rstest]
    fn test_items_on_empty_list_yields_nothing() {
        let empty: List<i32> = List::nil();
        assert_eq!(empty.items().count(), 0);
    }
}
