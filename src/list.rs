//! The generic persistent cons list.
//!
//! This module provides [`List`], an immutable singly-linked list declared
//! as a closed two-variant sum type. `Nil` is the terminal node of every
//! chain; `Cons` owns one element and its tail. Tails are held behind `Rc`,
//! so chains that end up referenced from several lists are shared read-only
//! rather than copied — no node is ever mutated after construction.
//!
//! # Overview
//!
//! - `Nil` is a unit variant: the empty-list sentinel costs nothing to
//!   share and lives for the process's duration.
//! - `Cons` nodes are created by the factories here and by any
//!   [`ListOps`](crate::ops::ListOps) operation producing a result chain;
//!   a node becomes reclaimable when its reference count drops to zero.
//! - Element homogeneity is enforced by the type parameter at compile
//!   time; for run-time-checked construction see [`typed`](crate::typed).
//!
//! # Examples
//!
//! ```rust
//! use kons::prelude::*;
//!
//! let xs = list![1, 2, 3];
//! assert_eq!(xs.length(), 3);
//! assert_eq!(xs.first(), Ok(&1));
//!
//! // Persistent: appending never disturbs the original.
//! let ys = xs.append(4);
//! assert_eq!(xs.length(), 3);
//! assert_eq!(ys.length(), 4);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::rc::Rc;

use crate::ops::{Items, ListCore, ListOps};

/// A persistent (immutable) cons list with exactly two variants.
///
/// Equality is structural: two lists are equal iff they have equal length
/// and pairwise-equal elements in order. `Nil` equals only itself.
///
/// # Time Complexity
///
/// | Operation  | Complexity |
/// |------------|------------|
/// | `cons`     | O(1)       |
/// | `split`    | O(1)       |
/// | `length`   | O(n)       |
/// | `at`       | O(n)       |
/// | `append`   | O(n)       |
/// | `reverse`  | O(n)       |
///
/// # Examples
///
/// ```rust
/// use kons::prelude::*;
///
/// let xs: List<i32> = List::cons(1, List::cons(2, List::nil()));
/// assert_eq!(xs, list![1, 2]);
/// ```
#[derive(Clone)]
pub enum List<T> {
    /// The empty list; terminal node of every chain.
    Nil,
    /// A node owning one element and the rest of the chain.
    Cons {
        /// The element stored in this node.
        head: T,
        /// The rest of the chain; shared read-only across lists.
        tail: Rc<List<T>>,
    },
}

impl<T: Clone> ListCore for List<T> {
    type Elem = T;

    #[inline]
    fn nil() -> Self {
        Self::Nil
    }

    #[inline]
    fn cons(head: T, tail: Self) -> Self {
        Self::Cons {
            head,
            tail: Rc::new(tail),
        }
    }

    fn split(&self) -> Option<(&T, &Self)> {
        match self {
            Self::Nil => None,
            Self::Cons { head, tail } => Some((head, tail.as_ref())),
        }
    }
}

impl<T> List<T> {
    /// Creates a new empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kons::prelude::*;
    ///
    /// let xs: List<i32> = List::new();
    /// assert!(xs.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::Nil
    }
}

impl List<f64> {
    /// Generates the numbers from `start` to `end` inclusive, stepping by 1.
    ///
    /// Equivalent to [`from_range_step`](Self::from_range_step) with a step
    /// of `1.0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kons::prelude::*;
    ///
    /// assert_eq!(List::from_range(1.0, 4.0).join(","), "1,2,3,4");
    /// ```
    #[must_use]
    pub fn from_range(start: f64, end: f64) -> Self {
        Self::from_range_step(start, end, 1.0)
    }

    /// Generates the numbers from `start` to `end` inclusive with a step.
    ///
    /// Traversal is ascending (`current <= end`) when `step > 0` and
    /// descending (`current >= end`) when `step < 0`. The caller is
    /// responsible for matching the step's sign to the direction implied
    /// by `start` and `end`: a mismatched sign — and a step of zero —
    /// fails the loop condition immediately and yields the empty list;
    /// this factory never loops indefinitely.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kons::prelude::*;
    ///
    /// assert_eq!(List::from_range_step(1.0, 5.0, 2.0).join(","), "1,3,5");
    /// assert_eq!(List::from_range_step(5.0, 1.0, -2.0).join(","), "5,3,1");
    /// assert!(List::from_range_step(1.0, 5.0, -1.0).is_empty());
    /// ```
    #[must_use]
    pub fn from_range_step(start: f64, end: f64, step: f64) -> Self {
        let mut values = Vec::new();
        if step > 0.0 {
            let mut current = start;
            while current <= end {
                values.push(current);
                current += step;
            }
        } else if step < 0.0 {
            let mut current = start;
            while current >= end {
                values.push(current);
                current += step;
            }
        }
        Self::from_elements(values)
    }
}

/// Constructs a [`List`] from a sequence of elements.
///
/// Elements are folded right-to-left into nodes, so the list reads in
/// argument order. All elements must share one type; a heterogeneous
/// invocation is rejected by the compiler.
///
/// # Examples
///
/// ```rust
/// use kons::prelude::*;
///
/// let xs = list![1, 2, 3];
/// assert_eq!(xs.join(","), "1,2,3");
///
/// let empty: List<i32> = list![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::list::List::Nil
    };
    ($($element:expr),+ $(,)?) => {
        <$crate::list::List<_> as $crate::ops::ListCore>::from_elements([$($element),+])
    };
}

// =============================================================================
// Iterator Implementations
// =============================================================================

/// An owning iterator over the elements of a [`List`].
pub struct ListIntoIter<T> {
    list: List<T>,
}

impl<T: Clone> Iterator for ListIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let (head, tail) = match &self.list {
            List::Nil => return None,
            List::Cons { head, tail } => (head.clone(), tail.as_ref().clone()),
        };
        self.list = tail;
        Some(head)
    }
}

impl<T: Clone> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = ListIntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        ListIntoIter { list: self }
    }
}

impl<'a, T: Clone> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Items<'a, List<T>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for List<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let elements: Vec<T> = iter.into_iter().collect();
        Self::from_elements(elements)
    }
}

impl<T: Clone + PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut left = self.items();
        let mut right = other.items();
        loop {
            match (left.next(), right.next()) {
                (None, None) => return true,
                (Some(a), Some(b)) if a == b => {}
                _ => return false,
            }
        }
    }
}

impl<T: Clone + Eq> Eq for List<T> {}

impl<T: Clone + Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Hash the length first so prefixes hash differently
        self.length().hash(state);
        for element in self.items() {
            element.hash(state);
        }
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.items()).finish()
    }
}

impl<T: Clone + fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[{}]", self.join(", "))
    }
}

// Rc-backed chains are single-threaded by design.
static_assertions::assert_not_impl_any!(List<i32>: Send, Sync);
static_assertions::assert_not_impl_any!(List<String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_new_creates_empty_list() {
        let xs: List<i32> = List::new();
        assert!(xs.is_empty());
        assert_eq!(xs.length(), 0);
    }

    #[rstest]
    fn test_list_macro_preserves_argument_order() {
        let xs = list![1, 2, 3];
        assert_eq!(xs.at(0), Ok(&1));
        assert_eq!(xs.at(1), Ok(&2));
        assert_eq!(xs.at(2), Ok(&3));
    }

    #[rstest]
    fn test_cons_shares_tail_structure() {
        let shared = list![2, 3];
        let xs = List::cons(1, shared.clone());
        let ys = List::cons(0, shared.clone());
        // Both lists read the shared suffix; neither disturbs the other.
        assert_eq!(xs, list![1, 2, 3]);
        assert_eq!(ys, list![0, 2, 3]);
        assert_eq!(shared, list![2, 3]);
    }

    #[rstest]
    fn test_structural_equality() {
        assert_eq!(list![1, 2, 3], list![1, 2, 3]);
        assert_ne!(list![1, 2, 3], list![1, 2]);
        assert_ne!(list![1, 2, 3], list![1, 2, 4]);
        assert_eq!(List::<i32>::Nil, List::Nil);
    }

    #[rstest]
    fn test_display_rendering() {
        assert_eq!(format!("{}", list![1, 2, 3]), "[1, 2, 3]");
        assert_eq!(format!("{}", List::<i32>::Nil), "[]");
    }

    #[rstest]
    fn test_debug_rendering() {
        assert_eq!(format!("{:?}", list![1, 2]), "[1, 2]");
    }

    #[rstest]
    fn test_from_iterator_and_into_iterator_round_trip() {
        let xs: List<i32> = (1..=4).collect();
        let collected: Vec<i32> = xs.into_iter().collect();
        assert_eq!(collected, vec![1, 2, 3, 4]);
    }

    #[rstest]
    fn test_hash_consistent_with_eq() {
        use std::collections::HashMap;
        let mut map: HashMap<List<i32>, &str> = HashMap::new();
        map.insert(list![1, 2, 3], "value");
        assert_eq!(map.get(&list![1, 2, 3]), Some(&"value"));
        assert_eq!(map.get(&list![1, 2]), None);
    }

    // =========================================================================
    // from_range Tests
    // =========================================================================

    #[rstest]
    #[case(1.0, 5.0, 1.0, "1,2,3,4,5")]
    #[case(1.0, 5.0, 2.0, "1,3,5")]
    #[case(5.0, 1.0, -2.0, "5,3,1")]
    #[case(3.0, 3.0, 1.0, "3")]
    fn test_from_range_step(
        #[case] start: f64,
        #[case] end: f64,
        #[case] step: f64,
        #[case] expected: &str,
    ) {
        assert_eq!(List::from_range_step(start, end, step).join(","), expected);
    }

    #[rstest]
    fn test_from_range_defaults_to_step_one() {
        assert_eq!(List::from_range(1.0, 4.0), List::from_range_step(1.0, 4.0, 1.0));
    }

    #[rstest]
    fn test_from_range_mismatched_step_sign_yields_empty() {
        assert!(List::from_range_step(1.0, 5.0, -1.0).is_empty());
        assert!(List::from_range_step(5.0, 1.0, 1.0).is_empty());
        assert!(List::from_range_step(1.0, 5.0, 0.0).is_empty());
    }
}
