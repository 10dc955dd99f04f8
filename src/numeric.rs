//! A numeric list derived from the generic cons-list suite.
//!
//! [`NumList`] has the same two-variant shape as `List<f64>` but is a
//! distinct type: its values never unify with plain `List<f64>` values
//! even though the shapes match. It implements
//! [`ListCore`](crate::ops::ListCore) with its own constructors, which is
//! all it takes to inherit the entire
//! [`ListOps`](crate::ops::ListOps) suite — and because the suite builds
//! every result through `Self::cons` / `Self::nil`, each inherited
//! operation keeps producing `NumList` values rather than downgrading to
//! the base list. On top of the inherited suite it adds one new operation,
//! [`sum`](NumList::sum).
//!
//! # Examples
//!
//! ```rust
//! use kons::prelude::*;
//!
//! let ns = num_list![1.0, 2.0, 3.0];
//! assert_eq!(ns.sum(), 6.0);
//!
//! // Inherited operations compose with the new one: `append` came from
//! // the shared suite, yet its result is still a NumList with `sum`.
//! assert_eq!(ns.append(4.0).sum(), 10.0);
//! ```

use std::fmt;
use std::iter::FromIterator;
use std::rc::Rc;

use crate::ops::{ListCore, ListOps};

/// A persistent list of numbers, distinctly tagged from `List<f64>`.
///
/// All seventeen list operations are inherited through
/// [`ListOps`](crate::ops::ListOps); [`sum`](Self::sum) is its own.
///
/// # Examples
///
/// ```rust
/// use kons::prelude::*;
///
/// let evens = num_list![1.0, 2.0, 3.0, 4.0].filter(|n| n % 2.0 == 0.0);
/// assert_eq!(evens.sum(), 6.0);
/// ```
#[derive(Clone)]
pub enum NumList {
    /// The empty numeric list.
    Nil,
    /// A node owning one number and the rest of the chain.
    Cons {
        /// The number stored in this node.
        head: f64,
        /// The rest of the chain.
        tail: Rc<NumList>,
    },
}

impl ListCore for NumList {
    type Elem = f64;

    #[inline]
    fn nil() -> Self {
        Self::Nil
    }

    #[inline]
    fn cons(head: f64, tail: Self) -> Self {
        Self::Cons {
            head,
            tail: Rc::new(tail),
        }
    }

    fn split(&self) -> Option<(&f64, &Self)> {
        match self {
            Self::Nil => None,
            Self::Cons { head, tail } => Some((head, tail.as_ref())),
        }
    }
}

impl NumList {
    /// Creates a new empty numeric list.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::Nil
    }

    /// Sums the elements; the empty list sums to `0.0`.
    ///
    /// Accumulates from the right, matching the recursive definition
    /// `head + tail.sum()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kons::prelude::*;
    ///
    /// assert_eq!(num_list![1.0, 2.0, 3.0].sum(), 6.0);
    /// assert_eq!(NumList::new().sum(), 0.0);
    /// ```
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.fold_right(0.0, |element, accumulator| element + accumulator)
    }
}

/// Constructs a [`NumList`] from a sequence of numbers.
///
/// # Examples
///
/// ```rust
/// use kons::prelude::*;
///
/// let ns = num_list![1.0, 2.0, 3.0];
/// assert_eq!(ns.length(), 3);
/// assert_eq!(ns.sum(), 6.0);
/// ```
#[macro_export]
macro_rules! num_list {
    () => {
        $crate::numeric::NumList::Nil
    };
    ($($element:expr),+ $(,)?) => {
        <$crate::numeric::NumList as $crate::ops::ListCore>::from_elements([$($element),+])
    };
}

impl Default for NumList {
    #[inline]
    fn default() -> Self {
        Self::Nil
    }
}

impl FromIterator<f64> for NumList {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let elements: Vec<f64> = iter.into_iter().collect();
        Self::from_elements(elements)
    }
}

impl PartialEq for NumList {
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

impl fmt::Debug for NumList {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.items()).finish()
    }
}

impl fmt::Display for NumList {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[{}]", self.join(", "))
    }
}

static_assertions::assert_not_impl_any!(NumList: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_sum_of_empty_is_zero() {
        assert_eq!(NumList::new().sum(), 0.0);
    }

    #[rstest]
    fn test_sum_accumulates_elements() {
        assert_eq!(num_list![1.0, 2.0, 3.0].sum(), 6.0);
    }

    #[rstest]
    fn test_inherited_append_feeds_new_operation() {
        assert_eq!(num_list![1.0, 2.0, 3.0].append(4.0).sum(), 10.0);
    }

    #[rstest]
    fn test_num_list_is_not_interchangeable_with_list() {
        // Distinct tags: the two types do not unify even though the shapes
        // match. This assignment is the type-level witness.
        let ns: NumList = num_list![1.0, 2.0].map(|n| n * 2.0);
        assert_eq!(ns, num_list![2.0, 4.0]);
    }

    #[rstest]
    fn test_display_rendering() {
        assert_eq!(format!("{}", num_list![1.0, 2.5]), "[1, 2.5]");
    }
}
