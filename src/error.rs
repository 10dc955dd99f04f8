//! Error types for list operations and construction.
//!
//! This module provides [`ListError`], the unified error type for every
//! fallible operation in the crate. All three variants describe
//! programmer-error-class conditions: they are raised synchronously at the
//! point of violation, propagate unchanged to the caller, and are never
//! recovered from internally. No operation returns a partial result in
//! place of an error.
//!
//! # Examples
//!
//! ```rust
//! use kons::error::ListError;
//! use kons::ops::ListOps;
//! use kons::list;
//!
//! let xs = list![1, 2, 3];
//! assert_eq!(
//!     xs.at(3),
//!     Err(ListError::IndexOutOfBounds { index: 3, length: 3 })
//! );
//! ```

use crate::typed::ElementKind;

/// Represents errors that can occur when constructing or querying a list.
///
/// # Examples
///
/// ```rust
/// use kons::error::ListError;
///
/// let error = ListError::EmptyCollectionAccess { operation: "first" };
/// assert_eq!(format!("{error}"), "first: cannot access element of empty list");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// An index was outside `[-length, length - 1]`.
    IndexOutOfBounds {
        /// The requested index (possibly negative).
        index: i64,
        /// The length of the list at the time of the access.
        length: usize,
    },
    /// `first` or `last` was invoked on an empty list.
    EmptyCollectionAccess {
        /// The name of the operation that was invoked.
        operation: &'static str,
    },
    /// A constructor argument did not conform to the declared element kind.
    TypeMismatch {
        /// The element kind the list was declared with.
        expected: ElementKind,
        /// The kind of the offending value.
        actual: ElementKind,
        /// Zero-based position of the first offending value.
        index: usize,
    },
}

impl std::fmt::Display for ListError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, length } => {
                write!(
                    formatter,
                    "index {index} out of bounds for list of length {length}"
                )
            }
            Self::EmptyCollectionAccess { operation } => {
                write!(formatter, "{operation}: cannot access element of empty list")
            }
            Self::TypeMismatch {
                expected,
                actual,
                index,
            } => {
                write!(
                    formatter,
                    "element at position {index} has kind {actual}, expected {expected}"
                )
            }
        }
    }
}

impl std::error::Error for ListError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_out_of_bounds_display() {
        let error = ListError::IndexOutOfBounds {
            index: -4,
            length: 3,
        };
        assert_eq!(
            format!("{error}"),
            "index -4 out of bounds for list of length 3"
        );
    }

    #[test]
    fn test_empty_collection_access_display() {
        let error = ListError::EmptyCollectionAccess { operation: "last" };
        assert_eq!(format!("{error}"), "last: cannot access element of empty list");
    }

    #[test]
    fn test_type_mismatch_display() {
        let error = ListError::TypeMismatch {
            expected: ElementKind::Number,
            actual: ElementKind::Text,
            index: 2,
        };
        assert_eq!(
            format!("{error}"),
            "element at position 2 has kind Text, expected Number"
        );
    }

    #[test]
    fn test_error_equality() {
        let error1 = ListError::EmptyCollectionAccess { operation: "first" };
        let error2 = ListError::EmptyCollectionAccess { operation: "first" };
        let error3 = ListError::EmptyCollectionAccess { operation: "last" };
        assert_eq!(error1, error2);
        assert_ne!(error1, error3);
    }
}
