//! Run-time element-kind-checked list construction.
//!
//! The generic [`List`](crate::list::List) gets its homogeneity guarantee
//! from the compiler. This module carries the same contract for input
//! whose kinds are only known at run time: a list is declared with an
//! [`ElementKind`], and every supplied [`Value`] is checked against that
//! kind before any node is built. The first violation aborts construction
//! with [`ListError::TypeMismatch`].
//!
//! # Examples
//!
//! ```rust
//! use kons::prelude::*;
//!
//! let numbers = list_of(ElementKind::Number)
//!     .of([Value::from(1), Value::from(2), Value::from(3)])
//!     .unwrap();
//! assert_eq!(numbers.join(","), "1,2,3");
//!
//! let mixed = list_of(ElementKind::Number).of([Value::from(1), Value::from("two")]);
//! assert!(mixed.is_err());
//! ```

use std::fmt;

use crate::error::ListError;
use crate::list::List;
use crate::ops::ListCore;

/// The element kind a typed list is declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// A floating-point number.
    Number,
    /// A string.
    Text,
    /// A boolean.
    Boolean,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Number => "Number",
            Self::Text => "Text",
            Self::Boolean => "Boolean",
        };
        formatter.write_str(name)
    }
}

/// A dynamically-kinded element value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A floating-point number.
    Number(f64),
    /// A string.
    Text(String),
    /// A boolean.
    Boolean(bool),
}

impl Value {
    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ElementKind {
        match self {
            Self::Number(_) => ElementKind::Number,
            Self::Text(_) => ElementKind::Text,
            Self::Boolean(_) => ElementKind::Boolean,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(formatter, "{number}"),
            Self::Text(text) => formatter.write_str(text),
            Self::Boolean(boolean) => write!(formatter, "{boolean}"),
        }
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<bool> for Value {
    fn from(boolean: bool) -> Self {
        Self::Boolean(boolean)
    }
}

/// A factory for lists whose element kind is checked at construction time.
///
/// Created by [`list_of`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypedListBuilder {
    kind: ElementKind,
}

impl TypedListBuilder {
    /// Builds a list from the supplied values.
    ///
    /// Every value is checked against the declared kind before any node is
    /// built; construction is all-or-nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::TypeMismatch`] naming the first value whose
    /// kind does not match the declared kind.
    pub fn of<I>(self, values: I) -> Result<List<Value>, ListError>
    where
        I: IntoIterator<Item = Value>,
    {
        let values: Vec<Value> = values.into_iter().collect();
        for (index, value) in values.iter().enumerate() {
            if value.kind() != self.kind {
                return Err(ListError::TypeMismatch {
                    expected: self.kind,
                    actual: value.kind(),
                    index,
                });
            }
        }
        Ok(List::from_elements(values))
    }
}

/// Declares a typed list factory for the given element kind.
///
/// # Examples
///
/// ```rust
/// use kons::prelude::*;
///
/// let flags = list_of(ElementKind::Boolean)
///     .of([Value::from(true), Value::from(false)])
///     .unwrap();
/// assert_eq!(flags.join(","), "true,false");
/// ```
#[must_use]
pub const fn list_of(kind: ElementKind) -> TypedListBuilder {
    TypedListBuilder { kind }
}
