//! # kons
//!
//! Persistent (immutable) cons lists with a reusable, derivable operation
//! suite.
//!
//! ## Overview
//!
//! This library provides a classic two-variant cons list together with a
//! full functional algorithm suite, structured so that the suite is written
//! exactly once and reused by any type exposing the same Nil/Cons shape:
//!
//! - **[`List<T>`]**: a closed sum type (`Nil` | `Cons`) with structural
//!   sharing via `Rc`.
//! - **[`ListOps`]**: seventeen operations (`append`, `at`, `concat`,
//!   `filter`, `fold_left`, `join`, `map`, `reverse`, `scan_left`,
//!   `zip_with`, …) defined as provided methods over the three structural
//!   primitives of [`ListCore`].
//! - **[`NumList`]**: a distinctly-tagged numeric list that inherits the
//!   entire suite — every inherited operation keeps producing `NumList`
//!   values — and adds its own `sum` aggregate.
//! - **Typed construction**: a runtime element-kind-checked factory for
//!   heterogeneously-sourced input ([`typed`]).
//!
//! ## Example
//!
//! ```rust
//! use kons::prelude::*;
//!
//! let xs = list![1, 2, 3];
//! assert_eq!(xs.append(4), list![1, 2, 3, 4]);
//! assert_eq!(xs.map(|x| x * 2).join(","), "2,4,6");
//!
//! let ns = num_list![1.0, 2.0, 3.0];
//! assert_eq!(ns.append(4.0).sum(), 10.0);
//! ```
//!
//! [`List<T>`]: list::List
//! [`ListOps`]: ops::ListOps
//! [`ListCore`]: ops::ListCore
//! [`NumList`]: numeric::NumList
//! [`typed`]: typed

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use kons::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::ListError;
    pub use crate::list::List;
    pub use crate::numeric::NumList;
    pub use crate::ops::{ListCore, ListOps};
    pub use crate::typed::{ElementKind, Value, list_of};
    pub use crate::{list, num_list};
}

pub mod error;
pub mod list;
pub mod numeric;
pub mod ops;
pub mod typed;
