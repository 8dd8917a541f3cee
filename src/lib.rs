//! # keyset
//!
//! A generic, unordered set container with set algebra, element
//! transformation, and a human-readable rendering.
//!
//! ## Overview
//!
//! - **[`Set`]**: a mutable set of unique `Hash + Eq` elements
//! - **Construction**: [`Set::new`], [`Set::collect_from`], `collect()`, [`set!`]
//! - **Mutation**: `add`, `insert`, `delete`, `remove`, `delete_seq`
//! - **Algebra**: `union`, `intersection`, `map`, `filter`, subset checks
//! - **Rendering**: `Display` as `{a b c}`, `Debug` as `{a, b, c}`
//!
//! ## Feature Flags
//!
//! - `fxhash`: use `rustc_hash::FxBuildHasher` as [`DefaultHashBuilder`]
//! - `ahash`: use `ahash::RandomState` as [`DefaultHashBuilder`]
//!
//! ## Logging
//!
//! Bulk operations emit `TRACE` level [`tracing`] events with their input and
//! output sizes. The crate never installs a subscriber.
//!
//! ## Example
//!
//! ```rust
//! use keyset::prelude::*;
//!
//! let mut set = set![1, 2, 3];
//! set.add([3, 4]);
//!
//! let evens = set.filter(|x| x % 2 == 0);
//! assert_eq!(evens, set![2, 4]);
//! assert_eq!(format!("{}", Set::<i32>::new()), "{}");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use keyset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::DuplicateElementError;
    pub use crate::set;
    pub use crate::{DefaultHashBuilder, IntoValues, Set, Values};
}

pub mod error;

mod hasher;
mod hashset;
mod macros;

pub use hasher::DefaultHashBuilder;
pub use hashset::{IntoValues, Set, Values};
