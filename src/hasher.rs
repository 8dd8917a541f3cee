//! Hash builder selection.
//!
//! The default hash builder of [`Set`](crate::Set) is chosen at compile time
//! through Cargo features:
//!
//! | Feature  | `DefaultHashBuilder`                          |
//! |----------|-----------------------------------------------|
//! | (none)   | `std::collections::hash_map::RandomState`     |
//! | `fxhash` | `rustc_hash::FxBuildHasher`                   |
//! | `ahash`  | `ahash::RandomState`                          |
//!
//! If both `fxhash` and `ahash` are enabled, `fxhash` takes precedence.
//!
//! A specific hasher can always be chosen per set with
//! [`Set::with_hasher`](crate::Set::with_hasher), regardless of features.

/// The hash builder used by [`Set`](crate::Set) when none is specified.
#[cfg(feature = "fxhash")]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// The hash builder used by [`Set`](crate::Set) when none is specified.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultHashBuilder = ahash::RandomState;

/// The hash builder used by [`Set`](crate::Set) when none is specified.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultHashBuilder = std::collections::hash_map::RandomState;

// Every default must be constructible without arguments and shareable
// across derived sets.
static_assertions::assert_impl_all!(
    DefaultHashBuilder: std::hash::BuildHasher,
    Default,
    Clone,
    Send,
    Sync
);
