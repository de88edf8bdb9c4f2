//! Idempotent wrapping - the single gate through which values enter a `Maybe`.
//!
//! This module provides the [`IntoMaybe`] trait, the conversion every
//! wrapping operation (`Maybe::new`, `bind`, `or`, `or_else`, the `lift`
//! family) routes through. Its impl set encodes the wrapping rules:
//!
//! - a plain value becomes `Maybe::Value`,
//! - an `Option` becomes `Maybe::Value` or `Maybe::Empty` (absence-aware),
//! - a `Maybe` passes through unchanged (idempotence).
//!
//! Because "already wrapped" is decided by the trait system rather than by
//! inspecting the value at runtime, chains can never produce a nested
//! container, and no unrelated type can be mistaken for one.
//!
//! # Laws
//!
//! All `IntoMaybe` impls must satisfy:
//!
//! ```text
//! m.into_maybe() == m                          // idempotence, m: Maybe<T>
//! value.into_maybe().value() == Some(value)    // plain values are preserved
//! None.into_maybe().is_nothing() == true       // absence stays absence
//! ```
//!
//! # Examples
//!
//! ```rust
//! use maybe_chain::{IntoMaybe, Maybe};
//!
//! // A plain value is boxed.
//! let wrapped: Maybe<i32> = 5.into_maybe();
//! assert_eq!(wrapped, Maybe::Value(5));
//!
//! // An already-wrapped value passes through unchanged.
//! let rewrapped: Maybe<i32> = wrapped.into_maybe();
//! assert_eq!(rewrapped, Maybe::Value(5));
//!
//! // An absent Option becomes the empty container.
//! let empty: Maybe<i32> = None.into_maybe();
//! assert!(empty.is_nothing());
//! ```

use crate::maybe::Maybe;

/// Conversion of a value into a `Maybe<T>`, idempotent over already-wrapped
/// containers.
///
/// The type parameter `T` is the contained type of the resulting container.
/// A given source type may convert into more than one target (for example,
/// `Option<i32>` is both `IntoMaybe<i32>` by flattening and
/// `IntoMaybe<Option<i32>>` by plain boxing); the call site's expected type
/// selects the conversion, so annotate the result where the context leaves
/// it open.
///
/// # Examples
///
/// ```rust
/// use maybe_chain::{IntoMaybe, Maybe};
///
/// let five: Maybe<i32> = 5.into_maybe();
/// let empty: Maybe<i32> = None.into_maybe();
/// let same: Maybe<i32> = five.into_maybe();
///
/// assert_eq!(same.to_string(), "Maybe(5)");
/// assert_eq!(empty.to_string(), "Maybe(empty)");
/// ```
pub trait IntoMaybe<T> {
    /// Converts `self` into a container, wrapping at most once.
    fn into_maybe(self) -> Maybe<T>;
}

/// A plain value wraps into `Maybe::Value`.
impl<T> IntoMaybe<T> for T {
    #[inline]
    fn into_maybe(self) -> Maybe<T> {
        Maybe::Value(self)
    }
}

/// An existing container passes through unchanged. This impl is what makes
/// wrapping idempotent: every chain operation may hand its result back to
/// the wrap gate without risking a nested `Maybe<Maybe<T>>`.
impl<T> IntoMaybe<T> for Maybe<T> {
    #[inline]
    fn into_maybe(self) -> Maybe<T> {
        self
    }
}

/// An `Option` converts absence-aware: `None` is the no-value marker and
/// becomes the empty container.
impl<T> IntoMaybe<T> for Option<T> {
    #[inline]
    fn into_maybe(self) -> Maybe<T> {
        match self {
            Some(value) => Maybe::Value(value),
            None => Maybe::Empty,
        }
    }
}
