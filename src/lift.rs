//! Lift adapters - turning ordinary functions into container-producing ones.
//!
//! `lift` wraps a function so that its return value is automatically routed
//! through the idempotent wrap gate before being handed back: the lifted
//! function receives exactly the arguments the caller passed, and its result
//! comes back as a `Maybe`. `lift2` and `lift3` cover the two- and
//! three-argument shapes; they are generated by one arity macro.
//!
//! Nothing here guards against the lifted function panicking; failures
//! propagate unchanged to the caller.
//!
//! # Examples
//!
//! ```rust
//! use maybe_chain::{lift, lift2};
//!
//! let half = lift(|n: i32| if n % 2 == 0 { Some(n / 2) } else { None });
//! assert_eq!(half(10).value(), Some(5));
//! assert!(half(7).is_nothing());
//!
//! let add = lift2(|a: i32, b: i32| a + b);
//! assert_eq!(add(2, 3).value(), Some(5));
//! ```

use crate::maybe::Maybe;
use crate::wrap::IntoMaybe;

/// Lifts a one-argument function into one returning a container.
///
/// The returned closure forwards its argument unchanged, then wraps the
/// result idempotently: a function already returning a `Maybe` (or an
/// `Option`) is not double-wrapped.
///
/// # Examples
///
/// ```rust
/// use maybe_chain::{lift, Maybe};
///
/// let double = lift(|n: i32| n * 2);
/// assert_eq!(double(21), Maybe::Value(42));
///
/// // An Option-returning function lifts absence-aware.
/// let parse = lift(|text: &str| text.parse::<i32>().ok());
/// assert_eq!(parse("42").value(), Some(42));
/// assert!(parse("nope").is_nothing());
/// ```
#[inline]
pub fn lift<Argument, Return, Output, F>(function: F) -> impl Fn(Argument) -> Maybe<Output>
where
    F: Fn(Argument) -> Return,
    Return: IntoMaybe<Output>,
{
    move |argument| function(argument).into_maybe()
}

macro_rules! lift_arity {
    ($($(#[$attribute:meta])* $arity:literal => ($($argument:ident: $parameter:ident),+);)+) => {
        paste::paste! {
            $(
                $(#[$attribute])*
                #[inline]
                pub fn [<lift $arity>]<$($parameter,)+ Return, Output, F>(
                    function: F,
                ) -> impl Fn($($parameter),+) -> Maybe<Output>
                where
                    F: Fn($($parameter),+) -> Return,
                    Return: IntoMaybe<Output>,
                {
                    move |$($argument),+| function($($argument),+).into_maybe()
                }
            )+
        }
    };
}

lift_arity! {
    /// Lifts a two-argument function into one returning a container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::lift2;
    ///
    /// let add = lift2(|a: i32, b: i32| a + b);
    /// assert_eq!(add(2, 3).value(), Some(5));
    /// ```
    2 => (first: A, second: B);

    /// Lifts a three-argument function into one returning a container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::lift3;
    ///
    /// let join = lift3(|a: &str, b: &str, c: &str| format!("{a}-{b}-{c}"));
    /// assert_eq!(join("x", "y", "z").value(), Some("x-y-z".to_string()));
    /// ```
    3 => (first: A, second: B, third: C);
}
