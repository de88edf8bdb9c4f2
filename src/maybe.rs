//! Maybe type - a chainable container for a value that may be absent.
//!
//! This module provides the `Maybe<T>` type, which represents either a
//! present value (`Value`) or absence (`Empty`). Chain operations
//! short-circuit automatically once a chain goes empty, so a caller never
//! writes explicit absence checks between steps:
//!
//! - `bind` applies a transform to the contained value,
//! - `tap` observes the value without changing the chain,
//! - `or` / `or_else` supply a default at the end of a chain,
//! - `is_nothing` / `is_value` are the complementary predicates.
//!
//! Absence is a value, not an error: no operation here panics or returns a
//! `Result`, and failures raised by user-supplied closures propagate
//! unchanged to the caller.
//!
//! # Examples
//!
//! ```rust
//! use maybe_chain::Maybe;
//!
//! let greeting: Maybe<String> = Maybe::new("world")
//!     .bind(|name| format!("hello, {name}"));
//! assert_eq!(greeting.value(), Some("hello, world".to_string()));
//!
//! // An empty chain short-circuits without invoking later steps.
//! let silent: Maybe<String> = Maybe::<&str>::NOTHING
//!     .bind(|name| format!("hello, {name}"));
//! assert!(silent.is_nothing());
//! ```

use std::fmt;

use crate::wrap::IntoMaybe;

/// The fixed signature prefix shared by the display form and the tagged
/// projection.
///
/// `Maybe::to_string` always begins with these five characters, and
/// [`Tagged::kind`] carries them as the discriminant. The prefix is a
/// stable, documented contract so that textual projections from any
/// construction site are recognizable as containers.
///
/// # Examples
///
/// ```rust
/// use maybe_chain::{Maybe, SIGNATURE};
///
/// assert!(Maybe::new(5).to_string().starts_with(SIGNATURE));
/// assert_eq!(SIGNATURE.len(), 5);
/// ```
pub const SIGNATURE: &str = "Maybe";

/// A container holding either one value or nothing.
///
/// `Maybe<T>` is the chainable counterpart of `Option<T>`: every operation
/// that continues a chain (`bind`, `tap`, `or`, member access through
/// [`Record`](crate::Record)) short-circuits on an empty receiver and
/// routes its result through the idempotent wrap gate
/// ([`IntoMaybe`]), so chains never produce a nested container.
///
/// The empty variant carries no data, which makes every empty container
/// structurally identical to the canonical [`Maybe::NOTHING`].
///
/// # Examples
///
/// ```rust
/// use maybe_chain::Maybe;
///
/// let present = Maybe::new(5);
/// assert!(present.is_value());
///
/// let absent: Maybe<i32> = Maybe::new(None);
/// assert!(absent.is_nothing());
///
/// // bind chains a transform; or supplies a default once the chain is done.
/// let result: Maybe<i32> = present.bind(|n| n * 2).or(0);
/// assert_eq!(result.value(), Some(10));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<T> {
    /// A present value.
    Value(T),
    /// Absence. Dataless, so all empty containers are interchangeable.
    Empty,
}

impl<T> Maybe<T> {
    /// The canonical empty container.
    ///
    /// Every operation that continues past an empty receiver yields this
    /// value. Because `Empty` holds no data, `NOTHING` is a plain constant
    /// rather than a runtime singleton: it needs no initialization order
    /// and no teardown, and is safe to share across threads.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::Maybe;
    ///
    /// let nothing: Maybe<i32> = Maybe::NOTHING;
    /// assert!(nothing.is_nothing());
    /// assert_eq!(nothing, Maybe::Empty);
    /// ```
    pub const NOTHING: Self = Self::Empty;

    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a value into a container, idempotently.
    ///
    /// Accepts a plain value, an `Option` (whose `None` becomes the empty
    /// container), or another `Maybe` (returned unchanged). See
    /// [`IntoMaybe`] for the conversion rules.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::Maybe;
    ///
    /// assert_eq!(Maybe::new(5), Maybe::Value(5));
    ///
    /// let empty: Maybe<i32> = Maybe::new(None);
    /// assert!(empty.is_nothing());
    ///
    /// // Wrapping a container is a no-op, never a nesting.
    /// let wrapped: Maybe<i32> = Maybe::new(Maybe::new(5));
    /// assert_eq!(wrapped, Maybe::new(5));
    /// ```
    #[inline]
    pub fn new(value: impl IntoMaybe<T>) -> Self {
        value.into_maybe()
    }

    // =========================================================================
    // Predicates
    // =========================================================================

    /// Returns `true` if this container is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::Maybe;
    ///
    /// assert!(Maybe::<i32>::NOTHING.is_nothing());
    /// assert!(!Maybe::new(5).is_nothing());
    /// ```
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns `true` if this container holds a value. Exact complement of
    /// [`is_nothing`](Self::is_nothing).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::Maybe;
    ///
    /// assert!(Maybe::new(5).is_value());
    /// assert!(!Maybe::<i32>::NOTHING.is_value());
    /// ```
    #[inline]
    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    // =========================================================================
    // Value Access
    // =========================================================================

    /// Returns the raw value, consuming the container.
    ///
    /// Absence surfaces as `None`, never as an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::Maybe;
    ///
    /// assert_eq!(Maybe::new(5).value(), Some(5));
    /// assert_eq!(Maybe::<i32>::NOTHING.value(), None);
    /// ```
    #[inline]
    pub fn value(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Empty => None,
        }
    }

    /// Returns a reference to the raw value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::Maybe;
    ///
    /// let container = Maybe::new(5);
    /// assert_eq!(container.value_ref(), Some(&5));
    /// assert_eq!(Maybe::<i32>::NOTHING.value_ref(), None);
    /// ```
    #[inline]
    pub const fn value_ref(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Empty => None,
        }
    }

    // =========================================================================
    // Chain Operations
    // =========================================================================

    /// Applies a transform to the contained value and wraps the result.
    ///
    /// An empty receiver short-circuits to [`Maybe::NOTHING`] without
    /// invoking `transform`. The transform may return a plain value, an
    /// `Option`, or another `Maybe`; the result goes through the idempotent
    /// wrap gate either way, so a nested container cannot come out of a
    /// chain. Annotate the result type when the transform returns a
    /// container or an `Option`, since both conversions apply to those.
    ///
    /// Failures raised inside `transform` are not caught here; they
    /// propagate to the caller unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::Maybe;
    ///
    /// let doubled = Maybe::new(5).bind(|n| n * 2);
    /// assert_eq!(doubled.value(), Some(10));
    ///
    /// // A transform may itself return a container.
    /// let chained: Maybe<i32> = Maybe::new(5).bind(|n| Maybe::new(n * 2));
    /// assert_eq!(chained.value(), Some(10));
    ///
    /// // Empty short-circuits; the closure is never invoked.
    /// let silent: Maybe<i32> = Maybe::<i32>::NOTHING.bind(|n| n * 2);
    /// assert!(silent.is_nothing());
    /// ```
    #[inline]
    pub fn bind<U, R, F>(self, transform: F) -> Maybe<U>
    where
        F: FnOnce(T) -> R,
        R: IntoMaybe<U>,
    {
        match self {
            Self::Value(value) => transform(value).into_maybe(),
            Self::Empty => Maybe::NOTHING,
        }
    }

    /// Invokes a side effect with the contained value, then returns the
    /// container unchanged.
    ///
    /// The effect's return value is discarded. An empty receiver skips the
    /// effect but still returns itself: `tap` never collapses a chain, it
    /// only observes it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::Maybe;
    ///
    /// let mut seen = Vec::new();
    /// let container = Maybe::new(5).tap(|n| seen.push(*n));
    /// assert_eq!(container.value(), Some(5));
    /// assert_eq!(seen, vec![5]);
    ///
    /// let mut seen = Vec::new();
    /// Maybe::<i32>::NOTHING.tap(|n| seen.push(*n));
    /// assert!(seen.is_empty());
    /// ```
    #[inline]
    pub fn tap<F>(self, side_effect: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Value(value) = &self {
            side_effect(value);
        }

        self
    }

    /// Returns this container if non-empty, otherwise wraps `fallback`.
    ///
    /// The fallback goes through the idempotent wrap gate, so it may itself
    /// be a plain value, an `Option`, or a container. For a lazily computed
    /// default use [`or_else`](Self::or_else).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::Maybe;
    ///
    /// assert_eq!(Maybe::new(5).or(99).value(), Some(5));
    /// assert_eq!(Maybe::<i32>::NOTHING.or(42).value(), Some(42));
    /// ```
    #[inline]
    pub fn or(self, fallback: impl IntoMaybe<T>) -> Self {
        match self {
            Self::Value(_) => self,
            Self::Empty => fallback.into_maybe(),
        }
    }

    /// Returns this container if non-empty, otherwise invokes the thunk
    /// and wraps its result.
    ///
    /// The thunk is only invoked on an empty receiver. Failures raised
    /// inside it propagate unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::Maybe;
    ///
    /// assert_eq!(Maybe::<i32>::NOTHING.or_else(|| 42).value(), Some(42));
    ///
    /// // Never invoked for a non-empty receiver.
    /// let kept = Maybe::new(5).or_else(|| 99);
    /// assert_eq!(kept.value(), Some(5));
    /// ```
    #[inline]
    pub fn or_else<R, F>(self, fallback: F) -> Self
    where
        F: FnOnce() -> R,
        R: IntoMaybe<T>,
    {
        match self {
            Self::Value(_) => self,
            Self::Empty => fallback().into_maybe(),
        }
    }

    // =========================================================================
    // Projections
    // =========================================================================

    /// Produces the tagged projection of this container.
    ///
    /// The projection is a plain record carrying the [`SIGNATURE`]
    /// discriminant and the raw value (absence included, unconverted). With
    /// the `serde` feature it serializes as `{"type":"Maybe","value":...}`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::{Maybe, Tagged};
    ///
    /// let container = Maybe::new(5);
    /// let tagged = container.to_tagged();
    /// assert_eq!(tagged, Tagged { kind: "Maybe", value: Some(&5) });
    ///
    /// let empty = Maybe::<i32>::NOTHING;
    /// assert_eq!(empty.to_tagged().value, None);
    /// ```
    #[inline]
    pub const fn to_tagged(&self) -> Tagged<'_, T> {
        Tagged {
            kind: SIGNATURE,
            value: self.value_ref(),
        }
    }
}

// =============================================================================
// Tagged Projection
// =============================================================================

/// The plain-record projection of a container, for serialization interop.
///
/// Carries the fixed [`SIGNATURE`] discriminant under `kind` (serialized as
/// `"type"`) and a reference to the raw value; absence projects as `None`
/// (serialized as `null`).
///
/// # Examples
///
/// ```rust
/// use maybe_chain::Maybe;
///
/// let container = Maybe::new(5);
/// let tagged = container.to_tagged();
/// assert_eq!(tagged.kind, "Maybe");
/// assert_eq!(tagged.value, Some(&5));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Tagged<'a, T> {
    /// The discriminant tag, always [`SIGNATURE`].
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: &'static str,
    /// The raw value, or `None` for an empty container.
    pub value: Option<&'a T>,
}

// =============================================================================
// Display and Debug Implementations
// =============================================================================

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    /// Formats the container with the fixed signature prefix: exactly
    /// `Maybe(empty)` when empty, `Maybe(<value>)` otherwise.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => write!(formatter, "{SIGNATURE}({value})"),
            Self::Empty => write!(formatter, "{SIGNATURE}(empty)"),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => formatter.debug_tuple("Value").field(value).finish(),
            Self::Empty => formatter.write_str("Empty"),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<T> Default for Maybe<T> {
    /// The default container is empty.
    #[inline]
    fn default() -> Self {
        Self::Empty
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    /// Converts an `Option` to a `Maybe`.
    ///
    /// `Some(v)` becomes `Value(v)`, and `None` becomes `Empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::Maybe;
    ///
    /// let present: Maybe<i32> = Some(5).into();
    /// assert_eq!(present, Maybe::Value(5));
    ///
    /// let absent: Maybe<i32> = None.into();
    /// assert!(absent.is_nothing());
    /// ```
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Value(value),
            None => Self::Empty,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    /// Converts a `Maybe` to an `Option`.
    ///
    /// `Value(v)` becomes `Some(v)`, and `Empty` becomes `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::Maybe;
    ///
    /// let option: Option<i32> = Maybe::new(5).into();
    /// assert_eq!(option, Some(5));
    ///
    /// let none: Option<i32> = Maybe::<i32>::NOTHING.into();
    /// assert_eq!(none, None);
    /// ```
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Value(value) => Some(value),
            Maybe::Empty => None,
        }
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    /// Iterates over zero or one contained values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::Maybe;
    ///
    /// let collected: Vec<i32> = Maybe::new(5).into_iter().collect();
    /// assert_eq!(collected, vec![5]);
    ///
    /// let empty: Vec<i32> = Maybe::<i32>::NOTHING.into_iter().collect();
    /// assert!(empty.is_empty());
    /// ```
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.value().into_iter()
    }
}

// =============================================================================
// Serde Implementations
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Maybe<T> {
    /// Serializes in the tagged projection format:
    /// `{"type":"Maybe","value":...}`, with absence as `null`.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Maybe", 2)?;
        state.serialize_field("type", SIGNATURE)?;
        state.serialize_field("value", &self.value_ref())?;
        state.end()
    }
}

#[cfg(feature = "serde")]
struct MaybeVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for MaybeVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = Maybe<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a tagged object with \"type\" and \"value\" fields")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut tag: Option<String> = None;
        let mut value: Option<Option<T>> = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "type" => tag = Some(map.next_value()?),
                "value" => value = Some(map.next_value()?),
                _ => {
                    let _ = map.next_value::<serde::de::IgnoredAny>()?;
                }
            }
        }

        let tag = tag.ok_or_else(|| serde::de::Error::missing_field("type"))?;
        if tag != SIGNATURE {
            return Err(serde::de::Error::invalid_value(
                serde::de::Unexpected::Str(&tag),
                &"the literal tag \"Maybe\"",
            ));
        }

        let value = value.ok_or_else(|| serde::de::Error::missing_field("value"))?;
        Ok(value.into_maybe())
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Maybe<T>
where
    T: serde::Deserialize<'de>,
{
    /// Deserializes from the tagged projection format, rejecting objects
    /// whose `"type"` tag is not the container signature.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_struct(
            "Maybe",
            &["type", "value"],
            MaybeVisitor {
                marker: std::marker::PhantomData,
            },
        )
    }
}
