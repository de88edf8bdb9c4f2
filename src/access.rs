//! Name-based member access - the dynamic dispatch boundary.
//!
//! The container supports three access shapes against a record-shaped
//! value: looking up a property by key, invoking a callable member by name,
//! and applying a free transform. This module makes the three shapes
//! explicit as the [`Access`] enum, selected by the call site rather than
//! by inspecting argument types at runtime, and defines the [`Record`]
//! trait that supplies the name-based half of the dispatch.
//!
//! A record exposes its members over one uniform `Field` type, the way a
//! key/value map or a dynamically shaped document does. Absent keys and
//! absent methods are absence, not errors: both yield the empty container,
//! silently. That silent-absence contract is deliberate and load-bearing
//! for chain-friendly usage; do not "fix" it into an error.
//!
//! # Examples
//!
//! ```rust
//! use maybe_chain::Maybe;
//! use std::collections::HashMap;
//!
//! let record: HashMap<String, i32> = [("answer".to_string(), 42)].into();
//! let container = Maybe::new(record);
//!
//! assert_eq!(container.get("answer").value(), Some(42));
//! assert!(container.get("missing").is_nothing());
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::maybe::Maybe;

/// A value whose members are reachable by name.
///
/// Implementors expose property lookup over a uniform [`Field`](Self::Field)
/// type, and optionally callable members by name. The default method
/// implementations describe a record with no callable members, so plain
/// key/value types only implement [`field`](Self::field).
///
/// Absence is the universal "not there" answer: a missing key and a missing
/// method both produce `Maybe::Empty`. Implementations must not panic on
/// unknown names.
///
/// # Examples
///
/// ```rust
/// use maybe_chain::{Maybe, Record};
///
/// struct Greeter {
///     name: String,
/// }
///
/// impl Record for Greeter {
///     type Field = String;
///
///     fn field(&self, key: &str) -> Maybe<String> {
///         match key {
///             "name" => Maybe::new(self.name.clone()),
///             _ => Maybe::NOTHING,
///         }
///     }
///
///     fn has_method(&self, name: &str) -> bool {
///         name == "greet"
///     }
///
///     fn invoke(&self, name: &str, _args: Vec<String>) -> Maybe<String> {
///         match name {
///             "greet" => Maybe::new(format!("hi, {}", self.name)),
///             _ => Maybe::NOTHING,
///         }
///     }
/// }
///
/// let container = Maybe::new(Greeter { name: "ada".to_string() });
/// assert_eq!(container.call("greet", Vec::new()).value(), Some("hi, ada".to_string()));
/// assert_eq!(container.get("name").value(), Some("ada".to_string()));
/// ```
pub trait Record {
    /// The uniform type of this record's members.
    type Field;

    /// Looks up a property by key. Absent keys yield the empty container,
    /// never an error.
    fn field(&self, key: &str) -> Maybe<Self::Field>;

    /// Returns `true` if this record carries a callable member with the
    /// given name. Drives the string dispatch in [`Maybe::at`].
    fn has_method(&self, _name: &str) -> bool {
        false
    }

    /// Invokes the named callable member with the given arguments and
    /// returns its wrapped result. A missing member yields the empty
    /// container, silently.
    fn invoke(&self, _name: &str, _args: Vec<Self::Field>) -> Maybe<Self::Field> {
        Maybe::NOTHING
    }
}

/// The three access shapes supported against a record-shaped value.
///
/// Each variant corresponds to one call shape of [`Maybe::access`]; the
/// caller picks the shape explicitly instead of the library classifying an
/// argument at runtime.
///
/// # Examples
///
/// ```rust
/// use maybe_chain::{Access, Maybe, Record};
/// use std::collections::HashMap;
///
/// let record: HashMap<String, i32> = [("answer".to_string(), 42)].into();
/// let container = Maybe::new(record);
///
/// assert_eq!(container.access(Access::Key("answer")).value(), Some(42));
///
/// let doubled = container.access(Access::Apply(Box::new(|record| {
///     record.field("answer").bind(|n| n * 2)
/// })));
/// assert_eq!(doubled.value(), Some(84));
/// ```
pub enum Access<'a, T: Record> {
    /// Look up a property by key.
    Key(&'a str),
    /// Invoke a callable member by name, with arguments.
    Invoke(&'a str, Vec<T::Field>),
    /// Apply a transform to the contained value in the record's field
    /// domain.
    Apply(Box<dyn FnOnce(&T) -> Maybe<T::Field> + 'a>),
}

impl<T: Record> fmt::Debug for Access<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => formatter.debug_tuple("Key").field(key).finish(),
            Self::Invoke(name, args) => formatter
                .debug_struct("Invoke")
                .field("name", name)
                .field("args", &args.len())
                .finish(),
            Self::Apply(_) => formatter.write_str("Apply(<transform>)"),
        }
    }
}

impl<T: Record> Maybe<T> {
    /// Looks up a property on the contained value and returns the wrapped
    /// result.
    ///
    /// An empty receiver short-circuits to [`Maybe::NOTHING`]. An absent
    /// key is not an error; it simply produces an empty container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::Maybe;
    /// use std::collections::BTreeMap;
    ///
    /// let record: BTreeMap<String, i32> = [("answer".to_string(), 42)].into();
    /// let container = Maybe::new(record);
    ///
    /// assert_eq!(container.get("answer").value(), Some(42));
    /// assert!(container.get("missing").is_nothing());
    /// assert!(Maybe::<BTreeMap<String, i32>>::NOTHING.get("answer").is_nothing());
    /// ```
    #[inline]
    pub fn get(&self, key: &str) -> Maybe<T::Field> {
        match self {
            Self::Value(value) => value.field(key),
            Self::Empty => Maybe::NOTHING,
        }
    }

    /// Invokes a callable member by name with the contained value as
    /// receiver, wrapping the result.
    ///
    /// An empty receiver short-circuits to [`Maybe::NOTHING`]. A record
    /// without the named member also yields `NOTHING`, silently; "method
    /// not found" is treated identically to absence by contract.
    #[inline]
    pub fn call(&self, name: &str, args: Vec<T::Field>) -> Maybe<T::Field> {
        match self {
            Self::Value(value) => value.invoke(name, args),
            Self::Empty => Maybe::NOTHING,
        }
    }

    /// Accesses a member by name: invokes it if the record carries a
    /// callable member with this name, looks it up as a property otherwise.
    ///
    /// This is the string form of the generic access entry point. An empty
    /// receiver short-circuits before the name is inspected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::{Maybe, Record};
    ///
    /// struct Counter {
    ///     count: i32,
    /// }
    ///
    /// impl Record for Counter {
    ///     type Field = i32;
    ///
    ///     fn field(&self, key: &str) -> Maybe<i32> {
    ///         match key {
    ///             "count" => Maybe::new(self.count),
    ///             _ => Maybe::NOTHING,
    ///         }
    ///     }
    ///
    ///     fn has_method(&self, name: &str) -> bool {
    ///         name == "doubled"
    ///     }
    ///
    ///     fn invoke(&self, name: &str, _args: Vec<i32>) -> Maybe<i32> {
    ///         match name {
    ///             "doubled" => Maybe::new(self.count * 2),
    ///             _ => Maybe::NOTHING,
    ///         }
    ///     }
    /// }
    ///
    /// let container = Maybe::new(Counter { count: 21 });
    /// assert_eq!(container.at("doubled").value(), Some(42)); // method wins
    /// assert_eq!(container.at("count").value(), Some(21));   // property fallback
    /// assert!(container.at("missing").is_nothing());
    /// ```
    #[inline]
    pub fn at(&self, name: &str) -> Maybe<T::Field> {
        match self {
            Self::Value(value) if value.has_method(name) => value.invoke(name, Vec::new()),
            Self::Value(value) => value.field(name),
            Self::Empty => Maybe::NOTHING,
        }
    }

    /// The generic access entry point: dispatches on the explicit
    /// [`Access`] shape.
    ///
    /// An empty receiver short-circuits to [`Maybe::NOTHING`] before the
    /// shape is inspected, so an `Apply` transform is never invoked on an
    /// empty chain.
    #[inline]
    pub fn access(&self, access: Access<'_, T>) -> Maybe<T::Field> {
        match self {
            Self::Value(value) => match access {
                Access::Key(key) => value.field(key),
                Access::Invoke(name, args) => value.invoke(name, args),
                Access::Apply(transform) => transform(value),
            },
            Self::Empty => Maybe::NOTHING,
        }
    }
}

// =============================================================================
// Record Implementations for Standard Maps
// =============================================================================

/// A hash map is a record of its entries; it carries no callable members.
impl<V: Clone> Record for HashMap<String, V> {
    type Field = V;

    #[inline]
    fn field(&self, key: &str) -> Maybe<V> {
        Maybe::new(self.get(key).cloned())
    }
}

/// An ordered map is a record of its entries; it carries no callable
/// members.
impl<V: Clone> Record for BTreeMap<String, V> {
    type Field = V;

    #[inline]
    fn field(&self, key: &str) -> Maybe<V> {
        Maybe::new(self.get(key).cloned())
    }
}
