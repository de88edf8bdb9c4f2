//! # maybe-chain
//!
//! A chainable optional-value container for Rust.
//!
//! ## Overview
//!
//! `maybe-chain` provides [`Maybe<T>`], a container for a value that may be
//! absent, designed for chaining: every operation short-circuits
//! automatically once a chain goes empty, so absence checks never appear
//! between steps. It includes:
//!
//! - **Chain operations**: `bind`, `tap`, `or`/`or_else`, with an empty
//!   receiver always collapsing to the canonical [`Maybe::NOTHING`]
//! - **Idempotent wrapping**: the [`IntoMaybe`] gate guarantees a chain can
//!   never produce a nested container
//! - **Name-based member access**: the [`Record`] trait and [`Access`] enum
//!   for property lookup, method invocation by name, and transform
//!   application against dynamically shaped values
//! - **Lift adapters**: [`lift`], [`lift2`], [`lift3`] turn ordinary
//!   functions into container-producing ones
//! - **Projections**: a fixed `Maybe(...)` display signature and a tagged
//!   record projection, serde-serializable behind the `serde` feature
//!
//! Absence is a value, never an error: missing keys, missing methods, and
//! empty receivers all produce the empty container silently.
//!
//! ## Feature Flags
//!
//! - `serde`: tagged `{"type":"Maybe","value":...}` serialization for
//!   [`Maybe`] and [`Tagged`]
//!
//! ## Example
//!
//! ```rust
//! use maybe_chain::prelude::*;
//! use std::collections::HashMap;
//!
//! let config: HashMap<String, i32> = [("port".to_string(), 8080)].into();
//!
//! let port = Maybe::new(config)
//!     .get("port")
//!     .tap(|port| println!("configured port: {port}"))
//!     .or(80);
//! assert_eq!(port.value(), Some(8080));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the container, the wrap gate, the access boundary, and the
/// lift adapters.
///
/// # Usage
///
/// ```rust
/// use maybe_chain::prelude::*;
/// ```
pub mod prelude {
    pub use crate::access::{Access, Record};
    pub use crate::lift::{lift, lift2, lift3};
    pub use crate::maybe::{Maybe, SIGNATURE, Tagged};
    pub use crate::wrap::IntoMaybe;
}

mod access;
mod lift;
mod maybe;
mod wrap;

pub use access::{Access, Record};
pub use lift::{lift, lift2, lift3};
pub use maybe::{Maybe, SIGNATURE, Tagged};
pub use wrap::IntoMaybe;
