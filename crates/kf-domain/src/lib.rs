//! # Keyed Factory Domain
//!
//! Resolve a value from a discriminator key by trying candidate
//! `(key, resolvable)` pairs in order, with a fallback when none match.
//!
//! ## Architecture
//!
//! ```text
//! ResolutionBuilder<K, V>     ← subject key + write-once resolvable slot
//!     │
//! Resolvable<K, V>            ← Type(TypeRef<V>) | Factory(FnOnce(&K) -> V)
//!     │
//! ResolutionContext<V>        ← swappable, lazily-defaulted strategy slot
//!     │
//! InstantiationStrategy<V>    ← TypeRef<V> → V (default: ConstructStrategy)
//! ```

pub mod builder;
pub mod constants;
pub mod context;
pub mod error;
pub mod resolvable;
pub mod strategy;
pub mod type_ref;

pub use builder::ResolutionBuilder;
pub use context::{ResolutionContext, SharedStrategy};
pub use error::{Error, Result};
pub use resolvable::{Factory, Resolvable};
pub use strategy::{ConstructStrategy, InstantiationStrategy};
pub use type_ref::TypeRef;
