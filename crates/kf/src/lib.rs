//! # Keyed Factory
//!
//! Pick an implementation from a discriminator key, with a fallback,
//! declaratively instead of through a chain of conditionals.
//!
//! Candidates are tried in call order and the first key equal to the
//! subject wins; later candidates are ignored. The chain ends with
//! [`otherwise`](ResolutionBuilder::otherwise), which falls back to a
//! default, or [`otherwise_throw`](ResolutionBuilder::otherwise_throw),
//! which fails with a caller-supplied error.
//!
//! ## Example
//!
//! ```
//! use kf::{Resolvable, TypeRef, make};
//!
//! trait Shape {
//!     fn sides(&self) -> u32;
//! }
//!
//! #[derive(Default)]
//! struct Triangle;
//! impl Shape for Triangle {
//!     fn sides(&self) -> u32 { 3 }
//! }
//!
//! #[derive(Default)]
//! struct Square;
//! impl Shape for Square {
//!     fn sides(&self) -> u32 { 4 }
//! }
//!
//! let shape: Box<dyn Shape> = make("square")
//!     .resolve("triangle", TypeRef::new("Triangle", || Box::new(Triangle) as Box<dyn Shape>))
//!     .resolve("square", TypeRef::new("Square", || Box::new(Square) as Box<dyn Shape>))
//!     .otherwise(Resolvable::factory(|key: &&str| -> Box<dyn Shape> {
//!         panic!("no shape named {key}")
//!     }));
//!
//! assert_eq!(shape.sides(), 4);
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Resolution builder, resolvables, strategies, domain errors
//! - `infrastructure` - Process-wide strategies, configuration, logging

/// Domain layer - resolution builder and types
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use kf_domain::*;
}

/// Infrastructure layer - global strategies, config, and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use kf_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the process-wide entry points at the crate root
pub use infrastructure::{
    configure_instantiation, global_context, is_instantiation_configured, make,
    reset_instantiation,
};
