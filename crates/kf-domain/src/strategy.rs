//! Instantiation strategies
//!
//! A strategy turns a [`TypeRef`] into a concrete value. Closures of the
//! right shape are strategies too, so most callers never name the trait.

use crate::type_ref::TypeRef;

/// Converts a type reference into a concrete value
pub trait InstantiationStrategy<V>: Send + Sync {
    /// Produce a value for `type_ref`
    fn instantiate(&self, type_ref: &TypeRef<V>) -> V;
}

impl<V, F> InstantiationStrategy<V> for F
where
    F: Fn(&TypeRef<V>) -> V + Send + Sync,
{
    fn instantiate(&self, type_ref: &TypeRef<V>) -> V {
        self(type_ref)
    }
}

/// Default strategy: construct a no-argument instance of the referenced type
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstructStrategy;

impl<V> InstantiationStrategy<V> for ConstructStrategy {
    fn instantiate(&self, type_ref: &TypeRef<V>) -> V {
        type_ref.construct()
    }
}
