//! Resolvables: what a matching key resolves to

use std::fmt;

use crate::type_ref::TypeRef;

/// Boxed factory invoked with the subject key
pub type Factory<'a, K, V> = Box<dyn FnOnce(&K) -> V + 'a>;

/// Either a type reference to instantiate or a factory to invoke
///
/// Type references go through the instantiation strategy of the builder's
/// context; factories are called with the subject key and their return value
/// is used as-is.
pub enum Resolvable<'a, K, V> {
    /// Instantiate through the strategy
    Type(TypeRef<V>),
    /// Invoke with the subject key
    Factory(Factory<'a, K, V>),
}

impl<'a, K, V> Resolvable<'a, K, V> {
    /// Reference `T`, built through `Default` and converted into `V`
    pub fn of<T>() -> Self
    where
        T: Default + Into<V>,
    {
        Self::Type(TypeRef::of::<T>())
    }

    /// Wrap an existing type reference
    pub fn of_type(type_ref: TypeRef<V>) -> Self {
        Self::Type(type_ref)
    }

    /// Wrap a factory taking the subject key
    pub fn factory<F>(f: F) -> Self
    where
        F: FnOnce(&K) -> V + 'a,
    {
        Self::Factory(Box::new(f))
    }

    /// Wrap an already-built value; the subject key is ignored
    pub fn value(value: V) -> Self
    where
        V: 'a,
    {
        Self::Factory(Box::new(move |_: &K| value))
    }

    /// Whether this is invoked rather than instantiated
    pub fn is_factory(&self) -> bool {
        matches!(self, Self::Factory(_))
    }
}

impl<K, V> From<TypeRef<V>> for Resolvable<'_, K, V> {
    fn from(type_ref: TypeRef<V>) -> Self {
        Self::Type(type_ref)
    }
}

impl<K, V> fmt::Debug for Resolvable<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type(type_ref) => f.debug_tuple("Type").field(&type_ref.name()).finish(),
            Self::Factory(_) => f.write_str("Factory"),
        }
    }
}
