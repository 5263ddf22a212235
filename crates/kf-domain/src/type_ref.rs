//! Type references
//!
//! A [`TypeRef`] names a concrete type and knows how to build a no-argument
//! instance of it as the factory's value type `V`. Instantiation strategies
//! decide what to do with it; the default one simply calls [`TypeRef::construct`].

use std::fmt;

use crate::constants::TYPE_PATH_SEPARATOR;

/// A named, zero-argument constructor producing a `V`
///
/// # Example
///
/// ```
/// use kf_domain::TypeRef;
///
/// #[derive(Default)]
/// struct Circle;
///
/// let circle: TypeRef<Box<dyn std::any::Any>> =
///     TypeRef::new("Circle", || Box::new(Circle));
/// assert_eq!(circle.name(), "Circle");
///
/// let zero: TypeRef<u64> = TypeRef::of::<u8>();
/// assert_eq!(zero.construct(), 0);
/// ```
pub struct TypeRef<V> {
    name: &'static str,
    ctor: fn() -> V,
}

impl<V> TypeRef<V> {
    /// Create a type reference from an explicit name and constructor
    pub const fn new(name: &'static str, ctor: fn() -> V) -> Self {
        Self { name, ctor }
    }

    /// Reference `T`, building it through `Default` and converting into `V`
    pub fn of<T>() -> Self
    where
        T: Default + Into<V>,
    {
        Self {
            name: std::any::type_name::<T>(),
            ctor: construct_default::<T, V>,
        }
    }

    /// Full name of the referenced type
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Last path segment of the name, without generic arguments
    pub fn short_name(&self) -> &'static str {
        let base = self.name.split('<').next().unwrap_or(self.name);
        base.rsplit(TYPE_PATH_SEPARATOR).next().unwrap_or(base)
    }

    /// Build a fresh instance, bypassing any instantiation strategy
    pub fn construct(&self) -> V {
        (self.ctor)()
    }
}

fn construct_default<T, V>() -> V
where
    T: Default + Into<V>,
{
    T::default().into()
}

impl<V> Clone for TypeRef<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for TypeRef<V> {}

impl<V> PartialEq for TypeRef<V> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<V> Eq for TypeRef<V> {}

impl<V> fmt::Debug for TypeRef<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeRef").field(&self.name).finish()
    }
}

impl<V> fmt::Display for TypeRef<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
