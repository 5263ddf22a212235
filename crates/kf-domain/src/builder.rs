//! Resolution builder
//!
//! Resolves a value for a subject key by trying candidate `(key, resolvable)`
//! pairs in call order. The first candidate whose key equals the subject is
//! recorded; every later `resolve` call is a no-op. A terminal call then turns
//! the recorded resolvable, or the fallback when nothing matched, into a value.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use kf_domain::{Resolvable, ResolutionBuilder, ResolutionContext};
//!
//! let context = Arc::new(ResolutionContext::new());
//! let greeting: String = ResolutionBuilder::create("fr", context)
//!     .resolve("en", Resolvable::value("hello".to_string()))
//!     .resolve_map([
//!         ("fr", Resolvable::value("bonjour".to_string())),
//!         ("de", Resolvable::value("hallo".to_string())),
//!     ])
//!     .otherwise(Resolvable::factory(|key: &&str| format!("?{key}")));
//!
//! assert_eq!(greeting, "bonjour");
//! ```

use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::constants::RESOLUTION_TRACE_TARGET;
use crate::context::{ResolutionContext, SharedStrategy};
use crate::error::{Error, Result};
use crate::resolvable::Resolvable;

/// Fluent first-match-wins resolver for a single subject key
#[must_use = "a resolution chain does nothing until `otherwise` or `otherwise_throw` is called"]
pub struct ResolutionBuilder<'a, K, V> {
    subject: K,
    resolvable: Option<Resolvable<'a, K, V>>,
    context: Arc<ResolutionContext<V>>,
}

impl<'a, K, V> ResolutionBuilder<'a, K, V> {
    /// Start a chain for `subject`, instantiating through `context`
    pub fn create(subject: K, context: Arc<ResolutionContext<V>>) -> Self {
        Self {
            subject,
            resolvable: None,
            context,
        }
    }

    /// Start a chain with a private, unconfigured context
    pub fn detached(subject: K) -> Self {
        Self::create(subject, Arc::new(ResolutionContext::new()))
    }

    /// The key being resolved
    pub fn subject(&self) -> &K {
        &self.subject
    }

    /// Whether a candidate has already matched
    pub fn has_resolved(&self) -> bool {
        self.resolvable.is_some()
    }

    /// Record `resolvable` if `key` equals the subject and nothing matched yet
    pub fn resolve<Q, R>(mut self, key: Q, resolvable: R) -> Self
    where
        K: PartialEq<Q>,
        R: Into<Resolvable<'a, K, V>>,
    {
        if self.has_resolved() {
            return self;
        }

        if self.subject == key {
            trace!(target: RESOLUTION_TRACE_TARGET, shape = "key", "Candidate matched subject");
            self.resolvable = Some(resolvable.into());
        }

        self
    }

    /// Record the mapping's entry for the subject if nothing matched yet
    ///
    /// When the mapping yields several entries for the subject, the first
    /// one wins. A mapping without an entry for the subject is a non-match.
    pub fn resolve_map<I, Q, R>(mut self, mapping: I) -> Self
    where
        I: IntoIterator<Item = (Q, R)>,
        K: PartialEq<Q>,
        R: Into<Resolvable<'a, K, V>>,
    {
        if self.has_resolved() {
            return self;
        }

        let subject = &self.subject;
        if let Some((_, resolvable)) = mapping.into_iter().find(|(key, _)| *subject == *key) {
            trace!(target: RESOLUTION_TRACE_TARGET, shape = "mapping", "Candidate matched subject");
            self.resolvable = Some(resolvable.into());
        }

        self
    }

    /// Finish the chain, resolving `fallback` when nothing matched
    pub fn otherwise<R>(self, fallback: R) -> V
    where
        R: Into<Resolvable<'a, K, V>>,
    {
        let strategy = self.context.strategy();
        match self.resolvable {
            Some(resolvable) => realize(&self.subject, &strategy, resolvable),
            None => {
                trace!(target: RESOLUTION_TRACE_TARGET, "No candidate matched, using fallback");
                realize(&self.subject, &strategy, fallback.into())
            }
        }
    }

    /// Finish the chain, failing with `fallback` when nothing matched
    ///
    /// A factory fallback is invoked with the subject key and its result
    /// becomes the error. A type fallback is constructed directly, without
    /// going through the instantiation strategy. When a candidate matched,
    /// this behaves exactly like [`otherwise`](Self::otherwise).
    pub fn otherwise_throw<E, R>(self, fallback: R) -> std::result::Result<V, E>
    where
        E: std::error::Error,
        R: Into<Resolvable<'a, K, E>>,
    {
        let strategy = self.context.strategy();
        match self.resolvable {
            Some(resolvable) => Ok(realize(&self.subject, &strategy, resolvable)),
            None => {
                trace!(target: RESOLUTION_TRACE_TARGET, "No candidate matched, failing");
                Err(match fallback.into() {
                    Resolvable::Factory(factory) => factory(&self.subject),
                    Resolvable::Type(type_ref) => type_ref.construct(),
                })
            }
        }
    }

    /// Finish the chain, failing with [`Error::Unresolved`] when nothing matched
    ///
    /// The error carries the `Debug` rendering of the subject key.
    pub fn otherwise_unresolved(self) -> Result<V>
    where
        K: fmt::Debug,
    {
        self.otherwise_throw(Resolvable::factory(|key: &K| {
            Error::unresolved(format!("{key:?}"))
        }))
    }
}

fn realize<K, V>(
    subject: &K,
    strategy: &SharedStrategy<V>,
    resolvable: Resolvable<'_, K, V>,
) -> V {
    match resolvable {
        Resolvable::Factory(factory) => factory(subject),
        Resolvable::Type(type_ref) => strategy.instantiate(&type_ref),
    }
}

impl<K: fmt::Debug, V> fmt::Debug for ResolutionBuilder<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolutionBuilder")
            .field("subject", &self.subject)
            .field("resolvable", &self.resolvable)
            .field("context", &self.context)
            .finish()
    }
}
