//! Resolution context
//!
//! Holds the instantiation strategy shared by every builder created from it.
//! The slot starts unset; the first resolution that needs it installs
//! [`ConstructStrategy`] and later resolutions reuse whatever is installed.
//! Reconfiguring the slot affects builders that already exist, since they
//! read it only when their terminal call runs.

use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwapOption;
use tracing::debug;

use crate::constants::STRATEGY_TRACE_TARGET;
use crate::strategy::{ConstructStrategy, InstantiationStrategy};
use crate::type_ref::TypeRef;

/// Shared handle to an installed strategy
pub type SharedStrategy<V> = Arc<Box<dyn InstantiationStrategy<V>>>;

/// Swappable, lazily-defaulted instantiation strategy slot
pub struct ResolutionContext<V> {
    strategy: ArcSwapOption<Box<dyn InstantiationStrategy<V>>>,
}

impl<V> ResolutionContext<V> {
    /// Create a context with no strategy configured
    pub fn new() -> Self {
        Self {
            strategy: ArcSwapOption::empty(),
        }
    }

    /// Create a context with `strategy` already configured
    pub fn with_strategy<S>(strategy: S) -> Self
    where
        S: InstantiationStrategy<V> + 'static,
    {
        let context = Self::new();
        context.configure_instantiation(strategy);
        context
    }

    /// Replace the configured strategy
    pub fn configure_instantiation<S>(&self, strategy: S)
    where
        S: InstantiationStrategy<V> + 'static,
    {
        let boxed: Box<dyn InstantiationStrategy<V>> = Box::new(strategy);
        self.strategy.store(Some(Arc::new(boxed)));
    }

    /// Return to the unset state so the next resolution installs the default
    pub fn reset(&self) {
        self.strategy.store(None);
    }

    /// Whether a strategy is currently installed
    pub fn is_configured(&self) -> bool {
        self.strategy.load().is_some()
    }

    /// Current strategy, installing [`ConstructStrategy`] first if unset
    ///
    /// The default only fills an empty slot; a strategy configured
    /// concurrently is kept and returned instead.
    pub fn strategy(&self) -> SharedStrategy<V> {
        if let Some(strategy) = self.strategy.load_full() {
            return strategy;
        }

        let boxed: Box<dyn InstantiationStrategy<V>> = Box::new(ConstructStrategy);
        let default = Arc::new(boxed);
        let previous = self
            .strategy
            .compare_and_swap(&None::<SharedStrategy<V>>, Some(Arc::clone(&default)));

        match &*previous {
            Some(current) => Arc::clone(current),
            None => {
                debug!(
                    target: STRATEGY_TRACE_TARGET,
                    value_type = std::any::type_name::<V>(),
                    "Installed default construct strategy"
                );
                default
            }
        }
    }

    /// Instantiate `type_ref` through the current strategy
    pub fn instantiate(&self, type_ref: &TypeRef<V>) -> V {
        self.strategy().instantiate(type_ref)
    }
}

impl<V> Default for ResolutionContext<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for ResolutionContext<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolutionContext")
            .field("configured", &self.is_configured())
            .finish()
    }
}
