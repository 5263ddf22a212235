//! Process-wide resolution contexts
//!
//! One [`ResolutionContext`] per value type, shared by every builder created
//! through [`make`]. Configuring the strategy for `V` affects all of those
//! builders, including ones already in flight. Writers racing on the same
//! slot get last-write-wins.
//!
//! ## Example
//!
//! ```
//! use kf_domain::TypeRef;
//! use kf_infrastructure::global::{configure_instantiation, make, reset_instantiation};
//!
//! #[derive(Debug, PartialEq)]
//! struct Label(&'static str);
//!
//! configure_instantiation(|type_ref: &TypeRef<Label>| Label(type_ref.name()));
//!
//! let label: Label = make("b")
//!     .resolve("a", TypeRef::new("Alpha", || Label("alpha")))
//!     .resolve("b", TypeRef::new("Beta", || Label("beta")))
//!     .otherwise(TypeRef::new("Other", || Label("other")));
//! assert_eq!(label, Label("Beta"));
//!
//! reset_instantiation::<Label>();
//! ```

use std::any::{Any, TypeId};
use std::sync::{Arc, LazyLock};

use dashmap::DashMap;
use kf_domain::{InstantiationStrategy, ResolutionBuilder, ResolutionContext};
use tracing::debug;

use crate::constants::GLOBAL_TRACE_TARGET;

type ErasedContext = Arc<dyn Any + Send + Sync>;

static CONTEXTS: LazyLock<DashMap<TypeId, ErasedContext>> = LazyLock::new(DashMap::new);

/// Shared context for value type `V`, created unconfigured on first use
pub fn global_context<V: 'static>() -> Arc<ResolutionContext<V>> {
    let erased = CONTEXTS
        .entry(TypeId::of::<V>())
        .or_insert_with(|| {
            debug!(
                target: GLOBAL_TRACE_TARGET,
                value_type = std::any::type_name::<V>(),
                "Created process-wide resolution context"
            );
            let context: ErasedContext = Arc::new(ResolutionContext::<V>::new());
            context
        })
        .value()
        .clone();

    match erased.downcast::<ResolutionContext<V>>() {
        Ok(context) => context,
        Err(_) => unreachable!(
            "context registry entry for {} holds a different type",
            std::any::type_name::<V>()
        ),
    }
}

/// Replace the process-wide strategy for value type `V`
pub fn configure_instantiation<V, S>(strategy: S)
where
    V: 'static,
    S: InstantiationStrategy<V> + 'static,
{
    global_context::<V>().configure_instantiation(strategy);
    debug!(
        target: GLOBAL_TRACE_TARGET,
        value_type = std::any::type_name::<V>(),
        "Configured process-wide instantiation strategy"
    );
}

/// Clear the process-wide strategy for `V`, restoring the lazy default
pub fn reset_instantiation<V: 'static>() {
    global_context::<V>().reset();
}

/// Whether a strategy is installed for `V`
pub fn is_instantiation_configured<V: 'static>() -> bool {
    global_context::<V>().is_configured()
}

/// Start a resolution chain for `subject` bound to the process-wide context
pub fn make<'a, K, V: 'static>(subject: K) -> ResolutionBuilder<'a, K, V> {
    ResolutionBuilder::create(subject, global_context::<V>())
}
