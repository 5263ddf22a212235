//! Domain layer constants
//!
//! Infrastructure-specific constants (config file names, env prefixes)
//! live in `kf_infrastructure::constants`.

// ============================================================================
// TRACING TARGETS
// ============================================================================

/// Tracing target for resolution chain events (matches, fallbacks)
pub const RESOLUTION_TRACE_TARGET: &str = "kf::resolution";

/// Tracing target for instantiation strategy events
pub const STRATEGY_TRACE_TARGET: &str = "kf::strategy";

// ============================================================================
// TYPE NAMES
// ============================================================================

/// Separator between path segments in a Rust type name
pub const TYPE_PATH_SEPARATOR: &str = "::";
