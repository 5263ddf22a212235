//! Infrastructure layer constants
//!
//! Domain-specific constants are defined in `kf_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "KF";

/// Separator between nested keys in environment variable names
/// (`KF_LOGGING__LEVEL` sets `logging.level`)
pub const ENV_NESTING_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "KF_LOG";

/// Default log file stem when the configured path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "kf";

/// Tracing target for process-wide context events
pub const GLOBAL_TRACE_TARGET: &str = "kf::global";
