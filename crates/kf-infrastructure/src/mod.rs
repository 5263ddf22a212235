//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns around the resolution builder.
//!
//! ## Module Categories
//!
//! ### Resolution
//! | Module | Description |
//! |--------|-------------|
//! | [`global`] | Process-wide instantiation strategies and the `make` entry point |
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment configuration: defaults, TOML, environment |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |

pub mod config;
pub mod constants;
pub mod error_ext;
pub mod global;
pub mod logging;

pub use error_ext::ErrorContext;
pub use global::{
    configure_instantiation, global_context, is_instantiation_configured, make,
    reset_instantiation,
};
