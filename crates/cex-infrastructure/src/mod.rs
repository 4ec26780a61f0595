//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns of the concept explorer.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Layered configuration (defaults, TOML, environment) |
//! | [`logging`] | Structured logging with tracing |
//! | [`di`] | Composition root resolving providers from the registries |
//! | [`error_ext`] | Context helpers converting foreign errors to domain errors |
//! | [`constants`] | Infrastructure defaults |

// Force linkme registration of all providers
extern crate cex_providers;

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use di::{AppContext, init_app};
pub use error_ext::ErrorContext;
