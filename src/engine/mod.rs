//! Autoconfiguration engine facade and its configuration.
//!
//! [`Autoconfig`] pairs a shared [`ComponentRegistry`](crate::registry::ComponentRegistry)
//! with an [`EngineConfig`] and exposes the parse entry points. Each parse
//! gets its own walk state, so the engine itself is immutable and can be
//! shared across threads.

mod config;
mod runner;

pub use config::{ConfigError, DuplicatePropertyPolicy, EngineConfig};
pub use runner::Autoconfig;
