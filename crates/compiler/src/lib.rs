//! The setforge compiler.
//!
//! Turns database-resident service-set definitions into monitoring config
//! text, in one of two dialects:
//!
//! - [`renderer::ConfigRenderer`] — orchestrates the per-set pipeline:
//!   resolve members, decide assignment, overlay variables, emit.
//! - [`resolver`] — which concrete services belong to a set.
//! - [`assignment`] — filter-driven apply vs. static host binding.
//! - [`lifecycle`] — pre-store validation and the deletion cascade.
//! - [`store::ConfigStore`] — the query surface, implemented over Postgres
//!   by [`store::PgStore`] and by in-memory fakes in tests.

pub mod assignment;
pub mod error;
pub mod lifecycle;
pub mod matcher;
pub mod output;
pub mod renderer;
pub mod resolver;
pub mod store;

pub use error::CompileError;
pub use matcher::{HostMatcher, VarEqualsMatcher};
pub use output::{ConfigFile, ConfigOutput};
pub use renderer::ConfigRenderer;
pub use store::{ConfigStore, PgStore};
