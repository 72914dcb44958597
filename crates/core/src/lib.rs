//! Pure domain logic for the setforge service-set compiler.
//!
//! Everything in this crate is synchronous and free of I/O:
//!
//! - [`key`] — identity-key parsing for service sets.
//! - [`vars`] — custom-variable maps and the non-destructive overlay merge.
//! - [`zones`] — zone partitioning for the legacy dialect.
//! - [`emit`] — output paths and header comments for both dialects.
//! - [`error`] — the validation/parsing error taxonomy.

pub mod emit;
pub mod error;
pub mod key;
pub mod types;
pub mod vars;
pub mod zones;
