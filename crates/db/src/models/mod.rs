//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row, plus a `Deserialize` create DTO where rows are
//! inserted through the compiler.

pub mod blacklist;
pub mod host;
pub mod service;
pub mod service_set;
pub mod zone;

pub use blacklist::HostServiceBlacklistEntry;
pub use host::Host;
pub use service::Service;
pub use service_set::{CreateServiceSet, ServiceSet};
pub use zone::Zone;
