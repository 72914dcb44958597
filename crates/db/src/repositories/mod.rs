//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod blacklist_repo;
pub mod host_repo;
pub mod service_repo;
pub mod service_set_repo;
pub mod zone_repo;

pub use blacklist_repo::BlacklistRepo;
pub use host_repo::HostRepo;
pub use service_repo::ServiceRepo;
pub use service_set_repo::ServiceSetRepo;
pub use zone_repo::ZoneRepo;
