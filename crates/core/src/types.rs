/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// An abstract template, not bound to any host.
pub const OBJECT_TYPE_TEMPLATE: &str = "template";
/// A concrete object statically bound to a single host.
pub const OBJECT_TYPE_OBJECT: &str = "object";
/// A dynamically assigned object whose hosts are matched by filter.
pub const OBJECT_TYPE_APPLY: &str = "apply";
