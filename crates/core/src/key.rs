//! Identity keys for service sets.
//!
//! A set is addressed either by its numeric id, by its template name, or by
//! a `host!name` composite naming a host-bound instance.

use crate::error::CoreError;
use crate::types::DbId;

/// Parsed identity of a service set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectKey {
    /// An existing row addressed by primary key.
    Id(DbId),
    /// A free-standing template addressed by its unique object name.
    TemplateName(String),
    /// A host-bound instance addressed as `<host>!<set name>`.
    HostServiceSet { host: String, name: String },
}

/// Parse a textual identity key.
///
/// Integer keys resolve to [`ObjectKey::Id`]. A string without a `!`
/// separator is a template name; exactly two non-empty components form a
/// host-bound composite. Everything else is a malformed key.
pub fn parse_key(key: &str) -> Result<ObjectKey, CoreError> {
    if let Ok(id) = key.parse::<DbId>() {
        return Ok(ObjectKey::Id(id));
    }

    let components: Vec<&str> = key.split('!').collect();
    match components.as_slice() {
        [name] if !name.is_empty() => Ok(ObjectKey::TemplateName((*name).to_string())),
        [host, name] if !host.is_empty() && !name.is_empty() => Ok(ObjectKey::HostServiceSet {
            host: (*host).to_string(),
            name: (*name).to_string(),
        }),
        _ => Err(CoreError::MalformedKey(key.to_string())),
    }
}
