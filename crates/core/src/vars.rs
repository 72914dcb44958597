//! Custom-variable maps and the overlay merge.
//!
//! Variables are stored as JSONB in the database; this module converts
//! between the raw column value and an ordered map, and implements the
//! non-destructive overlay a service set applies to each of its members.

use std::collections::BTreeMap;

/// Custom variables of a set, service or host, ordered by name.
pub type VarMap = BTreeMap<String, serde_json::Value>;

/// Decode a JSONB column into a [`VarMap`].
///
/// Anything that is not a JSON object (including `null`) decodes to an
/// empty map.
pub fn from_json(value: &serde_json::Value) -> VarMap {
    match value {
        serde_json::Value::Object(map) => map.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
        _ => VarMap::new(),
    }
}

/// Encode a [`VarMap`] back into a JSONB column value.
pub fn to_json(vars: &VarMap) -> serde_json::Value {
    serde_json::Value::Object(vars.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
}

/// Merge a set's variables onto a member's variables.
///
/// Returns a new map; neither input is modified. Keys present on both
/// sides take the set's value.
pub fn overlay(set_vars: &VarMap, member_vars: &VarMap) -> VarMap {
    let mut merged = member_vars.clone();
    for (key, value) in set_vars {
        merged.insert(key.clone(), value.clone());
    }
    merged
}
