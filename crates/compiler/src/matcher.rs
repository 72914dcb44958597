//! Host matching for assign filters.
//!
//! The full filter language belongs to an external evaluator; the
//! compiler only needs the [`HostMatcher`] seam. [`VarEqualsMatcher`]
//! implements the small `host.vars.<key>=<value>` subset (terms joined by
//! `&`) so a compile run works end to end without that collaborator.

use setforge_db::models::Host;

use crate::error::CompileError;

/// Evaluates an assign filter against the host inventory.
pub trait HostMatcher: Send + Sync {
    /// The names of all hosts matching `filter`, in inventory order.
    fn matching_hosts(&self, filter: &str, inventory: &[Host])
        -> Result<Vec<String>, CompileError>;
}

/// Minimal equality matcher over host custom variables.
#[derive(Debug, Default)]
pub struct VarEqualsMatcher;

struct VarEqualsTerm {
    key: String,
    value: String,
}

impl VarEqualsTerm {
    fn parse(term: &str) -> Result<Self, CompileError> {
        let (lhs, value) = term
            .split_once('=')
            .ok_or_else(|| CompileError::Match(format!("missing '=' in term: {term}")))?;
        let key = lhs
            .strip_prefix("host.vars.")
            .ok_or_else(|| CompileError::Match(format!("unsupported property: {lhs}")))?;
        if key.is_empty() {
            return Err(CompileError::Match(format!("empty property in: {term}")));
        }
        Ok(Self {
            key: key.to_string(),
            value: value.to_string(),
        })
    }

    fn matches(&self, host: &Host) -> bool {
        match host.vars().get(&self.key) {
            Some(serde_json::Value::String(s)) => s == &self.value,
            Some(other) => other.to_string() == self.value,
            None => false,
        }
    }
}

impl HostMatcher for VarEqualsMatcher {
    fn matching_hosts(
        &self,
        filter: &str,
        inventory: &[Host],
    ) -> Result<Vec<String>, CompileError> {
        // Parse once, evaluate against every host.
        let terms = filter
            .split('&')
            .map(VarEqualsTerm::parse)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(inventory
            .iter()
            .filter(|host| terms.iter().all(|term| term.matches(host)))
            .map(|host| host.object_name.clone())
            .collect())
    }
}
