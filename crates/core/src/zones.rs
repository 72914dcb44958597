//! Zone partitioning for the legacy dialect.
//!
//! Legacy output files are physically segmented per zone, so matched hosts
//! have to be grouped by the zone they render into. The modern dialect
//! never needs this: it emits one apply object per set regardless of zone.

use std::collections::{BTreeMap, HashSet};

use crate::types::DbId;

/// Upper bound on zone parent-chain walks. Acyclic chains in practice are
/// only a handful of levels deep; anything beyond this is treated as a loop.
pub const MAX_ZONE_DEPTH: usize = 32;

/// Guards a walk up a zone parent chain.
///
/// The store layer drives the walk one parent edge at a time and records
/// each step here; a step that revisits a zone or pushes the chain past
/// [`MAX_ZONE_DEPTH`] is rejected and the walk must stop.
#[derive(Debug)]
pub struct ChainGuard {
    visited: HashSet<DbId>,
    depth: usize,
}

impl ChainGuard {
    pub fn new(start: DbId) -> Self {
        let mut visited = HashSet::new();
        visited.insert(start);
        Self { visited, depth: 0 }
    }

    /// Record a step to `parent`. Returns `false` when the chain loops or
    /// exceeds the depth bound.
    #[must_use]
    pub fn step(&mut self, parent: DbId) -> bool {
        self.depth += 1;
        self.depth <= MAX_ZONE_DEPTH && self.visited.insert(parent)
    }
}

/// Group hosts by zone, preserving the input order within each zone.
pub fn partition_by_zone<I>(hosts: I) -> BTreeMap<String, Vec<String>>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (zone, host) in hosts {
        groups.entry(zone).or_default().push(host);
    }
    groups
}
