//! Interest sets and the per-edge interest filter.
//!
//! A filtered export draws only edges whose two ends are both of interest.
//! An edge with exactly one end of interest is not drawn; its other end is
//! reported in the next-interest set so a follow-up export can show it.
//! Feeding next-interest back in grows the view one hop per round.

use std::fmt;

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::model::EntityId;

/// Set of entity ids a caller wants to see. Empty means "everything".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InterestSet {
    ids: HashSet<EntityId>,
}

impl InterestSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.ids.contains(&id)
    }

    /// Returns true if the id was not already present.
    pub fn insert(&mut self, id: EntityId) -> bool {
        self.ids.insert(id)
    }

    /// Whether an entity passes the filter: always when the set is empty.
    pub fn admits(&self, id: EntityId) -> bool {
        self.ids.is_empty() || self.ids.contains(&id)
    }

    pub fn is_superset(&self, other: &InterestSet) -> bool {
        self.ids.is_superset(&other.ids)
    }

    pub fn iter(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.ids.iter().copied()
    }

    /// Ids in ascending order, for stable output.
    pub fn to_sorted_vec(&self) -> Vec<EntityId> {
        let mut ids: Vec<EntityId> = self.iter().collect();
        ids.sort_unstable();
        ids
    }

    /// Parse a comma separated id list such as `12,#34, 56`.
    pub fn parse_list(input: &str) -> crate::Result<Self> {
        input
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.trim_start_matches('#')
                    .parse::<u64>()
                    .map(EntityId)
                    .map_err(|e| crate::Error::Config(format!("invalid entity id '{s}': {e}")))
            })
            .collect()
    }
}

impl FromIterator<EntityId> for InterestSet {
    fn from_iter<I: IntoIterator<Item = EntityId>>(iter: I) -> Self {
        Self { ids: iter.into_iter().collect() }
    }
}

impl<const N: usize> From<[u64; N]> for InterestSet {
    fn from(ids: [u64; N]) -> Self {
        ids.into_iter().map(EntityId).collect()
    }
}

impl Extend<EntityId> for InterestSet {
    fn extend<I: IntoIterator<Item = EntityId>>(&mut self, iter: I) {
        self.ids.extend(iter);
    }
}

impl fmt::Display for InterestSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, id) in self.to_sorted_vec().iter().enumerate() {
            if i > 0 { write!(f, ", ")?; }
            write!(f, "#{id}")?;
        }
        write!(f, "}}")
    }
}

/// Outcome of filtering one edge candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Draw the edge.
    Keep,
    /// Neither end is of interest.
    Drop,
    /// Exactly one end is of interest: skip the edge, grow next-interest by the other.
    Defer(EntityId),
}

/// Decide what happens to the edge `relating -- related`.
pub fn filter_edge(interest: &InterestSet, relating: EntityId, related: EntityId) -> Verdict {
    if interest.is_empty() {
        return Verdict::Keep;
    }
    match (interest.contains(relating), interest.contains(related)) {
        (false, false) => Verdict::Drop,
        (true, false) => Verdict::Defer(related),
        (false, true) => Verdict::Defer(relating),
        (true, true) => Verdict::Keep,
    }
}
