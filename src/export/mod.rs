//! GraphViz export: serialize a building model as a `strict graph`.
//!
//! Produces a dot script focused on an interest set, plus the set of
//! neighbours that a follow-up export would need to grow the view by one hop.
//!
//! ```text
//! model → nodes (classify, register) → edges (decompose, filter)
//!       → clusters (decomposition walk from each IfcSite) → dot text
//!                                     ↘ next-interest
//! ```
//!
//! A model that is only partly understood still exports: unknown
//! relationship kinds and edges to unregistered entities are skipped.

mod cluster;
mod dot;
mod registry;

use std::io::{self, Write};

use tracing::{debug, info, trace};

use crate::classify::classify;
use crate::config::DotConfig;
use crate::decompose::decompose;
use crate::interest::{filter_edge, InterestSet, Verdict};
use crate::storage::ModelBackend;
use crate::Result;
use cluster::ClusterEmitter;
use registry::{Registry, RegistryBuilder};

/// Counters for one export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportStats {
    pub nodes_registered: usize,
    pub nodes_written: usize,
    pub virtual_skipped: usize,
    pub edges_written: usize,
    pub edges_deferred: usize,
    pub relationships_skipped: usize,
    pub clusters_written: usize,
}

/// Result of one export.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DotOutput {
    /// Interest set for the next round: the input set plus every entity one
    /// edge away from it.
    pub next_interest: InterestSet,
    pub stats: ExportStats,
}

/// Export with the default configuration; returns next-interest.
pub fn write_dot<B: ModelBackend + ?Sized>(
    backend: &B,
    writer: &mut dyn Write,
    interest: &InterestSet,
) -> Result<InterestSet> {
    Ok(write_dot_with(backend, writer, interest, &DotConfig::default())?.next_interest)
}

/// Export a model as a dot script.
///
/// With an empty `interest` every object and every recognised relationship
/// is drawn. Otherwise only entities in `interest` are drawn, only edges
/// with both ends in `interest` are kept, and edges with one end in it put
/// the other end into [`DotOutput::next_interest`].
pub fn write_dot_with<B: ModelBackend + ?Sized>(
    backend: &B,
    writer: &mut dyn Write,
    interest: &InterestSet,
    config: &DotConfig,
) -> Result<DotOutput> {
    let mut stats = ExportStats::default();
    let mut next_interest = interest.clone();

    dot::write_header(writer, &config.graph)?;

    let registry = write_nodes(backend, writer, interest, config, &mut stats)?;
    write_edges(backend, writer, interest, &registry, &mut next_interest, &mut stats)?;

    let mut emitter = ClusterEmitter::new(backend, &registry, interest, &config.virtual_type);
    for root in backend.entities_of_type(&config.cluster_root_type)? {
        emitter.emit(writer, &root)?;
    }
    stats.clusters_written = emitter.clusters_written;

    dot::write_footer(writer)?;

    info!(
        nodes = stats.nodes_written,
        edges = stats.edges_written,
        clusters = stats.clusters_written,
        interest = interest.len(),
        next_interest = next_interest.len(),
        "wrote dot graph"
    );

    Ok(DotOutput { next_interest, stats })
}

/// Node pass: register every non-virtual object, write the admitted ones.
fn write_nodes<B: ModelBackend + ?Sized>(
    backend: &B,
    writer: &mut dyn Write,
    interest: &InterestSet,
    config: &DotConfig,
    stats: &mut ExportStats,
) -> Result<Registry> {
    let mut builder = RegistryBuilder::new();

    for entity in backend.entities_of_type(&config.object_type)? {
        if entity.is_a(&config.virtual_type) {
            stats.virtual_skipped += 1;
            continue;
        }

        let label = builder.register(&entity);
        stats.nodes_registered += 1;

        if !interest.admits(entity.id) {
            continue;
        }

        let fill = config.palette.color(classify(&entity));
        dot::write_node(writer, label, fill)?;
        stats.nodes_written += 1;
    }

    let registry = builder.freeze();
    debug!(registered = registry.len(), virtual_skipped = stats.virtual_skipped, "node pass done");
    Ok(registry)
}

/// Edge pass: decompose relationships, filter each pair by interest.
fn write_edges<B: ModelBackend + ?Sized>(
    backend: &B,
    writer: &mut dyn Write,
    interest: &InterestSet,
    registry: &Registry,
    next_interest: &mut InterestSet,
    stats: &mut ExportStats,
) -> Result<()> {
    for rel in backend.relationships()? {
        let Some(shape) = decompose(&rel) else {
            trace!(id = %rel.id, type_name = %rel.type_name, "relationship contributes no edges");
            stats.relationships_skipped += 1;
            continue;
        };

        let Some(relating_label) = registry.label(shape.relating) else {
            trace!(id = %rel.id, relating = %shape.relating, "relating end not registered");
            continue;
        };

        for related in shape.related.iter().copied() {
            let Some(related_label) = registry.label(related) else {
                continue;
            };

            match filter_edge(interest, shape.relating, related) {
                Verdict::Keep => {
                    dot::write_edge(writer, relating_label, related_label, shape.weight, shape.style)?;
                    stats.edges_written += 1;
                }
                Verdict::Drop => {}
                Verdict::Defer(id) => {
                    next_interest.insert(id);
                    stats.edges_deferred += 1;
                }
            }
        }
    }
    Ok(())
}

// ============================================================================
// Interest expansion
// ============================================================================

/// Outcome of [`expand_interest`].
#[derive(Debug, Clone, PartialEq)]
pub struct Expansion {
    pub interest: InterestSet,
    /// Exports performed.
    pub rounds: usize,
    /// False if `max_rounds` stopped the loop before the set stopped growing.
    pub converged: bool,
}

/// Grow `seed` by feeding each export's next-interest into the next export,
/// until the set stops growing or `max_rounds` exports have run. Nothing is
/// written anywhere.
///
/// An empty seed means "everything" and is returned unchanged.
pub fn expand_interest<B: ModelBackend + ?Sized>(
    backend: &B,
    seed: &InterestSet,
    config: &DotConfig,
    max_rounds: Option<usize>,
) -> Result<Expansion> {
    let mut current = seed.clone();
    let mut rounds = 0;

    loop {
        if max_rounds.is_some_and(|max| rounds >= max) {
            return Ok(Expansion { interest: current, rounds, converged: false });
        }
        let next = write_dot_with(backend, &mut io::sink(), &current, config)?.next_interest;
        rounds += 1;
        debug!(round = rounds, size = next.len(), "expanded interest");
        if next.len() == current.len() {
            return Ok(Expansion { interest: next, rounds, converged: true });
        }
        current = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EntityId, Relationship};
    use crate::storage::MemoryModel;

    fn chain() -> MemoryModel {
        // 1 -- 2 -- 3 -- 4 (walls joined end to end)
        let model = MemoryModel::new();
        for id in 1..=4 {
            model.insert_entity(id, "IfcWall");
        }
        for (rel, a, b) in [(10, 1, 2), (11, 2, 3), (12, 3, 4)] {
            model.add_relationship(
                Relationship::new(rel, "IfcRelConnectsPathElements")
                    .with_attribute("RelatingElement", EntityId(a))
                    .with_attribute("RelatedElement", EntityId(b)),
            );
        }
        model
    }

    #[test]
    fn test_stats_unfiltered() {
        let model = chain();
        let out = write_dot_with(&model, &mut io::sink(), &InterestSet::new(), &DotConfig::default())
            .unwrap();
        assert_eq!(out.stats.nodes_written, 4);
        assert_eq!(out.stats.edges_written, 3);
        assert_eq!(out.stats.edges_deferred, 0);
        assert!(out.next_interest.is_empty());
    }

    #[test]
    fn test_one_hop_per_round() {
        let model = chain();
        let config = DotConfig::default();

        let one = expand_interest(&model, &InterestSet::from([1]), &config, Some(1)).unwrap();
        assert_eq!(one.interest, InterestSet::from([1, 2]));
        assert!(!one.converged);

        let all = expand_interest(&model, &InterestSet::from([1]), &config, None).unwrap();
        assert_eq!(all.interest, InterestSet::from([1, 2, 3, 4]));
        assert!(all.converged);
        // Three growing rounds plus the one that confirms the fixpoint.
        assert_eq!(all.rounds, 4);
    }

    #[test]
    fn test_empty_seed_stays_empty() {
        let model = chain();
        let out = expand_interest(&model, &InterestSet::new(), &DotConfig::default(), None).unwrap();
        assert!(out.interest.is_empty());
        assert_eq!(out.rounds, 1);
    }

    #[test]
    fn test_zero_rounds() {
        let model = chain();
        let out = expand_interest(&model, &InterestSet::from([2]), &DotConfig::default(), Some(0))
            .unwrap();
        assert_eq!(out.interest, InterestSet::from([2]));
        assert_eq!(out.rounds, 0);
    }
}
