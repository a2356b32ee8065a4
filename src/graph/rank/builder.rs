// src/graph/rank/builder.rs
//! Graph construction: candidate enumeration and edge weighting.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::graph::{CandidateGraph, CandidateNode, WeightMatrix};
use crate::context::ContextScaler;
use crate::lexicon::{KnowledgeSource, SenseId, SenseResolver};
use crate::similarity::{self, SimilarityCache, SimilarityMetric};
use crate::window::{Occurrence, WindowWord};

/// The slice of engine configuration the builder reads.
#[derive(Debug, Clone, Copy)]
pub struct BuildParams {
    pub metric: SimilarityMetric,
    pub max_candidates: usize,
    pub max_node_distance: usize,
}

/// Materializes one node per (occurrence, sense) pair in window order.
/// Words without candidates contribute nothing; a repeated window entry for
/// the same occurrence does not duplicate nodes.
#[must_use]
pub fn collect_nodes<K: KnowledgeSource>(
    window: &[WindowWord],
    resolver: &SenseResolver<K>,
    max_candidates: usize,
) -> Vec<CandidateNode> {
    let mut groups: HashMap<&Occurrence, usize> = HashMap::new();
    let mut seen: HashSet<(SenseId, &Occurrence)> = HashSet::new();
    let mut nodes = Vec::new();

    for word in window {
        let senses = resolver.candidates(word, max_candidates);
        if senses.is_empty() {
            debug!("no candidate senses for {}", word.occurrence);
            continue;
        }
        let next_group = groups.len();
        let group = *groups.entry(&word.occurrence).or_insert(next_group);
        for sense in senses {
            if seen.insert((sense, &word.occurrence)) {
                nodes.push(CandidateNode {
                    sense,
                    occurrence: word.occurrence.clone(),
                    group,
                });
            }
        }
    }
    nodes
}

/// Builds the weighted candidate graph for a window.
#[must_use]
pub fn build<K: KnowledgeSource>(
    window: &[WindowWord],
    resolver: &SenseResolver<K>,
    cache: &SimilarityCache,
    scaler: ContextScaler<'_>,
    params: BuildParams,
) -> CandidateGraph {
    let nodes = collect_nodes(window, resolver, params.max_candidates);
    if nodes.is_empty() {
        return CandidateGraph::empty();
    }

    let weights = weigh_edges(&nodes, resolver, cache, scaler, params);
    let graph = CandidateGraph::new(nodes, weights);
    debug!(
        "built graph: {} nodes, {} edges, {} isolated",
        graph.len(),
        graph.edge_count(),
        graph.isolated_count()
    );
    graph
}

fn weigh_edges<K: KnowledgeSource>(
    nodes: &[CandidateNode],
    resolver: &SenseResolver<K>,
    cache: &SimilarityCache,
    scaler: ContextScaler<'_>,
    params: BuildParams,
) -> WeightMatrix {
    let mut weights = WeightMatrix::zeros(nodes.len());

    for (i, a) in nodes.iter().enumerate() {
        let window_end = i.saturating_add(params.max_node_distance).min(nodes.len());
        for (j, b) in nodes.iter().enumerate().take(window_end).skip(i + 1) {
            if a.group == b.group {
                continue;
            }
            let scale = scaler.scale(&a.occurrence, &b.occurrence);
            if scale <= 0.0 {
                continue;
            }
            let sim = cache.get_or_insert_with(params.metric, a.sense, b.sense, || {
                similarity::score(params.metric, a.sense, b.sense, resolver)
            });
            let w = scale * sim;
            if w > 0.0 && w.is_finite() {
                weights.set_symmetric(i, j, w);
            }
        }
    }
    weights
}
