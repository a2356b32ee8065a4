// src/graph/rank/queries.rs
use crate::graph::rank::graph::CandidateGraph;
use crate::lexicon::SenseId;
use crate::window::Occurrence;

/// Highest-ranked sense among the target's nodes. Ties go to the node built
/// first, which is the knowledge source's more frequent sense. `None` when the
/// target has no nodes.
#[must_use]
pub fn select(target: &Occurrence, graph: &CandidateGraph, ranks: &[f64]) -> Option<SenseId> {
    let mut best: Option<(SenseId, f64)> = None;
    for i in graph.nodes_for(target) {
        let (Some(node), Some(&rank)) = (graph.nodes().get(i), ranks.get(i)) else {
            continue;
        };
        match best {
            Some((_, top)) if rank <= top => {}
            _ => best = Some((node.sense, rank)),
        }
    }
    best.map(|(sense, _)| sense)
}

/// Every candidate of the target with its rank, best first. The sort is
/// stable, so equal ranks keep construction order.
#[must_use]
pub fn ranked_senses(target: &Occurrence, graph: &CandidateGraph, ranks: &[f64]) -> Vec<(SenseId, f64)> {
    let mut ranked: Vec<_> = graph
        .nodes_for(target)
        .filter_map(|i| Some((graph.nodes().get(i)?.sense, *ranks.get(i)?)))
        .collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::rank::graph::{CandidateNode, WeightMatrix};
    use crate::lexicon::SenseArena;

    fn graph(arena: &SenseArena) -> CandidateGraph {
        let node = |name: &str, word: &str, index: usize, group: usize| CandidateNode {
            sense: arena.intern(name).unwrap(),
            occurrence: Occurrence::new(word, index),
            group,
        };
        let nodes = vec![
            node("bank.n.01", "bank", 0, 0),
            node("bank.n.02", "bank", 0, 0),
            node("bank.n.03", "bank", 0, 0),
            node("river.n.01", "river", 1, 1),
        ];
        CandidateGraph::new(nodes, WeightMatrix::zeros(4))
    }

    #[test]
    fn test_picks_maximum_rank() {
        let arena = SenseArena::new();
        let g = graph(&arena);
        let picked = select(&Occurrence::new("bank", 0), &g, &[0.5, 1.5, 1.0, 9.0]);
        assert_eq!(picked, arena.lookup("bank.n.02"));
    }

    #[test]
    fn test_ties_go_to_first_constructed() {
        let arena = SenseArena::new();
        let g = graph(&arena);
        let picked = select(&Occurrence::new("bank", 0), &g, &[1.0, 1.0, 1.0, 1.0]);
        assert_eq!(picked, arena.lookup("bank.n.01"));

        let picked = select(&Occurrence::new("bank", 0), &g, &[0.2, 0.7, 0.7, 1.0]);
        assert_eq!(picked, arena.lookup("bank.n.02"));
    }

    #[test]
    fn test_unknown_target_selects_nothing() {
        let arena = SenseArena::new();
        let g = graph(&arena);
        assert_eq!(select(&Occurrence::new("bank", 3), &g, &[1.0; 4]), None);
        assert_eq!(select(&Occurrence::new("bank", 0), &CandidateGraph::empty(), &[]), None);
    }

    #[test]
    fn test_ranked_senses_are_sorted() {
        let arena = SenseArena::new();
        let g = graph(&arena);
        let ranked = ranked_senses(&Occurrence::new("bank", 0), &g, &[0.5, 1.5, 1.5, 9.0]);
        let names: Vec<_> = ranked.iter().map(|(s, _)| arena.name(*s).unwrap().to_string()).collect();
        assert_eq!(names, vec!["bank.n.02", "bank.n.03", "bank.n.01"]);
    }
}
