use serde::{Deserialize, Serialize};

use crate::similarity::SimilarityMetric;

/// Tuning knobs for graph construction and rank convergence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub metric: SimilarityMetric,
    /// Scale edges by parse-tree proximity when a tree is available.
    #[serde(default = "default_use_syntax")]
    pub use_syntax: bool,
    /// Probability of following an edge rather than restarting the walk.
    #[serde(default = "default_damping")]
    pub damping: f64,
    /// Convergence threshold on the largest per-node rank change.
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,
    /// Fan-out bound: most frequent senses kept per word.
    #[serde(default = "default_max_candidates")]
    pub max_candidates: usize,
    /// Node pairs this many positions apart or more in construction order get no edge.
    #[serde(default = "default_max_node_distance")]
    pub max_node_distance: usize,
    /// Safety ceiling for oscillating or slow-converging walks.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            metric: SimilarityMetric::default(),
            use_syntax: default_use_syntax(),
            damping: default_damping(),
            epsilon: default_epsilon(),
            max_candidates: default_max_candidates(),
            max_node_distance: default_max_node_distance(),
            max_iterations: default_max_iterations(),
        }
    }
}

const fn default_use_syntax() -> bool { true }
const fn default_damping() -> f64 { 0.75 }
const fn default_epsilon() -> f64 { 1e-6 }
const fn default_max_candidates() -> usize { 3 }
const fn default_max_node_distance() -> usize { 10 }
const fn default_max_iterations() -> usize { 10_000 }

/// On-disk layout of `senserank.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SenseRankToml {
    #[serde(default)]
    pub engine: EngineConfig,
}
