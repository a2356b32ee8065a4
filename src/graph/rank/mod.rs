// src/graph/rank/mod.rs
pub mod builder;
pub mod graph;
pub mod pagerank;
pub mod queries;

pub use graph::{CandidateGraph, CandidateNode, WeightMatrix};
pub use pagerank::{RankOutcome, RankSettings};

use crate::config::EngineConfig;
use crate::context::ContextScaler;
use crate::error::Result;
use crate::lexicon::{KnowledgeSource, SenseId, SenseResolver};
use crate::similarity::SimilarityCache;
use crate::window::{Occurrence, WindowWord};

/// How a sense was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Highest-ranked candidate in the graph.
    Ranked(SenseId),
    /// The knowledge source's first sense, used when ranking found nothing.
    MostFrequent(SenseId),
}

impl Choice {
    #[must_use]
    pub fn sense(self) -> SenseId {
        match self {
            Self::Ranked(s) | Self::MostFrequent(s) => s,
        }
    }
}

/// Result of one window: the graph, its ranks, and the selection.
#[derive(Debug, Clone)]
pub struct Disambiguation {
    pub graph: CandidateGraph,
    pub outcome: RankOutcome,
    pub selected: Option<SenseId>,
}

/// Orchestrates graph construction, ranking, and selection. Holds the
/// process-lifetime gloss and similarity caches, shared by every call.
pub struct Disambiguator<K> {
    config: EngineConfig,
    resolver: SenseResolver<K>,
    similarity: SimilarityCache,
}

impl<K: KnowledgeSource> Disambiguator<K> {
    /// # Errors
    /// Returns `InvalidConfig` if the configuration fails validation.
    pub fn new(source: K, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            resolver: SenseResolver::new(source),
            similarity: SimilarityCache::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn resolver(&self) -> &SenseResolver<K> {
        &self.resolver
    }

    #[must_use]
    pub fn similarity_cache(&self) -> &SimilarityCache {
        &self.similarity
    }

    #[must_use]
    pub fn sense_name(&self, id: SenseId) -> String {
        self.resolver.name(id)
    }

    fn build_params(&self) -> builder::BuildParams {
        builder::BuildParams {
            metric: self.config.metric,
            max_candidates: self.config.max_candidates,
            max_node_distance: self.config.max_node_distance,
        }
    }

    fn rank_settings(&self) -> RankSettings {
        RankSettings {
            damping: self.config.damping,
            epsilon: self.config.epsilon,
            max_iterations: self.config.max_iterations,
        }
    }

    #[must_use]
    pub fn build_graph(&self, window: &[WindowWord], scaler: ContextScaler<'_>) -> CandidateGraph {
        builder::build(window, &self.resolver, &self.similarity, scaler, self.build_params())
    }

    #[must_use]
    pub fn rank(&self, graph: &CandidateGraph) -> RankOutcome {
        pagerank::compute(graph.transition(), &self.rank_settings())
    }

    #[must_use]
    pub fn select(&self, target: &Occurrence, graph: &CandidateGraph, outcome: &RankOutcome) -> Option<SenseId> {
        queries::select(target, graph, &outcome.ranks)
    }

    /// Builds, ranks, and selects for one target in one window.
    #[must_use]
    pub fn disambiguate(&self, window: &[WindowWord], target: &Occurrence, scaler: ContextScaler<'_>) -> Disambiguation {
        let graph = self.build_graph(window, scaler);
        let outcome = self.rank(&graph);
        let selected = self.select(target, &graph, &outcome);
        Disambiguation {
            graph,
            outcome,
            selected,
        }
    }

    /// Like [`Self::disambiguate`], falling back to the most frequent sense of
    /// the target word when the graph has no candidate for it.
    #[must_use]
    pub fn disambiguate_or_mfs(
        &self,
        window: &[WindowWord],
        target: &WindowWord,
        scaler: ContextScaler<'_>,
    ) -> Option<Choice> {
        let result = self.disambiguate(window, &target.occurrence, scaler);
        result
            .selected
            .map(Choice::Ranked)
            .or_else(|| self.resolver.most_frequent(target).map(Choice::MostFrequent))
    }

    /// Selects senses for several targets sharing one graph.
    #[must_use]
    pub fn disambiguate_all(
        &self,
        window: &[WindowWord],
        targets: &[Occurrence],
        scaler: ContextScaler<'_>,
    ) -> Vec<Option<SenseId>> {
        let graph = self.build_graph(window, scaler);
        let outcome = self.rank(&graph);
        targets
            .iter()
            .map(|t| self.select(t, &graph, &outcome))
            .collect()
    }
}
