// src/batch.rs
//! Parallel disambiguation of independent windows.

use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};

use crate::context::{ContextProvider, ContextScaler, TreePaths};
use crate::error::Result;
use crate::graph::rank::{Choice, Disambiguator};
use crate::lexicon::KnowledgeSource;
use crate::window::{clean_tagged_sentence, WindowWord};

/// One unit of work: a content-word window, optional syntax, and the
/// positions within it to resolve.
#[derive(Debug, Clone, Default)]
pub struct ContextWindow {
    pub words: Vec<WindowWord>,
    pub paths: Option<TreePaths>,
    pub targets: Vec<WindowWord>,
}

impl ContextWindow {
    /// Builds a window from up to three sentence trees. `targets` are leaf
    /// indices within `current`; they are shifted past the previous sentence.
    ///
    /// # Errors
    /// Returns `Tree` if a sentence fails to parse.
    pub fn from_trees(
        prev: Option<&str>,
        current: &str,
        next: Option<&str>,
        targets: &[usize],
    ) -> Result<Self> {
        let (paths, offset) = TreePaths::from_context(prev, current, next)?;
        let tagged = paths.tagged();
        let words = clean_tagged_sentence(&tagged);
        let targets = targets
            .iter()
            .filter_map(|&t| {
                let index = t + offset;
                tagged
                    .get(index)
                    .map(|(word, tag)| crate::window::clean_word(word, tag, index))
            })
            .flatten()
            .collect();
        Ok(Self {
            words,
            paths: Some(paths),
            targets,
        })
    }
}

/// Resolves every target of every window. Windows run in parallel and share
/// only the engine's append-only caches; each result is independent, so a
/// window with no resolvable targets never affects the others.
#[must_use]
pub fn disambiguate_batch<K: KnowledgeSource>(
    engine: &Disambiguator<K>,
    windows: &[ContextWindow],
) -> Vec<Vec<Option<Choice>>> {
    windows
        .par_iter()
        .map(|window| resolve_window(engine, window))
        .collect()
}

fn resolve_window<K: KnowledgeSource>(engine: &Disambiguator<K>, window: &ContextWindow) -> Vec<Option<Choice>> {
    let provider = window.paths.as_ref().map(|p| p as &dyn ContextProvider);
    let scaler = ContextScaler::select(engine.config().use_syntax, provider);

    let graph = engine.build_graph(&window.words, scaler);
    let outcome = engine.rank(&graph);
    window
        .targets
        .iter()
        .map(|target| {
            engine
                .select(&target.occurrence, &graph, &outcome)
                .map(Choice::Ranked)
                .or_else(|| engine.resolver().most_frequent(target).map(Choice::MostFrequent))
        })
        .collect()
}
