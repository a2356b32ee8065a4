// src/context/mod.rs
//! Syntactic proximity scaling of edge weights.

pub mod tree;

pub use tree::{TaggedLeaf, TreePaths};

use crate::window::Occurrence;

/// Anything that can report an occurrence's path from the context root.
pub trait ContextProvider: Sync {
    fn path_of(&self, occurrence: &Occurrence) -> Option<&[usize]>;
}

impl ContextProvider for TreePaths {
    fn path_of(&self, occurrence: &Occurrence) -> Option<&[usize]> {
        self.path(occurrence)
    }
}

/// Edge multiplier in `[0, 1]` for a pair of occurrences.
#[derive(Clone, Copy)]
pub enum ContextScaler<'a> {
    /// No syntax available: every pair scales by 1.
    Constant,
    Syntax(&'a dyn ContextProvider),
}

impl<'a> ContextScaler<'a> {
    /// Uses `provider` when syntax scaling is enabled and a provider exists.
    #[must_use]
    pub fn select(use_syntax: bool, provider: Option<&'a dyn ContextProvider>) -> Self {
        match provider {
            Some(p) if use_syntax => Self::Syntax(p),
            _ => Self::Constant,
        }
    }

    #[must_use]
    pub fn scale(&self, a: &Occurrence, b: &Occurrence) -> f64 {
        match self {
            Self::Constant => 1.0,
            Self::Syntax(provider) => match (provider.path_of(a), provider.path_of(b)) {
                (Some(pa), Some(pb)) => path_overlap(pa, pb),
                _ => 0.0,
            },
        }
    }
}

/// Shared-prefix length divided by the mean of both path lengths.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn path_overlap<T: PartialEq>(a: &[T], b: &[T]) -> f64 {
    let mean = (a.len() + b.len()) as f64 / 2.0;
    if mean == 0.0 {
        return 0.0;
    }
    common_prefix_len(a, b) as f64 / mean
}

fn common_prefix_len<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}
