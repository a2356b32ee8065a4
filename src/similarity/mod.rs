// src/similarity/mod.rs
//! Pairwise sense similarity. Every metric is commutative and non-negative.

pub mod cache;
pub mod overlap;
pub mod taxonomy;

pub use cache::{CacheStats, SimilarityCache};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SenseError;
use crate::lexicon::{KnowledgeSource, SenseId, SenseResolver};
use overlap::GlossFamily;

/// The interchangeable similarity measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimilarityMetric {
    /// Plain gloss overlap.
    Lesk,
    /// Gloss overlap extended over first hypernym and hyponym.
    #[default]
    Banner,
    /// Jiang-Conrath information content; same-POS pairs only.
    Jcn,
    /// Leacock-Chodorow taxonomy depth; same-POS pairs only.
    Lch,
}

impl SimilarityMetric {
    pub const ALL: [Self; 4] = [Self::Lesk, Self::Banner, Self::Jcn, Self::Lch];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Lesk => "lesk",
            Self::Banner => "banner",
            Self::Jcn => "jcn",
            Self::Lch => "lch",
        }
    }
}

impl fmt::Display for SimilarityMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SimilarityMetric {
    type Err = SenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lesk" | "gloss-overlap" => Ok(Self::Lesk),
            "banner" | "extended-gloss-overlap" => Ok(Self::Banner),
            "jcn" | "information-content" => Ok(Self::Jcn),
            "lch" | "taxonomy-depth" => Ok(Self::Lch),
            _ => Err(SenseError::UnknownMetric(s.to_string())),
        }
    }
}

/// Scores a sense pair under `metric`, bypassing the cache.
#[must_use]
pub fn score<K: KnowledgeSource>(
    metric: SimilarityMetric,
    a: SenseId,
    b: SenseId,
    resolver: &SenseResolver<K>,
) -> f64 {
    let value = match metric {
        SimilarityMetric::Lesk => lesk(a, b, resolver),
        SimilarityMetric::Banner => banner(a, b, resolver),
        SimilarityMetric::Jcn => jcn(a, b, resolver).unwrap_or_else(|| banner(a, b, resolver)),
        SimilarityMetric::Lch => lch(a, b, resolver).unwrap_or_else(|| banner(a, b, resolver)),
    };
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

fn lesk<K: KnowledgeSource>(a: SenseId, b: SenseId, resolver: &SenseResolver<K>) -> f64 {
    overlap::gloss_overlap(&resolver.gloss(a), &resolver.gloss(b))
}

fn banner<K: KnowledgeSource>(a: SenseId, b: SenseId, resolver: &SenseResolver<K>) -> f64 {
    let pa = resolver.profile(a);
    let pb = resolver.profile(b);
    let relatives = |p: &crate::lexicon::SenseProfile| {
        (
            p.hypernym.map(|h| resolver.gloss(h)),
            p.hyponym.map(|h| resolver.gloss(h)),
        )
    };
    let (hyper_a, hypo_a) = relatives(pa.as_ref());
    let (hyper_b, hypo_b) = relatives(pb.as_ref());

    let fa = GlossFamily {
        own: &pa.gloss,
        hypernym: hyper_a.as_deref(),
        hyponym: hypo_a.as_deref(),
    };
    let fb = GlossFamily {
        own: &pb.gloss,
        hypernym: hyper_b.as_deref(),
        hyponym: hypo_b.as_deref(),
    };
    overlap::extended_overlap(&fa, &fb)
}

fn same_pos<K: KnowledgeSource>(a: SenseId, b: SenseId, resolver: &SenseResolver<K>) -> bool {
    resolver.profile(a).pos == resolver.profile(b).pos
}

fn jcn<K: KnowledgeSource>(a: SenseId, b: SenseId, resolver: &SenseResolver<K>) -> Option<f64> {
    if !same_pos(a, b, resolver) {
        return None;
    }
    let ic_a = resolver.information_content(a)?;
    let ic_b = resolver.information_content(b)?;
    let anc_a = resolver.ancestors(a);
    let anc_b = resolver.ancestors(b);
    taxonomy::jcn(&anc_a, &anc_b, ic_a, ic_b, |id| resolver.information_content(id))
}

fn lch<K: KnowledgeSource>(a: SenseId, b: SenseId, resolver: &SenseResolver<K>) -> Option<f64> {
    if !same_pos(a, b, resolver) {
        return None;
    }
    let depth = resolver.taxonomy_depth(resolver.profile(a).pos)?;
    let anc_a = resolver.ancestors(a);
    let anc_b = resolver.ancestors(b);
    Some(
        taxonomy::shortest_common_path(&anc_a, &anc_b)
            .map_or(0.0, |path| taxonomy::lch(path, depth)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_names_roundtrip() {
        for metric in SimilarityMetric::ALL {
            assert_eq!(metric.name().parse::<SimilarityMetric>().unwrap(), metric);
        }
        assert_eq!(
            "extended-gloss-overlap".parse::<SimilarityMetric>().unwrap(),
            SimilarityMetric::Banner
        );
        assert!("cosine".parse::<SimilarityMetric>().is_err());
    }
}
