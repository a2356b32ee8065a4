// src/similarity/overlap.rs
//! Gloss-overlap (Lesk) and extended gloss-overlap (Banerjee-Pedersen) scores.

use std::collections::HashMap;

/// Glosses needed by the extended overlap: the sense itself and its first
/// hypernym and hyponym, when both exist.
pub struct GlossFamily<'a> {
    pub own: &'a [String],
    pub hypernym: Option<&'a [String]>,
    pub hyponym: Option<&'a [String]>,
}

impl GlossFamily<'_> {
    fn relatives(&self) -> Option<(&[String], &[String])> {
        Some((self.hypernym?, self.hyponym?))
    }
}

/// Number of tokens the two glosses share, counting a repeated token as
/// often as it appears in both. Order-insensitive and commutative.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn gloss_overlap(a: &[String], b: &[String]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    let mut counts: HashMap<&str, usize> = HashMap::with_capacity(short.len());
    for token in short {
        *counts.entry(token.as_str()).or_default() += 1;
    }

    let mut shared = 0usize;
    for token in long {
        if let Some(left) = counts.get_mut(token.as_str()) {
            if *left > 0 {
                *left -= 1;
                shared += 1;
            }
        }
    }
    shared as f64
}

/// Sums overlaps across the sense pair, the hypernym pair, the hyponym pair,
/// and both cross pairs of sense and hypernym. A sense at a taxonomy root or
/// leaf has no relatives, and the plain overlap is returned instead.
#[must_use]
pub fn extended_overlap(a: &GlossFamily<'_>, b: &GlossFamily<'_>) -> f64 {
    let base = gloss_overlap(a.own, b.own);
    let (Some((hyper_a, hypo_a)), Some((hyper_b, hypo_b))) = (a.relatives(), b.relatives()) else {
        return base;
    };

    base + gloss_overlap(hyper_a, hyper_b)
        + gloss_overlap(hypo_a, hypo_b)
        + gloss_overlap(hyper_a, b.own)
        + gloss_overlap(a.own, hyper_b)
}
