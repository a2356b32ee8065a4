// src/similarity/taxonomy.rs
//! Taxonomy-based measures: Jiang-Conrath information content and
//! Leacock-Chodorow path depth.

use crate::lexicon::resolver::Ancestors;

/// Score returned for identical information content (zero JCN distance).
pub const JCN_IDENTICAL: f64 = 1.0e4;

/// Shortest path between two senses through any common hypernym ancestor.
#[must_use]
pub fn shortest_common_path(a: &Ancestors, b: &Ancestors) -> Option<usize> {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small
        .iter()
        .filter_map(|(id, da)| large.get(id).map(|db| da + db))
        .min()
}

/// Jiang-Conrath similarity, `1 / (IC(a) + IC(b) - 2 IC(lcs))`, where the
/// least common subsumer is the shared ancestor with the largest IC.
///
/// `ic` returns `None` for senses without corpus statistics; any missing
/// value among the pair makes the whole score unavailable.
#[must_use]
pub fn jcn<F>(a: &Ancestors, b: &Ancestors, ic_a: f64, ic_b: f64, ic: F) -> Option<f64>
where
    F: Fn(crate::lexicon::SenseId) -> Option<f64>,
{
    let mut lcs_ic: Option<f64> = None;
    for id in a.keys().filter(|id| b.contains_key(id)) {
        let value = ic(*id)?;
        lcs_ic = Some(lcs_ic.map_or(value, |best: f64| best.max(value)));
    }
    let Some(lcs_ic) = lcs_ic else {
        return Some(0.0);
    };

    let distance = ic_a + ic_b - 2.0 * lcs_ic;
    if distance <= 1.0 / JCN_IDENTICAL {
        return Some(JCN_IDENTICAL);
    }
    Some(1.0 / distance)
}

/// Leacock-Chodorow similarity, `-ln((p + 1) / 2D)`, clamped at zero.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn lch(path: usize, taxonomy_depth: usize) -> f64 {
    if taxonomy_depth == 0 {
        return 0.0;
    }
    let ratio = (path + 1) as f64 / (2.0 * taxonomy_depth as f64);
    (-ratio.ln()).max(0.0)
}
