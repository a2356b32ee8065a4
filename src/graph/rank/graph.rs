// src/graph/rank/graph.rs
//! The candidate-sense graph and its dense transition matrix.

use crate::lexicon::SenseId;
use crate::window::Occurrence;

/// Square dense matrix stored row-major. Never resized after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightMatrix {
    dim: usize,
    data: Vec<f64>,
}

impl WeightMatrix {
    #[must_use]
    pub fn zeros(dim: usize) -> Self {
        Self {
            dim,
            data: vec![0.0; dim * dim],
        }
    }

    /// Builds a matrix from rows; short rows are zero-padded, long rows truncated.
    #[must_use]
    pub fn from_rows(rows: &[Vec<f64>]) -> Self {
        let dim = rows.len();
        let mut m = Self::zeros(dim);
        for (i, row) in rows.iter().enumerate() {
            for (j, &v) in row.iter().take(dim).enumerate() {
                m.data[i * dim + j] = v;
            }
        }
        m
    }

    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        if i < self.dim && j < self.dim {
            self.data[i * self.dim + j]
        } else {
            0.0
        }
    }

    /// Stores `w` at both `(i, j)` and `(j, i)`.
    pub fn set_symmetric(&mut self, i: usize, j: usize, w: f64) {
        if i < self.dim && j < self.dim {
            self.data[i * self.dim + j] = w;
            self.data[j * self.dim + i] = w;
        }
    }

    #[must_use]
    pub fn row(&self, i: usize) -> &[f64] {
        let start = (i * self.dim).min(self.data.len());
        let end = (start + self.dim).min(self.data.len());
        &self.data[start..end]
    }

    #[must_use]
    pub fn row_sum(&self, i: usize) -> f64 {
        self.row(i).iter().sum()
    }

    /// Divides each row by its sum. A row summing to zero becomes a self-loop
    /// of weight 1 on the diagonal. Returns how many rows were patched.
    pub fn normalize_rows(&mut self) -> usize {
        let mut patched = 0;
        for i in 0..self.dim {
            let sum = self.row_sum(i);
            let row = &mut self.data[i * self.dim..(i + 1) * self.dim];
            if sum > 0.0 && sum.is_finite() {
                for v in row.iter_mut() {
                    *v /= sum;
                }
            } else {
                row.fill(0.0);
                row[i] = 1.0;
                patched += 1;
            }
        }
        patched
    }

    /// `Mᵀ · v`: mass flows from each row's node to its columns in proportion
    /// to the row's weights.
    #[must_use]
    pub fn transpose_mul(&self, v: &[f64]) -> Vec<f64> {
        let mut out = vec![0.0; self.dim];
        for (i, &vi) in v.iter().enumerate().take(self.dim) {
            if vi == 0.0 {
                continue;
            }
            for (o, &w) in out.iter_mut().zip(self.row(i)) {
                *o += w * vi;
            }
        }
        out
    }

    /// `true` if `(i, j) == (j, i)` for every entry, within `tol`.
    #[must_use]
    pub fn is_symmetric(&self, tol: f64) -> bool {
        (0..self.dim).all(|i| (i + 1..self.dim).all(|j| (self.get(i, j) - self.get(j, i)).abs() <= tol))
    }
}

/// One vertex: a candidate sense of one word occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateNode {
    pub sense: SenseId,
    pub occurrence: Occurrence,
    /// Index of the occurrence among the window's distinct occurrences.
    pub group: usize,
}

/// Vertex set plus weights for one disambiguation call.
#[derive(Debug, Clone)]
pub struct CandidateGraph {
    pub(crate) nodes: Vec<CandidateNode>,
    pub(crate) weights: WeightMatrix,
    pub(crate) transition: WeightMatrix,
    pub(crate) edge_count: usize,
    pub(crate) patched_rows: usize,
}

impl CandidateGraph {
    /// Assembles a graph from raw symmetric weights, normalizing a copy into
    /// the transition matrix.
    #[must_use]
    pub fn new(nodes: Vec<CandidateNode>, weights: WeightMatrix) -> Self {
        let edge_count = (0..weights.dim())
            .map(|i| (i + 1..weights.dim()).filter(|&j| weights.get(i, j) > 0.0).count())
            .sum();
        let mut transition = weights.clone();
        let patched_rows = transition.normalize_rows();
        Self {
            nodes,
            weights,
            transition,
            edge_count,
            patched_rows,
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new(), WeightMatrix::zeros(0))
    }

    #[must_use]
    pub fn nodes(&self) -> &[CandidateNode] {
        &self.nodes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Raw symmetric similarity weights before normalization.
    #[must_use]
    pub fn weights(&self) -> &WeightMatrix {
        &self.weights
    }

    /// Row-stochastic transition matrix.
    #[must_use]
    pub fn transition(&self) -> &WeightMatrix {
        &self.transition
    }

    /// Number of unordered node pairs with positive weight.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Rows that summed to zero and were replaced by a self-loop.
    #[must_use]
    pub fn isolated_count(&self) -> usize {
        self.patched_rows
    }

    /// Node indices belonging to one occurrence, in construction order.
    pub fn nodes_for<'a>(&'a self, occurrence: &'a Occurrence) -> impl Iterator<Item = usize> + 'a {
        self.nodes
            .iter()
            .enumerate()
            .filter(move |(_, n)| &n.occurrence == occurrence)
            .map(|(i, _)| i)
    }
}
