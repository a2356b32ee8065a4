// src/graph/rank/pagerank.rs
//! Damped random walk over the transition matrix, iterated to a fixed point.

use tracing::{debug, warn};

use super::graph::WeightMatrix;

/// Termination settings for one walk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankSettings {
    pub damping: f64,
    pub epsilon: f64,
    pub max_iterations: usize,
}

/// Lifecycle of a walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkState {
    Uninitialized,
    Iterating { iteration: usize },
    Converged { iterations: usize },
    /// The safety ceiling was reached before the change fell below epsilon.
    Exhausted { iterations: usize },
}

/// Converged ranks plus how they were reached.
#[derive(Debug, Clone, PartialEq)]
pub struct RankOutcome {
    pub ranks: Vec<f64>,
    pub iterations: usize,
    pub converged: bool,
    /// Largest per-node change observed in the final iteration.
    pub final_delta: f64,
}

impl RankOutcome {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            ranks: Vec::new(),
            iterations: 0,
            converged: true,
            final_delta: 0.0,
        }
    }

    /// `true` when every node ended with the same rank, so the walk carries
    /// no information for choosing between senses.
    #[must_use]
    pub fn is_uninformative(&self, tolerance: f64) -> bool {
        let Some(&first) = self.ranks.first() else {
            return true;
        };
        self.ranks.iter().all(|r| (r - first).abs() <= tolerance)
    }
}

/// Stepwise power iteration: `r' = (1 - d) + d · Pᵀ r`.
pub struct RandomWalk<'m> {
    matrix: &'m WeightMatrix,
    damping: f64,
    ranks: Vec<f64>,
    state: WalkState,
}

impl<'m> RandomWalk<'m> {
    #[must_use]
    pub fn new(matrix: &'m WeightMatrix, damping: f64) -> Self {
        Self {
            matrix,
            damping,
            ranks: Vec::new(),
            state: WalkState::Uninitialized,
        }
    }

    /// Resets every rank to 1.
    pub fn start(&mut self) {
        self.start_from(vec![1.0; self.matrix.dim()]);
    }

    /// Starts from caller-supplied ranks; a wrong-length vector falls back to ones.
    pub fn start_from(&mut self, initial: Vec<f64>) {
        self.ranks = if initial.len() == self.matrix.dim() {
            initial
        } else {
            vec![1.0; self.matrix.dim()]
        };
        self.state = WalkState::Iterating { iteration: 0 };
    }

    #[must_use]
    pub fn state(&self) -> WalkState {
        self.state
    }

    #[must_use]
    pub fn ranks(&self) -> &[f64] {
        &self.ranks
    }

    /// Performs one update and returns the largest absolute per-node change.
    pub fn step(&mut self) -> f64 {
        if self.state == WalkState::Uninitialized {
            self.start();
        }
        let teleport = 1.0 - self.damping;
        let flowed = self.matrix.transpose_mul(&self.ranks);

        let mut delta: f64 = 0.0;
        for (rank, inflow) in self.ranks.iter_mut().zip(flowed) {
            let next = teleport + self.damping * inflow;
            delta = delta.max((next - *rank).abs());
            *rank = next;
        }

        if let WalkState::Iterating { iteration } = self.state {
            self.state = WalkState::Iterating {
                iteration: iteration + 1,
            };
        }
        delta
    }

    fn iteration(&self) -> usize {
        match self.state {
            WalkState::Uninitialized => 0,
            WalkState::Iterating { iteration } => iteration,
            WalkState::Converged { iterations } | WalkState::Exhausted { iterations } => iterations,
        }
    }

    /// Iterates until the change drops to `epsilon` or the ceiling is hit.
    pub fn run(mut self, settings: &RankSettings) -> RankOutcome {
        if self.matrix.dim() == 0 {
            return RankOutcome::empty();
        }
        if self.state == WalkState::Uninitialized {
            self.start();
        }

        let mut delta = f64::INFINITY;
        while self.iteration() < settings.max_iterations {
            delta = self.step();
            if delta <= settings.epsilon {
                self.state = WalkState::Converged {
                    iterations: self.iteration(),
                };
                break;
            }
        }

        let iterations = self.iteration();
        let converged = matches!(self.state, WalkState::Converged { .. });
        if converged {
            debug!("walk converged after {iterations} iterations");
        } else {
            self.state = WalkState::Exhausted { iterations };
            warn!(
                "walk stopped at iteration ceiling {} with change {delta:e} > {:e}",
                settings.max_iterations, settings.epsilon
            );
        }

        RankOutcome {
            ranks: self.ranks,
            iterations,
            converged,
            final_delta: delta,
        }
    }
}

/// Runs a walk from uniform ranks of 1. An empty matrix converges at once.
#[must_use]
pub fn compute(matrix: &WeightMatrix, settings: &RankSettings) -> RankOutcome {
    RandomWalk::new(matrix, settings.damping).run(settings)
}

/// Runs a walk from explicit initial ranks.
#[must_use]
pub fn compute_from(matrix: &WeightMatrix, initial: Vec<f64>, settings: &RankSettings) -> RankOutcome {
    let mut walk = RandomWalk::new(matrix, settings.damping);
    walk.start_from(initial);
    walk.run(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(damping: f64) -> RankSettings {
        RankSettings {
            damping,
            epsilon: 1e-9,
            max_iterations: 10_000,
        }
    }

    fn stochastic(rows: &[Vec<f64>]) -> WeightMatrix {
        let mut m = WeightMatrix::from_rows(rows);
        m.normalize_rows();
        m
    }

    #[test]
    fn test_empty_matrix_short_circuits() {
        let out = compute(&WeightMatrix::zeros(0), &settings(0.85));
        assert!(out.ranks.is_empty());
        assert_eq!(out.iterations, 0);
        assert!(out.converged);
    }

    #[test]
    fn test_state_machine_transitions() {
        let m = stochastic(&[vec![0.0, 1.0], vec![1.0, 0.0]]);
        let mut walk = RandomWalk::new(&m, 0.85);
        assert_eq!(walk.state(), WalkState::Uninitialized);
        walk.start();
        assert_eq!(walk.ranks(), &[1.0, 1.0]);
        walk.step();
        assert_eq!(walk.state(), WalkState::Iterating { iteration: 1 });
    }

    #[test]
    fn test_hub_outranks_leaves() {
        let m = stochastic(&[
            vec![0.0, 1.0, 1.0, 1.0],
            vec![1.0, 0.0, 0.0, 0.0],
            vec![1.0, 0.0, 0.0, 0.0],
            vec![1.0, 0.0, 0.0, 0.0],
        ]);
        let out = compute(&m, &settings(0.85));
        assert!(out.converged);
        assert!(out.ranks[0] > out.ranks[1]);
        assert!((out.ranks[1] - out.ranks[3]).abs() < 1e-6);
        // Column-stochastic flow preserves the total mass of n.
        let total: f64 = out.ranks.iter().sum();
        assert!((total - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_ceiling_reports_non_convergence() {
        let m = stochastic(&[vec![0.0, 1.0], vec![1.0, 0.0]]);
        let out = compute_from(
            &m,
            vec![10.0, 0.0],
            &RankSettings {
                damping: 0.99,
                epsilon: 1e-12,
                max_iterations: 5,
            },
        );
        assert!(!out.converged);
        assert_eq!(out.iterations, 5);
        assert!(out.final_delta > 1e-12);
    }

    #[test]
    fn test_uninformative_detection() {
        let m = stochastic(&[vec![0.0, 0.0], vec![0.0, 0.0]]);
        let out = compute(&m, &settings(0.85));
        assert!(out.is_uninformative(1e-9));
    }
}
