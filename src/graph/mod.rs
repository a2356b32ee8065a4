// src/graph/mod.rs
//! Candidate-sense graphs and their ranking.

pub mod rank;
