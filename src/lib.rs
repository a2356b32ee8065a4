pub mod batch;
pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod exit;
pub mod graph;
pub mod lexicon;
pub mod similarity;
pub mod window;
