use clap::Parser;
use std::path::PathBuf;

use crate::similarity::SimilarityMetric;

#[derive(Parser, Debug)]
#[command(name = "senserank", version, about = "Graph-based word sense disambiguation")]
pub struct Cli {
    /// JSON lexicon providing senses, glosses, and relations
    #[arg(long, value_name = "FILE")]
    pub lexicon: PathBuf,
    /// Content words as word/pos pairs, e.g. "bank/n river/n flow/v" (pos '-' searches all)
    #[arg(long, conflicts_with = "tree")]
    pub window: Option<String>,
    /// Bracketed parse tree; the window is taken from its leaves
    #[arg(long)]
    pub tree: Option<String>,
    /// Position of the word to disambiguate (window index or tree leaf index)
    #[arg(long)]
    pub target: usize,
    /// Similarity metric: lesk, banner, jcn, lch
    #[arg(long)]
    pub metric: Option<SimilarityMetric>,
    #[arg(long)]
    pub damping: Option<f64>,
    #[arg(long)]
    pub epsilon: Option<f64>,
    /// Config file (defaults to ./senserank.toml when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Disable parse-tree scaling even when a tree is given
    #[arg(long)]
    pub no_syntax: bool,
    /// Print every candidate of the target with its rank
    #[arg(long)]
    pub ranks: bool,
}
