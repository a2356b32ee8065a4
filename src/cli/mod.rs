// src/cli/mod.rs
//! Command-line front end over the disambiguation engine.

pub mod args;

pub use args::Cli;

use anyhow::{anyhow, bail, Context, Result};
use colored::Colorize;
use tracing::warn;

use crate::config::EngineConfig;
use crate::context::{ContextProvider, ContextScaler, TreePaths};
use crate::graph::rank::queries;
use crate::graph::rank::{CandidateGraph, Disambiguator, RankOutcome};
use crate::lexicon::memory::malformed_keys;
use crate::lexicon::{MemoryLexicon, PartOfSpeech, SenseId};
use crate::window::{clean_tagged_sentence, clean_word, WindowWord};

/// Parses `word/pos` pairs separated by whitespace. A missing or `-` POS
/// searches every part of speech.
///
/// # Errors
/// Returns error on an unknown POS tag.
pub fn parse_window(spec: &str) -> Result<Vec<WindowWord>> {
    spec.split_whitespace()
        .enumerate()
        .map(|(index, item)| -> Result<WindowWord> {
            let (word, pos) = match item.rsplit_once('/') {
                Some((w, "-")) => (w, None),
                Some((w, p)) => (w, Some(p.parse::<PartOfSpeech>()?)),
                None => (item, None),
            };
            Ok(WindowWord::new(word, pos, index))
        })
        .collect()
}

/// Merges the config file with command-line overrides.
///
/// # Errors
/// Returns error if the config file is unreadable or the result is invalid.
pub fn resolve_config(cli: &Cli) -> Result<EngineConfig> {
    let mut config = match &cli.config {
        Some(path) => EngineConfig::load_from(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => EngineConfig::load()?,
    };
    if let Some(metric) = cli.metric {
        config.metric = metric;
    }
    if let Some(d) = cli.damping {
        config.damping = d;
    }
    if let Some(e) = cli.epsilon {
        config.epsilon = e;
    }
    if cli.no_syntax {
        config.use_syntax = false;
    }
    config.validate()?;
    Ok(config)
}

/// Content-word window, optional syntax, and the words to resolve.
#[derive(Debug)]
pub struct Prepared {
    pub window: Vec<WindowWord>,
    pub paths: Option<TreePaths>,
    pub targets: Vec<WindowWord>,
}

/// Builds the window and targets from `--window` or `--tree`. A compound
/// tree leaf such as `state-of-the-art` yields one target per part.
///
/// # Errors
/// Returns error if the tree does not parse or the target is out of range.
pub fn prepare(cli: &Cli) -> Result<Prepared> {
    match (&cli.tree, &cli.window) {
        (Some(tree), _) => {
            let paths = TreePaths::parse(tree)?;
            let tagged = paths.tagged();
            let (word, tag) = tagged
                .get(cli.target)
                .ok_or_else(|| anyhow!("target {} is past the last leaf", cli.target))?;
            let targets = clean_word(word, tag, cli.target);
            if targets.is_empty() {
                bail!("leaf '{word}' ({tag}) is not a content word");
            }
            Ok(Prepared {
                window: clean_tagged_sentence(&tagged),
                paths: Some(paths),
                targets,
            })
        }
        (None, Some(spec)) => {
            let window = parse_window(spec)?;
            let target = window
                .get(cli.target)
                .cloned()
                .ok_or_else(|| anyhow!("target {} is past the end of the window", cli.target))?;
            Ok(Prepared {
                window,
                paths: None,
                targets: vec![target],
            })
        }
        (None, None) => bail!("either --window or --tree is required"),
    }
}

/// Runs one disambiguation and prints the result.
///
/// # Errors
/// Returns error if inputs cannot be loaded or the target is out of range.
pub fn run(cli: &Cli) -> Result<()> {
    let config = resolve_config(cli)?;
    let lexicon = MemoryLexicon::load(&cli.lexicon)
        .with_context(|| format!("loading lexicon {}", cli.lexicon.display()))?;
    let malformed = malformed_keys(&lexicon);
    if !malformed.is_empty() {
        warn!(
            "{} malformed sense identifiers will be skipped: {}",
            malformed.len(),
            malformed.join(", ")
        );
    }
    let engine = Disambiguator::new(lexicon, config)?;
    let prepared = prepare(cli)?;

    let provider = prepared.paths.as_ref().map(|p| p as &dyn ContextProvider);
    let scaler = ContextScaler::select(engine.config().use_syntax, provider);
    let graph = engine.build_graph(&prepared.window, scaler);
    let outcome = engine.rank(&graph);

    if cli.ranks {
        print_walk(&graph, &outcome);
    }
    for target in &prepared.targets {
        if cli.ranks {
            print_ranks(&engine, &graph, &outcome, target);
        }
        let selected = engine.select(&target.occurrence, &graph, &outcome);
        print_choice(&engine, selected, target);
    }
    Ok(())
}

fn print_walk(graph: &CandidateGraph, outcome: &RankOutcome) {
    let status = if outcome.converged {
        "converged".green()
    } else {
        "iteration ceiling".yellow()
    };
    println!(
        "{} nodes, {} edges, {} iterations ({status})",
        graph.len(),
        graph.edge_count(),
        outcome.iterations
    );
}

fn print_ranks(
    engine: &Disambiguator<MemoryLexicon>,
    graph: &CandidateGraph,
    outcome: &RankOutcome,
    target: &WindowWord,
) {
    for (sense, rank) in queries::ranked_senses(&target.occurrence, graph, &outcome.ranks) {
        println!("  {:<24} {rank:.6}", engine.sense_name(sense));
    }
}

fn print_choice(engine: &Disambiguator<MemoryLexicon>, selected: Option<SenseId>, target: &WindowWord) {
    if let Some(sense) = selected {
        println!("{} -> {}", target.occurrence, engine.sense_name(sense).bold());
        return;
    }
    match engine.resolver().most_frequent(target) {
        Some(sense) => println!(
            "{} -> {} {}",
            target.occurrence,
            engine.sense_name(sense).bold(),
            "(most frequent sense)".dimmed()
        ),
        None => println!("{} -> {}", target.occurrence, "U".red()),
    }
}
