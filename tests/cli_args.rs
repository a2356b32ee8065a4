// tests/cli_args.rs - argument handling and end-to-end runs
use std::fs;

use clap::Parser;
use senserank_core::cli::{self, Cli};
use senserank_core::exit::SenseRankExit;
use senserank_core::similarity::SimilarityMetric;
use tempfile::TempDir;

const LEXICON: &str = include_str!("fixtures/lexicon.json");

fn lexicon_dir() -> TempDir {
    let d = tempfile::tempdir().unwrap();
    fs::write(d.path().join("lexicon.json"), LEXICON).unwrap();
    d
}

fn parse(d: &TempDir, extra: &[&str]) -> Cli {
    let lexicon = d.path().join("lexicon.json");
    let mut args = vec!["senserank", "--lexicon", lexicon.to_str().unwrap()];
    args.extend_from_slice(extra);
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn test_overrides_apply_over_config_file() {
    let d = lexicon_dir();
    let config = d.path().join("engine.toml");
    fs::write(&config, "[engine]\nmetric = \"lch\"\ndamping = 0.5\nmax_candidates = 2").unwrap();
    let cli = parse(
        &d,
        &[
            "--window",
            "bank/n",
            "--target",
            "0",
            "--config",
            config.to_str().unwrap(),
            "--metric",
            "information-content",
            "--no-syntax",
        ],
    );
    let resolved = cli::resolve_config(&cli).unwrap();
    assert_eq!(resolved.metric, SimilarityMetric::Jcn);
    assert!((resolved.damping - 0.5).abs() < f64::EPSILON);
    assert_eq!(resolved.max_candidates, 2);
    assert!(!resolved.use_syntax);
}

#[test]
fn test_invalid_damping_override_is_rejected() {
    let d = lexicon_dir();
    let cli = parse(&d, &["--window", "bank/n", "--target", "0", "--damping", "1.5"]);
    let err = cli::resolve_config(&cli).unwrap_err();
    assert_eq!(SenseRankExit::for_error(&err), SenseRankExit::InvalidInput);
}

#[test]
fn test_window_run_succeeds() {
    let d = lexicon_dir();
    let cli = parse(&d, &["--window", "bank/n river/n", "--target", "0", "--ranks"]);
    assert!(cli::run(&cli).is_ok());
}

#[test]
fn test_tree_run_succeeds() {
    let d = lexicon_dir();
    let tree = "(S (NP (NN bank)) (VP (VBZ borders) (NP (DT the) (NN river))))";
    let cli = parse(&d, &["--tree", tree, "--target", "3"]);
    assert!(cli::run(&cli).is_ok());
}

#[test]
fn test_function_word_target_is_an_error() {
    let d = lexicon_dir();
    let tree = "(S (NP (NN bank)) (VP (VBZ borders) (NP (DT the) (NN river))))";
    let cli = parse(&d, &["--tree", tree, "--target", "2"]);
    assert!(cli::run(&cli).is_err());
}

#[test]
fn test_target_past_window_is_an_error() {
    let d = lexicon_dir();
    let cli = parse(&d, &["--window", "bank/n river/n", "--target", "9"]);
    assert!(cli::run(&cli).is_err());
}

#[test]
fn test_window_and_tree_conflict() {
    let args = [
        "senserank", "--lexicon", "x.json", "--window", "a/n", "--tree", "(S (NN a))", "--target", "0",
    ];
    assert!(Cli::try_parse_from(args).is_err());
}

#[test]
fn test_missing_lexicon_is_a_generic_error() {
    let cli = Cli::try_parse_from([
        "senserank", "--lexicon", "/nonexistent/lexicon.json", "--window", "bank/n", "--target", "0",
    ])
    .unwrap();
    let err = cli::run(&cli).unwrap_err();
    assert_eq!(SenseRankExit::for_error(&err), SenseRankExit::Error);
}

#[test]
fn test_compound_leaf_resolves_every_part() {
    let d = lexicon_dir();
    let tree = "(S (NP (JJ state-of-the-art) (NN bank)) (VP (VBZ borders) (NP (DT the) (NN river))))";
    let cli = parse(&d, &["--tree", tree, "--target", "0"]);
    let prepared = cli::prepare(&cli).unwrap();
    let parts: Vec<&str> = prepared.targets.iter().map(|t| t.occurrence.word.as_str()).collect();
    assert_eq!(parts, vec!["state", "of", "the", "art"]);
    assert!(prepared.targets.iter().all(|t| t.occurrence.index == 0 && t.pos.is_none()));
    assert!(cli::run(&cli).is_ok());
}

#[test]
fn test_window_mode_has_one_target() {
    let d = lexicon_dir();
    let cli = parse(&d, &["--window", "bank/n river/n", "--target", "1"]);
    let prepared = cli::prepare(&cli).unwrap();
    assert!(prepared.paths.is_none());
    assert_eq!(prepared.targets.len(), 1);
    assert_eq!(prepared.targets[0].occurrence.word, "river");
}

#[test]
fn test_fixture_malformed_keys_are_reported() {
    let lexicon = senserank_core::lexicon::MemoryLexicon::from_json(LEXICON).unwrap();
    assert_eq!(
        senserank_core::lexicon::memory::malformed_keys(&lexicon),
        vec!["thing".to_string()]
    );
}
