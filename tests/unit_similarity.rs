// tests/unit_similarity.rs
//! Similarity metrics against a hand-built knowledge source.

use std::collections::HashMap;

use senserank_core::lexicon::{KnowledgeSource, PartOfSpeech, SenseId, SenseResolver};
use senserank_core::similarity::{score, SimilarityMetric};

#[derive(Default)]
struct Toy {
    glosses: HashMap<&'static str, Vec<String>>,
    hypernyms: HashMap<&'static str, &'static str>,
    hyponyms: HashMap<&'static str, &'static str>,
    ic: HashMap<&'static str, f64>,
}

impl Toy {
    fn sense(mut self, name: &'static str, gloss: &str, hyper: Option<&'static str>, hypo: Option<&'static str>, ic: Option<f64>) -> Self {
        self.glosses
            .insert(name, gloss.split_whitespace().map(String::from).collect());
        if let Some(h) = hyper {
            self.hypernyms.insert(name, h);
        }
        if let Some(h) = hypo {
            self.hyponyms.insert(name, h);
        }
        if let Some(v) = ic {
            self.ic.insert(name, v);
        }
        self
    }
}

impl KnowledgeSource for Toy {
    fn senses_of(&self, word: &str, _pos: Option<PartOfSpeech>) -> Vec<String> {
        let prefix = format!("{word}.");
        let mut found: Vec<String> = self
            .glosses
            .keys()
            .filter(|k| k.starts_with(&prefix))
            .map(|k| (*k).to_string())
            .collect();
        found.sort();
        found
    }

    fn gloss_of(&self, sense: &str) -> Option<Vec<String>> {
        self.glosses.get(sense).cloned()
    }

    fn hypernyms_of(&self, sense: &str) -> Vec<String> {
        self.hypernyms.get(sense).map(|h| vec![(*h).to_string()]).unwrap_or_default()
    }

    fn hyponyms_of(&self, sense: &str) -> Vec<String> {
        self.hyponyms.get(sense).map(|h| vec![(*h).to_string()]).unwrap_or_default()
    }

    fn information_content(&self, sense: &str) -> Option<f64> {
        self.ic.get(sense).copied()
    }

    fn taxonomy_depth(&self, pos: PartOfSpeech) -> Option<usize> {
        (pos == PartOfSpeech::Noun).then_some(10)
    }
}

fn resolver() -> SenseResolver<Toy> {
    let toy = Toy::default()
        .sense("cat.n.01", "feline mammal pet", Some("feline.n.01"), Some("kitten.n.01"), Some(5.0))
        .sense("dog.n.01", "canine mammal pet", Some("canine.n.01"), Some("puppy.n.01"), Some(5.0))
        .sense("feline.n.01", "carnivore cat family", Some("carnivore.n.01"), None, Some(3.0))
        .sense("canine.n.01", "carnivore dog family", Some("carnivore.n.01"), None, Some(3.0))
        .sense("carnivore.n.01", "meat eating animal", None, None, Some(2.0))
        .sense("kitten.n.01", "young cat", None, None, None)
        .sense("puppy.n.01", "young dog", None, None, None)
        .sense("run.v.01", "move fast mammal", None, None, None)
        .sense("rock.n.01", "hard mineral", None, None, Some(4.0));
    SenseResolver::new(toy)
}

fn id(r: &SenseResolver<Toy>, name: &str) -> SenseId {
    r.arena().intern(name).unwrap()
}

#[test]
fn test_lesk_counts_shared_tokens() {
    let r = resolver();
    let (cat, dog) = (id(&r, "cat.n.01"), id(&r, "dog.n.01"));
    assert!((score(SimilarityMetric::Lesk, cat, dog, &r) - 2.0).abs() < f64::EPSILON);
}

#[test]
fn test_banner_adds_relative_overlaps() {
    let r = resolver();
    let (cat, dog) = (id(&r, "cat.n.01"), id(&r, "dog.n.01"));
    // own: mammal pet; hypernyms: carnivore family; hyponyms: young
    assert!((score(SimilarityMetric::Banner, cat, dog, &r) - 5.0).abs() < f64::EPSILON);
}

#[test]
fn test_banner_without_relatives_is_lesk() {
    let r = resolver();
    let (cat, run) = (id(&r, "cat.n.01"), id(&r, "run.v.01"));
    let banner = score(SimilarityMetric::Banner, cat, run, &r);
    let lesk = score(SimilarityMetric::Lesk, cat, run, &r);
    assert!((banner - lesk).abs() < f64::EPSILON);
    assert!((lesk - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_jcn_uses_least_common_subsumer() {
    let r = resolver();
    let (cat, dog) = (id(&r, "cat.n.01"), id(&r, "dog.n.01"));
    let jcn = score(SimilarityMetric::Jcn, cat, dog, &r);
    assert!((jcn - 1.0 / 6.0).abs() < 1e-12);
}

#[test]
fn test_jcn_identical_sense_is_capped() {
    let r = resolver();
    let cat = id(&r, "cat.n.01");
    assert!((score(SimilarityMetric::Jcn, cat, cat, &r) - 1.0e4).abs() < f64::EPSILON);
}

#[test]
fn test_lch_uses_shortest_path() {
    let r = resolver();
    let (cat, dog) = (id(&r, "cat.n.01"), id(&r, "dog.n.01"));
    let lch = score(SimilarityMetric::Lch, cat, dog, &r);
    assert!((lch - 4.0_f64.ln()).abs() < 1e-12);
}

#[test]
fn test_unrelated_taxonomies_score_zero() {
    let r = resolver();
    let (cat, rock) = (id(&r, "cat.n.01"), id(&r, "rock.n.01"));
    assert!(score(SimilarityMetric::Lch, cat, rock, &r).abs() < f64::EPSILON);
    assert!(score(SimilarityMetric::Jcn, cat, rock, &r).abs() < f64::EPSILON);
}

#[test]
fn test_cross_pos_taxonomy_metrics_fall_back() {
    let r = resolver();
    let (cat, run) = (id(&r, "cat.n.01"), id(&r, "run.v.01"));
    let banner = score(SimilarityMetric::Banner, cat, run, &r);
    assert!((score(SimilarityMetric::Jcn, cat, run, &r) - banner).abs() < f64::EPSILON);
    assert!((score(SimilarityMetric::Lch, cat, run, &r) - banner).abs() < f64::EPSILON);
}

#[test]
fn test_missing_gloss_scores_zero() {
    let r = resolver();
    let (cat, ghost) = (id(&r, "cat.n.01"), id(&r, "ghost.n.01"));
    assert!(score(SimilarityMetric::Lesk, cat, ghost, &r).abs() < f64::EPSILON);
    assert!(score(SimilarityMetric::Banner, ghost, cat, &r).abs() < f64::EPSILON);
}

#[test]
fn test_every_metric_is_commutative_and_non_negative() {
    let r = resolver();
    let names = ["cat.n.01", "dog.n.01", "run.v.01", "rock.n.01", "kitten.n.01"];
    let ids: Vec<SenseId> = names.iter().map(|n| id(&r, n)).collect();
    for metric in SimilarityMetric::ALL {
        for &a in &ids {
            for &b in &ids {
                let ab = score(metric, a, b, &r);
                let ba = score(metric, b, a, &r);
                assert!(ab >= 0.0 && ab.is_finite());
                assert!((ab - ba).abs() < 1e-12, "{metric} not commutative");
            }
        }
    }
}

#[test]
fn test_metric_names_parse() {
    assert_eq!("gloss-overlap".parse::<SimilarityMetric>().unwrap(), SimilarityMetric::Lesk);
    assert_eq!("BANNER".parse::<SimilarityMetric>().unwrap(), SimilarityMetric::Banner);
    assert_eq!("taxonomy-depth".parse::<SimilarityMetric>().unwrap(), SimilarityMetric::Lch);
    assert!("cosine".parse::<SimilarityMetric>().is_err());
}
