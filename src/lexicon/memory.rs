// src/lexicon/memory.rs
//! A JSON-backed, fully in-memory knowledge source.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::{gloss, KnowledgeSource, PartOfSpeech, SenseKey};
use crate::error::{Result, SenseError};

const POS_ORDER: [PartOfSpeech; 4] = [
    PartOfSpeech::Noun,
    PartOfSpeech::Verb,
    PartOfSpeech::Adjective,
    PartOfSpeech::Adverb,
];

#[derive(Debug, Deserialize)]
struct RawLexicon {
    /// `"word.pos"` -> sense identifiers, most frequent first.
    #[serde(default)]
    words: HashMap<String, Vec<String>>,
    #[serde(default)]
    senses: HashMap<String, RawSense>,
    /// Inflected form -> base form.
    #[serde(default)]
    lemmas: HashMap<String, String>,
    /// POS tag -> maximum taxonomy depth.
    #[serde(default)]
    depths: HashMap<String, usize>,
}

#[derive(Debug, Deserialize)]
struct RawSense {
    #[serde(default)]
    gloss: String,
    #[serde(default)]
    hypernyms: Vec<String>,
    #[serde(default)]
    hyponyms: Vec<String>,
    #[serde(default)]
    ic: Option<f64>,
}

#[derive(Debug, Clone)]
struct SenseEntry {
    gloss: Vec<String>,
    hypernyms: Vec<String>,
    hyponyms: Vec<String>,
    ic: Option<f64>,
}

/// Deterministic lexicon held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryLexicon {
    words: HashMap<(String, PartOfSpeech), Vec<String>>,
    senses: HashMap<String, SenseEntry>,
    lemmas: HashMap<String, String>,
    depths: HashMap<PartOfSpeech, usize>,
}

impl MemoryLexicon {
    /// Parses a lexicon document. Layout: `{"words": {"bank.n": ["bank.n.01"]}, "senses": {"bank.n.01":
    /// {"gloss": "...", "hypernyms": [], "hyponyms": [], "ic": 3.2}},
    /// "lemmas": {"banks": "bank"}, "depths": {"n": 19}}`.
    ///
    /// # Errors
    /// Returns `Lexicon` on malformed JSON or a word key without a POS suffix.
    pub fn from_json(text: &str) -> Result<Self> {
        let raw: RawLexicon = serde_json::from_str(text)?;
        Self::from_raw(raw)
    }

    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| SenseError::io_at(e, path))?;
        Self::from_json(&text)
    }

    fn from_raw(raw: RawLexicon) -> Result<Self> {
        let mut words = HashMap::with_capacity(raw.words.len());
        for (key, senses) in raw.words {
            let (word, pos) = split_word_key(&key)?;
            words.insert((word.to_lowercase(), pos), senses);
        }

        let lemmas: HashMap<String, String> = raw
            .lemmas
            .into_iter()
            .map(|(k, v)| (k.to_lowercase(), v.to_lowercase()))
            .collect();

        let senses = raw
            .senses
            .into_iter()
            .map(|(name, s)| {
                let tokens = gloss::normalize(&s.gloss);
                let entry = SenseEntry {
                    gloss: tokens,
                    hypernyms: s.hypernyms,
                    hyponyms: s.hyponyms,
                    ic: s.ic,
                };
                (name, entry)
            })
            .collect();

        let mut depths = HashMap::new();
        for (tag, depth) in raw.depths {
            let pos = tag.parse::<PartOfSpeech>().map_err(|_| {
                SenseError::Lexicon(format!("unknown part of speech '{tag}' in depths"))
            })?;
            depths.insert(pos, depth);
        }

        Ok(Self {
            words,
            senses,
            lemmas,
            depths,
        })
    }

    fn lookup(&self, word: &str, pos: PartOfSpeech) -> Option<&Vec<String>> {
        let lowered = word.to_lowercase();
        if let Some(found) = self.words.get(&(lowered.clone(), pos)) {
            return Some(found);
        }
        let base = self.lemmas.get(&lowered)?;
        self.words.get(&(base.clone(), pos))
    }
}

fn split_word_key(key: &str) -> Result<(&str, PartOfSpeech)> {
    let (word, tag) = key
        .rsplit_once('.')
        .ok_or_else(|| SenseError::Lexicon(format!("word key '{key}' lacks a .pos suffix")))?;
    let pos = tag
        .parse::<PartOfSpeech>()
        .map_err(|_| SenseError::Lexicon(format!("word key '{key}' has a bad pos suffix")))?;
    if word.is_empty() {
        return Err(SenseError::Lexicon(format!("word key '{key}' has no word")));
    }
    Ok((word, pos))
}

impl KnowledgeSource for MemoryLexicon {
    fn senses_of(&self, word: &str, pos: Option<PartOfSpeech>) -> Vec<String> {
        match pos {
            Some(p) => self.lookup(word, p).cloned().unwrap_or_default(),
            None => POS_ORDER
                .iter()
                .filter_map(|p| self.lookup(word, *p))
                .flatten()
                .cloned()
                .collect(),
        }
    }

    fn gloss_of(&self, sense: &str) -> Option<Vec<String>> {
        self.senses.get(sense).map(|s| s.gloss.clone())
    }

    fn hypernyms_of(&self, sense: &str) -> Vec<String> {
        self.senses
            .get(sense)
            .map(|s| s.hypernyms.clone())
            .unwrap_or_default()
    }

    fn hyponyms_of(&self, sense: &str) -> Vec<String> {
        self.senses
            .get(sense)
            .map(|s| s.hyponyms.clone())
            .unwrap_or_default()
    }

    fn information_content(&self, sense: &str) -> Option<f64> {
        self.senses.get(sense).and_then(|s| s.ic)
    }

    fn taxonomy_depth(&self, pos: PartOfSpeech) -> Option<usize> {
        self.depths.get(&pos).copied()
    }

    fn lemmatize(&self, token: &str) -> Option<String> {
        self.lemmas.get(token).cloned()
    }
}

/// Checks that every sense named by the lexicon parses as a sense key.
/// Returns the offending identifiers; they will be skipped at lookup time.
#[must_use]
pub fn malformed_keys(lexicon: &MemoryLexicon) -> Vec<String> {
    let mut bad: Vec<String> = lexicon
        .words
        .values()
        .flatten()
        .chain(lexicon.senses.keys())
        .filter(|name| SenseKey::parse(name).is_err())
        .cloned()
        .collect();
    bad.sort();
    bad.dedup();
    bad
}
