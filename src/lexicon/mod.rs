// src/lexicon/mod.rs
//! The lexical knowledge source boundary: parts of speech, sense keys, and
//! the read-only oracle the ranking core consumes.

pub mod arena;
pub mod gloss;
pub mod memory;
pub mod resolver;

pub use arena::{SenseArena, SenseId};
pub use memory::MemoryLexicon;
pub use resolver::{SenseProfile, SenseResolver};

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::SenseError;

/// Open-class part of speech, the only word classes that carry senses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl PartOfSpeech {
    /// Single-letter tag used inside sense keys.
    #[must_use]
    pub fn tag(self) -> char {
        match self {
            Self::Noun => 'n',
            Self::Verb => 'v',
            Self::Adjective => 'a',
            Self::Adverb => 'r',
        }
    }

    /// Parses a sense-key tag. Satellite adjectives (`s`) fold into adjectives.
    #[must_use]
    pub fn from_tag(tag: char) -> Option<Self> {
        match tag {
            'n' => Some(Self::Noun),
            'v' => Some(Self::Verb),
            'a' | 's' => Some(Self::Adjective),
            'r' => Some(Self::Adverb),
            _ => None,
        }
    }

    /// Maps a Penn Treebank tag onto an open word class.
    #[must_use]
    pub fn from_penn(tag: &str) -> Option<Self> {
        match tag.chars().next()? {
            'J' => Some(Self::Adjective),
            'N' => Some(Self::Noun),
            'V' => Some(Self::Verb),
            'R' => Some(Self::Adverb),
            _ => None,
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for PartOfSpeech {
    type Err = SenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_tag(c),
            _ => None,
        }
        .ok_or_else(|| SenseError::MalformedSenseKey(format!("bad part of speech '{s}'")))
    }
}

/// A parsed `lemma.pos.NN` sense identifier.
///
/// Splitting happens from the right, so lemmas may themselves contain dots
/// (`a.m..n.01`); a key whose tail segments are not a POS tag and a sense
/// number is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SenseKey {
    pub lemma: String,
    pub pos: PartOfSpeech,
    pub number: u32,
}

impl SenseKey {
    /// # Errors
    /// Returns `MalformedSenseKey` if the identifier does not split into
    /// a non-empty lemma, a POS tag, and a numeric sense index.
    pub fn parse(raw: &str) -> Result<Self, SenseError> {
        let malformed = || SenseError::MalformedSenseKey(raw.to_string());
        let mut parts = raw.rsplitn(3, '.');
        let number = parts.next().ok_or_else(malformed)?;
        let pos = parts.next().ok_or_else(malformed)?;
        let lemma = parts.next().ok_or_else(malformed)?;

        if lemma.is_empty() || number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        let pos = pos.parse::<PartOfSpeech>().map_err(|_| malformed())?;
        let number = number.parse::<u32>().map_err(|_| malformed())?;

        Ok(Self {
            lemma: lemma.to_string(),
            pos,
            number,
        })
    }
}

impl fmt::Display for SenseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{:02}", self.lemma, self.pos, self.number)
    }
}

/// Read-only lexical oracle. Every method must be deterministic; the core
/// caches results for the life of the process.
pub trait KnowledgeSource: Send + Sync {
    /// Candidate senses, most frequent first. `None` searches every part of speech.
    fn senses_of(&self, word: &str, pos: Option<PartOfSpeech>) -> Vec<String>;

    /// Lowercased, punctuation-free gloss tokens, or `None` if the sense is
    /// unknown. The resolver stems them through [`Self::lemmatize`].
    fn gloss_of(&self, sense: &str) -> Option<Vec<String>>;

    fn hypernyms_of(&self, sense: &str) -> Vec<String>;

    fn hyponyms_of(&self, sense: &str) -> Vec<String>;

    /// Corpus information content, `-ln p(sense)`.
    fn information_content(&self, _sense: &str) -> Option<f64> {
        None
    }

    /// Maximum hypernym depth of the taxonomy for one part of speech.
    fn taxonomy_depth(&self, _pos: PartOfSpeech) -> Option<usize> {
        None
    }

    /// Morphological base form of a gloss token.
    fn lemmatize(&self, _token: &str) -> Option<String> {
        None
    }
}

impl<T: KnowledgeSource + ?Sized> KnowledgeSource for &T {
    fn senses_of(&self, word: &str, pos: Option<PartOfSpeech>) -> Vec<String> {
        (**self).senses_of(word, pos)
    }
    fn gloss_of(&self, sense: &str) -> Option<Vec<String>> {
        (**self).gloss_of(sense)
    }
    fn hypernyms_of(&self, sense: &str) -> Vec<String> {
        (**self).hypernyms_of(sense)
    }
    fn hyponyms_of(&self, sense: &str) -> Vec<String> {
        (**self).hyponyms_of(sense)
    }
    fn information_content(&self, sense: &str) -> Option<f64> {
        (**self).information_content(sense)
    }
    fn taxonomy_depth(&self, pos: PartOfSpeech) -> Option<usize> {
        (**self).taxonomy_depth(pos)
    }
    fn lemmatize(&self, token: &str) -> Option<String> {
        (**self).lemmatize(token)
    }
}

impl<T: KnowledgeSource + ?Sized> KnowledgeSource for Arc<T> {
    fn senses_of(&self, word: &str, pos: Option<PartOfSpeech>) -> Vec<String> {
        (**self).senses_of(word, pos)
    }
    fn gloss_of(&self, sense: &str) -> Option<Vec<String>> {
        (**self).gloss_of(sense)
    }
    fn hypernyms_of(&self, sense: &str) -> Vec<String> {
        (**self).hypernyms_of(sense)
    }
    fn hyponyms_of(&self, sense: &str) -> Vec<String> {
        (**self).hyponyms_of(sense)
    }
    fn information_content(&self, sense: &str) -> Option<f64> {
        (**self).information_content(sense)
    }
    fn taxonomy_depth(&self, pos: PartOfSpeech) -> Option<usize> {
        (**self).taxonomy_depth(pos)
    }
    fn lemmatize(&self, token: &str) -> Option<String> {
        (**self).lemmatize(token)
    }
}
