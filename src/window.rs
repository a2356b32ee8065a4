// src/window.rs
//! Word occurrences and the content-word windows handed to the graph builder.

use std::fmt;

use crate::lexicon::PartOfSpeech;

/// One token instance: the surface word plus its position in the context.
/// The same word at two positions is two occurrences.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Occurrence {
    pub word: String,
    pub index: usize,
}

impl Occurrence {
    #[must_use]
    pub fn new(word: impl Into<String>, index: usize) -> Self {
        Self {
            word: word.into(),
            index,
        }
    }
}

impl fmt::Display for Occurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.word, self.index)
    }
}

/// A content word ready for sense lookup. `pos == None` means the tagger's
/// class was not trusted and every part of speech is searched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WindowWord {
    pub occurrence: Occurrence,
    pub pos: Option<PartOfSpeech>,
}

impl WindowWord {
    #[must_use]
    pub fn new(word: impl Into<String>, pos: Option<PartOfSpeech>, index: usize) -> Self {
        Self {
            occurrence: Occurrence::new(word, index),
            pos,
        }
    }
}

/// Builds a window from a Penn-tagged sentence, keeping only open-class words.
///
/// Words joined by `-` or `/` are split into parts that share the original
/// index and carry no part of speech, since taggers rarely tag such compounds
/// usefully.
#[must_use]
pub fn clean_tagged_sentence<S: AsRef<str>>(tagged: &[(S, S)]) -> Vec<WindowWord> {
    tagged
        .iter()
        .enumerate()
        .flat_map(|(index, (word, tag))| clean_word(word.as_ref(), tag.as_ref(), index))
        .collect()
}

/// Cleans one tagged token at `index`.
#[must_use]
pub fn clean_word(word: &str, tag: &str, index: usize) -> Vec<WindowWord> {
    if word.contains(['-', '/', '\\']) {
        return word
            .split(['-', '/', '\\'])
            .filter(|part| !part.is_empty())
            .map(|part| WindowWord::new(part, None, index))
            .collect();
    }
    match PartOfSpeech::from_penn(tag) {
        Some(pos) => vec![WindowWord::new(word, Some(pos), index)],
        None => Vec::new(),
    }
}
