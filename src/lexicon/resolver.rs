// src/lexicon/resolver.rs
//! Memoizing view over a [`KnowledgeSource`], keyed by interned [`SenseId`]s.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use super::{gloss, KnowledgeSource, PartOfSpeech, SenseArena, SenseId};
use crate::window::WindowWord;

/// Everything the scorers need about one sense.
#[derive(Debug, Clone)]
pub struct SenseProfile {
    pub pos: PartOfSpeech,
    /// Empty when the knowledge source has no gloss for the sense.
    pub gloss: Arc<[String]>,
    pub hypernym: Option<SenseId>,
    pub hyponym: Option<SenseId>,
}

/// Hypernym ancestors of a sense (itself included at distance 0) with the
/// length of the shortest path to each.
pub type Ancestors = HashMap<SenseId, usize>;

/// Knowledge source plus the process-lifetime gloss cache. Entries are added
/// lazily and never invalidated.
pub struct SenseResolver<K> {
    source: K,
    arena: SenseArena,
    profiles: RwLock<HashMap<SenseId, Arc<SenseProfile>>>,
    ancestors: RwLock<HashMap<SenseId, Arc<Ancestors>>>,
}

impl<K: KnowledgeSource> SenseResolver<K> {
    #[must_use]
    pub fn new(source: K) -> Self {
        Self {
            source,
            arena: SenseArena::new(),
            profiles: RwLock::new(HashMap::new()),
            ancestors: RwLock::new(HashMap::new()),
        }
    }

    #[must_use]
    pub fn source(&self) -> &K {
        &self.source
    }

    #[must_use]
    pub fn arena(&self) -> &SenseArena {
        &self.arena
    }

    /// Up to `limit` most frequent senses of a window word. Identifiers the
    /// arena rejects are dropped as lookup misses.
    #[must_use]
    pub fn candidates(&self, word: &WindowWord, limit: usize) -> Vec<SenseId> {
        self.source
            .senses_of(&word.occurrence.word, word.pos)
            .iter()
            .take(limit)
            .filter_map(|name| self.intern_or_skip(name))
            .collect()
    }

    /// The knowledge source's first sense for a word, ignoring the fan-out bound.
    #[must_use]
    pub fn most_frequent(&self, word: &WindowWord) -> Option<SenseId> {
        self.source
            .senses_of(&word.occurrence.word, word.pos)
            .iter()
            .find_map(|name| self.intern_or_skip(name))
    }

    fn intern_or_skip(&self, name: &str) -> Option<SenseId> {
        match self.arena.intern(name) {
            Ok(id) => Some(id),
            Err(e) => {
                debug!("skipping sense: {e}");
                None
            }
        }
    }

    /// Cached gloss and first relatives of a sense.
    #[must_use]
    pub fn profile(&self, id: SenseId) -> Arc<SenseProfile> {
        if let Some(hit) = self.profiles.read().get(&id) {
            return Arc::clone(hit);
        }
        let built = Arc::new(self.build_profile(id));
        let mut profiles = self.profiles.write();
        Arc::clone(profiles.entry(id).or_insert(built))
    }

    fn build_profile(&self, id: SenseId) -> SenseProfile {
        let (name, pos) = match (self.arena.name(id), self.arena.key(id)) {
            (Some(name), Some(key)) => (name, key.pos),
            _ => {
                return SenseProfile {
                    pos: PartOfSpeech::Noun,
                    gloss: Arc::from(Vec::new()),
                    hypernym: None,
                    hyponym: None,
                }
            }
        };
        let tokens = self.source.gloss_of(&name).unwrap_or_default();
        let gloss = gloss::stem_tokens(tokens, |t| self.source.lemmatize(t));
        let hypernym = self
            .source
            .hypernyms_of(&name)
            .first()
            .and_then(|h| self.intern_or_skip(h));
        let hyponym = self
            .source
            .hyponyms_of(&name)
            .first()
            .and_then(|h| self.intern_or_skip(h));

        SenseProfile {
            pos,
            gloss: Arc::from(gloss),
            hypernym,
            hyponym,
        }
    }

    #[must_use]
    pub fn gloss(&self, id: SenseId) -> Arc<[String]> {
        Arc::clone(&self.profile(id).gloss)
    }

    #[must_use]
    pub fn information_content(&self, id: SenseId) -> Option<f64> {
        let name = self.arena.name(id)?;
        self.source.information_content(&name)
    }

    #[must_use]
    pub fn taxonomy_depth(&self, pos: PartOfSpeech) -> Option<usize> {
        self.source.taxonomy_depth(pos)
    }

    /// Breadth-first closure over every hypernym edge, cached per sense.
    #[must_use]
    pub fn ancestors(&self, id: SenseId) -> Arc<Ancestors> {
        if let Some(hit) = self.ancestors.read().get(&id) {
            return Arc::clone(hit);
        }
        let built = Arc::new(self.walk_hypernyms(id));
        let mut cache = self.ancestors.write();
        Arc::clone(cache.entry(id).or_insert(built))
    }

    fn walk_hypernyms(&self, start: SenseId) -> Ancestors {
        let mut seen = Ancestors::new();
        let mut queue = VecDeque::new();
        seen.insert(start, 0);
        queue.push_back((start, 0usize));

        while let Some((id, depth)) = queue.pop_front() {
            let Some(name) = self.arena.name(id) else {
                continue;
            };
            for parent in self.source.hypernyms_of(&name) {
                let Some(pid) = self.intern_or_skip(&parent) else {
                    continue;
                };
                if let std::collections::hash_map::Entry::Vacant(slot) = seen.entry(pid) {
                    slot.insert(depth + 1);
                    queue.push_back((pid, depth + 1));
                }
            }
        }
        seen
    }

    /// Identifier text for display.
    #[must_use]
    pub fn name(&self, id: SenseId) -> String {
        self.arena
            .name(id)
            .map_or_else(|| format!("<sense {}>", id.index()), |n| n.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::MemoryLexicon;

    fn lexicon() -> MemoryLexicon {
        MemoryLexicon::from_json(
            r#"{
            "words": {"dog.n": ["dog.n.01", "bad.key", "dog.n.02", "dog.n.03", "dog.n.04"]},
            "senses": {
                "dog.n.01": {"gloss": "a domestic canine", "hypernyms": ["canine.n.01"], "hyponyms": ["puppy.n.01"]},
                "canine.n.01": {"gloss": "a carnivore", "hypernyms": ["carnivore.n.01"]},
                "carnivore.n.01": {"gloss": "something that eats meat", "hypernyms": ["canine.n.01"]}
            },
            "lemmas": {"eats": "eat"}
        }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_candidates_truncate_before_skipping_misses() {
        let r = SenseResolver::new(lexicon());
        let word = WindowWord::new("dog", Some(PartOfSpeech::Noun), 0);
        let names: Vec<_> = r.candidates(&word, 3).into_iter().map(|id| r.name(id)).collect();
        assert_eq!(names, vec!["dog.n.01", "dog.n.02"]);
    }

    #[test]
    fn test_profile_keeps_first_relatives() {
        let r = SenseResolver::new(lexicon());
        let id = r.arena().intern("dog.n.01").unwrap();
        let p = r.profile(id);
        assert_eq!(p.gloss.len(), 3);
        assert_eq!(p.hypernym.map(|h| r.name(h)).as_deref(), Some("canine.n.01"));
        assert_eq!(p.hyponym.map(|h| r.name(h)).as_deref(), Some("puppy.n.01"));
    }

    #[test]
    fn test_profile_gloss_is_stemmed() {
        let r = SenseResolver::new(lexicon());
        let id = r.arena().intern("canine.n.01").unwrap();
        assert_eq!(r.gloss(id).to_vec(), vec!["a".to_string(), "carnivore".to_string()]);

        let id = r.arena().intern("carnivore.n.01").unwrap();
        assert!(r.gloss(id).iter().any(|t| t == "eat"));
        assert!(!r.gloss(id).iter().any(|t| t == "eats"));
    }

    #[test]
    fn test_missing_gloss_is_empty() {
        let r = SenseResolver::new(lexicon());
        let id = r.arena().intern("dog.n.02").unwrap();
        assert!(r.gloss(id).is_empty());
    }

    #[test]
    fn test_ancestor_walk_survives_cycles() {
        let r = SenseResolver::new(lexicon());
        let id = r.arena().intern("dog.n.01").unwrap();
        let anc = r.ancestors(id);
        assert_eq!(anc.len(), 3);
        let carnivore = r.arena().lookup("carnivore.n.01").unwrap();
        assert_eq!(anc.get(&carnivore), Some(&2));
    }
}
