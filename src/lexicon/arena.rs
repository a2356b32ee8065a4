// src/lexicon/arena.rs
//! Interning of sense identifiers into copyable handles.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use super::SenseKey;
use crate::error::Result;

/// Opaque handle for one interned sense. Equality is identity of the
/// underlying identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SenseId(u32);

impl SenseId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

struct Slot {
    name: Arc<str>,
    key: SenseKey,
}

#[derive(Default)]
struct ArenaInner {
    slots: Vec<Slot>,
    by_name: HashMap<Arc<str>, SenseId>,
}

/// Append-only, thread-safe table of every sense the process has seen.
#[derive(Default)]
pub struct SenseArena {
    inner: RwLock<ArenaInner>,
}

impl SenseArena {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the handle for `name`, interning it on first sight.
    ///
    /// # Errors
    /// Returns `MalformedSenseKey` if the identifier does not parse; nothing
    /// is interned in that case.
    #[allow(clippy::cast_possible_truncation)]
    pub fn intern(&self, name: &str) -> Result<SenseId> {
        if let Some(id) = self.lookup(name) {
            return Ok(id);
        }
        let key = SenseKey::parse(name)?;

        let mut inner = self.inner.write();
        // Another thread may have won the race between the read and write locks.
        if let Some(&id) = inner.by_name.get(name) {
            return Ok(id);
        }
        let id = SenseId(inner.slots.len() as u32);
        let name: Arc<str> = Arc::from(name);
        inner.slots.push(Slot {
            name: Arc::clone(&name),
            key,
        });
        inner.by_name.insert(name, id);
        Ok(id)
    }

    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<SenseId> {
        self.inner.read().by_name.get(name).copied()
    }

    /// Identifier text for a handle issued by this arena.
    #[must_use]
    pub fn name(&self, id: SenseId) -> Option<Arc<str>> {
        self.inner
            .read()
            .slots
            .get(id.index())
            .map(|s| Arc::clone(&s.name))
    }

    #[must_use]
    pub fn key(&self, id: SenseId) -> Option<SenseKey> {
        self.inner.read().slots.get(id.index()).map(|s| s.key.clone())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
