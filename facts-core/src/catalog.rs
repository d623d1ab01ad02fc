//! The fact catalog: topic-keyed fact storage with durable JSON snapshots.
//!
//! The catalog merges curated content with user-contributed facts. Topic
//! keys are stored lower-case and listed in insertion order; the reserved
//! `"случайные"` key holds the unscoped random pool, hidden from topic
//! listings but included in unscoped draws. Every mutation rewrites the
//! whole backing file while the store lock is held.

use crate::persist::{self, PersistError};
use crate::source::ContentSource;
use crate::validate;
use parking_lot::Mutex;
use rand::seq::SliceRandom;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

/// Reserved pseudo-topic holding the unscoped random pool.
pub const RANDOM_POOL_TOPIC: &str = "случайные";

/// Default catalog file name inside a data directory.
pub const CATALOG_FILE: &str = "russian_facts.json";

/// How many general-pool facts are seeded into the random pool on first boot.
const SEED_RANDOM_COUNT: usize = 10;

/// The durable topic→facts store.
///
/// All operations take `&self`; a single coarse mutex guards the in-memory
/// state, and mutating operations hold it across the file rewrite so the
/// snapshot on disk always matches some serialized state.
pub struct FactCatalog {
    /// Backing file, rewritten wholesale on every mutation.
    path: PathBuf,
    /// Curated content consulted for by-topic draws.
    source: ContentSource,
    /// Topic entries plus their name index.
    state: Mutex<CatalogState>,
}

impl FactCatalog {
    /// Open a catalog at `path`, seeding it from `source` on first boot.
    ///
    /// Never fails: a missing file is seeded and persisted, an unreadable or
    /// malformed file is logged and replaced by an empty in-memory state
    /// (the file itself is left untouched until the next mutation).
    pub fn open(path: impl Into<PathBuf>, source: ContentSource) -> Self {
        let path = path.into();
        let state = match persist::load_json::<CatalogState>(&path) {
            Ok(Some(state)) => {
                tracing::info!(
                    path = %path.display(),
                    topics = state.entries.len(),
                    "loaded fact catalog"
                );
                state
            }
            Ok(None) => {
                let state = CatalogState::seeded(&source);
                tracing::info!(
                    path = %path.display(),
                    topics = state.entries.len(),
                    "seeded new fact catalog"
                );
                if let Err(e) = persist::save_json(&path, &state) {
                    tracing::error!(
                        path = %path.display(),
                        error = %e,
                        "failed to persist seeded catalog"
                    );
                }
                state
            }
            Err(e) => {
                tracing::error!(
                    path = %path.display(),
                    error = %e,
                    "failed to load fact catalog, starting empty"
                );
                CatalogState::default()
            }
        };

        Self {
            path,
            source,
            state: Mutex::new(state),
        }
    }

    /// All topic names except the random pool, in insertion order.
    pub fn topics(&self) -> Vec<String> {
        self.state
            .lock()
            .entries
            .iter()
            .filter(|e| e.name != RANDOM_POOL_TOPIC)
            .map(|e| e.name.clone())
            .collect()
    }

    /// Draw a uniformly-random fact from the union of all accumulated facts,
    /// random pool included.
    ///
    /// An empty catalog falls back to the content source's general pool;
    /// `None` means both are empty.
    pub fn random_fact(&self) -> Option<String> {
        {
            let state = self.state.lock();
            let all: Vec<&str> = state
                .entries
                .iter()
                .flat_map(|e| e.facts.iter().map(String::as_str))
                .collect();
            if let Some(fact) = all.choose(&mut rand::thread_rng()) {
                return Some((*fact).to_string());
            }
        }

        self.source.random_fact().map(str::to_string)
    }

    /// Draw a curated fact for a topic.
    ///
    /// The draw always comes from the content source's pool, not from the
    /// accumulated catalog; the drawn fact is then recorded in the catalog
    /// (if new) and the file rewritten. `Ok(None)` means the source does not
    /// recognize the topic; nothing is written in that case. A failed write
    /// surfaces as `Err` with the in-memory insert retained.
    pub fn fact_for_topic(&self, topic: &str) -> Result<Option<String>, PersistError> {
        let topic = validate::normalize_topic(topic);
        let fact = match self.source.fact_for_topic(&topic) {
            Some(fact) => fact.to_string(),
            None => return Ok(None),
        };

        let mut state = self.state.lock();
        if state.insert_fact(&topic, &fact) {
            tracing::debug!(topic = %topic, "recorded curated fact in catalog");
            self.persist_locked(&state)?;
        }
        Ok(Some(fact))
    }

    /// Append a fact verbatim, creating the topic if needed.
    ///
    /// Length validation is the caller's job (see [`crate::validate`]); this
    /// operation never re-validates. A duplicate `(topic, text)` pair is a
    /// silent no-op that skips the file rewrite. Fails only on a write error.
    pub fn add_fact(&self, topic: &str, text: &str) -> Result<(), PersistError> {
        let topic = validate::normalize_topic(topic);
        let mut state = self.state.lock();
        if state.insert_fact(&topic, text) {
            self.persist_locked(&state)?;
            tracing::info!(topic = %topic, "added fact");
        }
        Ok(())
    }

    /// Snapshot of one topic's facts, in insertion order.
    pub fn topic_facts(&self, topic: &str) -> Option<Vec<String>> {
        let topic = validate::normalize_topic(topic);
        let state = self.state.lock();
        let &idx = state.index.get(&topic)?;
        Some(state.entries[idx].facts.clone())
    }

    /// Total number of stored facts, random pool included.
    pub fn fact_count(&self) -> usize {
        self.state
            .lock()
            .entries
            .iter()
            .map(|e| e.facts.len())
            .sum()
    }

    fn persist_locked(&self, state: &CatalogState) -> Result<(), PersistError> {
        if let Err(e) = persist::save_json(&self.path, state) {
            tracing::error!(
                path = %self.path.display(),
                error = %e,
                "failed to persist fact catalog"
            );
            return Err(e);
        }
        Ok(())
    }
}

// =============================================================================
// Catalog State
// =============================================================================

/// One topic and its ordered facts.
#[derive(Debug, Clone, PartialEq)]
struct TopicEntry {
    name: String,
    facts: Vec<String>,
}

/// In-memory catalog structure: ordered entries plus a name index.
///
/// A plain map cannot promise "file key order = topic insertion order", so
/// entries live in a `Vec` and the index maps lower-cased names to positions.
#[derive(Debug, Clone, Default, PartialEq)]
struct CatalogState {
    entries: Vec<TopicEntry>,
    index: HashMap<String, usize>,
}

impl CatalogState {
    /// Build the first-boot state: one curated fact per source topic, in
    /// source order, plus a sample of the general pool under the random key.
    fn seeded(source: &ContentSource) -> Self {
        let mut state = Self::default();
        let mut rng = rand::thread_rng();

        for topic in source.topics() {
            if let Some(fact) = source.fact_for_topic_with_rng(topic, &mut rng) {
                state.insert_fact(topic, fact);
            }
        }
        for fact in source.sample_general(SEED_RANDOM_COUNT, &mut rng) {
            state.insert_fact(RANDOM_POOL_TOPIC, fact);
        }

        state
    }

    /// Get a topic's position, creating an empty entry if absent.
    fn get_or_create(&mut self, topic: &str) -> usize {
        if let Some(&idx) = self.index.get(topic) {
            return idx;
        }
        let idx = self.entries.len();
        self.entries.push(TopicEntry {
            name: topic.to_string(),
            facts: Vec::new(),
        });
        self.index.insert(topic.to_string(), idx);
        idx
    }

    /// Insert a fact under an already-normalized topic key.
    ///
    /// Returns `true` if the state changed, `false` on a duplicate.
    fn insert_fact(&mut self, topic: &str, fact: &str) -> bool {
        let idx = self.get_or_create(topic);
        let facts = &mut self.entries[idx].facts;
        if facts.iter().any(|f| f == fact) {
            return false;
        }
        facts.push(fact.to_string());
        true
    }

    /// Replace a topic's facts wholesale, keeping first-seen key order.
    /// Used when loading a file; a repeated key keeps its original position.
    fn replace_topic(&mut self, name: String, facts: Vec<String>) {
        if let Some(&idx) = self.index.get(&name) {
            self.entries[idx].facts = facts;
            return;
        }
        let idx = self.entries.len();
        self.index.insert(name.clone(), idx);
        self.entries.push(TopicEntry { name, facts });
    }
}

// Derived serde cannot pin JSON object key order to insertion order, so the
// file format (`{ "<topic>": ["<fact>", ...], ... }`) is mapped by hand.

impl Serialize for CatalogState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.name, &entry.facts)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CatalogState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = CatalogState;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of topic names to fact arrays")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut state = CatalogState::default();
                while let Some((name, facts)) = access.next_entry::<String, Vec<String>>()? {
                    state.replace_topic(name, facts);
                }
                Ok(state)
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}
