//! Per-user preferences and activity counters.
//!
//! Records are keyed by numeric user id (stringified in the JSON file, as
//! JSON object keys must be) and carry a favorite topic plus usage stats.
//! Reads for unknown users answer with defaults and never allocate a record;
//! only mutations create one and rewrite the backing file.

use crate::persist::{self, PersistError};
use crate::validate;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Default preferences file name inside a data directory.
pub const PREFS_FILE: &str = "user_preferences.json";

type PrefsState = BTreeMap<i64, UserRecord>;

/// One user's stored preferences.
///
/// Either field may be missing on load (partial records from older or
/// hand-edited files); both fall back to their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserRecord {
    /// Favorite topic, lower-cased; `None` when unset or cleared.
    pub favorite_topic: Option<String>,
    /// Usage counters.
    #[serde(default)]
    pub stats: UserStats,
}

/// Activity counters for one user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserStats {
    /// Facts delivered to this user so far.
    #[serde(default)]
    pub total_facts: u64,
    /// When the user last received a fact.
    pub last_active: Option<DateTime<Utc>>,
}

/// Read-only stats view, defaulted for users without a record.
#[derive(Debug, Clone, Default)]
pub struct StatsSnapshot {
    pub total_facts: u64,
    pub last_active: Option<DateTime<Utc>>,
    pub favorite_topic: Option<String>,
}

/// The durable per-user preference store.
///
/// Same locking discipline as the fact catalog: one coarse mutex, held
/// across each read-mutate-rewrite cycle.
pub struct PreferenceStore {
    path: PathBuf,
    state: Mutex<PrefsState>,
}

impl PreferenceStore {
    /// Open a store at `path`.
    ///
    /// Never fails: a missing file yields an empty store (the file is not
    /// created until the first mutation), and an unreadable or malformed
    /// file is logged and replaced by an empty in-memory state.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let state = match persist::load_json::<PrefsState>(&path) {
            Ok(Some(state)) => {
                tracing::info!(
                    path = %path.display(),
                    users = state.len(),
                    "loaded user preferences"
                );
                state
            }
            Ok(None) => PrefsState::new(),
            Err(e) => {
                tracing::error!(
                    path = %path.display(),
                    error = %e,
                    "failed to load user preferences, starting empty"
                );
                PrefsState::new()
            }
        };

        Self {
            path,
            state: Mutex::new(state),
        }
    }

    /// The user's favorite topic, or `None` when unset.
    pub fn favorite_topic(&self, user_id: i64) -> Option<String> {
        self.state
            .lock()
            .get(&user_id)
            .and_then(|r| r.favorite_topic.clone())
    }

    /// Set or clear the user's favorite topic.
    ///
    /// The topic is lower-cased before storage; no existence check is made
    /// against any catalog. Fails only on a write error.
    pub fn set_favorite_topic(&self, user_id: i64, topic: Option<&str>) -> Result<(), PersistError> {
        let topic = topic.map(validate::normalize_topic);
        let mut state = self.state.lock();
        get_or_create(&mut state, user_id).favorite_topic = topic;
        self.persist_locked(&state)
    }

    /// Count one delivered fact: bump the total and stamp the current time.
    pub fn record_activity(&self, user_id: i64) -> Result<(), PersistError> {
        let mut state = self.state.lock();
        let stats = &mut get_or_create(&mut state, user_id).stats;
        stats.total_facts += 1;
        stats.last_active = Some(Utc::now());
        self.persist_locked(&state)
    }

    /// Stats view for a user; unknown users get zeros and `None`s without
    /// a record being created.
    pub fn stats(&self, user_id: i64) -> StatsSnapshot {
        let state = self.state.lock();
        match state.get(&user_id) {
            Some(record) => StatsSnapshot {
                total_facts: record.stats.total_facts,
                last_active: record.stats.last_active,
                favorite_topic: record.favorite_topic.clone(),
            },
            None => StatsSnapshot::default(),
        }
    }

    /// Number of users with a stored record.
    pub fn user_count(&self) -> usize {
        self.state.lock().len()
    }

    fn persist_locked(&self, state: &PrefsState) -> Result<(), PersistError> {
        if let Err(e) = persist::save_json(&self.path, state) {
            tracing::error!(
                path = %self.path.display(),
                error = %e,
                "failed to persist user preferences"
            );
            return Err(e);
        }
        Ok(())
    }
}

fn get_or_create(state: &mut PrefsState, user_id: i64) -> &mut UserRecord {
    state.entry(user_id).or_default()
}
