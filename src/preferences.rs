//! UI preferences carried as an explicit context object.
//!
//! The flags live in one record under a fixed key instead of being read
//! ambiently wherever a surface needs them. Load once at startup, thread the
//! context through, save on change.

use serde::{Deserialize, Serialize};

use crate::storage::{KeyValueStore, StorageResult};

/// Fixed key the preferences record persists under.
pub const PREFERENCES_KEY: &str = "fabric-preferences";

/// Persisted UI flags: theme and the first-visit onboarding marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UiPreferences {
    pub dark_mode: bool,
    pub has_visited: bool,
}

/// Owns the preferences for one running surface.
#[derive(Debug, Clone, Default)]
pub struct PreferencesContext {
    prefs: UiPreferences,
}

impl PreferencesContext {
    pub fn new(prefs: UiPreferences) -> Self {
        Self { prefs }
    }

    /// Load the persisted record, degrading to defaults when the record is
    /// missing or unreadable. First launch and a wiped store look the same.
    pub async fn load(store: &dyn KeyValueStore) -> Self {
        let prefs = match store.get(PREFERENCES_KEY).await {
            Ok(Some(raw)) => match serde_json::from_value(raw) {
                Ok(prefs) => prefs,
                Err(err) => {
                    tracing::warn!(%err, "malformed preferences record, using defaults");
                    UiPreferences::default()
                }
            },
            Ok(None) => UiPreferences::default(),
            Err(err) => {
                tracing::warn!(%err, "failed to read preferences, using defaults");
                UiPreferences::default()
            }
        };
        Self { prefs }
    }

    /// Write the whole record under [`PREFERENCES_KEY`].
    pub async fn save(&self, store: &dyn KeyValueStore) -> StorageResult<()> {
        store
            .put(PREFERENCES_KEY, serde_json::to_value(self.prefs)?)
            .await
    }

    pub fn preferences(&self) -> UiPreferences {
        self.prefs
    }

    pub fn dark_mode(&self) -> bool {
        self.prefs.dark_mode
    }

    pub fn set_dark_mode(&mut self, dark_mode: bool) {
        self.prefs.dark_mode = dark_mode;
    }

    pub fn toggle_dark_mode(&mut self) -> bool {
        self.prefs.dark_mode = !self.prefs.dark_mode;
        self.prefs.dark_mode
    }

    /// True exactly once per stored lifetime: reports whether this is the
    /// first visit and marks the visit. Callers show onboarding when this
    /// returns true, then [`save`](Self::save).
    pub fn first_visit(&mut self) -> bool {
        let first = !self.prefs.has_visited;
        self.prefs.has_visited = true;
        first
    }
}
