//! Browser sessionStorage-backed geometry store

use tracing::warn;

use super::{storage_key, GeometryStore, PersistedGeometry};

/// Store backed by the browser's `sessionStorage`.
///
/// Records are JSON-encoded under `tally.panel.<kind>`. All failure
/// modes degrade silently: no storage (sandboxed iframe, disabled
/// cookies) behaves like an always-empty store, and an unparseable
/// value loads as `None` so the caller falls back to defaults.
pub struct SessionStore {
    storage: Option<web_sys::Storage>,
}

impl SessionStore {
    /// Bind to the window's sessionStorage, if available
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.session_storage().ok().flatten());
        if storage.is_none() {
            warn!("sessionStorage unavailable, panel placement will not persist");
        }
        Self { storage }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GeometryStore for SessionStore {
    fn load(&self, kind: &str) -> Option<PersistedGeometry> {
        let raw = self
            .storage
            .as_ref()?
            .get_item(&storage_key(kind))
            .ok()
            .flatten()?;

        match serde_json::from_str(&raw) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!(kind, %err, "discarding unparseable panel record");
                None
            }
        }
    }

    fn save(&mut self, kind: &str, record: PersistedGeometry) {
        let Some(storage) = self.storage.as_ref() else {
            return;
        };
        let Ok(json) = serde_json::to_string(&record) else {
            return;
        };
        if storage.set_item(&storage_key(kind), &json).is_err() {
            warn!(kind, "failed to persist panel geometry");
        }
    }

    fn remove(&mut self, kind: &str) {
        if let Some(storage) = self.storage.as_ref() {
            let _ = storage.remove_item(&storage_key(kind));
        }
    }
}
