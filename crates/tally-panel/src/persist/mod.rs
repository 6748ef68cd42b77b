//! Persisted panel geometry
//!
//! Panels remember their last manual placement per *kind* (logical
//! slot), not per instance. Storage is session-scoped on purpose:
//! placement is a UX convenience, not durable user data, and must not
//! leak across logically distinct sessions.
//!
//! The store is injected into the engine rather than reached through a
//! global, so several independent panel instances of the same kind can
//! be tested in isolation against separate (or deliberately shared)
//! session scopes.

mod memory;
#[cfg(feature = "wasm")]
mod session;

pub use memory::MemoryStore;
#[cfg(feature = "wasm")]
pub use session::SessionStore;

use serde::{Deserialize, Serialize};

use crate::math::{Size, Vec2};

/// Key namespace for panel records in the backing store
pub const STORAGE_PREFIX: &str = "tally.panel.";

/// Build the namespaced storage key for a panel kind
pub fn storage_key(kind: &str) -> String {
    format!("{}{}", STORAGE_PREFIX, kind)
}

/// The last known floating placement of a panel kind.
///
/// Records carry no schema version; they are re-validated against the
/// current constraints and viewport every time they are loaded, so a
/// stale record degrades to a clamped or default placement instead of
/// being misinterpreted.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersistedGeometry {
    pub position: Vec2,
    pub size: Size,
}

/// Keyed load/save of panel geometry.
///
/// Implementations never fail loudly: a missing, unreadable, or
/// unparseable record loads as `None`, and write errors are swallowed
/// after logging. Panel placement must never take the host down.
pub trait GeometryStore {
    /// Load the record for a panel kind, if one exists and decodes
    fn load(&self, kind: &str) -> Option<PersistedGeometry>;

    /// Save the record for a panel kind, replacing any previous one
    fn save(&mut self, kind: &str, record: PersistedGeometry);

    /// Remove the record for a panel kind
    fn remove(&mut self, kind: &str);
}
