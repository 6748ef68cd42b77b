//! In-memory geometry store

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::{GeometryStore, PersistedGeometry};

/// HashMap-backed store for native hosts and tests.
///
/// Cloning a `MemoryStore` yields a handle to the *same* underlying
/// map, so several engines can share one session scope:
///
/// ```
/// use tally_panel::persist::{GeometryStore, MemoryStore};
///
/// let store = MemoryStore::new();
/// let other = store.clone();
/// assert_eq!(other.load("preview"), None);
/// ```
#[derive(Clone, Default)]
pub struct MemoryStore {
    records: Rc<RefCell<HashMap<String, PersistedGeometry>>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held
    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }
}

impl GeometryStore for MemoryStore {
    fn load(&self, kind: &str) -> Option<PersistedGeometry> {
        self.records.borrow().get(kind).copied()
    }

    fn save(&mut self, kind: &str, record: PersistedGeometry) {
        self.records.borrow_mut().insert(kind.to_string(), record);
    }

    fn remove(&mut self, kind: &str) {
        self.records.borrow_mut().remove(kind);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Size, Vec2};

    fn record(x: f32, y: f32) -> PersistedGeometry {
        PersistedGeometry {
            position: Vec2::new(x, y),
            size: Size::new(400.0, 300.0),
        }
    }

    #[test]
    fn test_save_load_roundtrip() {
        let mut store = MemoryStore::new();
        store.save("preview", record(100.0, 50.0));

        assert_eq!(store.load("preview"), Some(record(100.0, 50.0)));
    }

    #[test]
    fn test_load_missing_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.load("preview"), None);
    }

    #[test]
    fn test_remove() {
        let mut store = MemoryStore::new();
        store.save("preview", record(100.0, 50.0));
        store.remove("preview");
        assert_eq!(store.load("preview"), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_kinds_do_not_interfere() {
        let mut store = MemoryStore::new();
        store.save("preview", record(100.0, 50.0));
        store.save("editor", record(700.0, 20.0));

        store.remove("preview");
        assert_eq!(store.load("editor"), Some(record(700.0, 20.0)));
    }

    #[test]
    fn test_clones_share_records() {
        let mut store = MemoryStore::new();
        let reader = store.clone();

        store.save("preview", record(100.0, 50.0));
        assert_eq!(reader.load("preview"), Some(record(100.0, 50.0)));
    }
}
