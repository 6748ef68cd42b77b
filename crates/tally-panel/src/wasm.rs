//! Browser host bindings
//!
//! Wraps a [`PanelEngine`] over the sessionStorage-backed store and
//! exposes it to JS with scalar-friendly signatures. Layout and events
//! cross the boundary as JSON strings; the host parses them once per
//! render.
//!
//! The bridge also owns the document-level side effect the pure core
//! cannot perform: while a gesture is active, text selection is
//! suppressed by setting `user-select: none` on the document body, and
//! released on every exit path.

use wasm_bindgen::prelude::*;

use crate::engine::PanelEngine;
use crate::error::PanelError;
use crate::geometry::ResizeHandle;
use crate::math::Vec2;
use crate::mode::PinnedSide;
use crate::panel::PanelConfig;
use crate::persist::SessionStore;
use crate::types::PanelId;

#[wasm_bindgen]
pub struct PanelHost {
    engine: PanelEngine,
    selection_locked: bool,
}

#[wasm_bindgen]
impl PanelHost {
    /// Create a host bound to the window's sessionStorage
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> PanelHost {
        let mut engine = PanelEngine::new(Box::new(SessionStore::new()));
        engine.init(width, height);
        PanelHost {
            engine,
            selection_locked: false,
        }
    }

    /// Update the viewport after a window resize
    pub fn resize(&mut self, width: f32, height: f32) {
        self.engine.resize_viewport(width, height);
    }

    /// Open a panel from a JSON `PanelConfig`. Unknown fields are
    /// ignored, missing ones take defaults.
    pub fn open(&mut self, config_json: &str) -> Result<u64, JsValue> {
        let config: PanelConfig = serde_json::from_str(config_json)
            .map_err(|err| PanelError::SerializationError(err.to_string()))
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
        Ok(self.engine.open(config))
    }

    /// Close a panel (no-op for unknown IDs)
    pub fn close(&mut self, id: u64) {
        self.engine.close(id as PanelId);
        self.sync_selection_lock();
    }

    /// Escape pressed: close the most recently opened panel
    pub fn escape(&mut self) -> bool {
        let closed = self.engine.handle_escape();
        self.sync_selection_lock();
        closed
    }

    /// Begin a header drag
    pub fn start_drag(&mut self, id: u64, x: f32, y: f32, button: u8) -> bool {
        let started = self.engine.start_drag(id as PanelId, Vec2::new(x, y), button);
        self.sync_selection_lock();
        started
    }

    /// Begin a resize from a compass handle id ("n", "se", ...)
    pub fn start_resize(&mut self, id: u64, handle: &str, x: f32, y: f32, button: u8) -> bool {
        let Some(handle) = ResizeHandle::from_id(handle) else {
            return false;
        };
        let started = self
            .engine
            .start_resize(id as PanelId, handle, Vec2::new(x, y), button);
        self.sync_selection_lock();
        started
    }

    /// Pointer moved (document-level listener)
    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.engine.handle_pointer_move(Vec2::new(x, y))
    }

    /// Pointer released (document-level listener)
    pub fn pointer_up(&mut self) -> bool {
        let handled = self.engine.handle_pointer_up();
        self.sync_selection_lock();
        handled
    }

    /// Window blur / focus loss: implicit pointer-up
    pub fn pointer_cancel(&mut self) -> bool {
        let handled = self.engine.handle_pointer_cancel();
        self.sync_selection_lock();
        handled
    }

    pub fn toggle_maximize(&mut self, id: u64) -> bool {
        self.engine.toggle_maximize(id as PanelId)
    }

    pub fn minimize(&mut self, id: u64) -> bool {
        self.engine.minimize(id as PanelId)
    }

    pub fn restore(&mut self, id: u64) -> bool {
        self.engine.restore(id as PanelId)
    }

    pub fn pin(&mut self, id: u64) -> bool {
        self.engine.pin(id as PanelId)
    }

    pub fn unpin(&mut self, id: u64) -> bool {
        self.engine.unpin(id as PanelId)
    }

    /// Host-updated pin capability (companion availability)
    pub fn set_can_pin(&mut self, id: u64, can_pin: bool) {
        self.engine.set_can_pin(id as PanelId, can_pin);
    }

    /// Set the docked side: "left" or "right"
    pub fn set_pinned_side(&mut self, id: u64, side: &str) {
        let side = match side {
            "left" => PinnedSide::Left,
            "right" => PinnedSide::Right,
            _ => return,
        };
        self.engine.set_pinned_side(id as PanelId, side);
    }

    /// Current mode id of a panel ("floating", ...), or empty string
    /// for unknown IDs
    pub fn mode(&self, id: u64) -> String {
        self.engine
            .mode(id as PanelId)
            .map(|m| m.id().to_string())
            .unwrap_or_default()
    }

    /// Whether a drag or resize gesture is active
    pub fn gesture_active(&self) -> bool {
        self.engine.gesture_active()
    }

    /// Chrome layout for all panels as a JSON array of `PanelFrame`
    pub fn frames_json(&self) -> String {
        serde_json::to_string(&self.engine.frames()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Take pending events as a JSON array of `PanelEvent`
    pub fn drain_events_json(&mut self) -> String {
        serde_json::to_string(&self.engine.drain_events()).unwrap_or_else(|_| "[]".to_string())
    }
}

impl PanelHost {
    /// Mirror the engine's selection lock onto the document body.
    /// Called on every path that can start or end a gesture.
    fn sync_selection_lock(&mut self) {
        let locked = self.engine.selection_locked();
        if locked == self.selection_locked {
            return;
        }
        self.selection_locked = locked;

        let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        else {
            return;
        };
        let style = body.style();
        if locked {
            let _ = style.set_property("user-select", "none");
        } else {
            let _ = style.remove_property("user-select");
        }
    }
}
