//! Panel engine coordinating all components

use tracing::{debug, warn};

use crate::error::{PanelError, PanelResult};
use crate::events::PanelEvent;
use crate::geometry::{self, Geometry, ResizeHandle};
use crate::input::GestureController;
use crate::math::Vec2;
use crate::mode::{PanelMode, PinnedSide};
use crate::panel::{Panel, PanelConfig, PanelManager};
use crate::persist::{GeometryStore, PersistedGeometry};
use crate::shell::{self, PanelFrame};
use crate::types::PanelId;
use crate::viewport::Viewport;

/// Pointer button that starts gestures; all others are ignored
pub const PRIMARY_BUTTON: u8 = 0;

/// Panel engine coordinating all panel components
///
/// This is the main entry point for panel operations, managing:
/// - Panel lifecycle (open, close, mode transitions)
/// - Gesture routing (drag/resize state machine)
/// - Geometry persistence (injected session-scoped store)
/// - Chrome layout projection for rendering
///
/// The engine is single-threaded and event-driven: the host feeds it
/// pointer and keyboard input, then drains the resulting events and
/// re-renders from [`PanelEngine::frames`].
pub struct PanelEngine {
    /// Current viewport dimensions
    viewport: Viewport,
    /// Live panels
    panels: PanelManager,
    /// Gesture state machine
    input: GestureController,
    /// Injected geometry store (session-scoped)
    store: Box<dyn GeometryStore>,
    /// Events pending drain by the host
    events: Vec<PanelEvent>,
}

impl PanelEngine {
    /// Create an engine over an injected geometry store
    pub fn new(store: Box<dyn GeometryStore>) -> Self {
        Self {
            viewport: Viewport::default(),
            panels: PanelManager::new(),
            input: GestureController::new(),
            store,
            events: Vec::new(),
        }
    }

    /// Initialize with the host's viewport dimensions. Call before
    /// opening panels so initial placement has something to center on.
    pub fn init(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
    }

    /// Update the viewport after a host window resize. Floating panels
    /// are clamped back into view against the new dimensions.
    pub fn resize_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        let viewport = self.viewport;

        for panel in self.panels.iter_mut() {
            let size = geometry::clamp_size(
                panel.floating_geometry.size,
                &panel.constraints,
                viewport,
            );
            let origin = geometry::clamp_position(
                panel.floating_geometry.origin,
                size,
                viewport,
                panel.min_visible_margin,
            );
            panel.floating_geometry = Geometry::new(origin, size);
        }
    }

    /// Current viewport
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Open a panel. Initial geometry is the persisted record when it
    /// is still valid, otherwise the configured default size at the
    /// anchor hint.
    pub fn open(&mut self, config: PanelConfig) -> PanelId {
        let geometry = self.resolve_initial_geometry(&config);
        let id = self.panels.allocate_id();
        debug!(id, kind = %config.kind, "open panel");
        self.panels.insert(Panel::new(id, &config, geometry));
        id
    }

    /// Close a panel. A gesture active on it is force-ended first
    /// (committing its candidate geometry) so no selection lock or
    /// listener state leaks. Unknown IDs are ignored: pointer events
    /// race with close.
    pub fn close(&mut self, id: PanelId) {
        if self.input.active_panel() == Some(id) {
            self.input.end();
            self.persist_geometry(id);
        }

        if let Some(panel) = self.panels.remove(id) {
            debug!(id, kind = %panel.kind, "close panel");
            self.events.push(PanelEvent::Closed { id });
        }
    }

    /// Escape pressed: close the most recently opened panel, if any.
    pub fn handle_escape(&mut self) -> bool {
        match self.panels.newest().map(|p| p.id) {
            Some(id) => {
                self.close(id);
                true
            }
            None => false,
        }
    }

    // =========================================================================
    // Gestures
    // =========================================================================

    /// Begin a header drag. No-op unless the panel is Floating, the
    /// button is primary, and no other gesture is active.
    pub fn start_drag(&mut self, id: PanelId, pointer: Vec2, button: u8) -> bool {
        if button != PRIMARY_BUTTON {
            return false;
        }
        let viewport = self.viewport;
        let Some(panel) = self.panels.get(id) else {
            return false;
        };
        if !panel.mode.accepts_gestures() {
            return false;
        }

        self.input.start_move(
            id,
            panel.floating_geometry,
            pointer,
            viewport,
            panel.min_visible_margin,
        )
    }

    /// Begin an edge/corner resize. Same guards as [`Self::start_drag`].
    pub fn start_resize(
        &mut self,
        id: PanelId,
        handle: ResizeHandle,
        pointer: Vec2,
        button: u8,
    ) -> bool {
        if button != PRIMARY_BUTTON {
            return false;
        }
        let viewport = self.viewport;
        let Some(panel) = self.panels.get(id) else {
            return false;
        };
        if !panel.mode.accepts_gestures() {
            return false;
        }

        self.input.start_resize(
            id,
            handle,
            panel.floating_geometry,
            pointer,
            viewport,
            panel.constraints,
        )
    }

    /// Pointer moved. Updates the live geometry of the panel owning the
    /// active gesture; returns whether the event was consumed.
    pub fn handle_pointer_move(&mut self, pointer: Vec2) -> bool {
        let Some((id, candidate)) = self.input.update(pointer) else {
            return false;
        };
        if let Some(panel) = self.panels.get_mut(id) {
            panel.floating_geometry = candidate;
        }
        true
    }

    /// Pointer released: end the active gesture and commit its result.
    pub fn handle_pointer_up(&mut self) -> bool {
        match self.input.end() {
            Some(id) => {
                self.persist_geometry(id);
                if let Some(panel) = self.panels.get(id) {
                    self.events.push(PanelEvent::GestureEnded {
                        id,
                        geometry: panel.floating_geometry,
                    });
                }
                true
            }
            None => false,
        }
    }

    /// The gesture was interrupted (window blur, focus loss). Treated
    /// as an implicit pointer-up: commit the current candidate and
    /// clean up, never leaving a stuck gesture flag behind.
    pub fn handle_pointer_cancel(&mut self) -> bool {
        self.handle_pointer_up()
    }

    /// Whether the host should suppress text selection right now
    pub fn selection_locked(&self) -> bool {
        self.input.selection_locked()
    }

    /// Whether a drag or resize gesture is active
    pub fn gesture_active(&self) -> bool {
        self.input.is_active()
    }

    // =========================================================================
    // Mode transitions
    // =========================================================================

    /// Toggle between Floating and Maximized
    pub fn toggle_maximize(&mut self, id: PanelId) -> bool {
        self.transition(id, "maximize", |panel| panel.toggle_maximize())
    }

    /// Collapse to the status strip
    pub fn minimize(&mut self, id: PanelId) -> bool {
        self.transition(id, "minimize", |panel| panel.minimize())
    }

    /// Restore from the status strip to the prior mode
    pub fn restore(&mut self, id: PanelId) -> bool {
        self.transition(id, "restore", |panel| panel.restore())
    }

    /// Dock next to the companion surface
    pub fn pin(&mut self, id: PanelId) -> bool {
        self.transition(id, "pin", |panel| panel.pin())
    }

    /// Return from the docked arrangement to the remembered floating
    /// placement
    pub fn unpin(&mut self, id: PanelId) -> bool {
        self.transition(id, "unpin", |panel| panel.unpin())
    }

    /// Choose which half of the screen the panel docks to when pinned
    pub fn set_pinned_side(&mut self, id: PanelId, side: PinnedSide) {
        if let Some(panel) = self.panels.get_mut(id) {
            panel.pinned_side = side;
        }
    }

    /// Host-updated pin capability ("a companion is available right
    /// now"). Revoking it while pinned forces the panel back to
    /// Floating.
    pub fn set_can_pin(&mut self, id: PanelId, can_pin: bool) {
        let unpin_now = match self.panels.get_mut(id) {
            Some(panel) => {
                panel.can_pin = can_pin;
                !can_pin && panel.mode == PanelMode::Pinned
            }
            None => false,
        };
        if unpin_now {
            self.unpin(id);
        }
    }

    /// Shared implementation for all mode transitions: run it, and on a
    /// change emit `ModeChanged`. Mode changes are ignored while the
    /// panel owns the active gesture; gestures and transitions never
    /// interleave.
    fn transition<F>(&mut self, id: PanelId, op: &'static str, apply: F) -> bool
    where
        F: FnOnce(&mut Panel) -> bool,
    {
        if self.input.active_panel() == Some(id) {
            return false;
        }
        let Some(panel) = self.panels.get_mut(id) else {
            return false;
        };

        let from = panel.mode;
        if !apply(panel) {
            return false;
        }
        let to = panel.mode;
        debug!(id, op, from = from.id(), to = to.id(), "mode transition");
        self.events.push(PanelEvent::ModeChanged { id, from, to });
        true
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Current mode of a panel
    pub fn mode(&self, id: PanelId) -> PanelResult<PanelMode> {
        self.panels
            .get(id)
            .map(|p| p.mode)
            .ok_or(PanelError::PanelNotFound(id))
    }

    /// Current floating geometry of a panel (the remembered placement
    /// when not Floating)
    pub fn geometry(&self, id: PanelId) -> PanelResult<Geometry> {
        self.panels
            .get(id)
            .map(|p| p.floating_geometry)
            .ok_or(PanelError::PanelNotFound(id))
    }

    /// Number of live panels
    pub fn count(&self) -> usize {
        self.panels.count()
    }

    /// Chrome layout for every live panel, in creation order. Minimized
    /// panels receive consecutive strip slots.
    pub fn frames(&self) -> Vec<PanelFrame> {
        let mut strip_index = 0;
        self.panels
            .iter()
            .map(|panel| {
                let index = strip_index;
                if panel.mode == PanelMode::Minimized {
                    strip_index += 1;
                }
                shell::frame_for(panel, self.viewport, index)
            })
            .collect()
    }

    /// Take all pending events, oldest first
    pub fn drain_events(&mut self) -> Vec<PanelEvent> {
        std::mem::take(&mut self.events)
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Resolve where a newly opened panel goes: a persisted record that
    /// still fits the current constraints and viewport wins; anything
    /// else is discarded in favor of the configured default placement.
    fn resolve_initial_geometry(&mut self, config: &PanelConfig) -> Geometry {
        let viewport = self.viewport;

        if let Some(record) = self.store.load(&config.kind) {
            let size = geometry::clamp_size(record.size, &config.constraints, viewport);
            if geometry::is_visible(record.position, size, viewport, config.min_visible_margin) {
                return Geometry::new(record.position, size);
            }
            warn!(kind = %config.kind, "discarding persisted geometry outside viewport");
            self.store.remove(&config.kind);
        }

        let size = geometry::clamp_size(config.default_size, &config.constraints, viewport);
        let origin = geometry::anchored(size, viewport, config.anchor, config.anchor_inset);
        let origin = geometry::clamp_position(origin, size, viewport, config.min_visible_margin);
        Geometry::new(origin, size)
    }

    /// Save a panel's geometry at gesture end. Only Floating panels
    /// persist; Maximized and Pinned placements are computed, not
    /// user-chosen.
    fn persist_geometry(&mut self, id: PanelId) {
        let Some(panel) = self.panels.get(id) else {
            return;
        };
        if panel.mode != PanelMode::Floating {
            return;
        }
        self.store.save(
            &panel.kind,
            PersistedGeometry {
                position: panel.floating_geometry.origin,
                size: panel.floating_geometry.size,
            },
        );
    }
}
