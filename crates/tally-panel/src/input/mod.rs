//! Gesture state machine for drag and resize
//!
//! A gesture is a single pointer-down to pointer-up sequence. The
//! controller snapshots everything it needs at pointer-down (start
//! geometry, start pointer, the viewport, and for resizes the
//! constraints), and every subsequent move computes the candidate
//! geometry from that fixed start state plus the current pointer alone.
//! Nothing accumulates, so replaying the same move events in any order
//! produces the same result.
//!
//! Drag and resize are mutually exclusive: while one gesture is active,
//! attempts to start another are ignored until the first ends. Ending a
//! gesture (pointer-up, window blur, or panel close) always commits the
//! current candidate; there is no mid-gesture abort.

use tracing::trace;

use crate::geometry::{self, Constraints, Geometry, ResizeHandle};
use crate::math::Vec2;
use crate::types::PanelId;
use crate::viewport::Viewport;

/// Snapshot of an active gesture, fixed at pointer-down.
#[derive(Clone, Copy, Debug)]
pub enum GestureState {
    /// Header drag moving the panel
    Move {
        panel: PanelId,
        start: Geometry,
        pointer_start: Vec2,
        viewport: Viewport,
        margin: f32,
    },
    /// Edge/corner drag resizing the panel
    Resize {
        panel: PanelId,
        handle: ResizeHandle,
        start: Geometry,
        pointer_start: Vec2,
        viewport: Viewport,
        constraints: Constraints,
    },
}

impl GestureState {
    /// The panel this gesture manipulates
    pub fn panel(&self) -> PanelId {
        match self {
            GestureState::Move { panel, .. } => *panel,
            GestureState::Resize { panel, .. } => *panel,
        }
    }
}

/// Tracks the one active gesture and the text-selection lock.
///
/// The selection lock models the "suppress text selection while
/// dragging" acquisition explicitly: it is taken at gesture start and
/// released on every exit path, including forced ends when the panel
/// closes mid-gesture. The host (or the wasm bridge) mirrors it onto
/// the document.
#[derive(Default)]
pub struct GestureController {
    state: Option<GestureState>,
    selection_locked: bool,
}

impl GestureController {
    /// Create an idle controller
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any gesture is active
    pub fn is_active(&self) -> bool {
        self.state.is_some()
    }

    /// Whether a move gesture is active
    pub fn is_moving(&self) -> bool {
        matches!(self.state, Some(GestureState::Move { .. }))
    }

    /// Whether a resize gesture is active
    pub fn is_resizing(&self) -> bool {
        matches!(self.state, Some(GestureState::Resize { .. }))
    }

    /// The panel owning the active gesture, if any
    pub fn active_panel(&self) -> Option<PanelId> {
        self.state.as_ref().map(GestureState::panel)
    }

    /// Whether the host should suppress text selection right now
    pub fn selection_locked(&self) -> bool {
        self.selection_locked
    }

    /// Begin a move gesture. Returns false (and changes nothing) if a
    /// gesture is already active.
    pub fn start_move(
        &mut self,
        panel: PanelId,
        start: Geometry,
        pointer: Vec2,
        viewport: Viewport,
        margin: f32,
    ) -> bool {
        if self.state.is_some() {
            return false;
        }
        trace!(panel, "move gesture start");
        self.state = Some(GestureState::Move {
            panel,
            start,
            pointer_start: pointer,
            viewport,
            margin,
        });
        self.selection_locked = true;
        true
    }

    /// Begin a resize gesture. Returns false (and changes nothing) if a
    /// gesture is already active.
    pub fn start_resize(
        &mut self,
        panel: PanelId,
        handle: ResizeHandle,
        start: Geometry,
        pointer: Vec2,
        viewport: Viewport,
        constraints: Constraints,
    ) -> bool {
        if self.state.is_some() {
            return false;
        }
        trace!(panel, handle = handle.id(), "resize gesture start");
        self.state = Some(GestureState::Resize {
            panel,
            handle,
            start,
            pointer_start: pointer,
            viewport,
            constraints,
        });
        self.selection_locked = true;
        true
    }

    /// Compute the candidate geometry for the current pointer position.
    /// Returns `None` when no gesture is active.
    pub fn update(&self, pointer: Vec2) -> Option<(PanelId, Geometry)> {
        match self.state.as_ref()? {
            GestureState::Move {
                panel,
                start,
                pointer_start,
                viewport,
                margin,
            } => {
                let delta = pointer - *pointer_start;
                let origin = geometry::apply_drag(*start, delta, *viewport, *margin);
                Some((*panel, Geometry::new(origin, start.size)))
            }
            GestureState::Resize {
                panel,
                handle,
                start,
                pointer_start,
                viewport,
                constraints,
            } => {
                let delta = pointer - *pointer_start;
                let out = geometry::apply_resize(*start, delta, *handle, constraints, *viewport);
                Some((*panel, out))
            }
        }
    }

    /// End the active gesture, releasing the selection lock. Returns
    /// the panel whose gesture ended. Used for pointer-up and for every
    /// forced end (window blur, panel close).
    pub fn end(&mut self) -> Option<PanelId> {
        self.selection_locked = false;
        let ended = self.state.take()?;
        trace!(panel = ended.panel(), "gesture end");
        Some(ended.panel())
    }
}
