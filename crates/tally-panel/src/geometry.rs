//! Pure geometry math for drag and resize gestures
//!
//! Every function in this module is stateless and total: the same inputs
//! always produce the same outputs, nothing panics, and out-of-range
//! inputs are clamped rather than rejected. The gesture controller and
//! engine call these; nothing here reads or writes panel state.

use serde::{Deserialize, Serialize};

use crate::math::{Rect, Size, Vec2};
use crate::viewport::Viewport;

/// Default minimum number of pixels of a panel that must remain inside
/// the viewport on every edge. Prevents a panel from being dragged or
/// restored fully off-screen.
pub const MIN_VISIBLE_MARGIN: f32 = 64.0;

/// A panel's position and size, owned exclusively by one panel at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    /// Top-left corner in viewport pixel coordinates
    pub origin: Vec2,
    /// Pixel dimensions
    pub size: Size,
}

impl Geometry {
    /// Create a geometry from an origin and a size
    pub fn new(origin: Vec2, size: Size) -> Self {
        Self { origin, size }
    }

    /// The geometry as a rectangle
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }
}

/// Size limits every committed geometry must satisfy after clamping.
///
/// Maximum dimensions are expressed as fractions of the current viewport
/// so they track window resizes. When the viewport is so small that the
/// maximum falls below the minimum, the minimum wins: a cramped panel is
/// still usable, an invisible one is not.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    /// Smallest allowed panel size
    pub min_size: Size,
    /// Largest allowed width, as a fraction of viewport width
    pub max_width_fraction: f32,
    /// Largest allowed height, as a fraction of viewport height
    pub max_height_fraction: f32,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            min_size: Size::new(240.0, 160.0),
            max_width_fraction: 0.9,
            max_height_fraction: 0.9,
        }
    }
}

/// Initial placement hint for a panel that has no persisted geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    /// Centered in the viewport
    #[default]
    Center,
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

/// Compass-style resize affordance identifier.
///
/// Edges grow or shrink the axis they touch; corner handles touch both
/// axes. West and north handles move the origin so the opposite edge
/// stays fixed (anchor preservation).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeHandle {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl ResizeHandle {
    /// All handles, in chrome drawing order
    pub fn all() -> &'static [ResizeHandle] {
        &[
            ResizeHandle::N,
            ResizeHandle::S,
            ResizeHandle::E,
            ResizeHandle::W,
            ResizeHandle::NE,
            ResizeHandle::NW,
            ResizeHandle::SE,
            ResizeHandle::SW,
        ]
    }

    /// Parse from string ID (e.g. "n", "se", "nw")
    pub fn from_id(id: &str) -> Option<Self> {
        match id.to_lowercase().as_str() {
            "n" => Some(ResizeHandle::N),
            "s" => Some(ResizeHandle::S),
            "e" => Some(ResizeHandle::E),
            "w" => Some(ResizeHandle::W),
            "ne" => Some(ResizeHandle::NE),
            "nw" => Some(ResizeHandle::NW),
            "se" => Some(ResizeHandle::SE),
            "sw" => Some(ResizeHandle::SW),
            _ => None,
        }
    }

    /// Get the string ID for this handle
    pub fn id(&self) -> &'static str {
        match self {
            ResizeHandle::N => "n",
            ResizeHandle::S => "s",
            ResizeHandle::E => "e",
            ResizeHandle::W => "w",
            ResizeHandle::NE => "ne",
            ResizeHandle::NW => "nw",
            ResizeHandle::SE => "se",
            ResizeHandle::SW => "sw",
        }
    }

    /// CSS cursor name for this handle
    pub fn cursor(&self) -> &'static str {
        match self {
            ResizeHandle::N | ResizeHandle::S => "ns-resize",
            ResizeHandle::E | ResizeHandle::W => "ew-resize",
            ResizeHandle::NE | ResizeHandle::SW => "nesw-resize",
            ResizeHandle::NW | ResizeHandle::SE => "nwse-resize",
        }
    }

    /// Whether this handle moves the east (right) edge
    pub fn resizes_east(&self) -> bool {
        matches!(self, ResizeHandle::E | ResizeHandle::NE | ResizeHandle::SE)
    }

    /// Whether this handle moves the west (left) edge
    pub fn resizes_west(&self) -> bool {
        matches!(self, ResizeHandle::W | ResizeHandle::NW | ResizeHandle::SW)
    }

    /// Whether this handle moves the north (top) edge
    pub fn resizes_north(&self) -> bool {
        matches!(self, ResizeHandle::N | ResizeHandle::NE | ResizeHandle::NW)
    }

    /// Whether this handle moves the south (bottom) edge
    pub fn resizes_south(&self) -> bool {
        matches!(self, ResizeHandle::S | ResizeHandle::SE | ResizeHandle::SW)
    }
}

/// Clamp a size to `[min_size, max_fraction x viewport]`.
///
/// When the viewport-derived maximum falls below the minimum, the
/// minimum wins.
pub fn clamp_size(size: Size, constraints: &Constraints, viewport: Viewport) -> Size {
    let max_w = viewport.width * constraints.max_width_fraction;
    let max_h = viewport.height * constraints.max_height_fraction;

    Size::new(
        size.width.min(max_w).max(constraints.min_size.width),
        size.height.min(max_h).max(constraints.min_size.height),
    )
}

/// Clamp a position so at least `margin` pixels of the panel stay inside
/// the viewport on every edge.
pub fn clamp_position(pos: Vec2, size: Size, viewport: Viewport, margin: f32) -> Vec2 {
    let margin_x = margin.min(size.width);
    let margin_y = margin.min(size.height);

    let min_x = margin_x - size.width;
    let max_x = (viewport.width - margin_x).max(min_x);
    let min_y = margin_y - size.height;
    let max_y = (viewport.height - margin_y).max(min_y);

    Vec2::new(pos.x.max(min_x).min(max_x), pos.y.max(min_y).min(max_y))
}

/// New position for a drag gesture: start position plus pointer delta,
/// clamped into view. The size is not affected.
pub fn apply_drag(start: Geometry, delta: Vec2, viewport: Viewport, margin: f32) -> Vec2 {
    clamp_position(start.origin + delta, start.size, viewport, margin)
}

/// New geometry for a resize gesture.
///
/// For each axis the handle touches, the dragged edge follows the
/// pointer delta with the size clamped to the constraints. West and
/// north handles recompute the origin from the clamped size so the
/// opposite edge stays exactly where it was: resizing from the north
/// edge never moves the south edge.
pub fn apply_resize(
    start: Geometry,
    delta: Vec2,
    handle: ResizeHandle,
    constraints: &Constraints,
    viewport: Viewport,
) -> Geometry {
    let mut origin = start.origin;
    let mut size = start.size;

    if handle.resizes_east() {
        size.width = start.size.width + delta.x;
    } else if handle.resizes_west() {
        size.width = start.size.width - delta.x;
    }

    if handle.resizes_south() {
        size.height = start.size.height + delta.y;
    } else if handle.resizes_north() {
        size.height = start.size.height - delta.y;
    }

    size = clamp_size(size, constraints, viewport);

    if handle.resizes_west() {
        origin.x = start.origin.x + (start.size.width - size.width);
    }
    if handle.resizes_north() {
        origin.y = start.origin.y + (start.size.height - size.height);
    }

    Geometry::new(origin, size)
}

/// Whether at least `margin` pixels of the rectangle intersect the
/// viewport in both dimensions. Used to validate persisted geometry
/// before trusting it.
pub fn is_visible(pos: Vec2, size: Size, viewport: Viewport, margin: f32) -> bool {
    let rect = Rect::from_origin_size(pos, size);
    let (w, h) = rect.overlap(&viewport.bounds());

    w >= margin.min(size.width) && h >= margin.min(size.height) && w > 0.0 && h > 0.0
}

/// Viewport-centered placement for the given size. The default when no
/// valid persisted or explicit position exists.
pub fn centered(size: Size, viewport: Viewport) -> Vec2 {
    Vec2::new(
        ((viewport.width - size.width) / 2.0).max(0.0),
        ((viewport.height - size.height) / 2.0).max(0.0),
    )
}

/// Placement offset toward a screen corner or side, `inset` pixels from
/// the touched edges. `Anchor::Center` matches [`centered`].
pub fn anchored(size: Size, viewport: Viewport, anchor: Anchor, inset: f32) -> Vec2 {
    let center = centered(size, viewport);

    let x = match anchor {
        Anchor::West | Anchor::NorthWest | Anchor::SouthWest => inset,
        Anchor::East | Anchor::NorthEast | Anchor::SouthEast => {
            (viewport.width - size.width - inset).max(0.0)
        }
        _ => center.x,
    };
    let y = match anchor {
        Anchor::North | Anchor::NorthWest | Anchor::NorthEast => inset,
        Anchor::South | Anchor::SouthWest | Anchor::SouthEast => {
            (viewport.height - size.height - inset).max(0.0)
        }
        _ => center.y,
    };

    Vec2::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport {
        width: 1920.0,
        height: 1080.0,
    };

    #[test]
    fn test_centered_default_placement() {
        // 420x620 "preview" panel on a 1920x1080 viewport
        let pos = centered(Size::new(420.0, 620.0), VIEWPORT);
        assert!((pos.x - 750.0).abs() < 0.001);
        assert!((pos.y - 230.0).abs() < 0.001);
    }

    #[test]
    fn test_centered_oversized_pins_to_origin() {
        let pos = centered(Size::new(4000.0, 3000.0), VIEWPORT);
        assert_eq!(pos, Vec2::ZERO);
    }

    #[test]
    fn test_apply_drag_unclamped() {
        let start = Geometry::new(Vec2::new(100.0, 100.0), Size::new(400.0, 300.0));
        let pos = apply_drag(start, Vec2::new(-50.0, 0.0), VIEWPORT, MIN_VISIBLE_MARGIN);
        assert_eq!(pos, Vec2::new(50.0, 100.0));
    }

    #[test]
    fn test_apply_drag_clamps_at_edges() {
        let start = Geometry::new(Vec2::new(100.0, 100.0), Size::new(400.0, 300.0));

        // Way off the left edge: at most width - margin may hang out
        let pos = apply_drag(start, Vec2::new(-2000.0, 0.0), VIEWPORT, MIN_VISIBLE_MARGIN);
        assert!((pos.x - (MIN_VISIBLE_MARGIN - 400.0)).abs() < 0.001);

        // Way off the bottom-right
        let pos = apply_drag(start, Vec2::new(5000.0, 5000.0), VIEWPORT, MIN_VISIBLE_MARGIN);
        assert!((pos.x - (1920.0 - MIN_VISIBLE_MARGIN)).abs() < 0.001);
        assert!((pos.y - (1080.0 - MIN_VISIBLE_MARGIN)).abs() < 0.001);
    }

    #[test]
    fn test_apply_resize_east_grows_in_place() {
        let start = Geometry::new(Vec2::new(100.0, 100.0), Size::new(400.0, 300.0));
        let out = apply_resize(
            start,
            Vec2::new(100.0, 0.0),
            ResizeHandle::E,
            &Constraints::default(),
            VIEWPORT,
        );
        assert_eq!(out.size, Size::new(500.0, 300.0));
        assert_eq!(out.origin, start.origin);
    }

    #[test]
    fn test_apply_resize_west_keeps_east_edge() {
        let start = Geometry::new(Vec2::new(100.0, 100.0), Size::new(400.0, 300.0));
        let out = apply_resize(
            start,
            Vec2::new(-60.0, 0.0),
            ResizeHandle::W,
            &Constraints::default(),
            VIEWPORT,
        );
        // Dragging the west handle left grows the panel leftward
        assert_eq!(out.size, Size::new(460.0, 300.0));
        assert!((out.origin.x - 40.0).abs() < 0.001);
        // East edge is unchanged
        assert!((out.rect().right() - start.rect().right()).abs() < 0.001);
    }

    #[test]
    fn test_apply_resize_north_keeps_south_edge() {
        let start = Geometry::new(Vec2::new(100.0, 100.0), Size::new(400.0, 300.0));
        let out = apply_resize(
            start,
            Vec2::new(0.0, 80.0),
            ResizeHandle::N,
            &Constraints::default(),
            VIEWPORT,
        );
        // Dragging the north handle down shrinks the panel from the top
        assert_eq!(out.size, Size::new(400.0, 220.0));
        assert!((out.rect().bottom() - start.rect().bottom()).abs() < 0.001);
    }

    #[test]
    fn test_apply_resize_corner_touches_both_axes() {
        let start = Geometry::new(Vec2::new(100.0, 100.0), Size::new(400.0, 300.0));
        let out = apply_resize(
            start,
            Vec2::new(50.0, 70.0),
            ResizeHandle::SE,
            &Constraints::default(),
            VIEWPORT,
        );
        assert_eq!(out.size, Size::new(450.0, 370.0));
        assert_eq!(out.origin, start.origin);
    }

    #[test]
    fn test_apply_resize_clamps_to_min_size() {
        let start = Geometry::new(Vec2::new(100.0, 100.0), Size::new(400.0, 300.0));
        let constraints = Constraints::default();
        let out = apply_resize(
            start,
            Vec2::new(-1000.0, -1000.0),
            ResizeHandle::SE,
            &constraints,
            VIEWPORT,
        );
        assert_eq!(out.size, constraints.min_size);
    }

    #[test]
    fn test_apply_resize_clamps_to_max_fraction() {
        let start = Geometry::new(Vec2::new(100.0, 100.0), Size::new(400.0, 300.0));
        let constraints = Constraints::default();
        let out = apply_resize(
            start,
            Vec2::new(10000.0, 10000.0),
            ResizeHandle::SE,
            &constraints,
            VIEWPORT,
        );
        assert!((out.size.width - 1920.0 * 0.9).abs() < 0.001);
        assert!((out.size.height - 1080.0 * 0.9).abs() < 0.001);
    }

    #[test]
    fn test_clamp_size_min_wins_on_tiny_viewport() {
        let tiny = Viewport::new(100.0, 100.0);
        let constraints = Constraints::default();
        let out = clamp_size(Size::new(500.0, 500.0), &constraints, tiny);
        assert_eq!(out, constraints.min_size);
    }

    #[test]
    fn test_is_visible() {
        let size = Size::new(400.0, 300.0);
        assert!(is_visible(Vec2::new(100.0, 100.0), size, VIEWPORT, 64.0));
        // Mostly off the left edge, but 64px remain
        assert!(is_visible(Vec2::new(-336.0, 100.0), size, VIEWPORT, 64.0));
        // Fully off-screen
        assert!(!is_visible(Vec2::new(-500.0, 100.0), size, VIEWPORT, 64.0));
        assert!(!is_visible(Vec2::new(2000.0, 100.0), size, VIEWPORT, 64.0));
        assert!(!is_visible(Vec2::new(100.0, 1100.0), size, VIEWPORT, 64.0));
    }

    #[test]
    fn test_is_visible_rejects_empty_viewport() {
        let size = Size::new(400.0, 300.0);
        assert!(!is_visible(Vec2::ZERO, size, Viewport::new(0.0, 0.0), 64.0));
    }

    #[test]
    fn test_anchored_corners_and_sides() {
        let size = Size::new(420.0, 620.0);

        let pos = anchored(size, VIEWPORT, Anchor::SouthEast, 24.0);
        assert!((pos.x - (1920.0 - 420.0 - 24.0)).abs() < 0.001);
        assert!((pos.y - (1080.0 - 620.0 - 24.0)).abs() < 0.001);

        let pos = anchored(size, VIEWPORT, Anchor::West, 16.0);
        assert!((pos.x - 16.0).abs() < 0.001);
        assert!((pos.y - 230.0).abs() < 0.001);

        assert_eq!(
            anchored(size, VIEWPORT, Anchor::Center, 24.0),
            centered(size, VIEWPORT)
        );
    }

    #[test]
    fn test_resize_handle_ids_roundtrip() {
        for handle in ResizeHandle::all() {
            assert_eq!(ResizeHandle::from_id(handle.id()), Some(*handle));
        }
        assert_eq!(ResizeHandle::from_id("SE"), Some(ResizeHandle::SE));
        assert_eq!(ResizeHandle::from_id("diagonal"), None);
    }

    #[test]
    fn test_resize_handle_cursors() {
        assert_eq!(ResizeHandle::N.cursor(), "ns-resize");
        assert_eq!(ResizeHandle::W.cursor(), "ew-resize");
        assert_eq!(ResizeHandle::NE.cursor(), "nesw-resize");
        assert_eq!(ResizeHandle::SE.cursor(), "nwse-resize");
    }
}
