//! Split-view arrangement for pinned panels
//!
//! When a panel is pinned and a companion surface exists, the two are
//! arranged as equal halves of a fixed-height, margined container. The
//! 50/50 split is fixed; there is no user-adjustable divider.

use crate::math::Rect;
use crate::mode::PinnedSide;
use crate::viewport::Viewport;

/// Outer margin of the split container, in pixels
pub const SPLIT_MARGIN: f32 = 16.0;

/// Gap between the two halves, in pixels
pub const SPLIT_GAP: f32 = 12.0;

/// The two halves of a pinned arrangement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplitLayout {
    /// Rect of the pinned panel
    pub pinned: Rect,
    /// Rect of the caller-supplied companion surface
    pub companion: Rect,
}

/// Arrange the pinned panel and its companion as two adjacent halves of
/// the viewport, with the pinned panel on the preferred side.
pub fn layout(viewport: Viewport, side: PinnedSide) -> SplitLayout {
    let height = (viewport.height - SPLIT_MARGIN * 2.0).max(0.0);
    let half_width = ((viewport.width - SPLIT_MARGIN * 2.0 - SPLIT_GAP) / 2.0).max(0.0);

    let left = Rect::new(SPLIT_MARGIN, SPLIT_MARGIN, half_width, height);
    let right = Rect::new(
        SPLIT_MARGIN + half_width + SPLIT_GAP,
        SPLIT_MARGIN,
        half_width,
        height,
    );

    match side {
        PinnedSide::Left => SplitLayout {
            pinned: left,
            companion: right,
        },
        PinnedSide::Right => SplitLayout {
            pinned: right,
            companion: left,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport {
        width: 1920.0,
        height: 1080.0,
    };

    #[test]
    fn test_halves_are_equal_and_inside_margins() {
        let split = layout(VIEWPORT, PinnedSide::Left);

        assert_eq!(split.pinned.width, split.companion.width);
        assert_eq!(split.pinned.height, split.companion.height);
        assert!((split.pinned.x - SPLIT_MARGIN).abs() < 0.001);
        assert!((split.companion.right() - (1920.0 - SPLIT_MARGIN)).abs() < 0.001);
        assert!((split.pinned.height - (1080.0 - SPLIT_MARGIN * 2.0)).abs() < 0.001);
    }

    #[test]
    fn test_side_preference_swaps_halves() {
        let left = layout(VIEWPORT, PinnedSide::Left);
        let right = layout(VIEWPORT, PinnedSide::Right);

        assert_eq!(left.pinned, right.companion);
        assert_eq!(left.companion, right.pinned);
        assert!(right.pinned.x > right.companion.x);
    }

    #[test]
    fn test_tiny_viewport_collapses_instead_of_inverting() {
        let split = layout(Viewport::new(20.0, 20.0), PinnedSide::Left);
        assert!(split.pinned.width >= 0.0);
        assert!(split.pinned.height >= 0.0);
    }
}
