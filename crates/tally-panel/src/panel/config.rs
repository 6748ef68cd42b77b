//! Panel creation configuration

use serde::{Deserialize, Serialize};

use crate::geometry::{Anchor, Constraints, MIN_VISIBLE_MARGIN};
use crate::math::Size;
use crate::mode::PinnedSide;

/// Everything the host supplies when opening a panel.
///
/// The content rendered inside the panel is not part of the config; it
/// is opaque to this subsystem and stays mounted in the host across
/// mode changes.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Logical slot identifier (e.g. "attachment-preview"). Geometry
    /// persists per kind, not per panel instance.
    pub kind: String,
    /// Caption shown in the panel header
    pub title: String,
    /// Size used when no valid persisted geometry exists
    pub default_size: Size,
    /// Size limits for every committed geometry
    pub constraints: Constraints,
    /// Minimum pixels of the panel kept inside the viewport per edge
    pub min_visible_margin: f32,
    /// Whether this panel kind offers a minimize control
    pub can_minimize: bool,
    /// Whether a companion surface is available for pinning right now.
    /// The host updates this later via the engine as content changes.
    pub can_pin: bool,
    /// Initial placement hint when no persisted geometry exists
    pub anchor: Anchor,
    /// Distance from the anchored edges, in pixels
    pub anchor_inset: f32,
    /// Which half of the screen the panel docks to when pinned
    pub pinned_side: PinnedSide,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            kind: String::new(),
            title: String::new(),
            default_size: Size::new(480.0, 360.0),
            constraints: Constraints::default(),
            min_visible_margin: MIN_VISIBLE_MARGIN,
            can_minimize: true,
            can_pin: false,
            anchor: Anchor::Center,
            anchor_inset: 24.0,
            pinned_side: PinnedSide::Left,
        }
    }
}
