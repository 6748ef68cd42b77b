//! Panel display modes
//!
//! A panel is in exactly one mode at any time. The transition rules
//! live on [`Panel`](crate::panel::Panel); this module only defines the
//! vocabulary.

use serde::{Deserialize, Serialize};

/// The mutually exclusive display modes of a panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelMode {
    /// Free placement; the user drags and resizes
    #[default]
    Floating,
    /// Fills the viewport (inset by chrome margin)
    Maximized,
    /// Collapsed to a small status strip
    Minimized,
    /// Docked to one half of the screen next to a companion surface
    Pinned,
}

impl PanelMode {
    /// Get all modes
    pub fn all() -> &'static [PanelMode] {
        &[
            PanelMode::Floating,
            PanelMode::Maximized,
            PanelMode::Minimized,
            PanelMode::Pinned,
        ]
    }

    /// Parse from string ID (e.g. "floating", "pinned")
    pub fn from_id(id: &str) -> Option<Self> {
        match id.to_lowercase().as_str() {
            "floating" => Some(PanelMode::Floating),
            "maximized" => Some(PanelMode::Maximized),
            "minimized" => Some(PanelMode::Minimized),
            "pinned" => Some(PanelMode::Pinned),
            _ => None,
        }
    }

    /// Get the string ID for this mode
    pub fn id(&self) -> &'static str {
        match self {
            PanelMode::Floating => "floating",
            PanelMode::Maximized => "maximized",
            PanelMode::Minimized => "minimized",
            PanelMode::Pinned => "pinned",
        }
    }

    /// Whether drag/resize gestures may start in this mode
    pub fn accepts_gestures(&self) -> bool {
        matches!(self, PanelMode::Floating)
    }
}

/// Which half of the screen a pinned panel occupies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PinnedSide {
    #[default]
    Left,
    Right,
}

impl PinnedSide {
    /// The opposite side
    pub fn opposite(&self) -> PinnedSide {
        match self {
            PinnedSide::Left => PinnedSide::Right,
            PinnedSide::Right => PinnedSide::Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_default_is_floating() {
        assert_eq!(PanelMode::default(), PanelMode::Floating);
    }

    #[test]
    fn test_mode_ids_roundtrip() {
        for mode in PanelMode::all() {
            assert_eq!(PanelMode::from_id(mode.id()), Some(*mode));
        }
        assert_eq!(PanelMode::from_id("Pinned"), Some(PanelMode::Pinned));
        assert_eq!(PanelMode::from_id("docked"), None);
    }

    #[test]
    fn test_mode_serialize() {
        let json = serde_json::to_string(&PanelMode::Maximized).unwrap();
        assert_eq!(json, "\"maximized\"");
        let back: PanelMode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PanelMode::Maximized);
    }

    #[test]
    fn test_only_floating_accepts_gestures() {
        assert!(PanelMode::Floating.accepts_gestures());
        assert!(!PanelMode::Maximized.accepts_gestures());
        assert!(!PanelMode::Minimized.accepts_gestures());
        assert!(!PanelMode::Pinned.accepts_gestures());
    }

    #[test]
    fn test_pinned_side_opposite() {
        assert_eq!(PinnedSide::Left.opposite(), PinnedSide::Right);
        assert_eq!(PinnedSide::Right.opposite(), PinnedSide::Left);
    }
}
