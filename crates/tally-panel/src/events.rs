//! Lifecycle and geometry events emitted to the host

use serde::{Deserialize, Serialize};

use crate::geometry::Geometry;
use crate::mode::PanelMode;
use crate::types::PanelId;

/// Output events, drained by the host after each input it feeds the
/// engine. Typically only persistence consumes `GestureEnded`; hosts
/// use `ModeChanged` to adjust their own layout (e.g. suppress a modal
/// backdrop while pinned) and `Closed` to tear down content.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PanelEvent {
    /// The panel moved between display modes
    ModeChanged {
        id: PanelId,
        from: PanelMode,
        to: PanelMode,
    },
    /// A drag or resize gesture committed its final geometry
    GestureEnded { id: PanelId, geometry: Geometry },
    /// The panel was dismissed
    Closed { id: PanelId },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Size, Vec2};

    #[test]
    fn test_event_json_is_tagged() {
        let event = PanelEvent::ModeChanged {
            id: 3,
            from: PanelMode::Floating,
            to: PanelMode::Pinned,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(
            json,
            r#"{"type":"mode_changed","id":3,"from":"floating","to":"pinned"}"#
        );
    }

    #[test]
    fn test_gesture_ended_carries_geometry() {
        let event = PanelEvent::GestureEnded {
            id: 1,
            geometry: Geometry::new(Vec2::new(50.0, 100.0), Size::new(400.0, 300.0)),
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: PanelEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
