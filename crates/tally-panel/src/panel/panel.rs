//! Panel entity and mode transitions

use tracing::debug;

use crate::geometry::{Constraints, Geometry};
use crate::mode::{PanelMode, PinnedSide};
use crate::panel::PanelConfig;
use crate::types::PanelId;

/// A rectangular, user-manipulable surface.
///
/// The mode machine is intentionally small and total: every
/// (mode, request) pair either transitions or is a no-op, and no
/// invalid-transition error is ever surfaced. Transition methods return
/// whether the mode changed so the engine can emit events.
///
/// `floating_geometry` is meaningful only in Floating mode but is
/// retained verbatim through Maximized, Minimized, and Pinned so that
/// returning to Floating restores the last manual placement unchanged.
#[derive(Clone, Debug)]
pub struct Panel {
    pub id: PanelId,
    pub kind: String,
    pub title: String,
    pub mode: PanelMode,
    pub floating_geometry: Geometry,
    pub constraints: Constraints,
    pub min_visible_margin: f32,
    pub can_minimize: bool,
    pub can_pin: bool,
    pub pinned_side: PinnedSide,
    /// Mode to return to when the minimized strip is restored
    mode_before_minimize: PanelMode,
}

impl Panel {
    /// Create a panel in Floating mode at the given resolved geometry
    pub fn new(id: PanelId, config: &PanelConfig, geometry: Geometry) -> Self {
        Self {
            id,
            kind: config.kind.clone(),
            title: config.title.clone(),
            mode: PanelMode::Floating,
            floating_geometry: geometry,
            constraints: config.constraints,
            min_visible_margin: config.min_visible_margin,
            can_minimize: config.can_minimize,
            can_pin: config.can_pin,
            pinned_side: config.pinned_side,
            mode_before_minimize: PanelMode::Floating,
        }
    }

    /// Toggle between Floating and Maximized. No-op in other modes.
    pub fn toggle_maximize(&mut self) -> bool {
        match self.mode {
            PanelMode::Floating => {
                self.mode = PanelMode::Maximized;
                true
            }
            PanelMode::Maximized => {
                self.mode = PanelMode::Floating;
                true
            }
            _ => false,
        }
    }

    /// Collapse to the status strip. Legal from Floating and Maximized
    /// when the panel kind allows minimizing; no-op otherwise.
    pub fn minimize(&mut self) -> bool {
        if !self.can_minimize {
            debug!(kind = %self.kind, "minimize requested but kind does not allow it");
            return false;
        }
        match self.mode {
            PanelMode::Floating | PanelMode::Maximized => {
                self.mode_before_minimize = self.mode;
                self.mode = PanelMode::Minimized;
                true
            }
            _ => false,
        }
    }

    /// Restore from the status strip to the mode held immediately
    /// before minimizing. No-op unless Minimized.
    pub fn restore(&mut self) -> bool {
        if self.mode != PanelMode::Minimized {
            return false;
        }
        self.mode = self.mode_before_minimize;
        true
    }

    /// Dock next to the companion surface. Legal only from Floating and
    /// only while a companion is available.
    pub fn pin(&mut self) -> bool {
        if self.mode != PanelMode::Floating || !self.can_pin {
            return false;
        }
        self.mode = PanelMode::Pinned;
        true
    }

    /// Leave the docked arrangement, restoring the remembered floating
    /// placement. No-op unless Pinned.
    pub fn unpin(&mut self) -> bool {
        if self.mode != PanelMode::Pinned {
            return false;
        }
        self.mode = PanelMode::Floating;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Size, Vec2};

    fn panel(can_minimize: bool, can_pin: bool) -> Panel {
        let config = PanelConfig {
            kind: "preview".to_string(),
            can_minimize,
            can_pin,
            ..Default::default()
        };
        let geometry = Geometry::new(Vec2::new(100.0, 100.0), Size::new(400.0, 300.0));
        Panel::new(1, &config, geometry)
    }

    #[test]
    fn test_panel_starts_floating() {
        let p = panel(true, false);
        assert_eq!(p.mode, PanelMode::Floating);
    }

    #[test]
    fn test_maximize_toggle_remembers_geometry() {
        let mut p = panel(true, false);
        let geometry = p.floating_geometry;

        assert!(p.toggle_maximize());
        assert_eq!(p.mode, PanelMode::Maximized);
        assert_eq!(p.floating_geometry, geometry);

        assert!(p.toggle_maximize());
        assert_eq!(p.mode, PanelMode::Floating);
        assert_eq!(p.floating_geometry, geometry);
    }

    #[test]
    fn test_minimize_restore_returns_to_prior_mode() {
        let mut p = panel(true, false);

        // From Floating
        assert!(p.minimize());
        assert_eq!(p.mode, PanelMode::Minimized);
        assert!(p.restore());
        assert_eq!(p.mode, PanelMode::Floating);

        // From Maximized
        p.toggle_maximize();
        assert!(p.minimize());
        assert!(p.restore());
        assert_eq!(p.mode, PanelMode::Maximized);
    }

    #[test]
    fn test_minimize_denied_by_capability() {
        let mut p = panel(false, false);
        assert!(!p.minimize());
        assert_eq!(p.mode, PanelMode::Floating);
    }

    #[test]
    fn test_pin_requires_companion() {
        let mut p = panel(true, false);
        assert!(!p.pin());
        assert_eq!(p.mode, PanelMode::Floating);

        p.can_pin = true;
        assert!(p.pin());
        assert_eq!(p.mode, PanelMode::Pinned);
    }

    #[test]
    fn test_pin_only_from_floating() {
        let mut p = panel(true, true);
        p.toggle_maximize();
        assert!(!p.pin());
        assert_eq!(p.mode, PanelMode::Maximized);
    }

    #[test]
    fn test_unpin_restores_floating_geometry() {
        let mut p = panel(true, true);
        let geometry = p.floating_geometry;

        p.pin();
        assert!(p.unpin());
        assert_eq!(p.mode, PanelMode::Floating);
        assert_eq!(p.floating_geometry, geometry);
    }

    #[test]
    fn test_noop_transitions() {
        let mut p = panel(true, true);

        assert!(!p.restore());
        assert!(!p.unpin());

        p.minimize();
        assert!(!p.toggle_maximize());
        assert!(!p.pin());
        assert!(!p.minimize());
        assert_eq!(p.mode, PanelMode::Minimized);
    }
}
