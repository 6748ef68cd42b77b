//! Panel chrome layout
//!
//! The shell projects a panel's mode and geometry into the rectangles a
//! host needs to draw the chrome: the frame itself, the header band,
//! the content slot, the footer band, and the live resize affordances.
//!
//! The content slot is identity-stable: every mode produces a content
//! rect (zero-height while minimized), and mode changes only restyle
//! the surrounding chrome. Hosts must keep the panel's content mounted
//! in that slot across mode changes; remounting a live form on every
//! maximize/minimize would destroy in-progress user input.

use serde::Serialize;

use crate::geometry::ResizeHandle;
use crate::math::{Rect, Size};
use crate::mode::PanelMode;
use crate::panel::Panel;
use crate::split;
use crate::types::PanelId;
use crate::viewport::Viewport;

/// Height of the header band (drag surface + controls)
pub const HEADER_HEIGHT: f32 = 36.0;

/// Height of the footer band
pub const FOOTER_HEIGHT: f32 = 28.0;

/// Inset of a maximized panel from the viewport edges
pub const MAXIMIZED_INSET: f32 = 12.0;

/// Size of the minimized status strip
pub const STRIP_SIZE: Size = Size {
    width: 260.0,
    height: 40.0,
};

/// Margin of the strip row from the viewport corner
pub const STRIP_MARGIN: f32 = 12.0;

/// Gap between stacked strips
pub const STRIP_GAP: f32 = 8.0;

/// Everything a host needs to render one panel's chrome.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PanelFrame {
    pub id: PanelId,
    pub kind: String,
    pub title: String,
    pub mode: PanelMode,
    /// Outer rect of the chrome (the status strip when minimized)
    pub rect: Rect,
    /// Drag surface; the whole strip when minimized
    pub header: Rect,
    /// Content slot; zero-height when minimized, never absent
    pub content: Rect,
    pub footer: Rect,
    /// Live resize affordances; empty outside Floating mode
    pub resize_handles: Vec<ResizeHandle>,
    /// Rect for the caller-supplied companion surface, Pinned mode only
    pub companion: Option<Rect>,
}

/// Compute the frame for one panel. `strip_index` is the panel's slot
/// in the minimized strip row (ignored in other modes).
pub fn frame_for(panel: &Panel, viewport: Viewport, strip_index: usize) -> PanelFrame {
    match panel.mode {
        PanelMode::Floating => {
            let rect = panel.floating_geometry.rect();
            let (header, content, footer) = chrome_bands(rect);
            PanelFrame {
                id: panel.id,
                kind: panel.kind.clone(),
                title: panel.title.clone(),
                mode: panel.mode,
                rect,
                header,
                content,
                footer,
                resize_handles: ResizeHandle::all().to_vec(),
                companion: None,
            }
        }
        PanelMode::Maximized => {
            let rect = viewport.bounds().inset(MAXIMIZED_INSET);
            let (header, content, footer) = chrome_bands(rect);
            PanelFrame {
                id: panel.id,
                kind: panel.kind.clone(),
                title: panel.title.clone(),
                mode: panel.mode,
                rect,
                header,
                content,
                footer,
                resize_handles: Vec::new(),
                companion: None,
            }
        }
        PanelMode::Minimized => {
            let rect = strip_rect(viewport, strip_index);
            PanelFrame {
                id: panel.id,
                kind: panel.kind.clone(),
                title: panel.title.clone(),
                mode: panel.mode,
                rect,
                header: rect,
                content: Rect::new(rect.x, rect.bottom(), rect.width, 0.0),
                footer: Rect::new(rect.x, rect.bottom(), rect.width, 0.0),
                resize_handles: Vec::new(),
                companion: None,
            }
        }
        PanelMode::Pinned => {
            let arrangement = split::layout(viewport, panel.pinned_side);
            let (header, content, footer) = chrome_bands(arrangement.pinned);
            PanelFrame {
                id: panel.id,
                kind: panel.kind.clone(),
                title: panel.title.clone(),
                mode: panel.mode,
                rect: arrangement.pinned,
                header,
                content,
                footer,
                resize_handles: Vec::new(),
                companion: Some(arrangement.companion),
            }
        }
    }
}

/// Split a chrome rect into header, content, and footer bands. The
/// bands collapse in order (footer first) when the rect is too short
/// for all three.
fn chrome_bands(rect: Rect) -> (Rect, Rect, Rect) {
    let header_h = HEADER_HEIGHT.min(rect.height);
    let footer_h = FOOTER_HEIGHT.min(rect.height - header_h);
    let content_h = (rect.height - header_h - footer_h).max(0.0);

    let header = Rect::new(rect.x, rect.y, rect.width, header_h);
    let content = Rect::new(rect.x, rect.y + header_h, rect.width, content_h);
    let footer = Rect::new(
        rect.x,
        rect.y + header_h + content_h,
        rect.width,
        footer_h,
    );
    (header, content, footer)
}

/// Position of the minimized status strip for the given slot index.
/// Strips stack horizontally from the bottom-left corner.
fn strip_rect(viewport: Viewport, index: usize) -> Rect {
    Rect::new(
        STRIP_MARGIN + index as f32 * (STRIP_SIZE.width + STRIP_GAP),
        (viewport.height - STRIP_SIZE.height - STRIP_MARGIN).max(0.0),
        STRIP_SIZE.width,
        STRIP_SIZE.height,
    )
}
