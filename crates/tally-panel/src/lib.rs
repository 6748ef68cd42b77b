//! Floating Panel Manager for Tally
//!
//! This crate provides the window-management core for Tally's floating
//! surfaces (document previews, editing dialogs):
//! - Drag and resize gestures with boundary clamping
//! - Display modes (floating, maximized, minimized, pinned) and their
//!   transition rules
//! - Session-scoped persistence of panel placement per panel kind
//! - Chrome layout projection (header, content slot, footer, resize
//!   affordances, split view)
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`math`]: Core geometry types (`Vec2`, `Size`, `Rect`)
//! - [`geometry`]: Pure drag/resize/clamp math and resize handles
//! - [`mode`]: Display mode vocabulary
//! - [`panel`]: Panel entity, config, and collection management
//! - [`input`]: Gesture state machine (drag/resize mutual exclusion)
//! - [`persist`]: Keyed geometry stores (in-memory, sessionStorage)
//! - [`shell`]: Chrome layout per mode
//! - [`split`]: Pinned + companion split arrangement
//! - [`events`]: Lifecycle/geometry events for the host
//!
//! ## Example
//!
//! ```rust
//! use tally_panel::{MemoryStore, PanelConfig, PanelEngine, Size, Vec2};
//!
//! let mut engine = PanelEngine::new(Box::new(MemoryStore::new()));
//! engine.init(1920.0, 1080.0);
//!
//! let id = engine.open(PanelConfig {
//!     kind: "attachment-preview".to_string(),
//!     title: "Receipt.pdf".to_string(),
//!     default_size: Size::new(420.0, 620.0),
//!     ..Default::default()
//! });
//!
//! engine.start_drag(id, Vec2::new(800.0, 250.0), 0);
//! engine.handle_pointer_move(Vec2::new(760.0, 250.0));
//! engine.handle_pointer_up();
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state management is pure Rust, testable
//!    without a browser
//! 2. **Total State Machine**: every (mode, request) pair transitions
//!    or is an explicit no-op; no invalid-transition errors
//! 3. **Injected Persistence**: the geometry store is a constructor
//!    argument, never ambient global state
//! 4. **Degrade, Don't Fail**: invalid persisted state falls back to
//!    default placement; out-of-range geometry is clamped

pub mod events;
pub mod geometry;
pub mod input;
pub mod math;
pub mod mode;
pub mod panel;
pub mod persist;
pub mod shell;
pub mod split;

mod engine;
mod error;
mod types;
mod viewport;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use events::PanelEvent;
pub use geometry::{Anchor, Constraints, Geometry, ResizeHandle, MIN_VISIBLE_MARGIN};
pub use input::{GestureController, GestureState};
pub use math::{Rect, Size, Vec2};
pub use mode::{PanelMode, PinnedSide};
pub use panel::{Panel, PanelConfig, PanelManager};
pub use persist::{GeometryStore, MemoryStore, PersistedGeometry};
pub use shell::PanelFrame;
pub use split::SplitLayout;

pub use engine::{PanelEngine, PRIMARY_BUTTON};
pub use error::{PanelError, PanelResult};
pub use types::PanelId;
pub use viewport::Viewport;
