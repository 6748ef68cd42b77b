//! Core geometry types for the panel manager
//!
//! These types provide basic 2D math operations for positioning
//! and sizing panels in viewport pixel space.

mod rect;
mod size;
mod vec2;

pub use rect::Rect;
pub use size::Size;
pub use vec2::Vec2;
