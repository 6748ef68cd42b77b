//! Core type definitions for the panel manager
//!
//! This module centralizes type aliases used throughout the crate
//! for consistency and discoverability.

/// Unique panel identifier
///
/// Panels are identified by a monotonically increasing 64-bit integer.
/// Panel IDs are unique within a `PanelEngine` instance. Persistence is
/// keyed by panel *kind*, not by ID: IDs identify live instances, kinds
/// identify logical slots.
pub type PanelId = u64;
