//! Retained-mode UI core for partial-refresh displays
//!
//! This module provides:
//! - Geometry and box constraints
//! - The widget / render-object reconciliation traits
//! - Dirty tracking with full vs. partial draws
//! - Update regions carrying a refresh waveform per rectangle
//! - Layout primitives (center, padding, borders, sizing, clearing, positioning)

pub mod canvas;
pub mod constraints;
pub mod core;
pub mod geometry;
pub mod layouts;
pub mod region;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used items
pub use canvas::{BLACK, Canvas, Color, WHITE};
pub use constraints::Constraints;
pub use self::core::{DirtyFlags, DrawState, RenderObject, RenderState, Widget};
pub use geometry::{Insets, Point, Rect, Size};
pub use region::{RegionEntry, UpdateRegion, Waveform};
