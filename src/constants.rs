//! Crate-wide constants.
//!
//! Centralizes magic numbers to make the codebase more maintainable
//! and self-documenting.

// ============================================================================
// Overlay Defaults
// ============================================================================

/// Default opacity for the selection overlay rectangle
pub const DEFAULT_OVERLAY_OPACITY: f32 = 0.2;

/// Minimum displayed overlay width/height in pixels, so the rectangle
/// stays visible even for a zero-extent drag along one axis
pub const MIN_OVERLAY_SIZE: f32 = 1.0;
