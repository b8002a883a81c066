//! Gesture state machine for the rubberband selector.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Armed       (qualifying pointer down on empty canvas, or force start)
//! Armed -> Banding    (pointer moved beyond the surface's tolerance)
//!
//! Any -> Idle         (pointer up, reset, destroy)
//! ```
//!
//! `Armed` holds only the anchor point; the overlay and the computed
//! rectangle exist exclusively in `Banding`, so a sub-tolerance drag can
//! never leak a visual or produce a selection.

use gpui::{px, size, Bounds, Pixels, Point};

use crate::overlay::OverlayId;

/// Gesture state for one selector instance.
#[derive(Debug, Clone)]
pub enum GestureState {
    /// No gesture in progress
    Idle,

    /// Pointer is down; displacement so far is within tolerance
    Armed {
        /// Anchor point in surface coordinates where the drag began
        first: Point<Pixels>,
    },

    /// Overlay is visible and tracking the pointer
    Banding {
        /// Anchor point in surface coordinates where the drag began
        first: Point<Pixels>,
        /// Last observed pointer position in surface coordinates
        current: Point<Pixels>,
        /// Overlay visual attached to the surface
        overlay: OverlayId,
        /// Last computed bounding rectangle
        region: Bounds<Pixels>,
    },
}

impl Default for GestureState {
    fn default() -> Self {
        Self::Idle
    }
}

impl GestureState {
    /// Returns true if no gesture is in progress
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if a gesture is in progress (armed or banding)
    pub fn in_progress(&self) -> bool {
        !self.is_idle()
    }

    /// Returns true if the overlay is visible
    pub fn is_banding(&self) -> bool {
        matches!(self, Self::Banding { .. })
    }

    /// Anchor point of the gesture, if one is in progress
    pub fn first(&self) -> Option<Point<Pixels>> {
        match self {
            Self::Idle => None,
            Self::Armed { first } | Self::Banding { first, .. } => Some(*first),
        }
    }

    /// Last observed pointer position, if banding
    pub fn current(&self) -> Option<Point<Pixels>> {
        match self {
            Self::Banding { current, .. } => Some(*current),
            _ => None,
        }
    }

    /// Overlay attached to the surface, if banding
    pub fn overlay(&self) -> Option<OverlayId> {
        match self {
            Self::Banding { overlay, .. } => Some(*overlay),
            _ => None,
        }
    }

    /// Last computed bounding rectangle, if banding
    pub fn region(&self) -> Option<Bounds<Pixels>> {
        match self {
            Self::Banding { region, .. } => Some(*region),
            _ => None,
        }
    }

    /// Start a gesture at the given anchor point
    pub fn arm(&mut self, first: Point<Pixels>) {
        *self = Self::Armed { first };
    }

    /// Promote an armed gesture to banding with the given overlay.
    /// No-op unless currently armed.
    pub fn band(&mut self, overlay: OverlayId) {
        if let Self::Armed { first } = *self {
            *self = Self::Banding {
                first,
                current: first,
                overlay,
                region: Bounds {
                    origin: first,
                    size: size(px(0.0), px(0.0)),
                },
            };
        }
    }

    /// Record the latest pointer position while banding
    pub fn set_current(&mut self, pos: Point<Pixels>) {
        if let Self::Banding { current, .. } = self {
            *current = pos;
        }
    }

    /// Record the latest computed rectangle while banding
    pub fn set_region(&mut self, bounds: Bounds<Pixels>) {
        if let Self::Banding { region, .. } = self {
            *region = bounds;
        }
    }

    /// Reset to Idle
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
