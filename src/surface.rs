//! The `GraphSurface` collaborator trait.
//!
//! Everything the selector needs from its host canvas goes through this
//! trait: container geometry, the drag tolerance, overlay hosting, and the
//! actual region selection. The widget never touches the host's element
//! storage or rendering directly.
//!
//! ## Routing contract
//!
//! The host owns the selector and routes events into it:
//!
//! - pointer down/move/up over the container go to
//!   `handle_mouse_down`/`handle_mouse_move`/`handle_mouse_up`, with
//!   container-relative positions;
//! - when the host's own gesture policy decides to start rubberbanding
//!   programmatically (e.g. a modifier-key combination), it forwards the
//!   underlying pointer-down to `handle_force_rubberband`;
//! - pan/autoscroll notifications go to `handle_pan`.
//!
//! While [`set_wide_capture`](GraphSurface::set_wide_capture) is active the
//! host must keep delivering move/up events for the gesture even when the
//! pointer leaves the container, converting raw client positions with
//! [`client_to_surface`](GraphSurface::client_to_surface) before routing
//! them. Platforms whose dispatch already captures the pointer for the
//! duration of a drag can leave both methods as the default no-ops.

use anyhow::Result;
use gpui::{point, px, Bounds, Pixels, Point};

use crate::event::PointerEvent;
use crate::overlay::{OverlayId, OverlayStyle};

pub trait GraphSurface {
    /// Whether the surface currently accepts interaction. When false,
    /// pointer-down events never start a gesture.
    fn is_enabled(&self) -> bool {
        true
    }

    /// Minimum drag distance in pixels before the overlay appears.
    /// Keeps tiny accidental moves from flickering a selection rectangle.
    fn tolerance(&self) -> f32;

    /// Offset of the container within the window (borders, padding,
    /// sibling chrome).
    fn container_offset(&self) -> Point<Pixels>;

    /// Accumulated scroll origin of the container.
    fn scroll_origin(&self) -> Point<Pixels> {
        point(px(0.0), px(0.0))
    }

    /// Accumulated pan applied to rendered content since the gesture
    /// started.
    fn pan_delta(&self) -> Point<Pixels> {
        point(px(0.0), px(0.0))
    }

    /// Convert a raw client position into the container-relative position
    /// the selector's handlers expect. Used by the host when routing
    /// wide-capture events (see the module docs).
    fn client_to_surface(&self, client: Point<Pixels>) -> Point<Pixels>;

    /// Clear any native text selection on the page. Called while banding
    /// because the initiating mouse-down was only soft-consumed, so the
    /// platform may have started a text selection of its own.
    fn clear_text_selection(&mut self) {}

    /// Begin or end wide pointer capture for the current gesture.
    fn set_wide_capture(&mut self, _active: bool) {}

    /// Insert the overlay visual into the container.
    fn attach_overlay(&mut self, overlay: OverlayId, style: &OverlayStyle);

    /// Position and size the attached overlay.
    fn place_overlay(&mut self, overlay: OverlayId, bounds: Bounds<Pixels>);

    /// Remove the overlay visual from the container without destroying it.
    fn detach_overlay(&mut self, overlay: OverlayId);

    /// Select every element contained in `region`. `event` is the pointer-up
    /// that finished the gesture, so hosts can honor modifiers (additive
    /// selection etc.). Errors propagate uncaught out of
    /// `handle_mouse_up`; the selector performs no retry.
    fn select_region(&mut self, region: Bounds<Pixels>, event: &PointerEvent) -> Result<()>;
}
