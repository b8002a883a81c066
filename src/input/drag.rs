//! Pointer move handling - tolerance gate, overlay attach, repaint.
//!
//! ## Performance Notes
//!
//! Pointer move runs at display rate during a drag (60+ events per
//! second). Key optimizations:
//! - Early exit for idle state and already-claimed events
//! - One overlay placement per move, no allocation
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use gpui::{point, px, size, Bounds, Pixels, Point};

use crate::constants::MIN_OVERLAY_SIZE;
use crate::event::PointerEvent;
use crate::input::coords;
use crate::profile_scope;
use crate::selector::RubberbandSelector;
use crate::surface::GraphSurface;

impl RubberbandSelector {
    /// Handle a pointer-move routed by the surface.
    ///
    /// While a gesture is in progress, the overlay appears once the
    /// displacement from the anchor exceeds the surface's tolerance on
    /// either axis, and every qualifying move is hard-consumed so no
    /// other handler interprets the drag as panning or item-dragging.
    pub fn handle_mouse_move(
        &mut self,
        surface: &mut dyn GraphSurface,
        event: &mut PointerEvent,
    ) {
        profile_scope!("handle_mouse_move");

        if self.destroyed || event.is_handled() || self.state.is_idle() {
            return;
        }
        let Some(first) = self.state.first() else {
            return;
        };

        let pos = coords::surface_position(event.position, surface);
        let dx = f32::from(first.x) - f32::from(pos.x);
        let dy = f32::from(first.y) - f32::from(pos.y);
        let tolerance = surface.tolerance();

        if self.state.is_banding() || dx.abs() > tolerance || dy.abs() > tolerance {
            if !self.state.is_banding() {
                let overlay = self.ensure_overlay(surface);
                self.state.band(overlay);
            }

            // The initiating mouse-down was only soft-consumed, so the
            // platform may be running a native text selection in parallel.
            surface.clear_text_selection();

            self.update(surface, pos);
            event.consume();
        }
    }

    /// Record the latest pointer position and repaint the overlay.
    pub(crate) fn update(&mut self, surface: &mut dyn GraphSurface, pos: Point<Pixels>) {
        self.state.set_current(pos);
        self.repaint(surface);
    }

    /// Recompute the bounding rectangle and place the overlay at it.
    ///
    /// The current position is corrected by the surface's pan delta so the
    /// rectangle keeps tracking the anchor if the view panned mid-drag.
    /// Width and height are clamped to a minimum of one pixel; the clamped
    /// rectangle is both displayed and, on release, selected.
    pub(crate) fn repaint(&mut self, surface: &mut dyn GraphSurface) {
        let (Some(first), Some(current), Some(overlay)) =
            (self.state.first(), self.state.current(), self.state.overlay())
        else {
            return;
        };

        let adjusted = current - surface.pan_delta();
        let (first_x, first_y) = (f32::from(first.x), f32::from(first.y));
        let (cur_x, cur_y) = (f32::from(adjusted.x), f32::from(adjusted.y));

        let x = first_x.min(cur_x);
        let y = first_y.min(cur_y);
        let width = (first_x.max(cur_x) - x).max(MIN_OVERLAY_SIZE);
        let height = (first_y.max(cur_y) - y).max(MIN_OVERLAY_SIZE);

        let region = Bounds {
            origin: point(px(x), px(y)),
            size: size(px(width), px(height)),
        };
        self.state.set_region(region);
        surface.place_overlay(overlay, region);
        tracing::trace!(x, y, width, height, "rubberband repaint");
    }
}
