//! The rubberband selector widget.
//!
//! Gesture handlers live in `crate::input` (`mouse_down`, `drag`,
//! `mouse_up`); this module holds the selector struct itself, its
//! configuration, and the lifecycle operations (`start`, `reset`,
//! `destroy`) plus the two surface notifications (force-start and pan).

use gpui::{Pixels, Point};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_OVERLAY_OPACITY;
use crate::event::PointerEvent;
use crate::input::{coords, GestureState};
use crate::overlay::{OverlayId, OverlayPool, OverlayStyle, SharedOverlayPool};
use crate::surface::GraphSurface;

/// Configuration for a [`RubberbandSelector`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RubberbandOptions {
    /// Whether the selector handles pointer-down events initially
    pub enabled: bool,
    /// Fill opacity of the selection overlay
    pub opacity: f32,
    /// Bracket each gesture with wide pointer capture on the surface.
    /// Set this on platforms whose event dispatch stops delivering move/up
    /// events once the pointer leaves the container mid-drag.
    pub wide_pointer_capture: bool,
}

impl Default for RubberbandOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            opacity: DEFAULT_OVERLAY_OPACITY,
            wide_pointer_capture: false,
        }
    }
}

/// Rubberband (marquee) selection widget for one graph surface.
///
/// The host routes pointer events into `handle_mouse_down`,
/// `handle_mouse_move`, and `handle_mouse_up`, passing the same surface
/// into every call. See the `surface` module docs for the full routing
/// contract.
pub struct RubberbandSelector {
    pub(crate) options: RubberbandOptions,
    pub(crate) enabled: bool,
    pub(crate) state: GestureState,
    /// One reusable overlay visual, allocated on first use and released
    /// only on destroy
    pub(crate) shared_overlay: Option<OverlayId>,
    pub(crate) pool: SharedOverlayPool,
    pub(crate) capture_active: bool,
    pub(crate) destroyed: bool,
}

impl RubberbandSelector {
    /// Create a selector with a private overlay pool.
    pub fn new(options: RubberbandOptions) -> Self {
        Self::with_pool(options, OverlayPool::shared())
    }

    /// Create a selector drawing overlay visuals from a pool shared with
    /// other selectors.
    pub fn with_pool(options: RubberbandOptions, pool: SharedOverlayPool) -> Self {
        let enabled = options.enabled;
        Self {
            options,
            enabled,
            state: GestureState::default(),
            shared_overlay: None,
            pool,
            capture_active: false,
            destroyed: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable handling of pointer-down events. An in-flight
    /// gesture is unaffected; force-start also remains available (the
    /// host's policy already decided).
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Current gesture state, for hosts that render the overlay themselves.
    pub fn state(&self) -> &GestureState {
        &self.state
    }

    /// Policy for host-forwarded pointer-downs that should start rubberband
    /// selection instead of normal element interaction: the alt modifier.
    pub fn is_force_rubberband_event(&self, event: &PointerEvent) -> bool {
        event.modifiers.alt
    }

    /// The "force rubberband" notification: the host decided (modifier
    /// combination, tool mode, ...) that this pointer-down starts a
    /// rubberband drag regardless of what it landed on.
    pub fn handle_force_rubberband(
        &mut self,
        surface: &mut dyn GraphSurface,
        event: &mut PointerEvent,
    ) {
        if self.destroyed || event.is_handled() {
            return;
        }
        if self.is_force_rubberband_event(event) {
            let pos = coords::surface_position(event.position, surface);
            self.start(surface, pos);
            event.consume_soft();
        }
    }

    /// The pan notification: re-render the overlay at the updated scroll
    /// offset without touching gesture state.
    pub fn handle_pan(&mut self, surface: &mut dyn GraphSurface) {
        if self.destroyed {
            return;
        }
        self.repaint(surface);
    }

    /// Begin a gesture anchored at `first` (surface coordinates). Any
    /// gesture already in progress is reset first so capture and overlay
    /// registrations cannot leak.
    pub fn start(&mut self, surface: &mut dyn GraphSurface, first: Point<Pixels>) {
        if self.destroyed {
            return;
        }
        if self.state.in_progress() {
            self.reset(surface);
        }
        self.state.arm(first);
        if self.options.wide_pointer_capture && !self.capture_active {
            surface.set_wide_capture(true);
            self.capture_active = true;
        }
        tracing::debug!(
            x = f32::from(first.x),
            y = f32::from(first.y),
            "rubberband armed"
        );
    }

    /// Abandon the current gesture: detach the overlay (the shared visual
    /// survives for the next drag), release wide capture, return to idle.
    /// Safe to call when no gesture is active.
    pub fn reset(&mut self, surface: &mut dyn GraphSurface) {
        if let Some(overlay) = self.state.overlay() {
            surface.detach_overlay(overlay);
        }
        if self.capture_active {
            surface.set_wide_capture(false);
            self.capture_active = false;
        }
        self.state.reset();
    }

    /// Tear the selector down: reset, release the shared overlay back to
    /// the pool, and ignore every subsequent event. Idempotent.
    pub fn destroy(&mut self, surface: &mut dyn GraphSurface) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;
        self.reset(surface);
        if let Some(overlay) = self.shared_overlay.take() {
            self.pool.lock().release(overlay);
        }
        tracing::debug!("rubberband selector destroyed");
    }

    /// Lazily allocate the shared overlay and (re)attach it to the surface
    /// for the drag that is starting.
    pub(crate) fn ensure_overlay(&mut self, surface: &mut dyn GraphSurface) -> OverlayId {
        let overlay = match self.shared_overlay {
            Some(overlay) => overlay,
            None => {
                let overlay = self.pool.lock().acquire();
                self.shared_overlay = Some(overlay);
                overlay
            }
        };
        surface.attach_overlay(
            overlay,
            &OverlayStyle {
                opacity: self.options.opacity,
            },
        );
        overlay
    }
}
