//! Pointer down handling - gesture arming.

use crate::event::PointerEvent;
use crate::input::coords;
use crate::selector::RubberbandSelector;
use crate::surface::GraphSurface;

impl RubberbandSelector {
    /// Handle a pointer-down routed by the surface.
    ///
    /// A gesture arms only when the event is still unclaimed, both the
    /// selector and the surface are enabled, and the pointer landed on
    /// empty canvas (no hit target). The event is soft-consumed: claimed
    /// for rubberbanding, but chained host handlers such as context-menu
    /// dismissal still run and the host's default behavior is kept.
    pub fn handle_mouse_down(
        &mut self,
        surface: &mut dyn GraphSurface,
        event: &mut PointerEvent,
    ) {
        if self.destroyed
            || event.is_handled()
            || !self.is_enabled()
            || !surface.is_enabled()
            || event.hit_target.is_some()
        {
            return;
        }

        let pos = coords::surface_position(event.position, surface);
        self.start(surface, pos);
        event.consume_soft();
    }
}
