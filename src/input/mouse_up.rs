//! Pointer up handling - region selection and gesture teardown.

use anyhow::Result;

use crate::event::PointerEvent;
use crate::selector::RubberbandSelector;
use crate::surface::GraphSurface;

impl RubberbandSelector {
    /// Handle a pointer-up routed by the surface.
    ///
    /// The gesture is reset unconditionally. If the overlay was active,
    /// the last computed rectangle is handed to
    /// [`GraphSurface::select_region`] and the event is hard-consumed; a
    /// drag that never exceeded tolerance selects nothing. Errors from
    /// `select_region` propagate to the caller after the reset - the
    /// selector performs no retry.
    pub fn handle_mouse_up(
        &mut self,
        surface: &mut dyn GraphSurface,
        event: &mut PointerEvent,
    ) -> Result<()> {
        if self.destroyed {
            return Ok(());
        }

        let region = self.state.region();
        self.reset(surface);

        if let Some(region) = region {
            tracing::debug!(
                x = f32::from(region.origin.x),
                y = f32::from(region.origin.y),
                width = f32::from(region.size.width),
                height = f32::from(region.size.height),
                "rubberband selecting region"
            );
            surface.select_region(region, event)?;
            event.consume();
        }
        Ok(())
    }
}
