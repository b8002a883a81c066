//! Coordinate normalization for gesture handlers.
//!
//! Every handler needs the pointer position in surface-local coordinates:
//! the container-relative visible position, shifted by the container's
//! scroll origin and corrected for the container's offset within the
//! window. Centralizing the formula here keeps the down, move, and
//! force-start paths from drifting apart.

use gpui::{Pixels, Point};

use crate::surface::GraphSurface;

/// Convert a container-relative visible position into surface-local
/// coordinates, independent of scrolling and container chrome.
#[inline]
pub fn surface_position(visible: Point<Pixels>, surface: &dyn GraphSurface) -> Point<Pixels> {
    visible + surface.scroll_origin() - surface.container_offset()
}
