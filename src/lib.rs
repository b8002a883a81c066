//! Rubberband (marquee) selection for gpui graph editors.
//!
//! A host canvas owns a [`RubberbandSelector`], implements [`GraphSurface`]
//! for it, and routes pointer events into the selector's handlers. While the
//! user drags on empty canvas the selector drives a translucent overlay
//! rectangle; on release it asks the surface to select every element inside
//! the final rectangle.
//!
//! ## Modules
//!
//! - `selector` - The `RubberbandSelector` widget and its options
//! - `surface` - The `GraphSurface` collaborator trait
//! - `event` - Pointer event abstraction with soft/hard consumption
//! - `overlay` - Overlay visual identities and the shared overlay pool
//! - `input` - Gesture state machine and the mouse down/move/up handlers
//! - `perf` - Scoped timing instrumentation (behind the `profiling` feature)

pub mod constants;
pub mod event;
pub mod input;
pub mod overlay;
pub mod perf;
pub mod selector;
pub mod surface;

pub use event::PointerEvent;
pub use input::GestureState;
pub use overlay::{OverlayId, OverlayPool, OverlayStyle, SharedOverlayPool};
pub use selector::{RubberbandOptions, RubberbandSelector};
pub use surface::GraphSurface;
