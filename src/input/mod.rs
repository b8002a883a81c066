//! Pointer gesture handling for rubberband selection.
//!
//! ## Architecture
//!
//! The gesture lifecycle uses an explicit state machine (`GestureState`)
//! instead of nullable anchor/overlay fields, making impossible states
//! unrepresentable: an overlay exists if and only if the state is
//! `Banding`, and a gesture is in progress if and only if the state is
//! not `Idle`.
//!
//! ## Modules
//!
//! - `state` - Gesture state machine enum and helper methods
//! - `coords` - Offset/scroll-origin normalization shared by all handlers
//! - `mouse_down` - Pointer down handling (gesture arming)
//! - `drag` - Pointer move handling (tolerance gate, overlay repaint)
//! - `mouse_up` - Pointer up handling (region selection, reset)

pub mod coords;
mod state;
mod mouse_down;
mod drag;
mod mouse_up;

pub use state::GestureState;
