//! Pointer event abstraction for the selector.
//!
//! Mirrors the field shape of gpui's mouse events (position, modifiers) and
//! adds two independent consumption flags: `handled` marks the event as taken
//! by the rubberband gesture, `default_prevented` additionally tells the host
//! not to run its default behavior for the event. Keeping the flags separate
//! lets a mouse-down be claimed for rubberbanding while chained host handlers
//! (e.g. context-menu dismissal) still run.

use gpui::{Modifiers, Pixels, Point};

/// A pointer event routed into the selector by the host surface.
///
/// `position` is the container-relative visible position of the pointer.
/// `hit_target` is the id of the graph element under the pointer, if the
/// surface's hit test found one; rubberband selection only starts on empty
/// canvas (`hit_target == None`).
#[derive(Debug, Clone)]
pub struct PointerEvent {
    pub position: Point<Pixels>,
    pub modifiers: Modifiers,
    pub hit_target: Option<u64>,
    handled: bool,
    default_prevented: bool,
}

impl PointerEvent {
    pub fn new(position: Point<Pixels>) -> Self {
        Self {
            position,
            modifiers: Modifiers::default(),
            hit_target: None,
            handled: false,
            default_prevented: false,
        }
    }

    /// Set the modifier keys held while the event fired.
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Set the graph element the pointer landed on.
    pub fn with_hit_target(mut self, target: u64) -> Self {
        self.hit_target = Some(target);
        self
    }

    /// True once any handler has claimed the event.
    pub fn is_handled(&self) -> bool {
        self.handled
    }

    /// True once a handler has also suppressed the host's default behavior.
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Soft consume: claim the event but let the host's default behavior
    /// and chained handlers run.
    pub fn consume_soft(&mut self) {
        self.handled = true;
    }

    /// Hard consume: claim the event and suppress the host's default
    /// behavior for it.
    pub fn consume(&mut self) {
        self.handled = true;
        self.default_prevented = true;
    }
}
