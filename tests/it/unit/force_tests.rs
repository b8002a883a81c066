//! Unit tests for the force-rubberband policy and notification handler.

use crate::helpers::{alt_ev, ev, selector, MockSurface};

#[test]
fn test_alt_modifier_is_force_event() {
    let selector = selector();
    assert!(selector.is_force_rubberband_event(&alt_ev(0.0, 0.0)));
    assert!(!selector.is_force_rubberband_event(&ev(0.0, 0.0)));
}

#[test]
fn test_force_starts_over_hit_target() {
    // The host's policy already decided; hit testing does not apply here.
    let mut selector = selector();
    let mut surface = MockSurface::new();

    let mut event = alt_ev(10.0, 10.0).with_hit_target(3);
    selector.handle_force_rubberband(&mut surface, &mut event);

    assert!(selector.state().in_progress());
    assert!(event.is_handled());
    assert!(!event.default_prevented());
}

#[test]
fn test_force_starts_while_selector_disabled() {
    let mut selector = selector();
    selector.set_enabled(false);
    let mut surface = MockSurface::new();

    let mut event = alt_ev(10.0, 10.0);
    selector.handle_force_rubberband(&mut surface, &mut event);

    assert!(selector.state().in_progress());
}

#[test]
fn test_force_ignores_event_without_modifier() {
    let mut selector = selector();
    let mut surface = MockSurface::new();

    let mut event = ev(10.0, 10.0);
    selector.handle_force_rubberband(&mut surface, &mut event);

    assert!(selector.state().is_idle());
    assert!(!event.is_handled());
}

#[test]
fn test_force_ignores_already_handled_event() {
    let mut selector = selector();
    let mut surface = MockSurface::new();

    let mut event = alt_ev(10.0, 10.0);
    event.consume_soft();
    selector.handle_force_rubberband(&mut surface, &mut event);

    assert!(selector.state().is_idle());
}

#[test]
fn test_force_normalizes_position() {
    let mut selector = selector();
    let mut surface = MockSurface::new()
        .with_container_offset(8.0, 40.0)
        .with_scroll_origin(100.0, 0.0);

    let mut event = alt_ev(10.0, 50.0);
    selector.handle_force_rubberband(&mut surface, &mut event);

    let first = selector.state().first().expect("gesture armed");
    assert_eq!(f32::from(first.x), 102.0);
    assert_eq!(f32::from(first.y), 10.0);
}
