//! Full gesture lifecycle: down, moves, up.

use crate::helpers::{assert_bounds, drag_to, ev, press, release, selector, MockSurface};

#[test]
fn test_down_on_empty_canvas_arms_and_soft_consumes() {
    let mut selector = selector();
    let mut surface = MockSurface::new();

    let event = press(&mut selector, &mut surface, 10.0, 10.0);

    assert!(selector.state().in_progress());
    assert!(!selector.state().is_banding());
    assert!(event.is_handled());
    assert!(!event.default_prevented(), "down must not prevent default");
    assert!(surface.attached.is_empty(), "no overlay before tolerance");
}

#[test]
fn test_down_on_hit_target_never_starts() {
    let mut selector = selector();
    let mut surface = MockSurface::new();

    let mut event = ev(10.0, 10.0).with_hit_target(42);
    selector.handle_mouse_down(&mut surface, &mut event);

    assert!(selector.state().is_idle());
    assert!(!event.is_handled());
}

#[test]
fn test_down_on_hit_target_ignored_even_with_modifier() {
    use crate::helpers::alt_ev;

    let mut selector = selector();
    let mut surface = MockSurface::new();

    let mut event = alt_ev(10.0, 10.0).with_hit_target(42);
    selector.handle_mouse_down(&mut surface, &mut event);

    assert!(selector.state().is_idle());
}

#[test]
fn test_down_ignored_while_selector_disabled() {
    let mut selector = selector();
    selector.set_enabled(false);
    let mut surface = MockSurface::new();

    press(&mut selector, &mut surface, 10.0, 10.0);
    assert!(selector.state().is_idle());
}

#[test]
fn test_down_ignored_while_surface_disabled() {
    let mut selector = selector();
    let mut surface = MockSurface::new().disabled();

    press(&mut selector, &mut surface, 10.0, 10.0);
    assert!(selector.state().is_idle());
}

#[test]
fn test_down_ignored_when_event_already_handled() {
    let mut selector = selector();
    let mut surface = MockSurface::new();

    let mut event = ev(10.0, 10.0);
    event.consume_soft();
    selector.handle_mouse_down(&mut surface, &mut event);

    assert!(selector.state().is_idle());
}

#[test]
fn test_sub_tolerance_drag_selects_nothing() {
    let mut selector = selector();
    let mut surface = MockSurface::new().with_tolerance(4.0);

    press(&mut selector, &mut surface, 10.0, 10.0);
    let move_event = drag_to(&mut selector, &mut surface, 12.0, 11.0);
    release(&mut selector, &mut surface, 12.0, 11.0).expect("release");

    assert!(!move_event.is_handled(), "sub-tolerance move stays unclaimed");
    assert!(surface.attached.is_empty());
    assert!(surface.placements.is_empty());
    assert!(surface.selected.is_empty());
    assert!(selector.state().is_idle());
}

#[test]
fn test_crossing_tolerance_shows_overlay_and_hard_consumes() {
    let mut selector = selector();
    let mut surface = MockSurface::new().with_tolerance(4.0);

    press(&mut selector, &mut surface, 10.0, 10.0);
    drag_to(&mut selector, &mut surface, 12.0, 11.0);
    let event = drag_to(&mut selector, &mut surface, 20.0, 10.0);

    assert!(selector.state().is_banding());
    assert_eq!(surface.attached.len(), 1);
    assert_eq!(surface.cleared_selections, 1);
    assert!(event.is_handled());
    assert!(event.default_prevented(), "qualifying move prevents default");
    assert_bounds(surface.last_placement().expect("placed"), (10.0, 10.0, 10.0, 1.0));
}

#[test]
fn test_release_selects_clamped_region_exactly_once() {
    let mut selector = selector();
    let mut surface = MockSurface::new().with_tolerance(4.0);

    press(&mut selector, &mut surface, 10.0, 10.0);
    drag_to(&mut selector, &mut surface, 20.0, 10.0);
    let event = release(&mut selector, &mut surface, 20.0, 10.0).expect("release");

    assert_eq!(surface.selected.len(), 1);
    assert_bounds(surface.selected[0], (10.0, 10.0, 10.0, 1.0));
    assert!(event.is_handled());
    assert!(event.default_prevented());
    assert!(selector.state().is_idle());
    assert_eq!(surface.detached.len(), 1, "overlay detached on release");
}

#[test]
fn test_rectangle_always_contains_anchor() {
    // Drag up and to the left: origin moves to the pointer, anchor stays
    // on the far corner.
    let mut selector = selector();
    let mut surface = MockSurface::new().with_tolerance(4.0);

    press(&mut selector, &mut surface, 50.0, 60.0);
    drag_to(&mut selector, &mut surface, 20.0, 15.0);

    let region = surface.last_placement().expect("placed");
    let (x, y) = (f32::from(region.origin.x), f32::from(region.origin.y));
    let (w, h) = (
        f32::from(region.size.width),
        f32::from(region.size.height),
    );
    assert!(x <= 50.0 && 50.0 <= x + w);
    assert!(y <= 60.0 && 60.0 <= y + h);
    assert!(w >= 1.0 && h >= 1.0);
    assert_bounds(region, (20.0, 15.0, 30.0, 45.0));
}

#[test]
fn test_down_and_move_normalize_identically() {
    // Container offset (8, 40), scroll origin (100, 0): a drag between the
    // same visible points must produce the same surface rectangle as an
    // unoffset drag, just translated.
    let mut selector = selector();
    let mut surface = MockSurface::new()
        .with_tolerance(4.0)
        .with_container_offset(8.0, 40.0)
        .with_scroll_origin(100.0, 0.0);

    press(&mut selector, &mut surface, 10.0, 50.0);
    drag_to(&mut selector, &mut surface, 30.0, 50.0);
    release(&mut selector, &mut surface, 30.0, 50.0).expect("release");

    assert_eq!(surface.selected.len(), 1);
    assert_bounds(surface.selected[0], (102.0, 10.0, 20.0, 1.0));
}

#[test]
fn test_move_without_down_is_noop() {
    let mut selector = selector();
    let mut surface = MockSurface::new();

    let event = drag_to(&mut selector, &mut surface, 100.0, 100.0);

    assert!(selector.state().is_idle());
    assert!(!event.is_handled());
    assert!(surface.placements.is_empty());
}

#[test]
fn test_move_ignored_when_event_already_handled() {
    let mut selector = selector();
    let mut surface = MockSurface::new();

    press(&mut selector, &mut surface, 10.0, 10.0);
    let mut event = ev(30.0, 30.0);
    event.consume_soft();
    selector.handle_mouse_move(&mut surface, &mut event);

    assert!(!selector.state().is_banding());
    assert!(surface.placements.is_empty());
}

#[test]
fn test_select_region_error_propagates_after_reset() {
    let mut selector = selector();
    let mut surface = MockSurface::new().with_tolerance(4.0);
    surface.select_error = Some("selection backend unavailable");

    press(&mut selector, &mut surface, 10.0, 10.0);
    drag_to(&mut selector, &mut surface, 30.0, 30.0);

    let mut event = ev(30.0, 30.0);
    let result = selector.handle_mouse_up(&mut surface, &mut event);

    assert!(result.is_err());
    assert!(selector.state().is_idle(), "reset happens before selection");
    assert_eq!(surface.detached.len(), 1);
    assert!(!event.is_handled(), "failed selection leaves the event open");
}

#[test]
fn test_overlay_attach_uses_configured_opacity() {
    let mut selector = graphband::RubberbandSelector::new(graphband::RubberbandOptions {
        opacity: 0.5,
        ..Default::default()
    });
    let mut surface = MockSurface::new();

    press(&mut selector, &mut surface, 0.0, 0.0);
    drag_to(&mut selector, &mut surface, 50.0, 50.0);

    assert_eq!(surface.attached_styles.len(), 1);
    assert_eq!(surface.attached_styles[0].opacity, 0.5);
}
