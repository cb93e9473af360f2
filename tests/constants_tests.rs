// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use drag_core::{
    DragEventKind, DEFAULT_FOVY_DEG, DEFAULT_PICK_RADIUS, DEFAULT_ZFAR, DEFAULT_ZNEAR,
    PARALLEL_EPSILON,
};

#[test]
#[allow(clippy::assertions_on_constants)]
fn core_constants_are_positive() {
    assert!(PARALLEL_EPSILON > 0.0 && PARALLEL_EPSILON < 1e-3);
    assert!(DEFAULT_PICK_RADIUS > 0.0);
    assert!(DEFAULT_ZNEAR > 0.0);
    assert!(DEFAULT_ZFAR > DEFAULT_ZNEAR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn default_fov_is_inside_accepted_range() {
    assert!(DEFAULT_FOVY_DEG >= MIN_FOVY_DEG && DEFAULT_FOVY_DEG <= MAX_FOVY_DEG);
    assert!(MIN_FOVY_DEG > 0.0 && MAX_FOVY_DEG < 180.0);
}

#[test]
fn listener_sets_cover_mouse_and_touch_lifecycles() {
    for name in MOUSE_EVENTS.iter().chain(TOUCH_EVENTS.iter()) {
        assert!(name.starts_with("mouse") || name.starts_with("touch"));
    }
    assert!(MOUSE_EVENTS.contains(&"mouseleave"));
    assert!(TOUCH_EVENTS.contains(&"touchcancel"));
}

#[test]
fn event_names_do_not_collide_with_dom_listeners() {
    for kind in DragEventKind::ALL {
        assert!(!MOUSE_EVENTS.contains(&kind.as_str()));
        assert!(!TOUCH_EVENTS.contains(&kind.as_str()));
    }
}
