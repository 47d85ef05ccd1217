// Host-side tests for the web frontend's constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn mount_ids_are_distinct_and_valid() {
    for id in [HERO_CANVAS_ID, AVATAR_CONTAINER_ID] {
        assert!(!id.is_empty());
        assert!(!id.contains(char::is_whitespace));
        assert!(!id.starts_with('#'));
    }
    assert_ne!(HERO_CANVAS_ID, AVATAR_CONTAINER_ID);
}

#[test]
fn rgba_formats_css_colour() {
    assert_eq!(rgba(PARTICLE_RGB, 0.1), "rgba(59, 130, 246, 0.1)");
    assert_eq!(rgba([0, 0, 0], 1.0), "rgba(0, 0, 0, 1)");
    assert_eq!(rgba(PARTICLE_RGB, 0.0), "rgba(59, 130, 246, 0)");
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_fill_is_translucent() {
    assert!(PARTICLE_FILL_ALPHA > 0.0 && PARTICLE_FILL_ALPHA < 1.0);
}
