// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn scrub_tuning_is_sane() {
    assert_eq!(SCRUB_TARGET_COUNT, 10);
    assert!(SCRUB_RADIUS > 0.0);
    assert!(SCRUB_COOLDOWN_SEC > 0.0);
    assert!((DEAD_DELAY_SEC - 0.8).abs() < 1e-9);
}

#[test]
fn resting_sponge_cannot_scrub() {
    // The idle bob must never swing the sponge into trigger range.
    let closest = SPONGE_REST.distance(CROW_SCRUB_POINT) - IDLE_BOB_AMPLITUDE;
    assert!(closest > SCRUB_RADIUS);
}

#[test]
fn drag_plane_reaches_the_crow() {
    // A sponge held over the crow on the drag plane must be inside the
    // trigger radius, or scrubbing would be impossible.
    let over_crow = glam::Vec3::new(
        CROW_SCRUB_POINT.x,
        SPONGE_DRAG_PLANE_Y,
        CROW_SCRUB_POINT.z,
    );
    assert!(over_crow.distance(CROW_SCRUB_POINT) < SCRUB_RADIUS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn drag_bounds_cover_the_tub_but_not_the_room() {
    assert!(DRAG_BOUND_X > SCRUB_RADIUS);
    assert!(DRAG_BOUND_Z > 0.0);
    assert!(DRAG_BOUND_X < FLOOR_EXTENT);
    assert!(DRAG_BOUND_Z < FLOOR_EXTENT);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn rest_position_is_inside_the_reachable_region() {
    // Snap-back must end somewhere the user can grab again.
    assert!(SPONGE_REST.x.abs() <= DRAG_BOUND_X);
    assert!(SPONGE_REST.z.abs() <= DRAG_BOUND_Z);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn motion_constants_are_positive() {
    assert!(IDLE_BOB_AMPLITUDE > 0.0);
    assert!(IDLE_BOB_HZ > 0.0);
    assert!(IDLE_SPIN_RAD_PER_SEC > 0.0);
    assert!(RETURN_TWEEN_SEC > 0.0);
    assert!(SPONGE_PICK_RADIUS > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn glow_and_volume_stay_in_range() {
    assert!(GLOW_EMISSIVE_BASE > 0.0);
    assert!(GLOW_EMISSIVE_BASE + GLOW_FLASH_BOOST <= 1.5);
    assert!(GLOW_FLASH_DECAY_PER_SEC > 0.0);
    assert!(HOVER_BRIGHTEN >= 1.0);
    assert!(CUE_VOLUME > 0.0 && CUE_VOLUME <= 1.0);
}
