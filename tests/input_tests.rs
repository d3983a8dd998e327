// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec3;
use input::*;

#[test]
fn ray_sphere_intersection_basic() {
    let origin = Vec3::ZERO;
    let dir = Vec3::new(0.0, 0.0, 1.0);
    let center = Vec3::new(0.0, 0.0, 5.0);

    let t = ray_sphere(origin, dir, center, 2.0).expect("should hit");
    assert!((t - 3.0).abs() < 1e-5, "entry point at z = 3");
}

#[test]
fn ray_sphere_intersection_miss() {
    let origin = Vec3::ZERO;
    let dir = Vec3::new(1.0, 0.0, 0.0);
    let center = Vec3::new(0.0, 0.0, 5.0);

    assert!(ray_sphere(origin, dir, center, 2.0).is_none());
}

#[test]
fn ray_sphere_behind_origin_is_rejected() {
    let origin = Vec3::ZERO;
    let dir = Vec3::new(0.0, 0.0, 1.0);
    let center = Vec3::new(0.0, 0.0, -5.0);

    assert!(ray_sphere(origin, dir, center, 2.0).is_none());
}

#[test]
fn ray_plane_hits_from_above() {
    // looking down from the camera side
    let origin = Vec3::new(0.0, 2.0, 4.0);
    let dir = Vec3::new(0.0, -1.0, -2.0).normalize();

    let t = ray_plane_y(origin, dir, 1.0).expect("should hit");
    let hit = origin + dir * t;
    assert!((hit.y - 1.0).abs() < 1e-5);
    assert!(hit.z < 4.0, "hit is in front of the origin");
}

#[test]
fn ray_plane_parallel_is_rejected() {
    let origin = Vec3::new(0.0, 2.0, 0.0);
    let dir = Vec3::new(1.0, 0.0, 0.0);
    assert!(ray_plane_y(origin, dir, 1.0).is_none());
}

#[test]
fn ray_plane_behind_is_rejected() {
    // plane above, ray pointing down
    let origin = Vec3::new(0.0, 0.0, 0.0);
    let dir = Vec3::new(0.0, -1.0, 0.0);
    assert!(ray_plane_y(origin, dir, 1.0).is_none());
}

#[test]
fn drag_state_defaults_inactive() {
    let drag = DragState::default();
    assert!(!drag.active);
    let mouse = MouseState::default();
    assert!(!mouse.down);
    assert_eq!((mouse.x, mouse.y), (0.0, 0.0));
}
