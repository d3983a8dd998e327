// Host-side tests for the camera math and the screen-to-world unproject.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod camera {
    include!("../src/camera.rs");
}

use camera::*;
use glam::Vec3;

fn make_camera() -> Camera {
    Camera::new(Vec3::new(0.0, 2.6, 6.5), Vec3::new(0.0, 0.8, 0.0))
}

#[test]
fn center_ray_points_at_the_target() {
    let cam = make_camera();
    let (origin, dir) = screen_to_world_ray(&cam, 640.0, 360.0, 1280.0, 720.0);
    assert_eq!(origin, cam.eye);
    let expected = (cam.target - cam.eye).normalize();
    assert!(dir.distance(expected) < 1e-4, "dir {dir:?} vs {expected:?}");
}

#[test]
fn rays_are_normalized() {
    let cam = make_camera();
    for (sx, sy) in [(0.0, 0.0), (1280.0, 0.0), (0.0, 720.0), (917.0, 333.0)] {
        let (_, dir) = screen_to_world_ray(&cam, sx, sy, 1280.0, 720.0);
        assert!((dir.length() - 1.0).abs() < 1e-5);
    }
}

#[test]
fn corner_rays_diverge_in_screen_directions() {
    let cam = make_camera();
    let (_, left) = screen_to_world_ray(&cam, 0.0, 360.0, 1280.0, 720.0);
    let (_, right) = screen_to_world_ray(&cam, 1280.0, 360.0, 1280.0, 720.0);
    let (_, top) = screen_to_world_ray(&cam, 640.0, 0.0, 1280.0, 720.0);
    let (_, bottom) = screen_to_world_ray(&cam, 640.0, 720.0, 1280.0, 720.0);
    assert!(left.x < right.x);
    assert!(top.y > bottom.y);
}

#[test]
fn view_proj_maps_target_near_screen_center() {
    let cam = make_camera();
    let vp = cam.view_proj(16.0 / 9.0);
    let ahead = vp.project_point3(cam.target);
    assert!(ahead.z > 0.0 && ahead.z < 1.0);
    // on-screen target lands near the middle
    assert!(ahead.x.abs() < 0.2 && ahead.y.abs() < 0.2);
}
