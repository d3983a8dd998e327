// Fixed look-at camera and the screen-to-world unproject used for
// dragging. Platform-free: viewport dimensions are passed in so the math
// tests on the host.

use glam::{Mat4, Vec3, Vec4};

#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(eye: Vec3, target: Vec3) -> Self {
        Self {
            eye,
            target,
            fovy_radians: std::f32::consts::FRAC_PI_4,
            znear: 0.1,
            zfar: 100.0,
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, aspect.max(1e-4), self.znear, self.zfar)
    }

    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }
}

/// World-space ray through pixel (`sx`, `sy`) of a `width`×`height`
/// viewport. Returns `(ray_origin, ray_direction)`; the origin is the eye.
pub fn screen_to_world_ray(
    camera: &Camera,
    sx: f32,
    sy: f32,
    width: f32,
    height: f32,
) -> (Vec3, Vec3) {
    let ndc_x = (2.0 * sx / width.max(1.0)) - 1.0;
    let ndc_y = 1.0 - (2.0 * sy / height.max(1.0));
    let aspect = width / height.max(1.0);
    let inv = camera.view_proj(aspect).inverse();
    let far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
    let far: Vec3 = far.truncate() / far.w;
    (camera.eye, (far - camera.eye).normalize())
}
