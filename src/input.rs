use glam::{Vec2, Vec3};
use web_sys as web;

#[derive(Default, Clone, Copy)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub down: bool,
}

#[derive(Default, Clone, Copy)]
pub struct DragState {
    pub active: bool,
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Intersect a ray with the horizontal plane `y = plane_y`. Returns the ray
/// parameter, or `None` when the ray is parallel to or pointing away from
/// the plane.
#[inline]
pub fn ray_plane_y(ray_origin: Vec3, ray_dir: Vec3, plane_y: f32) -> Option<f32> {
    if ray_dir.y.abs() < 1e-6 {
        return None;
    }
    let t = (plane_y - ray_origin.y) / ray_dir.y;
    (t >= 0.0).then_some(t)
}

// ---------------- Pointer helpers ----------------

// Client (CSS px) coordinates to canvas backing-store pixel coordinates.
#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / rect.width() as f32) * canvas.width() as f32;
    let sy = (y_css / rect.height() as f32) * canvas.height() as f32;
    Vec2::new(sx, sy)
}
