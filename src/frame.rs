use crate::audio::ScrubCues;
use crate::camera::{screen_to_world_ray, Camera};
use crate::constants::*;
use crate::core::{idle_bob, MeshData, SceneFlags, ScrubDetector, Tween};
use crate::dom;
use crate::input;
use crate::overlay;
use crate::render::{self, ObjectParams};
use glam::{Mat4, Quat, Vec3, Vec4};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub flags: Rc<RefCell<SceneFlags>>,
    pub detector: ScrubDetector,
    pub cues: ScrubCues,

    pub canvas: web::HtmlCanvasElement,
    pub camera: Camera,
    pub mouse: Rc<RefCell<input::MouseState>>,
    pub drag: Rc<RefCell<input::DragState>>,
    pub sponge_hovered: Rc<RefCell<bool>>,

    pub gpu: Option<render::GpuState<'static>>,

    pub start: Instant,
    pub last_instant: Instant,
    pub sponge_pos: Vec3,
    pub sponge_yaw: f32,
    pub return_tween: Option<Tween>,
    pub was_dragging: bool,
    pub glow_flash: f32,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        let now_sec = (now - self.start).as_secs_f64();

        let width = self.canvas.width() as f32;
        let height = self.canvas.height() as f32;
        let dragging = self.drag.borrow().active;
        let mouse = *self.mouse.borrow();

        // Drag edges: a fresh grab cancels any snap-back; a release starts one.
        if dragging && !self.was_dragging {
            self.return_tween = None;
        }
        if !dragging && self.was_dragging {
            self.return_tween = Some(Tween::new(
                self.sponge_pos,
                SPONGE_REST,
                now_sec,
                RETURN_TWEEN_SEC,
            ));
        }
        self.was_dragging = dragging;

        let (ray_origin, ray_dir) =
            screen_to_world_ray(&self.camera, mouse.x, mouse.y, width, height);

        if dragging {
            // Project the pointer onto the drag plane, clamped to the tub area.
            if let Some(t) = input::ray_plane_y(ray_origin, ray_dir, SPONGE_DRAG_PLANE_Y) {
                let hit = ray_origin + ray_dir * t;
                self.sponge_pos = Vec3::new(
                    hit.x.clamp(-DRAG_BOUND_X, DRAG_BOUND_X),
                    SPONGE_DRAG_PLANE_Y,
                    hit.z.clamp(-DRAG_BOUND_Z, DRAG_BOUND_Z),
                );
            }
            *self.sponge_hovered.borrow_mut() = true;
        } else {
            if let Some(tween) = self.return_tween {
                self.sponge_pos = tween.sample(now_sec);
                if tween.finished(now_sec) {
                    self.return_tween = None;
                }
            } else {
                let bob = idle_bob(now_sec as f32, IDLE_BOB_AMPLITUDE, IDLE_BOB_HZ);
                self.sponge_pos = SPONGE_REST + Vec3::Y * bob;
                self.sponge_yaw += IDLE_SPIN_RAD_PER_SEC * dt_sec;
            }
            let hovered =
                input::ray_sphere(ray_origin, ray_dir, self.sponge_pos, SPONGE_PICK_RADIUS)
                    .is_some();
            *self.sponge_hovered.borrow_mut() = hovered;
        }

        // The detector only sees dragged positions; idle motion never scrubs.
        if dragging && self.detector.tick(self.sponge_pos, now_sec) {
            self.on_scrub();
        }

        if self.flags.borrow_mut().tick(now_sec) {
            log::info!("[scene] dead transition");
            if let Some(document) = dom::window_document() {
                overlay::show_dead(&document);
            }
        }

        self.glow_flash *= (-dt_sec * GLOW_FLASH_DECAY_PER_SEC).exp();

        self.render_scene(width, height, now_sec);
    }

    fn on_scrub(&mut self) {
        let outcome = self.flags.borrow_mut().record_scrub();
        log::info!("[scrub] {}/{}", outcome.count, SCRUB_TARGET_COUNT);
        self.cues.play_scrub();
        if let Some(document) = dom::window_document() {
            overlay::set_scrub_count(&document, outcome.count, SCRUB_TARGET_COUNT);
            if outcome.glow_unlocked {
                log::info!("[scrub] glow unlocked");
                self.glow_flash = 1.0;
                overlay::show_glow_banner(&document);
            }
        } else if outcome.glow_unlocked {
            self.glow_flash = 1.0;
        }
    }

    fn render_scene(&mut self, width: f32, height: f32, now_sec: f64) {
        let Some(gpu) = &mut self.gpu else {
            return;
        };
        let glow = self.flags.borrow().glow;
        let crow_emissive = if glow {
            GLOW_EMISSIVE_BASE + self.glow_flash * GLOW_FLASH_BOOST
        } else {
            0.0
        };
        let mut sponge_color = Vec4::from_array(SPONGE_COLOR);
        if *self.sponge_hovered.borrow() {
            let rgb = (sponge_color.truncate() * HOVER_BRIGHTEN).min(Vec3::ONE);
            sponge_color = Vec4::from((rgb, sponge_color.w));
        }

        // Order matches the mesh list built in lib.rs: floor, tub, crow, sponge.
        let objects = [
            ObjectParams {
                model: Mat4::IDENTITY,
                color: Vec4::from_array(FLOOR_COLOR),
                emissive: 0.0,
            },
            ObjectParams {
                model: Mat4::IDENTITY,
                color: Vec4::from_array(TUB_COLOR),
                emissive: 0.0,
            },
            ObjectParams {
                model: Mat4::from_translation(CROW_BASE),
                color: Vec4::from_array(CROW_COLOR),
                emissive: crow_emissive,
            },
            ObjectParams {
                // squish telegraphs the scrub cooldown
                model: Mat4::from_scale_rotation_translation(
                    if self.detector.cooling_down(now_sec) {
                        Vec3::new(1.1, 0.75, 1.1)
                    } else {
                        Vec3::ONE
                    },
                    Quat::from_rotation_y(self.sponge_yaw),
                    self.sponge_pos,
                ),
                color: sponge_color,
                emissive: 0.0,
            },
        ];

        gpu.resize_if_needed(width as u32, height as u32);
        let view_proj = self.camera.view_proj(width / height.max(1.0));
        if let Err(e) = gpu.render(view_proj, &objects) {
            log::error!("render error: {:?}", e);
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    meshes: &[MeshData],
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, meshes).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
