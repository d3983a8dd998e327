#![cfg(target_arch = "wasm32")]
//! Crow Bath: a crow in a bathtub, a draggable sponge, and a riddle with no
//! correct answer. Everything hangs off one requestAnimationFrame loop; the
//! pure pieces (detector, flags, meshes, camera math) live under `core/`
//! and `camera.rs` so they test on the host.

use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod audio;
mod camera;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

use crate::core::{IntroAnswer, SceneFlags, ScrubDetector};
use constants::*;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

// Both buttons take the same path; the answer is only logged.
fn wire_intro_buttons(
    document: &web::Document,
    flags: &Rc<RefCell<SceneFlags>>,
    audio_ctx: &web::AudioContext,
    start: Instant,
) {
    for (element_id, answer) in [
        ("answer-yes", IntroAnswer::Yes),
        ("answer-no", IntroAnswer::No),
    ] {
        let flags = flags.clone();
        let audio_ctx = audio_ctx.clone();
        dom::add_click_listener(document, element_id, move || {
            log::info!("[intro] answered {}", answer.label());
            flags
                .borrow_mut()
                .dismiss_intro(answer, start.elapsed().as_secs_f64());
            // first user gesture; lets the cue context start
            _ = audio_ctx.resume();
            if let Some(document) = dom::window_document() {
                overlay::hide_intro(&document);
            }
        });
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("crow-bath starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    overlay::show_intro(&document);
    overlay::set_scrub_count(&document, 0, SCRUB_TARGET_COUNT);

    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let canvas_inner = canvas.clone();
    spawn_local(async move {
        let cues = match audio::build_cues().await {
            Ok(c) => c,
            Err(_) => return,
        };

        // Optional models resolve to placeholders; the sponge and floor are
        // always procedural.
        let crow = assets::load_model(CROW_MODEL_URL, crate::core::placeholder_crow()).await;
        let tub = assets::load_model(TUB_MODEL_URL, crate::core::placeholder_bathtub()).await;
        log::info!(
            "[assets] crow fallback={} tub fallback={}",
            crow.is_fallback(),
            tub.is_fallback()
        );
        // Order is the render contract: floor, tub, crow, sponge.
        let meshes = [
            crate::core::floor_mesh(FLOOR_EXTENT),
            tub.mesh().clone(),
            crow.mesh().clone(),
            crate::core::sponge_mesh(),
        ];
        let gpu = frame::init_gpu(&canvas_inner, &meshes).await;

        let start = Instant::now();
        let flags = Rc::new(RefCell::new(SceneFlags::new(
            SCRUB_TARGET_COUNT,
            DEAD_DELAY_SEC,
        )));
        if let Some(document) = dom::window_document() {
            wire_intro_buttons(&document, &flags, &cues.context(), start);
        }

        // ---------------- Interaction state ----------------
        let mouse = Rc::new(RefCell::new(input::MouseState::default()));
        let drag = Rc::new(RefCell::new(input::DragState::default()));
        let sponge_hovered = Rc::new(RefCell::new(false));

        events::wire_pointer_handlers(events::PointerWiring {
            canvas: canvas_inner.clone(),
            mouse: mouse.clone(),
            drag: drag.clone(),
            sponge_hovered: sponge_hovered.clone(),
        });

        let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
            flags,
            detector: ScrubDetector::new(CROW_SCRUB_POINT, SCRUB_RADIUS, SCRUB_COOLDOWN_SEC),
            cues,
            canvas: canvas_inner,
            camera: camera::Camera::new(CAMERA_EYE, CAMERA_TARGET),
            mouse,
            drag,
            sponge_hovered,
            gpu,
            start,
            last_instant: start,
            sponge_pos: SPONGE_REST,
            sponge_yaw: 0.0,
            return_tween: None,
            was_dragging: false,
            glow_flash: 0.0,
        }));
        frame::start_loop(frame_ctx);
    });

    Ok(())
}
