//! Scrub sound cues over WebAudio.
//!
//! Each cue resolves once at init: fetch + decode the external source, and
//! when that fails, synthesize a deterministic stand-in buffer instead —
//! the same attempt-then-fallback shape the models use. Playback is
//! fire-and-forget with a fixed master volume.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

use crate::constants::{CUE_VOLUME, SPLASH_CUE_URL, SQUEAK_CUE_URL};

struct Cue {
    buffer: web::AudioBuffer,
    synthesized: bool,
}

pub struct ScrubCues {
    ctx: web::AudioContext,
    master: web::GainNode,
    squeak: Cue,
    splash: Cue,
}

fn create_gain(
    audio_ctx: &web::AudioContext,
    value: f32,
    label: &str,
) -> Result<web::GainNode, ()> {
    match web::GainNode::new(audio_ctx) {
        Ok(g) => {
            g.gain().set_value(value);
            Ok(g)
        }
        Err(e) => {
            log::error!("{} GainNode error: {:?}", label, e);
            Err(())
        }
    }
}

pub async fn build_cues() -> Result<ScrubCues, ()> {
    let ctx = match web::AudioContext::new() {
        Ok(c) => c,
        Err(e) => {
            log::error!("AudioContext error: {:?}", e);
            return Err(());
        }
    };
    let master = create_gain(&ctx, CUE_VOLUME, "Cue master")?;
    _ = master.connect_with_audio_node(&ctx.destination());

    let squeak = resolve_cue(&ctx, SQUEAK_CUE_URL, synth_squeak).await?;
    let splash = resolve_cue(&ctx, SPLASH_CUE_URL, synth_splash).await?;
    log::info!(
        "[audio] cues ready (squeak {}, splash {})",
        source_tag(&squeak),
        source_tag(&splash)
    );

    Ok(ScrubCues {
        ctx,
        master,
        squeak,
        splash,
    })
}

fn source_tag(cue: &Cue) -> &'static str {
    if cue.synthesized {
        "synthesized"
    } else {
        "decoded"
    }
}

impl ScrubCues {
    /// Handle for callers that need to resume the context on a user gesture.
    pub fn context(&self) -> web::AudioContext {
        self.ctx.clone()
    }

    /// Fire both cues concurrently. No ordering guarantee, no completion
    /// handling; a failed start is dropped.
    pub fn play_scrub(&self) {
        for cue in [&self.squeak, &self.splash] {
            if let Ok(src) = web::AudioBufferSourceNode::new(&self.ctx) {
                src.set_buffer(Some(&cue.buffer));
                _ = src.connect_with_audio_node(&self.master);
                _ = src.start();
            }
        }
    }
}

async fn resolve_cue(
    ctx: &web::AudioContext,
    url: &str,
    synth: fn(&web::AudioContext) -> Option<web::AudioBuffer>,
) -> Result<Cue, ()> {
    if let Some(buffer) = fetch_and_decode(ctx, url).await {
        return Ok(Cue {
            buffer,
            synthesized: false,
        });
    }
    log::warn!("[audio] could not load {url}, synthesizing stand-in");
    let buffer = synth(ctx).ok_or(())?;
    Ok(Cue {
        buffer,
        synthesized: true,
    })
}

async fn fetch_and_decode(ctx: &web::AudioContext, url: &str) -> Option<web::AudioBuffer> {
    let window = web::window()?;
    let resp: web::Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .ok()?
        .dyn_into()
        .ok()?;
    if !resp.ok() {
        return None;
    }
    let bytes: js_sys::ArrayBuffer = JsFuture::from(resp.array_buffer().ok()?)
        .await
        .ok()?
        .dyn_into()
        .ok()?;
    JsFuture::from(ctx.decode_audio_data(&bytes).ok()?)
        .await
        .ok()?
        .dyn_into()
        .ok()
}

// Two quick upward sine chirps with an exponential-decay envelope.
fn synth_squeak(ctx: &web::AudioContext) -> Option<web::AudioBuffer> {
    let sr = ctx.sample_rate();
    let seconds = 0.3_f32;
    let len = (sr * seconds) as u32;
    let buffer = ctx.create_buffer(1, len, sr).ok()?;
    let mut samples = vec![0.0_f32; len as usize];
    let dt = 1.0 / sr;
    let mut t = 0.0_f32;
    for s in samples.iter_mut() {
        // chirp phase restarts halfway through for the second squeak
        let local = if t < 0.15 { t } else { t - 0.15 };
        let freq = 700.0 + 4000.0 * local;
        let env = (-local * 18.0).exp();
        *s = (std::f32::consts::TAU * freq * local).sin() * env * 0.8;
        t += dt;
    }
    _ = buffer.copy_to_channel(&mut samples, 0);
    Some(buffer)
}

// Decaying low-passed noise burst; xorshift32 keeps it deterministic.
fn synth_splash(ctx: &web::AudioContext) -> Option<web::AudioBuffer> {
    let sr = ctx.sample_rate();
    let seconds = 0.45_f32;
    let len = (sr * seconds) as u32;
    let buffer = ctx.create_buffer(1, len, sr).ok()?;
    let mut samples = vec![0.0_f32; len as usize];
    let mut seed: u32 = 0x5EED_CAFE;
    let mut filtered = 0.0_f32;
    let dt = 1.0 / sr;
    let mut t = 0.0_f32;
    for s in samples.iter_mut() {
        let mut x = seed;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        seed = x;
        let noise = (x as f32 / u32::MAX as f32) * 2.0 - 1.0;
        // one-pole lowpass to take the hiss off
        filtered += 0.18 * (noise - filtered);
        let env = (-t * 9.0).exp();
        *s = filtered * env * 0.9;
        t += dt;
    }
    _ = buffer.copy_to_channel(&mut samples, 0);
    Some(buffer)
}
