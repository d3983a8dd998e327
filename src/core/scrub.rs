// Scrub detection and sponge motion helpers.
//
// Everything here is a pure function of its inputs plus explicit state, so
// it runs and tests on the host even though the crate proper only builds
// for wasm. Time is passed in as seconds rather than read from a clock.

use glam::Vec3;

/// Cooldown-debounced proximity trigger.
///
/// Fires at most once per cooldown window whenever the tracked position is
/// strictly inside `radius` of `target`. Positions are expected once per
/// rendered frame while a drag is held; idle frames never reach `tick`.
pub struct ScrubDetector {
    target: Vec3,
    radius: f32,
    cooldown_sec: f64,
    cooldown_until: f64,
}

impl ScrubDetector {
    pub fn new(target: Vec3, radius: f32, cooldown_sec: f64) -> Self {
        Self {
            target,
            radius,
            cooldown_sec,
            cooldown_until: f64::NEG_INFINITY,
        }
    }

    /// Feed the current sponge position. Returns true exactly when a scrub
    /// registers; starting the cooldown is part of the same step.
    pub fn tick(&mut self, position: Vec3, now_sec: f64) -> bool {
        if now_sec < self.cooldown_until {
            return false;
        }
        // Strict comparison: a position exactly on the radius does not count.
        if position.distance(self.target) < self.radius {
            self.cooldown_until = now_sec + self.cooldown_sec;
            return true;
        }
        false
    }

    pub fn cooling_down(&self, now_sec: f64) -> bool {
        now_sec < self.cooldown_until
    }
}

/// Vertical offset of the idle sponge at `elapsed_sec`. Deterministic:
/// sampling the same elapsed time twice yields the same offset.
#[inline]
pub fn idle_bob(elapsed_sec: f32, amplitude: f32, hz: f32) -> f32 {
    amplitude * (std::f32::consts::TAU * hz * elapsed_sec).sin()
}

#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let u = 1.0 - t.clamp(0.0, 1.0);
    1.0 - u * u * u
}

/// One-shot eased interpolation between two points, sampled by wall time.
///
/// Used for the sponge's snap-back to its rest position after a drag
/// release; past `duration_sec` it stays pinned at `to`.
#[derive(Clone, Copy, Debug)]
pub struct Tween {
    from: Vec3,
    to: Vec3,
    start_sec: f64,
    duration_sec: f64,
}

impl Tween {
    pub fn new(from: Vec3, to: Vec3, start_sec: f64, duration_sec: f64) -> Self {
        Self {
            from,
            to,
            start_sec,
            duration_sec,
        }
    }

    pub fn sample(&self, now_sec: f64) -> Vec3 {
        if self.duration_sec <= 0.0 {
            return self.to;
        }
        let t = ((now_sec - self.start_sec) / self.duration_sec).clamp(0.0, 1.0) as f32;
        self.from.lerp(self.to, ease_out_cubic(t))
    }

    pub fn finished(&self, now_sec: f64) -> bool {
        now_sec >= self.start_sec + self.duration_sec
    }
}
