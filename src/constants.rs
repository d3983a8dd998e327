use glam::Vec3;

/// Scene layout and interaction tuning constants.
///
/// These express intended behavior (distances, time constants, clamp limits)
/// and keep magic numbers out of the code.

// ---------------- Scrubbing ----------------

// Scrubs required before the crow glows up
pub const SCRUB_TARGET_COUNT: u32 = 10;

// Sponge-to-crow distance below which a scrub registers (strict less-than)
pub const SCRUB_RADIUS: f32 = 1.05;

// Suppression window after a registered scrub
pub const SCRUB_COOLDOWN_SEC: f64 = 0.35;

// Point on the crow the detector measures against
pub const CROW_SCRUB_POINT: Vec3 = Vec3::new(0.0, 0.95, 0.0);

// ---------------- Intro / dead transition ----------------

// Delay between dismissing the intro question and the dead overlay
pub const DEAD_DELAY_SEC: f64 = 0.8;

// ---------------- Sponge motion ----------------

pub const SPONGE_REST: Vec3 = Vec3::new(1.7, 1.25, 0.9);

// Height of the horizontal plane the pointer ray is projected onto while dragging
pub const SPONGE_DRAG_PLANE_Y: f32 = 1.05;

// Ray-sphere radius for grabbing the sponge
pub const SPONGE_PICK_RADIUS: f32 = 0.5;

// Dragged sponge stays inside the tub footprint
pub const DRAG_BOUND_X: f32 = 2.2;
pub const DRAG_BOUND_Z: f32 = 1.4;

// Idle oscillation (pure function of elapsed time)
pub const IDLE_BOB_AMPLITUDE: f32 = 0.12;
pub const IDLE_BOB_HZ: f32 = 0.45;
pub const IDLE_SPIN_RAD_PER_SEC: f32 = 0.8;

// Eased snap-back to the rest position after a drag release
pub const RETURN_TWEEN_SEC: f64 = 0.55;

// ---------------- Glow ----------------

pub const GLOW_EMISSIVE_BASE: f32 = 0.55;
pub const GLOW_FLASH_BOOST: f32 = 0.8;
pub const GLOW_FLASH_DECAY_PER_SEC: f32 = 1.2;

// Hover feedback on the sponge
pub const HOVER_BRIGHTEN: f32 = 1.35;

// ---------------- Scene placement & palette ----------------

// Crow model sits on the tub floor
pub const CROW_BASE: Vec3 = Vec3::new(0.0, 0.35, 0.0);

pub const FLOOR_EXTENT: f32 = 8.0;

pub const FLOOR_COLOR: [f32; 4] = [0.16, 0.17, 0.20, 1.0];
pub const TUB_COLOR: [f32; 4] = [0.88, 0.90, 0.93, 1.0];
pub const CROW_COLOR: [f32; 4] = [0.12, 0.12, 0.15, 1.0];
pub const SPONGE_COLOR: [f32; 4] = [0.95, 0.85, 0.25, 1.0];

// ---------------- Camera ----------------

pub const CAMERA_EYE: Vec3 = Vec3::new(0.0, 2.6, 6.5);
pub const CAMERA_TARGET: Vec3 = Vec3::new(0.0, 0.8, 0.0);

// ---------------- Audio ----------------

pub const CUE_VOLUME: f32 = 0.6;

// ---------------- Asset paths ----------------

pub const CROW_MODEL_URL: &str = "assets/crow.obj";
pub const TUB_MODEL_URL: &str = "assets/bathtub.obj";
pub const SQUEAK_CUE_URL: &str = "assets/squeak.ogg";
pub const SPLASH_CUE_URL: &str = "assets/splash.ogg";
