// Scene flag state machine: the scrub counter and the three monotonic
// flags that gate the overlays. No platform types; time comes in as
// seconds so the whole flow is host-testable.

/// Which intro button was pressed. Both answers drive identical behavior
/// downstream; the riddle has no correct answer. The value is kept for
/// logging only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntroAnswer {
    Yes,
    No,
}

impl IntroAnswer {
    pub fn label(self) -> &'static str {
        match self {
            IntroAnswer::Yes => "yes",
            IntroAnswer::No => "no",
        }
    }
}

/// Result of registering one scrub.
#[derive(Clone, Copy, Debug)]
pub struct ScrubOutcome {
    pub count: u32,
    /// True only on the tick where the counter first reaches the target.
    pub glow_unlocked: bool,
}

pub struct SceneFlags {
    pub scrub_count: u32,
    pub glow: bool,
    pub intro_visible: bool,
    pub dead: bool,
    target_count: u32,
    dead_delay_sec: f64,
    dead_at: Option<f64>,
}

impl SceneFlags {
    pub fn new(target_count: u32, dead_delay_sec: f64) -> Self {
        Self {
            scrub_count: 0,
            glow: false,
            intro_visible: true,
            dead: false,
            target_count,
            dead_delay_sec,
            dead_at: None,
        }
    }

    /// Count one scrub. The glow flag is monotonic: once set it never
    /// clears, and `glow_unlocked` reports only the unlocking scrub.
    pub fn record_scrub(&mut self) -> ScrubOutcome {
        self.scrub_count += 1;
        let unlocked = !self.glow && self.scrub_count >= self.target_count;
        if unlocked {
            self.glow = true;
        }
        ScrubOutcome {
            count: self.scrub_count,
            glow_unlocked: unlocked,
        }
    }

    /// First button press hides the intro and arms the dead deadline.
    /// Later presses are ignored; the answer itself does not branch.
    pub fn dismiss_intro(&mut self, _answer: IntroAnswer, now_sec: f64) {
        if !self.intro_visible {
            return;
        }
        self.intro_visible = false;
        self.dead_at = Some(now_sec + self.dead_delay_sec);
    }

    /// Per-frame poll of the dead deadline. Returns true exactly once, on
    /// the frame where the deadline elapses. The deadline lives in this
    /// struct rather than in a deferred callback, so dropping the owning
    /// loop cancels it.
    pub fn tick(&mut self, now_sec: f64) -> bool {
        match self.dead_at {
            Some(deadline) if !self.dead && now_sec >= deadline => {
                self.dead = true;
                true
            }
            _ => false,
        }
    }

    /// Disarm the pending dead transition (view teardown).
    #[allow(dead_code)]
    pub fn cancel_pending(&mut self) {
        self.dead_at = None;
    }
}
