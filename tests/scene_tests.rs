// Host-side tests for the scene flag state machine.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod scene {
    include!("../src/core/scene.rs");
}

use scene::*;

const TARGET: u32 = 10;
const DEAD_DELAY: f64 = 0.8;

fn make_flags() -> SceneFlags {
    SceneFlags::new(TARGET, DEAD_DELAY)
}

#[test]
fn counter_accumulates_one_per_scrub() {
    let mut flags = make_flags();
    for expected in 1..=7 {
        let outcome = flags.record_scrub();
        assert_eq!(outcome.count, expected);
    }
    assert_eq!(flags.scrub_count, 7);
    assert!(!flags.glow);
}

#[test]
fn glow_unlocks_at_target_and_stays() {
    let mut flags = make_flags();
    for i in 1..=TARGET - 1 {
        let outcome = flags.record_scrub();
        assert!(!outcome.glow_unlocked, "no glow at scrub {i}");
        assert!(!flags.glow);
    }
    let outcome = flags.record_scrub();
    assert!(outcome.glow_unlocked);
    assert!(flags.glow);

    // further scrubs keep the flag set and never re-report the unlock
    for _ in 0..5 {
        let outcome = flags.record_scrub();
        assert!(!outcome.glow_unlocked);
        assert!(flags.glow);
    }
    assert_eq!(flags.scrub_count, TARGET + 5);
}

#[test]
fn either_answer_leads_to_dead_after_delay() {
    for answer in [IntroAnswer::Yes, IntroAnswer::No] {
        let mut flags = make_flags();
        assert!(flags.intro_visible);
        flags.dismiss_intro(answer, 1.0);
        assert!(!flags.intro_visible);
        assert!(!flags.dead);

        assert!(!flags.tick(1.0));
        assert!(!flags.tick(1.0 + DEAD_DELAY - 1e-3));
        assert!(!flags.dead);

        assert!(flags.tick(1.0 + DEAD_DELAY), "answer {:?}", answer);
        assert!(flags.dead);
    }
}

#[test]
fn dead_transition_reports_once() {
    let mut flags = make_flags();
    flags.dismiss_intro(IntroAnswer::No, 0.0);
    assert!(flags.tick(DEAD_DELAY));
    assert!(!flags.tick(DEAD_DELAY + 0.1));
    assert!(flags.dead);
}

#[test]
fn no_dead_without_dismissal() {
    let mut flags = make_flags();
    for i in 0..100 {
        assert!(!flags.tick(i as f64));
    }
    assert!(!flags.dead);
    assert!(flags.intro_visible);
}

#[test]
fn second_dismissal_is_ignored() {
    let mut flags = make_flags();
    flags.dismiss_intro(IntroAnswer::Yes, 0.0);
    // a stray later click must not push the deadline out
    flags.dismiss_intro(IntroAnswer::No, 0.5);
    assert!(flags.tick(DEAD_DELAY));
    assert!(flags.dead);
}

#[test]
fn cancel_pending_disarms_the_deadline() {
    let mut flags = make_flags();
    flags.dismiss_intro(IntroAnswer::Yes, 0.0);
    flags.cancel_pending();
    assert!(!flags.tick(10.0));
    assert!(!flags.dead);
}

#[test]
fn answers_carry_labels_for_logging() {
    assert_eq!(IntroAnswer::Yes.label(), "yes");
    assert_eq!(IntroAnswer::No.label(), "no");
}
