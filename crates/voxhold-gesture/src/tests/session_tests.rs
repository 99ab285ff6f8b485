use super::*;
use crate::state::GesturePhase;
use voxhold_input::Rect;

struct Harness {
    scheduler: SessionScheduler,
    session: GestureSession,
    target: Option<ProximityTarget>,
}

impl Harness {
    fn press_at(x: f32, y: f32, t: u64) -> Self {
        let scheduler = SessionScheduler::new();
        let config = GestureConfig::default();
        let target = Some(ProximityTarget::new(Rect::new(6.0, 86.0, 28.0, 28.0)));
        let session = GestureSession::press(
            &PointerEvent::down(x, y, t),
            config,
            Waveform::seeded(&config.recording, 3),
            target.as_ref(),
            &scheduler,
        );
        Self {
            scheduler,
            session,
            target,
        }
    }

    fn advance_to(&mut self, now: u64) {
        while let Some(fired) = self.scheduler.pop_due(now) {
            assert!(self
                .session
                .on_timer(&fired, self.target.as_ref(), &self.scheduler));
        }
    }

    fn move_to(&mut self, event: PointerEvent) {
        self.advance_to(event.timestamp_ms);
        self.session
            .on_move(&event, self.target.as_ref(), &self.scheduler);
    }

    fn phase(&self, now: u64) -> GesturePhase {
        self.session.state(now).phase()
    }
}

#[test]
fn arm_delay_gates_recording() {
    let mut harness = Harness::press_at(300.0, 100.0, 0);
    harness.advance_to(399);
    assert_eq!(harness.phase(399), GesturePhase::Idle);

    harness.advance_to(400);
    assert_eq!(harness.phase(400), GesturePhase::Pressing);
    assert_eq!(harness.session.snapshot(400).duration_secs, Some(0));
}

#[test]
fn moves_before_arm_are_not_classified() {
    let mut harness = Harness::press_at(300.0, 100.0, 0);
    harness.move_to(PointerEvent::moved(290.0, 100.0, 100));
    harness.move_to(PointerEvent::moved(200.0, 100.0, 110));

    assert_eq!(harness.scheduler.pending_count(), 1, "only the arm timer");
    harness.advance_to(400);
    assert_eq!(
        harness.session.state(400),
        GestureState::Pressing {
            elapsed_ms: 0,
            distance: -100.0
        }
    );
}

#[test]
fn swipe_cancel_reverts_after_countdown() {
    let mut harness = Harness::press_at(300.0, 100.0, 0);
    harness.advance_to(400);

    harness.move_to(PointerEvent::moved(255.0, 100.0, 1_000));
    harness.move_to(PointerEvent::moved(230.0, 100.0, 1_010));
    assert_eq!(harness.phase(1_010), GesturePhase::Cancelling);
    assert!(harness.session.snapshot(1_010).swipe_cancel);

    harness.advance_to(1_509);
    assert_eq!(harness.phase(1_509), GesturePhase::Cancelling);
    harness.advance_to(1_510);
    assert_eq!(harness.phase(1_510), GesturePhase::Pressing);
}

#[test]
fn renewed_cancel_restarts_the_countdown_once() {
    let mut harness = Harness::press_at(300.0, 100.0, 0);
    harness.advance_to(400);

    harness.move_to(PointerEvent::moved(250.0, 100.0, 1_000));
    harness.move_to(PointerEvent::moved(225.0, 100.0, 1_010));
    let before = harness.scheduler.pending_count();
    harness.move_to(PointerEvent::moved(200.0, 100.0, 1_300));
    harness.move_to(PointerEvent::moved(175.0, 100.0, 1_310));
    assert_eq!(harness.scheduler.pending_count(), before);

    harness.advance_to(1_700);
    assert_eq!(harness.phase(1_700), GesturePhase::Cancelling);
    harness.advance_to(1_810);
    assert_eq!(harness.phase(1_810), GesturePhase::Pressing);
}

#[test]
fn rightward_recovery_resets_immediately() {
    let mut harness = Harness::press_at(300.0, 100.0, 0);
    harness.advance_to(400);
    harness.move_to(PointerEvent::moved(255.0, 100.0, 1_000));
    harness.move_to(PointerEvent::moved(230.0, 100.0, 1_010));
    assert_eq!(harness.phase(1_010), GesturePhase::Cancelling);

    harness.move_to(PointerEvent::moved(310.0, 100.0, 1_100));

    assert_eq!(harness.phase(1_100), GesturePhase::Pressing);
    assert_eq!(harness.session.active_timers(), 3, "ticks plus the rest countdown");
    harness.advance_to(1_140);
    assert_eq!(harness.session.active_timers(), 2, "only the tick timers remain");
}

#[test]
fn nearing_the_target_cancels_without_swiping() {
    let mut harness = Harness::press_at(300.0, 100.0, 0);
    harness.advance_to(400);

    // Slow walk to 40px right of the trash center.
    let mut t = 400;
    for x in (60..=300).rev().step_by(20) {
        t += 50;
        harness.move_to(PointerEvent::moved(x as f32, 100.0, t));
    }

    assert_eq!(
        harness.session.state(t),
        GestureState::Cancelling {
            elapsed_ms: t - 400,
            distance: -240.0,
            cause: CancelCause::Proximity,
        }
    );
}

#[test]
fn ticks_accumulate_duration_and_bars() {
    let mut harness = Harness::press_at(300.0, 100.0, 0);
    harness.advance_to(2_400);

    let snapshot = harness.session.snapshot(2_400);
    assert_eq!(snapshot.duration_secs, Some(2));
    assert_eq!(snapshot.bars.len(), 8);
}

#[test]
fn release_before_arm_is_debounced_and_clears_timers() {
    let harness = Harness::press_at(300.0, 100.0, 0);
    let scheduler = harness.scheduler.clone();

    let outcome = harness.session.release(250);

    assert_eq!(outcome, RecordingOutcome::Debounced { held_ms: 250 });
    assert_eq!(scheduler.pending_count(), 0);
}

#[test]
fn release_while_cancelling_discards() {
    let mut harness = Harness::press_at(300.0, 100.0, 0);
    harness.advance_to(1_400);
    harness.move_to(PointerEvent::moved(255.0, 100.0, 1_450));
    harness.move_to(PointerEvent::moved(230.0, 100.0, 1_460));
    let scheduler = harness.scheduler.clone();

    let outcome = harness.session.release(1_470);

    assert_eq!(
        outcome,
        RecordingOutcome::Discarded {
            duration_secs: 1,
            cause: CancelCause::Swipe
        }
    );
    assert_eq!(scheduler.pending_count(), 0);
}

#[test]
fn release_while_pressing_completes_with_bars() {
    let mut harness = Harness::press_at(300.0, 100.0, 0);
    harness.advance_to(1_650);

    match harness.session.release(1_650) {
        RecordingOutcome::Completed {
            duration_secs,
            bars,
        } => {
            assert_eq!(duration_secs, 1);
            assert_eq!(bars.len(), 5);
        }
        other => panic!("expected completion, got {other:?}"),
    }
}

#[test]
fn foreign_timer_is_ignored() {
    let mut harness = Harness::press_at(300.0, 100.0, 0);
    let other = SessionScheduler::new();
    let _stray = other.schedule_once(0, 1, SessionTimer::Arm);
    let fired = other.pop_due(1).expect("stray timer due");

    assert!(!harness
        .session
        .on_timer(&fired, harness.target.as_ref(), &harness.scheduler));
    assert_eq!(harness.phase(1), GesturePhase::Idle);
}

#[test]
fn touch_device_is_tracked_from_events() {
    let mut harness = Harness::press_at(300.0, 100.0, 0);
    harness.advance_to(400);
    harness.move_to(PointerEvent::moved(280.0, 100.0, 500).touch());
    assert_eq!(harness.session.device(), DeviceKind::Touch);

    // 15 px in 10 ms = -1500 px/s: enough for touch, not for a mouse.
    harness.move_to(PointerEvent::moved(235.0, 100.0, 600).touch());
    harness.move_to(PointerEvent::moved(220.0, 100.0, 610).touch());
    assert_eq!(harness.phase(610), GesturePhase::Cancelling);
}

#[test]
fn pointer_at_rest_drops_velocity_and_scale() {
    let mut harness = Harness::press_at(300.0, 100.0, 0);
    harness.advance_to(400);
    harness.move_to(PointerEvent::moved(300.0, 100.0, 1_000));
    harness.move_to(PointerEvent::moved(290.0, 100.0, 1_010));
    assert_eq!(harness.session.velocity(), -1_000.0);
    assert!(harness.session.snapshot(1_010).cursor_scale > 1.0);

    harness.advance_to(1_049);
    assert_eq!(harness.session.velocity(), -1_000.0);
    harness.advance_to(1_050);

    assert_eq!(harness.session.velocity(), 0.0);
    assert_eq!(harness.session.snapshot(1_050).cursor_scale, 1.0);
    assert_eq!(harness.session.displacement(), -10.0);
    assert_eq!(harness.phase(1_050), GesturePhase::Pressing);
}

#[test]
fn rest_does_not_lift_a_swipe_cancel() {
    let mut harness = Harness::press_at(300.0, 100.0, 0);
    harness.advance_to(400);
    harness.move_to(PointerEvent::moved(255.0, 100.0, 1_000));
    harness.move_to(PointerEvent::moved(230.0, 100.0, 1_010));

    harness.advance_to(1_100);

    assert_eq!(harness.session.velocity(), 0.0);
    assert_eq!(harness.phase(1_100), GesturePhase::Cancelling);
    harness.advance_to(1_510);
    assert_eq!(harness.phase(1_510), GesturePhase::Pressing);
}
