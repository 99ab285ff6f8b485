use super::*;
use crate::state::GesturePhase;
use voxhold_core::ManualClock;

fn controller() -> (ManualClock, RecordingController<ManualClock>) {
    let clock = ManualClock::new();
    let mut controller = RecordingController::new(clock.clone(), GestureConfig::default())
        .expect("default config is valid")
        .with_waveform_seed(11);
    controller.set_target_bounds(Some(Rect::new(6.0, 86.0, 28.0, 28.0)));
    (clock, controller)
}

fn send(
    clock: &ManualClock,
    controller: &mut RecordingController<ManualClock>,
    event: PointerEvent,
) -> Option<RecordingOutcome> {
    clock.set(event.timestamp_ms);
    controller.handle_event(&event)
}

#[test]
fn invalid_config_is_rejected() {
    let mut config = GestureConfig::default();
    config.swipe.cancel_velocity_px_s = 2_000.0;
    assert!(RecordingController::new(ManualClock::new(), config).is_err());
}

#[test]
fn quick_tap_never_leaves_idle() {
    let (clock, mut controller) = controller();
    send(&clock, &mut controller, PointerEvent::down(300.0, 100.0, 0));
    clock.set(399);
    controller.pump();
    assert_eq!(controller.state(), GestureState::Idle);

    let outcome = send(&clock, &mut controller, PointerEvent::up(300.0, 100.0, 399));

    assert_eq!(outcome, Some(RecordingOutcome::Debounced { held_ms: 399 }));
    assert_eq!(controller.pending_timers(), 0);
    clock.set(5_000);
    assert_eq!(controller.pump(), 0);
    assert_eq!(controller.state(), GestureState::Idle);
}

#[test]
fn pump_arms_recording_at_the_delay() {
    let (clock, mut controller) = controller();
    send(&clock, &mut controller, PointerEvent::down(300.0, 100.0, 0));
    clock.set(400);
    assert_eq!(controller.pump(), 1);
    assert_eq!(controller.state().phase(), GesturePhase::Pressing);
    assert_eq!(controller.next_deadline(), Some(650));
}

#[test]
fn timers_due_before_an_event_fire_first() {
    let (clock, mut controller) = controller();
    send(&clock, &mut controller, PointerEvent::down(300.0, 100.0, 0));

    // No pump between press and move: the arm timer must still be applied
    // before this move is classified.
    send(&clock, &mut controller, PointerEvent::moved(270.0, 100.0, 500));
    send(&clock, &mut controller, PointerEvent::moved(230.0, 100.0, 510));

    assert_eq!(controller.state().phase(), GesturePhase::Cancelling);
}

#[test]
fn new_press_tears_down_previous_session() {
    let (clock, mut controller) = controller();
    send(&clock, &mut controller, PointerEvent::down(300.0, 100.0, 0));
    clock.set(1_000);
    controller.pump();
    assert_eq!(controller.pending_timers(), 2);

    send(&clock, &mut controller, PointerEvent::down(300.0, 100.0, 1_000));

    assert_eq!(controller.pending_timers(), 1, "only the new arm timer");
    assert_eq!(controller.state(), GestureState::Idle);
}

#[test]
fn teardown_clears_everything() {
    let (clock, mut controller) = controller();
    send(&clock, &mut controller, PointerEvent::down(300.0, 100.0, 0));
    clock.set(700);
    controller.pump();

    controller.teardown();

    assert!(!controller.is_pressed());
    assert_eq!(controller.pending_timers(), 0);
    assert!(controller.snapshot().is_none());
}

#[test]
fn pointer_cancel_ends_the_press() {
    let (clock, mut controller) = controller();
    send(&clock, &mut controller, PointerEvent::down(300.0, 100.0, 0));
    let outcome = send(&clock, &mut controller, PointerEvent::cancel(2_100));
    assert!(matches!(
        outcome,
        Some(RecordingOutcome::Completed {
            duration_secs: 1,
            ..
        })
    ));
}

#[test]
fn missing_target_skips_proximity() {
    let (clock, mut controller) = controller();
    controller.set_target_bounds(None);
    send(&clock, &mut controller, PointerEvent::down(300.0, 100.0, 0));
    clock.set(400);
    controller.pump();

    send(&clock, &mut controller, PointerEvent::moved(20.0, 100.0, 2_000));

    let snapshot = controller.snapshot().expect("live session");
    assert!(!snapshot.near_target);
    assert!(snapshot.target_center.is_none());
    assert_eq!(snapshot.state.phase(), GesturePhase::Pressing);
}

#[test]
fn stray_events_without_press_are_ignored() {
    let (clock, mut controller) = controller();
    assert!(send(&clock, &mut controller, PointerEvent::moved(1.0, 1.0, 10)).is_none());
    assert!(send(&clock, &mut controller, PointerEvent::up(1.0, 1.0, 20)).is_none());
    assert_eq!(controller.release(), None);
}
