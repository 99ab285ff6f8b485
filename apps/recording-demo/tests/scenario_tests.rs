use recording_demo::{select, Layout, PlaybackReport, Scenario, ScenarioPlayer, Selection, VirtualPacer};
use voxhold_core::ManualClock;
use voxhold_gesture::{CancelCause, GestureConfig, RecordingOutcome};
use voxhold_testing::robot_assertions::assert_bars_in_range;
use voxhold_ui::HelpMessage::{PressAndHold, ReleaseToCancel, SwipeLeftToCancel};

fn play(name: &str) -> PlaybackReport {
    let scenario = Scenario::named(name).unwrap_or_else(|| panic!("no scenario {name}"));
    let clock = ManualClock::new();
    let mut player = ScenarioPlayer::new(clock.clone(), GestureConfig::default(), Layout::default())
        .expect("default config")
        .with_waveform_seed(3);
    let report = player.play(&scenario, &mut VirtualPacer::new(clock));
    assert_eq!(player.controller().pending_timers(), 0, "{name} leaked timers");
    report
}

#[test]
fn tap_is_debounced() {
    let report = play("tap");
    assert_eq!(report.outcome, Some(RecordingOutcome::Debounced { held_ms: 200 }));
    assert_eq!(report.help_messages, vec![PressAndHold]);
    assert!(report.duration_labels.is_empty());
}

#[test]
fn send_keeps_the_recording() {
    let report = play("send");
    match &report.outcome {
        Some(RecordingOutcome::Completed {
            duration_secs,
            bars,
        }) => {
            assert_eq!(*duration_secs, 2);
            assert_eq!(bars.len(), 8);
            assert_bars_in_range(bars, 4.0, 24.0, "send");
        }
        other => panic!("expected a kept recording, got {other:?}"),
    }
    assert_eq!(report.duration_labels, vec!["00:00", "00:01", "00:02"]);
    assert_eq!(
        report.help_messages,
        vec![PressAndHold, SwipeLeftToCancel, PressAndHold]
    );
    assert!(report.exit.as_ref().is_some_and(|exit| !exit.is_discard()));
}

#[test]
fn swipe_cancel_discards_into_the_trash() {
    let report = play("swipe-cancel");
    assert_eq!(
        report.outcome,
        Some(RecordingOutcome::Discarded {
            duration_secs: 1,
            cause: CancelCause::Swipe,
        })
    );
    assert_eq!(
        report.help_messages,
        vec![PressAndHold, SwipeLeftToCancel, ReleaseToCancel, PressAndHold]
    );
    assert!(report.exit.as_ref().is_some_and(|exit| exit.is_discard()));
}

#[test]
fn swipe_recover_returns_to_recording() {
    let report = play("swipe-recover");
    assert!(matches!(
        report.outcome,
        Some(RecordingOutcome::Completed {
            duration_secs: 2,
            ..
        })
    ));
    assert_eq!(
        report.help_messages,
        vec![
            PressAndHold,
            SwipeLeftToCancel,
            ReleaseToCancel,
            SwipeLeftToCancel,
            PressAndHold
        ]
    );
}

#[test]
fn drag_to_trash_discards_by_proximity() {
    let report = play("drag-to-trash");
    assert_eq!(
        report.outcome,
        Some(RecordingOutcome::Discarded {
            duration_secs: 2,
            cause: CancelCause::Proximity,
        })
    );
}

#[test]
fn touch_swipe_uses_the_lower_threshold() {
    let report = play("touch-swipe");
    assert_eq!(
        report.outcome,
        Some(RecordingOutcome::Discarded {
            duration_secs: 1,
            cause: CancelCause::Swipe,
        })
    );
}

#[test]
fn stolen_stream_ends_the_press() {
    let report = play("stolen");
    assert!(matches!(
        report.outcome,
        Some(RecordingOutcome::Completed {
            duration_secs: 0,
            ..
        })
    ));
}

#[test]
fn every_scenario_has_a_unique_name() {
    let scenarios = Scenario::all();
    for (index, scenario) in scenarios.iter().enumerate() {
        assert!(
            scenarios[index + 1..].iter().all(|other| other.name != scenario.name),
            "duplicate scenario {}",
            scenario.name
        );
    }
}

#[test]
fn selection_parses_arguments() {
    let args = |list: &[&str]| list.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    assert_eq!(select(&args(&["--list"])).ok(), Some(Selection::List));
    match select(&args(&[])) {
        Ok(Selection::Run(all)) => assert_eq!(all.len(), Scenario::all().len()),
        other => panic!("expected every scenario, got {other:?}"),
    }
    match select(&args(&["tap", "send"])) {
        Ok(Selection::Run(picked)) => {
            let names: Vec<_> = picked.iter().map(|s| s.name).collect();
            assert_eq!(names, vec!["tap", "send"]);
        }
        other => panic!("expected two scenarios, got {other:?}"),
    }

    let err = select(&args(&["nope"])).expect_err("unknown scenario");
    assert!(err.to_string().contains("unknown scenario 'nope'"));
    assert!(select(&args(&["--fast"])).is_err());
}
