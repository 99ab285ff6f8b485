use super::*;
use crate::presentation::PresentationParams;

fn settle(animator: &mut RecordingAnimator, from_ms: u64) -> u64 {
    let mut now = from_ms;
    while animator.tick(now) {
        now += 16;
        assert!(now - from_ms < 10_000, "animator never settled");
    }
    now
}

fn recording(config: &AnimationConfig, is_cancel: bool) -> PresentationParams {
    let mut params = PresentationParams::idle(config);
    params.is_cancel = is_cancel;
    params.cursor.visible = true;
    params.cursor.scale = if is_cancel { 1.25 } else { 1.0 };
    params.recording_bar.visible = true;
    params.recording_bar.width_px = 369.0;
    params.recording_bar.scale = 1.0;
    params.trash.visible = true;
    params.trash.lid_rotation_deg = if is_cancel { -15.0 } else { 0.0 };
    params
}

#[test]
fn starts_at_rest() {
    let mut animator = RecordingAnimator::new(AnimationConfig::default());
    assert!(!animator.is_animating());
    assert!(!animator.tick(0));
    assert_eq!(animator.bar_width(), 40.0);
    assert_eq!(animator.bar_scale(), 0.6);
}

#[test]
fn bar_springs_open_when_recording_starts() {
    let config = AnimationConfig::default();
    let mut animator = RecordingAnimator::new(config);
    animator.update(&recording(&config, false));
    assert!(animator.is_animating());

    animator.tick(0);
    animator.tick(48);
    assert!(animator.bar_width() > 40.0 && animator.bar_width() < 369.0);

    settle(&mut animator, 64);
    assert_eq!(animator.bar_width(), 369.0);
    assert_eq!(animator.bar_scale(), 1.0);
    assert_eq!(animator.bar_opacity(), 1.0);
}

#[test]
fn cancel_opens_lid_and_grows_cursor() {
    let config = AnimationConfig::default();
    let mut animator = RecordingAnimator::new(config);
    animator.update(&recording(&config, false));
    let now = settle(&mut animator, 0);

    animator.update(&recording(&config, true));
    settle(&mut animator, now);
    assert_eq!(animator.cursor_scale(), 1.25);
    assert_eq!(animator.lid_rotation(), -15.0);
}

#[test]
fn repeated_updates_do_not_restart_motion() {
    let config = AnimationConfig::default();
    let mut animator = RecordingAnimator::new(config);
    let params = recording(&config, false);
    animator.update(&params);
    let now = settle(&mut animator, 0);

    animator.update(&params);
    assert!(!animator.is_animating());
    assert!(!animator.tick(now + 16));
}

#[test]
fn release_collapses_bar_with_tween() {
    let config = AnimationConfig::default();
    let mut animator = RecordingAnimator::new(config);
    animator.update(&recording(&config, false));
    let now = settle(&mut animator, 0);

    animator.update(&PresentationParams::idle(&config));
    animator.tick(now);
    let end = settle(&mut animator, now + 16);
    assert!(end - now >= config.recording_exit_ms);
    assert_eq!(animator.bar_width(), 40.0);
    assert_eq!(animator.bar_opacity(), 0.0);
    assert_eq!(animator.cursor_scale(), 1.0);
}
