use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use voxhold_core::ManualClock;
use voxhold_gesture::{
    classify, ClassifierInput, DeviceKind, GestureConfig, PointerEvent, RecordingController, Rect,
    SwipeConfig,
};

const SAMPLES_PER_SWIPE: &[usize] = &[16, 128];

fn bench_classify(c: &mut Criterion) {
    let config = SwipeConfig::default();
    let inputs: Vec<ClassifierInput> = (0..256)
        .map(|i| ClassifierInput {
            displacement: -(i as f32),
            velocity: -(i as f32) * 16.0,
            device: if i % 2 == 0 {
                DeviceKind::Pointer
            } else {
                DeviceKind::Touch
            },
            near_target: i % 7 == 0,
        })
        .collect();

    c.bench_function("classify_256", |b| {
        b.iter(|| {
            for input in &inputs {
                black_box(classify(black_box(input), &config));
            }
        })
    });
}

fn bench_swipe_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("swipe_session");
    for &samples in SAMPLES_PER_SWIPE {
        group.bench_with_input(BenchmarkId::from_parameter(samples), &samples, |b, &n| {
            b.iter(|| {
                let clock = ManualClock::new();
                let mut controller =
                    RecordingController::new(clock.clone(), GestureConfig::default())
                        .expect("default config")
                        .with_waveform_seed(1);
                controller.set_target_bounds(Some(Rect::new(6.0, 86.0, 28.0, 28.0)));
                controller.handle_event(&PointerEvent::down(360.0, 100.0, 0));
                for step in 0..n as u64 {
                    let t = 400 + step * 8;
                    clock.set(t);
                    let x = 360.0 - step as f32 * 2.5;
                    controller.handle_event(&PointerEvent::moved(x, 100.0, t));
                }
                black_box(controller.release())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_classify, bench_swipe_session);
criterion_main!(benches);
