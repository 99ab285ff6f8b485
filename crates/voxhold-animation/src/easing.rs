/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

/// Easing curves used by the recording UI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Overshoots slightly past 1.0 before settling, for "pop" exits.
    BackOut,
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Apply the easing function to a linear fraction in `[0, 1]`.
    pub fn transform(&self, fraction: f32) -> f32 {
        let fraction = fraction.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => fraction,
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, fraction),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, fraction),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, fraction),
            Easing::BackOut if fraction <= 0.0 => 0.0,
            Easing::BackOut => {
                const OVERSHOOT: f32 = 1.70158;
                let t = fraction - 1.0;
                1.0 + (OVERSHOOT + 1.0) * t * t * t + OVERSHOOT * t * t
            }
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(x1, y1, x2, y2, fraction),
        }
    }
}

/// Solves the CSS-style cubic bezier for `y` at horizontal position `fraction`.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;
    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    let curve = |a: f32, b: f32, c: f32, t: f32| ((a * t + b) * t + c) * t;
    let slope = |a: f32, b: f32, c: f32, t: f32| (3.0 * a * t + 2.0 * b) * t + c;

    // Newton first, bisection if the slope flattens out.
    let mut t = fraction;
    for _ in 0..8 {
        let error = curve(ax, bx, cx, t) - fraction;
        if error.abs() < 1e-6 {
            return curve(ay, by, cy, t);
        }
        let d = slope(ax, bx, cx, t);
        if d.abs() < 1e-6 {
            break;
        }
        t = (t - error / d).clamp(0.0, 1.0);
    }

    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    t = fraction;
    for _ in 0..20 {
        let x = curve(ax, bx, cx, t);
        if (x - fraction).abs() < 1e-6 {
            break;
        }
        if x > fraction {
            hi = t;
        } else {
            lo = t;
        }
        t = 0.5 * (lo + hi);
    }
    curve(ay, by, cy, t)
}
