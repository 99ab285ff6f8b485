//! Tweens, springs and keyframe tracks for the recording UI.

mod animation;
mod easing;

pub use animation::{AnimatedFloat, AnimationType, Keyframes, SpringSpec, TweenSpec};
pub use easing::{Easing, Lerp};
