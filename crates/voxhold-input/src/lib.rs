//! Input side of the recording gesture: geometry, host pointer events and
//! the per-press sampler that turns them into position and velocity.

mod geometry;
mod pointer;
mod sampler;
pub mod velocity_tracker;

pub use geometry::{Point, Rect};
pub use pointer::{DeviceKind, GestureSample, PointerEvent, PointerEventKind};
pub use sampler::{InputSampler, VelocityStrategy};
pub use velocity_tracker::ImpulseVelocityTracker;
