//! Press-and-hold recording gesture with swipe-to-cancel detection.
//!
//! A press becomes a recording after [`config::ARM_DELAY_MS`]. While recording,
//! a fast leftward swipe or dragging the pointer onto the trash target puts
//! the session into its cancel state; releasing there discards the recording.
//!
//! The pieces, bottom-up:
//! - [`classify`]: pure swipe classification of one motion sample.
//! - [`ProximityTarget`]: drag-to-trash detection.
//! - [`GestureSession`]: one press, with its timers and hysteresis.
//! - [`RecordingController`]: routes host events and due timers to the session.

mod classifier;
pub mod config;
mod controller;
mod proximity;
mod session;
mod state;
mod waveform;

pub use classifier::{classify, Classification, ClassifierInput, SwipeDecision};
pub use config::{
    ConfigError, GestureConfig, ProximityConfig, RecordingConfig, SwipeConfig,
};
pub use controller::RecordingController;
pub use proximity::ProximityTarget;
pub use session::{GestureSession, SessionScheduler, SessionTimer};
pub use state::{CancelCause, GesturePhase, GestureState, RecordingOutcome, SessionSnapshot};
pub use waveform::Waveform;

pub use voxhold_input::{DeviceKind, Point, PointerEvent, PointerEventKind, Rect};
