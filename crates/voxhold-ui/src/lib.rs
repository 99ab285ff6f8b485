//! Presentation layer of the recording gesture.
//!
//! [`map_presentation`] turns a [`voxhold_gesture::SessionSnapshot`] into
//! [`PresentationParams`]; [`RecordingAnimator`] springs between them;
//! [`ExitTransition`] describes what plays after release.

mod animator;
mod color;
mod exit;
mod format;
mod presentation;

pub use animator::RecordingAnimator;
pub use color::Color;
pub use exit::{CursorExitFrame, ExitTransition, TrashDeleteSequence, TrashFrame};
pub use format::format_duration;
pub use presentation::{
    map_presentation, AnimationConfig, CursorParams, HelpMessage, PresentationParams,
    RecordingBarParams, TrashParams,
};
