//! Scripted recording gestures replayed against the real controller.

pub mod player;
pub mod scenario;

pub use player::{Layout, Pacer, PlaybackReport, ScenarioPlayer, VirtualPacer, FRAME_MS};
pub use scenario::{select, Action, Scenario, Selection, Step};
