//! Testing utilities for voxhold gestures

pub mod robot;
pub mod robot_assertions;

pub use robot::GestureRobot;

pub mod prelude {
    pub use crate::robot::GestureRobot;
    pub use crate::robot_assertions;
    pub use voxhold_gesture::{GesturePhase, GestureState, RecordingOutcome};
}
