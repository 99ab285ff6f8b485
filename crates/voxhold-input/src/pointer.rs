use crate::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Input device class that produced an event.
///
/// Touch screens report slower swipes than mice for the same intent, so the
/// classifier uses a lower velocity threshold for [`DeviceKind::Touch`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DeviceKind {
    #[default]
    Pointer,
    Touch,
}

impl DeviceKind {
    pub fn is_touch(self) -> bool {
        matches!(self, DeviceKind::Touch)
    }
}

/// Raw input sample: position plus the host timestamp it was observed at.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct GestureSample {
    pub x: f32,
    pub y: f32,
    pub timestamp_ms: u64,
}

impl GestureSample {
    pub const fn new(x: f32, y: f32, timestamp_ms: u64) -> Self {
        Self { x, y, timestamp_ms }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Pointer or touch event delivered by the host UI runtime.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub position: Point,
    pub device: DeviceKind,
    pub timestamp_ms: u64,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, timestamp_ms: u64) -> Self {
        Self {
            kind,
            position,
            device: DeviceKind::Pointer,
            timestamp_ms,
        }
    }

    pub fn down(x: f32, y: f32, timestamp_ms: u64) -> Self {
        Self::new(PointerEventKind::Down, Point::new(x, y), timestamp_ms)
    }

    pub fn moved(x: f32, y: f32, timestamp_ms: u64) -> Self {
        Self::new(PointerEventKind::Move, Point::new(x, y), timestamp_ms)
    }

    pub fn up(x: f32, y: f32, timestamp_ms: u64) -> Self {
        Self::new(PointerEventKind::Up, Point::new(x, y), timestamp_ms)
    }

    pub fn cancel(timestamp_ms: u64) -> Self {
        Self::new(PointerEventKind::Cancel, Point::ZERO, timestamp_ms)
    }

    /// Set the device class for this event.
    pub fn with_device(mut self, device: DeviceKind) -> Self {
        self.device = device;
        self
    }

    pub fn touch(self) -> Self {
        self.with_device(DeviceKind::Touch)
    }

    pub fn sample(&self) -> GestureSample {
        GestureSample::new(self.position.x, self.position.y, self.timestamp_ms)
    }
}
