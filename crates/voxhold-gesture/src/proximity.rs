use voxhold_input::{Point, Rect};

use crate::config::ProximityConfig;

/// Screen-space bounds of the destructive ("trash") target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProximityTarget {
    bounds: Rect,
}

impl ProximityTarget {
    pub fn new(bounds: Rect) -> Self {
        Self { bounds }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn center(&self) -> Point {
        self.bounds.center()
    }

    /// Distance from the pointer's hotspot to the target center.
    pub fn distance_from(&self, pointer: Point, config: &ProximityConfig) -> f32 {
        let hotspot = pointer.offset(config.hotspot_offset_px, config.hotspot_offset_px);
        hotspot.distance_to(self.center())
    }

    pub fn is_near(&self, pointer: Point, config: &ProximityConfig) -> bool {
        self.distance_from(pointer, config) <= config.radius_px
    }
}
