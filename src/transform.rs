//! Composite 2-D transform between world and physical space.

use crate::axis::PhysicalAxis;
use crate::geom::{Point, ScreenPoint};

/// Transform from world coordinates into physical coordinates.
///
/// The two axes are independent; either may be inverted or non-linear.
#[derive(Debug, Clone, Copy)]
pub struct Transform2D {
    x_axis: PhysicalAxis,
    y_axis: PhysicalAxis,
}

impl Transform2D {
    /// Create a transform from two axis mappings.
    pub fn new(x_axis: PhysicalAxis, y_axis: PhysicalAxis) -> Self {
        Self { x_axis, y_axis }
    }

    /// Access the X axis mapping.
    pub fn x_axis(&self) -> &PhysicalAxis {
        &self.x_axis
    }

    /// Access the Y axis mapping.
    pub fn y_axis(&self) -> &PhysicalAxis {
        &self.y_axis
    }

    /// Map a world point into physical space.
    ///
    /// Unmappable coordinates come back as NaN components; the renderer
    /// skips such samples.
    pub fn transform(&self, point: Point) -> ScreenPoint {
        ScreenPoint::new(
            self.x_axis.world_to_physical(point.x),
            self.y_axis.world_to_physical(point.y),
        )
    }

    /// Map a physical point back into world space.
    ///
    /// With `clamp` set, each coordinate is clamped into its axis's world
    /// range.
    pub fn inverse(&self, point: ScreenPoint, clamp: bool) -> Point {
        Point::new(
            self.x_axis.physical_to_world(point.x, clamp),
            self.y_axis.physical_to_world(point.y, clamp),
        )
    }
}
