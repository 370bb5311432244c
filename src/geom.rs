//! Geometric primitives used by the rendering pipeline.
//!
//! World-space types carry f64 data coordinates; physical-space types carry
//! f32 pixel coordinates on the drawing surface.

/// A point in world (data) space.
///
/// Either coordinate may be NaN to mark a missing sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X value in world coordinates.
    pub x: f64,
    /// Y value in world coordinates.
    pub y: f64,
}

impl Point {
    /// Create a new world-space point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Check whether both coordinates are present (not NaN).
    pub fn is_valid(&self) -> bool {
        !self.x.is_nan() && !self.y.is_nan()
    }
}

/// A point in physical (pixel) space on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    /// X value in physical pixels.
    pub x: f32,
    /// Y value in physical pixels.
    pub y: f32,
}

impl ScreenPoint {
    /// Create a new physical-space point.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Check whether both coordinates are present (not NaN).
    pub fn is_valid(&self) -> bool {
        !self.x.is_nan() && !self.y.is_nan()
    }

    /// Displace the point by a physical-space offset.
    pub fn offset(&self, offset: ScreenOffset) -> Self {
        Self::new(self.x + offset.dx, self.y + offset.dy)
    }
}

/// A displacement in physical (pixel) space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenOffset {
    /// Horizontal displacement in pixels.
    pub dx: f32,
    /// Vertical displacement in pixels.
    pub dy: f32,
}

impl ScreenOffset {
    /// The zero offset.
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };

    /// Create a new physical-space offset.
    pub fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }
}

/// A rectangle in physical (pixel) space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    /// Top-left corner.
    pub min: ScreenPoint,
    /// Bottom-right corner.
    pub max: ScreenPoint,
}

impl ScreenRect {
    /// Create a new rectangle from corners.
    pub fn new(min: ScreenPoint, max: ScreenPoint) -> Self {
        Self { min, max }
    }

    /// Rectangle width in pixels.
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Rectangle height in pixels.
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Check whether the rectangle has positive area.
    pub fn is_valid(&self) -> bool {
        self.width() > 0.0 && self.height() > 0.0
    }
}
