//! Axis scales and world/physical axis transforms.

use thiserror::Error;

use crate::view::Range;

const MIN_SPAN: f64 = 1e-12;

/// Errors raised when constructing an axis transform.
///
/// A malformed transform is a programming error and is surfaced at
/// construction time rather than mid-draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AxisError {
    /// The world range has a non-finite bound.
    #[error("world range bounds must be finite")]
    NonFiniteWorldRange,
    /// A log10 axis was given a non-positive world range.
    #[error("log10 axis requires a strictly positive world range")]
    LogScaleRange,
}

/// Axis scale type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisScale {
    /// Linear scaling.
    Linear,
    /// Base-10 logarithmic scaling.
    Log10,
    /// Time axis (mapped as linear values internally).
    Time,
}

impl AxisScale {
    /// Map a value into axis space.
    pub fn map_value(self, value: f64) -> Option<f64> {
        if !value.is_finite() {
            return None;
        }
        match self {
            Self::Linear | Self::Time => Some(value),
            Self::Log10 => {
                if value <= 0.0 {
                    None
                } else {
                    Some(value.log10())
                }
            }
        }
    }

    /// Invert a value from axis space back into data space.
    pub fn invert_value(self, value: f64) -> Option<f64> {
        if !value.is_finite() {
            return None;
        }
        match self {
            Self::Linear | Self::Time => Some(value),
            Self::Log10 => Some(10_f64.powf(value)),
        }
    }

    /// Check whether a data range is valid for this scale.
    pub fn is_range_valid(self, range: Range) -> bool {
        if !range.is_finite() {
            return false;
        }
        match self {
            Self::Linear | Self::Time => true,
            Self::Log10 => range.min > 0.0 && range.max > 0.0,
        }
    }
}

/// One axis's mapping between world coordinates and physical pixels.
///
/// The pixel bound of `world.min` is `physical_min` and the pixel bound of
/// `world.max` is `physical_max`. An inverted axis has
/// `physical_min > physical_max`; the mapping itself does not care about
/// pixel order.
#[derive(Debug, Clone, Copy)]
pub struct PhysicalAxis {
    scale: AxisScale,
    world: Range,
    mapped_min: f64,
    mapped_span: f64,
    physical_min: f32,
    physical_max: f32,
}

impl PhysicalAxis {
    /// Create an axis transform over the given world range and pixel bounds.
    pub fn new(
        scale: AxisScale,
        world: Range,
        physical_min: f32,
        physical_max: f32,
    ) -> Result<Self, AxisError> {
        if !world.is_finite() {
            return Err(AxisError::NonFiniteWorldRange);
        }
        if !scale.is_range_valid(world) {
            return Err(AxisError::LogScaleRange);
        }
        // Validated above, so both endpoints map; a degenerate window is
        // guarded by the minimum mapped span rather than rejected.
        let mapped_min = scale.map_value(world.min).unwrap_or(0.0);
        let mapped_max = scale.map_value(world.max).unwrap_or(0.0);
        let mapped_span = (mapped_max - mapped_min).max(MIN_SPAN);
        Ok(Self {
            scale,
            world,
            mapped_min,
            mapped_span,
            physical_min,
            physical_max,
        })
    }

    /// Create a linear axis transform.
    pub fn linear(world: Range, physical_min: f32, physical_max: f32) -> Result<Self, AxisError> {
        Self::new(AxisScale::Linear, world, physical_min, physical_max)
    }

    /// Access the axis scale.
    pub fn scale(&self) -> AxisScale {
        self.scale
    }

    /// Access the world range covered by the axis.
    pub fn world_range(&self) -> Range {
        self.world
    }

    /// Pixel coordinate of the world minimum.
    pub fn physical_min(&self) -> f32 {
        self.physical_min
    }

    /// Pixel coordinate of the world maximum.
    pub fn physical_max(&self) -> f32 {
        self.physical_max
    }

    /// Map a world coordinate to a physical pixel coordinate.
    ///
    /// Unmappable inputs (NaN, non-finite, non-positive on a log axis)
    /// produce NaN; callers skip such samples.
    pub fn world_to_physical(&self, world: f64) -> f32 {
        let Some(mapped) = self.scale.map_value(world) else {
            return f32::NAN;
        };
        let t = (mapped - self.mapped_min) / self.mapped_span;
        let min = self.physical_min as f64;
        let max = self.physical_max as f64;
        (min + t * (max - min)) as f32
    }

    /// Map a physical pixel coordinate back to a world coordinate.
    ///
    /// With `clamp` set, the result is clamped into the axis's world range.
    pub fn physical_to_world(&self, physical: f32, clamp: bool) -> f64 {
        if physical.is_nan() {
            return f64::NAN;
        }
        let span = self.physical_max as f64 - self.physical_min as f64;
        // A zero-width pixel window degrades to the world minimum.
        let t = if span == 0.0 {
            0.0
        } else {
            (physical as f64 - self.physical_min as f64) / span
        };
        let mapped = self.mapped_min + t * self.mapped_span;
        let Some(world) = self.scale.invert_value(mapped) else {
            return f64::NAN;
        };
        if clamp { self.world.clamp(world) } else { world }
    }
}
