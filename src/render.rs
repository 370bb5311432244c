//! Rendering primitives and the abstract drawing surface.
//!
//! These types are backend-agnostic; a render backend implements [`Surface`]
//! and receives draw calls in emission order.

use crate::geom::{ScreenPoint, ScreenRect};

/// RGBA color in linear space.
///
/// All components are expected to be in the 0.0..=1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Create a new color.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// Default shadow gray.
    pub const SHADOW_GRAY: Self = Self::new(0.4, 0.4, 0.4, 1.0);
}

/// Stroke dash pattern.
///
/// Dash realization is the surface's concern; the renderer passes the
/// pattern through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinePattern {
    /// Continuous stroke.
    #[default]
    Solid,
    /// Dashed stroke.
    Dashed,
    /// Dotted stroke.
    Dotted,
}

/// Line stroke styling.
///
/// The width is expressed in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f32,
    /// Stroke dash pattern.
    pub pattern: LinePattern,
}

impl LineStyle {
    /// Copy the style with a different color.
    pub fn with_color(&self, color: Color) -> Self {
        Self { color, ..*self }
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
            pattern: LinePattern::Solid,
        }
    }
}

/// An abstract 2-D drawing surface.
///
/// The renderer treats the surface as append-only and never reads from it.
pub trait Surface {
    /// Draw one line segment between two physical-space endpoints.
    fn draw_segment(&mut self, start: ScreenPoint, end: ScreenPoint, style: &LineStyle);

    /// Draw a short horizontal tick centered on a physical-space point.
    fn draw_tick(&mut self, center: ScreenPoint, half_width: f32, style: &LineStyle);
}

/// A recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// A line segment between two physical-space endpoints.
    Segment {
        /// Segment start.
        start: ScreenPoint,
        /// Segment end.
        end: ScreenPoint,
        /// Styling for the segment.
        style: LineStyle,
    },
    /// A horizontal tick centered on a physical-space point.
    Tick {
        /// Tick center.
        center: ScreenPoint,
        /// Half the tick width in pixels.
        half_width: f32,
        /// Styling for the tick.
        style: LineStyle,
    },
}

/// A recording surface that stores draw calls in emission order.
///
/// Useful for headless consumers and tests.
#[derive(Debug, Default, Clone)]
pub struct RenderList {
    commands: Vec<RenderCommand>,
}

impl RenderList {
    /// Create an empty render list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Access all recorded commands.
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Iterate over recorded segments only.
    pub fn segments(&self) -> impl Iterator<Item = (ScreenPoint, ScreenPoint)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            RenderCommand::Segment { start, end, .. } => Some((*start, *end)),
            RenderCommand::Tick { .. } => None,
        })
    }

    /// Clear all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Surface for RenderList {
    fn draw_segment(&mut self, start: ScreenPoint, end: ScreenPoint, style: &LineStyle) {
        self.commands.push(RenderCommand::Segment {
            start,
            end,
            style: *style,
        });
    }

    fn draw_tick(&mut self, center: ScreenPoint, half_width: f32, style: &LineStyle) {
        self.commands.push(RenderCommand::Tick {
            center,
            half_width,
            style: *style,
        });
    }
}

/// Helper for legend glue: draw one horizontal sample segment across a rect.
pub(crate) fn draw_legend_line(rect: ScreenRect, style: &LineStyle, surface: &mut dyn Surface) {
    let mid_y = (rect.min.y + rect.max.y) * 0.5;
    surface.draw_segment(
        ScreenPoint::new(rect.min.x, mid_y),
        ScreenPoint::new(rect.max.x, mid_y),
        style,
    );
}
