//! lineplot renders 2-D line series onto an abstract drawing surface with
//! cost bounded by surface width rather than data size.
//!
//! The core walk clips to the visible window, skips missing (NaN) samples,
//! and aggregates points sharing a horizontal pixel column while preserving
//! each column's min/max excursion. An optional shadow pass reuses the same
//! walk with an offset stroke.

#![forbid(unsafe_code)]

pub mod axis;
pub mod geom;
pub mod line;
pub mod render;
pub mod sequence;
pub mod transform;
pub mod view;

pub use axis::{AxisError, AxisScale, PhysicalAxis};
pub use geom::{Point, ScreenOffset, ScreenPoint, ScreenRect};
pub use line::{DEFAULT_COLUMN_SEED, GapPolicy, LineOptions, LinePlot, ShadowStyle};
pub use render::{Color, LinePattern, LineStyle, RenderCommand, RenderList, Surface};
pub use sequence::{PointSeries, Sequence};
pub use transform::Transform2D;
pub use view::{Range, Viewport};
