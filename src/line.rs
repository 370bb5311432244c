//! Line-series rendering.
//!
//! The renderer walks the visible slice of a point sequence once, skipping
//! missing samples and merging points that land in the same horizontal pixel
//! column, so the number of emitted segments is bounded by surface width
//! rather than data size. A shadow pass is the same walk parameterized by
//! stroke and pixel offset.

use crate::axis::PhysicalAxis;
use crate::geom::{ScreenOffset, ScreenPoint, ScreenRect};
use crate::render::{Color, LineStyle, Surface, draw_legend_line};
use crate::sequence::{Sequence, lower_bound_by_x, upper_bound_by_x};
use crate::transform::Transform2D;
use crate::view::Range;

/// Minimum horizontal spacing, in pixels, between emitted segment endpoints.
const SPACING: f32 = 1.0;

/// Default continuity seed for the per-column running average.
///
/// Empirically tuned: resetting the averaging denominator to a value
/// slightly above one biases a fresh column toward the previous column's
/// endpoint, smoothing roll-overs between pixel boundaries.
pub const DEFAULT_COLUMN_SEED: f32 = 1.35;

/// Half-width of the tick drawn for a single-point sequence.
const SINGLE_POINT_HALF_WIDTH: f32 = 0.5;

/// Policy for missing (NaN) samples within a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GapPolicy {
    /// Join the valid neighbors of a gap directly, eliding the gap.
    #[default]
    ConnectThrough,
    /// Flush the pending column at a gap and restart at the next valid
    /// sample, leaving a visual break.
    BreakAtGaps,
}

/// Shadow styling for the offset secondary pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowStyle {
    /// Shadow stroke color.
    pub color: Color,
    /// Shadow displacement in physical pixels.
    pub offset: ScreenOffset,
}

impl Default for ShadowStyle {
    fn default() -> Self {
        Self {
            color: Color::SHADOW_GRAY,
            offset: ScreenOffset::new(1.0, 1.0),
        }
    }
}

/// Immutable configuration for one draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineOptions {
    /// Primary stroke.
    pub style: LineStyle,
    /// Optional shadow pass, drawn beneath the primary line.
    pub shadow: Option<ShadowStyle>,
    /// Missing-value policy.
    pub gap_policy: GapPolicy,
    /// Continuity seed for the column running average.
    pub column_seed: f32,
}

impl Default for LineOptions {
    fn default() -> Self {
        Self {
            style: LineStyle::default(),
            shadow: None,
            gap_policy: GapPolicy::default(),
            column_seed: DEFAULT_COLUMN_SEED,
        }
    }
}

impl LineOptions {
    /// Set the primary stroke.
    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }

    /// Enable a shadow pass.
    pub fn with_shadow(mut self, shadow: ShadowStyle) -> Self {
        self.shadow = Some(shadow);
        self
    }

    /// Set the missing-value policy.
    pub fn with_gap_policy(mut self, gap_policy: GapPolicy) -> Self {
        self.gap_policy = gap_policy;
        self
    }
}

/// Renders a point sequence as a line against two axis transforms.
///
/// The renderer owns only its configuration; sequence and transform are
/// borrowed for the duration of one draw call.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinePlot {
    options: LineOptions,
}

impl LinePlot {
    /// Create a renderer with the given configuration.
    pub fn new(options: LineOptions) -> Self {
        Self { options }
    }

    /// Access the draw configuration.
    pub fn options(&self) -> &LineOptions {
        &self.options
    }

    /// Draw the sequence onto the surface.
    ///
    /// When a shadow is configured, the shadow pass is issued first so the
    /// primary line paints over it.
    pub fn draw<S>(&self, data: &S, transform: &Transform2D, surface: &mut dyn Surface)
    where
        S: Sequence + ?Sized,
    {
        if data.is_empty() {
            return;
        }
        if let Some(shadow) = self.options.shadow {
            let style = self.options.style.with_color(shadow.color);
            self.draw_pass(data, transform, &style, shadow.offset, surface);
        }
        self.draw_pass(
            data,
            transform,
            &self.options.style,
            ScreenOffset::ZERO,
            surface,
        );
    }

    /// Draw a representation of this line into a legend rect.
    pub fn draw_legend_sample(&self, rect: ScreenRect, surface: &mut dyn Surface) {
        draw_legend_line(rect, &self.options.style, surface);
    }

    /// Suggest a world-space X range for this line's data.
    pub fn suggest_x_range<S>(&self, data: &S) -> Option<Range>
    where
        S: Sequence + ?Sized,
    {
        data.suggest_x_range()
    }

    /// Suggest a world-space Y range for this line's data.
    pub fn suggest_y_range<S>(&self, data: &S) -> Option<Range>
    where
        S: Sequence + ?Sized,
    {
        data.suggest_y_range()
    }

    /// One rendering pass: clip, walk, aggregate, emit.
    fn draw_pass<S>(
        &self,
        data: &S,
        transform: &Transform2D,
        style: &LineStyle,
        offset: ScreenOffset,
        surface: &mut dyn Surface,
    ) where
        S: Sequence + ?Sized,
    {
        // A single point cannot form a segment; draw a short tick instead.
        if data.len() == 1 {
            let screen = transform.transform(data.point(0));
            if screen.is_valid() {
                surface.draw_tick(screen.offset(offset), SINGLE_POINT_HALF_WIDTH, style);
            }
            return;
        }

        let (start, end) = visible_range(data, transform.x_axis(), offset);
        let seed = self.options.column_seed;
        let mut state: Option<ColumnState> = None;

        for index in start..=end {
            let screen = transform.transform(data.point(index));
            if !screen.is_valid() {
                if self.options.gap_policy == GapPolicy::BreakAtGaps
                    && let Some(pending) = state.as_mut()
                {
                    if let Some((a, b)) = pending.flush(seed) {
                        surface.draw_segment(a.offset(offset), b.offset(offset), style);
                    }
                    state = None;
                }
                continue;
            }
            match state.as_mut() {
                None => state = Some(ColumnState::seed(screen)),
                Some(pending) => {
                    if let Some((a, b)) = pending.accumulate(screen, seed) {
                        surface.draw_segment(a.offset(offset), b.offset(offset), style);
                    }
                }
            }
        }

        // Range end is inclusive; flush any partial trailing column.
        if let Some(pending) = state.as_mut()
            && let Some((a, b)) = pending.flush(seed)
        {
            surface.draw_segment(a.offset(offset), b.offset(offset), style);
        }
    }
}

/// Restrict the walk to the index range overlapping the visible window.
///
/// Returns an inclusive range with `start <= end`; degenerate windows and
/// non-monotonic sequences degrade to the full range.
fn visible_range<S>(data: &S, x_axis: &PhysicalAxis, offset: ScreenOffset) -> (usize, usize)
where
    S: Sequence + ?Sized,
{
    let last = data.len() - 1;
    if !data.is_monotonic() {
        return (0, last);
    }

    let mut left_cutoff = x_axis.physical_to_world(x_axis.physical_min(), false);
    let mut right_cutoff = x_axis.physical_to_world(x_axis.physical_max(), false);
    if left_cutoff > right_cutoff {
        std::mem::swap(&mut left_cutoff, &mut right_cutoff);
    }
    if !left_cutoff.is_finite() || !right_cutoff.is_finite() || left_cutoff == right_cutoff {
        return (0, last);
    }

    // A shadow pass draws at a pixel offset, so pre-correct the window by the
    // equivalent world-space delta.
    if offset.dx != 0.0 {
        let base = x_axis.physical_to_world(x_axis.physical_min(), false);
        let shifted = x_axis.physical_to_world(x_axis.physical_min() + offset.dx, false);
        let correction = shifted - base;
        if correction.is_finite() {
            left_cutoff -= correction;
            right_cutoff -= correction;
        }
    }

    let start = lower_bound_by_x(data, left_cutoff);
    let past_right = upper_bound_by_x(data, right_cutoff);
    let end = past_right.saturating_sub(1);
    // Extend one index past the window so the line continues off the right
    // edge instead of stopping at the boundary.
    let end = (end + 1).min(last);
    (start.min(end), end)
}

/// Walk state for one pixel column.
///
/// `p1` is the last emitted endpoint; `p2` carries an exponentially-weighted
/// running average of the column's y values, snapped to the column's
/// dominant extremum at close so spikes are not flattened to the mean.
#[derive(Debug, Clone, Copy)]
struct ColumnState {
    p1: ScreenPoint,
    p2: ScreenPoint,
    min: f32,
    max: f32,
    count: f32,
    pending: u32,
}

impl ColumnState {
    fn seed(point: ScreenPoint) -> Self {
        Self {
            p1: point,
            p2: point,
            min: point.y,
            max: point.y,
            count: 1.0,
            pending: 0,
        }
    }

    /// Fold one sample into the column; returns a segment when the column
    /// closes.
    fn accumulate(&mut self, point: ScreenPoint, seed: f32) -> Option<(ScreenPoint, ScreenPoint)> {
        self.p2 = ScreenPoint::new(
            point.x,
            self.p2.y - self.p2.y / self.count + point.y / self.count,
        );
        self.min = self.min.min(point.y);
        self.max = self.max.max(point.y);
        self.count += 1.0;
        self.pending += 1;
        // Wait until there is at least a pixel between the previous endpoint
        // and this sample before emitting.
        if point.x < self.p1.x + SPACING {
            return None;
        }
        Some(self.close(seed))
    }

    /// Emit a pending partial column, if any.
    fn flush(&mut self, seed: f32) -> Option<(ScreenPoint, ScreenPoint)> {
        if self.pending == 0 {
            return None;
        }
        Some(self.close(seed))
    }

    fn close(&mut self, seed: f32) -> (ScreenPoint, ScreenPoint) {
        // Snap to whichever extremum dominates the column visually.
        self.p2.y = if self.p2.y >= self.p1.y {
            self.max
        } else {
            self.min
        };
        let segment = (self.p1, self.p2);
        self.p1 = self.p2;
        self.min = self.p1.y;
        self.max = self.p1.y;
        self.count = seed;
        self.pending = 0;
        segment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Point;
    use crate::render::{RenderCommand, RenderList};
    use proptest::prelude::*;

    /// 100x100 pixel window over world [0, 100] on both axes, Y inverted as
    /// on a typical raster surface.
    fn unit_transform() -> Transform2D {
        let x_axis = PhysicalAxis::linear(Range::new(0.0, 100.0), 0.0, 100.0).unwrap();
        let y_axis = PhysicalAxis::linear(Range::new(0.0, 100.0), 100.0, 0.0).unwrap();
        Transform2D::new(x_axis, y_axis)
    }

    /// Identity-like transform: world equals pixels on both axes.
    fn identity_transform() -> Transform2D {
        let x_axis = PhysicalAxis::linear(Range::new(0.0, 100.0), 0.0, 100.0).unwrap();
        let y_axis = PhysicalAxis::linear(Range::new(0.0, 100.0), 0.0, 100.0).unwrap();
        Transform2D::new(x_axis, y_axis)
    }

    fn draw_to_list(plot: &LinePlot, points: &[Point], transform: &Transform2D) -> RenderList {
        let mut list = RenderList::new();
        plot.draw(points, transform, &mut list);
        list
    }

    #[test]
    fn empty_sequence_draws_nothing() {
        let plot = LinePlot::default();
        let list = draw_to_list(&plot, &[], &unit_transform());
        assert!(list.commands().is_empty());
    }

    #[test]
    fn single_point_emits_one_centered_tick() {
        let plot = LinePlot::default();
        let transform = identity_transform();
        let list = draw_to_list(&plot, &[Point::new(40.0, 70.0)], &transform);
        assert_eq!(list.commands().len(), 1);
        match &list.commands()[0] {
            RenderCommand::Tick { center, half_width, .. } => {
                assert_eq!(*center, ScreenPoint::new(40.0, 70.0));
                assert_eq!(*half_width, 0.5);
            }
            other => panic!("expected tick, got {other:?}"),
        }
    }

    #[test]
    fn all_missing_sequence_emits_nothing() {
        let plot = LinePlot::default();
        let points = vec![Point::new(f64::NAN, f64::NAN); 8];
        let list = draw_to_list(&plot, &points, &unit_transform());
        assert!(list.commands().is_empty());
    }

    #[test]
    fn segment_count_is_bounded_by_pixel_width() {
        let plot = LinePlot::default();
        let points: Vec<Point> = (0..50_000)
            .map(|i| {
                let x = i as f64 / 50_000.0 * 100.0;
                Point::new(x, (x * 13.7).sin() * 40.0 + 50.0)
            })
            .collect();
        let list = draw_to_list(&plot, &points, &unit_transform());
        // 100 pixel window, 1 px spacing, plus boundary and flush slack.
        assert!(list.commands().len() <= 102, "got {}", list.commands().len());
        assert!(list.commands().len() > 50);
    }

    #[test]
    fn column_endpoint_snaps_to_dominant_max() {
        let plot = LinePlot::default();
        let transform = identity_transform();
        let points = [
            Point::new(0.0, 0.0),
            Point::new(0.2, 5.0),
            Point::new(0.4, 10.0),
            Point::new(0.6, 3.0),
            Point::new(1.5, 4.0),
        ];
        let list = draw_to_list(&plot, &points, &transform);
        let (start, end) = list.segments().next().unwrap();
        assert_eq!(start, ScreenPoint::new(0.0, 0.0));
        // The running average moved upward, so the spike survives as max.
        assert_eq!(end.y, 10.0);
        assert_eq!(end.x, 1.5);
    }

    #[test]
    fn column_endpoint_snaps_to_dominant_min() {
        let plot = LinePlot::default();
        let transform = identity_transform();
        let points = [
            Point::new(0.0, 50.0),
            Point::new(0.2, 45.0),
            Point::new(0.4, 20.0),
            Point::new(0.6, 47.0),
            Point::new(1.5, 46.0),
        ];
        let list = draw_to_list(&plot, &points, &transform);
        let (_, end) = list.segments().next().unwrap();
        assert_eq!(end.y, 20.0);
    }

    #[test]
    fn low_density_round_trip_is_exact() {
        let plot = LinePlot::default();
        let transform = identity_transform();
        let points: Vec<Point> = (0..8)
            .map(|i| Point::new(i as f64 * 5.0, (i % 3) as f64 * 10.0))
            .collect();
        let list = draw_to_list(&plot, &points, &transform);
        let segments: Vec<_> = list.segments().collect();
        assert_eq!(segments.len(), points.len() - 1);
        for (i, (start, end)) in segments.iter().enumerate() {
            let expected_start = transform.transform(points[i]);
            let expected_end = transform.transform(points[i + 1]);
            assert!((start.x - expected_start.x).abs() < 1e-4);
            assert!((start.y - expected_start.y).abs() < 1e-4);
            assert!((end.x - expected_end.x).abs() < 1e-4);
            assert!((end.y - expected_end.y).abs() < 1e-4);
        }
    }

    #[test]
    fn clipper_walks_only_the_overlapping_index_range() {
        // 1000 points, world x = index; the physical window [0, 100] covers
        // world [400, 420] only.
        let points: Vec<Point> = (0..1000).map(|i| Point::new(i as f64, 50.0)).collect();
        let x_axis = PhysicalAxis::linear(Range::new(400.0, 420.0), 0.0, 100.0).unwrap();
        let y_axis = PhysicalAxis::linear(Range::new(0.0, 100.0), 100.0, 0.0).unwrap();

        let (start, end) = visible_range(points.as_slice(), &x_axis, ScreenOffset::ZERO);
        assert_eq!(start, 400);
        // End extends one index past the window edge.
        assert_eq!(end, 421);

        let plot = LinePlot::default();
        let transform = Transform2D::new(x_axis, y_axis);
        let list = draw_to_list(&plot, &points, &transform);
        assert_eq!(list.segments().count(), 21);
    }

    #[test]
    fn shadow_pass_precedes_primary_with_exact_offset() {
        let shadow = ShadowStyle {
            color: Color::SHADOW_GRAY,
            offset: ScreenOffset::new(1.0, 2.0),
        };
        let plot = LinePlot::new(LineOptions::default().with_shadow(shadow));
        let transform = identity_transform();
        let points: Vec<Point> = (0..5).map(|i| Point::new(10.0 + i as f64 * 5.0, 30.0)).collect();
        let list = draw_to_list(&plot, &points, &transform);

        let segments: Vec<_> = list.commands().to_vec();
        assert_eq!(segments.len(), 8);
        let (shadow_half, primary_half) = segments.split_at(4);
        for (s, p) in shadow_half.iter().zip(primary_half) {
            let (RenderCommand::Segment { start: ss, end: se, style: sstyle },
                 RenderCommand::Segment { start: ps, end: pe, style: pstyle }) = (s, p)
            else {
                panic!("expected segments");
            };
            assert_eq!(ss.x, ps.x + 1.0);
            assert_eq!(ss.y, ps.y + 2.0);
            assert_eq!(se.x, pe.x + 1.0);
            assert_eq!(se.y, pe.y + 2.0);
            assert_eq!(sstyle.color, Color::SHADOW_GRAY);
            assert_ne!(pstyle.color, Color::SHADOW_GRAY);
        }
    }

    #[test]
    fn connect_through_joins_across_gap() {
        let plot = LinePlot::default();
        let transform = identity_transform();
        let points = [
            Point::new(0.0, 0.0),
            Point::new(2.0, 2.0),
            Point::new(f64::NAN, f64::NAN),
            Point::new(6.0, 6.0),
        ];
        let list = draw_to_list(&plot, &points, &transform);
        let segments: Vec<_> = list.segments().collect();
        assert_eq!(segments.len(), 2);
        // The gap is elided; neighbors join directly.
        assert_eq!(segments[1].0, ScreenPoint::new(2.0, 2.0));
        assert_eq!(segments[1].1, ScreenPoint::new(6.0, 6.0));
    }

    #[test]
    fn gap_with_missing_x_keeps_later_points_visible() {
        let plot = LinePlot::default();
        let transform = identity_transform();
        // Every valid point sits inside the window; the gap is missing in x
        // as well as y, so the clipper has to probe past it.
        let points = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(f64::NAN, f64::NAN),
            Point::new(2.0, 2.0),
            Point::new(3.0, 3.0),
        ];
        let list = draw_to_list(&plot, &points, &transform);
        let segments: Vec<_> = list.segments().collect();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[1].0, ScreenPoint::new(1.0, 1.0));
        assert_eq!(segments[1].1, ScreenPoint::new(2.0, 2.0));
        assert_eq!(segments[2].1, ScreenPoint::new(3.0, 3.0));
    }

    #[test]
    fn break_at_gaps_splits_the_line() {
        let plot =
            LinePlot::new(LineOptions::default().with_gap_policy(GapPolicy::BreakAtGaps));
        let transform = identity_transform();
        let points = [
            Point::new(0.0, 0.0),
            Point::new(2.0, 2.0),
            Point::new(f64::NAN, f64::NAN),
            Point::new(6.0, 6.0),
            Point::new(8.0, 8.0),
        ];
        let list = draw_to_list(&plot, &points, &transform);
        let segments: Vec<_> = list.segments().collect();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].1, ScreenPoint::new(2.0, 2.0));
        // No segment crosses the gap.
        assert_eq!(segments[1].0, ScreenPoint::new(6.0, 6.0));
    }

    #[test]
    fn break_at_gaps_flushes_partial_column() {
        let plot =
            LinePlot::new(LineOptions::default().with_gap_policy(GapPolicy::BreakAtGaps));
        let transform = identity_transform();
        let points = [
            Point::new(0.0, 0.0),
            Point::new(0.3, 8.0),
            Point::new(f64::NAN, f64::NAN),
            Point::new(50.0, 1.0),
        ];
        let list = draw_to_list(&plot, &points, &transform);
        let segments: Vec<_> = list.segments().collect();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].0, ScreenPoint::new(0.0, 0.0));
        assert_eq!(segments[0].1, ScreenPoint::new(0.3, 8.0));
    }

    #[test]
    fn trailing_partial_column_is_flushed() {
        let plot = LinePlot::default();
        let transform = identity_transform();
        let points = [
            Point::new(0.0, 0.0),
            Point::new(5.0, 5.0),
            // Sub-pixel trailing points after the last emission.
            Point::new(5.2, 9.0),
            Point::new(5.4, 7.0),
        ];
        let list = draw_to_list(&plot, &points, &transform);
        let segments: Vec<_> = list.segments().collect();
        assert_eq!(segments.len(), 2);
        // The flush still snaps to the dominant extremum.
        assert_eq!(segments[1].1.y, 9.0);
    }

    #[test]
    fn zero_width_pixel_window_degrades_to_full_range() {
        let x_axis = PhysicalAxis::linear(Range::new(0.0, 100.0), 50.0, 50.0).unwrap();
        let y_axis = PhysicalAxis::linear(Range::new(0.0, 100.0), 100.0, 0.0).unwrap();
        let transform = Transform2D::new(x_axis, y_axis);
        let plot = LinePlot::default();
        let points: Vec<Point> = (0..10).map(|i| Point::new(i as f64, i as f64)).collect();
        // All points collapse onto one pixel column; the flush emits once.
        let list = draw_to_list(&plot, &points, &transform);
        assert_eq!(list.segments().count(), 1);
    }

    #[test]
    fn non_monotonic_sequence_falls_back_to_full_range() {
        let points = [
            Point::new(5.0, 1.0),
            Point::new(1.0, 2.0),
            Point::new(9.0, 3.0),
        ];
        let mut series = crate::sequence::PointSeries::new();
        series.extend_points(points);
        assert!(!series.is_monotonic());
        let x_axis = PhysicalAxis::linear(Range::new(4.0, 6.0), 0.0, 100.0).unwrap();
        let (start, end) = visible_range(&series, &x_axis, ScreenOffset::ZERO);
        assert_eq!((start, end), (0, 2));
    }

    #[test]
    fn inverted_x_axis_clips_the_same_window() {
        let points: Vec<Point> = (0..100).map(|i| Point::new(i as f64, 0.0)).collect();
        let x_axis = PhysicalAxis::linear(Range::new(40.0, 60.0), 100.0, 0.0).unwrap();
        let (start, end) = visible_range(points.as_slice(), &x_axis, ScreenOffset::ZERO);
        assert_eq!(start, 40);
        assert_eq!(end, 61);
    }

    #[test]
    fn suggestions_forward_to_the_sequence() {
        let plot = LinePlot::default();
        let points = [Point::new(1.0, 10.0), Point::new(4.0, -2.0)];
        assert_eq!(plot.suggest_x_range(points.as_slice()), Some(Range::new(1.0, 4.0)));
        assert_eq!(plot.suggest_y_range(points.as_slice()), Some(Range::new(-2.0, 10.0)));
    }

    #[test]
    fn legend_sample_uses_primary_style() {
        let style = LineStyle {
            color: Color::WHITE,
            ..LineStyle::default()
        };
        let plot = LinePlot::new(LineOptions::default().with_style(style));
        let rect = ScreenRect::new(ScreenPoint::new(0.0, 0.0), ScreenPoint::new(16.0, 8.0));
        let mut list = RenderList::new();
        plot.draw_legend_sample(rect, &mut list);
        match &list.commands()[0] {
            RenderCommand::Segment { start, end, style } => {
                assert_eq!(start.y, 4.0);
                assert_eq!(end.y, 4.0);
                assert_eq!(style.color, Color::WHITE);
            }
            other => panic!("expected segment, got {other:?}"),
        }
    }

    proptest! {
        #[test]
        fn segment_count_independent_of_input_size(
            ys in proptest::collection::vec(-1.0e3f64..1.0e3, 2..3000)
        ) {
            let count = ys.len();
            let points: Vec<Point> = ys
                .into_iter()
                .enumerate()
                .map(|(i, y)| Point::new(i as f64 / (count - 1) as f64 * 100.0, y))
                .collect();
            let x_axis = PhysicalAxis::linear(Range::new(0.0, 100.0), 0.0, 100.0).unwrap();
            let y_axis = PhysicalAxis::linear(Range::new(-1.0e3, 1.0e3), 100.0, 0.0).unwrap();
            let transform = Transform2D::new(x_axis, y_axis);
            let list = draw_to_list(&LinePlot::default(), &points, &transform);
            prop_assert!(list.segments().count() <= 102);
        }

        #[test]
        fn sparse_points_emit_one_segment_per_gap(count in 2usize..30) {
            // 3 px apart in pixel space: no aggregation may occur.
            let points: Vec<Point> = (0..count)
                .map(|i| Point::new(i as f64 * 3.0, (i as f64 * 0.7).sin() * 40.0 + 50.0))
                .collect();
            let transform = identity_transform();
            let list = draw_to_list(&LinePlot::default(), &points, &transform);
            prop_assert_eq!(list.segments().count(), count - 1);
        }

        #[test]
        fn missing_samples_never_panic_or_leak_nan(
            mask in proptest::collection::vec(proptest::bool::ANY, 2..200)
        ) {
            let points: Vec<Point> = mask
                .iter()
                .enumerate()
                .map(|(i, &missing)| {
                    if missing {
                        Point::new(i as f64, f64::NAN)
                    } else {
                        Point::new(i as f64, (i % 10) as f64)
                    }
                })
                .collect();
            let transform = identity_transform();
            let list = draw_to_list(&LinePlot::default(), &points, &transform);
            for (start, end) in list.segments() {
                prop_assert!(start.is_valid());
                prop_assert!(end.is_valid());
            }
        }
    }
}
