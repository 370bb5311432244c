//! Ordered point sequences and range queries.
//!
//! The renderer consumes any [`Sequence`]; [`PointSeries`] is the concrete
//! append-only store shipped with the crate.

use crate::geom::Point;
use crate::view::{Range, Viewport};

/// An ordered, indexable, finite collection of points.
///
/// The renderer assumes nothing about uniqueness or sortedness, but the
/// visible-range clipper's binary search relies on abscissa values being
/// monotonic non-decreasing in index. Report violations through
/// [`Sequence::is_monotonic`] so the clipper can fall back to the full range.
pub trait Sequence {
    /// Number of points in the sequence.
    fn len(&self) -> usize;

    /// Check if the sequence has no points.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Access the point at `index`.
    ///
    /// Panics on out-of-range indices; callers stay within `0..len()`.
    fn point(&self, index: usize) -> Point;

    /// Whether abscissa values are monotonic non-decreasing in index.
    ///
    /// Monotonicity is a documented precondition of fast clipping, not an
    /// enforced invariant.
    fn is_monotonic(&self) -> bool {
        true
    }

    /// Suggest a world-space X range covering the data.
    fn suggest_x_range(&self) -> Option<Range>;

    /// Suggest a world-space Y range covering the data.
    fn suggest_y_range(&self) -> Option<Range>;
}

impl Sequence for [Point] {
    fn len(&self) -> usize {
        <[Point]>::len(self)
    }

    fn point(&self, index: usize) -> Point {
        self[index]
    }

    fn suggest_x_range(&self) -> Option<Range> {
        scan_range(self.iter().map(|point| point.x))
    }

    fn suggest_y_range(&self) -> Option<Range> {
        scan_range(self.iter().map(|point| point.y))
    }
}

fn scan_range(values: impl Iterator<Item = f64>) -> Option<Range> {
    let mut range: Option<Range> = None;
    for value in values {
        if !value.is_finite() {
            continue;
        }
        range = Some(match range {
            None => Range::new(value, value),
            Some(mut existing) => {
                existing.expand_to_include(value);
                existing
            }
        });
    }
    range
}

/// Append-only point storage with incremental bounds tracking.
///
/// Bounds ignore missing (NaN) coordinates, so range suggestions stay finite
/// for gappy data.
#[derive(Debug, Clone)]
pub struct PointSeries {
    points: Vec<Point>,
    monotonic: bool,
    last_x: Option<f64>,
    x_bounds: Option<Range>,
    y_bounds: Option<Range>,
}

impl Default for PointSeries {
    fn default() -> Self {
        Self::new()
    }
}

impl PointSeries {
    /// Create an empty series.
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            monotonic: true,
            last_x: None,
            x_bounds: None,
            y_bounds: None,
        }
    }

    /// Build a series from an iterator of points.
    pub fn from_iter_points<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        let mut series = Self::new();
        series.extend_points(iter);
        series
    }

    /// Build a series by sampling a callback function.
    pub fn from_callback(function: impl Fn(f64) -> f64, x_range: Range, points: usize) -> Self {
        let mut series = Self::new();
        if points == 0 {
            return series;
        }
        let step = if points > 1 {
            x_range.span() / (points - 1) as f64
        } else {
            0.0
        };
        for i in 0..points {
            let x = x_range.min + step * i as f64;
            series.push(Point::new(x, function(x)));
        }
        series
    }

    /// Append a point, returning its index.
    pub fn push(&mut self, point: Point) -> usize {
        let index = self.points.len();
        if !point.x.is_nan() {
            if let Some(last_x) = self.last_x
                && point.x < last_x
            {
                self.monotonic = false;
            }
            self.last_x = Some(point.x);
        }
        self.update_bounds(point);
        self.points.push(point);
        index
    }

    /// Append multiple points.
    pub fn extend_points<I>(&mut self, points: I)
    where
        I: IntoIterator<Item = Point>,
    {
        let points = points.into_iter();
        let (reserve, _) = points.size_hint();
        self.points.reserve(reserve);
        for point in points {
            self.push(point);
        }
    }

    /// Access all points as a slice.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Get the NaN-aware bounds across all points.
    ///
    /// `None` until at least one finite value has been seen on both axes.
    pub fn bounds(&self) -> Option<Viewport> {
        Some(Viewport::new(self.x_bounds?, self.y_bounds?))
    }

    // The axes are tracked independently so a half-missing point still
    // contributes its finite coordinate.
    fn update_bounds(&mut self, point: Point) {
        expand_bound(&mut self.x_bounds, point.x);
        expand_bound(&mut self.y_bounds, point.y);
    }
}

fn expand_bound(bound: &mut Option<Range>, value: f64) {
    if !value.is_finite() {
        return;
    }
    match bound.as_mut() {
        None => *bound = Some(Range::new(value, value)),
        Some(range) => range.expand_to_include(value),
    }
}

impl Sequence for PointSeries {
    fn len(&self) -> usize {
        self.points.len()
    }

    fn point(&self, index: usize) -> Point {
        self.points[index]
    }

    fn is_monotonic(&self) -> bool {
        self.monotonic
    }

    fn suggest_x_range(&self) -> Option<Range> {
        self.x_bounds
    }

    fn suggest_y_range(&self) -> Option<Range> {
        self.y_bounds
    }
}

/// First index whose abscissa is not below `target`.
///
/// Assumes the valid (non-NaN) abscissa values are monotonic; missing
/// samples carry no ordering information and are probed past. A returned
/// bound may land on a missing sample, which the walk skips anyway.
pub(crate) fn lower_bound_by_x<S: Sequence + ?Sized>(data: &S, target: f64) -> usize {
    let mut left = 0;
    let mut right = data.len();
    while left < right {
        let mid = (left + right) / 2;
        let Some((probe, x)) = first_valid_x(data, mid, right) else {
            // Everything from mid on is missing.
            right = mid;
            continue;
        };
        if x < target {
            left = probe + 1;
        } else {
            right = mid;
        }
    }
    left
}

/// First index whose abscissa is above `target`.
///
/// Same missing-sample tolerance as [`lower_bound_by_x`].
pub(crate) fn upper_bound_by_x<S: Sequence + ?Sized>(data: &S, target: f64) -> usize {
    let mut left = 0;
    let mut right = data.len();
    while left < right {
        let mid = (left + right) / 2;
        let Some((probe, x)) = first_valid_x(data, mid, right) else {
            right = mid;
            continue;
        };
        if x <= target {
            left = probe + 1;
        } else {
            right = mid;
        }
    }
    left
}

/// Nearest index in `from..to` with a non-NaN abscissa, with its value.
fn first_valid_x<S: Sequence + ?Sized>(data: &S, from: usize, to: usize) -> Option<(usize, f64)> {
    (from..to).find_map(|index| {
        let x = data.point(index).x;
        (!x.is_nan()).then_some((index, x))
    })
}
