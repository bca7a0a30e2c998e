//! Shared scale machinery: the ordered point sequence, its interval chain,
//! and the step-quantized mutation operations.
//!
//! `ScaleCore` owns the numeric state machine both concrete variants are built
//! on. Every mutator validates its whole candidate first and only then
//! commits, so the point sequence is never observably non-monotonic or out of
//! bounds, even transiently. Variant-specific guards (finiteness for ranges,
//! integrality for sets) live in [`crate::core::range`] and
//! [`crate::core::set`].

use crate::core::decimal;
use crate::core::percent::PercentScale;
use crate::core::point::{IntervalState, PointState, ScaleInterval, ScalePoint, ScaleState};

/// Side of a point toward which a movement or lookup is directed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    #[must_use]
    pub fn signum(self) -> f64 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// Decomposes an offset into its direction and magnitude.
///
/// A non-positive offset (including zero) maps to [`Direction::Left`]; a zero
/// magnitude is rejected later by the step rounding in `move_point`.
#[must_use]
pub fn decompose_offset(offset: f64) -> (Direction, f64) {
    let direction = if offset > 0.0 {
        Direction::Right
    } else {
        Direction::Left
    };
    (direction, offset.abs())
}

/// Ordered point sequence bracketed by two boundary points, with the interval
/// chain threaded between them and a positive step quantizing movement.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleCore {
    percent: PercentScale,
    min_boundary: ScalePoint,
    max_boundary: ScalePoint,
    points: Vec<ScalePoint>,
    intervals: Vec<ScaleInterval>,
    step: f64,
}

impl ScaleCore {
    /// Builds a core from already-validated parts.
    ///
    /// Callers (the variant constructors) guarantee `min < max`, a non-empty
    /// non-decreasing `values` sequence inside `[min, max]`, and
    /// `0 < step <= max - min`.
    pub(crate) fn from_parts(min: f64, max: f64, values: &[f64], step: f64) -> Self {
        let percent = PercentScale::new(min, max);
        let points = values
            .iter()
            .map(|&value| ScalePoint::new(value, percent.reflect_on_scale(value)))
            .collect();
        let mut core = Self {
            percent,
            min_boundary: ScalePoint::new(min, 0.0),
            max_boundary: ScalePoint::new(max, 100.0),
            points,
            intervals: Vec::new(),
            step,
        };
        core.rebuild_intervals();
        core
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.min_boundary.value
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.max_boundary.value
    }

    /// Absolute length of the scale span.
    #[must_use]
    pub fn length(&self) -> f64 {
        decimal::sub(self.max(), self.min())
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn number_of_points(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn last_point_index(&self) -> usize {
        self.points.len() - 1
    }

    #[must_use]
    pub fn point_value(&self, index: usize) -> Option<f64> {
        self.points.get(index).map(|point| point.value)
    }

    #[must_use]
    pub fn point_percent(&self, index: usize) -> Option<f64> {
        self.points.get(index).map(|point| point.percent)
    }

    #[must_use]
    pub fn point_values(&self) -> Vec<f64> {
        self.points.iter().map(|point| point.value).collect()
    }

    #[must_use]
    pub fn point_percents(&self) -> Vec<f64> {
        self.points.iter().map(|point| point.percent).collect()
    }

    /// Absolute lengths of every interval, boundary gaps included.
    #[must_use]
    pub fn distances(&self) -> Vec<f64> {
        self.intervals.iter().map(|interval| interval.value).collect()
    }

    /// Distances from a point to its effective left and right boundaries
    /// (neighboring point or scale boundary).
    #[must_use]
    pub fn distance_to_borders(&self, index: usize) -> Option<[f64; 2]> {
        if index >= self.points.len() {
            return None;
        }
        Some([
            self.distance_to_boundary(index, Direction::Left),
            self.distance_to_boundary(index, Direction::Right),
        ])
    }

    /// Moves the min boundary, keeping the step inside the new span and the
    /// first point to the right of the new boundary.
    pub fn set_min_boundary(&mut self, min: f64) -> bool {
        let widest_step = decimal::sub(self.max(), min);
        let first_point = self.points[0].value;
        let fits_first_point = decimal::sub(first_point, min) >= 0.0;
        if min < self.max() && self.step <= widest_step && fits_first_point {
            self.min_boundary.value = min;
            self.percent.set_boundaries(min, self.max());
            self.refresh_scale();
            return true;
        }

        false
    }

    /// Moves the max boundary, keeping the step inside the new span and the
    /// last point to the left of the new boundary.
    pub fn set_max_boundary(&mut self, max: f64) -> bool {
        let widest_step = decimal::sub(max, self.min());
        let last_point = self.points[self.last_point_index()].value;
        let fits_last_point = decimal::sub(max, last_point) >= 0.0;
        if self.min() < max && self.step <= widest_step && fits_last_point {
            self.max_boundary.value = max;
            self.percent.set_boundaries(self.min(), max);
            self.refresh_scale();
            return true;
        }

        false
    }

    pub fn set_step(&mut self, step: f64) -> bool {
        let widest_step = decimal::sub(self.max(), self.min());
        if 0.0 < step && step <= widest_step {
            self.step = step;
            return true;
        }

        false
    }

    /// Sets a single point, bounded inclusively by its neighbors (or the
    /// scale boundaries at the ends).
    pub fn set_point(&mut self, value: f64, index: usize) -> bool {
        if index >= self.points.len() {
            return false;
        }
        if !self.fits_boundary(value, index, Direction::Left)
            || !self.fits_boundary(value, index, Direction::Right)
        {
            return false;
        }

        self.write_point(value, index);
        true
    }

    /// Returns the full candidate sequence `[min, values[..n], max]` for a
    /// batch update, or `None` when fewer values than points were supplied.
    ///
    /// Trailing values beyond the point count are trimmed.
    pub(crate) fn point_batch_candidate(&self, values: &[f64]) -> Option<Vec<f64>> {
        if values.len() < self.points.len() {
            return None;
        }

        let mut candidate = Vec::with_capacity(self.points.len() + 2);
        candidate.push(self.min());
        candidate.extend_from_slice(&values[..self.points.len()]);
        candidate.push(self.max());
        Some(candidate)
    }

    /// Writes a pre-validated batch of point values, one per point.
    pub(crate) fn commit_points(&mut self, values: &[f64]) {
        for (index, &value) in values.iter().enumerate() {
            self.write_point(value, index);
        }
    }

    /// Moves a point by a step-quantized offset.
    ///
    /// The offset magnitude is rounded to a whole number of steps; rounding to
    /// zero steps fails (the offset is insignificant). A target that would
    /// cross the effective boundary on the movement side is clamped to the
    /// furthest whole-step position before it.
    pub fn move_point(&mut self, offset: f64, index: usize) -> bool {
        if index >= self.points.len() || !offset.is_finite() {
            return false;
        }

        let (direction, magnitude) = decompose_offset(offset);
        let steps = decimal::div(magnitude, self.step).round();
        if steps == 0.0 {
            return false;
        }

        let target = self.target_value(steps, direction, index);
        self.write_point(target, index);
        true
    }

    /// Converts a percent offset into a domain offset and delegates to
    /// [`Self::move_point`].
    pub fn move_point_in_percent(&mut self, index: usize, percent_offset: f64) -> bool {
        let offset = self.percent.convert_to_value(percent_offset);
        self.move_point(offset, index)
    }

    /// Splices a new point into the interval at `insert_index`.
    ///
    /// `insert_index` ranges over `0..=number_of_points` (append supported);
    /// the value must sit inside the interval currently occupying that slot.
    pub fn add_point(&mut self, value: f64, insert_index: usize) -> bool {
        if insert_index > self.points.len() {
            return false;
        }
        let (from, to) = self.interval_endpoints(insert_index);
        if !(from <= value && value <= to) {
            return false;
        }

        let point = ScalePoint::new(value, self.percent.reflect_on_scale(value));
        self.points.insert(insert_index, point);
        self.intervals.insert(insert_index + 1, ScaleInterval::default());
        self.refresh_interval(insert_index);
        self.refresh_interval(insert_index + 1);
        true
    }

    pub fn prepend_point(&mut self, value: f64) -> bool {
        self.add_point(value, 0)
    }

    pub fn append_point(&mut self, value: f64) -> bool {
        self.add_point(value, self.points.len())
    }

    /// Removes a point and joins its two intervals. The last remaining point
    /// cannot be removed.
    pub fn remove_point(&mut self, index: usize) -> bool {
        if self.points.len() == 1 || index >= self.points.len() {
            return false;
        }

        self.points.remove(index);
        self.intervals.remove(index + 1);
        self.refresh_interval(index);
        true
    }

    #[must_use]
    pub fn interval_state(&self, index: usize) -> Option<IntervalState> {
        self.intervals.get(index).map(|interval| IntervalState {
            value: interval.value,
            percent: interval.percent,
        })
    }

    pub(crate) fn point_state_with(
        &self,
        index: usize,
        view: &dyn Fn(f64) -> String,
    ) -> Option<PointState> {
        self.points.get(index).map(|point| PointState {
            value: point.value,
            percent: point.percent,
            view: view(point.value),
        })
    }

    pub(crate) fn min_boundary_state_with(&self, view: &dyn Fn(f64) -> String) -> PointState {
        PointState {
            value: self.min_boundary.value,
            percent: self.min_boundary.percent,
            view: view(self.min_boundary.value),
        }
    }

    pub(crate) fn max_boundary_state_with(&self, view: &dyn Fn(f64) -> String) -> PointState {
        PointState {
            value: self.max_boundary.value,
            percent: self.max_boundary.percent,
            view: view(self.max_boundary.value),
        }
    }

    pub(crate) fn scale_state_with(&self, view: &dyn Fn(f64) -> String) -> ScaleState {
        let points = self
            .points
            .iter()
            .map(|point| PointState {
                value: point.value,
                percent: point.percent,
                view: view(point.value),
            })
            .collect();
        let intervals = self
            .intervals
            .iter()
            .map(|interval| IntervalState {
                value: interval.value,
                percent: interval.percent,
            })
            .collect();
        ScaleState {
            points,
            intervals,
            step: self.step,
            min: self.min_boundary_state_with(view),
            max: self.max_boundary_state_with(view),
        }
    }

    /// Generates grid points at `density` spacing from `from` to `to`, both
    /// ends inclusive (the final point is always exactly `to`, which may make
    /// the last gap irregular). Returns an empty grid on invalid input.
    pub(crate) fn grid_with(
        &self,
        density: f64,
        from: Option<f64>,
        to: Option<f64>,
        view: &dyn Fn(f64) -> String,
    ) -> Vec<PointState> {
        let from = from.unwrap_or_else(|| self.min());
        let to = to.unwrap_or_else(|| self.max());
        // Positive-form guard so NaN density is rejected too.
        if !self.is_valid_grid_window(from, to) || !(density > 0.0) {
            return Vec::new();
        }

        let mut grid = Vec::new();
        let mut value = from;
        while value < to {
            grid.push(self.grid_point(value, view));
            value = decimal::add(value, density);
        }
        grid.push(self.grid_point(to, view));
        grid
    }

    fn is_valid_grid_window(&self, from: f64, to: f64) -> bool {
        self.min() <= from && from < to && to <= self.max()
    }

    fn grid_point(&self, value: f64, view: &dyn Fn(f64) -> String) -> PointState {
        PointState {
            value,
            percent: self.percent.reflect_on_scale(value),
            view: view(value),
        }
    }

    /// Final target for a step-quantized move, clamped to the furthest
    /// whole-step position when the raw target crosses the boundary.
    fn target_value(&self, steps: f64, direction: Direction, index: usize) -> f64 {
        let current = self.points[index].value;
        let target = self.shift_in_steps(current, steps, direction);
        if self.fits_boundary(target, index, direction) {
            return target;
        }

        let distance = self.distance_to_boundary(index, direction);
        let reachable_steps = decimal::div(distance, self.step).floor();
        self.shift_in_steps(current, reachable_steps, direction)
    }

    fn shift_in_steps(&self, value: f64, steps: f64, direction: Direction) -> f64 {
        let offset = decimal::mul(steps, self.step);
        decimal::add(value, direction.signum() * offset)
    }

    /// Whether `value` stays on the inner side of the effective boundary
    /// (neighboring point or scale boundary) in `direction`.
    fn fits_boundary(&self, value: f64, index: usize, direction: Direction) -> bool {
        let boundary = self.boundary_value(index, direction);
        direction.signum() * decimal::sub(value, boundary) <= 0.0
    }

    fn distance_to_boundary(&self, index: usize, direction: Direction) -> f64 {
        let boundary = self.boundary_value(index, direction);
        decimal::sub(boundary, self.points[index].value).abs()
    }

    /// Effective boundary for a point in a direction: the neighboring point,
    /// or the scale boundary at the ends of the sequence.
    fn boundary_value(&self, index: usize, direction: Direction) -> f64 {
        match direction {
            Direction::Left if index == 0 => self.min(),
            Direction::Left => self.points[index - 1].value,
            Direction::Right if index == self.last_point_index() => self.max(),
            Direction::Right => self.points[index + 1].value,
        }
    }

    /// Endpoints of the interval at `index` within the boundary-to-boundary
    /// chain.
    fn interval_endpoints(&self, index: usize) -> (f64, f64) {
        let from = if index == 0 {
            self.min()
        } else {
            self.points[index - 1].value
        };
        let to = if index == self.points.len() {
            self.max()
        } else {
            self.points[index].value
        };
        (from, to)
    }

    fn write_point(&mut self, value: f64, index: usize) {
        self.points[index] = ScalePoint::new(value, self.percent.reflect_on_scale(value));
        self.refresh_interval(index);
        self.refresh_interval(index + 1);
    }

    fn refresh_interval(&mut self, index: usize) {
        let (from, to) = self.interval_endpoints(index);
        let value = decimal::sub(to, from).abs();
        self.intervals[index] = ScaleInterval {
            value,
            percent: self.percent.convert_to_percent(value),
        };
    }

    fn rebuild_intervals(&mut self) {
        self.intervals = vec![ScaleInterval::default(); self.points.len() + 1];
        for index in 0..self.intervals.len() {
            self.refresh_interval(index);
        }
    }

    /// Recomputes every derived percent after a boundary shift.
    fn refresh_scale(&mut self) {
        for point in &mut self.points {
            point.percent = self.percent.reflect_on_scale(point.value);
        }
        self.rebuild_intervals();
    }
}
