//! Point and interval primitives plus the public state snapshots consumed by
//! View/Presenter layers.

use serde::{Deserialize, Serialize};

/// A mutable position on the scale: a domain value plus its derived percent
/// position relative to the current boundaries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalePoint {
    pub value: f64,
    pub percent: f64,
}

impl ScalePoint {
    #[must_use]
    pub fn new(value: f64, percent: f64) -> Self {
        Self { value, percent }
    }
}

/// The gap between two adjacent points (or a boundary and its neighboring
/// point): absolute length plus that length as percent of the scale span.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScaleInterval {
    pub value: f64,
    pub percent: f64,
}

/// Read-only point snapshot with its display rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointState {
    pub value: f64,
    pub percent: f64,
    pub view: String,
}

/// Read-only interval snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntervalState {
    pub value: f64,
    pub percent: f64,
}

/// Full scale snapshot: boundaries, interior points, the interval sequence
/// threaded between them (`intervals.len() == points.len() + 1`), and the
/// active step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleState {
    pub points: Vec<PointState>,
    pub intervals: Vec<IntervalState>,
    pub step: f64,
    pub min: PointState,
    pub max: PointState,
}
