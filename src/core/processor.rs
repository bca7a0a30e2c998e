//! Variant selection and exhaustive dispatch over the two scale processors.

use crate::api::{ScaleKind, SliderConfig};
use crate::core::point::{IntervalState, PointState, ScaleState};
use crate::core::range::RangeScale;
use crate::core::set::SetScale;

/// A concrete scale processor, tagged by the configuration's `type`
/// discriminant.
///
/// Dispatch is an exhaustive match rather than trait objects, so adding a
/// third variant forces every operation to account for it.
#[derive(Debug, Clone, PartialEq)]
pub enum ScaleProcessor {
    Range(RangeScale),
    Set(SetScale),
}

impl ScaleProcessor {
    /// Factory keyed on the configuration discriminant. Never fails; each
    /// variant falls back to its default configuration on invalid input.
    #[must_use]
    pub fn from_config(config: &SliderConfig) -> Self {
        match config.kind {
            ScaleKind::Range => Self::Range(RangeScale::from_config(config)),
            ScaleKind::Set => Self::Set(SetScale::from_config(config)),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ScaleKind {
        match self {
            Self::Range(_) => ScaleKind::Range,
            Self::Set(_) => ScaleKind::Set,
        }
    }

    pub fn set_point(&mut self, value: f64, index: usize) -> bool {
        match self {
            Self::Range(scale) => scale.set_point(value, index),
            Self::Set(scale) => scale.set_point(value, index),
        }
    }

    pub fn set_points(&mut self, values: &[f64]) -> bool {
        match self {
            Self::Range(scale) => scale.set_points(values),
            Self::Set(scale) => scale.set_points(values),
        }
    }

    pub fn move_point(&mut self, offset: f64, index: usize) -> bool {
        match self {
            Self::Range(scale) => scale.move_point(offset, index),
            Self::Set(scale) => scale.move_point(offset, index),
        }
    }

    pub fn move_point_in_percent(&mut self, index: usize, percent_offset: f64) -> bool {
        match self {
            Self::Range(scale) => scale.move_point_in_percent(index, percent_offset),
            Self::Set(scale) => scale.move_point_in_percent(index, percent_offset),
        }
    }

    pub fn add_point(&mut self, value: f64, insert_index: usize) -> bool {
        match self {
            Self::Range(scale) => scale.add_point(value, insert_index),
            Self::Set(scale) => scale.add_point(value, insert_index),
        }
    }

    pub fn prepend_point(&mut self, value: f64) -> bool {
        match self {
            Self::Range(scale) => scale.prepend_point(value),
            Self::Set(scale) => scale.prepend_point(value),
        }
    }

    pub fn append_point(&mut self, value: f64) -> bool {
        match self {
            Self::Range(scale) => scale.append_point(value),
            Self::Set(scale) => scale.append_point(value),
        }
    }

    pub fn remove_point(&mut self, index: usize) -> bool {
        match self {
            Self::Range(scale) => scale.remove_point(index),
            Self::Set(scale) => scale.remove_point(index),
        }
    }

    pub fn set_min_boundary(&mut self, min: f64) -> bool {
        match self {
            Self::Range(scale) => scale.set_min_boundary(min),
            Self::Set(scale) => scale.set_min_boundary(min),
        }
    }

    pub fn set_max_boundary(&mut self, max: f64) -> bool {
        match self {
            Self::Range(scale) => scale.set_max_boundary(max),
            Self::Set(scale) => scale.set_max_boundary(max),
        }
    }

    pub fn set_step(&mut self, step: f64) -> bool {
        match self {
            Self::Range(scale) => scale.set_step(step),
            Self::Set(scale) => scale.set_step(step),
        }
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.core().min()
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.core().max()
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.core().length()
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.core().step()
    }

    #[must_use]
    pub fn number_of_points(&self) -> usize {
        self.core().number_of_points()
    }

    #[must_use]
    pub fn point_value(&self, index: usize) -> Option<f64> {
        self.core().point_value(index)
    }

    #[must_use]
    pub fn point_percent(&self, index: usize) -> Option<f64> {
        self.core().point_percent(index)
    }

    #[must_use]
    pub fn point_values(&self) -> Vec<f64> {
        self.core().point_values()
    }

    #[must_use]
    pub fn point_percents(&self) -> Vec<f64> {
        self.core().point_percents()
    }

    #[must_use]
    pub fn distances(&self) -> Vec<f64> {
        self.core().distances()
    }

    #[must_use]
    pub fn distance_to_borders(&self, index: usize) -> Option<[f64; 2]> {
        self.core().distance_to_borders(index)
    }

    #[must_use]
    pub fn view(&self, value: f64) -> String {
        match self {
            Self::Range(scale) => scale.view(value),
            Self::Set(scale) => scale.view(value),
        }
    }

    #[must_use]
    pub fn point_state(&self, index: usize) -> Option<PointState> {
        match self {
            Self::Range(scale) => scale.point_state(index),
            Self::Set(scale) => scale.point_state(index),
        }
    }

    #[must_use]
    pub fn interval_state(&self, index: usize) -> Option<IntervalState> {
        match self {
            Self::Range(scale) => scale.interval_state(index),
            Self::Set(scale) => scale.interval_state(index),
        }
    }

    #[must_use]
    pub fn min_boundary_state(&self) -> PointState {
        match self {
            Self::Range(scale) => scale.min_boundary_state(),
            Self::Set(scale) => scale.min_boundary_state(),
        }
    }

    #[must_use]
    pub fn max_boundary_state(&self) -> PointState {
        match self {
            Self::Range(scale) => scale.max_boundary_state(),
            Self::Set(scale) => scale.max_boundary_state(),
        }
    }

    #[must_use]
    pub fn scale_state(&self) -> ScaleState {
        match self {
            Self::Range(scale) => scale.scale_state(),
            Self::Set(scale) => scale.scale_state(),
        }
    }

    #[must_use]
    pub fn grid(&self, density: f64, from: Option<f64>, to: Option<f64>) -> Vec<PointState> {
        match self {
            Self::Range(scale) => scale.grid(density, from, to),
            Self::Set(scale) => scale.grid(density, from, to),
        }
    }

    fn core(&self) -> &crate::core::scale::ScaleCore {
        match self {
            Self::Range(scale) => scale.core(),
            Self::Set(scale) => scale.core(),
        }
    }
}
