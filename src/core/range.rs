//! Scale variant over arbitrary real boundaries and point values.

use tracing::{debug, warn};

use crate::api::SliderConfig;
use crate::core::decimal;
use crate::core::point::{IntervalState, PointState, ScaleState};
use crate::core::scale::ScaleCore;
use crate::error::{SliderError, SliderResult};

/// Resolved construction parameters for a range scale.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ResolvedRangeConfig {
    pub min: f64,
    pub max: f64,
    pub values: Vec<f64>,
    pub step: f64,
}

impl Default for ResolvedRangeConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            values: vec![50.0],
            step: 1.0,
        }
    }
}

/// Scale processor whose min/max/points are arbitrary real numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeScale {
    core: ScaleCore,
}

impl RangeScale {
    /// Builds a range scale from a configuration object.
    ///
    /// Construction never fails: a rejected configuration is logged and
    /// replaced by the built-in default (`min=0, max=100, step=1, values=[50]`).
    #[must_use]
    pub fn from_config(config: &SliderConfig) -> Self {
        let resolved = resolve_range_config(config).unwrap_or_else(|err| {
            warn!(error = %err, "applying the default range configuration");
            ResolvedRangeConfig::default()
        });
        Self {
            core: ScaleCore::from_parts(
                resolved.min,
                resolved.max,
                &resolved.values,
                resolved.step,
            ),
        }
    }

    pub fn set_min_boundary(&mut self, min: f64) -> bool {
        min.is_finite() && self.core.set_min_boundary(min)
    }

    pub fn set_max_boundary(&mut self, max: f64) -> bool {
        max.is_finite() && self.core.set_max_boundary(max)
    }

    pub fn set_step(&mut self, step: f64) -> bool {
        step.is_finite() && self.core.set_step(step)
    }

    pub fn set_point(&mut self, value: f64, index: usize) -> bool {
        self.core.set_point(value, index)
    }

    /// All-or-nothing batch update: the whole candidate sequence
    /// `[min, values, max]` must be finite and non-decreasing before any
    /// point changes.
    pub fn set_points(&mut self, values: &[f64]) -> bool {
        let Some(candidate) = self.core.point_batch_candidate(values) else {
            return false;
        };
        if !is_finite_non_decreasing(&candidate) {
            return false;
        }
        if values.len() > self.core.number_of_points() {
            debug!(
                supplied = values.len(),
                committed = self.core.number_of_points(),
                "trimming trailing values in point batch"
            );
        }

        self.core.commit_points(&values[..self.core.number_of_points()]);
        true
    }

    pub fn move_point(&mut self, offset: f64, index: usize) -> bool {
        self.core.move_point(offset, index)
    }

    pub fn move_point_in_percent(&mut self, index: usize, percent_offset: f64) -> bool {
        self.core.move_point_in_percent(index, percent_offset)
    }

    pub fn add_point(&mut self, value: f64, insert_index: usize) -> bool {
        value.is_finite() && self.core.add_point(value, insert_index)
    }

    pub fn prepend_point(&mut self, value: f64) -> bool {
        self.add_point(value, 0)
    }

    pub fn append_point(&mut self, value: f64) -> bool {
        self.add_point(value, self.core.number_of_points())
    }

    pub fn remove_point(&mut self, index: usize) -> bool {
        self.core.remove_point(index)
    }

    #[must_use]
    pub fn view(&self, value: f64) -> String {
        format_value(value)
    }

    #[must_use]
    pub fn point_state(&self, index: usize) -> Option<PointState> {
        self.core.point_state_with(index, &format_value)
    }

    #[must_use]
    pub fn interval_state(&self, index: usize) -> Option<IntervalState> {
        self.core.interval_state(index)
    }

    #[must_use]
    pub fn min_boundary_state(&self) -> PointState {
        self.core.min_boundary_state_with(&format_value)
    }

    #[must_use]
    pub fn max_boundary_state(&self) -> PointState {
        self.core.max_boundary_state_with(&format_value)
    }

    #[must_use]
    pub fn scale_state(&self) -> ScaleState {
        self.core.scale_state_with(&format_value)
    }

    #[must_use]
    pub fn grid(&self, density: f64, from: Option<f64>, to: Option<f64>) -> Vec<PointState> {
        self.core.grid_with(density, from, to, &format_value)
    }

    #[must_use]
    pub(crate) fn core(&self) -> &ScaleCore {
        &self.core
    }
}

fn format_value(value: f64) -> String {
    value.to_string()
}

fn is_finite_non_decreasing(sequence: &[f64]) -> bool {
    sequence.iter().all(|value| value.is_finite())
        && sequence.windows(2).all(|pair| pair[0] <= pair[1])
}

pub(crate) fn resolve_range_config(config: &SliderConfig) -> SliderResult<ResolvedRangeConfig> {
    let values = config
        .values
        .clone()
        .ok_or_else(|| invalid("initial point values are required"))?;
    if values.is_empty() {
        return Err(invalid("at least one initial point is required"));
    }
    let step = config.step.ok_or_else(|| invalid("step is required"))?;

    // Both boundary forms are validated when both are present; `range` wins.
    let (min, max) = if let Some([min, max]) = config.range {
        if min > max {
            return Err(SliderError::InvalidBoundaries { min, max });
        }
        if let (Some(min), Some(max)) = (config.min, config.max) {
            validate_range_parts(min, max, &values, step)?;
        }
        (min, max)
    } else if let (Some(min), Some(max)) = (config.min, config.max) {
        (min, max)
    } else {
        return Err(invalid("either range or both min and max are required"));
    };

    validate_range_parts(min, max, &values, step)?;
    Ok(ResolvedRangeConfig {
        min,
        max,
        values,
        step,
    })
}

fn validate_range_parts(min: f64, max: f64, values: &[f64], step: f64) -> SliderResult<()> {
    let mut candidate = Vec::with_capacity(values.len() + 2);
    candidate.push(min);
    candidate.extend_from_slice(values);
    candidate.push(max);
    if !is_finite_non_decreasing(&candidate) {
        return Err(invalid(
            "boundaries and values must form a finite non-decreasing sequence",
        ));
    }

    if !step.is_finite() || step <= 0.0 || step > decimal::sub(max, min) {
        return Err(invalid("step must satisfy 0 < step <= max - min"));
    }

    Ok(())
}

fn invalid(message: &str) -> SliderError {
    SliderError::InvalidConfig(message.to_owned())
}
