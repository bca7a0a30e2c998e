//! Scale variant over integer indices into a fixed ordered item list.

use serde_json::Value;
use tracing::{debug, warn};

use crate::api::SliderConfig;
use crate::core::point::{IntervalState, PointState, ScaleState};
use crate::core::scale::ScaleCore;
use crate::error::{SliderError, SliderResult};

/// Resolved construction parameters for a set scale.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ResolvedSetConfig {
    pub items: Vec<Value>,
    pub min: f64,
    pub max: f64,
    pub values: Vec<f64>,
    pub step: f64,
}

impl Default for ResolvedSetConfig {
    fn default() -> Self {
        let items = ('a'..='z')
            .map(|letter| Value::String(letter.to_string()))
            .collect::<Vec<_>>();
        let max = (items.len() - 1) as f64;
        Self {
            items,
            min: 0.0,
            max,
            values: vec![0.0],
            step: 1.0,
        }
    }
}

/// Scale processor whose point values are indices into an ordered item list.
#[derive(Debug, Clone, PartialEq)]
pub struct SetScale {
    core: ScaleCore,
    items: Vec<Value>,
}

impl SetScale {
    /// Builds a set scale from a configuration object.
    ///
    /// Construction never fails: a rejected configuration is logged and
    /// replaced by the built-in default (the lowercase ASCII alphabet with
    /// one point at index 0 and unit step).
    #[must_use]
    pub fn from_config(config: &SliderConfig) -> Self {
        let resolved = resolve_set_config(config).unwrap_or_else(|err| {
            warn!(error = %err, "applying the default set configuration");
            ResolvedSetConfig::default()
        });
        Self {
            core: ScaleCore::from_parts(
                resolved.min,
                resolved.max,
                &resolved.values,
                resolved.step,
            ),
            items: resolved.items,
        }
    }

    /// Index of the last item in the backing set.
    #[must_use]
    pub fn last_index_of_set(&self) -> usize {
        self.items.len() - 1
    }

    pub fn set_min_boundary(&mut self, min: f64) -> bool {
        is_index(min) && self.core.set_min_boundary(min)
    }

    pub fn set_max_boundary(&mut self, max: f64) -> bool {
        is_index(max) && max <= self.last_index_of_set() as f64 && self.core.set_max_boundary(max)
    }

    pub fn set_step(&mut self, step: f64) -> bool {
        is_integral(step) && self.core.set_step(step)
    }

    pub fn set_point(&mut self, value: f64, index: usize) -> bool {
        is_integral(value) && self.core.set_point(value, index)
    }

    /// All-or-nothing batch update: the whole candidate sequence
    /// `[min, values, max]` must be integral, non-negative, and
    /// non-decreasing before any point changes.
    pub fn set_points(&mut self, values: &[f64]) -> bool {
        let Some(candidate) = self.core.point_batch_candidate(values) else {
            return false;
        };
        if !is_index_sequence(&candidate) {
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
        is_index(value) && self.core.add_point(value, insert_index)
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

    /// Display rendering for a set index: string items pass through bare,
    /// anything else is stringified.
    #[must_use]
    pub fn view(&self, value: f64) -> String {
        set_view(&self.items, value)
    }

    #[must_use]
    pub fn point_state(&self, index: usize) -> Option<PointState> {
        let items = &self.items;
        self.core
            .point_state_with(index, &|value| set_view(items, value))
    }

    #[must_use]
    pub fn interval_state(&self, index: usize) -> Option<IntervalState> {
        self.core.interval_state(index)
    }

    #[must_use]
    pub fn min_boundary_state(&self) -> PointState {
        let items = &self.items;
        self.core
            .min_boundary_state_with(&|value| set_view(items, value))
    }

    #[must_use]
    pub fn max_boundary_state(&self) -> PointState {
        let items = &self.items;
        self.core
            .max_boundary_state_with(&|value| set_view(items, value))
    }

    #[must_use]
    pub fn scale_state(&self) -> ScaleState {
        let items = &self.items;
        self.core.scale_state_with(&|value| set_view(items, value))
    }

    /// Grid over set indices: density and both window ends must be integral.
    #[must_use]
    pub fn grid(&self, density: f64, from: Option<f64>, to: Option<f64>) -> Vec<PointState> {
        if !is_integral(density)
            || !from.is_none_or(is_integral)
            || !to.is_none_or(is_integral)
        {
            return Vec::new();
        }
        let items = &self.items;
        self.core
            .grid_with(density, from, to, &|value| set_view(items, value))
    }

    #[must_use]
    pub(crate) fn core(&self) -> &ScaleCore {
        &self.core
    }
}

fn set_view(items: &[Value], value: f64) -> String {
    let index = value as usize;
    match items.get(index) {
        Some(Value::String(text)) => text.clone(),
        Some(item) => item.to_string(),
        None => value.to_string(),
    }
}

fn is_integral(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

fn is_index(value: f64) -> bool {
    is_integral(value) && value >= 0.0
}

fn is_index_sequence(sequence: &[f64]) -> bool {
    sequence.iter().all(|&value| is_index(value))
        && sequence.windows(2).all(|pair| pair[0] <= pair[1])
}

pub(crate) fn resolve_set_config(config: &SliderConfig) -> SliderResult<ResolvedSetConfig> {
    let items = config
        .set
        .clone()
        .ok_or_else(|| invalid("a set of items is required"))?;
    if items.is_empty() {
        return Err(invalid("the set must not be empty"));
    }
    if items.iter().any(Value::is_null) {
        return Err(invalid("the set must not contain null items"));
    }

    let values = config
        .values
        .clone()
        .ok_or_else(|| invalid("initial point values are required"))?;
    if values.is_empty() {
        return Err(invalid("at least one initial point is required"));
    }

    let last_index = (items.len() - 1) as f64;
    let min = config.min.unwrap_or(0.0);
    let max = config.max.unwrap_or(last_index);
    if !is_index(min) || !is_index(max) || max > last_index {
        return Err(SliderError::InvalidBoundaries { min, max });
    }

    let mut candidate = Vec::with_capacity(values.len() + 2);
    candidate.push(min);
    candidate.extend_from_slice(&values);
    candidate.push(max);
    if !is_index_sequence(&candidate) {
        return Err(invalid(
            "boundaries and values must form a non-decreasing sequence of set indices",
        ));
    }

    let step = config.step.ok_or_else(|| invalid("step is required"))?;
    if !is_integral(step) || step <= 0.0 || step > max - min {
        return Err(invalid("step must be an integer with 0 < step <= max - min"));
    }

    Ok(ResolvedSetConfig {
        items,
        min,
        max,
        values,
        step,
    })
}

fn invalid(message: &str) -> SliderError {
    SliderError::InvalidConfig(message.to_owned())
}
