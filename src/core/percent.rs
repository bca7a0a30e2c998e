//! Percent-of-scale conversion anchored at a `[min, max)` boundary pair.

use tracing::warn;

use crate::core::decimal;

const DEFAULT_MIN: f64 = 0.0;
const DEFAULT_MAX: f64 = 100.0;
const DEFAULT_RATIO: f64 = 1.0;

/// Converter between absolute domain values and percentages of the scale span.
///
/// The ratio for the last accepted boundary pair is cached so repeated
/// conversions cost one decimal-safe operation each.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentScale {
    min: f64,
    max: f64,
    ratio: f64,
}

impl Default for PercentScale {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            ratio: DEFAULT_RATIO,
        }
    }
}

impl PercentScale {
    /// Creates a converter for the given boundary pair, falling back to the
    /// default `[0, 100]` scale when the pair is rejected.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        let mut scale = Self::default();
        scale.set_boundaries(min, max);
        scale
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Re-anchors the scale at a new boundary pair.
    ///
    /// Returns `false` (keeping the previous anchors) unless both values are
    /// finite and `min < max`.
    pub fn set_boundaries(&mut self, min: f64, max: f64) -> bool {
        if !min.is_finite() || !max.is_finite() || min >= max {
            warn!(min, max, "rejecting percent scale boundaries");
            return false;
        }

        self.min = min;
        self.max = max;
        self.ratio = decimal::div(decimal::sub(max, min), 100.0);
        true
    }

    pub fn set_min_boundary(&mut self, min: f64) -> bool {
        self.set_boundaries(min, self.max)
    }

    pub fn set_max_boundary(&mut self, max: f64) -> bool {
        self.set_boundaries(self.min, max)
    }

    /// Expresses an absolute span as a percentage of the scale span.
    #[must_use]
    pub fn convert_to_percent(&self, value: f64) -> f64 {
        decimal::div(value, self.ratio)
    }

    /// Expresses a percentage of the scale span as an absolute span.
    #[must_use]
    pub fn convert_to_value(&self, percent: f64) -> f64 {
        decimal::mul(percent, self.ratio)
    }

    /// Percent position of `value` relative to the `min` anchor.
    #[must_use]
    pub fn reflect_on_scale(&self, value: f64) -> f64 {
        self.convert_offset_to_percent(self.min, value)
    }

    /// Percent length of the offset from `old_value` to `new_value`.
    #[must_use]
    pub fn convert_offset_to_percent(&self, old_value: f64, new_value: f64) -> f64 {
        self.convert_to_percent(decimal::sub(new_value, old_value))
    }

    /// Shifts `value` by `percent_offset` percent of the scale span.
    #[must_use]
    pub fn shift(&self, value: f64, percent_offset: f64) -> f64 {
        decimal::add(value, self.convert_to_value(percent_offset))
    }
}
