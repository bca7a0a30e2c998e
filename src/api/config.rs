use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Discriminant selecting the scale processor variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScaleKind {
    /// Boundaries and point values are arbitrary real numbers.
    #[default]
    Range,
    /// Point values are integer indices into a fixed ordered item list.
    Set,
}

/// Public model bootstrap configuration.
///
/// This type is serializable so host applications can persist/load slider
/// setup without inventing their own ad-hoc format. Every field except the
/// discriminant is optional; a field combination the selected variant cannot
/// accept makes construction fall back to that variant's built-in defaults
/// (with a logged warning), never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SliderConfig {
    #[serde(rename = "type", default)]
    pub kind: ScaleKind,
    /// Lower boundary (a set index for the set variant).
    #[serde(default)]
    pub min: Option<f64>,
    /// Upper boundary (a set index for the set variant).
    #[serde(default)]
    pub max: Option<f64>,
    /// Alternative boundary form for the range variant; wins over `min`/`max`.
    #[serde(default)]
    pub range: Option<[f64; 2]>,
    /// Initial point values (domain units or set indices).
    #[serde(default)]
    pub values: Option<Vec<f64>>,
    /// Ordered item list for the set variant; items must be non-null.
    #[serde(default)]
    pub set: Option<Vec<Value>>,
    /// Quantization unit for point movement.
    #[serde(default)]
    pub step: Option<f64>,
}

impl SliderConfig {
    /// Creates a range configuration with explicit boundaries.
    #[must_use]
    pub fn for_range(min: f64, max: f64, values: Vec<f64>, step: f64) -> Self {
        Self {
            kind: ScaleKind::Range,
            min: Some(min),
            max: Some(max),
            values: Some(values),
            step: Some(step),
            ..Self::default()
        }
    }

    /// Creates a set configuration spanning the whole item list.
    #[must_use]
    pub fn for_set(set: Vec<Value>, values: Vec<f64>, step: f64) -> Self {
        Self {
            kind: ScaleKind::Set,
            set: Some(set),
            values: Some(values),
            step: Some(step),
            ..Self::default()
        }
    }
}
